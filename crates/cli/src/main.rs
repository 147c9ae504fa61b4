//! cpp-client-codegen CLI
//!
//! Command-line interface for deriving file paths, namespaces and include
//! directives for generated C++ client libraries.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use cpp_client_codegen_common::NamespaceKind;
use cpp_client_codegen_generator::{
    build_namespaces, derive_service_namings, local_include, service_name_to_file_path,
    system_include, GeneratorParameters, ServiceNaming,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cpp-client-codegen")]
#[command(version, about = "Derive names for generated C++ client libraries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the generated file path for each service
    #[command(after_help = "EXAMPLES:\n  \
        cpp-client-codegen file-path google.pubsub.v1.PublisherService")]
    FilePath {
        /// Dotted service names
        #[arg(required = true)]
        services: Vec<String>,
    },

    /// Print the namespace chain for the configured product
    #[command(after_help = "EXAMPLES:\n  \
        cpp-client-codegen namespaces -p product_path=google/cloud/pubsub\n  \
        cpp-client-codegen namespaces -p product_path=google/cloud/pubsub --internal")]
    Namespaces {
        /// Generator parameter string (e.g. "product_path=google/cloud/pubsub")
        #[arg(short, long)]
        parameter: String,

        /// Build the internal namespace chain
        #[arg(long)]
        internal: bool,
    },

    /// Print an include directive
    Include {
        /// Header name
        header: String,

        /// Use angle brackets instead of quotes
        #[arg(long)]
        system: bool,
    },

    /// Derive every name for each service
    #[command(after_help = "EXAMPLES:\n  \
        cpp-client-codegen derive \\\n    \
        -p product_path=google/cloud/pubsub \\\n    \
        google.pubsub.v1.PublisherService google.pubsub.v1.SubscriberService\n\n  \
        # Machine-readable output\n  \
        cpp-client-codegen derive -p product_path=pubsub google.pubsub.v1.Publisher --json")]
    Derive {
        /// Generator parameter string (e.g. "product_path=google/cloud/pubsub")
        #[arg(short, long)]
        parameter: String,

        /// Dotted service names
        #[arg(required = true)]
        services: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::FilePath { services } => file_path_command(&services)?,
        Commands::Namespaces {
            parameter,
            internal,
        } => {
            let kind = if internal {
                NamespaceKind::Internal
            } else {
                NamespaceKind::Public
            };
            namespaces_command(&parameter, kind)?;
        }
        Commands::Include { header, system } => {
            let directive = if system {
                system_include(&header)
            } else {
                local_include(&header)
            };
            print!("{}", directive);
        }
        Commands::Derive {
            parameter,
            services,
            json,
        } => derive_command(&parameter, &services, json)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn file_path_command(services: &[String]) -> Result<()> {
    for service in services {
        if service.is_empty() {
            anyhow::bail!("Service name must not be empty");
        }
        println!("{}", service_name_to_file_path(service));
    }
    Ok(())
}

fn namespaces_command(parameter: &str, kind: NamespaceKind) -> Result<()> {
    let params =
        GeneratorParameters::parse(parameter).context("Invalid generator parameters")?;
    let chain = build_namespaces(&params, kind);

    for (depth, name) in chain.iter().enumerate() {
        let is_inline = depth + 1 == chain.len();
        if is_inline {
            println!("{}inline namespace {}", "  ".repeat(depth), name.yellow());
        } else {
            println!("{}namespace {}", "  ".repeat(depth), name.cyan());
        }
    }
    Ok(())
}

fn derive_command(parameter: &str, services: &[String], json: bool) -> Result<()> {
    if services.iter().any(String::is_empty) {
        anyhow::bail!("Service name must not be empty");
    }

    tracing::debug!(services = services.len(), json, "deriving service naming");
    let namings = derive_service_namings(parameter, services)
        .context("Failed to derive service naming")?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&namings).context("Failed to serialize naming")?;
        println!("{}", rendered);
        return Ok(());
    }

    for naming in &namings {
        print_naming(naming);
    }
    println!(
        "\n{} Derived naming for {} service(s)",
        "✓".green(),
        namings.len()
    );
    Ok(())
}

fn print_naming(naming: &ServiceNaming) {
    println!("\n{}", naming.service_name.bold());
    println!("  Product path:        {}", naming.product_path);
    println!("  File path:           {}", naming.file_path.cyan());
    println!("  Header:              {}", naming.header_path);
    println!("  Source:              {}", naming.source_path);
    println!("  Namespaces:          {}", naming.namespaces);
    println!("  Internal namespaces: {}", naming.internal_namespaces);
}
