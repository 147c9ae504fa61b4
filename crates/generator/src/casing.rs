//! Identifier case conversion

/// Convert a CamelCase identifier to snake_case
///
/// Single left-to-right scan with two characters of lookahead. A boundary
/// is emitted after position `i` when:
/// 1. `i + 1` is upper-case and `i + 2` is lower-case (`IAMPolicy` splits
///    before `Policy`), or
/// 2. `i` is lower-case or a digit and `i + 1` is upper-case.
///
/// Underscores pass through and never produce a boundary themselves. The
/// conversion is lossy for acronym runs and is not meant to round-trip.
///
/// # Examples
/// ```
/// use cpp_client_codegen_generator::camel_case_to_snake_case;
///
/// assert_eq!(camel_case_to_snake_case("TopicAdminClient"), "topic_admin_client");
/// assert_eq!(camel_case_to_snake_case("IAMPolicy"), "iam_policy");
/// ```
pub fn camel_case_to_snake_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut output = String::with_capacity(input.len() + input.len() / 2);

    for (i, &ch) in chars.iter().enumerate() {
        output.push(ch.to_ascii_lowercase());
        if ch == '_' {
            continue;
        }

        let starts_acronym_tail = i + 2 < chars.len()
            && chars[i + 1].is_ascii_uppercase()
            && chars[i + 2].is_ascii_lowercase();
        let ends_word = i + 1 < chars.len()
            && (ch.is_ascii_lowercase() || ch.is_ascii_digit())
            && chars[i + 1].is_ascii_uppercase();

        if starts_acronym_tail || ends_word {
            output.push('_');
        }
    }

    output
}
