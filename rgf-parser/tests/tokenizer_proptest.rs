//! Property-based tests for the argument tokenizer
//!
//! These check the tokenizer's guarantees over generated argument lists:
//! - quoted content survives escaping exactly, whatever it looks like
//! - unquoted numerals always become numbers, other bare fields raw values
//! - an opened string that never closes is always an error
//! - tokenizing is deterministic

use proptest::prelude::*;
use rgf_parser::rgf::lexing::{tokenize_arguments, TokenizeError};
use rgf_parser::rgf::token::ArgValue;

/// Quote a value the way the macro module does
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Generate field contents, including quotes, commas and numeral look-alikes
fn content_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[^\n]{0,24}",
        "[a-z ,\"]{0,16}",
        "[0-9.]{1,6}",
    ]
}

/// Generate bare identifiers as the module references constants
fn identifier_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,12}"
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_quoted_content_round_trips(content in content_strategy()) {
            let values = tokenize_arguments(&quote(&content)).unwrap();
            prop_assert_eq!(values, vec![ArgValue::String(content)]);
        }

        #[test]
        fn test_quoted_fields_keep_count_and_order(
            contents in prop::collection::vec(content_strategy(), 1..8)
        ) {
            let input = contents.iter().map(|c| quote(c)).collect::<Vec<_>>().join(",");
            let values = tokenize_arguments(&input).unwrap();
            let expected: Vec<ArgValue> = contents.into_iter().map(ArgValue::String).collect();
            prop_assert_eq!(values, expected);
        }

        #[test]
        fn test_bare_numerals_are_numbers(
            number in -1.0e6f64..1.0e6f64,
            continuation in proptest::bool::ANY,
        ) {
            let input = if continuation {
                format!(" {} _", number)
            } else {
                format!(" {} ", number)
            };
            let values = tokenize_arguments(&input).unwrap();
            prop_assert_eq!(values, vec![ArgValue::Number(number)]);
        }

        #[test]
        fn test_bare_identifiers_are_raw(ident in identifier_strategy()) {
            let values = tokenize_arguments(&format!("  {}  ", ident)).unwrap();
            let expected = ident.strip_suffix('_').unwrap_or(&ident).to_string();
            prop_assert_eq!(values, vec![ArgValue::Raw(expected)]);
        }

        #[test]
        fn test_unclosed_string_is_an_error(content in "[^\"]{0,24}") {
            let input = format!("1, \"{}", content);
            let result = tokenize_arguments(&input);
            let is_unterminated = matches!(result, Err(TokenizeError::UnterminatedString { offset: 3, .. }));
            prop_assert!(is_unterminated, "expected unterminated string for {:?}", input);
        }

        #[test]
        fn test_tokenizing_is_deterministic(input in "[^\n]{0,48}") {
            prop_assert_eq!(tokenize_arguments(&input), tokenize_arguments(&input));
        }
    }
}
