//! Normal / InString state machine over argument lexemes

use super::common::TokenizeError;
use crate::rgf::token::{classify_bare, scan, ArgValue, Lexeme};
use std::iter::Peekable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Normal,
    InString,
}

/// What the driver does with the lookahead lexeme after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Leave the lookahead for the next transition
    One,
    /// The lookahead was part of this transition (an escaped quote)
    Two,
}

/// Accumulates one argument list.
///
/// Feed lexemes through [transition](ArgumentTokenizer::transition) and close the
/// list with [finish](ArgumentTokenizer::finish).
#[derive(Debug, Clone)]
pub struct ArgumentTokenizer {
    state: ScanState,
    buffer: String,
    values: Vec<ArgValue>,
    string_start: usize,
}

impl ArgumentTokenizer {
    pub fn new() -> Self {
        Self {
            state: ScanState::Normal,
            buffer: String::new(),
            values: Vec::new(),
            string_start: 0,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn values(&self) -> &[ArgValue] {
        &self.values
    }

    /// Apply one lexeme. `offset` is the lexeme's byte position in the argument string,
    /// `lookahead` the kind of the lexeme that follows it.
    pub fn transition(
        &mut self,
        lexeme: Lexeme,
        text: &str,
        offset: usize,
        lookahead: Option<Lexeme>,
    ) -> Advance {
        match (self.state, lexeme) {
            (ScanState::Normal, Lexeme::Quote) => {
                self.state = ScanState::InString;
                self.string_start = offset;
            }
            (ScanState::Normal, Lexeme::Comma) => self.flush_bare(),
            (ScanState::Normal, Lexeme::Text) => self.buffer.push_str(text),
            (ScanState::InString, Lexeme::Quote) if lookahead == Some(Lexeme::Quote) => {
                self.buffer.push('"');
                return Advance::Two;
            }
            (ScanState::InString, Lexeme::Quote) => {
                let literal = std::mem::take(&mut self.buffer);
                self.values.push(ArgValue::String(literal));
                self.state = ScanState::Normal;
            }
            (ScanState::InString, _) => self.buffer.push_str(text),
        }
        Advance::One
    }

    /// Close the list. `input` is only used to describe an unterminated string.
    pub fn finish(mut self, input: &str) -> Result<Vec<ArgValue>, TokenizeError> {
        if self.state == ScanState::InString {
            return Err(TokenizeError::UnterminatedString {
                input: input.to_string(),
                offset: self.string_start,
            });
        }
        self.flush_bare();
        Ok(self.values)
    }

    fn flush_bare(&mut self) {
        if let Some(value) = classify_bare(&self.buffer) {
            self.values.push(value);
        }
        self.buffer.clear();
    }
}

impl Default for ArgumentTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenize a whole argument list into typed values, in source order.
pub fn tokenize_arguments(input: &str) -> Result<Vec<ArgValue>, TokenizeError> {
    let mut tokenizer = ArgumentTokenizer::new();
    let mut lexemes: Peekable<_> = scan(input).into_iter().peekable();
    let mut offset = 0;

    while let Some((lexeme, text)) = lexemes.next() {
        let lookahead = lexemes.peek().map(|(next, _)| *next);
        offset += match tokenizer.transition(lexeme, text, offset, lookahead) {
            Advance::One => text.len(),
            Advance::Two => {
                let (_, escaped) = lexemes.next().unwrap_or((Lexeme::Quote, "\""));
                text.len() + escaped.len()
            }
        };
    }

    tokenizer.finish(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> ArgValue {
        ArgValue::String(value.to_string())
    }

    fn raw(value: &str) -> ArgValue {
        ArgValue::Raw(value.to_string())
    }

    #[test]
    fn test_mixed_fields() {
        let values = tokenize_arguments(r#""Drill", 0.2, HOOK_PLAN"#).unwrap();
        assert_eq!(values, vec![s("Drill"), ArgValue::Number(0.2), raw("HOOK_PLAN")]);
    }

    #[test]
    fn test_doubled_quote_escape() {
        let values = tokenize_arguments(r#""He said ""hi""""#).unwrap();
        assert_eq!(values, vec![s(r#"He said "hi""#)]);
    }

    #[test]
    fn test_empty_string_literal() {
        assert_eq!(tokenize_arguments(r#""""#).unwrap(), vec![s("")]);
    }

    #[test]
    fn test_string_opening_with_escaped_quote() {
        assert_eq!(tokenize_arguments(r#""""a""#).unwrap(), vec![s("\"a")]);
    }

    #[test]
    fn test_leading_text_joins_string() {
        let values = tokenize_arguments(r#""a", "b""#).unwrap();
        assert_eq!(values, vec![s("a"), s(" b")]);
    }

    #[test]
    fn test_quoted_numeral_stays_string() {
        assert_eq!(tokenize_arguments(r#""120""#).unwrap(), vec![s("120")]);
    }

    #[test]
    fn test_string_contents_are_verbatim() {
        let values = tokenize_arguments(r#""  a, b  ""#).unwrap();
        assert_eq!(values, vec![s("  a, b  ")]);
    }

    #[test]
    fn test_empty_fields_are_skipped() {
        let values = tokenize_arguments("1,, ,2,").unwrap();
        assert_eq!(values, vec![ArgValue::Number(1.0), ArgValue::Number(2.0)]);
    }

    #[test]
    fn test_trailing_continuation() {
        let values = tokenize_arguments("120 _").unwrap();
        assert_eq!(values, vec![ArgValue::Number(120.0)]);
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize_arguments(r#"1, "abc"#).unwrap_err();
        assert_eq!(
            err,
            TokenizeError::UnterminatedString {
                input: r#"1, "abc"#.to_string(),
                offset: 3,
            }
        );
        assert!(err.to_string().contains("unterminated string"));
    }

    #[test]
    fn test_escaped_quote_at_end_is_unterminated() {
        assert!(tokenize_arguments(r#""abc"""#).is_err());
    }

    #[test]
    fn test_state_machine_steps() {
        let mut tokenizer = ArgumentTokenizer::new();
        assert_eq!(tokenizer.state(), ScanState::Normal);

        tokenizer.transition(Lexeme::Quote, "\"", 0, Some(Lexeme::Quote));
        assert_eq!(tokenizer.state(), ScanState::InString);

        let advance = tokenizer.transition(Lexeme::Quote, "\"", 1, Some(Lexeme::Quote));
        assert_eq!(advance, Advance::Two);
        assert_eq!(tokenizer.state(), ScanState::InString);

        tokenizer.transition(Lexeme::Quote, "\"", 3, None);
        assert_eq!(tokenizer.state(), ScanState::Normal);
        assert_eq!(tokenizer.values(), &[s("\"")]);
    }
}
