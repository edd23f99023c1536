//! Lexemes of a macro call's argument list
//!
//! The argument grammar only cares about two characters: the double quote and the
//! comma. Everything else is folded into `Text` runs so the tokenizer state machine
//! sees at most one transition per run instead of one per character.

use logos::Logos;

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
    #[token("\"")]
    Quote,

    #[token(",")]
    Comma,

    // Catch-all for everything that is neither a quote nor a comma
    #[regex(r#"[^",]+"#)]
    Text,
}

impl Lexeme {
    /// Check if this lexeme opens, closes or escapes a string literal
    pub fn is_quote(&self) -> bool {
        matches!(self, Lexeme::Quote)
    }

    /// Check if this lexeme terminates an unquoted field
    pub fn is_separator(&self) -> bool {
        matches!(self, Lexeme::Comma)
    }
}

/// Scan an argument string into lexemes paired with the text they cover.
///
/// `Text` covers every character that is not a quote or a comma, so logos never
/// reports an error here; should it ever, the offending slice is kept as text.
pub fn scan(source: &str) -> Vec<(Lexeme, &str)> {
    let mut lexer = Lexeme::lexer(source);
    let mut lexemes = Vec::new();

    while let Some(result) = lexer.next() {
        let lexeme = result.unwrap_or(Lexeme::Text);
        lexemes.push((lexeme, lexer.slice()));
    }

    lexemes
}
