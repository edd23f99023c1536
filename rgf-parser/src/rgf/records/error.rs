//! Row validation errors

use super::RecordKind;
use crate::rgf::token::ArgValue;
use thiserror::Error;

/// A call row whose field count differs from its record kind's arity
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "line {line}: unexpected {kind} row length {} (expected {}) for [{}]",
    .args.len(),
    .kind.arity(),
    describe_args(.args)
)]
pub struct ArityError {
    pub kind: RecordKind,
    pub line: usize,
    pub args: Vec<ArgValue>,
}

impl ArityError {
    pub fn new(kind: RecordKind, line: usize, args: Vec<ArgValue>) -> Self {
        Self { kind, line, args }
    }

    pub fn expected(&self) -> usize {
        self.kind.arity()
    }

    pub fn found(&self) -> usize {
        self.args.len()
    }
}

fn describe_args(args: &[ArgValue]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_row() {
        let err = ArityError::new(
            RecordKind::Accent,
            12,
            vec![
                ArgValue::String("Neutral".to_string()),
                ArgValue::Number(2.0),
            ],
        );
        assert_eq!(
            err.to_string(),
            r#"line 12: unexpected accent row length 2 (expected 3) for ["Neutral", 2]"#
        );
    }
}
