//! Accent rows: `AddAccentRow ws, r, name, instruction, styleTag`

use super::{ArityError, Record, RecordKind};
use crate::rgf::extraction::CallRow;
use crate::rgf::token::ArgValue;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccentRow {
    pub name: ArgValue,
    pub instruction: ArgValue,
    pub style_tag: ArgValue,
}

impl Record for AccentRow {
    const KIND: RecordKind = RecordKind::Accent;
    const ARITY: usize = 3;

    fn from_row(row: CallRow) -> Result<Self, ArityError> {
        let CallRow { line, args } = row;
        let [name, instruction, style_tag] = <[ArgValue; 3]>::try_from(args)
            .map_err(|args| ArityError::new(Self::KIND, line, args))?;
        Ok(AccentRow {
            name,
            instruction,
            style_tag,
        })
    }
}
