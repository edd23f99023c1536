//! Fixed-arity records
//!
//! Each call line becomes exactly one record. The arity is part of the contract with
//! the macro module: a row with too few or too many fields is rejected, never padded
//! or truncated, because a shifted column would silently corrupt the page's data.

pub mod accent;
pub mod error;
pub mod genre;

pub use accent::AccentRow;
pub use error::ArityError;
pub use genre::{GenreRow, GenreWeights};

use crate::rgf::extraction::CallRow;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Genre,
    Accent,
}

impl RecordKind {
    pub const ALL: [RecordKind; 2] = [RecordKind::Genre, RecordKind::Accent];

    /// Number of data arguments a call must carry
    pub fn arity(self) -> usize {
        match self {
            RecordKind::Genre => GenreRow::ARITY,
            RecordKind::Accent => AccentRow::ARITY,
        }
    }

    pub fn default_keyword(self) -> &'static str {
        match self {
            RecordKind::Genre => "AddGenreRow",
            RecordKind::Accent => "AddAccentRow",
        }
    }

    pub fn default_export(self) -> &'static str {
        match self {
            RecordKind::Genre => "GENRE_LIBRARY",
            RecordKind::Accent => "ACCENT_LIBRARY",
        }
    }

    pub fn default_file_name(self) -> &'static str {
        match self {
            RecordKind::Genre => "genres.js",
            RecordKind::Accent => "accents.js",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Genre => write!(f, "genre"),
            RecordKind::Accent => write!(f, "accent"),
        }
    }
}

/// A record built from one call row.
pub trait Record: Sized + Serialize {
    const KIND: RecordKind;
    const ARITY: usize;

    /// Build the record, failing when the row does not have exactly `ARITY` fields.
    fn from_row(row: CallRow) -> Result<Self, ArityError>;
}

/// Assemble every row into records, stopping at the first arity mismatch.
pub fn assemble<R: Record>(rows: Vec<CallRow>) -> Result<Vec<R>, ArityError> {
    rows.into_iter().map(R::from_row).collect()
}
