//! Call-line extraction
//!
//! A call line is a source line whose trimmed form starts with
//! `<keyword> <receiver>,`, e.g. `AddGenreRow ws, r, "Drill", ...`. The receiver
//! arguments (worksheet and row cursor in the macro module) carry no data and are
//! dropped; the rest of the line is tokenized.
//!
//! Lines that only mention the keyword (the `Sub` definition, comments, calls with a
//! different receiver) are not call lines and are skipped silently.

use crate::rgf::lexing::{tokenize_arguments, TokenizeError};
use crate::rgf::records::ArityError;
use crate::rgf::token::ArgValue;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

/// Receiver arguments every data call in the macro module passes first
pub const DEFAULT_RECEIVER: &str = "ws, r";

/// Errors that abort an extraction run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractError {
    #[error("line {line}: {source}")]
    Tokenize {
        line: usize,
        #[source]
        source: TokenizeError,
    },
    #[error(transparent)]
    Arity(#[from] ArityError),
}

/// The keyword and receiver that identify one kind of call line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub keyword: String,
    pub receiver: String,
}

impl CallSite {
    pub fn new(keyword: impl Into<String>, receiver: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            receiver: receiver.into(),
        }
    }

    /// Call site with the module's standard `ws, r` receiver
    pub fn with_default_receiver(keyword: impl Into<String>) -> Self {
        Self::new(keyword, DEFAULT_RECEIVER)
    }

    /// Literal prefix a trimmed line must start with
    pub fn prefix(&self) -> String {
        format!("{} {},", self.keyword, self.receiver)
    }

    /// Return the argument text of `line` if it is a call line for this site.
    pub fn match_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.trim()
            .strip_prefix(self.prefix().as_str())
            .map(str::trim)
    }
}

/// One matched call: its 1-based source line and its data arguments
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallRow {
    pub line: usize,
    pub args: Vec<ArgValue>,
}

/// Collect the argument lists of every call line for `site`, in source order.
pub fn extract_calls(source: &str, site: &CallSite) -> Result<Vec<CallRow>, ExtractError> {
    let mut rows = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let Some(arguments) = site.match_line(line) else {
            continue;
        };
        let line_number = index + 1;
        let args = tokenize_arguments(arguments).map_err(|source| {
            ExtractError::Tokenize {
                line: line_number,
                source,
            }
        })?;
        trace!(line = line_number, fields = args.len(), "matched {}", site.keyword);
        rows.push(CallRow {
            line: line_number,
            args,
        });
    }

    debug!(keyword = %site.keyword, rows = rows.len(), "extracted call lines");
    Ok(rows)
}
