//! Source loading utilities
//!
//! `SourceLoader` holds the full text of a macro module and runs the extraction over
//! it. The text is read in one go and released with the loader; no partial results are
//! ever handed out, so either both tables validate or the caller gets an error.
//!
//! # Example
//!
//! ```rust
//! use rgf_parser::rgf::loader::{load_library, ExtractOptions};
//!
//! let library = load_library("RGF_Module.bas", &ExtractOptions::default())?;
//! println!("{} genres", library.genres.len());
//! ```

use crate::rgf::extraction::{extract_calls, CallRow, CallSite, ExtractError, DEFAULT_RECEIVER};
use crate::rgf::records::{assemble, AccentRow, GenreRow, RecordKind};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Error that can occur when loading and extracting a module
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// The call sites to extract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub genre: CallSite,
    pub accent: CallSite,
}

impl ExtractOptions {
    pub fn site(&self, kind: RecordKind) -> &CallSite {
        match kind {
            RecordKind::Genre => &self.genre,
            RecordKind::Accent => &self.accent,
        }
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            genre: CallSite::new(RecordKind::Genre.default_keyword(), DEFAULT_RECEIVER),
            accent: CallSite::new(RecordKind::Accent.default_keyword(), DEFAULT_RECEIVER),
        }
    }
}

/// Both tables of one module, in source order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Library {
    pub genres: Vec<GenreRow>,
    pub accents: Vec<AccentRow>,
}

impl Library {
    pub fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Genre => self.genres.len(),
            RecordKind::Accent => self.accents.len(),
        }
    }
}

pub struct SourceLoader {
    source: String,
}

impl SourceLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(SourceLoader { source })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        SourceLoader {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Raw argument lists for one kind, before arity validation
    pub fn calls(
        &self,
        options: &ExtractOptions,
        kind: RecordKind,
    ) -> Result<Vec<CallRow>, ExtractError> {
        extract_calls(&self.source, options.site(kind))
    }

    /// Extract and validate both tables.
    pub fn extract(&self, options: &ExtractOptions) -> Result<Library, ExtractError> {
        let genre_rows = self.calls(options, RecordKind::Genre)?;
        let accent_rows = self.calls(options, RecordKind::Accent)?;

        let library = Library {
            genres: assemble(genre_rows)?,
            accents: assemble(accent_rows)?,
        };
        debug!(
            genres = library.genres.len(),
            accents = library.accents.len(),
            "assembled library"
        );
        Ok(library)
    }
}

/// Read a module from disk and extract both tables.
pub fn load_library<P: AsRef<Path>>(
    path: P,
    options: &ExtractOptions,
) -> Result<Library, LoaderError> {
    Ok(SourceLoader::from_path(path)?.extract(options)?)
}
