//! Testing utilities
//!
//!     Test content for the extractor must look like the macro module the page is built
//!     from. Hand-writing `AddGenreRow` lines inside test bodies gets the receiver, the
//!     quoting or the field count subtly wrong, and a test against an illegal line tunes
//!     the extractor to the wrong thing.
//!
//!     So module-level tests load their source from the curated files under `samples/`
//!     through [Samples](samples::Samples):
//!
//!     ```rust,ignore
//!     use rgf_parser::rgf::testing::samples::Samples;
//!
//!     let source = Samples::module(1);
//!     let library = SourceLoader::from_string(source).extract(&ExtractOptions::default())?;
//!     ```
//!
//!     Single argument lists (one line's worth, after the receiver) are fine inline in
//!     tokenizer tests; they are the unit under test there.
//!
//! The Samples
//!
//!     1. minimal: two genres, three accents, plus the `Sub` definitions, comments and
//!        constants that must not match.
//!     2. quirks: escaped quotes, raw constants, a trailing continuation marker and call
//!        shapes that look like data but are not.
//!     3. short-genre: the second genre row has 14 fields.
//!     4. unterminated: the second accent row never closes its last string.

pub mod samples;
