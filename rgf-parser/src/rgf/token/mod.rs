//! Token types shared by the tokenizer, the extractor and the record builders.
//!
//! Two layers live here:
//!
//!     - [Lexeme]: what logos sees in an argument string (quotes, commas and the text
//!       runs between them).
//!     - [ArgValue]: the typed value a whole argument field resolves to.

pub mod core;
pub mod value;

pub use self::core::{scan, Lexeme};
pub use self::value::{classify_bare, ArgValue};
