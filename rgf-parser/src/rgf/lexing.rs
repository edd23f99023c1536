//! Argument tokenizer
//!
//!     Turns the argument list of one macro call into typed values. The input is the text
//!     after the call's receiver prefix, up to the end of the line, e.g.
//!
//!         "Drill", "138-146 bpm feel", 0.2, 0.24, HOOK_PLAN _
//!
//! The Pipeline
//!
//!     1. Lexeme scanning with logos. See [scan](crate::rgf::token::scan). Quotes and
//!        commas are the only structural characters; everything else is a text run.
//!
//!     2. The two-state machine in [arguments]. `Normal` accumulates bare text and flushes
//!        it on commas; `InString` accumulates literal text until an unescaped quote. A
//!        doubled quote inside a string is the only escape, and needs one lexeme of
//!        lookahead.
//!
//!     3. Bare fields are classified by [classify_bare](crate::rgf::token::classify_bare)
//!        into numbers or raw values. Quoted fields are never reinterpreted.
//!
//! Quirks Worth Knowing
//!
//!     Text seen in `Normal` state before an opening quote is not thrown away: it becomes
//!     the head of the string value. The macro module writes `, "Drill"` so the space
//!     after the comma ends up inside every string value, and the page relies on the
//!     values exactly as the module spells them.

pub mod arguments;
pub mod common;

pub use arguments::{tokenize_arguments, ArgumentTokenizer, ScanState};
pub use common::TokenizeError;
