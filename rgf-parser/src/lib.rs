//! # rgf-parser
//!
//! Extracts the genre and accent tables that the RGF macro module builds through
//! `AddGenreRow` / `AddAccentRow` calls, and renders them as browser data modules.
//!
//! Layout
//!
//!     src/rgf
//!       ├── token        Lexemes (logos) and typed argument values
//!       ├── lexing       Argument-list tokenizer (Normal / InString state machine)
//!       ├── extraction   Call-line filtering per call site
//!       ├── records      Fixed-arity genre / accent rows
//!       ├── formats      JS module rendering
//!       ├── loader       Source loading and the full extraction run
//!       ├── transforms   Named inspection transforms
//!       ├── patching     Fragment fixups for the page's app script
//!       └── testing      Verified sample modules for tests
//!
//! For testing guidelines, see the [testing module](rgf::testing).

pub mod rgf;
