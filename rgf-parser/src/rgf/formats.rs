//! Output formats
//!
//! The page imports the extracted tables as ES modules, one exported constant per
//! table. [js_module] renders that shape; JSON output for inspection goes straight
//! through `serde_json`.

pub mod js_module;

pub use js_module::{JsModule, DEFAULT_BANNER};
