//! CLI-specific transforms
//!
//! Named views of a macro module for `rgf inspect`. The `*-js` transforms print exactly
//! what `rgf extract` would write; the `*-json` ones print the bare data.

use rgf_config::ExtractConfig;
use rgf_parser::rgf::extraction::ExtractError;
use rgf_parser::rgf::loader::SourceLoader;
use rgf_parser::rgf::records::RecordKind;
use thiserror::Error;

/// All available CLI transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "calls-json",
    "genres-json",
    "accents-json",
    "genres-js",
    "accents-js",
];

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Unknown transform: {0}")]
    Unknown(String),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Execute a named transform on a module's source text
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    config: &ExtractConfig,
) -> Result<String, TransformError> {
    let loader = SourceLoader::from_string(source);
    let options = config.options();

    match transform_name {
        "calls-json" => {
            let genre = loader.calls(&options, RecordKind::Genre)?;
            let accent = loader.calls(&options, RecordKind::Accent)?;
            Ok(serde_json::to_string_pretty(&serde_json::json!({
                "genre": genre,
                "accent": accent,
            }))?)
        }
        "genres-json" => {
            let library = loader.extract(&options)?;
            Ok(serde_json::to_string_pretty(&library.genres)?)
        }
        "accents-json" => {
            let library = loader.extract(&options)?;
            Ok(serde_json::to_string_pretty(&library.accents)?)
        }
        "genres-js" => {
            let library = loader.extract(&options)?;
            Ok(config.module(RecordKind::Genre).render(&library.genres)?)
        }
        "accents-js" => {
            let library = loader.extract(&options)?;
            Ok(config.module(RecordKind::Accent).render(&library.accents)?)
        }
        _ => Err(TransformError::Unknown(transform_name.to_string())),
    }
}
