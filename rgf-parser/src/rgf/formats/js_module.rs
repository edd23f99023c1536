//! `export const NAME = [...];` rendering

use serde::Serialize;

/// Banner written at the top of every generated module
pub const DEFAULT_BANNER: &str = "// Auto-generated from VBA module by rgf extract";

/// A generated ES module binding one exported constant to a JSON array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsModule {
    pub banner: String,
    pub export_name: String,
}

impl JsModule {
    pub fn new(banner: impl Into<String>, export_name: impl Into<String>) -> Self {
        Self {
            banner: banner.into(),
            export_name: export_name.into(),
        }
    }

    pub fn with_default_banner(export_name: impl Into<String>) -> Self {
        Self::new(DEFAULT_BANNER, export_name)
    }

    /// Render the records as a two-space indented array bound to the export.
    pub fn render<T: Serialize>(&self, records: &[T]) -> Result<String, serde_json::Error> {
        let body = serde_json::to_string_pretty(records)?;
        let mut out = String::with_capacity(body.len() + self.banner.len() + 64);
        let banner = self.banner.trim_end_matches(['\r', '\n']);
        if !banner.is_empty() {
            out.push_str(banner);
            out.push('\n');
        }
        out.push_str("export const ");
        out.push_str(&self.export_name);
        out.push_str(" = ");
        out.push_str(&body);
        out.push_str(";\n");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rgf::token::ArgValue;

    #[test]
    fn test_empty_table() {
        let module = JsModule::with_default_banner("ACCENT_LIBRARY");
        let rendered = module.render::<ArgValue>(&[]).unwrap();
        assert_eq!(
            rendered,
            "// Auto-generated from VBA module by rgf extract\nexport const ACCENT_LIBRARY = [];\n"
        );
    }

    #[test]
    fn test_banner_newlines_are_normalized() {
        let module = JsModule::new("// generated\n", "X");
        let rendered = module.render(&[ArgValue::Number(1.0)]).unwrap();
        assert_eq!(rendered, "// generated\nexport const X = [\n  1.0\n];\n");
    }

    #[test]
    fn test_empty_banner_is_omitted() {
        let module = JsModule::new("", "X");
        let rendered = module.render::<ArgValue>(&[]).unwrap();
        assert_eq!(rendered, "export const X = [];\n");
    }
}
