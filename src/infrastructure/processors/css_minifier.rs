use crate::core::interfaces::CssMinifier;
use crate::utils::{Logger, Result, SiteminError};
use lightningcss::{
    printer::PrinterOptions,
    stylesheet::{ParserOptions as CssParserOptions, StyleSheet},
};
use std::path::Path;

pub struct LightningCssMinifier;

impl LightningCssMinifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LightningCssMinifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CssMinifier for LightningCssMinifier {
    async fn minify_css(&self, content: &str, path: &Path) -> Result<String> {
        Logger::processing_css(
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown"),
        );

        // A malformed stylesheet aborts the build rather than passing
        // through half-minified output
        let stylesheet = StyleSheet::parse(content, CssParserOptions::default())
            .map_err(|e| SiteminError::css(path, e.to_string()))?;

        let result = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| SiteminError::css(path, e.to_string()))?;

        Ok(result.code)
    }
}
