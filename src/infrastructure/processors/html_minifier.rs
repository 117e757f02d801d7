use crate::core::interfaces::HtmlMinifier;
use crate::utils::{Logger, Result, SiteminError};
use std::path::Path;

pub struct MinifyHtmlProcessor {
    cfg: minify_html::Cfg,
}

impl MinifyHtmlProcessor {
    pub fn new() -> Self {
        Self {
            cfg: minify_html::Cfg {
                // Inline <style> and <script> blocks shrink too
                minify_css: true,
                minify_js: true,
                ..minify_html::Cfg::default()
            },
        }
    }
}

impl Default for MinifyHtmlProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl HtmlMinifier for MinifyHtmlProcessor {
    async fn minify_html(&self, content: &str, path: &Path) -> Result<String> {
        Logger::processing_html(
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown"),
        );

        let minified = minify_html::minify(content.as_bytes(), &self.cfg);

        String::from_utf8(minified)
            .map_err(|_| SiteminError::html(path, "minification produced invalid UTF-8"))
    }
}
