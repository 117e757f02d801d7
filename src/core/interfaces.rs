use crate::core::models::*;
use crate::utils::Result;
use async_trait::async_trait;
use std::path::Path;

/// File system operations interface
#[async_trait]
pub trait FileSystemService: Send + Sync {
    /// Recursively discover minification candidates under `root`,
    /// skipping the `assets_dir` subtree and already-minified CSS
    async fn scan_site(&self, root: &Path, assets_dir: &str) -> Result<SiteStructure>;
    async fn read_file(&self, path: &Path) -> Result<String>;
    async fn write_file(&self, path: &Path, content: &str) -> Result<()>;
    fn file_exists(&self, path: &Path) -> bool;
}

/// HTML minification interface
#[async_trait]
pub trait HtmlMinifier: Send + Sync {
    async fn minify_html(&self, content: &str, path: &Path) -> Result<String>;
}

/// CSS minification interface
#[async_trait]
pub trait CssMinifier: Send + Sync {
    async fn minify_css(&self, content: &str, path: &Path) -> Result<String>;
}

/// Post-processing service interface
#[async_trait]
pub trait PostProcessor: Send + Sync {
    async fn run(&self, config: &MinifyConfig) -> Result<RunReport>;
}
