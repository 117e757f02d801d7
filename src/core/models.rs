use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Suffix marking a stylesheet that is already minified and must be left alone
pub const MINIFIED_CSS_SUFFIX: &str = ".min.css";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinifyConfig {
    #[serde(default = "default_roots")]
    pub roots: Vec<PathBuf>,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    #[serde(default = "default_true")]
    pub parallel: bool,
}

fn default_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("__site")]
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for MinifyConfig {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            assets_dir: default_assets_dir(),
            parallel: true,
        }
    }
}

impl MinifyConfig {
    /// Load `sitemin.config.json` from the working directory, falling back
    /// to defaults when the file does not exist
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new("sitemin.config.json"))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };

        Ok(config)
    }
}

/// File classes the post-processor knows how to minify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Html,
    Css,
}

impl FileKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "html" => Some(FileKind::Html),
            "css" => Some(FileKind::Css),
            _ => None,
        }
    }
}

/// Candidate files discovered under the configured roots
#[derive(Debug, Default)]
pub struct SiteStructure {
    pub html_files: Vec<PathBuf>,
    pub css_files: Vec<PathBuf>,
}

impl SiteStructure {
    pub fn merge(&mut self, other: SiteStructure) {
        self.html_files.extend(other.html_files);
        self.css_files.extend(other.css_files);
    }

    pub fn is_empty(&self) -> bool {
        self.html_files.is_empty() && self.css_files.is_empty()
    }
}

/// Outcome of a post-processing run
#[derive(Debug, Default)]
pub struct RunReport {
    pub html_files_processed: usize,
    pub css_files_processed: usize,
    pub bytes_before: usize,
    pub bytes_after: usize,
    pub run_time: std::time::Duration,
}

impl RunReport {
    pub fn bytes_saved(&self) -> usize {
        self.bytes_before.saturating_sub(self.bytes_after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = MinifyConfig::default();
        assert_eq!(config.roots, vec![PathBuf::from("__site")]);
        assert_eq!(config.assets_dir, "assets");
        assert!(config.parallel);
    }

    #[test]
    fn test_config_partial_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("sitemin.config.json");
        std::fs::write(&path, r#"{ "roots": ["public"] }"#).unwrap();

        let config = MinifyConfig::load_from(&path).unwrap();
        assert_eq!(config.roots, vec![PathBuf::from("public")]);
        // Unspecified fields fall back to defaults
        assert_eq!(config.assets_dir, "assets");
        assert!(config.parallel);
    }

    #[test]
    fn test_config_missing_file() {
        let config = MinifyConfig::load_from(Path::new("does-not-exist.json")).unwrap();
        assert_eq!(config.roots, vec![PathBuf::from("__site")]);
    }

    #[test]
    fn test_file_kind_from_extension() {
        assert_eq!(FileKind::from_extension("html"), Some(FileKind::Html));
        assert_eq!(FileKind::from_extension("HTML"), Some(FileKind::Html));
        assert_eq!(FileKind::from_extension("css"), Some(FileKind::Css));
        assert_eq!(FileKind::from_extension("js"), None);
        assert_eq!(FileKind::from_extension("png"), None);
    }
}
