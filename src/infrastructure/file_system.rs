use crate::core::{interfaces::FileSystemService, models::*};
use crate::utils::{Result, SiteminError};
use std::path::{Path, PathBuf};
use tokio::fs;

pub struct TokioFileSystemService;

impl TokioFileSystemService {
    async fn collect_files_recursive(
        &self,
        dir: &Path,
        assets_root: &Path,
        files: &mut Vec<PathBuf>,
    ) -> Result<()> {
        let mut entries = fs::read_dir(dir).await.map_err(SiteminError::Io)?;

        while let Some(entry) = entries.next_entry().await.map_err(SiteminError::Io)? {
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            } else if path.is_dir() && path != assets_root {
                Box::pin(self.collect_files_recursive(&path, assets_root, files)).await?;
            }
        }

        Ok(())
    }

    fn classify(path: PathBuf, structure: &mut SiteStructure) {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        match FileKind::from_extension(&extension) {
            Some(FileKind::Html) => structure.html_files.push(path),
            Some(FileKind::Css) => {
                // Already-minified stylesheets are left untouched
                let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
                if !name.ends_with(MINIFIED_CSS_SUFFIX) {
                    structure.css_files.push(path);
                }
            }
            None => {}
        }
    }
}

#[async_trait::async_trait]
impl FileSystemService for TokioFileSystemService {
    async fn scan_site(&self, root: &Path, assets_dir: &str) -> Result<SiteStructure> {
        let assets_root = root.join(assets_dir);

        let mut files = Vec::new();
        self.collect_files_recursive(root, &assets_root, &mut files)
            .await?;

        let mut structure = SiteStructure::default();
        for path in files {
            Self::classify(path, &mut structure);
        }

        Ok(structure)
    }

    async fn read_file(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).await.map_err(SiteminError::Io)
    }

    async fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).await.map_err(SiteminError::Io)
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
