use crate::core::{interfaces::*, models::*};
use crate::utils::{Logger, Result, SiteminError, Timer};
use async_trait::async_trait;
use futures::future::try_join_all;
use std::path::PathBuf;
use std::sync::Arc;

/// Orchestrates the scan → filter → minify-in-place pass over the site output
pub struct SiteMinifyService {
    fs_service: Arc<dyn FileSystemService>,
    html_minifier: Arc<dyn HtmlMinifier>,
    css_minifier: Arc<dyn CssMinifier>,
}

/// Per-batch accumulator: (files processed, bytes before, bytes after)
#[derive(Debug, Default, Clone, Copy)]
struct BatchStats {
    count: usize,
    bytes_before: usize,
    bytes_after: usize,
}

impl BatchStats {
    fn add(&mut self, before: usize, after: usize) {
        self.count += 1;
        self.bytes_before += before;
        self.bytes_after += after;
    }
}

impl SiteMinifyService {
    pub fn new(
        fs_service: Arc<dyn FileSystemService>,
        html_minifier: Arc<dyn HtmlMinifier>,
        css_minifier: Arc<dyn CssMinifier>,
    ) -> Self {
        Self {
            fs_service,
            html_minifier,
            css_minifier,
        }
    }

    async fn discover(&self, config: &MinifyConfig) -> Result<SiteStructure> {
        Logger::scanning_files();

        let mut structure = SiteStructure::default();
        for root in &config.roots {
            if !self.fs_service.file_exists(root) {
                return Err(SiteminError::InvalidPath(format!(
                    "output root not found: {}",
                    root.display()
                )));
            }
            let found = self.fs_service.scan_site(root, &config.assets_dir).await?;
            structure.merge(found);
        }

        Logger::found_files(structure.html_files.len(), structure.css_files.len());
        Ok(structure)
    }

    async fn html_batch(&self, files: Vec<PathBuf>, parallel: bool) -> Result<BatchStats> {
        let mut stats = BatchStats::default();

        if parallel {
            let tasks: Vec<_> = files
                .into_iter()
                .map(|path| {
                    let fs = self.fs_service.clone();
                    let minifier = self.html_minifier.clone();
                    tokio::spawn(async move { minify_html_in_place(fs, minifier, path).await })
                })
                .collect();

            for result in try_join_all(tasks).await? {
                let (before, after) = result?;
                stats.add(before, after);
            }
        } else {
            for path in files {
                let (before, after) = minify_html_in_place(
                    self.fs_service.clone(),
                    self.html_minifier.clone(),
                    path,
                )
                .await?;
                stats.add(before, after);
            }
        }

        Ok(stats)
    }

    async fn css_batch(&self, files: Vec<PathBuf>, parallel: bool) -> Result<BatchStats> {
        let mut stats = BatchStats::default();

        if parallel {
            let tasks: Vec<_> = files
                .into_iter()
                .map(|path| {
                    let fs = self.fs_service.clone();
                    let minifier = self.css_minifier.clone();
                    tokio::spawn(async move { minify_css_in_place(fs, minifier, path).await })
                })
                .collect();

            for result in try_join_all(tasks).await? {
                let (before, after) = result?;
                stats.add(before, after);
            }
        } else {
            for path in files {
                let (before, after) = minify_css_in_place(
                    self.fs_service.clone(),
                    self.css_minifier.clone(),
                    path,
                )
                .await?;
                stats.add(before, after);
            }
        }

        Ok(stats)
    }
}

async fn minify_html_in_place(
    fs: Arc<dyn FileSystemService>,
    minifier: Arc<dyn HtmlMinifier>,
    path: PathBuf,
) -> Result<(usize, usize)> {
    let content = fs.read_file(&path).await?;
    let minified = minifier.minify_html(&content, &path).await?;
    fs.write_file(&path, &minified).await?;
    Ok((content.len(), minified.len()))
}

async fn minify_css_in_place(
    fs: Arc<dyn FileSystemService>,
    minifier: Arc<dyn CssMinifier>,
    path: PathBuf,
) -> Result<(usize, usize)> {
    let content = fs.read_file(&path).await?;
    let minified = minifier.minify_css(&content, &path).await?;
    fs.write_file(&path, &minified).await?;
    Ok((content.len(), minified.len()))
}

#[async_trait]
impl PostProcessor for SiteMinifyService {
    async fn run(&self, config: &MinifyConfig) -> Result<RunReport> {
        let timer = Timer::start("site post-processing");

        let structure = self.discover(config).await?;

        let (html_stats, css_stats) = if config.parallel {
            Logger::parallel_mode(num_cpus::get());
            // Both batches run concurrently, each file as its own task.
            // The run only returns once both batches have joined.
            tokio::try_join!(
                self.html_batch(structure.html_files, true),
                self.css_batch(structure.css_files, true),
            )?
        } else {
            Logger::sequential_mode();
            // HTML first, then CSS, one file at a time
            let html = self.html_batch(structure.html_files, false).await?;
            let css = self.css_batch(structure.css_files, false).await?;
            (html, css)
        };

        let report = RunReport {
            html_files_processed: html_stats.count,
            css_files_processed: css_stats.count,
            bytes_before: html_stats.bytes_before + css_stats.bytes_before,
            bytes_after: html_stats.bytes_after + css_stats.bytes_after,
            run_time: timer.elapsed(),
        };

        Logger::run_complete(
            report.html_files_processed,
            report.css_files_processed,
            report.bytes_before,
            report.bytes_after,
            report.run_time,
        );

        Ok(report)
    }
}
