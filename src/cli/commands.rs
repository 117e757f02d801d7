use crate::core::{interfaces::*, models::MinifyConfig, services::SiteMinifyService};
use crate::infrastructure::{LightningCssMinifier, MinifyHtmlProcessor, TokioFileSystemService};
use crate::utils::{Logger, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "sitemin")]
#[command(about = "Sitemin - minify a generated site's HTML and CSS in place")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Minify the site output in place
    Run {
        /// Output roots to process (defaults to config file, then __site)
        roots: Vec<PathBuf>,
        /// Name of the assets subdirectory to leave untouched
        #[arg(long)]
        assets_dir: Option<String>,
        /// Process files one at a time instead of in parallel
        #[arg(long)]
        sequential: bool,
    },
    /// Show post-processor information
    Info,
}

pub struct CliHandler;

impl CliHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self) -> Result<()> {
        // Initialize logging
        Logger::init();

        let cli = Cli::parse();

        match cli.command {
            Commands::Run {
                roots,
                assets_dir,
                sequential,
            } => self.handle_run_command(roots, assets_dir, sequential).await,
            Commands::Info => self.handle_info_command().await,
        }
    }

    async fn handle_run_command(
        &self,
        roots: Vec<PathBuf>,
        assets_dir: Option<String>,
        sequential: bool,
    ) -> Result<()> {
        // Config file first, command line on top
        let mut config = MinifyConfig::load()?;
        if !roots.is_empty() {
            config.roots = roots;
        }
        if let Some(assets_dir) = assets_dir {
            config.assets_dir = assets_dir;
        }
        if sequential {
            config.parallel = false;
        }

        Logger::run_start(&config.roots);

        let fs_service: Arc<dyn FileSystemService> = Arc::new(TokioFileSystemService);
        let html_minifier: Arc<dyn HtmlMinifier> = Arc::new(MinifyHtmlProcessor::new());
        let css_minifier: Arc<dyn CssMinifier> = Arc::new(LightningCssMinifier::new());

        let service = SiteMinifyService::new(fs_service, html_minifier, css_minifier);
        service.run(&config).await?;

        Ok(())
    }

    async fn handle_info_command(&self) -> Result<()> {
        tracing::info!("🗜️  Sitemin v{}", env!("CARGO_PKG_VERSION"));
        tracing::info!("══════════════════════════════════════");
        tracing::info!("Build-time post-processor for generated site output");
        tracing::info!("");
        tracing::info!("🎯 What it does:");
        tracing::info!("  • Walks output roots (default: __site)");
        tracing::info!("  • Minifies .html files in place (minify-html)");
        tracing::info!("  • Minifies .css files in place (Lightning CSS)");
        tracing::info!("  • Skips the assets/ subtree and *.min.css files");
        tracing::info!("  • HTML and CSS batches run in parallel by default");

        Ok(())
    }
}

impl Default for CliHandler {
    fn default() -> Self {
        Self::new()
    }
}
