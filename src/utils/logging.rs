use std::time::Instant;
use tracing::{debug, error, info, warn};

pub struct Logger;

impl Logger {
    pub fn init() {
        tracing_subscriber::fmt()
            .with_env_filter("sitemin=debug")
            .with_target(false)
            .init();
    }

    pub fn run_start(roots: &[std::path::PathBuf]) {
        info!("🗜️  Sitemin - Site Post-Processor");
        info!("═══════════════════════════════════════");
        for root in roots {
            info!("📁 Root: {}", root.display());
        }
    }

    pub fn scanning_files() {
        info!("📁 Scanning site output...");
    }

    pub fn found_files(html_count: usize, css_count: usize) {
        info!("📦 Found {} HTML files, {} CSS files", html_count, css_count);
    }

    pub fn parallel_mode(workers: usize) {
        info!("⚡ Parallel mode: {} cores available", workers);
    }

    pub fn sequential_mode() {
        info!("🐢 Sequential mode");
    }

    pub fn processing_html(name: &str) {
        debug!("📄 Minifying HTML: {}", name);
    }

    pub fn processing_css(name: &str) {
        debug!("🎨 Minifying CSS: {}", name);
    }

    pub fn run_complete(
        html_count: usize,
        css_count: usize,
        bytes_before: usize,
        bytes_after: usize,
        duration: std::time::Duration,
    ) {
        let saved = bytes_before.saturating_sub(bytes_after);
        let percent = if bytes_before > 0 {
            saved as f64 * 100.0 / bytes_before as f64
        } else {
            0.0
        };

        info!("");
        info!("📊 Run Statistics:");
        info!("  • HTML files minified: {}", html_count);
        info!("  • CSS files minified: {}", css_count);
        info!("  • Size: {} → {} bytes ({:.1}% saved)", bytes_before, bytes_after, percent);
        info!("  • Run time: {:.2?}", duration);
        info!("");
        info!("✅ Site minified in place");
    }

    pub fn error(msg: &str) {
        error!("❌ {}", msg);
    }

    pub fn warn(msg: &str) {
        warn!("⚠️  {}", msg);
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: &str) -> Self {
        debug!("⏱️  Starting: {}", name);
        Self {
            start: Instant::now(),
            name: name.to_string(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        debug!("⏱️  Completed: {} in {:.2?}", self.name, self.elapsed());
    }
}
