use sitemin::core::interfaces::PostProcessor;
use sitemin::core::models::MinifyConfig;
use sitemin::core::services::SiteMinifyService;
use sitemin::infrastructure::{LightningCssMinifier, MinifyHtmlProcessor, TokioFileSystemService};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;

fn post_processor() -> SiteMinifyService {
    SiteMinifyService::new(
        Arc::new(TokioFileSystemService),
        Arc::new(MinifyHtmlProcessor::new()),
        Arc::new(LightningCssMinifier::new()),
    )
}

fn config_for(root: &Path) -> MinifyConfig {
    MinifyConfig {
        roots: vec![root.to_path_buf()],
        ..Default::default()
    }
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>Demo</title>
    </head>
    <body>
        <h1>Hello</h1>
        <p>Some    padded    text.</p>
    </body>
</html>
"#;

const STYLE_CSS: &str = "body {\n    color: red;\n    margin: 0 auto;\n}\n";

/// The scenario from the original tool: a.html and style.css get minified,
/// assets/keep.css and style.min.css stay byte-identical
#[tokio::test]
async fn test_site_run_respects_exclusions() {
    let site = tempdir().unwrap();
    let assets = site.path().join("assets");
    fs::create_dir_all(&assets).unwrap();

    fs::write(site.path().join("a.html"), PAGE_HTML).unwrap();
    fs::write(site.path().join("style.css"), STYLE_CSS).unwrap();
    fs::write(site.path().join("style.min.css"), "body{color:red}").unwrap();
    fs::write(assets.join("keep.css"), STYLE_CSS).unwrap();

    let report = post_processor()
        .run(&config_for(site.path()))
        .await
        .unwrap();

    assert_eq!(report.html_files_processed, 1);
    assert_eq!(report.css_files_processed, 1);

    // Minified in place, smaller than the input
    let html = fs::read_to_string(site.path().join("a.html")).unwrap();
    assert!(html.len() < PAGE_HTML.len());
    assert!(html.contains("Hello"));

    let css = fs::read_to_string(site.path().join("style.css")).unwrap();
    assert!(css.len() < STYLE_CSS.len());
    assert!(!css.contains('\n'));

    // Excluded files are byte-identical
    let kept = fs::read_to_string(assets.join("keep.css")).unwrap();
    assert_eq!(kept, STYLE_CSS);

    let min = fs::read_to_string(site.path().join("style.min.css")).unwrap();
    assert_eq!(min, "body{color:red}");
}

#[tokio::test]
async fn test_second_run_is_idempotent_in_effect() {
    let site = tempdir().unwrap();
    fs::write(site.path().join("index.html"), PAGE_HTML).unwrap();
    fs::write(site.path().join("style.css"), STYLE_CSS).unwrap();

    let processor = post_processor();
    let config = config_for(site.path());

    processor.run(&config).await.unwrap();
    let after_first_html = fs::read_to_string(site.path().join("index.html")).unwrap();
    let after_first_css = fs::read_to_string(site.path().join("style.css")).unwrap();

    let second = processor.run(&config).await.unwrap();
    let after_second_html = fs::read_to_string(site.path().join("index.html")).unwrap();
    let after_second_css = fs::read_to_string(site.path().join("style.css")).unwrap();

    assert_eq!(after_first_html, after_second_html);
    assert_eq!(after_first_css, after_second_css);
    assert_eq!(second.bytes_saved(), 0);
}

#[tokio::test]
async fn test_multiple_roots_are_merged() {
    let site_a = tempdir().unwrap();
    let site_b = tempdir().unwrap();
    fs::write(site_a.path().join("a.html"), PAGE_HTML).unwrap();
    fs::write(site_b.path().join("b.css"), STYLE_CSS).unwrap();

    let config = MinifyConfig {
        roots: vec![site_a.path().to_path_buf(), site_b.path().to_path_buf()],
        ..Default::default()
    };

    let report = post_processor().run(&config).await.unwrap();

    assert_eq!(report.html_files_processed, 1);
    assert_eq!(report.css_files_processed, 1);
}

#[tokio::test]
async fn test_custom_assets_dir_name() {
    let site = tempdir().unwrap();
    let static_dir = site.path().join("static");
    fs::create_dir_all(&static_dir).unwrap();
    fs::write(static_dir.join("keep.css"), STYLE_CSS).unwrap();
    fs::write(site.path().join("style.css"), STYLE_CSS).unwrap();

    let config = MinifyConfig {
        roots: vec![site.path().to_path_buf()],
        assets_dir: "static".to_string(),
        ..Default::default()
    };

    let report = post_processor().run(&config).await.unwrap();

    assert_eq!(report.css_files_processed, 1);
    assert_eq!(
        fs::read_to_string(static_dir.join("keep.css")).unwrap(),
        STYLE_CSS
    );
}
