//! Integration tests for the page pipeline.

use std::fs;

use kestrel_browser::css::{Color, DisplayCommand, MonospaceMetrics, StyleMap, Viewport};
use kestrel_browser::html::LinkKind;
use kestrel_browser::{PageLoader, ViewMode, load_file};

const METRICS: MonospaceMetrics = MonospaceMetrics {
    advance: 10,
    line_height: 20,
};

fn loader() -> PageLoader<MonospaceMetrics> {
    PageLoader::with_metrics(Viewport::new(400, 300), METRICS)
}

#[test]
fn test_render_page() {
    let html = "<html><head><title>Hello</title></head><body><p>one</p><p>two</p></body></html>";
    let page = loader().load("https://example.com/index.html", html, "text/html", &StyleMap::new());

    assert_eq!(page.view_mode, ViewMode::Render);
    assert_eq!(page.background, Color::WHITE);
    assert_eq!(page.title, "Hello");
    assert_eq!(page.display_list.texts().collect::<Vec<_>>(), vec!["one", "two"]);
    assert!(page.layout.is_some());
    assert!(page.parse_issues.is_empty());
    assert_eq!(page.scroll_limits.max_y, 0);
}

#[test]
fn test_render_title_falls_back_to_origin() {
    let page = loader().load("https://example.com/a/b", "<p>x</p>", "text/html", &StyleMap::new());
    assert_eq!(page.title, "https://example.com");

    let page = loader().load("file:///tmp/a.html", "<p>x</p>", "text/html", &StyleMap::new());
    assert_eq!(page.title, "file:///tmp/a.html");
}

#[test]
fn test_render_title_from_painted_title_box() {
    // A title outside <head> gets a box; its text becomes the title.
    let page = loader().load(
        "https://example.com/",
        "<html><title>Boxed</title><p>x</p></html>",
        "text/html",
        &StyleMap::new(),
    );
    assert_eq!(page.title, "Boxed");
    assert_eq!(page.display_list.texts().collect::<Vec<_>>(), vec!["x"]);
}

#[test]
fn test_data_url_is_its_own_title() {
    let url = "data:text/html,<title>Ignored</title>";
    let page = loader().load(url, "<title>Ignored</title>", "text/html", &StyleMap::new());
    assert_eq!(page.title, url);
}

#[test]
fn test_styles_reach_render() {
    let styles = StyleMap::parse("p { color: #ff0000 }");
    let page = loader().load("https://a.b/", "<div><p>x</p></div>", "text/html", &styles);
    assert!(page.display_list.commands().iter().any(|c| matches!(
        c,
        DisplayCommand::DrawText { color: Color::RED, .. }
    )));
}

#[test]
fn test_source_page() {
    let page = loader().load(
        "view-source:https://example.com/",
        "<title>T</title><p>x</p>",
        "text/html",
        &StyleMap::new(),
    );
    assert_eq!(page.view_mode, ViewMode::Source);
    assert_eq!(page.background, Color::BLACK);
    assert_eq!(page.title, "view-source:https://example.com/");
    assert!(page.layout.is_none());
    assert!(page.dom.is_some());
    assert!(page.display_list.texts().any(|t| t == "x"));
    assert!(page.display_list.texts().all(|t| t != "T"));
}

#[test]
fn test_file_page() {
    let page = loader().load("file:///tmp/a.txt", "hi\nthere", "text/plain", &StyleMap::new());
    assert_eq!(page.view_mode, ViewMode::File);
    assert_eq!(page.background, Color::rgb(0x1c, 0x1b, 0x22));
    assert_eq!(page.title, "file:///tmp/a.txt");
    assert!(page.dom.is_none());
    assert_eq!(page.display_list.len(), 7);
}

#[test]
fn test_empty_content() {
    for media_type in ["text/html", "text/plain"] {
        let page = loader().load("https://example.com/", "", media_type, &StyleMap::new());
        assert!(page.display_list.is_empty());
        assert_eq!(page.scroll_limits.max_x, 0);
        assert_eq!(page.scroll_limits.max_y, 0);
    }
}

#[test]
fn test_long_page_scrolls() {
    let body = "<p>line</p>".repeat(40);
    let page = loader().load("https://a.b/", &format!("<body>{body}</body>"), "text/html", &StyleMap::new());
    // Last line at y = 39 * 20 = 780; 780 + 20 - 300 = 500.
    assert_eq!(page.scroll_limits.max_y, 500);
}

#[test]
fn test_parse_issues_are_kept() {
    let page = loader().load("https://a.b/", "<div><p>x</div>", "text/html", &StyleMap::new());
    assert!(page.parse_issues.iter().any(|issue| issue.is_error));
}

#[test]
fn test_resolved_links() {
    let html = r#"<html><head><link rel="stylesheet" href="/main.css"></head>
        <body><a href="https://other.test/">o</a></body></html>"#;
    let page = loader().load("https://example.com/dir/page.html", html, "text/html", &StyleMap::new());
    assert_eq!(
        page.resolved_links(LinkKind::Css),
        vec!["https://example.com/main.css".to_string()]
    );
    assert_eq!(
        page.resolved_links(LinkKind::A),
        vec!["https://other.test/".to_string()]
    );
}

#[test]
fn test_load_file() {
    let dir = std::env::temp_dir().join(format!("kestrel-load-file-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("page.html");
    fs::write(&path, "<p>hi</p>").unwrap();

    let resource = load_file(&path).unwrap();
    assert_eq!(resource.media_type, "text/html");
    assert_eq!(resource.content, "<p>hi</p>");
    assert!(resource.url.starts_with("file://"));
    assert!(resource.url.ends_with("page.html"));

    fs::remove_dir_all(&dir).unwrap();
}
