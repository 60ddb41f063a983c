//! Kestrel CLI
//!
//! A headless driver for the page pipeline, for testing and debugging.
//!
//! Loads a file (or markup given inline), runs it through the view mode its
//! URL and media type select, and prints a summary plus any of the
//! intermediate structures asked for.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use kestrel_browser::{Page, PageLoader, Resource, load_file};
use kestrel_css::{DisplayCommand, RecordingSurface, StyleMap, Viewport};
use kestrel_dom::NodeId;
use kestrel_html::{LinkKind, dump_tree, tokenize};
use owo_colors::OwoColorize;

/// Kestrel - lenient HTML-to-layout pipeline
#[derive(Parser, Debug)]
#[command(name = "kestrel")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Summarize a page and print its DOM tree
    kestrel index.html

    # Box tree and display list for inline markup
    kestrel --html '<p>Hello <b>world</b></p>' --layout --display-list

    # Syntax-colored source view
    kestrel index.html --view-source --display-list

    # Apply a stylesheet and dump everything as JSON
    kestrel index.html --css site.css --json
"#)]
struct Cli {
    /// Path to the file to load
    #[arg(value_name = "FILE", required_unless_present = "html")]
    path: Option<PathBuf>,

    /// Load this markup instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// URL to load the content as (affects view mode and title)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Media type of the content (default: guessed from the file extension)
    #[arg(long, value_name = "TYPE")]
    media_type: Option<String>,

    /// Stylesheet to apply in the render view; later files win
    #[arg(long, value_name = "FILE")]
    css: Vec<PathBuf>,

    /// Viewport width in pixels
    #[arg(long, default_value = "800")]
    width: i32,

    /// Viewport height in pixels
    #[arg(long, default_value = "600")]
    height: i32,

    /// Show the markup instead of rendering it
    #[arg(long)]
    view_source: bool,

    /// Print the token stream
    #[arg(long)]
    tokens: bool,

    /// Print the DOM tree (default when no other dump is requested)
    #[arg(long)]
    tree: bool,

    /// Print the box tree
    #[arg(long)]
    layout: bool,

    /// Print the display list
    #[arg(long)]
    display_list: bool,

    /// Print the page as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.width <= 0 || cli.height <= 0 {
        bail!("viewport must be at least 1x1, got {}x{}", cli.width, cli.height);
    }

    let resource = load_input(&cli)?;
    let styles = load_styles(&cli.css)?;

    let mut url = cli.url.clone().unwrap_or_else(|| resource.url.clone());
    if cli.view_source && !url.starts_with("view-source:") {
        url = format!("view-source:{url}");
    }
    let media_type = cli.media_type.as_deref().unwrap_or(&resource.media_type);

    let loader = PageLoader::new(Viewport::new(cli.width, cli.height));
    let page = loader.load(&url, &resource.content, media_type, &styles);

    if cli.json {
        print_json(&cli, &page, &resource.content)?;
        return Ok(());
    }

    print_summary(&page);
    if cli.tokens {
        print_tokens(&resource.content);
    }
    if cli.tree || !(cli.tokens || cli.layout || cli.display_list) {
        print_dom(&page);
    }
    if cli.layout {
        print_layout(&page);
    }
    if cli.display_list {
        print_display_list(&page, loader.viewport());
    }
    Ok(())
}

/// Read the file or wrap the inline markup.
fn load_input(cli: &Cli) -> Result<Resource> {
    if let Some(ref html) = cli.html {
        return Ok(Resource {
            url: "about:blank".to_string(),
            content: html.clone(),
            media_type: "text/html".to_string(),
        });
    }
    match cli.path {
        Some(ref path) => Ok(load_file(path)?),
        None => bail!("a file path or --html is required"),
    }
}

fn load_styles(paths: &[PathBuf]) -> Result<StyleMap> {
    let mut styles = StyleMap::new();
    for path in paths {
        let css = fs::read_to_string(path)
            .with_context(|| format!("failed to read stylesheet `{}`", path.display()))?;
        styles.merge(StyleMap::parse(&css));
    }
    Ok(styles)
}

fn header(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold());
}

fn print_summary(page: &Page) {
    header("Page");
    println!("  url:        {}", page.url);
    println!("  view:       {}", page.view_mode.cyan());
    println!("  title:      {}", page.title);
    println!("  background: {}", page.background);
    println!("  commands:   {}", page.display_list.len());
    println!(
        "  scroll:     max_x={} max_y={}",
        page.scroll_limits.max_x, page.scroll_limits.max_y
    );

    if !page.parse_issues.is_empty() {
        header(&format!("Parse Issues ({})", page.parse_issues.len()));
        for issue in &page.parse_issues {
            let line = format!("  @{:<5} {}", issue.offset, issue.message);
            if issue.is_error {
                println!("{}", line.red());
            } else {
                println!("{}", line.yellow());
            }
        }
    }

    let stylesheets = page.resolved_links(LinkKind::Css);
    if !stylesheets.is_empty() {
        header("Linked Stylesheets (not fetched)");
        for href in stylesheets {
            println!("  {href}");
        }
    }
}

fn print_tokens(content: &str) {
    let tokens = tokenize(content);
    header(&format!("HTML Tokens ({})", tokens.len()));
    for (i, token) in tokens.iter().enumerate() {
        println!("  {i:3}: {token}");
    }
}

fn print_dom(page: &Page) {
    header("DOM Tree");
    match page.dom {
        Some(ref dom) => print!("{}", dump_tree(dom, NodeId::ROOT, 0)),
        None => println!("  (file view has no document)"),
    }
}

fn print_layout(page: &Page) {
    header("Layout Tree");
    match (&page.layout, &page.dom) {
        (Some(layout), Some(dom)) => print!("{}", layout.dump(dom)),
        _ => println!("  (none: only built in render view for documents with an element)"),
    }
}

fn describe(command: &DisplayCommand) -> String {
    match command {
        DisplayCommand::DrawText {
            x, y, text, color, ..
        } => format!("text ({x}, {y}) {color} {text:?}"),
        DisplayCommand::DrawRect {
            x,
            y,
            width,
            height,
            border,
            fill,
        } => format!("rect ({x}, {y}) {width}x{height} border {border} fill {fill}"),
    }
}

fn print_display_list(page: &Page, viewport: Viewport) {
    header(&format!("Display List ({})", page.display_list.len()));
    for (i, command) in page.display_list.commands().iter().enumerate() {
        println!("  {i:3}: {}", describe(command));
    }

    let mut surface = RecordingSurface::new();
    let visible = page
        .display_list
        .execute_visible(&mut surface, 0, 0, viewport.width, viewport.height);
    header(&format!(
        "First Screen ({visible} of {} drawn)",
        page.display_list.len()
    ));
    for command in &surface.commands {
        println!("  {}", describe(command));
    }
}

fn print_json(cli: &Cli, page: &Page, content: &str) -> Result<()> {
    let mut json = serde_json::json!({
        "url": page.url,
        "view_mode": page.view_mode,
        "title": page.title,
        "background": page.background,
        "scroll_limits": page.scroll_limits,
        "links": page.links,
        "parse_issues": page
            .parse_issues
            .iter()
            .map(|issue| serde_json::json!({
                "message": issue.message,
                "offset": issue.offset,
                "is_error": issue.is_error,
            }))
            .collect::<Vec<_>>(),
    });
    if cli.display_list || !cli.tree {
        json["display_list"] = serde_json::to_value(&page.display_list)?;
    }
    if cli.tree
        && let Some(ref dom) = page.dom
    {
        json["dom"] = serde_json::to_value(dom)?;
    }
    if cli.tokens {
        let tokens: Vec<String> = tokenize(content).iter().map(ToString::to_string).collect();
        json["tokens"] = serde_json::to_value(tokens)?;
    }
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
