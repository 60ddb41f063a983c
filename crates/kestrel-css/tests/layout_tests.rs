//! Integration tests for the box tree.

use kestrel_css::{
    ApproximateFontMetrics, BoxKind, FontWeight, HSTEP, LayoutId, LayoutTree, MonospaceMetrics,
    Rect, StyleMap, Viewport, layout,
};
use kestrel_dom::DomTree;
use kestrel_html::parse;

const METRICS: MonospaceMetrics = MonospaceMetrics {
    advance: 10,
    line_height: 20,
};

fn lay_out(html: &str, width: i32) -> (DomTree, LayoutTree) {
    let dom = parse(html);
    let tree = layout(&dom, Viewport::new(width, 600), &StyleMap::new(), &METRICS).unwrap();
    (dom, tree)
}

fn rect(tree: &LayoutTree, id: LayoutId) -> Rect {
    tree.get(id).unwrap().rect
}

fn tag(tree: &LayoutTree, id: LayoutId) -> &str {
    match &tree.get(id).unwrap().kind {
        BoxKind::Block { tag, .. } => tag,
        BoxKind::Text { .. } => "#text",
    }
}

#[test]
fn test_root_spans_viewport_width() {
    let (_, tree) = lay_out("<html><body><p>hi</p></body></html>", 800);
    let root = rect(&tree, tree.root());
    assert_eq!((root.x, root.y, root.width), (0, 0, 800));
    assert_eq!(root.height, 20);
    assert_eq!(tag(&tree, tree.root()), "html");
}

#[test]
fn test_blocks_stack_vertically() {
    let (_, tree) = lay_out("<body><p>one</p><p>two</p><p>three</p></body>", 400);
    let body = tree.children(tree.root());
    let ps = tree.children(body[0]);
    let ys: Vec<i32> = ps.iter().map(|&id| rect(&tree, id).y).collect();
    assert_eq!(ys, vec![0, 20, 40]);
    assert!(ps.iter().all(|&id| rect(&tree, id).width == 400));
    assert_eq!(rect(&tree, body[0]).height, 60);
}

#[test]
fn test_text_height_counts_wrapped_lines() {
    // 400 - 13 = 387px available; 40 words of 4 chars + spaces take 1990px.
    let words = ["word"; 40].join(" ");
    let (_, tree) = lay_out(&format!("<div>{words}</div>"), 400);
    let text = tree.children(tree.root())[0];
    let BoxKind::Text { wrapped, .. } = &tree.get(text).unwrap().kind else {
        panic!("expected a text box");
    };
    // "word" + 7 * " word" = 39 chars = 390px > 387, so 7 words per line.
    assert!(wrapped.lines.iter().all(|l| l.text.split(' ').count() <= 7));
    assert_eq!(wrapped.lines.len(), 6);
    assert_eq!(rect(&tree, text).height, 120);
    assert_eq!(rect(&tree, tree.root()).height, 120);
}

#[test]
fn test_wrap_uses_margin() {
    // "aaaa bbbb" is 90px: fits in 103 - 13 = 90 but not in 102 - 13.
    let (_, tree) = lay_out("<p>aaaa bbbb</p>", 103);
    assert_eq!(rect(&tree, tree.root()).height, 20);
    let (_, tree) = lay_out("<p>aaaa bbbb</p>", 102);
    assert_eq!(rect(&tree, tree.root()).height, 40);
    assert_eq!(HSTEP, 13);
}

#[test]
fn test_text_box_shares_parent_origin() {
    let (_, tree) = lay_out("<body><p>a</p><div><p>b</p>tail</div></body>", 300);
    let body = tree.children(tree.root())[0];
    let div = tree.children(body)[1];
    let text = tree.children(div)[1];
    assert_eq!(rect(&tree, text).y, rect(&tree, div).y);
    assert_eq!(rect(&tree, div).y, 20);
    assert_eq!(rect(&tree, div).height, 40);
}

#[test]
fn test_head_and_comments_make_no_boxes() {
    let (_, tree) = lay_out(
        "<!DOCTYPE html><html><head><title>t</title></head><!-- c --><body>x</body></html>",
        300,
    );
    let children = tree.children(tree.root());
    assert_eq!(children.len(), 1);
    assert_eq!(tag(&tree, children[0]), "body");
}

#[test]
fn test_trailing_top_level_nodes_join_root() {
    let (_, tree) = lay_out("stray<html><p>a</p></html><p>b</p>after", 300);
    let children = tree.children(tree.root());
    let tags: Vec<&str> = children.iter().map(|&id| tag(&tree, id)).collect();
    assert_eq!(tags, vec!["p", "p", "#text"]);
    assert_eq!(rect(&tree, children[1]).y, 20);
    assert_eq!(rect(&tree, tree.root()).height, 60);
}

#[test]
fn test_no_element_no_layout() {
    let dom = parse("just text");
    assert!(layout(&dom, Viewport::default(), &StyleMap::new(), &METRICS).is_none());
    let dom = parse("");
    assert!(layout(&dom, Viewport::default(), &StyleMap::new(), &METRICS).is_none());
}

#[test]
fn test_parent_links() {
    let (_, tree) = lay_out("<div><p>x</p></div>", 300);
    for (id, layout_box) in tree.iter() {
        for &child in &layout_box.children {
            assert_eq!(tree.get(child).unwrap().parent, Some(id));
        }
    }
    assert_eq!(tree.get(tree.root()).unwrap().parent, None);
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_style_map_sets_text_font() {
    let dom = parse(r#"<div><b class="loud">x</b></div>"#);
    let styles = StyleMap::parse("b { font-weight: bold } .loud { font-size: 28px; color: red }");
    let tree = layout(&dom, Viewport::default(), &styles, &ApproximateFontMetrics).unwrap();
    let b = tree.children(tree.root())[0];
    let text = tree.children(b)[0];
    let BoxKind::Text { font, color, .. } = &tree.get(text).unwrap().kind else {
        panic!("expected a text box");
    };
    assert_eq!(font.weight, FontWeight::Bold);
    assert_eq!(font.size, 28);
    assert_eq!(color.unwrap().to_hex_string(), "#ff0000");
    // 28px at 1.2em.
    assert_eq!(rect(&tree, text).height, 34);
}

#[test]
fn test_dump() {
    let (dom, tree) = lay_out("<html><body><p>hi there</p></body></html>", 200);
    let expected = "\
'html' (0, 0, 200, 20)
  'body' (0, 0, 200, 20)
    'p' (0, 0, 200, 20)
      'hi there' (0, 0, 200, 20)
";
    assert_eq!(tree.dump(&dom), expected);
}

#[test]
fn test_style_and_script_blocks_make_no_boxes() {
    let (_, tree) = lay_out(
        "<html><body><style>p { color: red }</style><script>var a = 1;</script><p>x</p></body></html>",
        400,
    );
    let tags: Vec<&str> = tree.iter().map(|(id, _)| tag(&tree, id)).collect();
    assert_eq!(tags, vec!["html", "body", "p", "#text"]);
    assert_eq!(rect(&tree, tree.root()).height, 20);
}
