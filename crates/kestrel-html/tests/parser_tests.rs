//! Integration tests for the HTML tree builder.

use kestrel_dom::{DomTree, NodeId, NodeType};
use kestrel_html::{dump_tree, parse, parse_with_issues};

/// Helper to get element by tag name (first match, depth-first)
fn find_element(tree: &DomTree, tag: &str) -> Option<NodeId> {
    tree.descendants(NodeId::ROOT)
        .find(|&id| tree.as_element(id).is_some_and(|e| e.tag_name == tag))
}

fn tag(tree: &DomTree, id: NodeId) -> &str {
    &tree.as_element(id).unwrap().tag_name
}

#[test]
fn test_simple_element_with_text() {
    let tree = parse("<b>hi</b>");
    let children = tree.children(NodeId::ROOT);
    assert_eq!(children.len(), 1);

    let b = tree.as_element(children[0]).unwrap();
    assert_eq!(b.tag_name, "b");
    assert!(!b.self_closing);

    let text = tree.children(children[0]);
    assert_eq!(text.len(), 1);
    assert_eq!(tree.as_text(text[0]), Some("hi"));
}

#[test]
fn test_void_element_without_slash() {
    let tree = parse(r#"<img src="a.png">"#);
    let img = tree.children(NodeId::ROOT)[0];
    let data = tree.as_element(img).unwrap();
    assert_eq!(data.tag_name, "img");
    assert!(data.self_closing);
    assert_eq!(data.attrs.get("src"), Some("a.png"));
    assert!(tree.children(img).is_empty());
}

#[test]
fn test_void_element_does_not_capture_siblings() {
    let tree = parse("<p>a<br>b</p>");
    let p = find_element(&tree, "p").unwrap();
    assert_eq!(tree.children(p).len(), 3);
    let br = find_element(&tree, "br").unwrap();
    assert!(tree.children(br).is_empty());
}

#[test]
fn test_uppercase_void_element() {
    let tree = parse("<BR><p>x</p>");
    assert_eq!(tree.children(NodeId::ROOT).len(), 2);
    assert_eq!(tag(&tree, tree.children(NodeId::ROOT)[0]), "br");
}

#[test]
fn test_explicit_self_closing() {
    let tree = parse("<div><widget/>after</div>");
    let div = find_element(&tree, "div").unwrap();
    let children = tree.children(div);
    assert_eq!(children.len(), 2);
    assert!(tree.as_element(children[0]).unwrap().self_closing);
    assert_eq!(tree.as_text(children[1]), Some("after"));
}

#[test]
fn test_mismatched_close_is_recovered() {
    let (tree, issues) = parse_with_issues("<div><span></div>");

    let div = tree.children(NodeId::ROOT)[0];
    assert_eq!(tag(&tree, div), "div");
    let span = tree.children(div)[0];
    assert_eq!(tag(&tree, span), "span");
    assert!(tree.children(span).is_empty());

    let mismatches: Vec<_> = issues.iter().filter(|i| i.is_error).collect();
    assert_eq!(mismatches.len(), 1);
    assert!(mismatches[0].message.contains("</div>"));

    // Both elements are unwound at end of input.
    let unclosed = issues.iter().filter(|i| !i.is_error).count();
    assert_eq!(unclosed, 2);
}

#[test]
fn test_mismatched_close_leaves_stack_intact() {
    // `</b>` is ignored, so the text after it still lands inside `<i>`.
    let tree = parse("<i>a</b>b</i>c");
    let root = tree.children(NodeId::ROOT);
    assert_eq!(root.len(), 2);
    let inside: Vec<_> = tree
        .children(root[0])
        .iter()
        .filter_map(|&id| tree.as_text(id))
        .collect();
    assert_eq!(inside, vec!["a", "b"]);
    assert_eq!(tree.as_text(root[1]), Some("c"));
}

#[test]
fn test_close_with_empty_stack_is_noop() {
    let (tree, issues) = parse_with_issues("</p>text");
    assert_eq!(tree.children(NodeId::ROOT).len(), 1);
    assert_eq!(issues.len(), 1);
    assert!(!issues[0].is_error);
}

#[test]
fn test_close_tag_matches_case_insensitively() {
    let (tree, issues) = parse_with_issues("<DIV>x</div>");
    assert!(issues.is_empty());
    assert_eq!(tag(&tree, tree.children(NodeId::ROOT)[0]), "div");
}

#[test]
fn test_comment_is_verbatim_but_text_is_collapsed() {
    let tree = parse("<!-- a\nb -->");
    let comment = tree.children(NodeId::ROOT)[0];
    assert_eq!(
        tree.get(comment).unwrap().node_type,
        NodeType::Comment("a\nb".to_string())
    );

    let tree = parse("a\nb");
    assert_eq!(tree.as_text(tree.children(NodeId::ROOT)[0]), Some("a b"));
}

#[test]
fn test_whitespace_only_text_is_dropped() {
    let tree = parse("<ul>\n  <li>x</li>\n  </ul>");
    let ul = find_element(&tree, "ul").unwrap();
    assert_eq!(tree.children(ul).len(), 1);
}

#[test]
fn test_blank_input() {
    let (tree, issues) = parse_with_issues("  \n\t ");
    assert!(tree.is_empty());
    assert_eq!(issues.len(), 1);
}

#[test]
fn test_doctype() {
    let tree = parse("<!DOCTYPE html>\n<html></html>");
    let children = tree.children(NodeId::ROOT);
    assert_eq!(children.len(), 2);
    assert_eq!(
        tree.get(children[0]).unwrap().node_type,
        NodeType::DocumentType
    );
    assert_eq!(tag(&tree, children[1]), "html");
}

#[test]
fn test_doctype_only_at_start() {
    let (tree, issues) = parse_with_issues("<p></p><!DOCTYPE html>");
    assert_eq!(tree.children(NodeId::ROOT).len(), 1);
    assert_eq!(issues.len(), 1);
}

#[test]
fn test_attribute_names_lowercased_last_wins() {
    let tree = parse(r#"<a HREF="/one" href="/two" Title=t>x</a>"#);
    let a = tree.as_element(find_element(&tree, "a").unwrap()).unwrap();
    assert_eq!(a.attrs.len(), 2);
    assert_eq!(a.attrs.get("href"), Some("/two"));
    assert_eq!(a.attrs.get("title"), Some("t"));
}

#[test]
fn test_script_body_is_not_parsed() {
    let tree = parse("<body><script>if (a < b) { x = '</p>'; }</script><p>y</p></body>");
    let body = find_element(&tree, "body").unwrap();
    let children = tree.children(body);
    assert_eq!(children.len(), 1);
    assert_eq!(tag(&tree, children[0]), "p");
    assert!(find_element(&tree, "script").is_none());
}

#[test]
fn test_stray_bracket_joins_preceding_text() {
    let (tree, issues) = parse_with_issues("<p>1 < 2");
    let p = find_element(&tree, "p").unwrap();
    assert_eq!(tree.as_text(tree.children(p)[0]), Some("1 < 2"));
    assert!(issues.iter().any(|i| i.message.contains("'<'")));
}

#[test]
fn test_parent_links() {
    let tree = parse("<html><body><p>x</p></body></html>");
    let p = find_element(&tree, "p").unwrap();
    let text = tree.children(p)[0];
    let chain: Vec<&str> = tree
        .ancestors(text)
        .filter_map(|id| tree.as_element(id))
        .map(|e| e.tag_name.as_str())
        .collect();
    assert_eq!(chain, vec!["p", "body", "html"]);
    assert_eq!(tree.parent_tag(text), Some("p"));
}

#[test]
fn test_dump_tree() {
    let tree = parse(r#"<!doctype html><div class="a"><br>hi<!-- c --></div>"#);
    let expected = "\
Document
  <!DOCTYPE html>
  <div class=\"a\">
    <br />
    \"hi\"
    <!-- c -->
";
    assert_eq!(dump_tree(&tree, NodeId::ROOT, 0), expected);
}

#[test]
fn test_empty_brackets_open_no_element() {
    // `<>` has no tag name to open, so it is kept as text and nesting is
    // unaffected.
    let tree = parse("<div><>a</div><p>b</p>");
    let root = tree.children(NodeId::ROOT);
    assert_eq!(root.len(), 2);
    assert_eq!(tag(&tree, root[0]), "div");
    assert_eq!(tag(&tree, root[1]), "p");
    assert_eq!(tree.as_text(tree.children(root[0])[0]), Some("<>a"));
    assert!(
        tree.descendants(NodeId::ROOT)
            .filter_map(|id| tree.as_element(id))
            .all(|element| !element.tag_name.is_empty())
    );
}
