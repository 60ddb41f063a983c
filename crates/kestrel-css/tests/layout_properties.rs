//! Property tests for box heights over generated, often malformed, markup.

use kestrel_css::{
    BoxKind, DisplayCommand, LayoutTree, MonospaceMetrics, Painter, StyleMap, Viewport, layout,
};
use kestrel_html::parse;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

const METRICS: MonospaceMetrics = MonospaceMetrics {
    advance: 7,
    line_height: 15,
};

const TAGS: [&str; 7] = ["div", "p", "b", "span", "title", "head", "br"];

/// Turn generated pieces into markup: start tags, end tags, words and
/// comments, in whatever order they come. Unbalanced nesting is intended.
fn markup(pieces: &[(u8, String)]) -> String {
    let mut html = String::new();
    for (op, word) in pieces {
        let tag = TAGS[usize::from(*op) % TAGS.len()];
        let word: String = word.chars().filter(char::is_ascii_alphanumeric).collect();
        match op % 5 {
            0 | 1 => html.push_str(&format!("<{tag}>")),
            2 => html.push_str(&format!("</{tag}>")),
            3 => html.push_str(&format!("<!-- {word} -->")),
            _ => {
                html.push_str(&word);
                html.push(' ');
            }
        }
    }
    html
}

fn lay_out(pieces: &[(u8, String)], width: u8) -> Option<LayoutTree> {
    let dom = parse(&markup(pieces));
    let viewport = Viewport::new(i32::from(width) + 1, 600);
    layout(&dom, viewport, &StyleMap::new(), &METRICS)
}

#[quickcheck]
fn block_height_is_sum_of_children(pieces: Vec<(u8, String)>, width: u8) -> TestResult {
    let Some(tree) = lay_out(&pieces, width) else {
        return TestResult::discard();
    };
    TestResult::from_bool(tree.iter().all(|(_, layout_box)| {
        let children: i32 = layout_box
            .children
            .iter()
            .filter_map(|&child| tree.get(child))
            .map(|child| child.rect.height)
            .sum();
        match layout_box.kind {
            BoxKind::Block { .. } => layout_box.rect.height == children,
            BoxKind::Text { .. } => layout_box.children.is_empty(),
        }
    }))
}

#[quickcheck]
fn drawn_lines_match_text_heights(pieces: Vec<(u8, String)>, width: u8) -> TestResult {
    let Some(tree) = lay_out(&pieces, width) else {
        return TestResult::discard();
    };

    let mut expected_lines = 0;
    for (_, layout_box) in tree.iter() {
        if let BoxKind::Text {
            in_title, wrapped, ..
        } = &layout_box.kind
        {
            let lines = i32::try_from(wrapped.lines.len()).unwrap_or(i32::MAX);
            if lines * METRICS.line_height != layout_box.rect.height {
                return TestResult::failed();
            }
            if !in_title {
                expected_lines += lines;
            }
        }
    }

    let output = Painter::default().paint(&tree);
    let drawn = output
        .display_list
        .commands()
        .iter()
        .filter(|c| matches!(c, DisplayCommand::DrawText { .. }))
        .count();
    TestResult::from_bool(i32::try_from(drawn).ok() == Some(expected_lines))
}
