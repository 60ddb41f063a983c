//! Greedy line breaking.
//!
//! [§ 5 Line Breaking and Word Boundaries](https://www.w3.org/TR/css-text-3/#line-breaking)
//!
//! A single pass produces every line of a text run together with its
//! position. Box heights and drawn lines both come from the same
//! [`WrappedText`], so they cannot disagree.

use super::font::{Font, FontMetrics};

/// One output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    /// Absolute x of the line's first glyph.
    pub x: i32,
    /// Offset from the run's top edge.
    pub dy: i32,
    /// Words of the line joined by single spaces.
    pub text: String,
}

/// Result of breaking one text run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrappedText {
    /// Non-empty lines in order.
    pub lines: Vec<TextLine>,
    /// Rows consumed, including rows left blank by consecutive newlines.
    pub rows: i32,
}

impl WrappedText {
    /// Total height when each row is `line_step` pixels tall.
    #[must_use]
    pub const fn height(&self, line_step: i32) -> i32 {
        self.rows.saturating_mul(line_step)
    }
}

struct LineBreaker<'a> {
    font: &'a Font,
    metrics: &'a dyn FontMetrics,
    start_x: i32,
    available_width: i32,
    line_step: i32,

    out: WrappedText,
    line: String,
    word: String,
    /// Extra indent of the line being built; one space when its logical row
    /// started with whitespace.
    indent: i32,
    row_started: bool,
}

impl LineBreaker<'_> {
    fn commit_word(&mut self) {
        if self.word.is_empty() {
            return;
        }
        if self.line.is_empty() {
            std::mem::swap(&mut self.line, &mut self.word);
            return;
        }
        let candidate = format!("{} {}", self.line, self.word);
        if self.metrics.measure(self.font, &candidate) > self.available_width {
            self.flush_line();
            std::mem::swap(&mut self.line, &mut self.word);
        } else {
            self.line = candidate;
        }
        self.word.clear();
    }

    fn flush_line(&mut self) {
        if self.line.is_empty() {
            return;
        }
        self.out.lines.push(TextLine {
            x: self.start_x + self.indent,
            dy: self.out.rows.saturating_mul(self.line_step),
            text: std::mem::take(&mut self.line),
        });
        self.out.rows += 1;
        // Continuation lines return to the run's starting x.
        self.indent = 0;
    }

    fn hard_break(&mut self) {
        self.commit_word();
        if self.line.is_empty() {
            self.out.rows += 1;
        } else {
            self.flush_line();
        }
        self.indent = 0;
        self.row_started = false;
    }
}

/// Break `text` into lines no wider than `available_width` where possible.
///
/// Words are separated by whitespace and never split; a single word wider
/// than the available width gets a line of its own. Runs of whitespace
/// collapse to one space. A `\n` always ends the current row. Whitespace at
/// the start of a row shifts that row's first line right by one space.
#[must_use]
pub fn wrap_text(
    text: &str,
    start_x: i32,
    available_width: i32,
    line_step: i32,
    font: &Font,
    metrics: &dyn FontMetrics,
) -> WrappedText {
    let mut breaker = LineBreaker {
        font,
        metrics,
        start_x,
        available_width,
        line_step,
        out: WrappedText::default(),
        line: String::new(),
        word: String::new(),
        indent: 0,
        row_started: false,
    };

    for c in text.chars() {
        if c == '\n' {
            breaker.hard_break();
        } else if c.is_whitespace() {
            if !breaker.row_started {
                breaker.indent = metrics.measure(font, " ");
                breaker.row_started = true;
            }
            breaker.commit_word();
        } else {
            breaker.row_started = true;
            breaker.word.push(c);
        }
    }
    breaker.commit_word();
    breaker.flush_line();

    breaker.out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font::MonospaceMetrics;

    const METRICS: MonospaceMetrics = MonospaceMetrics {
        advance: 10,
        line_height: 20,
    };

    fn wrap(text: &str, width: i32) -> WrappedText {
        wrap_text(text, 5, width, 20, &Font::default(), &METRICS)
    }

    fn texts(wrapped: &WrappedText) -> Vec<&str> {
        wrapped.lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_fits_on_one_line() {
        let out = wrap("hello world", 200);
        assert_eq!(texts(&out), vec!["hello world"]);
        assert_eq!(out.rows, 1);
        assert_eq!(out.lines[0].x, 5);
        assert_eq!(out.lines[0].dy, 0);
    }

    #[test]
    fn test_breaks_between_words() {
        // "aaa bbb" is 70px; the limit is 60.
        let out = wrap("aaa bbb ccc", 60);
        assert_eq!(texts(&out), vec!["aaa", "bbb", "ccc"]);
        assert_eq!(out.rows, 3);
        assert_eq!(out.lines[2].dy, 40);
        assert!(out.lines.iter().all(|l| l.x == 5));
    }

    #[test]
    fn test_exact_fit_does_not_break() {
        let out = wrap("aaa bbb", 70);
        assert_eq!(texts(&out), vec!["aaa bbb"]);
    }

    #[test]
    fn test_long_word_gets_own_line() {
        let out = wrap("a extraordinarily b", 50);
        assert_eq!(texts(&out), vec!["a", "extraordinarily", "b"]);
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let out = wrap("a  \t  b", 200);
        assert_eq!(texts(&out), vec!["a b"]);
    }

    #[test]
    fn test_newline_forces_break() {
        let out = wrap("a\nb", 200);
        assert_eq!(texts(&out), vec!["a", "b"]);
        assert_eq!(out.lines[1].dy, 20);
        assert_eq!(out.rows, 2);
    }

    #[test]
    fn test_blank_rows_count() {
        let out = wrap("a\n\nb", 200);
        assert_eq!(out.rows, 3);
        assert_eq!(out.lines[1].dy, 40);
        assert_eq!(out.height(20), 60);
    }

    #[test]
    fn test_leading_whitespace_indents_first_line_only() {
        let out = wrap("  aaa bbb", 60);
        assert_eq!(out.lines[0].x, 15);
        assert_eq!(out.lines[1].x, 5);
    }

    #[test]
    fn test_empty_text() {
        let out = wrap("", 100);
        assert!(out.lines.is_empty());
        assert_eq!(out.rows, 0);
        assert_eq!(wrap("   ", 100).rows, 0);
    }
}
