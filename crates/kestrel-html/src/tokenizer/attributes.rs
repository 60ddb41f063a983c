//! Attribute fragment parsing.
//!
//! Matches `name`, `name=value`, `name="value"`, and `name='value'` pairs
//! separated by whitespace. Whitespace around `=` is allowed. An unterminated
//! quoted value runs to the end of the fragment.

use std::iter::Peekable;
use std::str::CharIndices;

use super::token::Attribute;

type Cursor<'a> = Peekable<CharIndices<'a>>;

fn skip_whitespace(chars: &mut Cursor<'_>) {
    while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
}

fn read_value(chars: &mut Cursor<'_>) -> String {
    let mut value = String::new();
    match chars.peek().map(|&(_, c)| c) {
        Some(quote @ ('"' | '\'')) => {
            let _ = chars.next();
            for (_, c) in chars.by_ref() {
                if c == quote {
                    break;
                }
                value.push(c);
            }
        }
        Some(_) => {
            while let Some((_, c)) = chars.next_if(|(_, c)| !c.is_whitespace()) {
                value.push(c);
            }
        }
        None => {}
    }
    value
}

/// Parse the attribute fragment that follows a tag name.
///
/// Names keep their original case. Duplicates are all returned in source
/// order; deduplication happens when they are stored on an element.
#[must_use]
pub fn parse_attributes(fragment: &str) -> Vec<Attribute> {
    let mut attributes = Vec::new();
    let mut chars = fragment.char_indices().peekable();

    loop {
        skip_whitespace(&mut chars);
        let Some(&(start, first)) = chars.peek() else {
            break;
        };

        // Stray `=` or a quoted run with no name in front of it.
        if matches!(first, '=' | '"' | '\'') {
            if first == '=' {
                let _ = chars.next();
            } else {
                let _ = read_value(&mut chars);
            }
            continue;
        }

        let mut end = start;
        while let Some((idx, c)) = chars.next_if(|&(_, c)| !c.is_whitespace() && c != '=') {
            end = idx + c.len_utf8();
        }
        let name = &fragment[start..end];

        let mut lookahead = chars.clone();
        skip_whitespace(&mut lookahead);
        let value = if lookahead.next_if(|&(_, c)| c == '=').is_some() {
            chars = lookahead;
            skip_whitespace(&mut chars);
            read_value(&mut chars)
        } else {
            String::new()
        };

        attributes.push(Attribute::new(name, value));
    }

    attributes
}
