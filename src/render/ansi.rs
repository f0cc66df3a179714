//! Escape-aware text measurement
//!
//! Every width computation in the renderer goes through [`visible_width`].
//! Raw `str::len` counts escape bytes and multi-byte glyphs, which is what
//! misaligns card borders once color is switched on.

use unicode_width::UnicodeWidthStr;

const ESC: char = '\x1b';

/// Remove ANSI escape sequences (CSI `ESC [ ... final`, and two-byte `ESC x`)
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != ESC {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('[') => {
                // Parameters and intermediates until a final byte in @..=~
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            Some(_) | None => {}
        }
    }

    out
}

/// Terminal cells occupied by `s`, ignoring escape sequences
pub fn visible_width(s: &str) -> usize {
    if !s.contains(ESC) {
        return s.width();
    }
    strip_ansi(s).width()
}

/// Right-pad `s` with spaces up to `width` visible cells
pub fn pad_to(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}
