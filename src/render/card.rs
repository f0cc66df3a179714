//! Bordered, titled text cards

use super::ansi::{pad_to, visible_width};
use super::palette::Palette;

/// Rounded box drawing characters for card borders
const BORDER_TOP_LEFT: &str = "╭";
const BORDER_TOP_RIGHT: &str = "╮";
const BORDER_BOTTOM_LEFT: &str = "╰";
const BORDER_BOTTOM_RIGHT: &str = "╯";
const BORDER_HORIZONTAL: &str = "─";
const BORDER_VERTICAL: &str = "│";

/// Border (1) + inner padding (1) on each side
pub const CARD_CHROME_WIDTH: usize = 4;

/// Pre-rendered card content and the width it is aligned on
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardBlock {
    pub lines: Vec<String>,
    /// Visible width of the widest line
    pub content_width: usize,
    /// Extra interior padding so this card lines up with wider siblings
    pub extra_pad: usize,
}

impl CardBlock {
    /// Measure `lines` and build a block with no extra padding
    pub fn new(lines: Vec<String>) -> Self {
        let content_width = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
        Self {
            lines,
            content_width,
            extra_pad: 0,
        }
    }

    /// Block whose width is already known (e.g. a heatmap grid width)
    pub fn with_width(lines: Vec<String>, content_width: usize) -> Self {
        Self {
            lines,
            content_width,
            extra_pad: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Width of the card this block composes into, before any header expansion
    pub fn nominal_width(&self) -> usize {
        self.content_width + self.extra_pad + CARD_CHROME_WIDTH
    }

    pub fn compose(&self, header: &str, palette: Palette) -> (Vec<String>, usize) {
        cardify(
            &self.lines,
            header,
            self.content_width,
            self.extra_pad,
            palette,
        )
    }
}

/// Wrap `content` in a rounded border with `header` centered on the top edge.
///
/// Returns the card lines and the card's visible width. Empty content yields
/// no card at all (`(vec![], 0)`). A header wider than the card widens the
/// card instead of being truncated.
pub fn cardify(
    content: &[String],
    header: &str,
    content_width: usize,
    extra_pad: usize,
    palette: Palette,
) -> (Vec<String>, usize) {
    if content.is_empty() {
        return (Vec::new(), 0);
    }

    let header_width = visible_width(header);
    let card_width = (content_width + extra_pad + CARD_CHROME_WIDTH).max(header_width + 2);

    let (left_fill, right_fill) = split_fill(card_width.saturating_sub(header_width + 2));
    let vertical = palette.border(BORDER_VERTICAL);

    let mut result = Vec::with_capacity(content.len() + 2);
    result.push(format!(
        "{}{}{}{}{}",
        palette.border(BORDER_TOP_LEFT),
        palette.border(&BORDER_HORIZONTAL.repeat(left_fill)),
        palette.header(header),
        palette.border(&BORDER_HORIZONTAL.repeat(right_fill)),
        palette.border(BORDER_TOP_RIGHT),
    ));

    // Interior width is the same for every line, whatever its own width
    let padding = card_width.saturating_sub(content_width + CARD_CHROME_WIDTH);
    for line in content {
        result.push(format!(
            "{} {}{} {}",
            vertical,
            pad_to(line, content_width),
            " ".repeat(padding),
            vertical
        ));
    }

    result.push(format!(
        "{}{}{}",
        palette.border(BORDER_BOTTOM_LEFT),
        palette.border(&BORDER_HORIZONTAL.repeat(card_width.saturating_sub(2))),
        palette.border(BORDER_BOTTOM_RIGHT),
    ));

    (result, card_width)
}

/// Split leftover top-border space around the header; the odd cell goes right
fn split_fill(available: usize) -> (usize, usize) {
    let left = available / 2;
    (left, available - left)
}
