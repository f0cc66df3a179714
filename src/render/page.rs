//! Page assembly from titled cards

use super::ansi::{pad_to, visible_width};
use super::card::{CardBlock, CARD_CHROME_WIDTH};
use super::palette::Palette;

/// Blank columns between cards placed side by side
pub const CARD_GAP: usize = 2;

/// A card to be placed on a page: header plus content block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub header: String,
    pub block: CardBlock,
}

impl Section {
    pub fn new(header: impl Into<String>, block: CardBlock) -> Self {
        Self {
            header: header.into(),
            block,
        }
    }

    /// Width the composed card will have, header expansion included
    pub fn card_width(&self) -> usize {
        if self.block.is_empty() {
            return 0;
        }
        self.block.nominal_width().max(visible_width(&self.header) + 2)
    }

    pub fn render(&self, palette: Palette) -> (Vec<String>, usize) {
        self.block.compose(&self.header, palette)
    }
}

/// Give every non-empty section the same card width by raising `extra_pad`
/// on the narrower ones
pub fn align_widths(sections: &mut [Section]) {
    let target = sections.iter().map(Section::card_width).max().unwrap_or(0);
    for section in sections.iter_mut().filter(|s| !s.block.is_empty()) {
        section.block.extra_pad = target.saturating_sub(section.block.content_width + CARD_CHROME_WIDTH);
    }
}

/// Cards one under another, all padded to the widest card
pub fn stack(sections: &mut [Section], palette: Palette) -> Vec<String> {
    align_widths(sections);
    sections
        .iter()
        .flat_map(|s| s.render(palette).0)
        .collect()
}

/// Cards next to each other, top-aligned; shorter cards are filled with blanks
pub fn side_by_side(sections: &[Section], palette: Palette) -> Vec<String> {
    let cards: Vec<(Vec<String>, usize)> = sections
        .iter()
        .map(|s| s.render(palette))
        .filter(|(lines, _)| !lines.is_empty())
        .collect();
    let height = cards.iter().map(|(lines, _)| lines.len()).max().unwrap_or(0);
    let gap = " ".repeat(CARD_GAP);

    (0..height)
        .map(|row| {
            cards
                .iter()
                .map(|(lines, width)| match lines.get(row) {
                    Some(line) => pad_to(line, *width),
                    None => " ".repeat(*width),
                })
                .collect::<Vec<_>>()
                .join(&gap)
        })
        .collect()
}

/// Visible width of `sections` laid out side by side
pub fn side_by_side_width(sections: &[Section]) -> usize {
    let widths: Vec<usize> = sections
        .iter()
        .map(Section::card_width)
        .filter(|&w| w > 0)
        .collect();
    widths.iter().sum::<usize>() + CARD_GAP * widths.len().saturating_sub(1)
}

/// Side by side when it fits `terminal_columns`, stacked otherwise
pub fn arrange(mut sections: Vec<Section>, terminal_columns: usize, palette: Palette) -> Vec<String> {
    if sections.len() > 1 && side_by_side_width(&sections) <= terminal_columns {
        side_by_side(&sections, palette)
    } else {
        stack(&mut sections, palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(header: &str, lines: &[&str]) -> Section {
        Section::new(
            header,
            CardBlock::new(lines.iter().map(|s| s.to_string()).collect()),
        )
    }

    // ========== Section tests ==========

    #[test]
    fn test_section_card_width() {
        assert_eq!(section("T", &["abcd"]).card_width(), 8);
        assert_eq!(section("A Long Title", &["ab"]).card_width(), 14);
        assert_eq!(section("Empty", &[]).card_width(), 0);
    }

    // ========== align_widths tests ==========

    #[test]
    fn test_align_widths_pads_narrow_cards() {
        let mut sections = vec![section("A", &["abcdefgh"]), section("B", &["ab"])];
        align_widths(&mut sections);
        assert_eq!(sections[0].block.extra_pad, 0);
        assert_eq!(sections[1].block.extra_pad, 6);
        assert_eq!(sections[0].card_width(), sections[1].card_width());
    }

    #[test]
    fn test_align_widths_header_dominated_card() {
        let mut sections = vec![
            section("A Much Longer Header", &["ab"]),
            section("B", &["abcd"]),
        ];
        align_widths(&mut sections);
        let (first, w1) = sections[0].render(Palette::monochrome());
        let (second, w2) = sections[1].render(Palette::monochrome());
        assert_eq!(w1, 22);
        assert_eq!(w2, 22);
        assert!(first.iter().chain(second.iter()).all(|l| visible_width(l) == 22));
    }

    // ========== stack tests ==========

    #[test]
    fn test_stack_uniform_width() {
        let mut sections = vec![section("One", &["a", "bb"]), section("Two", &["cccccc"])];
        let page = stack(&mut sections, Palette::monochrome());
        assert_eq!(page.len(), 4 + 3);
        assert!(page.iter().all(|l| visible_width(l) == 10));
    }

    #[test]
    fn test_stack_skips_empty_sections() {
        let mut sections = vec![section("One", &["a"]), section("None", &[])];
        let page = stack(&mut sections, Palette::monochrome());
        assert_eq!(page.len(), 3);
    }

    // ========== side_by_side tests ==========

    #[test]
    fn test_side_by_side_rows_share_width() {
        let sections = vec![section("L", &["a", "b", "c"]), section("R", &["xyz"])];
        let page = side_by_side(&sections, Palette::monochrome());
        assert_eq!(page.len(), 5);
        let expected = 5 + CARD_GAP + 7;
        assert!(page.iter().all(|l| visible_width(l) == expected));
        assert!(page[4].ends_with("       "));
    }

    #[test]
    fn test_side_by_side_width() {
        let sections = vec![section("L", &["a"]), section("R", &["xyz"]), section("E", &[])];
        assert_eq!(side_by_side_width(&sections), 5 + CARD_GAP + 7);
    }

    // ========== arrange tests ==========

    #[test]
    fn test_arrange_side_by_side_when_it_fits() {
        let sections = vec![section("L", &["a"]), section("R", &["b"])];
        let page = arrange(sections, 80, Palette::monochrome());
        assert_eq!(page.len(), 3);
    }

    #[test]
    fn test_arrange_stacks_when_too_wide() {
        let sections = vec![section("L", &["a"]), section("R", &["b"])];
        let page = arrange(sections, 11, Palette::monochrome());
        assert_eq!(page.len(), 6);
        assert!(page.iter().all(|l| visible_width(l) == 5));
    }
}
