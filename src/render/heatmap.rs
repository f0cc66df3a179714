//! Adaptive calendar heatmap
//!
//! Days are laid out column-major: day 0 is row 0 of column 0, day 1 is row 1
//! of column 0, and so on, wrapping to the next column after `height` days.
//! The row count starts at [`MIN_HEIGHT`] and grows until the grid plus a card
//! border fits the terminal.

use std::collections::HashMap;

use chrono::NaiveDate;
use crossterm::style::Color;

use super::card::CARD_CHROME_WIDTH;
use super::palette::Palette;
use crate::types::{DailySample, HeatcardError, Result, SECONDS_PER_HOUR};

/// Glyph for every cell when color is on; intensity is carried by color alone
const HEATMAP_GLYPH: &str = "■";

/// Glyph per level when color is off (levels 0-5)
const MONO_GLYPHS: [&str; 6] = ["·", "▁", "▃", "▅", "▇", "█"];

/// Green channel per level (levels 0-5); red and blue stay 0
const GREEN_LEVELS: [u8; 6] = [0, 30, 60, 100, 140, 220];

/// Inclusive lower bound in hours for each level above `Light`, highest first.
/// Anything above zero and below the last bound is `Light`.
const HOUR_THRESHOLDS: [(f64, HeatLevel); 4] = [
    (8.0, HeatLevel::Max),
    (6.0, HeatLevel::High),
    (4.0, HeatLevel::Medium),
    (2.0, HeatLevel::Moderate),
];

/// Fewest rows a heatmap is drawn with
pub const MIN_HEIGHT: usize = 4;

/// One glyph plus one separator space
const CELL_WIDTH: usize = 2;

/// Heatmap intensity level derived from a day's duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeatLevel {
    /// No activity
    None,
    /// (0h, 2h)
    Light,
    /// [2h, 4h)
    Moderate,
    /// [4h, 6h)
    Medium,
    /// [6h, 8h)
    High,
    /// 8h and up
    Max,
}

impl HeatLevel {
    pub fn from_hours(hours: f64) -> Self {
        if hours.is_nan() || hours <= 0.0 {
            return Self::None;
        }
        HOUR_THRESHOLDS
            .iter()
            .find(|(bound, _)| hours >= *bound)
            .map_or(Self::Light, |&(_, level)| level)
    }

    pub fn from_seconds(total_seconds: f64) -> Self {
        Self::from_hours(total_seconds / SECONDS_PER_HOUR)
    }

    /// Position in the level tables, 0-5
    pub fn index(self) -> usize {
        self as usize
    }

    /// Green channel value for this level
    pub fn green(self) -> u8 {
        GREEN_LEVELS[self.index()]
    }

    /// Rendered cell (exactly one visible column wide)
    pub fn cell(self, palette: Palette) -> String {
        if palette.is_colored() {
            palette.paint(
                Color::Rgb {
                    r: 0,
                    g: self.green(),
                    b: 0,
                },
                HEATMAP_GLYPH,
            )
        } else {
            MONO_GLYPHS[self.index()].to_string()
        }
    }
}

/// Row/column shape chosen for a given day count and terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub height: usize,
    pub columns: usize,
    /// Visible width of one row: `2 * columns - 1`
    pub width: usize,
}

impl GridShape {
    fn new(num_days: usize, height: usize) -> Self {
        let columns = num_days.div_ceil(height);
        Self {
            height,
            columns,
            width: (CELL_WIDTH * columns).saturating_sub(1),
        }
    }

    /// Grow the row count from [`MIN_HEIGHT`] until the grid, plus card chrome,
    /// fits in `terminal_columns`. Stops at a single column (`height >= num_days`)
    /// since the grid cannot get any narrower.
    pub fn fit(num_days: usize, terminal_columns: usize) -> Self {
        let mut shape = Self::new(num_days, MIN_HEIGHT);
        while shape.width + CARD_CHROME_WIDTH > terminal_columns && shape.height < num_days {
            shape = Self::new(num_days, shape.height + 1);
        }
        shape
    }
}

/// Render `days` as a heatmap that fits `terminal_columns`.
///
/// Returns the grid rows and their shared visible width. Gap days inside the
/// span render as empty cells. Empty input, an unparseable date, or a last
/// date before the first all produce `(vec![], 0)`.
pub fn render_heatmap(
    days: &[DailySample],
    terminal_columns: usize,
    palette: Palette,
) -> (Vec<String>, usize) {
    let span = match DaySpan::from_samples(days) {
        Ok(Some(span)) => span,
        Ok(None) => return (Vec::new(), 0),
        Err(e) => {
            tracing::debug!(error = %e, "heatmap input rejected");
            return (Vec::new(), 0);
        }
    };

    let shape = GridShape::fit(span.num_days, terminal_columns);
    let mut rows = vec![String::new(); shape.height];

    for (index, date) in span.start.iter_days().take(span.num_days).enumerate() {
        let seconds = span.seconds.get(&date).copied().unwrap_or(0.0);
        let row = &mut rows[index % shape.height];
        row.push_str(&HeatLevel::from_seconds(seconds).cell(palette));
        row.push(' ');
    }

    for row in &mut rows {
        let trimmed = row.trim_end_matches(' ').len();
        row.truncate(trimmed);
    }
    pad_ragged_rows(&mut rows, span.num_days);

    (rows, shape.width)
}

/// Bring rows that missed a cell in the final column up to full width.
///
/// `filled` is the number of days walked. Rows `filled % height ..` got one
/// cell fewer than the rest. In the first column a missing cell is a lone
/// glyph (one space); past it the row also lacks the separator (two spaces).
/// When `filled` is a multiple of the row count nothing is padded.
pub fn pad_ragged_rows(rows: &mut [String], filled: usize) {
    let height = rows.len();
    if height == 0 {
        return;
    }
    let mut index = filled;
    while index % height != 0 {
        let pad = if index / height < 1 { " " } else { "  " };
        rows[index % height].push_str(pad);
        index += 1;
    }
}

/// Inclusive day span reconstructed from the first and last samples
struct DaySpan {
    start: NaiveDate,
    num_days: usize,
    seconds: HashMap<NaiveDate, f64>,
}

impl DaySpan {
    fn from_samples(days: &[DailySample]) -> Result<Option<Self>> {
        let (Some(first), Some(last)) = (days.first(), days.last()) else {
            return Ok(None);
        };
        let start = first.calendar_date()?;
        let end = last.calendar_date()?;
        if end < start {
            return Err(HeatcardError::Parse(format!(
                "last date {} is before first date {}",
                end, start
            )));
        }

        let mut seconds = HashMap::with_capacity(days.len());
        for day in days {
            let date = day.calendar_date()?;
            if date < start || date > end {
                continue;
            }
            *seconds.entry(date).or_insert(0.0) += day.total_seconds;
        }

        Ok(Some(Self {
            start,
            num_days: (end - start).num_days() as usize + 1,
            seconds,
        }))
    }
}
