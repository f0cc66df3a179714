//! Heatmap, summary and breakdown pages

use super::ansi::{pad_to, visible_width};
use super::card::{CardBlock, CARD_CHROME_WIDTH};
use super::heatmap::{render_heatmap, HeatLevel};
use super::page::{arrange, Section};
use super::palette::Palette;
use crate::types::{BreakdownRow, DailySample, SummaryStats};

/// Width of the label column in the summary card
const LABEL_WIDTH: usize = 15;

/// Cells in a breakdown bar
const BAR_WIDTH: usize = 10;

const LEGEND_LEVELS: [HeatLevel; 6] = [
    HeatLevel::None,
    HeatLevel::Light,
    HeatLevel::Moderate,
    HeatLevel::Medium,
    HeatLevel::High,
    HeatLevel::Max,
];

/// Format a duration as "3h 20m", "45m" or "0m"
pub fn format_duration(seconds: f64) -> String {
    let minutes = (seconds.max(0.0) / 60.0).round() as u64;
    let (h, m) = (minutes / 60, minutes % 60);
    if h > 0 {
        format!("{}h {}m", h, m)
    } else {
        format!("{}m", m)
    }
}

/// Format a bar based on a value's share of the maximum
/// Example: value=5, max=10, width=8 → "▓▓▓▓░░░░"
pub fn format_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || width == 0 {
        return "░".repeat(width);
    }
    let ratio = (value / max).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).round() as usize).min(width);
    format!("{}{}", "▓".repeat(filled), "░".repeat(width - filled))
}

/// "Less ■ ■ ■ ■ ■ ■ More"
fn legend(palette: Palette) -> String {
    let cells: Vec<String> = LEGEND_LEVELS.iter().map(|l| l.cell(palette)).collect();
    format!(
        "{} {} {}",
        palette.muted("Less"),
        cells.join(" "),
        palette.muted("More")
    )
}

fn labeled(label: &str, value: &str, palette: Palette) -> String {
    format!(
        "{}{}",
        palette.muted(&pad_to(label, LABEL_WIDTH)),
        palette.positive(value)
    )
}

/// Summary card content: total, daily average, active days, best day
pub fn summary_block(stats: &SummaryStats, palette: Palette) -> CardBlock {
    let best = stats
        .best_day
        .map(|(date, seconds)| format!("{} ({})", date.format("%Y-%m-%d"), format_duration(seconds)))
        .unwrap_or_else(|| "-".to_string());

    CardBlock::new(vec![
        labeled("Total time", &format_duration(stats.total_seconds), palette),
        labeled(
            "Daily average",
            &format_duration(stats.daily_average_seconds),
            palette,
        ),
        labeled(
            "Active days",
            &format!("{} / {}", stats.active_days, stats.span_days),
            palette,
        ),
        labeled("Best day", &best, palette),
    ])
}

/// Breakdown card content: one line per day, bar scaled to the busiest day
pub fn breakdown_block(rows: &[BreakdownRow], palette: Palette) -> CardBlock {
    let max = rows.iter().map(|r| r.total_seconds).fold(0.0, f64::max);
    let durations: Vec<String> = rows.iter().map(|r| format_duration(r.total_seconds)).collect();
    let duration_width = durations.iter().map(String::len).max().unwrap_or(0);

    let lines = rows
        .iter()
        .zip(&durations)
        .map(|(row, duration)| {
            format!(
                "{}  {}  {:>width$}",
                palette.muted(&row.date.format("%Y-%m-%d").to_string()),
                palette.positive(&format_bar(row.total_seconds, max, BAR_WIDTH)),
                duration,
                width = duration_width
            )
        })
        .collect();

    CardBlock::new(lines)
}

/// Heatmap card, plus the summary card beside or below it.
/// Returns no lines when there is nothing to draw.
pub fn heatmap_page(
    days: &[DailySample],
    stats: &SummaryStats,
    heading: &str,
    terminal_columns: usize,
    palette: Palette,
) -> Vec<String> {
    let (mut grid, grid_width) = render_heatmap(days, terminal_columns, palette);
    if grid.is_empty() {
        return Vec::new();
    }

    let mut content_width = grid_width;
    let key = legend(palette);
    let key_width = visible_width(&key);
    if key_width + CARD_CHROME_WIDTH <= terminal_columns {
        grid.push(String::new());
        grid.push(key);
        content_width = content_width.max(key_width);
    }

    let sections = vec![
        Section::new(heading, CardBlock::with_width(grid, content_width)),
        Section::new("Summary", summary_block(stats, palette)),
    ];
    arrange(sections, terminal_columns, palette)
}

pub fn summary_page(stats: &SummaryStats, heading: &str, palette: Palette) -> Vec<String> {
    if stats.span_days == 0 {
        return Vec::new();
    }
    summary_block(stats, palette).compose(heading, palette).0
}

pub fn breakdown_page(rows: &[BreakdownRow], heading: &str, palette: Palette) -> Vec<String> {
    breakdown_block(rows, palette).compose(heading, palette).0
}
