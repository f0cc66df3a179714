//! Daily activity types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{HeatcardError, Result};

/// Seconds per hour, used for every duration to hours conversion
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// One calendar day of observed activity.
///
/// `date` is kept as the raw string from the input document; it is parsed
/// lazily so the heatmap can fail to empty output on bad dates instead of
/// rejecting the whole document up front.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySample {
    pub date: String,
    pub total_seconds: f64,
}

impl DailySample {
    pub fn new(date: impl Into<String>, total_seconds: f64) -> Self {
        Self {
            date: date.into(),
            total_seconds,
        }
    }

    pub fn from_date(date: NaiveDate, total_seconds: f64) -> Self {
        Self::new(date.format("%Y-%m-%d").to_string(), total_seconds)
    }

    /// Calendar date of this sample.
    /// Accepts `YYYY-MM-DD` or a timestamp whose date precedes `T`.
    pub fn calendar_date(&self) -> Result<NaiveDate> {
        let day = self.date.split_once('T').map_or(self.date.as_str(), |(d, _)| d);
        NaiveDate::parse_from_str(day.trim(), "%Y-%m-%d")
            .map_err(|e| HeatcardError::Parse(format!("invalid date '{}': {}", self.date, e)))
    }
}

/// One row of the per-day breakdown; gap days appear with zero seconds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BreakdownRow {
    pub date: NaiveDate,
    pub total_seconds: f64,
}

/// Inclusive calendar window selected by a range flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub heading: String,
}

impl DateWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryStats {
    pub total_seconds: f64,
    pub daily_average_seconds: f64,
    pub active_days: u32,
    pub span_days: u32,
    pub best_day: Option<(NaiveDate, f64)>,
}

impl SummaryStats {
    /// Expects rows covering the whole span, gap days included
    pub fn from_rows(rows: &[BreakdownRow]) -> Self {
        if rows.is_empty() {
            return Self {
                total_seconds: 0.0,
                daily_average_seconds: 0.0,
                active_days: 0,
                span_days: 0,
                best_day: None,
            };
        }

        let span_days = rows.len() as u32;
        let mut total_seconds = 0.0;
        let mut active_days = 0;
        let mut best_day: Option<(NaiveDate, f64)> = None;

        for row in rows {
            total_seconds += row.total_seconds;
            if row.total_seconds > 0.0 {
                active_days += 1;
            }

            match &best_day {
                None if row.total_seconds > 0.0 => best_day = Some((row.date, row.total_seconds)),
                Some((_, max)) if row.total_seconds > *max => {
                    best_day = Some((row.date, row.total_seconds));
                }
                _ => {}
            }
        }

        Self {
            total_seconds,
            daily_average_seconds: total_seconds / span_days as f64,
            active_days,
            span_days,
            best_day,
        }
    }
}
