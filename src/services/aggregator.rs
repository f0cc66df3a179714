//! Aggregator service for normalizing samples and computing statistics

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::types::{BreakdownRow, DailySample, DateWindow, Result, SummaryStats};

/// Aggregator for daily activity samples
pub struct Aggregator;

impl Aggregator {
    /// Merge samples by calendar date (sorted ascending, durations summed).
    ///
    /// With a window, samples outside it are dropped and its first and last
    /// day are present (as zero days if needed) so the calendar covers the
    /// whole window.
    pub fn daily(samples: &[DailySample], window: Option<&DateWindow>) -> Result<Vec<DailySample>> {
        let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();

        for sample in samples {
            let date = sample.calendar_date()?;
            if window.is_some_and(|w| !w.contains(date)) {
                continue;
            }
            *by_date.entry(date).or_insert(0.0) += sample.total_seconds.max(0.0);
        }

        if let Some(w) = window {
            by_date.entry(w.start).or_insert(0.0);
            by_date.entry(w.end).or_insert(0.0);
        }

        Ok(by_date
            .into_iter()
            .map(|(date, seconds)| DailySample::from_date(date, seconds))
            .collect())
    }

    /// One row per calendar day from the first to the last sample, gaps as zero
    pub fn breakdown(samples: &[DailySample]) -> Result<Vec<BreakdownRow>> {
        let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for sample in samples {
            *by_date.entry(sample.calendar_date()?).or_insert(0.0) += sample.total_seconds;
        }

        let (Some(&start), Some(&end)) = (by_date.keys().next(), by_date.keys().next_back()) else {
            return Ok(Vec::new());
        };

        Ok(start
            .iter_days()
            .take_while(|d| *d <= end)
            .map(|date| BreakdownRow {
                date,
                total_seconds: by_date.get(&date).copied().unwrap_or(0.0),
            })
            .collect())
    }

    /// Summary statistics over the breakdown of `samples`
    pub fn summary(samples: &[DailySample]) -> Result<SummaryStats> {
        Ok(SummaryStats::from_rows(&Self::breakdown(samples)?))
    }
}
