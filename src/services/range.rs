//! Range flag parsing and date window selection

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::types::{DateWindow, HeatcardError};

/// Years accepted as a bare range flag
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2100;

/// A `--range` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSpec {
    Today,
    Yesterday,
    LastWeek,
    LastMonth,
    LastSixMonths,
    LastYear,
    /// The whole input span
    All,
    Year(i32),
}

/// Parse a bare calendar year (1900-2100)
pub fn parse_year(s: &str) -> Option<i32> {
    s.trim().parse::<i32>().ok().filter(|y| YEAR_RANGE.contains(y))
}

impl FromStr for RangeSpec {
    type Err = HeatcardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(year) = parse_year(s) {
            return Ok(Self::Year(year));
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "yesterday" => Ok(Self::Yesterday),
            "7d" => Ok(Self::LastWeek),
            "30d" => Ok(Self::LastMonth),
            "6m" => Ok(Self::LastSixMonths),
            "1y" => Ok(Self::LastYear),
            "all" => Ok(Self::All),
            _ => Err(HeatcardError::Range(s.to_string())),
        }
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => write!(f, "today"),
            Self::Yesterday => write!(f, "yesterday"),
            Self::LastWeek => write!(f, "7d"),
            Self::LastMonth => write!(f, "30d"),
            Self::LastSixMonths => write!(f, "6m"),
            Self::LastYear => write!(f, "1y"),
            Self::All => write!(f, "all"),
            Self::Year(y) => write!(f, "{}", y),
        }
    }
}

impl RangeSpec {
    /// Range drawn by the heatmap: `all` and `yesterday` become the last 12 months
    pub fn for_heatmap(self) -> Self {
        match self {
            Self::All | Self::Yesterday => Self::LastYear,
            other => other,
        }
    }

    /// Inclusive window ending relative to `today`; `None` for [`RangeSpec::All`]
    pub fn window(self, today: NaiveDate) -> Option<DateWindow> {
        let (start, end, heading) = match self {
            Self::Today => (today, today, "Today".to_string()),
            Self::Yesterday => {
                let d = today - Duration::days(1);
                (d, d, "Yesterday".to_string())
            }
            Self::LastWeek => (today - Duration::days(6), today, "Last 7 days".to_string()),
            Self::LastMonth => (today - Duration::days(29), today, "Last 30 days".to_string()),
            Self::LastSixMonths => (
                today.checked_sub_months(Months::new(6)).unwrap_or(today),
                today,
                "Last 6 months".to_string(),
            ),
            Self::LastYear => (
                today
                    .checked_sub_months(Months::new(12))
                    .map_or(today, |d| d + Duration::days(1)),
                today,
                "Last 12 months".to_string(),
            ),
            Self::Year(year) => {
                let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(today);
                let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(today);
                (start, end, format!("Year {}", year))
            }
            Self::All => return None,
        };
        Some(DateWindow {
            start,
            end,
            heading,
        })
    }
}

/// Window of the last `days` days ending today (`--days`). Zero counts as one.
pub fn last_n_days(days: u32, today: NaiveDate) -> DateWindow {
    let days = days.max(1);
    let heading = if days == 1 {
        "Today".to_string()
    } else {
        format!("Last {} days", days)
    };
    let start = today
        .checked_sub_signed(Duration::days(i64::from(days) - 1))
        .unwrap_or(NaiveDate::MIN);
    DateWindow {
        start,
        end: today,
        heading,
    }
}

/// Heading for a page that covers all input data
pub const ALL_TIME_HEADING: &str = "All time";

/// Whether `window` reaches past `today` (e.g. the current calendar year)
pub fn extends_past(window: &DateWindow, today: NaiveDate) -> bool {
    window.end > today && window.start.year() <= today.year()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ========== parse tests ==========

    #[test]
    fn test_parse_named_ranges() {
        assert_eq!("today".parse::<RangeSpec>().unwrap(), RangeSpec::Today);
        assert_eq!("yesterday".parse::<RangeSpec>().unwrap(), RangeSpec::Yesterday);
        assert_eq!("7d".parse::<RangeSpec>().unwrap(), RangeSpec::LastWeek);
        assert_eq!("30d".parse::<RangeSpec>().unwrap(), RangeSpec::LastMonth);
        assert_eq!("6m".parse::<RangeSpec>().unwrap(), RangeSpec::LastSixMonths);
        assert_eq!("1y".parse::<RangeSpec>().unwrap(), RangeSpec::LastYear);
        assert_eq!("all".parse::<RangeSpec>().unwrap(), RangeSpec::All);
        assert_eq!("TODAY".parse::<RangeSpec>().unwrap(), RangeSpec::Today);
    }

    #[test]
    fn test_parse_year() {
        assert_eq!("2024".parse::<RangeSpec>().unwrap(), RangeSpec::Year(2024));
        assert_eq!(parse_year("1900"), Some(1900));
        assert_eq!(parse_year("2100"), Some(2100));
        assert_eq!(parse_year("1899"), None);
        assert_eq!(parse_year("2101"), None);
        assert_eq!(parse_year("7d"), None);
    }

    #[test]
    fn test_parse_invalid() {
        let err = "2w".parse::<RangeSpec>().unwrap_err();
        assert!(matches!(err, HeatcardError::Range(ref s) if s == "2w"));
        assert!("1800".parse::<RangeSpec>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for spec in [
            RangeSpec::Today,
            RangeSpec::LastWeek,
            RangeSpec::LastSixMonths,
            RangeSpec::LastYear,
            RangeSpec::All,
            RangeSpec::Year(2023),
        ] {
            assert_eq!(spec.to_string().parse::<RangeSpec>().unwrap(), spec);
        }
    }

    // ========== window tests ==========

    #[test]
    fn test_window_today_and_yesterday() {
        let today = date(2024, 3, 1);
        let w = RangeSpec::Today.window(today).unwrap();
        assert_eq!((w.start, w.end), (today, today));
        assert_eq!(w.heading, "Today");

        let w = RangeSpec::Yesterday.window(today).unwrap();
        assert_eq!((w.start, w.end), (date(2024, 2, 29), date(2024, 2, 29)));
    }

    #[test]
    fn test_window_last_days() {
        let today = date(2024, 3, 10);
        let w = RangeSpec::LastWeek.window(today).unwrap();
        assert_eq!(w.start, date(2024, 3, 4));
        assert_eq!(w.num_days(), 7);
        assert_eq!(w.heading, "Last 7 days");

        let w = RangeSpec::LastMonth.window(today).unwrap();
        assert_eq!(w.num_days(), 30);
    }

    #[test]
    fn test_window_six_months_clamps_month_end() {
        let w = RangeSpec::LastSixMonths.window(date(2024, 8, 31)).unwrap();
        assert_eq!(w.start, date(2024, 2, 29));
        assert_eq!(w.heading, "Last 6 months");
    }

    #[test]
    fn test_window_last_year() {
        let w = RangeSpec::LastYear.window(date(2024, 6, 15)).unwrap();
        assert_eq!(w.start, date(2023, 6, 16));
        assert_eq!(w.end, date(2024, 6, 15));
        assert_eq!(w.num_days(), 366);
        assert_eq!(w.heading, "Last 12 months");
    }

    #[test]
    fn test_window_calendar_year() {
        let w = RangeSpec::Year(2023).window(date(2024, 6, 15)).unwrap();
        assert_eq!(w.start, date(2023, 1, 1));
        assert_eq!(w.end, date(2023, 12, 31));
        assert_eq!(w.heading, "Year 2023");
    }

    #[test]
    fn test_window_all_is_unbounded() {
        assert_eq!(RangeSpec::All.window(date(2024, 6, 15)), None);
    }

    #[test]
    fn test_for_heatmap_caps_open_ranges() {
        assert_eq!(RangeSpec::All.for_heatmap(), RangeSpec::LastYear);
        assert_eq!(RangeSpec::Yesterday.for_heatmap(), RangeSpec::LastYear);
        assert_eq!(RangeSpec::Today.for_heatmap(), RangeSpec::Today);
        assert_eq!(RangeSpec::LastMonth.for_heatmap(), RangeSpec::LastMonth);
        assert_eq!(RangeSpec::Year(2022).for_heatmap(), RangeSpec::Year(2022));
    }

    #[test]
    fn test_last_n_days() {
        let today = date(2024, 3, 10);
        let w = last_n_days(14, today);
        assert_eq!(w.start, date(2024, 2, 26));
        assert_eq!(w.end, today);
        assert_eq!(w.num_days(), 14);
        assert_eq!(w.heading, "Last 14 days");
    }

    #[test]
    fn test_last_n_days_single_day_is_today() {
        let today = date(2024, 3, 10);
        let w = last_n_days(1, today);
        assert_eq!((w.start, w.end), (today, today));
        assert_eq!(w.heading, "Today");
        assert_eq!(last_n_days(0, today), w);
    }

    #[test]
    fn test_last_n_days_huge_count_saturates() {
        let w = last_n_days(u32::MAX, date(2024, 3, 10));
        assert_eq!(w.start, NaiveDate::MIN);
    }

    #[test]
    fn test_extends_past() {
        let today = date(2024, 6, 15);
        assert!(extends_past(&RangeSpec::Year(2024).window(today).unwrap(), today));
        assert!(!extends_past(&RangeSpec::Year(2023).window(today).unwrap(), today));
        assert!(!extends_past(&RangeSpec::LastWeek.window(today).unwrap(), today));
    }
}
