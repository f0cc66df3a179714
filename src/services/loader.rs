//! Input document loading
//!
//! Accepts either a summaries response (`{"data": [{"range": {"start": ..},
//! "grand_total": {"total_seconds": ..}}]}`) or a bare array of
//! `{"date": .., "total_seconds": ..}` samples.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::types::{DailySample, HeatcardError, Result};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InputDocument {
    Summaries(SummariesResponse),
    Samples(Vec<DailySample>),
}

#[derive(Debug, Deserialize)]
struct SummariesResponse {
    data: Vec<SummaryDay>,
}

#[derive(Debug, Deserialize)]
struct SummaryDay {
    range: SummaryRange,
    grand_total: GrandTotal,
}

#[derive(Debug, Deserialize)]
struct SummaryRange {
    start: String,
}

#[derive(Debug, Deserialize)]
struct GrandTotal {
    #[serde(default)]
    total_seconds: f64,
}

impl From<SummaryDay> for DailySample {
    fn from(day: SummaryDay) -> Self {
        DailySample::new(day.range.start, day.grand_total.total_seconds)
    }
}

/// Decode samples from a JSON document (buffer is used as simd-json scratch space)
pub fn parse_samples(bytes: &mut [u8]) -> Result<Vec<DailySample>> {
    let doc: InputDocument =
        simd_json::from_slice(bytes).map_err(|e| HeatcardError::Parse(e.to_string()))?;

    Ok(match doc {
        InputDocument::Summaries(resp) => resp.data.into_iter().map(DailySample::from).collect(),
        InputDocument::Samples(samples) => samples,
    })
}

/// Read samples from `path`, or from stdin when `path` is `None` or `-`
pub fn load_samples(path: Option<&Path>) -> Result<Vec<DailySample>> {
    let mut bytes = match path {
        Some(p) if p != Path::new("-") => fs::read(p)?,
        _ => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    tracing::debug!(bytes = bytes.len(), "read input document");

    let samples = parse_samples(&mut bytes)?;
    tracing::info!(samples = samples.len(), "loaded daily samples");
    Ok(samples)
}
