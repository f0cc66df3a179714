//! heatcard: calendar heatmaps and stat cards for daily activity time
//!
//! The rendering core lives in [`render`]: [`render::cardify`] wraps lines in
//! a titled border and [`render::render_heatmap`] lays out a day-per-cell
//! calendar that fits the terminal width. Both are pure functions.

pub mod cli;
pub mod render;
pub mod services;
pub mod types;
