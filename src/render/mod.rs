//! Terminal rendering: cards, heatmaps and pages

pub mod ansi;
pub mod card;
pub mod heatmap;
pub mod page;
pub mod palette;
pub mod views;

pub use ansi::visible_width;
pub use card::{cardify, CardBlock};
pub use heatmap::{render_heatmap, HeatLevel};
pub use palette::{ColorMode, Palette, Theme};
