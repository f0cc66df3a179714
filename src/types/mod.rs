//! Type definitions for heatcard

mod error;
mod sample;

pub use error::*;
pub use sample::*;
