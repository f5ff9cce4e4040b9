//! Parameter definitions with documented units and semantics.
//!
//! All magic numbers are extracted here with:
//! - Units (pixels, seconds, radians, dB)
//! - Documented ranges and meanings
//! - A `validate()` where a bad value would corrupt the simulation

mod analyzer;
mod field;
mod spectrum;

pub use analyzer::AnalyzerConfig;
pub use field::{CanvasSize, FieldConfig};
pub use spectrum::SpectrumConfig;
