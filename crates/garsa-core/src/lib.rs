use thiserror::Error;

mod records;
mod weight;

pub use records::{ProductFragments, ProductRecord};
pub use weight::{Weight, WeightUnit};

/// Display sentinel meaning "no usable value" in a [`ProductRecord`] field.
///
/// Covers both genuine absence (no weight discovered) and parse failure
/// (weight text without a recognizable unit). The distinction exists in the
/// extraction types; it is deliberately collapsed at the display boundary.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unrecognized weight unit: {0}")]
    UnrecognizedUnit(String),
}
