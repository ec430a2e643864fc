//! Error types for building a text-to-color configuration.
//!
//! Every variant describes an invalid argument passed to a
//! [`Configuration`](crate::Configuration) builder method. Hashing and color
//! conversion never fail.

use thiserror::Error;

/// Errors that can occur while building a [`Configuration`](crate::Configuration).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TextColorError {
    /// A palette (saturation or lightness values) was given no values.
    #[error("{parameter}: must have at least one value")]
    EmptyPalette {
        /// Which palette ("saturation" or "lightness").
        parameter: &'static str,
    },

    /// A palette entry lies outside `0.0..=1.0` (or is NaN).
    #[error("{parameter}: value {value} at index {index} must be in range 0.0..=1.0")]
    PaletteValueOutOfRange {
        /// Which palette ("saturation" or "lightness").
        parameter: &'static str,
        /// Position of the offending value.
        index: usize,
        /// The offending value.
        value: f32,
    },

    /// The alpha value lies outside `0.0..=1.0` (or is NaN).
    #[error("alpha: value {value} must be in range 0.0..=1.0")]
    AlphaOutOfRange {
        /// The offending value.
        value: f32,
    },

    /// A hash algorithm was selected by a name that is not recognized.
    #[error("unknown hash algorithm {0:?} (expected \"md5\" or \"sha256\")")]
    UnknownHashAlgorithm(String),
}
