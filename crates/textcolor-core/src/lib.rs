//! # textcolor-core
//!
//! Deterministic text-to-color mapping.
//!
//! A text is hashed to a `u64`, the hash is split into a hue and indices into
//! configurable saturation and lightness palettes, and the resulting HSL color
//! is converted to 8-bit RGBA. The same text always maps to the same color,
//! which makes this handy for avatar or tag colors that are never stored.
//!
//! ## Quick Start
//!
//! ```
//! use textcolor_core::{to_color, to_color_with, Rgba};
//!
//! // Default configuration: MD5, palette {0.35, 0.5, 0.65}, opaque.
//! assert_eq!(to_color("A"), Rgba::new(121, 191, 210, 255));
//!
//! // Adjust the configuration per call.
//! let color = to_color_with("A", |c| {
//!     c.with_sha256_hash_provider()
//!         .with_possible_lightness_values(&[0.3, 0.6])
//! })?;
//! assert_eq!(color, to_color_with("A", |c| {
//!     c.with_sha256_hash_provider()
//!         .with_possible_lightness_values(&[0.3, 0.6])
//! })?);
//! # Ok::<(), textcolor_core::TextColorError>(())
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod hash;

mod mapper;

// Re-export primary items at crate root.
pub use color::{Hsla, Rgba};
pub use config::Configuration;
pub use error::TextColorError;
pub use hash::{HashAlgorithm, HashProvider, Md5HashProvider, Sha256HashProvider};
pub use mapper::{to_color, to_color_with, to_hsl, to_hsl_with};
