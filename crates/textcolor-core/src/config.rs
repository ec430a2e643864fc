//! The palette and hash provider used to map text to a color.
//!
//! A [`Configuration`] is built with chained `with_*` calls. Each call
//! validates its argument immediately and returns the updated configuration,
//! so a bad value is reported where it is set rather than when a color is
//! computed.

use std::fmt;
use std::sync::Arc;

use crate::error::TextColorError;
use crate::hash::{HashAlgorithm, HashProvider, Md5HashProvider, Sha256HashProvider};

/// Saturation and lightness values of the default palette.
pub const DEFAULT_PALETTE: [f32; 3] = [0.35, 0.5, 0.65];

/// Alpha of the default configuration.
pub const DEFAULT_ALPHA: f32 = 1.0;

/// Palette, alpha and hash provider for text-to-color mapping.
///
/// [`Configuration::default`] returns a fresh value on every call: MD5
/// hashing, saturation and lightness drawn from [`DEFAULT_PALETTE`], fully
/// opaque. Configurations are cheap to clone and share the hash provider.
///
/// # Examples
///
/// ```
/// use textcolor_core::Configuration;
///
/// let config = Configuration::default()
///     .with_sha256_hash_provider()
///     .with_alpha(0.5)?
///     .with_possible_saturation_values(&[0.9, 0.1, 0.2, 0.3])?;
/// assert_eq!(config.alpha(), 0.5);
/// assert_eq!(config.hash_provider().name(), "sha256");
/// # Ok::<(), textcolor_core::TextColorError>(())
/// ```
#[derive(Clone)]
pub struct Configuration {
    saturation_values: Vec<f32>,
    lightness_values: Vec<f32>,
    hash_provider: Arc<dyn HashProvider>,
    alpha: f32,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            saturation_values: DEFAULT_PALETTE.to_vec(),
            lightness_values: DEFAULT_PALETTE.to_vec(),
            hash_provider: Arc::new(Md5HashProvider),
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("saturation_values", &self.saturation_values)
            .field("lightness_values", &self.lightness_values)
            .field("hash_provider", &self.hash_provider.name())
            .field("alpha", &self.alpha)
            .finish()
    }
}

/// Check that a palette is non-empty and every entry lies in `0.0..=1.0`.
fn validate_palette(parameter: &'static str, values: &[f32]) -> Result<(), TextColorError> {
    if values.is_empty() {
        tracing::debug!(parameter, "rejected empty palette");
        return Err(TextColorError::EmptyPalette { parameter });
    }
    if let Some((index, &value)) = values
        .iter()
        .enumerate()
        .find(|(_, v)| !(0.0..=1.0).contains(*v))
    {
        tracing::debug!(parameter, index, value, "rejected palette value");
        return Err(TextColorError::PaletteValueOutOfRange {
            parameter,
            index,
            value,
        });
    }
    Ok(())
}

impl Configuration {
    /// Same as [`Configuration::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the candidate saturation values.
    ///
    /// # Errors
    ///
    /// Returns [`TextColorError::EmptyPalette`] if `values` is empty and
    /// [`TextColorError::PaletteValueOutOfRange`] if any value is outside
    /// `0.0..=1.0`.
    pub fn with_possible_saturation_values(
        mut self,
        values: &[f32],
    ) -> Result<Self, TextColorError> {
        validate_palette("saturation", values)?;
        self.saturation_values = values.to_vec();
        Ok(self)
    }

    /// Replace the candidate lightness values.
    ///
    /// # Errors
    ///
    /// Returns [`TextColorError::EmptyPalette`] if `values` is empty and
    /// [`TextColorError::PaletteValueOutOfRange`] if any value is outside
    /// `0.0..=1.0`.
    pub fn with_possible_lightness_values(
        mut self,
        values: &[f32],
    ) -> Result<Self, TextColorError> {
        validate_palette("lightness", values)?;
        self.lightness_values = values.to_vec();
        Ok(self)
    }

    /// Use a caller-supplied hash provider.
    ///
    /// ```
    /// use textcolor_core::Configuration;
    ///
    /// let config = Configuration::default().with_hash_provider(|_: &str| 157_894u64);
    /// assert_eq!(config.color_for("Hello world").to_string(), "#be87c5ff");
    /// ```
    pub fn with_hash_provider<P>(self, provider: P) -> Self
    where
        P: HashProvider + 'static,
    {
        self.with_shared_hash_provider(Arc::new(provider))
    }

    /// Use a hash provider that is already shared behind an [`Arc`].
    pub fn with_shared_hash_provider(mut self, provider: Arc<dyn HashProvider>) -> Self {
        self.hash_provider = provider;
        self
    }

    pub fn with_md5_hash_provider(self) -> Self {
        self.with_hash_provider(Md5HashProvider)
    }

    pub fn with_sha256_hash_provider(self) -> Self {
        self.with_hash_provider(Sha256HashProvider)
    }

    /// Use one of the built-in providers.
    pub fn with_hash_algorithm(self, algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Md5 => self.with_md5_hash_provider(),
            HashAlgorithm::Sha256 => self.with_sha256_hash_provider(),
        }
    }

    /// Use a built-in provider selected by name (`"md5"` or `"sha256"`).
    ///
    /// # Errors
    ///
    /// Returns [`TextColorError::UnknownHashAlgorithm`] for any other name.
    pub fn with_hash_algorithm_named(self, name: &str) -> Result<Self, TextColorError> {
        let algorithm = name.parse::<HashAlgorithm>().inspect_err(|_| {
            tracing::debug!(name, "rejected hash algorithm name");
        })?;
        Ok(self.with_hash_algorithm(algorithm))
    }

    /// Set the alpha of produced colors.
    ///
    /// # Errors
    ///
    /// Returns [`TextColorError::AlphaOutOfRange`] if `value` is outside
    /// `0.0..=1.0`.
    pub fn with_alpha(mut self, value: f32) -> Result<Self, TextColorError> {
        if !(0.0..=1.0).contains(&value) {
            tracing::debug!(value, "rejected alpha");
            return Err(TextColorError::AlphaOutOfRange { value });
        }
        self.alpha = value;
        Ok(self)
    }

    pub fn saturation_values(&self) -> &[f32] {
        &self.saturation_values
    }

    pub fn lightness_values(&self) -> &[f32] {
        &self.lightness_values
    }

    pub fn hash_provider(&self) -> &dyn HashProvider {
        self.hash_provider.as_ref()
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}
