//! Text-to-color mapping: hash the text, then split the hash into a hue and
//! indices into the saturation and lightness palettes.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::color::{Hsla, Rgba};
use crate::config::Configuration;
use crate::error::TextColorError;

/// The hue is `hash % 359`, but the hash then advances by `hash / 360`.
/// Both constants are part of the mapping and changing either one changes
/// the color of almost every text.
const HUE_MODULUS: u64 = 359;
const HUE_DIVISOR: u64 = 360;

impl Configuration {
    /// Map `text` to an HSL color. `None` maps like the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use textcolor_core::Configuration;
    ///
    /// let hsla = Configuration::default().hsl_for("");
    /// assert_eq!((hsla.h, hsla.s, hsla.l, hsla.a), (0, 0.35, 0.35, 1.0));
    /// ```
    pub fn hsl_for<'a>(&self, text: impl Into<Option<&'a str>>) -> Hsla {
        let text = text.into().unwrap_or_default();
        let hash = self.hash_provider().hash(text);

        let saturation = self.saturation_values();
        let lightness = self.lightness_values();

        let hue = hash % HUE_MODULUS;
        let mut rest = hash / HUE_DIVISOR;

        let saturation_index = (rest % saturation.len() as u64) as usize;
        rest /= saturation.len() as u64;

        let lightness_index = (rest % lightness.len() as u64) as usize;

        tracing::trace!(
            hash,
            hue,
            saturation_index,
            lightness_index,
            provider = self.hash_provider().name(),
            "mapped text to hsl"
        );

        Hsla::new(
            hue,
            saturation[saturation_index],
            lightness[lightness_index],
            self.alpha(),
        )
    }

    /// Map `text` to an RGBA color. `None` maps like the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use textcolor_core::{Configuration, Rgba};
    ///
    /// let config = Configuration::default();
    /// assert_eq!(config.color_for("A"), Rgba::new(121, 191, 210, 255));
    /// assert_eq!(config.color_for(None), config.color_for(""));
    /// ```
    pub fn color_for<'a>(&self, text: impl Into<Option<&'a str>>) -> Rgba {
        self.hsl_for(text).to_rgba()
    }

    /// Map every text in `texts`, preserving order.
    ///
    /// With the `parallel` feature the texts are mapped on the rayon thread
    /// pool.
    #[cfg(feature = "parallel")]
    pub fn colors_for<S>(&self, texts: &[S]) -> Vec<Rgba>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.color_for(text.as_ref()))
            .collect()
    }

    /// Map every text in `texts`, preserving order.
    #[cfg(not(feature = "parallel"))]
    pub fn colors_for<S>(&self, texts: &[S]) -> Vec<Rgba>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .iter()
            .map(|text| self.color_for(text.as_ref()))
            .collect()
    }
}

/// Map `text` to an HSL color with the default configuration.
pub fn to_hsl<'a>(text: impl Into<Option<&'a str>>) -> Hsla {
    Configuration::default().hsl_for(text)
}

/// Map `text` to an RGBA color with the default configuration.
///
/// # Examples
///
/// ```
/// use textcolor_core::{to_color, Rgba};
///
/// assert_eq!(to_color(" "), Rgba::new(89, 45, 134, 255));
/// ```
pub fn to_color<'a>(text: impl Into<Option<&'a str>>) -> Rgba {
    Configuration::default().color_for(text)
}

/// Map `text` to an HSL color, starting from the default configuration and
/// letting `configure` adjust it first.
///
/// # Errors
///
/// Returns whatever error `configure` returns.
pub fn to_hsl_with<'a, F>(
    text: impl Into<Option<&'a str>>,
    configure: F,
) -> Result<Hsla, TextColorError>
where
    F: FnOnce(Configuration) -> Result<Configuration, TextColorError>,
{
    let config = configure(Configuration::default())?;
    Ok(config.hsl_for(text))
}

/// Map `text` to an RGBA color, starting from the default configuration and
/// letting `configure` adjust it first.
///
/// # Errors
///
/// Returns whatever error `configure` returns.
///
/// # Examples
///
/// ```
/// use textcolor_core::{to_color_with, Rgba};
///
/// let color = to_color_with("A", |c| Ok(c.with_sha256_hash_provider()))?;
/// assert_eq!(color, Rgba::new(89, 191, 64, 255));
///
/// let translucent = to_color_with("Hello world", |c| c.with_alpha(0.1))?;
/// assert_eq!(translucent.a, 25);
///
/// assert!(to_color_with("A", |c| c.with_alpha(1.2)).is_err());
/// # Ok::<(), textcolor_core::TextColorError>(())
/// ```
pub fn to_color_with<'a, F>(
    text: impl Into<Option<&'a str>>,
    configure: F,
) -> Result<Rgba, TextColorError>
where
    F: FnOnce(Configuration) -> Result<Configuration, TextColorError>,
{
    to_hsl_with(text, configure).map(|hsla| hsla.to_rgba())
}
