use napi::bindgen_prelude::*;
use napi::Task;
use napi_derive::napi;
use textcolor_core::{Configuration, Hsla, Rgba};

/// Mapping options. Every field is optional.
///
/// @param hash - Hash algorithm, "md5" (default) or "sha256".
/// @param saturation - Candidate saturation values in [0, 1].
/// @param lightness - Candidate lightness values in [0, 1].
/// @param alpha - Alpha in [0, 1] (default 1).
#[napi(object)]
#[derive(Clone, Default)]
pub struct ColorOptions {
    pub hash: Option<String>,
    pub saturation: Option<Vec<f64>>,
    pub lightness: Option<Vec<f64>>,
    pub alpha: Option<f64>,
}

#[napi(object)]
pub struct Color {
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub a: u32,
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color {
            r: c.r.into(),
            g: c.g.into(),
            b: c.b.into(),
            a: c.a.into(),
        }
    }
}

#[napi(object)]
pub struct HslColor {
    pub h: u32,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl From<Hsla> for HslColor {
    fn from(c: Hsla) -> Self {
        HslColor {
            // hue is always below 360
            h: c.h as u32,
            s: c.s.into(),
            l: c.l.into(),
            a: c.a.into(),
        }
    }
}

fn to_f32s(values: &[f64]) -> Vec<f32> {
    values.iter().map(|&v| v as f32).collect()
}

fn build_config(options: Option<ColorOptions>) -> Result<Configuration> {
    let options = options.unwrap_or_default();
    let mut config = Configuration::default();
    if let Some(hash) = options.hash {
        config = config
            .with_hash_algorithm_named(&hash)
            .map_err(|e| Error::from_reason(e.to_string()))?;
    }
    if let Some(values) = options.saturation {
        config = config
            .with_possible_saturation_values(&to_f32s(&values))
            .map_err(|e| Error::from_reason(e.to_string()))?;
    }
    if let Some(values) = options.lightness {
        config = config
            .with_possible_lightness_values(&to_f32s(&values))
            .map_err(|e| Error::from_reason(e.to_string()))?;
    }
    if let Some(alpha) = options.alpha {
        config = config
            .with_alpha(alpha as f32)
            .map_err(|e| Error::from_reason(e.to_string()))?;
    }
    Ok(config)
}

/// Map a text to an RGBA color.
///
/// @param text - The text to map; null or undefined maps like "".
/// @param options - Optional hash algorithm, palettes and alpha.
/// @returns An object with r, g, b, a in 0..=255.
#[napi]
pub fn to_color(text: Option<String>, options: Option<ColorOptions>) -> Result<Color> {
    let config = build_config(options)?;
    Ok(config.color_for(text.as_deref()).into())
}

/// Map a text to an HSL color.
///
/// @param text - The text to map; null or undefined maps like "".
/// @param options - Optional hash algorithm, palettes and alpha.
/// @returns An object with h in degrees and s, l, a as fractions.
#[napi]
pub fn to_hsl(text: Option<String>, options: Option<ColorOptions>) -> Result<HslColor> {
    let config = build_config(options)?;
    Ok(config.hsl_for(text.as_deref()).into())
}

// --- Async versions (run on libuv thread pool) ---

pub struct ColorsTask {
    texts: Vec<String>,
    config: Configuration,
}

impl Task for ColorsTask {
    type Output = Vec<Rgba>;
    type JsValue = Vec<Color>;

    fn compute(&mut self) -> Result<Self::Output> {
        Ok(self.config.colors_for(&self.texts))
    }

    fn resolve(&mut self, _env: Env, output: Self::Output) -> Result<Self::JsValue> {
        Ok(output.into_iter().map(Color::from).collect())
    }
}

/// Map many texts on the libuv thread pool.
/// Returns a Promise<Color[]> in input order.
///
/// @param texts - The texts to map.
/// @param options - Optional hash algorithm, palettes and alpha.
/// @returns A Promise resolving to one color per text.
#[napi]
pub fn to_colors_async(
    texts: Vec<String>,
    options: Option<ColorOptions>,
) -> Result<AsyncTask<ColorsTask>> {
    let config = build_config(options)?;
    Ok(AsyncTask::new(ColorsTask { texts, config }))
}
