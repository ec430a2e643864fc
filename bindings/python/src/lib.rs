use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use textcolor_core::{Configuration, TextColorError};

/// Convert a `TextColorError` into a Python `ValueError`.
fn to_py_err(e: TextColorError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Build a configuration from the keyword arguments shared by every function.
fn build_config(
    hash: &str,
    saturation: Option<Vec<f32>>,
    lightness: Option<Vec<f32>>,
    alpha: f32,
) -> PyResult<Configuration> {
    let mut config = Configuration::default()
        .with_hash_algorithm_named(hash)
        .and_then(|c| c.with_alpha(alpha))
        .map_err(to_py_err)?;
    if let Some(values) = saturation {
        config = config
            .with_possible_saturation_values(&values)
            .map_err(to_py_err)?;
    }
    if let Some(values) = lightness {
        config = config
            .with_possible_lightness_values(&values)
            .map_err(to_py_err)?;
    }
    Ok(config)
}

/// Map a text to an RGBA color.
///
/// Args:
///     text: The text to map. None maps like the empty string.
///     hash: Hash algorithm, "md5" (default) or "sha256".
///     saturation: Candidate saturation values in [0, 1] (default [0.35, 0.5, 0.65]).
///     lightness: Candidate lightness values in [0, 1] (default [0.35, 0.5, 0.65]).
///     alpha: Alpha in [0, 1] (default 1.0).
///
/// Returns:
///     A tuple (r, g, b, a) of ints in 0..=255.
#[pyfunction]
#[pyo3(signature = (text, hash = "md5", saturation = None, lightness = None, alpha = 1.0))]
fn to_color(
    text: Option<&str>,
    hash: &str,
    saturation: Option<Vec<f32>>,
    lightness: Option<Vec<f32>>,
    alpha: f32,
) -> PyResult<(u8, u8, u8, u8)> {
    let color = build_config(hash, saturation, lightness, alpha)?.color_for(text);
    Ok((color.r, color.g, color.b, color.a))
}

/// Map a text to an HSL color.
///
/// Takes the same arguments as `to_color`.
///
/// Returns:
///     A tuple (h, s, l, a): hue in degrees, the rest as fractions.
#[pyfunction]
#[pyo3(signature = (text, hash = "md5", saturation = None, lightness = None, alpha = 1.0))]
fn to_hsl(
    text: Option<&str>,
    hash: &str,
    saturation: Option<Vec<f32>>,
    lightness: Option<Vec<f32>>,
    alpha: f32,
) -> PyResult<(u64, f32, f32, f32)> {
    let hsla = build_config(hash, saturation, lightness, alpha)?.hsl_for(text);
    Ok((hsla.h, hsla.s, hsla.l, hsla.a))
}

/// Map many texts to RGBA colors, in order, releasing the GIL while mapping.
#[pyfunction]
#[pyo3(signature = (texts, hash = "md5", saturation = None, lightness = None, alpha = 1.0))]
fn to_colors(
    py: Python<'_>,
    texts: Vec<String>,
    hash: &str,
    saturation: Option<Vec<f32>>,
    lightness: Option<Vec<f32>>,
    alpha: f32,
) -> PyResult<Vec<(u8, u8, u8, u8)>> {
    let config = build_config(hash, saturation, lightness, alpha)?;
    let colors = py.allow_threads(|| config.colors_for(&texts));
    Ok(colors.into_iter().map(|c| (c.r, c.g, c.b, c.a)).collect())
}

/// Deterministic text-to-color mapping (Rust-powered).
#[pymodule]
fn textcolor(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(to_color, m)?)?;
    m.add_function(wrap_pyfunction!(to_hsl, m)?)?;
    m.add_function(wrap_pyfunction!(to_colors, m)?)?;
    Ok(())
}
