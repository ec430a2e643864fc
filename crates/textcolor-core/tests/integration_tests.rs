use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use textcolor_core::{
    to_color, to_color_with, to_hsl, Configuration, HashProvider, Md5HashProvider, Rgba,
    Sha256HashProvider, TextColorError,
};

// ---------------------------------------------------------------------------
// Known test vectors
// ---------------------------------------------------------------------------

const LOREM_IPSUM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.";

const MD5_VECTORS: &[(&str, [u8; 3])] = &[
    ("", [120, 58, 58]),
    (" ", [89, 45, 134]),
    ("A", [121, 191, 210]),
    ("B", [137, 224, 108]),
    ("C", [210, 121, 145]),
    ("D", [197, 135, 156]),
    ("E", [83, 172, 104]),
    ("AAAAAAA", [147, 31, 70]),
    ("AbABACA", [120, 134, 45]),
    ("wqj  porjioqwjrdsnjnjd fasd f", [192, 135, 197]),
    (LOREM_IPSUM, [49, 31, 147]),
];

const SHA256_VECTORS: &[(&str, [u8; 3])] = &[
    ("", [120, 58, 58]),
    (" ", [210, 72, 45]),
    ("A", [89, 191, 64]),
    ("B", [197, 156, 135]),
    ("C", [64, 191, 181]),
    ("D", [134, 45, 51]),
    ("E", [45, 210, 94]),
    ("AAAAAAA", [159, 64, 191]),
    ("AbABACA", [77, 191, 64]),
    ("wqj  porjioqwjrdsnjnjd fasd f", [210, 45, 180]),
    (LOREM_IPSUM, [99, 31, 147]),
];

fn opaque([r, g, b]: [u8; 3]) -> Rgba {
    Rgba::new(r, g, b, 255)
}

// ---------------------------------------------------------------------------
// Helper: random-byte text, decoded lossily as UTF-8
// ---------------------------------------------------------------------------
fn random_text(rng: &mut StdRng, len: usize) -> String {
    let mut data = vec![0u8; len];
    rng.fill_bytes(&mut data);
    String::from_utf8_lossy(&data).into_owned()
}

// ===========================================================================
// End-to-end vectors
// ===========================================================================

#[test]
fn md5_known_vectors() {
    let config = Configuration::default().with_md5_hash_provider();
    for &(text, rgb) in MD5_VECTORS {
        assert_eq!(config.color_for(text), opaque(rgb), "md5 vector for {text:?}");
    }
}

#[test]
fn sha256_known_vectors() {
    let config = Configuration::default().with_sha256_hash_provider();
    for &(text, rgb) in SHA256_VECTORS {
        assert_eq!(config.color_for(text), opaque(rgb), "sha256 vector for {text:?}");
    }
}

#[test]
fn default_provider_is_md5() {
    for &(text, rgb) in MD5_VECTORS {
        assert_eq!(to_color(text), opaque(rgb));
    }
}

#[test]
fn none_matches_empty_for_both_providers() {
    assert_eq!(to_color(None), opaque([120, 58, 58]));
    let sha = to_color_with(None, |c| Ok(c.with_sha256_hash_provider())).expect("valid");
    assert_eq!(sha, opaque([120, 58, 58]));
}

#[test]
fn custom_hash_provider_regression() {
    let color = to_color_with("Hello world", |c| {
        Ok(c.with_hash_provider(|_: &str| 157_894u64))
    })
    .expect("valid");
    assert_eq!(color, Rgba::new(190, 135, 197, 255));
}

#[derive(Debug)]
struct ConstantProvider(u64);

impl HashProvider for ConstantProvider {
    fn hash(&self, _text: &str) -> u64 {
        self.0
    }

    fn name(&self) -> &str {
        "constant"
    }
}

#[test]
fn custom_hash_provider_struct() {
    let config = Configuration::default().with_hash_provider(ConstantProvider(157_894));
    assert_eq!(config.hash_provider().name(), "constant");
    assert_eq!(config.color_for("anything"), Rgba::new(190, 135, 197, 255));
}

#[test]
fn custom_alpha_value() {
    let color = to_color_with("Hello world", |c| c.with_alpha(0.1)).expect("valid alpha");
    assert_eq!(color.a, 25);
}

// ===========================================================================
// Determinism and configuration
// ===========================================================================

#[test]
fn same_input_same_color() {
    for text in ["", "x", "Hello world", LOREM_IPSUM] {
        assert_eq!(to_color(text), to_color(text));
        assert_eq!(to_hsl(text), to_hsl(text));
    }
}

#[test]
fn respects_palette_from_configuration() {
    let text = "Hello world";
    for provider in ["md5", "sha256"] {
        let plain = to_color_with(text, |c| c.with_hash_algorithm_named(provider)).expect("valid");
        let custom = to_color_with(text, |c| {
            c.with_hash_algorithm_named(provider)?
                .with_possible_saturation_values(&[0.1, 1.0])?
                .with_possible_lightness_values(&[0.1, 1.0])
        })
        .expect("valid");
        assert_ne!(plain, custom, "palette ignored for {provider}");

        let hsla = textcolor_core::to_hsl_with(text, |c| {
            c.with_hash_algorithm_named(provider)?
                .with_possible_saturation_values(&[0.1, 1.0])?
                .with_possible_lightness_values(&[0.1, 1.0])
        })
        .expect("valid");
        assert!([0.1, 1.0].contains(&hsla.s));
        assert!([0.1, 1.0].contains(&hsla.l));
    }
}

#[test]
fn hue_stays_below_359() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1_000 {
        let text = random_text(&mut rng, 16);
        assert!(to_hsl(text.as_str()).h < 359);
    }
}

#[test]
fn invalid_configuration_fails_fast() {
    assert!(matches!(
        to_color_with("x", |c| c.with_alpha(-0.2)),
        Err(TextColorError::AlphaOutOfRange { .. })
    ));
    assert!(matches!(
        to_color_with("x", |c| c.with_alpha(1.2)),
        Err(TextColorError::AlphaOutOfRange { .. })
    ));
    assert!(matches!(
        to_color_with("x", |c| c.with_possible_saturation_values(&[])),
        Err(TextColorError::EmptyPalette { parameter: "saturation" })
    ));
    assert!(matches!(
        to_color_with("x", |c| c.with_possible_lightness_values(&[1.0, -0.5])),
        Err(TextColorError::PaletteValueOutOfRange { parameter: "lightness", index: 1, .. })
    ));
}

#[test]
fn batch_matches_single() {
    let config = Configuration::default().with_sha256_hash_provider();
    let texts: Vec<String> = SHA256_VECTORS.iter().map(|(t, _)| t.to_string()).collect();
    let colors = config.colors_for(&texts);
    let expected: Vec<Rgba> = SHA256_VECTORS.iter().map(|&(_, rgb)| opaque(rgb)).collect();
    assert_eq!(colors, expected);
}

#[test]
fn shared_configuration_across_threads() {
    let config = Configuration::default();
    std::thread::scope(|scope| {
        let handles: Vec<_> = MD5_VECTORS
            .iter()
            .map(|&(text, rgb)| {
                let config = &config;
                scope.spawn(move || assert_eq!(config.color_for(text), opaque(rgb)))
            })
            .collect();
        for handle in handles {
            handle.join().expect("mapping thread panicked");
        }
    });
}

// ===========================================================================
// Robustness
// ===========================================================================

#[test]
fn handles_huge_text() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let text = random_text(&mut rng, 10 * 1024 * 1024);
    for provider in [
        &Md5HashProvider as &dyn HashProvider,
        &Sha256HashProvider as &dyn HashProvider,
    ] {
        assert_ne!(provider.hash(&text), 0);
    }
    let md5 = to_color(text.as_str());
    let sha = to_color_with(text.as_str(), |c| Ok(c.with_sha256_hash_provider())).expect("valid");
    assert_eq!(md5.a, 255);
    assert_eq!(sha.a, 255);
}

#[test]
fn random_values() {
    let mut rng = StdRng::seed_from_u64(42);
    let md5 = Configuration::default().with_md5_hash_provider();
    let sha = Configuration::default().with_sha256_hash_provider();
    for _ in 0..200 {
        let text = random_text(&mut rng, 10 * 1024);
        assert_eq!(md5.color_for(text.as_str()), md5.color_for(text.as_str()));
        assert_eq!(sha.color_for(text.as_str()), sha.color_for(text.as_str()));
    }
}
