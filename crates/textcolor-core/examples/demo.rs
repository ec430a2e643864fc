//! Text-to-color demo
//!
//! Run with: cargo run --example demo

use textcolor_core::{to_color, to_color_with, to_hsl, Configuration};

fn main() -> Result<(), textcolor_core::TextColorError> {
    println!("=== TextColor Demo ===\n");

    let users = ["alice", "bob", "carol", "dave", "", "żółw"];

    println!("1. Default configuration (MD5, palette 0.35/0.5/0.65)");
    for user in users {
        let hsla = to_hsl(user);
        println!(
            "   {:>8} -> {}  (h={}, s={}, l={})",
            format!("{user:?}"),
            to_color(user),
            hsla.h,
            hsla.s,
            hsla.l
        );
    }

    println!("\n2. SHA-256 with a brighter palette and half alpha");
    for user in users {
        let color = to_color_with(user, |c| {
            c.with_sha256_hash_provider()
                .with_possible_saturation_values(&[0.6, 0.8])?
                .with_possible_lightness_values(&[0.55, 0.7])?
                .with_alpha(0.5)
        })?;
        println!("   {:>8} -> {}", format!("{user:?}"), color);
    }

    println!("\n3. A custom hash provider (string length)");
    let by_length = Configuration::default().with_hash_provider(|text: &str| text.len() as u64);
    for user in users {
        println!("   {:>8} -> {}", format!("{user:?}"), by_length.color_for(user));
    }

    println!("\n4. Rejected configuration");
    match to_color_with("alice", |c| c.with_alpha(1.5)) {
        Ok(color) => println!("   unexpected color {color}"),
        Err(e) => println!("   error: {e}"),
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
