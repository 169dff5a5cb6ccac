//! Example of choosing display images for product records
//!
//! Reads a JSON array of product records and prints the image each one
//! should be shown with.
//!
//! Run with:
//! ```
//! cargo run --example product_card -- products.json
//! ```

use log::info;
use std::env;
use sweet_images_rs::{Product, ProductImage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug cargo run --example product_card -- products.json
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: cargo run --example product_card -- products.json");
        std::process::exit(1);
    }

    let json = std::fs::read_to_string(&args[1])?;
    let products: Vec<Product> = serde_json::from_str(&json)?;
    info!("Loaded {} products", products.len());

    for product in &products {
        let name = product.display_name().unwrap_or("(unnamed)");
        match ProductImage::for_product(product) {
            Some(image) => {
                let source = if image.has_image { "own" } else { "fallback" };
                println!("{:<24} {:<8} {}", name, source, image.image_url);
            }
            None => println!("{:<24} {:<8} -", name, "none"),
        }
    }

    Ok(())
}
