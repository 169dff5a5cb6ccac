//! A small binary frontend for the sweet-images-rs library.
//!
//! Prints the resolved photo for each name given on the command line, or the
//! whole catalog when no names are given. Set SWEET_IMAGES_CATALOG to the path
//! of a JSON catalog file to use it instead of the built-in one.

use log::{debug, info};
use std::env;
use sweet_images_rs::{resolve_image, Catalog};

const CATALOG_ENV: &str = "SWEET_IMAGES_CATALOG";

fn load_catalog(
    setting: Result<String, env::VarError>,
) -> Result<Catalog, Box<dyn std::error::Error>> {
    match setting {
        Ok(path) => {
            info!("Loading catalog from {}", path);
            let json = std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read catalog {}: {}", path, e))?;
            Ok(Catalog::from_json_str(&json)?)
        }
        Err(env::VarError::NotUnicode(path)) => {
            Err(format!("{} is not valid UTF-8: {:?}", CATALOG_ENV, path).into())
        }
        Err(env::VarError::NotPresent) => {
            debug!("{} not set, using built-in catalog", CATALOG_ENV);
            Ok(Catalog::sweets().clone())
        }
    }
}

fn main() {
    // Use RUST_LOG environment variable to control log levels (e.g., RUST_LOG=debug)
    env_logger::init();

    let catalog = match load_catalog(env::var(CATALOG_ENV)) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let names: Vec<String> = env::args().skip(1).collect();
    if names.is_empty() {
        for entry in catalog.entries() {
            println!("{}\t{}", entry.name, entry.url);
        }
        return;
    }

    for name in &names {
        println!("{}\t{}", name, resolve_image(&catalog, Some(name.as_str())));
    }
}
