//! A Rust library for picking product photos in a confectionery storefront.
//!
//! Product records from the hosted store do not always carry an image. This
//! library maps a product's display name to a representative sweet photo from
//! a fixed catalog, and combines that fallback with the product's own media to
//! decide what should be displayed.
//!
//! # Logging
//!
//! This library uses the [`log`] crate for logging. You can enable logging by
//! initializing a logger in your application, such as [`env_logger`]. Set the
//! RUST_LOG environment variable to control log levels (e.g., `RUST_LOG=debug`).
//!
//! ```
//! // Initialize the logger in your application
//! env_logger::init();
//! ```
//!
//! Resolution branches are logged at debug and trace level. Blank image URLs
//! in product records are logged as warnings.

/// Module containing the fixed name-to-photo catalog
pub mod catalog;

/// Module resolving display names to catalog photos
pub mod resolver;

/// Module containing product record structures
pub mod models;

/// Module selecting the display image for a product
pub mod product_image;

/// Module containing string helpers
pub mod utils;

pub use catalog::{Catalog, CatalogEntry, CatalogError};
pub use models::Product;
pub use product_image::{fallback_image, ProductImage, ProductImageTracker};
pub use resolver::{get_all_sweet_images, get_all_sweet_names, get_product_image_url, resolve_image};
