//! Display image selection for product records.
//!
//! This module combines a product's own media with the catalog fallback
//! photo. A product that carries an image URL always shows it; otherwise the
//! fallback resolved from its name is shown instead.

use crate::catalog::Catalog;
use crate::models::Product;
use crate::resolver::resolve_image;
use log::debug;

/// The image a product should be displayed with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImage {
    /// The image to show: the product's own media if any, else the fallback
    pub image_url: String,
    /// The catalog photo resolved from the product name
    pub fallback_image_url: String,
    /// Whether the product supplied its own image
    pub has_image: bool,
}

impl ProductImage {
    /// Derives the display image of a product using the built-in catalog
    ///
    /// # Arguments
    ///
    /// * `product` - The product record
    ///
    /// # Returns
    ///
    /// `None` if the product has no display name, otherwise the derived image
    pub fn for_product(product: &Product) -> Option<ProductImage> {
        Self::with_catalog(Catalog::sweets(), product)
    }

    /// Derives the display image of a product using `catalog` for the fallback
    pub fn with_catalog(catalog: &Catalog, product: &Product) -> Option<ProductImage> {
        let name = product.display_name()?;
        let fallback = resolve_image(catalog, Some(name));

        let (image_url, has_image) = match product.media_url() {
            Some(url) => (url, true),
            None => (fallback, false),
        };

        Some(ProductImage {
            image_url: image_url.to_string(),
            fallback_image_url: fallback.to_string(),
            has_image,
        })
    }
}

/// Returns only the fallback photo for a product, ignoring its own media
///
/// `None` if the product has no display name.
pub fn fallback_image(product: &Product) -> Option<&'static str> {
    product
        .display_name()
        .map(|name| resolve_image(Catalog::sweets(), Some(name)))
}

/// Keeps a [`ProductImage`] in step with a changing product record
///
/// The derived image is recomputed only when the product's name or own media
/// URL changes. Observing a product without a name keeps the last value.
/// The catalog is fixed for the lifetime of the tracker.
#[derive(Debug)]
pub struct ProductImageTracker<'a> {
    catalog: &'a Catalog,
    observed: Option<(String, Option<String>)>,
    current: Option<ProductImage>,
}

impl<'a> ProductImageTracker<'a> {
    /// Creates a tracker that resolves fallback photos from `catalog`
    pub fn new(catalog: &'a Catalog) -> Self {
        ProductImageTracker {
            catalog,
            observed: None,
            current: None,
        }
    }

    /// Observes the latest product record
    ///
    /// # Arguments
    ///
    /// * `product` - The product, if it has been loaded
    ///
    /// # Returns
    ///
    /// `true` if the derived image was recomputed
    pub fn observe(&mut self, product: Option<&Product>) -> bool {
        let product = match product {
            Some(product) => product,
            None => return false,
        };
        let name = match product.display_name() {
            Some(name) => name,
            None => return false,
        };

        let media_url = product.media_url();
        if let Some((last_name, last_media)) = &self.observed {
            if last_name == name && last_media.as_deref() == media_url {
                return false;
            }
        }

        debug!("Recomputing display image for '{}'", name);
        self.observed = Some((name.to_string(), media_url.map(str::to_string)));
        self.current = ProductImage::with_catalog(self.catalog, product);
        true
    }

    /// The most recently derived image, if any product has been observed
    pub fn current(&self) -> Option<&ProductImage> {
        self.current.as_ref()
    }
}
