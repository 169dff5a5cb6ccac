//! Data structures for product records from the commerce catalog.
//!
//! Only the fields the image adapter reads are modelled. Records come from
//! the hosted store as JSON with camelCase field names; unknown fields are
//! ignored and every field is optional.

use serde::{Deserialize, Serialize};

/// Helper module for image URLs that may arrive as blank strings
///
/// A blank URL is not a usable image, so it is read as `None`.
mod blank_as_none {
    use log::warn;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        match value {
            Some(url) if url.trim().is_empty() => {
                warn!("Blank image URL in product record, treating it as missing");
                Ok(None)
            }
            other => Ok(other),
        }
    }

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(url) => serializer.serialize_str(url),
            None => serializer.serialize_none(),
        }
    }
}

/// Helper module for media lists that may arrive as `null`
mod null_as_empty {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
    }
}

/// An image reference inside a media descriptor
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct MediaImage {
    /// URL of the image
    #[serde(default)]
    #[serde(with = "blank_as_none")]
    pub url: Option<String>,
    /// Alternative text for the image
    #[serde(rename = "altText")]
    #[serde(default)]
    pub alt_text: Option<String>,
}

/// A media item that may carry an image
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct MediaItem {
    #[serde(default)]
    pub image: Option<MediaImage>,
}

impl MediaItem {
    /// Creates a media item holding a single image URL
    pub fn with_url(url: &str) -> Self {
        MediaItem {
            image: Some(MediaImage {
                url: Some(url.to_string()),
                alt_text: None,
            }),
        }
    }

    /// The item's image URL, ignoring blank values
    pub fn image_url(&self) -> Option<&str> {
        self.image
            .as_ref()
            .and_then(|image| image.url.as_deref())
            .filter(|url| !url.trim().is_empty())
    }
}

/// Media descriptor of a product
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ProductMedia {
    /// The product's primary media
    #[serde(rename = "mainMedia")]
    #[serde(default)]
    pub main_media: Option<MediaItem>,
    /// Ordered media gallery; `null` reads as empty
    #[serde(default)]
    #[serde(deserialize_with = "null_as_empty::deserialize")]
    pub items: Vec<MediaItem>,
}

/// A product record as supplied by the commerce catalog
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Product {
    /// Catalog identifier
    #[serde(rename = "_id")]
    #[serde(default)]
    pub id: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// URL slug
    #[serde(default)]
    pub slug: Option<String>,
    /// Media descriptor
    #[serde(default)]
    pub media: Option<ProductMedia>,
}

impl Product {
    /// Creates a product with only a display name
    pub fn named(name: &str) -> Self {
        Product {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Returns the product's own image URL, if it has one
    ///
    /// The main media image is preferred. Otherwise only the first gallery
    /// item is considered; later items are never used.
    pub fn media_url(&self) -> Option<&str> {
        let media = self.media.as_ref()?;

        let main_url = media
            .main_media
            .as_ref()
            .and_then(MediaItem::image_url);

        let first_item_url = || {
            media
                .items
                .first()
                .and_then(MediaItem::image_url)
        };

        main_url.or_else(first_item_url)
    }

    /// The display name, if present and non-empty
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}
