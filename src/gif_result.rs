use serde::{Deserialize, Serialize};

/// A single GIF returned by the Giphy API.
///
/// Constructed by the mapper from a successful response and immutable after
/// that. `id` and `content_url` are guaranteed non-empty; `title` may be
/// empty since Giphy does not require one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GifResult {
    /// API-assigned unique identifier.
    pub id: String,
    /// Human-readable title, possibly empty.
    pub title: String,
    /// Page URL of the GIF on giphy.com.
    pub url: String,
    /// Content rating code ("g", "pg", "pg-13", "r").
    pub rating: String,
    /// Width of the original rendition in pixels.
    pub width: u32,
    /// Height of the original rendition in pixels.
    pub height: u32,
    /// Direct URL of the original media asset.
    pub content_url: String,
}
