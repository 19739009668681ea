use crate::error::{GiphyError, GiphyResult};
use crate::gif_result::GifResult;
use crate::models::GifObject;

/// Maps raw Giphy payloads to validated [`GifResult`] values.
#[derive(Debug, Clone)]
pub struct GiphyMapper;

impl GiphyMapper {
    pub fn new() -> Self {
        Self
    }

    /// Map a single GIF payload, rejecting records that violate the model
    /// invariants (empty id, missing or empty media URL).
    pub fn map_to_gif_result(&self, source: GifObject) -> GiphyResult<GifResult> {
        if source.id.is_empty() {
            return Err(GiphyError::ResponseFormatError(
                "Giphy returned a GIF without an id".to_string(),
            ));
        }

        let original = source.images.original.ok_or_else(|| {
            GiphyError::ResponseFormatError(format!(
                "Giphy GIF '{}' has no original rendition",
                source.id
            ))
        })?;

        if original.url.is_empty() {
            return Err(GiphyError::ResponseFormatError(format!(
                "Giphy GIF '{}' has an empty media URL",
                source.id
            )));
        }

        Ok(GifResult {
            id: source.id,
            title: source.title,
            url: source.url,
            rating: source.rating,
            width: Self::parse_dimension(&original.width),
            height: Self::parse_dimension(&original.height),
            content_url: original.url,
        })
    }

    /// Map a list of GIF payloads, failing on the first malformed record.
    pub fn map_to_gif_results(&self, sources: Vec<GifObject>) -> GiphyResult<Vec<GifResult>> {
        sources
            .into_iter()
            .map(|source| self.map_to_gif_result(source))
            .collect()
    }

    fn parse_dimension(raw: &Option<String>) -> u32 {
        raw.as_deref().and_then(|v| v.parse().ok()).unwrap_or(0)
    }
}

impl Default for GiphyMapper {
    fn default() -> Self {
        Self::new()
    }
}
