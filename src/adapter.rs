use crate::{
    config::GiphyConfig,
    error::{GiphyError, GiphyResult},
    gif_result::GifResult,
    http_client::HttpClient,
    mapper::GiphyMapper,
    models::{GetResponse, SearchParams, SearchResponse},
};
use async_trait::async_trait;

const GIPHY_BASE_URL: &str = "https://api.giphy.com/v1/gifs";

/// Operations every GIF provider exposes.
///
/// The adapter implements this so consumers can depend on the trait and swap
/// in a mock or an alternative provider.
#[async_trait]
pub trait GifProvider: Send + Sync {
    /// Top match for a search query, or `None` when nothing matches.
    async fn search_gif(&self, query: &str) -> GiphyResult<Option<GifResult>>;

    /// Look up a single GIF by its id, `None` when it does not exist.
    async fn get_gif_by_id(&self, gif_id: &str) -> GiphyResult<Option<GifResult>>;
}

/// Giphy provider adapter over the public REST API.
pub struct GiphyAdapter {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
    mapper: GiphyMapper,
}

impl GiphyAdapter {
    pub fn new(config: GiphyConfig) -> GiphyResult<Self> {
        Ok(Self {
            http_client: HttpClient::new()?,
            base_url: GIPHY_BASE_URL.to_string(),
            api_key: config.into_api_key(),
            mapper: GiphyMapper::new(),
        })
    }

    /// Create an adapter straight from `GIPHY_API_KEY` in the environment.
    pub fn from_env() -> GiphyResult<Self> {
        Self::new(GiphyConfig::from_env()?)
    }

    /// Create an adapter pointed at a custom endpoint (for testing)
    pub fn with_base_url(config: GiphyConfig, base_url: impl Into<String>) -> GiphyResult<Self> {
        Ok(Self {
            http_client: HttpClient::new()?,
            base_url: base_url.into(),
            api_key: config.into_api_key(),
            mapper: GiphyMapper::new(),
        })
    }

    /// Build URL with API key parameter
    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}?api_key={}", self.base_url, endpoint, self.api_key)
    }

    /// Build URL with API key and additional query parameters
    fn build_url_with_params(&self, endpoint: &str, params: &[(String, String)]) -> String {
        let mut url = format!("{}{}?api_key={}", self.base_url, endpoint, self.api_key);
        for (key, value) in params {
            if key != "api_key" {
                url.push_str(&format!("&{}={}", key, urlencoding::encode(value)));
            }
        }
        url
    }
}

impl GiphyAdapter {
    /// Search Giphy and return the full mapped result page.
    pub async fn search_gifs(
        &self,
        query: &str,
        params: &SearchParams,
    ) -> GiphyResult<Vec<GifResult>> {
        if query.trim().is_empty() {
            return Err(GiphyError::ValidationError(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = self.build_url_with_params("/search", &params.to_query_params(query));

        log::info!("Giphy: Searching for '{}' (limit: {})", query, params.limit);

        let response: SearchResponse = self.http_client.get(&url).await?;

        let gifs = self.mapper.map_to_gif_results(response.data)?;

        log::info!("Giphy: Found {} results for '{}'", gifs.len(), query);
        Ok(gifs)
    }

    /// Top match for `query` per Giphy's own ranking.
    pub async fn search_gif(&self, query: &str) -> GiphyResult<Option<GifResult>> {
        let gifs = self.search_gifs(query, &SearchParams::default()).await?;

        if gifs.is_empty() {
            log::info!("Giphy: No GIFs found for query '{}'", query);
            return Ok(None);
        }

        Ok(gifs.into_iter().next())
    }

    pub async fn get_gif_by_id(&self, gif_id: &str) -> GiphyResult<Option<GifResult>> {
        if gif_id.trim().is_empty() {
            return Err(GiphyError::ValidationError(
                "GIF id cannot be empty".to_string(),
            ));
        }

        let url = self.build_url(&format!("/{}", urlencoding::encode(gif_id)));

        log::info!("Giphy: Getting GIF by ID '{}'", gif_id);

        let response: GetResponse = match self.http_client.get(&url).await {
            Ok(response) => response,
            Err(GiphyError::NotFound(_)) => {
                log::info!("Giphy: No GIF found for ID '{}'", gif_id);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let gif_data = match response.data {
            Some(data) => data,
            None => {
                log::info!("Giphy: No GIF found for ID '{}'", gif_id);
                return Ok(None);
            }
        };

        let gif = self.mapper.map_to_gif_result(gif_data)?;

        log::info!("Giphy: Found GIF by ID '{}'", gif_id);
        Ok(Some(gif))
    }
}

#[async_trait]
impl GifProvider for GiphyAdapter {
    async fn search_gif(&self, query: &str) -> GiphyResult<Option<GifResult>> {
        self.search_gif(query).await
    }

    async fn get_gif_by_id(&self, gif_id: &str) -> GiphyResult<Option<GifResult>> {
        self.get_gif_by_id(gif_id).await
    }
}
