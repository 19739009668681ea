use crate::error::{GiphyError, GiphyResult};

/// Environment variable the API key is read from.
pub const API_KEY_ENV: &str = "GIPHY_API_KEY";

/// API key configuration for the Giphy adapter.
///
/// Callers populate this from whatever configuration source fits their
/// deployment; [`GiphyConfig::from_env`] covers the common
/// environment-variable path.
#[derive(Debug, Clone, PartialEq)]
pub struct GiphyConfig {
    api_key: String,
}

impl GiphyConfig {
    pub fn new(api_key: impl Into<String>) -> GiphyResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GiphyError::ConfigError(
                "Giphy API key is required".to_string(),
            ));
        }
        Ok(Self { api_key })
    }

    /// Read the key from `GIPHY_API_KEY`, loading a `.env` file first if one
    /// is present. Fails before any network call when the variable is missing.
    pub fn from_env() -> GiphyResult<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            GiphyError::ConfigError(format!("{} not found in environment", API_KEY_ENV))
        })?;

        Self::new(api_key)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn into_api_key(self) -> String {
        self.api_key
    }
}
