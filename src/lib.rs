//! Typed client for the Giphy HTTP API.
//!
//! Two operations are exposed: search-by-query and fetch-by-ID. Both return
//! a validated [`GifResult`] on a hit and `None` when the API reports no
//! match, so "no result" never surfaces as an error.
//!
//! ```rust,no_run
//! use giphy_client::GiphyAdapter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let adapter = GiphyAdapter::from_env()?;
//!
//!     if let Some(gif) = adapter.search_gif("excited").await? {
//!         println!("Found GIF: {}", gif.title);
//!         println!("URL: {}", gif.content_url);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod config;
pub mod error;
pub mod gif_result;
pub mod http_client;
pub mod mapper;
pub mod models;

// Use specific imports to avoid conflicts
pub use adapter::{GifProvider, GiphyAdapter};
pub use config::GiphyConfig;
pub use error::{GiphyError, GiphyResult};
pub use gif_result::GifResult;
pub use models::SearchParams;
