use serde::{Deserialize, Serialize};

// Response envelopes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub data: Vec<GifObject>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetResponse {
    #[serde(default)]
    pub data: Option<GifObject>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

// Core GIF types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GifObject {
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub images: Images,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Images {
    #[serde(default)]
    pub original: Option<ImageRendition>,
}

// Giphy serves dimensions as decimal strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRendition {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
}

// Supporting types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub offset: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub response_id: Option<String>,
}

// Search parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub limit: u32,
    pub rating: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            limit: 10,
            rating: "g".to_string(),
        }
    }
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = rating.into();
        self
    }

    pub fn to_query_params(&self, query: &str) -> Vec<(String, String)> {
        vec![
            ("q".to_string(), query.to_string()),
            ("limit".to_string(), self.limit.to_string()),
            ("rating".to_string(), self.rating.clone()),
        ]
    }
}
