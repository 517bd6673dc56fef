//! Wire types for `GET /search/repositories`.
//!
//! Only `items[].full_name` matters. Items are kept as raw JSON so that one
//! odd entry (missing or non-string `full_name`) is skipped instead of failing
//! the whole page.

use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug)]
pub struct SearchResponse {
    #[serde(default)]
    pub total_count: Option<u64>,
    pub items: Vec<Value>,
}

impl SearchResponse {
    /// Full names in API order, skipping items without a string `full_name`.
    pub fn full_names(&self) -> Vec<String> {
        self.items
            .iter()
            .filter_map(|item| item.get("full_name")?.as_str())
            .map(str::to_string)
            .collect()
    }
}
