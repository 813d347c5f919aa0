// src/client.rs

use std::time::Duration;

use serde_json::{json, Value};

use crate::error::SearchError;
use crate::search;
use crate::search::text::ORIGIN;
use crate::types::SearchResponse;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/117.0.0.0 Safari/537.36";

// Fixed WEB client identity sent with continuation requests.
const CLIENT_VERSION: &str = "2.20201022.01.01";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin fetch collaborator. Performs the single upstream request per call
/// and hands the raw document to the parser; all interpretation happens
/// there.
pub struct SearchClient {
    http: reqwest::Client,
}

impl SearchClient {
    pub fn new() -> Result<Self, SearchError> {
        Ok(Self {
            http: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(REQUEST_TIMEOUT)
                .build()
                .map_err(SearchError::HttpRequest)?,
        })
    }

    /// Fetch the results page for `query` and parse it.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        let url = format!("{ORIGIN}/results?q={}", urlencoding::encode(query));
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SearchError::UpstreamStatus(response.status()));
        }

        let html = response.text().await?;
        search::parse_results_page(&html)
    }

    /// Fetch the next page of an earlier search via the continuation
    /// endpoint and parse it. `key` and `page_token` come from a previous
    /// response.
    pub async fn continue_search(
        &self,
        key: &str,
        page_token: &str,
    ) -> Result<SearchResponse, SearchError> {
        let url = format!("{ORIGIN}/youtubei/v1/search?key={key}");
        let body = json!({
            "context": {
                "client": { "clientName": "WEB", "clientVersion": CLIENT_VERSION }
            },
            "continuation": page_token,
        });

        let response = self.http.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(SearchError::UpstreamStatus(response.status()));
        }

        let payload: Value = response.json().await?;
        search::parse_continuation(&payload, key)
    }
}
