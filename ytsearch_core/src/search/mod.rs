// src/search/mod.rs
//
// Parser entry points. One synchronous pass per document: locate the root
// section list, walk it, dispatch every content item, assemble the
// response. No state survives the call.

mod locate;
mod renderer;
pub(crate) mod text;
mod walk;

use serde_json::Value;

use crate::error::SearchError;
use crate::types::{SearchResponse, SearchResult};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse a fetched HTML results page into a [`SearchResponse`].
pub fn parse_results_page(html: &str) -> Result<SearchResponse, SearchError> {
    let located = locate::embedded_data(html)?;
    let estimated_results = locate::estimated_results(&located.data);
    let sections = locate::root_sections(&located.data)?;
    let walked = walk::walk(sections);
    let results = collect(&walked.items);

    Ok(SearchResponse {
        results,
        version: VERSION.to_owned(),
        parser: located.parser.to_owned(),
        key: located.api_key,
        estimated_results,
        next_page_token: walked.continuation,
    })
}

/// Parse a continuation-endpoint payload into a [`SearchResponse`].
///
/// `key` is the innertube API key the caller used for the fetch; it is
/// echoed back in the response like the rest of the locator metadata.
pub fn parse_continuation(payload: &Value, key: &str) -> Result<SearchResponse, SearchError> {
    let sections = locate::continuation_sections(payload)?;
    let walked = walk::walk(sections);
    let results = collect(&walked.items);

    Ok(SearchResponse {
        results,
        version: VERSION.to_owned(),
        parser: locate::PARSER_PAGE_TOKEN.to_owned(),
        key: Some(key.to_owned()),
        estimated_results: locate::estimated_results(payload),
        next_page_token: walked.continuation,
    })
}

// Per-item failures are logged and dropped here; everything that parsed
// stays in, in document order.
fn collect(items: &[&Value]) -> Vec<SearchResult> {
    let mut results = Vec::new();
    for item in items {
        match renderer::dispatch(item) {
            Ok(Some(record)) => results.push(record),
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(error = %error, "skipping unparseable search result item");
            }
        }
    }
    results
}
