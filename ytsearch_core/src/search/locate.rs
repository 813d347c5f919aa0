// src/search/locate.rs
//
// Finds the embedded `ytInitialData` blob inside a results page. Two
// historical embeddings exist: a plain object assignment closed by the
// script tag ("object_var"), and the older bracketed-window assignment
// bounded by the `ytInitialPlayerResponse` statement that follows it
// ("original"). They are tried in that fixed order.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::SearchError;

pub(crate) const PARSER_OBJECT_VAR: &str = "json_format.object_var";
pub(crate) const PARSER_ORIGINAL: &str = "json_format.original";
pub(crate) const PARSER_PAGE_TOKEN: &str = "json_format.page_token";

static API_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""innertubeApiKey":"([^"]*)"#).unwrap());

static OBJECT_VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)ytInitialData[^\{]*(.*?);\s*</script>").unwrap());

static ORIGINAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)ytInitialData"[^\{]*(.*);\s*window\["ytInitialPlayerResponse"\]"#).unwrap()
});

const SECTION_PATH: &str =
    "/contents/twoColumnSearchResultsRenderer/primaryContents/sectionListRenderer/contents";

#[derive(Debug)]
pub(crate) struct Located {
    pub data: Value,
    pub api_key: Option<String>,
    pub parser: &'static str,
}

fn capture<'a>(re: &Regex, html: &'a str) -> Option<&'a str> {
    re.captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Locate and parse the embedded result data in an HTML results page.
///
/// A missing API key is tolerated; a blob that matches neither pattern or
/// fails to parse is fatal, since no records are recoverable without it.
pub(crate) fn embedded_data(html: &str) -> Result<Located, SearchError> {
    let api_key = capture(&API_KEY_RE, html).map(str::to_owned);

    let (raw, parser) = if let Some(raw) = capture(&OBJECT_VAR_RE, html) {
        (raw, PARSER_OBJECT_VAR)
    } else if let Some(raw) = capture(&ORIGINAL_RE, html) {
        (raw, PARSER_ORIGINAL)
    } else {
        return Err(SearchError::StructureNotFound(
            "embedded result data matched neither extraction pattern".to_owned(),
        ));
    };

    let data: Value = serde_json::from_str(raw).map_err(|error| {
        SearchError::StructureNotFound(format!("embedded result data is not valid JSON: {error}"))
    })?;

    Ok(Located {
        data,
        api_key,
        parser,
    })
}

/// Root section list of a parsed results page.
pub(crate) fn root_sections(data: &Value) -> Result<&[Value], SearchError> {
    data.pointer(SECTION_PATH)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| {
            SearchError::StructureNotFound("section list missing from result data".to_owned())
        })
}

/// Root section list of a continuation payload.
pub(crate) fn continuation_sections(payload: &Value) -> Result<&[Value], SearchError> {
    payload
        .pointer("/onResponseReceivedCommands/0/appendContinuationItemsAction/continuationItems")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| {
            SearchError::StructureNotFound(
                "continuation items missing from continuation payload".to_owned(),
            )
        })
}

pub(crate) fn estimated_results(data: &Value) -> String {
    data.get("estimatedResults")
        .and_then(Value::as_str)
        .unwrap_or("0")
        .to_owned()
}
