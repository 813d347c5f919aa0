// src/error.rs

/// Document-level failures. These abort the current request; the caller
/// maps them onto its own transport status.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("upstream returned HTTP {0}")]
    UpstreamStatus(reqwest::StatusCode),

    #[error("search data not found: {0}")]
    StructureNotFound(String),
}

impl SearchError {
    pub fn code_str(&self) -> &'static str {
        match self {
            SearchError::HttpRequest(_) => "upstream_error",
            SearchError::UpstreamStatus(_) => "upstream_error",
            SearchError::StructureNotFound(_) => "parse_error",
        }
    }
}

/// Per-item and per-section failures. Logged at the collection site and
/// dropped; never escalated past the walk, so one malformed node cannot
/// cost the caller the rest of the result set.
#[derive(Debug, thiserror::Error)]
pub enum RendererParseError {
    #[error("`{0}` value is not an object")]
    NotAnObject(&'static str),

    #[error("item section contents is not an array")]
    BadSectionContents,
}
