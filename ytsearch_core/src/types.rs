// src/types.rs

use serde::{Deserialize, Serialize};

/// One fully parsed search response, serializable straight to the wire.
///
/// Built fresh per request by the parser entry points; never mutated after
/// the section walk completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub version: String,
    /// Diagnostic label of the extraction strategy that succeeded.
    pub parser: String,
    pub key: Option<String>,
    #[serde(rename = "estimatedResults")]
    pub estimated_results: String,
    /// Present (possibly null) iff a continuation marker node was walked;
    /// omitted entirely otherwise.
    #[serde(
        rename = "nextPageToken",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub next_page_token: Option<Option<String>>,
}

/// One normalized search-result record. Exactly one renderer variant is
/// populated per record; the serialized form keeps the upstream envelope
/// (`{"channel": …}`, `{"video": …, "uploader": …}`, …).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResult {
    Channel {
        channel: ChannelResult,
    },
    Video {
        video: VideoResult,
        uploader: VideoUploader,
    },
    Playlist {
        playlist: PlaylistResult,
        uploader: PlaylistUploader,
    },
    Radio {
        radio: RadioResult,
        uploader: RadioUploader,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelResult {
    pub id: Option<String>,
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub thumbnail_src: Option<String>,
    pub video_count: String,
    pub subscriber_count: String,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoResult {
    pub id: Option<String>,
    pub title: String,
    pub url: String,
    pub duration: String,
    pub snippet: String,
    pub upload_date: String,
    pub thumbnail_src: Option<String>,
    pub views: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoUploader {
    pub username: Option<String>,
    pub url: String,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistResult {
    pub id: Option<String>,
    pub title: String,
    pub url: String,
    pub thumbnail_src: Option<String>,
    /// Raw upstream field, no formatting applied.
    pub video_count: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistUploader {
    pub username: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioResult {
    pub id: Option<String>,
    pub title: String,
    pub url: String,
    pub thumbnail_src: Option<String>,
    pub video_count: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioUploader {
    pub username: String,
}
