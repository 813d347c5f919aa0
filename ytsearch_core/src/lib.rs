// src/lib.rs
pub mod client;
pub mod error;
pub mod search;
pub mod types;

pub use client::SearchClient;
pub use error::{RendererParseError, SearchError};
pub use search::{parse_continuation, parse_results_page};
pub use types::{
    ChannelResult, PlaylistResult, PlaylistUploader, RadioResult, RadioUploader, SearchResponse,
    SearchResult, VideoResult, VideoUploader,
};
