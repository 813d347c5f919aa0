// src/search/renderer.rs
//
// Renderer dispatch and the four variant normalizers. The extractors are
// total: once dispatch has confirmed the renderer value is an object,
// every missing field degrades to its documented default instead of
// failing the record.

use serde_json::Value;

use crate::error::RendererParseError;
use crate::types::{
    ChannelResult, PlaylistResult, PlaylistUploader, RadioResult, RadioUploader, SearchResult,
    VideoResult, VideoUploader,
};

use super::text::{
    first_run, has_verified_badge, last_thumbnail, navigation_url, reduce_runs, reduce_runs_bold,
    title_text, ORIGIN,
};

/// Route one content item to the normalizer matching its renderer key.
///
/// The four keys are mutually exclusive on upstream nodes. Items carrying
/// none of them (shelves, ads, filter chips) return `Ok(None)` and are
/// dropped without noise; a renderer key holding a non-object value is a
/// per-item error the collector logs and skips.
pub(crate) fn dispatch(item: &Value) -> Result<Option<SearchResult>, RendererParseError> {
    if let Some(renderer) = item.get("channelRenderer") {
        return require_object(renderer, "channelRenderer").map(|r| Some(channel(r)));
    }
    if let Some(renderer) = item.get("videoRenderer") {
        return require_object(renderer, "videoRenderer").map(|r| Some(video(r)));
    }
    if let Some(renderer) = item.get("radioRenderer") {
        return require_object(renderer, "radioRenderer").map(|r| Some(radio(r)));
    }
    if let Some(renderer) = item.get("playlistRenderer") {
        return require_object(renderer, "playlistRenderer").map(|r| Some(playlist(r)));
    }
    Ok(None)
}

fn require_object<'a>(
    renderer: &'a Value,
    key: &'static str,
) -> Result<&'a Value, RendererParseError> {
    if renderer.is_object() {
        Ok(renderer)
    } else {
        Err(RendererParseError::NotAnObject(key))
    }
}

fn opt_string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_owned)
}

fn channel(renderer: &Value) -> SearchResult {
    SearchResult::Channel {
        channel: ChannelResult {
            id: opt_string(renderer.get("channelId")),
            title: title_text(renderer),
            url: navigation_url(renderer),
            snippet: reduce_runs(renderer.pointer("/descriptionSnippet/runs")),
            thumbnail_src: last_thumbnail(renderer.pointer("/thumbnail/thumbnails")),
            video_count: reduce_runs(renderer.pointer("/videoCountText/runs")),
            subscriber_count: renderer
                .pointer("/subscriberCountText/simpleText")
                .and_then(Value::as_str)
                .unwrap_or("0 subscribers")
                .to_owned(),
            verified: has_verified_badge(renderer.get("ownerBadges")),
        },
    }
}

fn video(renderer: &Value) -> SearchResult {
    SearchResult::Video {
        video: VideoResult {
            id: opt_string(renderer.get("videoId")),
            title: title_text(renderer),
            url: navigation_url(renderer),
            duration: renderer
                .pointer("/lengthText/simpleText")
                .and_then(Value::as_str)
                .unwrap_or("Live")
                .to_owned(),
            snippet: reduce_runs_bold(renderer.pointer("/descriptionSnippet/runs")),
            upload_date: renderer
                .pointer("/publishedTimeText/simpleText")
                .and_then(Value::as_str)
                .unwrap_or("Live")
                .to_owned(),
            thumbnail_src: last_thumbnail(renderer.pointer("/thumbnail/thumbnails")),
            views: video_views(renderer),
        },
        uploader: video_uploader(renderer),
    }
}

// Three-way fallback: an explicit count wins, then a run-reduced count;
// with neither, a publish date means zero views while its absence means a
// live stream reporting watchers.
fn video_views(renderer: &Value) -> String {
    if let Some(simple) = renderer
        .pointer("/viewCountText/simpleText")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
    {
        return simple.to_owned();
    }

    let reduced = reduce_runs(renderer.pointer("/viewCountText/runs"));
    if !reduced.is_empty() {
        return reduced;
    }

    if renderer.get("publishedTimeText").is_some() {
        "0 views".to_owned()
    } else {
        "0 watching".to_owned()
    }
}

fn video_uploader(renderer: &Value) -> VideoUploader {
    let owner = first_run(renderer.get("ownerText"));
    VideoUploader {
        username: owner.and_then(|run| opt_string(run.get("text"))),
        url: owner
            .map(navigation_url)
            .unwrap_or_else(|| ORIGIN.to_owned()),
        verified: has_verified_badge(renderer.get("ownerBadges")),
    }
}

fn playlist(renderer: &Value) -> SearchResult {
    let byline = first_run(renderer.get("shortBylineText"));
    SearchResult::Playlist {
        playlist: PlaylistResult {
            id: opt_string(renderer.get("playlistId")),
            title: title_text(renderer),
            url: navigation_url(renderer),
            thumbnail_src: last_thumbnail(
                renderer
                    .pointer("/thumbnailRenderer/playlistVideoThumbnailRenderer/thumbnail/thumbnails"),
            ),
            video_count: opt_string(renderer.get("videoCount")),
        },
        uploader: PlaylistUploader {
            username: byline.and_then(|run| opt_string(run.get("text"))),
            url: byline
                .map(navigation_url)
                .unwrap_or_else(|| ORIGIN.to_owned()),
        },
    }
}

fn radio(renderer: &Value) -> SearchResult {
    SearchResult::Radio {
        radio: RadioResult {
            id: opt_string(renderer.get("playlistId")),
            title: title_text(renderer),
            url: navigation_url(renderer),
            thumbnail_src: last_thumbnail(renderer.pointer("/thumbnail/thumbnails")),
            video_count: reduce_runs(renderer.pointer("/videoCountText/runs")),
        },
        uploader: RadioUploader {
            // Mixes are generated by the platform itself, hence the
            // platform-name default instead of an empty byline.
            username: renderer
                .pointer("/shortBylineText/simpleText")
                .and_then(Value::as_str)
                .unwrap_or("YouTube")
                .to_owned(),
        },
    }
}
