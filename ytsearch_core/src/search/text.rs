// src/search/text.rs
//
// Shared field helpers for the renderer extractors. Every upstream access
// is an optional read with an explicit default: the document schema is
// externally controlled and any field may vanish between fetches.

use serde_json::Value;

/// Fixed origin prefixed onto the relative paths found in navigation
/// endpoints.
pub(crate) const ORIGIN: &str = "https://www.youtube.com";

/// Concatenate the `text` parts of a text-run sequence. Anything that is
/// not an array reduces to the empty string, never an error.
pub(crate) fn reduce_runs(runs: Option<&Value>) -> String {
    runs.and_then(Value::as_array)
        .map(|runs| {
            runs.iter()
                .filter_map(|run| run.get("text").and_then(Value::as_str))
                .collect::<String>()
        })
        .unwrap_or_default()
}

/// Like [`reduce_runs`], but fragments flagged `bold` are wrapped in
/// `<b>…</b>` markers (used for video description snippets).
pub(crate) fn reduce_runs_bold(runs: Option<&Value>) -> String {
    runs.and_then(Value::as_array)
        .map(|runs| {
            let mut out = String::new();
            for run in runs {
                let text = run.get("text").and_then(Value::as_str).unwrap_or("");
                if run.get("bold").and_then(Value::as_bool).unwrap_or(false) {
                    out.push_str("<b>");
                    out.push_str(text);
                    out.push_str("</b>");
                } else {
                    out.push_str(text);
                }
            }
            out
        })
        .unwrap_or_default()
}

/// Display title: a direct `simpleText` wins, else the run reduction,
/// else empty.
pub(crate) fn title_text(renderer: &Value) -> String {
    renderer
        .pointer("/title/simpleText")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| reduce_runs(renderer.pointer("/title/runs")))
}

/// Build an absolute URL from the navigation endpoint nested under `node`.
/// A missing path yields the bare origin (upstream quirk, kept).
pub(crate) fn navigation_url(node: &Value) -> String {
    let path = node
        .pointer("/navigationEndpoint/commandMetadata/webCommandMetadata/url")
        .and_then(Value::as_str)
        .unwrap_or("");
    format!("{ORIGIN}{path}")
}

/// First entry of a `runs` array nested under `node`, if any.
pub(crate) fn first_run(node: Option<&Value>) -> Option<&Value> {
    node.and_then(|n| n.get("runs"))
        .and_then(Value::as_array)
        .and_then(|runs| runs.first())
}

/// URL of the last entry of a thumbnails sequence; the platform orders
/// thumbnails lowest resolution first.
pub(crate) fn last_thumbnail(thumbnails: Option<&Value>) -> Option<String> {
    thumbnails
        .and_then(Value::as_array)
        .and_then(|entries| entries.last())
        .and_then(|entry| entry.get("url"))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// True iff any owner badge carries a VERIFIED style token.
pub(crate) fn has_verified_badge(badges: Option<&Value>) -> bool {
    badges
        .and_then(Value::as_array)
        .map(|badges| {
            badges.iter().any(|badge| {
                badge
                    .pointer("/metadataBadgeRenderer/style")
                    .and_then(Value::as_str)
                    .map(|style| style.contains("VERIFIED"))
                    .unwrap_or(false)
            })
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reduces_runs_in_order() {
        let runs = json!([{ "text": "Hello" }, { "text": " " }, { "text": "world" }]);
        assert_eq!(reduce_runs(Some(&runs)), "Hello world");
    }

    #[test]
    fn missing_or_malformed_runs_reduce_to_empty() {
        assert_eq!(reduce_runs(None), "");
        assert_eq!(reduce_runs(Some(&json!("not an array"))), "");
        assert_eq!(reduce_runs(Some(&json!([{ "no_text": 1 }]))), "");
    }

    #[test]
    fn bold_runs_are_marked_up() {
        let runs = json!([{ "text": "plain " }, { "text": "loud", "bold": true }]);
        assert_eq!(reduce_runs_bold(Some(&runs)), "plain <b>loud</b>");
    }

    #[test]
    fn title_prefers_simple_text() {
        let renderer = json!({
            "title": { "simpleText": "Direct", "runs": [{ "text": "ignored" }] }
        });
        assert_eq!(title_text(&renderer), "Direct");

        let renderer = json!({ "title": { "runs": [{ "text": "From runs" }] } });
        assert_eq!(title_text(&renderer), "From runs");

        assert_eq!(title_text(&json!({})), "");
    }

    #[test]
    fn navigation_url_falls_back_to_origin() {
        let node = json!({
            "navigationEndpoint": {
                "commandMetadata": { "webCommandMetadata": { "url": "/watch?v=abc" } }
            }
        });
        assert_eq!(navigation_url(&node), "https://www.youtube.com/watch?v=abc");
        assert_eq!(navigation_url(&json!({})), "https://www.youtube.com");
    }

    #[test]
    fn picks_last_thumbnail() {
        let thumbs = json!([
            { "url": "https://i.ytimg.com/low.jpg" },
            { "url": "https://i.ytimg.com/high.jpg" }
        ]);
        assert_eq!(
            last_thumbnail(Some(&thumbs)).as_deref(),
            Some("https://i.ytimg.com/high.jpg")
        );
        assert_eq!(last_thumbnail(Some(&json!([]))), None);
        assert_eq!(last_thumbnail(None), None);
    }

    #[test]
    fn verified_badge_scan() {
        let badges = json!([
            { "metadataBadgeRenderer": { "style": "BADGE_STYLE_TYPE_VERIFIED" } }
        ]);
        assert!(has_verified_badge(Some(&badges)));

        let badges = json!([{ "metadataBadgeRenderer": { "style": "BADGE_STYLE_TYPE_OTHER" } }]);
        assert!(!has_verified_badge(Some(&badges)));
        assert!(!has_verified_badge(None));
    }
}
