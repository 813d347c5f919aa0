// src/search/walk.rs
//
// Walks the ordered section list, separating displayable content sections
// from the pagination marker. One malformed section is logged and skipped;
// it must never abort the walk or discard already-collected items.

use serde_json::Value;

use crate::error::RendererParseError;

pub(crate) struct Walk<'a> {
    /// Content items in document order, across section boundaries.
    pub items: Vec<&'a Value>,
    /// `Some(token)` iff a continuation marker node was encountered; the
    /// inner option is `None` when the marker exists but carries no token.
    pub continuation: Option<Option<String>>,
}

enum Section<'a> {
    Items(&'a [Value]),
    Continuation(Option<String>),
    Other,
}

fn classify(section: &Value) -> Result<Section<'_>, RendererParseError> {
    if let Some(contents) = section.pointer("/itemSectionRenderer/contents") {
        let items = contents
            .as_array()
            .ok_or(RendererParseError::BadSectionContents)?;
        return Ok(Section::Items(items));
    }
    if let Some(marker) = section.get("continuationItemRenderer") {
        let token = marker
            .pointer("/continuationEndpoint/continuationCommand/token")
            .and_then(Value::as_str)
            .map(str::to_owned);
        return Ok(Section::Continuation(token));
    }
    // Unknown section kinds (shelves, filter headers, future shapes) are
    // ignored for forward compatibility.
    Ok(Section::Other)
}

pub(crate) fn walk(sections: &[Value]) -> Walk<'_> {
    let mut out = Walk {
        items: Vec::new(),
        continuation: None,
    };

    for section in sections {
        match classify(section) {
            Ok(Section::Items(items)) => out.items.extend(items),
            Ok(Section::Continuation(token)) => out.continuation = Some(token),
            Ok(Section::Other) => {}
            Err(error) => {
                tracing::warn!(error = %error, "skipping malformed search result section");
            }
        }
    }

    out
}
