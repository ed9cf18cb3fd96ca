//! Virtual breadcrumb synthesis from the parent event.
//!
//! The trail rendered to operators ends with one synthetic entry describing
//! the terminal exception (or, failing that, the event's message), so the
//! crash itself reads as the last step of the trail.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::breadcrumb::RawBreadcrumb;
use crate::event::Event;

/// Synthesize the trailing crumb for the event. Returns `None` when the
/// event carries neither an exception entry nor a message.
#[must_use]
pub fn virtual_crumb(event: &Event) -> Option<RawBreadcrumb> {
    if let Some(entry) = event.entry("exception") {
        let first = entry.data.get("values").and_then(|values| values.get(0));

        let mut data = BTreeMap::new();
        data.insert("type".to_owned(), field(first, "type"));
        data.insert("value".to_owned(), field(first, "value"));

        let category = match field(first, "module") {
            Value::String(module) => module_to_category(&module),
            _ => None,
        };

        return Some(RawBreadcrumb {
            kind: Some("exception".to_owned()),
            category: Some(category.unwrap_or_else(|| "exception".to_owned())),
            level: Some("error".to_owned()),
            timestamp: event.date_created.clone().map(Value::String),
            data: Some(data),
            ..RawBreadcrumb::default()
        });
    }

    let message = event.message.as_deref().filter(|message| !message.is_empty())?;

    Some(RawBreadcrumb {
        kind: Some("message".to_owned()),
        category: Some("message".to_owned()),
        level: event.tag_value("level").map(str::to_owned),
        message: Some(message.to_owned()),
        timestamp: event.date_created.clone().map(Value::String),
        ..RawBreadcrumb::default()
    })
}

/// Derive a category label from an exception module path: `foo/bar.js:42`
/// yields `bar.js`. Paths without a `/segment:line` suffix fall through to a
/// split on any single character, whose first piece is always the empty
/// string; callers treat empty as unset. The degenerate fallback is pinned
/// by tests and stays until the intended delimiter is confirmed.
#[must_use]
pub fn module_to_category(module: &str) -> Option<String> {
    static MODULE_LINE: OnceLock<Option<Regex>> = OnceLock::new();
    let pattern = MODULE_LINE.get_or_init(|| Regex::new(r"^.*/(.*?):\d+").ok());

    if let Some(regex) = pattern {
        if let Some(captures) = regex.captures(module) {
            return captures.get(1).map(|segment| segment.as_str().to_owned());
        }
    }

    module
        .split(|_: char| true)
        .next()
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
}

fn field(value: Option<&Value>, key: &str) -> Value {
    value
        .and_then(|value| value.get(key))
        .cloned()
        .unwrap_or(Value::Null)
}
