//! Parent error event shape supplied by the data-fetching layer.

use serde::Deserialize;
use serde_json::Value;

/// Already-parsed error event. Only the fields the breadcrumb pipeline
/// consumes are modeled; everything else in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Event {
    #[serde(default)]
    pub entries: Vec<EventEntry>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "dateCreated")]
    pub date_created: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub tags: Vec<EventTag>,
}

/// One interface entry on the event. Entry payloads are heterogeneous per
/// kind, so `data` stays an untyped JSON value and callers walk it.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct EventEntry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct EventTag {
    pub key: String,
    pub value: String,
}

impl Event {
    /// First entry of the given kind, if present.
    #[must_use]
    pub fn entry(&self, kind: &str) -> Option<&EventEntry> {
        self.entries.iter().find(|entry| entry.kind == kind)
    }

    /// Value of the named event tag, if present.
    #[must_use]
    pub fn tag_value(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.key == key)
            .map(|tag| tag.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Event;
    use serde_json::json;

    #[test]
    fn decodes_partial_event_payloads() {
        let event: Event = match serde_json::from_value(json!({
            "dateCreated": "2020-02-10T14:05:00Z",
            "tags": [{"key": "level", "value": "warning"}]
        })) {
            Ok(event) => event,
            Err(err) => panic!("partial payload must decode: {err}"),
        };

        assert!(event.entries.is_empty());
        assert_eq!(event.message, None);
        assert_eq!(event.tag_value("level"), Some("warning"));
        assert_eq!(event.tag_value("release"), None);
    }

    #[test]
    fn entry_lookup_returns_first_match() {
        let event: Event = match serde_json::from_value(json!({
            "entries": [
                {"type": "breadcrumbs", "data": {"values": []}},
                {"type": "exception", "data": {"values": [{"type": "TypeError"}]}}
            ]
        })) {
            Ok(event) => event,
            Err(err) => panic!("event must decode: {err}"),
        };

        assert_eq!(event.entry("exception").map(|e| e.kind.as_str()), Some("exception"));
        assert!(event.entry("request").is_none());
    }
}
