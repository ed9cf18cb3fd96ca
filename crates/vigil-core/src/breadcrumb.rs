//! Raw and normalized breadcrumb records.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Crumb exactly as it arrives inside the event payload. Shapes vary per SDK,
/// so every field is optional and `data` is an open mapping.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawBreadcrumb {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    /// RFC3339 string or epoch seconds, depending on the SDK.
    #[serde(default)]
    pub timestamp: Option<Value>,
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub data: Option<BTreeMap<String, Value>>,
}

/// Canonical breadcrumb type tag. Unknown or missing raw types map to
/// `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BreadcrumbType {
    Navigation,
    Http,
    Info,
    Debug,
    Message,
    Query,
    Ui,
    User,
    Exception,
    Warning,
    Error,
    Default,
}

impl BreadcrumbType {
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        let folded = raw.unwrap_or("").trim().to_ascii_lowercase();
        match folded.as_str() {
            "navigation" => Self::Navigation,
            "http" => Self::Http,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "message" => Self::Message,
            "query" => Self::Query,
            "ui" => Self::Ui,
            "user" => Self::User,
            "exception" => Self::Exception,
            "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Default,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::Http => "http",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Message => "message",
            Self::Query => "query",
            Self::Ui => "ui",
            Self::User => "user",
            Self::Exception => "exception",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Default => "default",
        }
    }
}

/// Uniformly shaped payload per canonical type. Absent fields are explicit
/// `None`, never missing keys.
#[derive(Debug, Clone, PartialEq)]
pub enum BreadcrumbData {
    Navigation {
        to: Option<String>,
        from: Option<String>,
    },
    Http {
        url: Option<String>,
        method: Option<String>,
        status_code: Option<u16>,
        reason: Option<String>,
    },
    Freeform(BTreeMap<String, Value>),
}

impl Default for BreadcrumbData {
    fn default() -> Self {
        Self::Freeform(BTreeMap::new())
    }
}

/// Normalized crumb. `id` is the trail position and stays unique and
/// monotonic, with the synthesized virtual entry last.
#[derive(Debug, Clone, PartialEq)]
pub struct Breadcrumb {
    pub id: usize,
    pub kind: BreadcrumbType,
    pub category: Option<String>,
    pub message: Option<String>,
    pub level: Option<String>,
    pub timestamp: Option<String>,
    pub event_id: Option<String>,
    pub data: BreadcrumbData,
}
