//! Breadcrumb normalization and trail assembly.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::breadcrumb::{Breadcrumb, BreadcrumbData, BreadcrumbType, RawBreadcrumb};
use crate::event::Event;
use crate::virtual_crumb::virtual_crumb;

/// Normalize one raw crumb into canonical shape. Missing optional fields
/// resolve to `None`; a missing `level` stays unset rather than defaulting.
#[must_use]
pub fn normalize_breadcrumb(raw: &RawBreadcrumb, id: usize) -> Breadcrumb {
    let kind = BreadcrumbType::from_raw(raw.kind.as_deref());
    Breadcrumb {
        id,
        kind,
        category: raw.category.clone(),
        message: raw.message.clone(),
        level: raw.level.clone(),
        timestamp: raw.timestamp.as_ref().and_then(normalize_timestamp),
        event_id: raw.event_id.clone(),
        data: shape_data(kind, raw.data.as_ref()),
    }
}

/// Assemble the full trail: every raw crumb in arrival order, then the
/// synthesized virtual crumb (when the event yields one) appended last.
/// Ids follow trail position.
#[must_use]
pub fn normalize_trail(values: &[RawBreadcrumb], event: &Event) -> Vec<Breadcrumb> {
    let mut trail: Vec<Breadcrumb> = values
        .iter()
        .enumerate()
        .map(|(id, raw)| normalize_breadcrumb(raw, id))
        .collect();

    if let Some(virtual_raw) = virtual_crumb(event) {
        trail.push(normalize_breadcrumb(&virtual_raw, trail.len()));
    }

    trail
}

fn shape_data(kind: BreadcrumbType, data: Option<&BTreeMap<String, Value>>) -> BreadcrumbData {
    match kind {
        BreadcrumbType::Navigation => BreadcrumbData::Navigation {
            to: field_string(data, "to"),
            from: field_string(data, "from"),
        },
        BreadcrumbType::Http => BreadcrumbData::Http {
            url: field_string(data, "url"),
            method: field_string(data, "method"),
            status_code: field_status_code(data),
            reason: field_string(data, "reason"),
        },
        _ => BreadcrumbData::Freeform(data.cloned().unwrap_or_default()),
    }
}

fn field_string(data: Option<&BTreeMap<String, Value>>, key: &str) -> Option<String> {
    match data?.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn field_status_code(data: Option<&BTreeMap<String, Value>>) -> Option<u16> {
    match data?.get("status_code")? {
        Value::Number(number) => number
            .as_u64()
            .and_then(|code| u16::try_from(code).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Crumb timestamps arrive as RFC3339 strings or epoch seconds; epoch values
/// are canonicalized so downstream substring search sees one format.
fn normalize_timestamp(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => {
            let seconds = number.as_f64()?;
            if !seconds.is_finite() {
                return None;
            }
            DateTime::<Utc>::from_timestamp(seconds.trunc() as i64, 0)
                .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Secs, true))
        }
        _ => None,
    }
}
