//! Model records and catalog response normalization.

use bevy::prelude::*;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CatalogError;

/// One model entry as returned by the catalog endpoint.
///
/// Example JSON:
/// ```json
/// {
///   "id": "66f1c2...",
///   "name": "fraud-detector",
///   "userId": "66e0a1...",
///   "description": "Gradient boosted trees",
///   "vectorFormat": "onnx",
///   "createdAt": "2025-01-14T10:02:33.120000",
///   "updatedAt": "2025-01-14T10:02:33.120000"
/// }
/// ```
///
/// Every field is optional and each element is decoded on its own, so a
/// sparse or odd record never fails the response. Unknown fields, and known
/// fields of an unexpected type, are kept in `extra` for inspection only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Key used to tell cards apart across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKey<'a> {
    Id(&'a str),
    /// Degraded key for records without an id. Only stable while the
    /// list order is, so nothing identity-sensitive may rely on it.
    Position(usize),
}

impl ModelRecord {
    /// Build a record from one element of the catalog array.
    ///
    /// A non-object element becomes an empty record so the list keeps its
    /// length and order.
    pub fn from_value(value: Value) -> Self {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                debug!("Catalog element is a {}, not an object", json_kind(&other));
                return Self::default();
            }
        };

        let mut misfits = Map::new();
        let mut record = ModelRecord {
            id: take_text(&mut fields, &mut misfits, &["id"]),
            name: take_text(&mut fields, &mut misfits, &["name"]),
            user_id: take_text(&mut fields, &mut misfits, &["userId", "user_id"]),
            description: take_text(&mut fields, &mut misfits, &["description"]),
            vector_format: take_text(&mut fields, &mut misfits, &["vectorFormat", "vector_format"]),
            created_at: take_timestamp(&mut fields, &mut misfits, &["createdAt", "created_at"]),
            updated_at: take_timestamp(&mut fields, &mut misfits, &["updatedAt", "updated_at"]),
            extra: fields,
        };
        record.extra.append(&mut misfits);
        record
    }

    /// Name shown on the card
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed Model")
    }

    /// Card key: the id when present, else the position in the list
    pub fn card_key(&self, index: usize) -> CardKey<'_> {
        match self.id.as_deref() {
            Some(id) => CardKey::Id(id),
            None => CardKey::Position(index),
        }
    }

    /// Creation date formatted for the local timezone, if it parses
    pub fn created_date(&self) -> Option<String> {
        self.created_at.as_deref().and_then(format_local_date)
    }

    /// Pretty-printed JSON of the whole record, extra fields included
    pub fn pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("<unprintable: {}>", e))
    }
}

/// Remove the first present key and return it as text.
///
/// Null counts as absent. Any other non-string value goes to `misfits`
/// under its original key.
fn take_text(
    fields: &mut Map<String, Value>,
    misfits: &mut Map<String, Value>,
    keys: &[&str],
) -> Option<String> {
    take_field(fields, misfits, keys, |value| match value {
        Value::String(text) => Ok(text),
        other => Err(other),
    })
}

/// Like [`take_text`], but epoch numbers are kept as their decimal text.
fn take_timestamp(
    fields: &mut Map<String, Value>,
    misfits: &mut Map<String, Value>,
    keys: &[&str],
) -> Option<String> {
    take_field(fields, misfits, keys, |value| match value {
        Value::String(text) => Ok(text),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(other),
    })
}

fn take_field(
    fields: &mut Map<String, Value>,
    misfits: &mut Map<String, Value>,
    keys: &[&str],
    convert: impl Fn(Value) -> Result<String, Value>,
) -> Option<String> {
    let mut found = None;
    for key in keys {
        match fields.remove(*key) {
            None | Some(Value::Null) => {}
            Some(value) => match convert(value) {
                Ok(text) if found.is_none() => found = Some(text),
                Ok(text) => {
                    misfits.insert(key.to_string(), Value::String(text));
                }
                Err(other) => {
                    misfits.insert(key.to_string(), other);
                }
            },
        }
    }
    found
}

/// Render a timestamp as a local date.
///
/// Accepts RFC 3339, naive ISO 8601 date-times (taken as UTC), plain dates
/// and Unix epoch numbers (seconds, or milliseconds when large). Anything
/// else yields `None`.
pub fn format_local_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let utc: DateTime<Utc> = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
        .or_else(|| parse_epoch(raw))?;

    Some(utc.with_timezone(&Local).format("%x").to_string())
}

/// Epoch seconds, or epoch milliseconds past 1e11.
fn parse_epoch(raw: &str) -> Option<DateTime<Utc>> {
    let value = raw.parse::<f64>().ok().filter(|v| v.is_finite())?;
    if value.abs() >= 1e11 {
        DateTime::from_timestamp_millis(value as i64)
    } else {
        DateTime::from_timestamp(value as i64, 0)
    }
}

/// The response shapes the catalog endpoint is known to produce.
///
/// Variants are tried in order; `Unrecognized` accepts anything. Elements
/// stay raw here and are converted one by one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CatalogEnvelope {
    /// `[ {...}, {...} ]`
    Bare(Vec<Value>),
    /// `{ "models": [ {...} ] }`
    Wrapped { models: Vec<Value> },
    Unrecognized(Value),
}

impl CatalogEnvelope {
    /// Records in server order; an unrecognized shape is an empty catalog.
    pub fn into_records(self) -> Vec<ModelRecord> {
        match self {
            CatalogEnvelope::Bare(elements) | CatalogEnvelope::Wrapped { models: elements } => {
                elements.into_iter().map(ModelRecord::from_value).collect()
            }
            CatalogEnvelope::Unrecognized(value) => {
                debug!(
                    "Catalog response has an unrecognized shape ({}), treating as empty",
                    json_kind(&value)
                );
                Vec::new()
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decode a catalog response body into records.
///
/// Only a body that is not JSON at all is an error; any JSON value
/// normalizes to a (possibly empty) record list.
pub fn normalize_catalog(body: &str) -> Result<Vec<ModelRecord>, CatalogError> {
    serde_json::from_str::<CatalogEnvelope>(body)
        .map(CatalogEnvelope::into_records)
        .map_err(|e| CatalogError::Decode(e.to_string()))
}
