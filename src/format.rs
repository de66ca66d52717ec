//! Turning a [`MetadataRecord`] into badge labels.
//!
//! Each selected field becomes one [`DisplayItem`], in fixed display order.
//! The per-field rules:
//!
//! ```text
//! Camera          FUJIFILM X-T4      make + " " + model
//! Exposure Time   250"               1 / seconds, then a double quote
//! Focal Length    35mm               value + "mm"
//! F-Stop          f/2.8              "f/" + value
//! anything else   ISO 400            name + " " + value
//! ```
//!
//! A missing or falsy value (zero, blank text) always yields an empty label;
//! formatting never fails.

use crate::fields::{FieldId, FieldSelection};
use crate::metadata::{FieldValue, MetadataRecord};
use serde::Serialize;

/// One rendered badge entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayItem {
    pub label: String,
    pub field: FieldId,
}

impl DisplayItem {
    /// The camera entry is the one rendered in bold.
    pub fn is_emphasized(&self) -> bool {
        self.field == FieldId::Camera
    }
}

/// Format a single value according to its field's rule.
pub fn format_value(field: FieldId, name: &str, value: Option<&FieldValue>) -> String {
    let Some(value) = value.filter(|v| !v.is_falsy()) else {
        return String::new();
    };

    match field {
        FieldId::ExposureTime => match value.as_number() {
            Some(seconds) => format!("{}\"", shutter_reciprocal(seconds)),
            None => format!("{value}\""),
        },
        FieldId::FocalLength => format!("{value}mm"),
        FieldId::FNumber => format!("f/{value}"),
        FieldId::Camera => value.to_string(),
        _ => format!("{name} {value}"),
    }
}

/// `1 / seconds`, rounded to two decimals to hide binary float noise
/// (`0.3` s shows as `3.33`, not `3.3333333333333335`).
fn shutter_reciprocal(seconds: f64) -> f64 {
    ((1.0 / seconds) * 100.0).round() / 100.0
}

/// Format one field of a record.
pub fn format_field(record: &MetadataRecord, field: FieldId) -> String {
    format_value(field, field.name(), record.value(field).as_ref())
}

/// Build the badge entries for every checked field, in display order.
pub fn display_items(record: &MetadataRecord, selection: &FieldSelection) -> Vec<DisplayItem> {
    selection
        .iter_checked()
        .map(|field| DisplayItem {
            label: format_field(record, field),
            field,
        })
        .collect()
}
