//! Decoded camera metadata.
//!
//! [`MetadataRecord`] holds one typed, optional slot per known field instead
//! of a loose tag dictionary. Numeric slots keep their semantic meaning in
//! the type name:
//!
//! - **Exposure time** is a duration in seconds (`0.004` for 1/250 s).
//! - **F-number** is a ratio (`2.8`).
//! - **Focal length** is in millimetres (`35`).
//! - **ISO** is a plain integer.
//!
//! White balance and exposure program arrive from EXIF as small integer
//! codes; the decoder turns them into labels before they land here (see
//! [`white_balance_label`] and [`exposure_program_label`]).

use crate::fields::FieldId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Camera metadata extracted from a single image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposure_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub f_number: Option<f64>,
    /// Millimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focal_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub white_balance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposure_program: Option<String>,
}

/// A single scalar pulled out of a record for formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Integer(u32),
}

impl FieldValue {
    /// Zero, NaN and blank text count as "no value".
    pub fn is_falsy(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Number(n) => *n == 0.0 || n.is_nan(),
            FieldValue::Integer(n) => *n == 0,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Integer(n) => Some(f64::from(*n)),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl MetadataRecord {
    /// True when no slot carries a value.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Make and model joined by a space, skipping whichever part is missing.
    ///
    /// Returns `None` when neither is known.
    pub fn camera(&self) -> Option<String> {
        let parts: Vec<&str> = [self.make.as_deref(), self.model.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// The raw value behind a field, before any field-specific formatting.
    pub fn value(&self, field: FieldId) -> Option<FieldValue> {
        match field {
            FieldId::Camera => self.camera().map(FieldValue::Text),
            FieldId::FocalLength => self.focal_length.map(FieldValue::Number),
            FieldId::Iso => self.iso.map(FieldValue::Integer),
            FieldId::ExposureTime => self.exposure_time.map(FieldValue::Number),
            FieldId::FNumber => self.f_number.map(FieldValue::Number),
            FieldId::WhiteBalance => self.white_balance.clone().map(FieldValue::Text),
            FieldId::ExposureProgram => self.exposure_program.clone().map(FieldValue::Text),
        }
    }
}

/// Label for the EXIF `WhiteBalance` code (tag `0xA403`).
pub fn white_balance_label(code: u32) -> Option<&'static str> {
    match code {
        0 => Some("Auto white balance"),
        1 => Some("Manual white balance"),
        _ => None,
    }
}

/// Label for the EXIF `ExposureProgram` code (tag `0x8822`).
pub fn exposure_program_label(code: u32) -> Option<&'static str> {
    match code {
        0 => Some("Not defined"),
        1 => Some("Manual"),
        2 => Some("Normal program"),
        3 => Some("Aperture priority"),
        4 => Some("Shutter priority"),
        5 => Some("Creative program"),
        6 => Some("Action program"),
        7 => Some("Portrait mode"),
        8 => Some("Landscape mode"),
        _ => None,
    }
}
