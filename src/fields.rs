//! The closed set of badge fields and the user's selection over them.
//!
//! Display order is fixed by [`FieldId::ALL`]. Users choose *which* fields
//! appear, never *where*: toggling a field on or off leaves every other
//! field's position untouched.
//!
//! | Field | Display name | Key | Default |
//! |-------|--------------|-----|---------|
//! | Camera (make + model) | Camera | `camera` | on |
//! | Focal length | Focal Length | `focal-length` | on |
//! | ISO | ISO | `iso` | on |
//! | Exposure time | Exposure Time | `exposure-time` | on |
//! | Aperture | F-Stop | `f-number` | on |
//! | White balance | White Balance | `white-balance` | off |
//! | Exposure program | Exposure Program | `exposure-program` | off |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown field '{0}' (expected one of: {keys})", keys = FieldId::keys().join(", "))]
pub struct FieldError(pub String);

/// Identifier of a displayable metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    /// Camera identity: make and model joined by a space.
    Camera,
    FocalLength,
    Iso,
    ExposureTime,
    FNumber,
    WhiteBalance,
    ExposureProgram,
}

impl FieldId {
    /// Every field, in badge display order.
    pub const ALL: [FieldId; 7] = [
        FieldId::Camera,
        FieldId::FocalLength,
        FieldId::Iso,
        FieldId::ExposureTime,
        FieldId::FNumber,
        FieldId::WhiteBalance,
        FieldId::ExposureProgram,
    ];

    /// Human-readable name shown in the checklist and used as the label
    /// prefix for fields without a dedicated formatting rule.
    pub fn name(self) -> &'static str {
        match self {
            FieldId::Camera => "Camera",
            FieldId::FocalLength => "Focal Length",
            FieldId::Iso => "ISO",
            FieldId::ExposureTime => "Exposure Time",
            FieldId::FNumber => "F-Stop",
            FieldId::WhiteBalance => "White Balance",
            FieldId::ExposureProgram => "Exposure Program",
        }
    }

    /// Kebab-case key accepted on the command line.
    pub fn key(self) -> &'static str {
        match self {
            FieldId::Camera => "camera",
            FieldId::FocalLength => "focal-length",
            FieldId::Iso => "iso",
            FieldId::ExposureTime => "exposure-time",
            FieldId::FNumber => "f-number",
            FieldId::WhiteBalance => "white-balance",
            FieldId::ExposureProgram => "exposure-program",
        }
    }

    pub fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|f| f.key()).collect()
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldId {
    type Err = FieldError;

    /// Accepts the kebab-case key, case-insensitively; underscores are
    /// treated as dashes so config-style names work too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.key() == normalized)
            .ok_or_else(|| FieldError(s.to_string()))
    }
}

/// One on/off flag per [`FieldId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelection {
    checked: [bool; FieldId::ALL.len()],
}

impl Default for FieldSelection {
    fn default() -> Self {
        Self {
            checked: [true, true, true, true, true, false, false],
        }
    }
}

impl FieldSelection {
    /// A selection with every field turned off.
    pub fn none() -> Self {
        Self {
            checked: [false; FieldId::ALL.len()],
        }
    }

    pub fn is_checked(&self, field: FieldId) -> bool {
        self.checked[field.index()]
    }

    pub fn set(&mut self, field: FieldId, checked: bool) {
        self.checked[field.index()] = checked;
    }

    /// Flip a single field, as clicking its checkbox would.
    pub fn toggle(&mut self, field: FieldId) {
        let slot = &mut self.checked[field.index()];
        *slot = !*slot;
    }

    /// Checked fields in display order.
    pub fn iter_checked(&self) -> impl Iterator<Item = FieldId> + '_ {
        FieldId::ALL
            .into_iter()
            .filter(move |f| self.is_checked(*f))
    }

    /// Every field paired with its flag, in display order.
    pub fn entries(&self) -> impl Iterator<Item = (FieldId, bool)> + '_ {
        FieldId::ALL.into_iter().map(move |f| (f, self.is_checked(f)))
    }
}
