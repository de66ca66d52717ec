//! Metadata decoding backend.
//!
//! The [`Decoder`] trait is the seam between the page controller and whatever
//! actually reads image files. It has two operations:
//!
//! | Operation | Production ([`ExifDecoder`]) |
//! |---|---|
//! | **identify** | `image::ImageReader` format sniffing + header dimensions |
//! | **read_metadata** | `kamadak-exif` container reader (JPEG, TIFF, HEIF, PNG, WebP) |
//!
//! Neither parses binary formats itself. A file that carries no EXIF block,
//! or an EXIF block without any field we display, decodes to `Ok(None)`;
//! unreadable or malformed files are errors. The controller treats both the
//! same way (missing data), but logs them differently.

use crate::metadata::{MetadataRecord, exposure_program_label, white_balance_label};
use exif::{Field, In, Tag, Value};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("EXIF error: {0}")]
    Exif(#[from] exif::Error),
}

/// What the drop zone shows about the current file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    pub name: String,
    /// Container format as sniffed from the file header, e.g. `JPEG`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<(u32, u32)>,
}

impl FileSummary {
    /// Summary carrying only the file name.
    pub fn from_path(path: &Path) -> Self {
        Self {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            format: None,
            dimensions: None,
        }
    }
}

/// Reads image files for the page controller.
///
/// Implementations are shared with decode worker threads, hence the
/// `Send + Sync` bound.
pub trait Decoder: Send + Sync {
    /// Sniff the file's format and pixel size.
    fn identify(&self, path: &Path) -> Result<FileSummary, DecodeError>;

    /// Extract the displayable EXIF fields, or `None` if there are none.
    fn read_metadata(&self, path: &Path) -> Result<Option<MetadataRecord>, DecodeError>;
}

/// Production decoder backed by `kamadak-exif` and `image`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifDecoder;

impl ExifDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for ExifDecoder {
    fn identify(&self, path: &Path) -> Result<FileSummary, DecodeError> {
        let mut summary = FileSummary::from_path(path);
        let reader = image::ImageReader::open(path)?.with_guessed_format()?;
        summary.format = reader
            .format()
            .map(|f| format!("{f:?}").to_ascii_uppercase());
        summary.dimensions = reader.into_dimensions().ok();
        Ok(summary)
    }

    fn read_metadata(&self, path: &Path) -> Result<Option<MetadataRecord>, DecodeError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        match exif::Reader::new().read_from_container(&mut reader) {
            Ok(exif) => {
                let record = record_from_fields(exif.fields());
                Ok((!record.is_empty()).then_some(record))
            }
            Err(exif::Error::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Collect the displayable fields of the primary image.
///
/// Thumbnail IFD entries are ignored. Values of an unexpected type, zero
/// denominators, and unknown enum codes leave their slot empty.
pub fn record_from_fields<'a>(fields: impl IntoIterator<Item = &'a Field>) -> MetadataRecord {
    let mut record = MetadataRecord::default();

    for field in fields.into_iter().filter(|f| f.ifd_num == In::PRIMARY) {
        match field.tag {
            Tag::Make => record.make = ascii(&field.value),
            Tag::Model => record.model = ascii(&field.value),
            Tag::ExposureTime => record.exposure_time = rational(&field.value),
            Tag::FNumber => record.f_number = rational(&field.value),
            Tag::FocalLength => record.focal_length = rational(&field.value),
            Tag::PhotographicSensitivity => {
                record.iso = field.value.get_uint(0).filter(|&n| n > 0);
            }
            Tag::WhiteBalance => {
                record.white_balance = field
                    .value
                    .get_uint(0)
                    .and_then(white_balance_label)
                    .map(String::from);
            }
            Tag::ExposureProgram => {
                record.exposure_program = field
                    .value
                    .get_uint(0)
                    .and_then(exposure_program_label)
                    .map(String::from);
            }
            _ => {}
        }
    }

    record
}

/// First ASCII component, NUL padding and surrounding whitespace stripped.
fn ascii(value: &Value) -> Option<String> {
    let Value::Ascii(parts) = value else {
        return None;
    };
    parts
        .first()
        .map(|bytes| {
            String::from_utf8_lossy(bytes)
                .trim_matches(|c: char| c == '\0' || c.is_whitespace())
                .to_string()
        })
        .filter(|s| !s.is_empty())
}

fn rational(value: &Value) -> Option<f64> {
    let Value::Rational(parts) = value else {
        return None;
    };
    parts
        .first()
        .filter(|r| r.denom != 0)
        .map(|r| r.to_f64())
        .filter(|n| n.is_finite())
}
