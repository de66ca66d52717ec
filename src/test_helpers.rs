//! Shared test utilities: a reference metadata record, synthetic images,
//! and a scriptable [`Decoder`] for exercising the page controller without
//! touching real files.

use crate::decode::{DecodeError, Decoder, FileSummary};
use crate::metadata::MetadataRecord;
use image::{ImageEncoder, RgbImage};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

// =========================================================================
// Fixtures
// =========================================================================

/// The record every formatting test is written against:
/// FUJIFILM X-T4, 35mm, ISO 400, 1/100 s, f/2.8, auto white balance.
pub fn sample_record() -> MetadataRecord {
    MetadataRecord {
        make: Some("FUJIFILM".to_string()),
        model: Some("X-T4".to_string()),
        exposure_time: Some(0.01),
        f_number: Some(2.8),
        focal_length: Some(35.0),
        iso: Some(400),
        white_balance: Some("Auto white balance".to_string()),
        exposure_program: None,
    }
}

/// Write a small valid JPEG (no EXIF segment) to `path`.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

// =========================================================================
// Mock decoder
// =========================================================================

/// Scripted outcome for one path.
#[derive(Clone)]
pub enum MockOutcome {
    Record(MetadataRecord),
    NoData,
    Failure,
}

/// Decoder that answers from a per-path script, optionally after a delay.
///
/// Unscripted paths decode to "no data". Every `read_metadata` call is
/// recorded so tests can assert which files were actually handed over.
#[derive(Default)]
pub struct MockDecoder {
    script: HashMap<PathBuf, (MockOutcome, Duration)>,
    calls: Mutex<Vec<PathBuf>>,
}

impl MockDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, outcome: MockOutcome) -> Self {
        self.script
            .insert(PathBuf::from(path), (outcome, Duration::ZERO));
        self
    }

    pub fn with_delay(mut self, path: &str, outcome: MockOutcome, delay: Duration) -> Self {
        self.script.insert(PathBuf::from(path), (outcome, delay));
        self
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl Decoder for MockDecoder {
    fn identify(&self, path: &Path) -> Result<FileSummary, DecodeError> {
        Ok(FileSummary {
            format: Some("JPEG".to_string()),
            dimensions: Some((6240, 4160)),
            ..FileSummary::from_path(path)
        })
    }

    fn read_metadata(&self, path: &Path) -> Result<Option<MetadataRecord>, DecodeError> {
        self.calls.lock().unwrap().push(path.to_path_buf());
        let (outcome, delay) = self
            .script
            .get(path)
            .cloned()
            .unwrap_or((MockOutcome::NoData, Duration::ZERO));
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        match outcome {
            MockOutcome::Record(record) => Ok(Some(record)),
            MockOutcome::NoData => Ok(None),
            MockOutcome::Failure => Err(DecodeError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "scripted failure",
            ))),
        }
    }
}
