//! Fixture builders shared by the integration tests.
//!
//! Produces real JPEG files, optionally carrying an APP1 EXIF segment built
//! from a minimal little-endian TIFF structure (IFD0 + Exif sub-IFD).

#![allow(dead_code)]

use image::{ImageEncoder, RgbImage};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// TIFF / EXIF construction
// ---------------------------------------------------------------------------

const ASCII: u16 = 2;
const SHORT: u16 = 3;
const LONG: u16 = 4;
const RATIONAL: u16 = 5;

const TAG_EXIF_IFD_POINTER: u16 = 0x8769;

#[derive(Clone)]
pub struct Entry {
    tag: u16,
    kind: u16,
    count: u32,
    data: Vec<u8>,
}

pub fn ascii(tag: u16, text: &str) -> Entry {
    let mut data = text.as_bytes().to_vec();
    data.push(0);
    Entry {
        tag,
        kind: ASCII,
        count: data.len() as u32,
        data,
    }
}

pub fn short(tag: u16, value: u16) -> Entry {
    Entry {
        tag,
        kind: SHORT,
        count: 1,
        data: value.to_le_bytes().to_vec(),
    }
}

pub fn long(tag: u16, value: u32) -> Entry {
    Entry {
        tag,
        kind: LONG,
        count: 1,
        data: value.to_le_bytes().to_vec(),
    }
}

pub fn rational(tag: u16, num: u32, denom: u32) -> Entry {
    let mut data = num.to_le_bytes().to_vec();
    data.extend(denom.to_le_bytes());
    Entry {
        tag,
        kind: RATIONAL,
        count: 1,
        data,
    }
}

/// Bytes an entry occupies in the IFD's data area (word aligned).
fn overflow_len(entry: &Entry) -> usize {
    if entry.data.len() <= 4 {
        0
    } else {
        entry.data.len() + entry.data.len() % 2
    }
}

fn ifd_len(entries: usize) -> usize {
    2 + 12 * entries + 4
}

/// Append one IFD (and its data area) at the current end of `out`.
fn write_ifd(out: &mut Vec<u8>, entries: &[Entry]) {
    let data_start = out.len() + ifd_len(entries.len());
    let mut data = Vec::new();

    out.extend((entries.len() as u16).to_le_bytes());
    for entry in entries {
        out.extend(entry.tag.to_le_bytes());
        out.extend(entry.kind.to_le_bytes());
        out.extend(entry.count.to_le_bytes());
        if entry.data.len() <= 4 {
            let mut inline = entry.data.clone();
            inline.resize(4, 0);
            out.extend(inline);
        } else {
            out.extend(((data_start + data.len()) as u32).to_le_bytes());
            data.extend(&entry.data);
            if data.len() % 2 == 1 {
                data.push(0);
            }
        }
    }
    out.extend(0u32.to_le_bytes());
    out.extend(data);
}

/// A little-endian TIFF block with `ifd0` entries plus an Exif sub-IFD.
pub fn build_tiff(ifd0: &[Entry], exif: &[Entry]) -> Vec<u8> {
    const IFD0_OFFSET: usize = 8;
    let ifd0_data: usize = ifd0.iter().map(overflow_len).sum();
    let exif_offset = IFD0_OFFSET + ifd_len(ifd0.len() + 1) + ifd0_data;

    let mut primary = ifd0.to_vec();
    primary.push(long(TAG_EXIF_IFD_POINTER, exif_offset as u32));
    primary.sort_by_key(|e| e.tag);

    let mut exif_entries = exif.to_vec();
    exif_entries.sort_by_key(|e| e.tag);

    let mut out = Vec::new();
    out.extend(b"II");
    out.extend(42u16.to_le_bytes());
    out.extend((IFD0_OFFSET as u32).to_le_bytes());
    write_ifd(&mut out, &primary);
    assert_eq!(out.len(), exif_offset, "exif IFD offset miscalculated");
    write_ifd(&mut out, &exif_entries);
    out
}

/// TIFF block for a FUJIFILM X-T4 at 35mm, ISO 400, 1/250 s, f/2.8,
/// auto white balance, aperture priority.
pub fn fujifilm_tiff() -> Vec<u8> {
    build_tiff(
        &[ascii(0x010F, "FUJIFILM"), ascii(0x0110, "X-T4")],
        &[
            rational(0x829A, 1, 250), // ExposureTime
            rational(0x829D, 28, 10), // FNumber
            short(0x8822, 3),         // ExposureProgram
            short(0x8827, 400),       // PhotographicSensitivity
            rational(0x920A, 35, 1),  // FocalLength
            short(0xA403, 0),         // WhiteBalance
        ],
    )
}

// ---------------------------------------------------------------------------
// JPEG files
// ---------------------------------------------------------------------------

/// Encode a small gradient JPEG in memory (no metadata segments beyond JFIF).
pub fn plain_jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut buf = Vec::new();
    image::codecs::jpeg::JpegEncoder::new(&mut buf)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
    buf
}

/// Splice an APP1 EXIF segment right after the SOI marker.
pub fn with_exif(jpeg: &[u8], tiff: &[u8]) -> Vec<u8> {
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8], "not a JPEG");
    let segment_len = (2 + 6 + tiff.len()) as u16;

    let mut out = vec![0xFF, 0xD8, 0xFF, 0xE1];
    out.extend(segment_len.to_be_bytes());
    out.extend(b"Exif\0\0");
    out.extend(tiff);
    out.extend(&jpeg[2..]);
    out
}

pub fn write_exif_jpeg(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, with_exif(&plain_jpeg_bytes(64, 48), &fujifilm_tiff())).unwrap();
    path
}

pub fn write_plain_jpeg(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, plain_jpeg_bytes(64, 48)).unwrap();
    path
}
