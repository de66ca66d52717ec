//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure and do no I/O. Diagnostics go through
//! `log` instead and never mix with this output.
//!
//! ## Inspect
//!
//! ```text
//! DSCF0001.JPG (JPEG, 6240×4160)
//!     [x] Camera            FUJIFILM X-T4
//!     [x] Focal Length      35mm
//!     [x] ISO               ISO 400
//!     [x] Exposure Time     250"
//!     [x] F-Stop            f/2.8
//!     [ ] White Balance     White Balance Auto white balance
//!     [ ] Exposure Program  -
//! ```

use crate::decode::FileSummary;
use crate::fields::FieldSelection;
use crate::format::format_field;
use crate::metadata::MetadataRecord;
use std::path::Path;

/// Width of the field-name column in the inspect listing.
const NAME_WIDTH: usize = 17;

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// Header line for a file: name plus whatever the decoder could sniff.
///
/// ```text
/// photo.jpg (JPEG, 640×480)
/// photo.jpg (JPEG)
/// photo.jpg
/// ```
fn file_header(file: &FileSummary) -> String {
    let mut details = Vec::new();
    if let Some(format) = &file.format {
        details.push(format.clone());
    }
    if let Some((w, h)) = file.dimensions {
        details.push(format!("{w}×{h}"));
    }
    if details.is_empty() {
        file.name.clone()
    } else {
        format!("{} ({})", file.name, details.join(", "))
    }
}

/// Format the `inspect` listing: every field with its checkbox and label.
pub fn format_inspect_output(
    file: &FileSummary,
    record: &MetadataRecord,
    selection: &FieldSelection,
) -> Vec<String> {
    let mut lines = vec![file_header(file)];
    for (field, checked) in selection.entries() {
        let label = format_field(record, field);
        let shown = if label.is_empty() { "-" } else { label.as_str() };
        lines.push(format!(
            "    {} {:<width$} {}",
            checkbox(checked),
            field.name(),
            shown,
            width = NAME_WIDTH
        ));
    }
    lines
}

pub fn print_inspect_output(file: &FileSummary, record: &MetadataRecord, selection: &FieldSelection) {
    for line in format_inspect_output(file, record, selection) {
        println!("{}", line);
    }
}

/// Message for an image the decoder could not get anything out of.
pub fn format_missing_data(path: &Path) -> String {
    format!("No camera metadata found in {}", path.display())
}

/// Confirmation after `page` wrote its output.
pub fn format_page_written(output: &Path, has_preview: bool) -> Vec<String> {
    let mut lines = vec![format!("Wrote {}", output.display())];
    if !has_preview {
        lines.push("    (no metadata loaded: preview and code omitted)".to_string());
    }
    lines
}

pub fn print_page_written(output: &Path, has_preview: bool) {
    for line in format_page_written(output, has_preview) {
        println!("{}", line);
    }
}
