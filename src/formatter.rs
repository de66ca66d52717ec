//! The formatter page controller.
//!
//! [`Formatter`] owns every piece of view-state: the field selection, the
//! colour choice, the currently loaded file and its decoded metadata, and
//! the missing-data flag. State changes only through its methods; the page
//! and the snippet are pure functions of that state.
//!
//! ## Decoding
//!
//! Dropping a file starts a decode on a worker thread and returns a
//! [`RequestId`]. Ids come from a generation counter, so a newer drop (or a
//! [`Formatter::cancel`]) makes every older request stale. Completions travel
//! back over an `mpsc` channel and are applied by [`Formatter::poll`] or
//! [`Formatter::wait`]; stale ones are dropped on the floor, so the most
//! recent drop always wins no matter which decode finishes first.
//!
//! ```text
//! Idle ──drop──▶ Decoding ──record──▶ Ready
//!                   │
//!                   └──no data / error──▶ previous state + missing-data flag
//! ```
//!
//! A failed decode never touches the previously loaded record or file.

use crate::config::LayoutConfig;
use crate::decode::{DecodeError, Decoder, FileSummary};
use crate::fields::{FieldId, FieldSelection};
use crate::format::{self, DisplayItem};
use crate::metadata::MetadataRecord;
use crate::page::{self, PageView};
use crate::snippet;
use crate::style::{Color, StyleChoice};
use maud::Markup;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::JoinHandle;

/// Identifies one decode request. Later drops get larger ids.
pub type RequestId = u64;

/// Where the controller is in its load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Decoding(RequestId),
    Ready,
}

/// Result of one decode, as reported by its worker.
pub struct Completion {
    request: RequestId,
    path: PathBuf,
    file: FileSummary,
    outcome: Result<Option<MetadataRecord>, DecodeError>,
}

pub struct Formatter {
    decoder: Arc<dyn Decoder>,
    selection: FieldSelection,
    style: StyleChoice,
    file: Option<FileSummary>,
    record: Option<MetadataRecord>,
    missing_data: bool,
    /// Id of the most recently issued (or cancelled) request.
    current: RequestId,
    pending: bool,
    worker: Option<JoinHandle<()>>,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
}

impl Formatter {
    pub fn new(decoder: Arc<dyn Decoder>, selection: FieldSelection, style: StyleChoice) -> Self {
        let (tx, rx) = channel();
        Self {
            decoder,
            selection,
            style,
            file: None,
            record: None,
            missing_data: false,
            current: 0,
            pending: false,
            worker: None,
            tx,
            rx,
        }
    }

    // ------------------------------------------------------------------
    // State accessors
    // ------------------------------------------------------------------

    pub fn selection(&self) -> &FieldSelection {
        &self.selection
    }

    pub fn style(&self) -> &StyleChoice {
        &self.style
    }

    pub fn file(&self) -> Option<&FileSummary> {
        self.file.as_ref()
    }

    pub fn record(&self) -> Option<&MetadataRecord> {
        self.record.as_ref()
    }

    /// Set when the latest decode produced nothing usable.
    pub fn is_missing_data(&self) -> bool {
        self.missing_data
    }

    pub fn phase(&self) -> Phase {
        if self.pending {
            Phase::Decoding(self.current)
        } else if self.record.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    // ------------------------------------------------------------------
    // Selection and colours
    // ------------------------------------------------------------------

    pub fn toggle(&mut self, field: FieldId) {
        self.selection.toggle(field);
    }

    pub fn set_selection(&mut self, selection: FieldSelection) {
        self.selection = selection;
    }

    pub fn set_gradient_from(&mut self, color: Color) {
        self.style.gradient_from = color;
    }

    pub fn set_gradient_to(&mut self, color: Color) {
        self.style.gradient_to = color;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.style.text = color;
    }

    pub fn set_style(&mut self, style: StyleChoice) {
        self.style = style;
    }

    // ------------------------------------------------------------------
    // Upload / drop handling
    // ------------------------------------------------------------------

    /// Accept a drop of zero or more files. Only the first is decoded.
    pub fn drop_files(&mut self, paths: &[PathBuf]) -> Option<RequestId> {
        log::debug!("dropped {} file(s): {paths:?}", paths.len());
        let first = paths.first()?;
        if paths.len() > 1 {
            log::info!(
                "only the first file is used; ignoring {} more",
                paths.len() - 1
            );
        }
        Some(self.drop_file(first))
    }

    /// Start decoding `path`, superseding any request still in flight.
    pub fn drop_file(&mut self, path: impl AsRef<Path>) -> RequestId {
        let path = path.as_ref().to_path_buf();
        self.current += 1;
        self.pending = true;
        let request = self.current;

        let decoder = Arc::clone(&self.decoder);
        let tx = self.tx.clone();
        log::debug!("decode #{request} started for {}", path.display());
        self.worker = Some(std::thread::spawn(move || {
            let file = decoder.identify(&path).unwrap_or_else(|e| {
                log::debug!("could not identify {}: {e}", path.display());
                FileSummary::from_path(&path)
            });
            let outcome = decoder.read_metadata(&path);
            // The receiving side only disappears with the controller itself.
            let _ = tx.send(Completion {
                request,
                path,
                file,
                outcome,
            });
        }));
        request
    }

    /// Abandon the in-flight request, if any. Its result will be discarded.
    pub fn cancel(&mut self) {
        if self.pending {
            log::debug!("decode #{} cancelled", self.current);
            self.current += 1;
            self.pending = false;
            self.worker = None;
        }
    }

    /// Apply a completion. Returns `false` if it was stale and ignored.
    pub fn apply(&mut self, completion: Completion) -> bool {
        if !self.pending || completion.request != self.current {
            log::debug!(
                "discarding stale decode #{} for {}",
                completion.request,
                completion.path.display()
            );
            return false;
        }

        self.pending = false;
        self.worker = None;
        match completion.outcome {
            Ok(Some(record)) => {
                log::debug!("decoded {}: {record:?}", completion.path.display());
                self.missing_data = false;
                self.record = Some(record);
                self.file = Some(completion.file);
            }
            Ok(None) => {
                log::warn!("no EXIF metadata in {}", completion.path.display());
                self.missing_data = true;
            }
            Err(e) => {
                log::warn!("could not decode {}: {e}", completion.path.display());
                self.missing_data = true;
            }
        }
        true
    }

    /// Apply every completion that has already arrived, without blocking.
    ///
    /// Returns `true` once the latest request has settled.
    pub fn poll(&mut self) -> bool {
        while let Ok(completion) = self.rx.try_recv() {
            self.apply(completion);
        }
        !self.pending
    }

    /// Block until the latest request has settled.
    pub fn wait(&mut self) {
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                log::error!("decode worker #{} panicked", self.current);
            }
        }
        self.poll();
        if self.pending {
            // The worker exited without reporting back.
            self.pending = false;
            self.missing_data = true;
        }
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    /// Badge entries for the current record, or `None` before one is loaded.
    pub fn display_items(&self) -> Option<Vec<DisplayItem>> {
        self.record
            .as_ref()
            .map(|record| format::display_items(record, &self.selection))
    }

    /// The copyable HTML fragment, or `None` before a record is loaded.
    pub fn snippet(&self) -> Option<String> {
        self.display_items()
            .map(|items| snippet::render_snippet(&items, &self.style))
    }

    pub fn render_page(&self, layout: &LayoutConfig) -> Markup {
        page::render_page(&PageView {
            file: self.file.as_ref(),
            selection: &self.selection,
            style: &self.style,
            items: self.display_items(),
            layout,
        })
    }
}
