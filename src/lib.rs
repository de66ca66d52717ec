//! # EXIF Badge
//!
//! Turns the camera metadata embedded in a photo into a small, copyable HTML
//! badge ("FUJIFILM X-T4 · 35mm · ISO 400 · 250" · f/2.8") for pasting into
//! social posts that accept inline-styled HTML.
//!
//! # Architecture: One Controller, Pure Views
//!
//! ```text
//! image ──drop──▶ Formatter ──decode (worker thread)──▶ MetadataRecord
//!                    │
//!                    ├── FieldSelection + MetadataRecord ──format──▶ DisplayItems
//!                    ├── DisplayItems + StyleChoice ──snippet──▶ HTML fragment
//!                    └── all of the above ──page──▶ static HTML page
//! ```
//!
//! [`formatter::Formatter`] owns all view-state and is the only thing that
//! mutates it. Everything downstream is a pure function of that state, which
//! keeps formatting and rendering trivially testable.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`fields`] | Closed set of badge fields, fixed display order, `FieldSelection` |
//! | [`metadata`] | `MetadataRecord`, typed optional slots per field |
//! | [`decode`] | `Decoder` trait + `kamadak-exif` backed `ExifDecoder` |
//! | [`format`] | Field-specific label rules → ordered `DisplayItem`s |
//! | [`style`] | Validated hex colours and the three-colour `StyleChoice` |
//! | [`snippet`] | The copyable badge fragment |
//! | [`formatter`] | Page controller: drop handling, stale-result guard, derived views |
//! | [`page`] | Full static page: layout, drop zone, checklist, preview, code |
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Typed Record Over a Tag Dictionary
//!
//! EXIF libraries hand back a bag of loosely typed tags. The badge only needs
//! seven fields, so the decoder lifts exactly those into [`metadata::MetadataRecord`]
//! with one semantic type per slot (seconds, ratio, millimetres, integer,
//! text). Formatting rules then match on a closed [`fields::FieldId`] enum
//! instead of string keys.
//!
//! ## Last Drop Wins
//!
//! Decodes run off the caller's thread. Each drop bumps a generation
//! counter; completions carrying an older generation are discarded. There is
//! no cancellation of the work itself, only of its result.
//!
//! ## Inline Styles Only
//!
//! The badge ends up on publishing surfaces that strip `<style>` and class
//! attributes, so every declaration is inline and colours are restricted to
//! hex notation before they are interpolated.

pub mod config;
pub mod decode;
pub mod fields;
pub mod format;
pub mod formatter;
pub mod metadata;
pub mod output;
pub mod page;
pub mod snippet;
pub mod style;

#[cfg(test)]
pub(crate) mod test_helpers;
