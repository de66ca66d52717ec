//! HTML snippet generation.
//!
//! The snippet is what the user copies into a post: a flex container with an
//! inline gradient background and text colour, holding one padded `div` per
//! badge entry. Everything is inline-styled because the target publishing
//! surfaces strip `<style>` blocks and classes.
//!
//! Rendered with maud, so labels are escaped; colours are already validated
//! hex strings (see [`crate::style::Color`]).

use crate::format::DisplayItem;
use crate::style::StyleChoice;
use maud::{Markup, html};

const CONTAINER_LAYOUT: &str = "display: flex;width: fit-content;position: relative;\
padding-left: 1.5rem;padding-right: 1.5rem;padding-top: 2rem;padding-bottom: 2rem;";

const CONTAINER_FRAME: &str = "border-radius: 0.5rem;\
box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);";

const ITEM_PADDING: &str = "padding-left: 0.75rem;padding-right: 0.75rem;";

const EMPHASIS: &str = "font-weight:700;";

fn container_style(style: &StyleChoice) -> String {
    format!(
        "{CONTAINER_LAYOUT}{}{}{CONTAINER_FRAME}",
        style.background_css(),
        style.color_css()
    )
}

fn item_style(item: &DisplayItem) -> String {
    if item.is_emphasized() {
        format!("{ITEM_PADDING}{EMPHASIS}")
    } else {
        ITEM_PADDING.to_string()
    }
}

/// Badge markup, for embedding in a larger maud template.
///
/// Each entry sits on its own line so the copied source stays readable.
pub fn badge(items: &[DisplayItem], style: &StyleChoice) -> Markup {
    html! {
        div style=(container_style(style)) {
            @for item in items {
                "\n"
                div style=(item_style(item)) { (item.label) }
            }
            @if !items.is_empty() {
                "\n"
            }
        }
    }
}

/// Badge as a copyable HTML string.
pub fn render_snippet(items: &[DisplayItem], style: &StyleChoice) -> String {
    badge(items, style).into_string()
}
