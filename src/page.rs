//! Static rendering of the formatter page.
//!
//! The page is the layout wrapper (centred column plus footer links) around
//! the formatter's three steps:
//!
//! 1. **Upload**: the drop zone, showing the loaded file or a format hint.
//! 2. **Choose data**: the field checklist in fixed display order, plus the
//!    three colour pickers.
//! 3. **Copy HTML**: a live preview of the badge and its source. Only shown
//!    once metadata has been loaded.
//!
//! The missing-data flag is deliberately not rendered here; callers surface
//! it through their own channel (the CLI logs and reports it).
//!
//! Uses [maud](https://maud.lambda.xyz/) like the snippet itself, so the
//! preview is the exact markup the user copies.

use crate::config::LayoutConfig;
use crate::decode::FileSummary;
use crate::fields::FieldSelection;
use crate::format::DisplayItem;
use crate::snippet;
use crate::style::StyleChoice;
use maud::{DOCTYPE, Markup, html};

const CSS: &str = include_str!("../static/page.css");

/// Formats the drop zone advertises.
const ACCEPTED_FORMATS: &str = "PNG, JPG, TIFF, HEIF";

/// Everything the page needs, borrowed from the controller.
pub struct PageView<'a> {
    pub file: Option<&'a FileSummary>,
    pub selection: &'a FieldSelection,
    pub style: &'a StyleChoice,
    /// `None` until a record has been decoded.
    pub items: Option<Vec<DisplayItem>>,
    pub layout: &'a LayoutConfig,
}

pub fn render_page(view: &PageView<'_>) -> Markup {
    base_document(
        "EXIF Badge",
        layout(
            view.layout,
            html! {
                (upload_step(view.file))
                (fields_step(view.selection))
                (colors_step(view.style))
                (output_step(view.items.as_deref(), view.style))
            },
        ),
    )
}

// ============================================================================
// Layout
// ============================================================================

fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (CSS) }
            }
            body {
                (content)
            }
        }
    }
}

fn layout(config: &LayoutConfig, content: Markup) -> Markup {
    html! {
        div.layout {
            div.layout-column {
                (content)
            }
        }
        @if !config.credit_name.is_empty() {
            div.credit {
                "Made by "
                @if config.credit_url.is_empty() {
                    (config.credit_name)
                } @else {
                    a href=(config.credit_url) { (config.credit_name) }
                }
            }
        }
        @if !config.repository_url.is_empty() {
            a.repo-link href=(config.repository_url) { "Source on GitHub" }
        }
    }
}

// ============================================================================
// Steps
// ============================================================================

fn upload_step(file: Option<&FileSummary>) -> Markup {
    html! {
        section {
            h2.step-title { "Step 1: Upload an Image" }
            @match file {
                Some(file) => {
                    div.drop-zone.loaded {
                        span.file-name { (file.name) }
                        @if let Some(format) = &file.format {
                            " · " (format)
                        }
                        @if let Some((w, h)) = file.dimensions {
                            " · " (w) "×" (h)
                        }
                    }
                }
                None => {
                    div.drop-zone {
                        "Upload a file or drag and drop"
                    }
                }
            }
            p.hint { (ACCEPTED_FORMATS) }
        }
    }
}

fn fields_step(selection: &FieldSelection) -> Markup {
    html! {
        section {
            h2.step-title { "Step 2: Choose Data to Include" }
            fieldset.field-list {
                @for (field, checked) in selection.entries() {
                    @let id = format!("field-{}", field.key());
                    div.field-row {
                        label for=(id) { (field.name()) }
                        input id=(id) name=(id) type="checkbox" checked[checked] disabled;
                    }
                }
            }
        }
    }
}

fn colors_step(style: &StyleChoice) -> Markup {
    html! {
        section {
            h2.step-title { "Colors" }
            div.color-row {
                (color_input("color-from", "Gradient start", style.gradient_from.as_str()))
                (color_input("color-to", "Gradient end", style.gradient_to.as_str()))
                (color_input("color-text", "Text", style.text.as_str()))
            }
        }
    }
}

fn color_input(id: &str, label: &str, value: &str) -> Markup {
    html! {
        label for=(id) {
            input id=(id) type="color" value=(value) disabled;
            span { (label) } " " code { (value) }
        }
    }
}

fn output_step(items: Option<&[DisplayItem]>, style: &StyleChoice) -> Markup {
    html! {
        section {
            h2.step-title { "Step 3: Copy HTML" }
            @if let Some(items) = items {
                h3.subtitle { "Preview" }
                div.preview {
                    (snippet::badge(items, style))
                }
                h3.subtitle { "Code" }
                pre.code {
                    code { (snippet::render_snippet(items, style)) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldId;
    use crate::format::display_items;
    use crate::test_helpers::sample_record;

    fn summary() -> FileSummary {
        FileSummary {
            name: "DSCF0001.JPG".to_string(),
            format: Some("JPEG".to_string()),
            dimensions: Some((6240, 4160)),
        }
    }

    fn render(
        file: Option<&FileSummary>,
        selection: &FieldSelection,
        style: &StyleChoice,
        with_record: bool,
    ) -> String {
        let layout = LayoutConfig::default();
        let items = with_record.then(|| display_items(&sample_record(), selection));
        render_page(&PageView {
            file,
            selection,
            style,
            items,
            layout: &layout,
        })
        .into_string()
    }

    #[test]
    fn page_includes_doctype_and_css() {
        let html = render(None, &FieldSelection::default(), &StyleChoice::default(), false);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(".drop-zone"));
    }

    #[test]
    fn empty_page_shows_hint_and_no_output() {
        let html = render(None, &FieldSelection::default(), &StyleChoice::default(), false);
        assert!(html.contains("drag and drop"));
        assert!(html.contains("PNG, JPG, TIFF, HEIF"));
        assert!(html.contains("Step 3: Copy HTML"));
        assert!(!html.contains("Preview"));
    }

    #[test]
    fn drop_zone_summarizes_loaded_file() {
        let file = summary();
        let html = render(
            Some(&file),
            &FieldSelection::default(),
            &StyleChoice::default(),
            true,
        );
        assert!(html.contains("DSCF0001.JPG"));
        assert!(html.contains("6240×4160"));
        assert!(html.contains("drop-zone loaded"));
    }

    #[test]
    fn checklist_lists_every_field_in_order() {
        let html = render(None, &FieldSelection::default(), &StyleChoice::default(), false);
        let positions: Vec<usize> = FieldId::ALL
            .iter()
            .map(|f| html.find(&format!("id=\"field-{}\"", f.key())).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn checklist_reflects_selection() {
        let mut selection = FieldSelection::default();
        selection.toggle(FieldId::Iso);
        let html = render(None, &selection, &StyleChoice::default(), false);
        // 5 defaults on, ISO turned off
        assert_eq!(html.matches(" checked").count(), 4);
        assert!(html.contains(r#"id="field-iso" name="field-iso" type="checkbox" disabled"#));
    }

    #[test]
    fn preview_and_code_match_snippet() {
        let selection = FieldSelection::default();
        let style = StyleChoice::default();
        let html = render(Some(&summary()), &selection, &style, true);

        let items = display_items(&sample_record(), &selection);
        let raw = snippet::render_snippet(&items, &style);
        // Preview embeds the markup itself
        assert!(html.contains(&raw));
        // Code block shows it escaped
        assert!(html.contains("&lt;div style="));
    }

    #[test]
    fn color_inputs_show_current_values() {
        let style = StyleChoice {
            gradient_from: "#abcdef".parse().unwrap(),
            ..StyleChoice::default()
        };
        let html = render(None, &FieldSelection::default(), &style, false);
        assert!(html.contains(r##"value="#abcdef""##));
        assert!(html.contains(r##"value="#334155""##));
    }

    #[test]
    fn footer_links_follow_layout_config() {
        let layout = LayoutConfig {
            credit_name: "Jo".to_string(),
            credit_url: String::new(),
            repository_url: String::new(),
        };
        let html = render_page(&PageView {
            file: None,
            selection: &FieldSelection::default(),
            style: &StyleChoice::default(),
            items: None,
            layout: &layout,
        })
        .into_string();
        assert!(html.contains("Made by Jo"));
        assert!(!html.contains(r#"href="https://cohost.org/tas""#));
        assert!(!html.contains(r#"class="repo-link""#));
        assert!(!html.contains("Source on GitHub"));
    }

    #[test]
    fn footer_links_default_to_credit_and_repository() {
        let html = render(None, &FieldSelection::default(), &StyleChoice::default(), false);
        assert!(html.contains(r#"href="https://cohost.org/tas""#));
        assert!(html.contains(
            r#"<a class="repo-link" href="https://github.com/tascodes/cohost-formatters">"#
        ));
    }
}
