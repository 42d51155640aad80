//! Overlay style injection.
//!
//! Injects the text color rule and, optionally, the background transparency
//! rule into the document head, and rewrites the color rule on demand.
//!
//! Port of the injected `makeSectionTransparent` overlay scripts.

use dom_query::Document;

use crate::dom;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::patterns::{
    TEXT_COLOR_STYLE_ID, TRANSPARENT_BACKGROUND_CSS, TRANSPARENT_SECTION_CLASS,
};

/// Build the text color rule for elements without an inline color.
fn text_color_rule(color: &str) -> String {
    format!(r#"*:not([style*="color"]) {{ color: {color} !important; }}"#)
}

/// Inject the overlay styles into the document head.
///
/// Always prepends a `<style id="chat-text-color">` element holding the text
/// color rule. When `transparent_background` is enabled, also appends a
/// background transparency rule and adds the transparency class to the first
/// `<section>` element.
///
/// A missing `<section>` only skips the class add; the style injection
/// itself still happens. Returns warnings for such non-fatal conditions.
pub fn inject_overlay_styles(doc: &Document, opts: &Options) -> Vec<String> {
    let mut warnings = Vec::new();

    let head = doc.select_single("head");
    dom::prepend_html(
        &head,
        &format!(
            r#"<style id="{TEXT_COLOR_STYLE_ID}">{}</style>"#,
            text_color_rule(&opts.initial_color)
        ),
    );

    if opts.transparent_background {
        dom::append_html(
            &head,
            &format!("<style>{TRANSPARENT_BACKGROUND_CSS}</style>"),
        );

        let section = doc.select_single("section");
        if section.exists() {
            dom::add_class(&section, TRANSPARENT_SECTION_CLASS);
        } else {
            tracing::warn!("no <section> element found; skipping transparency class");
            warnings.push("no <section> element found for transparency class".to_string());
        }
    }

    warnings
}

/// Replace the color in the injected text color rule.
///
/// Returns [`Error::StyleNotInjected`] if the style element is absent.
pub fn replace_text_color(doc: &Document, color: &str) -> Result<()> {
    let style = doc.select_single(&format!("style#{TEXT_COLOR_STYLE_ID}"));
    if !style.exists() {
        return Err(Error::StyleNotInjected);
    }
    dom::set_inner_html(&style, &text_color_rule(color));
    Ok(())
}
