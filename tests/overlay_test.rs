use std::sync::mpsc;
use std::time::Duration;

use chat_overlay::color::{is_hex_color, random_hex_color};
use chat_overlay::cycler::ColorCycler;
use chat_overlay::{clean, clean_with_options, dom, style, Options};

const CONTAINER_ATTRS: &str = r#"class="chat-scrollable-area__message-container" data-test-selector="chat-scrollable-area__message-container" role="log""#;

fn chat_page() -> String {
    format!(
        r#"<html><head></head><body><section><div {CONTAINER_ATTRS}><div>msg</div></div></section></body></html>"#
    )
}

#[test]
fn clean_injects_overlay_styles() {
    let result = clean(&chat_page()).unwrap();
    let doc = dom::parse(&result.html);

    let color_style = doc.select("style#chat-text-color");
    assert!(color_style.exists());
    assert!(color_style.text().contains("color: yellow !important"));

    assert!(result.html.contains("background: transparent !important"));
    assert!(doc.select("section.transparent-section").exists());
}

#[test]
fn clean_without_transparency_injects_only_the_color_style() {
    let options = Options {
        transparent_background: false,
        ..Options::default()
    };

    let result = clean_with_options(&chat_page(), &options).unwrap();
    let doc = dom::parse(&result.html);

    assert_eq!(doc.select("style").length(), 1);
    assert!(doc.select("style#chat-text-color").exists());
    assert!(!doc.select("section.transparent-section").exists());
}

#[test]
fn clean_warns_when_no_section_exists_for_the_transparency_class() {
    let html = format!(
        r#"<html><head></head><body><div {CONTAINER_ATTRS}><div>msg</div></div></body></html>"#
    );

    let result = clean(&html).unwrap();

    assert!(result.warnings.iter().any(|w| w.contains("section")));
    // Styles are injected regardless
    assert!(result.html.contains("chat-text-color"));
    assert!(result.html.contains("background: transparent !important"));
}

#[test]
fn cycled_colors_apply_to_the_injected_style() {
    let options = Options {
        color_interval: Duration::from_millis(1),
        ..Options::default()
    };
    let result = clean_with_options(&chat_page(), &options).unwrap();
    let doc = dom::parse(&result.html);

    // The document is not Send, so the cycler feeds colors through a
    // channel and the owning thread applies them.
    let (tx, rx) = mpsc::channel();
    let cycler = ColorCycler::spawn(
        options.color_interval,
        || random_hex_color(&mut rand::rng()),
        move |color| {
            let _ = tx.send(color.to_string());
        },
    );

    let mut last = String::new();
    for color in rx.iter().take(3) {
        assert!(is_hex_color(&color), "cycler produced {color}");
        style::replace_text_color(&doc, &color).unwrap();
        last = color;
    }
    cycler.stop();

    let css = doc.select("style#chat-text-color").text();
    assert!(css.contains(&last));
    assert!(!css.contains("yellow"));
}
