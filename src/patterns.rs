//! Compiled regex patterns and CSS selectors for overlay cleanup.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// CSS Selectors
// =============================================================================

/// Selector for the chat message container whose subtree is preserved.
///
/// Browser equivalent:
/// `document.querySelector('div.chat-scrollable-area__message-container[...][role="log"]')`
pub const MESSAGE_CONTAINER_SELECTOR: &str = r#"div.chat-scrollable-area__message-container[data-test-selector="chat-scrollable-area__message-container"][role="log"]"#;

/// Selector for chat welcome-message nodes, removed unconditionally.
pub const WELCOME_MESSAGE_SELECTOR: &str = r#"div[data-a-target="chat-welcome-message"]"#;

/// Tag swept by the retention filter: every instance not in the retain set
/// is removed.
pub const DEFAULT_SWEEP_TAG: &str = "div";

/// Element id of the injected text color `<style>` element.
pub const TEXT_COLOR_STYLE_ID: &str = "chat-text-color";

/// Class added to the first `<section>` when background transparency is on.
pub const TRANSPARENT_SECTION_CLASS: &str = "transparent-section";

// =============================================================================
// Style Rules
// =============================================================================

/// CSS forcing a transparent background on every element.
pub const TRANSPARENT_BACKGROUND_CSS: &str = "* { background: transparent !important; }";

// =============================================================================
// Validation Patterns
// =============================================================================

/// Matches a well-formed 6-digit hex color string (lowercase).
pub static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-f]{6}$").expect("HEX_COLOR regex"));
