//! # chat-overlay
//!
//! DOM cleanup and styling for chat overlay pages.
//!
//! This library is a port of a set of browser-injected overlay scripts for a
//! chat popout. It strips every page element unrelated to the chat message
//! container, removes welcome-message banners, and injects the overlay
//! styles (forced text color and, optionally, a transparent background).
//! A separate cancellable cycler drives periodic color replacement.
//!
//! ## Quick Start
//!
//! ```rust
//! use chat_overlay::clean;
//!
//! let html = r#"<html><head></head><body>
//! <div class="chat-scrollable-area__message-container"
//!      data-test-selector="chat-scrollable-area__message-container"
//!      role="log"><div>hello chat</div></div>
//! <div id="noise">unrelated sidebar</div>
//! </body></html>"#;
//!
//! let result = clean(html)?;
//! assert!(!result.html.contains("unrelated sidebar"));
//! assert_eq!(result.stats.removed, 1);
//! # Ok::<(), chat_overlay::Error>(())
//! ```
//!
//! ## Behavior
//!
//! - **Subtree retention**: only the message container, its descendants, and
//!   its ancestor chain survive the sweep over container elements.
//! - **Non-fatal absence**: a page without the message container is left
//!   untouched apart from style injection; the condition is logged and
//!   reported in [`CleanResult::warnings`].
//! - **Styling**: the text color rule is always injected; background
//!   transparency is a toggle ([`Options::transparent_background`]).

mod error;
mod options;
mod result;

/// DOM operations adapter providing browser-style operations.
pub mod dom;

/// Compiled patterns and CSS selectors for overlay cleanup.
pub mod patterns;

/// Subtree retention filter (the cleanup pass).
pub mod retain;

/// Overlay style injection and color replacement.
pub mod style;

/// Random hex color generation.
pub mod color;

/// Cancellable color cycler.
pub mod cycler;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use result::{CleanResult, SweepStats};

/// Clean a chat page using default options.
///
/// Parses the HTML, runs the retention filter against the stock chat popout
/// selectors, injects the overlay styles, and serializes the result.
///
/// A missing message container is non-fatal: the cleanup pass is skipped,
/// a warning is recorded, and style injection still happens.
pub fn clean(html: &str) -> Result<CleanResult> {
    clean_with_options(html, &Options::default())
}

/// Clean a chat page with custom options.
///
/// # Example
///
/// ```rust
/// use chat_overlay::{clean_with_options, Options};
///
/// let html = "<html><head></head><body><section>chat</section></body></html>";
/// let options = Options {
///     transparent_background: false,
///     ..Options::default()
/// };
/// let result = clean_with_options(html, &options)?;
/// // No container on this page: cleanup skipped, warning recorded.
/// assert!(!result.warnings.is_empty());
/// # Ok::<(), chat_overlay::Error>(())
/// ```
pub fn clean_with_options(html: &str, options: &Options) -> Result<CleanResult> {
    let doc = dom::parse(html);
    let mut warnings = Vec::new();

    let stats = match retain::retain_subtree(
        &doc,
        &options.container_selector,
        &options.welcome_selector,
        &options.sweep_tag,
    ) {
        Ok(stats) => stats,
        Err(Error::TargetNotFound { selector }) => {
            tracing::warn!(selector = %selector, "target container not found; skipping cleanup");
            warnings.push(format!("target container not found: {selector}"));
            SweepStats::default()
        }
        Err(e) => return Err(e),
    };

    warnings.extend(style::inject_overlay_styles(&doc, options));

    Ok(CleanResult {
        html: doc.html().to_string(),
        stats,
        warnings,
    })
}
