//! Configuration options for overlay cleanup.
//!
//! The `Options` struct controls which nodes are targeted, which tag type is
//! swept, and how the overlay styles are injected.

use std::time::Duration;

use crate::patterns;

/// Configuration options for overlay cleanup.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings matching the stock chat popout layout.
///
/// # Example
///
/// ```rust
/// use chat_overlay::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     transparent_background: false,
///     initial_color: "#ab034d".to_string(),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Selector for the message container whose subtree is preserved.
    ///
    /// Default: the stock chat popout message container.
    pub container_selector: String,

    /// Selector for welcome-message nodes removed unconditionally.
    pub welcome_selector: String,

    /// Tag type swept by the retention filter.
    ///
    /// Default: `"div"`
    pub sweep_tag: String,

    /// Force a transparent background and mark the first `<section>` with
    /// the transparency class.
    ///
    /// The two original overlay variants differed only in this behavior;
    /// it is exposed as a toggle rather than merged silently.
    ///
    /// Default: `true`
    pub transparent_background: bool,

    /// Color used by the injected text color rule before any cycling.
    ///
    /// Default: `"yellow"`
    pub initial_color: String,

    /// Interval between color replacements when driving a cycler.
    ///
    /// Default: `500ms`
    pub color_interval: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            container_selector: patterns::MESSAGE_CONTAINER_SELECTOR.to_string(),
            welcome_selector: patterns::WELCOME_MESSAGE_SELECTOR.to_string(),
            sweep_tag: patterns::DEFAULT_SWEEP_TAG.to_string(),
            transparent_background: true,
            initial_color: "yellow".to_string(),
            color_interval: Duration::from_millis(500),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert_eq!(opts.container_selector, patterns::MESSAGE_CONTAINER_SELECTOR);
        assert_eq!(opts.welcome_selector, patterns::WELCOME_MESSAGE_SELECTOR);
        assert_eq!(opts.sweep_tag, "div");
        assert!(opts.transparent_background);
        assert_eq!(opts.initial_color, "yellow");
        assert_eq!(opts.color_interval, Duration::from_millis(500));
    }

    #[test]
    fn test_options_can_be_customized() {
        let opts = Options {
            sweep_tag: "section".to_string(),
            transparent_background: false,
            color_interval: Duration::from_millis(100),
            ..Options::default()
        };

        assert_eq!(opts.sweep_tag, "section");
        assert!(!opts.transparent_background);
        assert_eq!(opts.color_interval, Duration::from_millis(100));
    }
}
