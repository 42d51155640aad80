//! Result types returned by the cleanup pipeline.

/// Counts of nodes removed by one retention filter pass.
///
/// The document is mutated in place; these counts exist for observability
/// and testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Elements of the sweep tag type removed by the general sweep.
    pub removed: usize,

    /// Welcome-message nodes removed by the dedicated pass (the structural
    /// parent and sibling removed alongside each one are not counted here).
    pub welcome_removed: usize,
}

/// Result of a full cleanup run.
#[derive(Debug, Clone)]
pub struct CleanResult {
    /// The cleaned and styled document, serialized back to HTML.
    pub html: String,

    /// Node removal counts from the retention filter pass.
    pub stats: SweepStats,

    /// Non-fatal conditions encountered during the run, e.g. a missing
    /// target container or a missing `<section>` element.
    pub warnings: Vec<String>,
}
