//! Subtree retention filter.
//!
//! Given a parsed chat page and the message container selector, this module
//! computes the retain set (the container, its descendant elements, and its
//! ancestor chain up to the document root) and removes every element of the
//! sweep tag type not in that set. A dedicated pass removes welcome-message
//! nodes beforehand, unconditionally.
//!
//! Port of the injected `cleanUpDivs` overlay script.

use std::collections::HashSet;

use dom_query::{Document, NodeId, Selection};

use crate::dom;
use crate::error::{Error, Result};
use crate::result::SweepStats;

/// Remove every element of the sweep tag type outside the target's subtree.
///
/// The pass runs in three stages:
///
/// 1. Locate the target via `target_selector`. If absent, return
///    [`Error::TargetNotFound`] without mutating the tree.
/// 2. Remove welcome-message nodes (see [`remove_welcome_messages`]). This
///    stage does not consult the retain set.
/// 3. Sweep: remove every remaining element of `sweep_tag` whose node id is
///    not in the retain set.
///
/// The retain set and the sweep candidates are snapshotted before any
/// removal, so removal order cannot evict the target's own ancestor chain.
/// Candidates are removed in reverse document order, which detaches
/// descendants before their ancestors.
///
/// After the pass, every surviving element of the sweep tag type is the
/// target, a descendant of the target, or an ancestor of the target.
pub fn retain_subtree(
    doc: &Document,
    target_selector: &str,
    welcome_selector: &str,
    sweep_tag: &str,
) -> Result<SweepStats> {
    let target = doc.select_single(target_selector);
    if !target.exists() {
        return Err(Error::TargetNotFound {
            selector: target_selector.to_string(),
        });
    }

    let retained = collect_retain_set(&target);

    let welcome_removed = remove_welcome_messages(doc, welcome_selector, sweep_tag);

    // Snapshot before removal so the walk is not interleaved with mutation.
    let candidates = doc.select(sweep_tag).nodes().to_vec();
    let mut removed = 0;
    for node in candidates.into_iter().rev() {
        if retained.contains(&node.id) {
            continue;
        }
        Selection::from(node).remove();
        removed += 1;
    }

    tracing::debug!(removed, welcome_removed, "retention sweep complete");

    Ok(SweepStats {
        removed,
        welcome_removed,
    })
}

/// Build the set of node ids exempt from the sweep.
///
/// Contains the target itself, every descendant element of the target, and
/// every ancestor up to and including the document root. Built fresh on
/// every pass and discarded afterwards.
fn collect_retain_set(target: &Selection) -> HashSet<NodeId> {
    let mut retained = HashSet::new();

    for node in target.nodes() {
        retained.insert(node.id);
    }

    for node in target.select("*").nodes() {
        retained.insert(node.id);
    }

    // Ancestor chain; terminates immediately when the target is the root.
    let mut ancestor = target.parent();
    while ancestor.exists() {
        for node in ancestor.nodes() {
            retained.insert(node.id);
        }
        ancestor = ancestor.parent();
    }

    retained
}

/// Remove welcome-message nodes along with their structural parent and one
/// following sibling.
///
/// For each element matching `welcome_selector`: the element is removed, its
/// nearest enclosing element of the sweep tag type is removed, and the
/// element immediately following that parent is removed iff it is itself of
/// the sweep tag type. A node already detached by an earlier removal is
/// skipped silently.
///
/// Returns the number of welcome-message nodes removed.
pub fn remove_welcome_messages(doc: &Document, welcome_selector: &str, sweep_tag: &str) -> usize {
    let mut removed = 0;

    // Re-select after every removal: a welcome node detached alongside an
    // earlier one no longer appears in the results.
    loop {
        let matches = doc.select(welcome_selector);
        let Some(node) = matches.nodes().first().copied() else {
            break;
        };
        let welcome = Selection::from(node);

        let parent = dom::nearest_ancestor(&welcome, sweep_tag);
        // Capture the sibling before the parent is detached.
        let sibling = parent.as_ref().and_then(dom::next_element_sibling);

        dom::remove(&welcome);
        removed += 1;

        if let Some(parent) = parent {
            dom::remove(&parent);
        }

        if let Some(sibling) = sibling {
            if dom::tag_name(&sibling).as_deref() == Some(sweep_tag) {
                dom::remove(&sibling);
            }
        }
    }

    removed
}
