//! Reveal store - the append-only set of entered sections.
//!
//! The single source of truth for "has this section been shown its entrance
//! animation". Membership only grows: once a section is revealed it stays
//! revealed for the rest of the mount, no matter how often it scrolls out of
//! and back into view.
//!
//! This is the sole consumer of the watcher's entered events. The watcher
//! does not track what it has already delivered; the idempotent insert here
//! is what makes entrance reporting observably one-shot per id.
//!
//! # API
//!
//! - `reveal(id)` - Idempotent insert; returns whether the id was new
//! - `has(id)` - Current membership
//! - `revealed_count()` - Number of revealed sections
//! - `reset_reveal_state()` - Clear everything (new mount / tests)

use std::cell::RefCell;

use spark_signals::ReactiveSet;

use crate::types::SectionId;

thread_local! {
    /// Revealed section ids. A ReactiveSet so render effects that query
    /// membership re-run when a section enters.
    static REVEALED: RefCell<ReactiveSet<SectionId>> = RefCell::new(ReactiveSet::new());
}

/// Mark a section as revealed.
///
/// Inserting an already-present id is a no-op, not an error: the watcher
/// may deliver the same entrance more than once across observation passes.
/// Returns `true` if the id was newly inserted.
pub fn reveal(id: &SectionId) -> bool {
    REVEALED.with(|set| {
        if set.borrow().contains(id) {
            false
        } else {
            set.borrow_mut().insert(id.clone());
            true
        }
    })
}

/// Whether a section has been revealed.
///
/// Creates a reactive dependency when called from an effect or derived.
pub fn has(id: &SectionId) -> bool {
    REVEALED.with(|set| set.borrow().contains(id))
}

/// Number of sections revealed so far.
pub fn revealed_count() -> usize {
    REVEALED.with(|set| set.borrow().len())
}

/// Clear the revealed set. Called at mount so each page generation starts
/// from nothing, and from test setup.
pub fn reset_reveal_state() {
    REVEALED.with(|set| set.borrow_mut().clear());
}

// =============================================================================
// Tests
// =============================================================================
