//! Reveal watcher - viewport intersection observation.
//!
//! Watches a registered set of sections and reports, on each observation
//! pass, which of them are sufficiently visible inside the viewport. The
//! visibility test shrinks the viewport bottom by a configured margin before
//! computing the visible fraction, so a section has to travel meaningfully
//! into view, not merely cross the raw bottom edge, to count as entered.
//!
//! Entered sections are delivered straight to the reveal store. The watcher
//! keeps no memory of prior deliveries; the store's idempotent insert makes
//! entrance one-shot per id. Disposal consumes the watcher, so a late
//! observation after teardown is unrepresentable rather than checked for.

use std::rc::Rc;

use crate::config::RevealOptions;
use crate::state::reveal;
use crate::types::{Rect, SectionId, Viewport};

// =============================================================================
// Registration
// =============================================================================

/// Supplies a section's current page-space bounds, or `None` when the
/// section is absent from the layout.
pub type BoundsProvider = Rc<dyn Fn() -> Option<Rect>>;

/// One (id, bounds) pair handed to the watcher at mount. This list is the
/// only structural contract between page content and the reveal core.
pub struct SectionRegistration {
    pub id: SectionId,
    pub bounds: BoundsProvider,
}

impl SectionRegistration {
    /// Register a section with a bounds provider.
    pub fn new(id: SectionId, bounds: BoundsProvider) -> Self {
        Self { id, bounds }
    }

    /// Register a section at a fixed rectangle.
    pub fn fixed(id: SectionId, rect: Rect) -> Self {
        Self {
            id,
            bounds: Rc::new(move || Some(rect)),
        }
    }
}

// =============================================================================
// Visibility math
// =============================================================================

/// Fraction of `rect` visible inside `viewport` after shrinking the
/// viewport bottom by `bottom_margin` rows. Returns 0.0 for empty rects and
/// for viewports the margin swallows entirely.
pub fn visible_fraction(rect: Rect, viewport: Viewport, bottom_margin: u16) -> f32 {
    if rect.height == 0 {
        return 0.0;
    }

    let top = viewport.top as u32;
    let bottom = viewport.bottom().saturating_sub(bottom_margin as u32);
    if bottom <= top {
        return 0.0;
    }

    let overlap_top = top.max(rect.y as u32);
    let overlap_bottom = bottom.min(rect.bottom());
    if overlap_bottom <= overlap_top {
        return 0.0;
    }

    (overlap_bottom - overlap_top) as f32 / rect.height as f32
}

// =============================================================================
// Watcher
// =============================================================================

/// Observes registered sections against the viewport and feeds the reveal
/// store.
pub struct RevealWatcher {
    options: RevealOptions,
    registrations: Vec<SectionRegistration>,
}

impl RevealWatcher {
    /// Create a watcher with the given intersection parameters.
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            registrations: Vec::new(),
        }
    }

    /// Begin observing the given sections. May be called again to observe
    /// more; ids are not deduplicated (the reveal store absorbs that).
    pub fn register(&mut self, registrations: Vec<SectionRegistration>) {
        self.registrations.extend(registrations);
    }

    /// Number of registered sections.
    pub fn registered_count(&self) -> usize {
        self.registrations.len()
    }

    /// Run one observation pass against the viewport.
    ///
    /// Every registered section whose visible fraction exceeds the threshold
    /// is delivered to the reveal store. A section whose bounds provider
    /// returns `None` is skipped silently for this pass. Returns the ids
    /// that were newly revealed.
    pub fn observe(&self, viewport: Viewport) -> Vec<SectionId> {
        let mut entered = Vec::new();

        for registration in &self.registrations {
            let Some(rect) = (registration.bounds)() else {
                continue;
            };

            let fraction =
                visible_fraction(rect, viewport, self.options.bottom_margin);
            if fraction > self.options.threshold && reveal::reveal(&registration.id)
            {
                entered.push(registration.id.clone());
            }
        }

        entered
    }

    /// Release all observation. Consumes the watcher: once this returns no
    /// further observation pass can run, so no event can be delivered after
    /// teardown.
    pub fn dispose(self) {
        drop(self.registrations);
    }
}

// =============================================================================
// Tests
// =============================================================================
