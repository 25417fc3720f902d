//! Pointer tracker - cursor coordinates and the hover variant.
//!
//! Updates `{x, y}` on every pointer-move notification (per-event, no
//! throttling). Interactive regions (the contact links and project cards)
//! register bounds plus optional enter/leave hooks; hover dispatch compares
//! the region under the pointer with the previously hovered one and fires
//! the hooks exactly on transitions, flipping the variant between `Default`
//! and `Hover`. The overlay's rendered position and scale are a pure
//! function of this state; there is no further machinery behind it.
//!
//! # Example
//!
//! ```ignore
//! use vitrine::state::{PointerTracker, HoverHooks};
//!
//! let pointer = PointerTracker::new();
//! let cleanup = pointer.on_region(
//!     Rc::new(move || Some(card_rect)),
//!     HoverHooks::default(),
//! );
//!
//! pointer.dispatch_move(12, 3);
//! pointer.update_hover(12, 3 + scroll_offset);
//!
//! cleanup(); // Deregister when the card goes away
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{Signal, signal};

use super::watcher::BoundsProvider;

// =============================================================================
// Types
// =============================================================================

/// The overlay's interaction variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorVariant {
    /// Pointer over inert content.
    #[default]
    Default,
    /// Pointer over an interactive region.
    Hover,
}

/// Optional callbacks fired on hover transitions.
#[derive(Default)]
pub struct HoverHooks {
    pub on_enter: Option<Rc<dyn Fn()>>,
    pub on_leave: Option<Rc<dyn Fn()>>,
}

struct HoverRegion {
    id: usize,
    bounds: BoundsProvider,
    hooks: HoverHooks,
}

#[derive(Default)]
struct HoverRegistry {
    regions: Vec<HoverRegion>,
    next_id: usize,
}

impl HoverRegistry {
    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

// =============================================================================
// Tracker
// =============================================================================

/// Tracks pointer coordinates and the binary hover variant.
pub struct PointerTracker {
    x: Signal<u16>,
    y: Signal<u16>,
    variant: Signal<CursorVariant>,
    hovered: Signal<Option<usize>>,
    registry: Rc<RefCell<HoverRegistry>>,
}

impl PointerTracker {
    /// Create a tracker at the origin with the default variant.
    pub fn new() -> Self {
        Self {
            x: signal(0),
            y: signal(0),
            variant: signal(CursorVariant::Default),
            hovered: signal(None),
            registry: Rc::new(RefCell::new(HoverRegistry::default())),
        }
    }

    // =========================================================================
    // State access
    // =========================================================================

    /// Current pointer position (screen space).
    pub fn position(&self) -> (u16, u16) {
        (self.x.get(), self.y.get())
    }

    /// Current interaction variant.
    pub fn variant(&self) -> CursorVariant {
        self.variant.get()
    }

    /// Clone of the x signal, for render effects.
    pub fn x_signal(&self) -> Signal<u16> {
        self.x.clone()
    }

    /// Clone of the y signal, for render effects.
    pub fn y_signal(&self) -> Signal<u16> {
        self.y.clone()
    }

    /// Clone of the variant signal, for render effects.
    pub fn variant_signal(&self) -> Signal<CursorVariant> {
        self.variant.clone()
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Process one pointer-move notification. Every event updates the
    /// coordinates; nothing is coalesced.
    pub fn dispatch_move(&self, x: u16, y: u16) {
        self.x.set(x);
        self.y.set(y);
    }

    /// Switch the interaction variant explicitly.
    pub fn set_variant(&self, variant: CursorVariant) {
        self.variant.set(variant);
    }

    /// Hit-test the registered regions at a page-space point and fire
    /// enter/leave on transitions.
    ///
    /// Leaving fires before entering, as a pointer crossing directly from
    /// one region into another is a leave of the first and an enter of the
    /// second.
    pub fn update_hover(&self, x: u16, page_y: u16) {
        let hit = self.registry.borrow().regions.iter().find_map(|region| {
            let rect = (region.bounds)()?;
            rect.contains(x, page_y).then_some(region.id)
        });

        let previous = self.hovered.get();
        if hit == previous {
            return;
        }

        if let Some(prev_id) = previous {
            self.fire(prev_id, |hooks| hooks.on_leave.clone());
        }
        if let Some(new_id) = hit {
            self.fire(new_id, |hooks| hooks.on_enter.clone());
        }

        self.hovered.set(hit);
        self.set_variant(if hit.is_some() {
            CursorVariant::Hover
        } else {
            CursorVariant::Default
        });
    }

    fn fire(
        &self,
        id: usize,
        pick: impl Fn(&HoverHooks) -> Option<Rc<dyn Fn()>>,
    ) {
        // Clone the hook out before calling so a hook that re-registers a
        // region does not hit an outstanding borrow.
        let hook = self
            .registry
            .borrow()
            .regions
            .iter()
            .find(|region| region.id == id)
            .and_then(|region| pick(&region.hooks));
        if let Some(hook) = hook {
            hook();
        }
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Register an interactive region. Returns a cleanup function that
    /// deregisters it; if the region is hovered at cleanup time the variant
    /// drops back to `Default`.
    pub fn on_region(
        &self,
        bounds: BoundsProvider,
        hooks: HoverHooks,
    ) -> impl FnOnce() + use<> {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id();
            registry.regions.push(HoverRegion { id, bounds, hooks });
            id
        };

        let registry = self.registry.clone();
        let hovered = self.hovered.clone();
        let variant = self.variant.clone();
        move || {
            registry
                .borrow_mut()
                .regions
                .retain(|region| region.id != id);
            if hovered.get() == Some(id) {
                hovered.set(None);
                variant.set(CursorVariant::Default);
            }
        }
    }

    /// Clear all regions and state (new mount / tests).
    pub fn reset(&self) {
        let mut registry = self.registry.borrow_mut();
        registry.regions.clear();
        registry.next_id = 0;
        drop(registry);

        self.x.set(0);
        self.y.set(0);
        self.hovered.set(None);
        self.variant.set(CursorVariant::Default);
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;
    use std::cell::Cell;

    fn fixed(rect: Rect) -> BoundsProvider {
        Rc::new(move || Some(rect))
    }

    #[test]
    fn test_dispatch_move_updates_position() {
        let pointer = PointerTracker::new();

        pointer.dispatch_move(10, 20);
        assert_eq!(pointer.position(), (10, 20));

        pointer.dispatch_move(11, 20);
        assert_eq!(pointer.position(), (11, 20));
    }

    #[test]
    fn test_set_variant_is_explicit() {
        let pointer = PointerTracker::new();
        assert_eq!(pointer.variant(), CursorVariant::Default);

        pointer.set_variant(CursorVariant::Hover);
        assert_eq!(pointer.variant(), CursorVariant::Hover);

        pointer.set_variant(CursorVariant::Default);
        assert_eq!(pointer.variant(), CursorVariant::Default);
    }

    #[test]
    fn test_hover_transitions() {
        let pointer = PointerTracker::new();
        let enters = Rc::new(Cell::new(0));
        let leaves = Rc::new(Cell::new(0));
        let enters_probe = enters.clone();
        let leaves_probe = leaves.clone();

        let _cleanup = pointer.on_region(
            fixed(Rect::new(5, 5, 5, 5)),
            HoverHooks {
                on_enter: Some(Rc::new(move || {
                    enters_probe.set(enters_probe.get() + 1);
                })),
                on_leave: Some(Rc::new(move || {
                    leaves_probe.set(leaves_probe.get() + 1);
                })),
            },
        );

        // Outside.
        pointer.update_hover(0, 0);
        assert_eq!((enters.get(), leaves.get()), (0, 0));
        assert_eq!(pointer.variant(), CursorVariant::Default);

        // In.
        pointer.update_hover(7, 7);
        assert_eq!((enters.get(), leaves.get()), (1, 0));
        assert_eq!(pointer.variant(), CursorVariant::Hover);

        // Moving within the region fires nothing.
        pointer.update_hover(8, 8);
        assert_eq!((enters.get(), leaves.get()), (1, 0));

        // Out again.
        pointer.update_hover(0, 0);
        assert_eq!((enters.get(), leaves.get()), (1, 1));
        assert_eq!(pointer.variant(), CursorVariant::Default);
    }

    #[test]
    fn test_crossing_between_regions() {
        let pointer = PointerTracker::new();
        let _a = pointer.on_region(
            fixed(Rect::new(0, 0, 10, 10)),
            HoverHooks::default(),
        );
        let _b = pointer.on_region(
            fixed(Rect::new(20, 0, 10, 10)),
            HoverHooks::default(),
        );

        pointer.update_hover(5, 5);
        assert_eq!(pointer.variant(), CursorVariant::Hover);

        // Directly from one region into the other: still hovering.
        pointer.update_hover(25, 5);
        assert_eq!(pointer.variant(), CursorVariant::Hover);

        pointer.update_hover(15, 5);
        assert_eq!(pointer.variant(), CursorVariant::Default);
    }

    #[test]
    fn test_cleanup_deregisters() {
        let pointer = PointerTracker::new();
        let cleanup = pointer.on_region(
            fixed(Rect::new(0, 0, 10, 10)),
            HoverHooks::default(),
        );

        pointer.update_hover(5, 5);
        assert_eq!(pointer.variant(), CursorVariant::Hover);

        // Removing the hovered region drops the variant back to default.
        cleanup();
        assert_eq!(pointer.variant(), CursorVariant::Default);

        pointer.update_hover(5, 5);
        assert_eq!(pointer.variant(), CursorVariant::Default);
    }

    #[test]
    fn test_absent_bounds_never_hover() {
        let pointer = PointerTracker::new();
        let _cleanup =
            pointer.on_region(Rc::new(|| None), HoverHooks::default());

        pointer.update_hover(5, 5);
        assert_eq!(pointer.variant(), CursorVariant::Default);
    }

    #[test]
    fn test_reset_clears_everything() {
        let pointer = PointerTracker::new();
        let _cleanup = pointer.on_region(
            fixed(Rect::new(0, 0, 10, 10)),
            HoverHooks::default(),
        );

        pointer.dispatch_move(5, 5);
        pointer.update_hover(5, 5);
        assert_eq!(pointer.variant(), CursorVariant::Hover);

        pointer.reset();
        assert_eq!(pointer.position(), (0, 0));
        assert_eq!(pointer.variant(), CursorVariant::Default);

        pointer.update_hover(5, 5);
        assert_eq!(pointer.variant(), CursorVariant::Default);
    }
}
