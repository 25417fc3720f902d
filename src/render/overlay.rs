//! Cursor overlay - the pointer-following marker of the studio variant.
//!
//! A pure function of pointer state: the overlay sits exactly at the
//! pointer's screen position and swells while an interactive region is
//! hovered. No state machine of its own.

use crate::state::{CursorVariant, PointerTracker};

/// Scale applied in the default variant.
pub const DEFAULT_SCALE: f32 = 1.0;

/// Scale applied while hovering an interactive region.
pub const HOVER_SCALE: f32 = 1.5;

/// The overlay's rendered form for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorOverlay {
    /// Screen column.
    pub x: u16,
    /// Screen row.
    pub y: u16,
    /// Render scale, driven by the interaction variant.
    pub scale: f32,
    /// Glyph standing in for the scaled ring.
    pub glyph: char,
}

/// Derive the overlay from raw pointer state.
pub fn from_state(x: u16, y: u16, variant: CursorVariant) -> CursorOverlay {
    match variant {
        CursorVariant::Default => CursorOverlay {
            x,
            y,
            scale: DEFAULT_SCALE,
            glyph: '·',
        },
        CursorVariant::Hover => CursorOverlay {
            x,
            y,
            scale: HOVER_SCALE,
            glyph: '●',
        },
    }
}

/// Derive the overlay from the tracker's current state.
pub fn overlay(pointer: &PointerTracker) -> CursorOverlay {
    let (x, y) = pointer.position();
    from_state(x, y, pointer.variant())
}
