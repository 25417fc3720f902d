//! Theme System for vitrine.
//!
//! Two monochrome palettes, light and dark, selected by a single boolean
//! flag. The flag flips only on the explicit toggle action; no other
//! component writes it, and the whole content layer reads its palette
//! through the controller.

use spark_signals::{Signal, signal};

use crate::types::Rgb;

pub mod presets;

pub use presets::{dark, light};

// =============================================================================
// Palette - semantic colors
// =============================================================================

/// Semantic colors for one visual theme.
///
/// Deliberately monochrome: the page's look is grayscale plus typography,
/// so the slots are background/surface/text tiers and two border weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background.
    pub background: Rgb,
    /// Card and solid-nav background.
    pub surface: Rgb,
    /// Primary text.
    pub text: Rgb,
    /// Secondary text.
    pub text_muted: Rgb,
    /// Tertiary text (taglines, footers).
    pub text_dim: Rgb,
    /// Section rules and card borders.
    pub border: Rgb,
    /// Emphasized borders (hover weight).
    pub border_strong: Rgb,
}

// =============================================================================
// Controller
// =============================================================================

/// Owns the `dark` flag and resolves the active palette.
pub struct ThemeController {
    dark: Signal<bool>,
}

impl ThemeController {
    /// Create a controller booting with the given palette.
    pub fn new(initial_dark: bool) -> Self {
        Self {
            dark: signal(initial_dark),
        }
    }

    /// Flip the flag unconditionally.
    pub fn toggle(&self) {
        self.dark.set(!self.dark.get());
    }

    /// Whether the dark palette is active.
    pub fn is_dark(&self) -> bool {
        self.dark.get()
    }

    /// Clone of the flag signal, for render effects.
    pub fn dark_signal(&self) -> Signal<bool> {
        self.dark.clone()
    }

    /// The active palette.
    pub fn palette(&self) -> Palette {
        if self.dark.get() { dark() } else { light() }
    }
}

// =============================================================================
// Tests
// =============================================================================
