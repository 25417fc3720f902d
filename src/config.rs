//! Page configuration.
//!
//! Every tunable the page reads is an explicit value handed to the owning
//! controller at construction: the scroll threshold feeds the nav style
//! switch, `initial_dark` picks the boot palette, and [`RevealOptions`]
//! parameterizes the viewport watcher. The two reference page variants are
//! the two presets below; they share one core and differ only in
//! configuration.

use crate::layout::PageMetrics;

// =============================================================================
// Reveal options
// =============================================================================

/// Intersection parameters for the reveal watcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Minimum visible fraction of a section that counts as "entered".
    pub threshold: f32,
    /// Rows shaved off the viewport bottom before the fraction is computed,
    /// so a section must travel past its raw top-edge crossing to enter.
    pub bottom_margin: u16,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 100,
        }
    }
}

// =============================================================================
// Page options
// =============================================================================

/// Full configuration for a page mount.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    /// Scroll offset past which the nav bar switches to its solid style.
    pub scroll_threshold: u16,
    /// Palette the page boots with. Only the toggle mutates it afterwards.
    pub initial_dark: bool,
    /// Whether the pointer-tracking cursor overlay is active.
    pub cursor_overlay: bool,
    /// Viewport intersection parameters.
    pub reveal: RevealOptions,
    /// Static geometry for the section layout.
    pub metrics: PageMetrics,
}

impl PageOptions {
    /// The light-booting variant: no cursor overlay.
    pub fn classic() -> Self {
        Self {
            scroll_threshold: 50,
            initial_dark: false,
            cursor_overlay: false,
            reveal: RevealOptions::default(),
            metrics: PageMetrics::default(),
        }
    }

    /// The dark-booting variant: cursor overlay enabled, deeper reveal
    /// margin.
    pub fn studio() -> Self {
        Self {
            scroll_threshold: 50,
            initial_dark: true,
            cursor_overlay: true,
            reveal: RevealOptions {
                threshold: 0.1,
                bottom_margin: 120,
            },
            metrics: PageMetrics::default(),
        }
    }

    /// Scale the reveal margin and scroll threshold down to terminal-sized
    /// viewports. The reference constants assume a tall pixel viewport; a
    /// 24-row terminal needs proportionally smaller values.
    pub fn for_terminal(mut self, rows: u16) -> Self {
        self.scroll_threshold = (rows / 8).max(2);
        self.reveal.bottom_margin = (rows / 6).max(2);
        self
    }
}

impl Default for PageOptions {
    fn default() -> Self {
        Self::classic()
    }
}

// =============================================================================
// Tests
// =============================================================================
