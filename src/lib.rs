//! # vitrine
//!
//! Reactive single-page profile display for the terminal.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! The page is a scroll window over a fixed column of content blocks. Four
//! independent pieces of reactive state drive what the renderer shows:
//!
//! ```text
//! scroll/pointer/key events → trackers → signals → render effect → terminal
//!                              viewport → watcher → revealed set ↗
//! ```
//!
//! Sections animate in exactly once, the first time they are sufficiently
//! visible in the viewport; the nav bar switches style past a scroll
//! threshold; a boolean flag selects the light or dark palette; and the
//! studio variant tracks the pointer for a cursor overlay. No piece of
//! state reads another's internals; they compose only through the values
//! they emit.
//!
//! ## Modules
//!
//! - [`types`] - Section ids and page-space geometry
//! - [`config`] - Constructor configuration and the two page variants
//! - [`content`] - The static content records the core forwards unmodified
//! - [`state`] - Reveal store, viewport watcher, scroll and pointer trackers
//! - [`theme`] - Palettes and the dark-flag controller
//! - [`layout`] - Taffy-backed section geometry and text measurement
//! - [`render`] - Pure frame assembly and ANSI painting
//! - [`page`] - Mount/unmount lifecycle, event routing, terminal loop

pub mod config;
pub mod content;
pub mod layout;
pub mod page;
pub mod render;
pub mod state;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::{Rect, Rgb, SectionId, Viewport};

pub use config::{PageOptions, RevealOptions};

pub use content::{
    ContactLink, Experience, Profile, ProfileContent, Project, SectionKind,
    SkillCategory,
};

pub use state::{
    // Reveal
    has, reveal, reset_reveal_state, revealed_count,
    // Watcher
    BoundsProvider, RevealWatcher, SectionRegistration, visible_fraction,
    // Scroll
    LINE_SCROLL, PAGE_SCROLL_FACTOR, ScrollTracker, WHEEL_SCROLL,
    // Pointer
    CursorVariant, HoverHooks, PointerTracker,
};

pub use theme::{Palette, ThemeController, dark, light};

pub use layout::{
    PageLayout, PageMetrics, SectionSpec, compute_page_layout, string_width,
    wrap_text,
};

pub use render::{
    CARD_STAGGER_MS, CursorOverlay, Frame, Line, SKILL_STAGGER_MS, Span,
    TextRole, TextStyle, nav_line, paint_screen, render_page,
    stagger_delay_ms,
};

pub use page::{PageEvent, PageHandle, PagePainter, convert_event, mount, run};
