//! State Module - The page's runtime state machines
//!
//! Four independent pieces of state, none of which reads another's
//! internals:
//!
//! - **Reveal** - Append-only set of sections that have run their entrance
//! - **Watcher** - Viewport observation feeding the reveal set
//! - **Scroll** - Offset plus the nav-bar threshold flag
//! - **Pointer** - Cursor coordinates and the hover variant
//!
//! The only ordering constraint between them is causal: a section cannot be
//! revealed before it is registered, and never more than once.

pub mod pointer;
pub mod reveal;
pub mod scroll;
pub mod watcher;

pub use pointer::*;
pub use reveal::*;
pub use scroll::*;
pub use watcher::*;
