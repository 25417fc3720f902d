//! Page lifecycle - mount, event routing, render effect, unmount.
//!
//! `mount()` builds every piece of state from [`PageOptions`], computes the
//! section layout, hands the registration list to the reveal watcher, and
//! runs the first observation pass. `run()` owns the terminal: it installs
//! a render effect over the reactive state and pumps crossterm events
//! through [`PageHandle::route_event`] until quit.
//!
//! Teardown is by ownership: `unmount(self)` disposes the watcher and runs
//! every hover cleanup before returning, so a notification arriving after
//! teardown has nothing left to land on.

use std::io::{self, Write, stdout};
use std::rc::Rc;
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEventKind, MouseEventKind,
    DisableMouseCapture, EnableMouseCapture, poll, read,
};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
    disable_raw_mode, enable_raw_mode, size as terminal_size,
};
use crossterm::{execute, queue};
use spark_signals::{Signal, effect, signal};

use crate::config::PageOptions;
use crate::content::{ProfileContent, SectionKind};
use crate::layout::{PageLayout, SectionSpec, compute_page_layout};
use crate::render::overlay::from_state;
use crate::render::{
    CursorOverlay, build_section, nav_line, paint_screen, render_page,
};
use crate::state::{
    CursorVariant, HoverHooks, PointerTracker, RevealWatcher, ScrollTracker,
    reveal, LINE_SCROLL, PAGE_SCROLL_FACTOR, WHEEL_SCROLL,
};
use crate::theme::{Palette, ThemeController, presets};
use crate::types::{Rect, Viewport};

// =============================================================================
// Events
// =============================================================================

/// Page-level event, converted from crossterm's event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// Scroll by rows; positive is down the page.
    ScrollLines(i32),
    /// Scroll by viewport-sized pages; positive is down.
    ScrollPages(i32),
    /// Jump to the top of the page.
    ScrollHome,
    /// Jump to the bottom of the page.
    ScrollEnd,
    /// Pointer moved to a screen cell.
    PointerMoved(u16, u16),
    /// Flip the theme flag.
    ToggleTheme,
    /// Terminal resized to (width, height).
    Resize(u16, u16),
    /// Stop the page.
    Quit,
    /// Nothing the page cares about.
    None,
}

/// Convert a crossterm event into a page event.
pub fn convert_event(event: CrosstermEvent) -> PageEvent {
    match event {
        CrosstermEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => {
                PageEvent::ScrollLines(-(WHEEL_SCROLL as i32))
            }
            MouseEventKind::ScrollDown => {
                PageEvent::ScrollLines(WHEEL_SCROLL as i32)
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                PageEvent::PointerMoved(mouse.column, mouse.row)
            }
            _ => PageEvent::None,
        },
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
            match key.code {
                KeyCode::Char('t') => PageEvent::ToggleTheme,
                KeyCode::Char('q') | KeyCode::Esc => PageEvent::Quit,
                KeyCode::Up => PageEvent::ScrollLines(-(LINE_SCROLL as i32)),
                KeyCode::Down => PageEvent::ScrollLines(LINE_SCROLL as i32),
                KeyCode::PageUp => PageEvent::ScrollPages(-1),
                KeyCode::PageDown => PageEvent::ScrollPages(1),
                KeyCode::Home => PageEvent::ScrollHome,
                KeyCode::End => PageEvent::ScrollEnd,
                _ => PageEvent::None,
            }
        }
        CrosstermEvent::Resize(width, height) => {
            PageEvent::Resize(width, height)
        }
        _ => PageEvent::None,
    }
}

// =============================================================================
// Mount
// =============================================================================

/// A mounted page: every tracker, the watcher, and the shared layout.
pub struct PageHandle {
    options: PageOptions,
    content: Rc<ProfileContent>,
    layout: Rc<PageLayout>,
    scroll: ScrollTracker,
    theme: ThemeController,
    pointer: Option<PointerTracker>,
    hover_cleanups: Vec<Box<dyn FnOnce()>>,
    watcher: RevealWatcher,
    viewport_height: Signal<u16>,
}

/// Mount a page: build state from configuration, lay out the sections,
/// register them with the watcher, and run the initial observation pass so
/// sections already in view enter immediately.
pub fn mount(
    options: PageOptions,
    content: ProfileContent,
    viewport_height: u16,
) -> PageHandle {
    // A fresh display generation starts with nothing revealed.
    reveal::reset_reveal_state();

    let content = Rc::new(content);
    let width = options.metrics.content_width;

    let specs: Vec<SectionSpec> = SectionKind::all()
        .iter()
        .map(|kind| SectionSpec {
            id: kind.id(),
            height: build_section(&content, *kind, width).lines.len() as u16,
        })
        .collect();
    let layout = Rc::new(compute_page_layout(&specs, &options.metrics));

    let mut watcher = RevealWatcher::new(options.reveal);
    watcher.register(PageLayout::registrations(&layout));

    let scroll = ScrollTracker::new(options.scroll_threshold);
    let theme = ThemeController::new(options.initial_dark);

    let mut pointer = None;
    let mut hover_cleanups: Vec<Box<dyn FnOnce()>> = Vec::new();
    if options.cursor_overlay {
        let tracker = PointerTracker::new();
        for kind in [SectionKind::Projects, SectionKind::Contact] {
            let Some(section_rect) = layout.rect_of(&kind.id()) else {
                continue;
            };
            let built = build_section(&content, kind, width);
            for relative in built.interactive {
                let absolute = Rect::new(
                    relative.x,
                    section_rect.y + relative.y,
                    relative.width,
                    relative.height,
                );
                let cleanup = tracker.on_region(
                    Rc::new(move || Some(absolute)),
                    HoverHooks::default(),
                );
                hover_cleanups.push(Box::new(cleanup));
            }
        }
        pointer = Some(tracker);
    }

    let handle = PageHandle {
        options,
        content,
        layout,
        scroll,
        theme,
        pointer,
        hover_cleanups,
        watcher,
        viewport_height: signal(viewport_height),
    };

    handle.watcher.observe(handle.viewport());
    handle
}

impl PageHandle {
    // =========================================================================
    // State access
    // =========================================================================

    /// The mount's configuration.
    pub fn options(&self) -> &PageOptions {
        &self.options
    }

    /// The content being displayed.
    pub fn content(&self) -> &ProfileContent {
        &self.content
    }

    /// The computed page layout.
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// The scroll tracker.
    pub fn scroll(&self) -> &ScrollTracker {
        &self.scroll
    }

    /// The theme controller.
    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    /// The pointer tracker, present only with the cursor overlay enabled.
    pub fn pointer(&self) -> Option<&PointerTracker> {
        self.pointer.as_ref()
    }

    /// The current viewport.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.scroll.offset(), self.viewport_height.get())
    }

    // =========================================================================
    // Event routing
    // =========================================================================

    /// Route one page event into the owning state. Returns `false` when the
    /// page should stop.
    pub fn route_event(&mut self, event: PageEvent) -> bool {
        match event {
            PageEvent::ScrollLines(delta) => self.scroll_by(delta),
            PageEvent::ScrollPages(pages) => {
                let height = self.viewport_height.get();
                let delta =
                    (height as f32 * PAGE_SCROLL_FACTOR) as i32 * pages;
                self.scroll_by(delta);
            }
            PageEvent::ScrollHome => self.scroll_to(0),
            PageEvent::ScrollEnd => {
                self.scroll_to(self.max_scroll());
            }
            PageEvent::PointerMoved(x, y) => {
                if let Some(pointer) = &self.pointer {
                    pointer.dispatch_move(x, y);
                    // Screen row 0 is the fixed nav; page rows start below.
                    let page_y = if y == 0 {
                        u16::MAX
                    } else {
                        self.scroll.offset().saturating_add(y - 1)
                    };
                    pointer.update_hover(x, page_y);
                }
            }
            PageEvent::ToggleTheme => self.theme.toggle(),
            PageEvent::Resize(_, height) => {
                self.viewport_height.set(height);
                self.watcher.observe(self.viewport());
            }
            PageEvent::Quit => return false,
            PageEvent::None => {}
        }
        true
    }

    fn max_scroll(&self) -> u16 {
        // The nav occupies one screen row, so one fewer page row is visible.
        self.layout
            .max_scroll(self.viewport_height.get().saturating_sub(1))
    }

    fn scroll_by(&mut self, delta: i32) {
        if self.scroll.scroll_by(delta, self.max_scroll()) {
            self.watcher.observe(self.viewport());
        }
    }

    fn scroll_to(&mut self, offset: u16) {
        self.scroll.dispatch(offset.min(self.max_scroll()));
        self.watcher.observe(self.viewport());
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// A painter over this page's shared state, safe to move into a render
    /// effect while the handle keeps routing events.
    pub fn painter(&self) -> PagePainter {
        let brand = self
            .content
            .profile
            .name
            .split_whitespace()
            .next()
            .unwrap_or("profile")
            .to_lowercase();

        PagePainter {
            content: Rc::clone(&self.content),
            layout: Rc::clone(&self.layout),
            brand: format!("{brand}.dev"),
            offset: self.scroll.offset_signal(),
            past_threshold: self.scroll.past_threshold_signal(),
            dark: self.theme.dark_signal(),
            viewport_height: self.viewport_height.clone(),
            pointer: self.pointer.as_ref().map(|tracker| {
                (
                    tracker.x_signal(),
                    tracker.y_signal(),
                    tracker.variant_signal(),
                )
            }),
        }
    }

    // =========================================================================
    // Unmount
    // =========================================================================

    /// Tear the page down. Releases every subscription (hover regions,
    /// then the watcher) and discards the revealed set before returning.
    pub fn unmount(mut self) {
        for cleanup in self.hover_cleanups.drain(..) {
            cleanup();
        }
        if let Some(pointer) = self.pointer.take() {
            pointer.reset();
        }
        self.watcher.dispose();
        reveal::reset_reveal_state();
    }
}

// =============================================================================
// Painter
// =============================================================================

/// Cheap clones of everything a render pass reads. Reading the signals and
/// the reveal set inside an `effect` is what re-triggers painting.
pub struct PagePainter {
    content: Rc<ProfileContent>,
    layout: Rc<PageLayout>,
    brand: String,
    offset: Signal<u16>,
    past_threshold: Signal<bool>,
    dark: Signal<bool>,
    viewport_height: Signal<u16>,
    pointer: Option<(Signal<u16>, Signal<u16>, Signal<CursorVariant>)>,
}

impl PagePainter {
    /// The active palette.
    pub fn palette(&self) -> Palette {
        if self.dark.get() {
            presets::dark()
        } else {
            presets::light()
        }
    }

    /// Paint the visible screen rows.
    pub fn screen(&self) -> Vec<String> {
        let frame = render_page(&self.content, &self.layout);
        let nav = nav_line(
            &self.brand,
            self.past_threshold.get(),
            self.dark.get(),
            self.layout.width(),
        );
        let viewport =
            Viewport::new(self.offset.get(), self.viewport_height.get());
        paint_screen(&frame, &nav, &self.palette(), viewport)
    }

    /// The cursor overlay for this frame, if the variant carries one.
    pub fn overlay(&self) -> Option<CursorOverlay> {
        let (x, y, variant) = self.pointer.as_ref()?;
        Some(from_state(x.get(), y.get(), variant.get()))
    }
}

// =============================================================================
// Terminal loop
// =============================================================================

fn draw(rows: &[String], overlay: Option<CursorOverlay>) -> io::Result<()> {
    let mut out = stdout();
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    for row in rows {
        out.write_all(row.as_bytes())?;
        out.write_all(b"\r\n")?;
    }
    if let Some(shape) = overlay {
        let mut glyph = [0u8; 4];
        queue!(out, MoveTo(shape.x, shape.y))?;
        out.write_all(shape.glyph.encode_utf8(&mut glyph).as_bytes())?;
    }
    out.flush()
}

/// Mount the page on the real terminal and block until quit.
///
/// Sets up the alternate screen and mouse capture, installs the render
/// effect, pumps events, and restores the terminal before unmounting.
pub fn run(options: PageOptions, content: ProfileContent) -> io::Result<()> {
    let (_, height) = terminal_size()?;
    let mut handle = mount(options, content, height);

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, Hide, EnableMouseCapture)?;

    let painter = handle.painter();
    let stop_effect = effect(move || {
        let rows = painter.screen();
        let _ = draw(&rows, painter.overlay());
    });

    let result = (|| -> io::Result<()> {
        loop {
            if !poll(Duration::from_millis(16))? {
                continue;
            }
            let event = convert_event(read()?);
            if !handle.route_event(event) {
                return Ok(());
            }
        }
    })();

    stop_effect();
    execute!(stdout(), DisableMouseCapture, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    handle.unmount();

    result
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::reveal::{has, revealed_count};
    use crate::types::SectionId;

    fn classic_handle() -> PageHandle {
        mount(
            PageOptions::classic().for_terminal(24),
            ProfileContent::sample(),
            24,
        )
    }

    #[test]
    fn test_mount_registers_all_sections() {
        let handle = classic_handle();
        for kind in SectionKind::all() {
            assert!(handle.layout.rect_of(&kind.id()).is_some());
        }
        handle.unmount();
    }

    #[test]
    fn test_initial_pass_reveals_visible_sections_only() {
        let handle = classic_handle();

        // The hero fills the top of the page, so late sections cannot be
        // visible before any scrolling.
        assert!(!has(&SectionId::new("contact")));
        assert!(!has(&SectionId::new("skills")));
        handle.unmount();
    }

    #[test]
    fn test_scrolling_to_bottom_reveals_everything() {
        let mut handle = classic_handle();

        let mut keep_running = true;
        while keep_running && handle.scroll.offset() < handle.max_scroll() {
            keep_running = handle.route_event(PageEvent::ScrollLines(3));
        }
        handle.route_event(PageEvent::ScrollEnd);

        for kind in SectionKind::all() {
            assert!(has(&kind.id()), "{} never entered", kind.as_str());
        }

        // Scrolling back up un-reveals nothing.
        handle.route_event(PageEvent::ScrollHome);
        assert_eq!(revealed_count(), SectionKind::all().len());
        handle.unmount();
    }

    #[test]
    fn test_nav_flag_follows_scroll_both_ways() {
        let mut handle = classic_handle();
        let threshold = handle.scroll.threshold();

        handle.route_event(PageEvent::ScrollLines(threshold as i32 + 1));
        assert!(handle.scroll.past_threshold());

        handle.route_event(PageEvent::ScrollHome);
        assert!(!handle.scroll.past_threshold());
        handle.unmount();
    }

    #[test]
    fn test_theme_toggle_event() {
        let mut handle = classic_handle();
        assert!(!handle.theme.is_dark());

        handle.route_event(PageEvent::ToggleTheme);
        assert!(handle.theme.is_dark());

        handle.route_event(PageEvent::ToggleTheme);
        assert!(!handle.theme.is_dark());
        handle.unmount();
    }

    #[test]
    fn test_classic_variant_has_no_pointer() {
        let handle = classic_handle();
        assert!(handle.pointer().is_none());

        // Pointer events are a no-op without the overlay.
        let mut handle = handle;
        assert!(handle.route_event(PageEvent::PointerMoved(5, 5)));
        handle.unmount();
    }

    #[test]
    fn test_studio_variant_tracks_pointer() {
        let mut handle = mount(
            PageOptions::studio().for_terminal(24),
            ProfileContent::sample(),
            24,
        );

        handle.route_event(PageEvent::PointerMoved(7, 3));
        let pointer = handle.pointer().unwrap();
        assert_eq!(pointer.position(), (7, 3));
        assert_eq!(pointer.variant(), CursorVariant::Default);
        handle.unmount();
    }

    #[test]
    fn test_quit_stops_routing() {
        let mut handle = classic_handle();
        assert!(handle.route_event(PageEvent::None));
        assert!(!handle.route_event(PageEvent::Quit));
        handle.unmount();
    }

    #[test]
    fn test_resize_triggers_observation() {
        let mut handle = mount(
            PageOptions::classic().for_terminal(24),
            ProfileContent::sample(),
            5,
        );
        let before = revealed_count();

        // A much taller viewport exposes more of the page at once.
        handle.route_event(PageEvent::Resize(80, 200));
        assert!(revealed_count() >= before);
        handle.unmount();
    }

    #[test]
    fn test_unmount_discards_state() {
        let mut handle = classic_handle();
        handle.route_event(PageEvent::ScrollEnd);
        assert!(revealed_count() > 0);

        handle.unmount();
        assert_eq!(revealed_count(), 0);
    }

    #[test]
    fn test_convert_key_events() {
        use crossterm::event::{KeyEvent, KeyModifiers};

        let key = |code| {
            CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
        };

        assert_eq!(convert_event(key(KeyCode::Char('t'))), PageEvent::ToggleTheme);
        assert_eq!(convert_event(key(KeyCode::Char('q'))), PageEvent::Quit);
        assert_eq!(convert_event(key(KeyCode::Esc)), PageEvent::Quit);
        assert_eq!(convert_event(key(KeyCode::Down)), PageEvent::ScrollLines(1));
        assert_eq!(convert_event(key(KeyCode::Up)), PageEvent::ScrollLines(-1));
        assert_eq!(convert_event(key(KeyCode::PageDown)), PageEvent::ScrollPages(1));
        assert_eq!(convert_event(key(KeyCode::Home)), PageEvent::ScrollHome);
        assert_eq!(convert_event(key(KeyCode::End)), PageEvent::ScrollEnd);
        assert_eq!(convert_event(key(KeyCode::Char('x'))), PageEvent::None);
    }

    #[test]
    fn test_convert_mouse_events() {
        use crossterm::event::{KeyModifiers, MouseEvent};

        let mouse = |kind| {
            CrosstermEvent::Mouse(MouseEvent {
                kind,
                column: 4,
                row: 9,
                modifiers: KeyModifiers::empty(),
            })
        };

        assert_eq!(
            convert_event(mouse(MouseEventKind::ScrollDown)),
            PageEvent::ScrollLines(WHEEL_SCROLL as i32)
        );
        assert_eq!(
            convert_event(mouse(MouseEventKind::ScrollUp)),
            PageEvent::ScrollLines(-(WHEEL_SCROLL as i32))
        );
        assert_eq!(
            convert_event(mouse(MouseEventKind::Moved)),
            PageEvent::PointerMoved(4, 9)
        );
    }

    #[test]
    fn test_painter_reflects_state() {
        let mut handle = classic_handle();
        let painter = handle.painter();

        let before = painter.screen();
        handle.route_event(PageEvent::ToggleTheme);
        let after = painter.screen();

        assert_ne!(before, after);
        assert_eq!(painter.overlay(), None);
        handle.unmount();
    }
}
