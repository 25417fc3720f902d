//! Renderer - pure functions from state plus content to a visual tree.
//!
//! Rendering happens in two stages:
//!
//! 1. [`render_page`] assembles the full page in page space as semantic
//!    [`Line`]s, applying the reveal gate: a section whose id is not in the
//!    reveal store contributes blank rows (it occupies its layout slot but
//!    has not run its entrance), a revealed one contributes its content.
//! 2. [`paint_screen`] maps the visible window of those lines through the
//!    active [`Palette`] to ANSI strings, with the nav bar composited as a
//!    fixed first row whose style follows the scroll threshold flag.
//!
//! Neither stage mutates state; the only store read is reveal membership,
//! which makes render effects re-run when a section enters.

use bitflags::bitflags;
use crossterm::style::{Color, Stylize};

use crate::content::{ProfileContent, SectionKind};
use crate::layout::PageLayout;
use crate::state::reveal;
use crate::theme::Palette;
use crate::types::{Rgb, Viewport};

pub mod overlay;
mod sections;

pub use overlay::{CursorOverlay, overlay};
pub use sections::{SECTION_CHROME_ROWS, SectionRender, build_section, hero_lines};

// =============================================================================
// Stagger output
// =============================================================================

/// Per-card entrance delay step, forwarded to the content layer as data.
pub const CARD_STAGGER_MS: u16 = 150;

/// Per-skill-category entrance delay step.
pub const SKILL_STAGGER_MS: u16 = 100;

/// Entrance delay for the item at `index`, given a stagger step. The core
/// only forwards the number; animation timing itself is the content layer's
/// business.
pub const fn stagger_delay_ms(index: u16, step: u16) -> u16 {
    index * step
}

// =============================================================================
// Text model
// =============================================================================

bitflags! {
    /// Text attributes, combined per span.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextStyle: u8 {
        const BOLD      = 1 << 0;
        const DIM       = 1 << 1;
        const UNDERLINE = 1 << 2;
        const ITALIC    = 1 << 3;
        const REVERSE   = 1 << 4;
    }
}

/// Semantic color slot a span resolves through the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Heading,
    Body,
    Muted,
    Dim,
    Chip,
    Link,
    Rule,
}

/// A run of text with one role and one attribute set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub role: TextRole,
    pub style: TextStyle,
}

impl Span {
    /// Create a span.
    pub fn new(
        text: impl Into<String>,
        role: TextRole,
        style: TextStyle,
    ) -> Self {
        Self {
            text: text.into(),
            role,
            style,
        }
    }
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    /// A blank row.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A row with a single span.
    pub fn styled(
        text: impl Into<String>,
        role: TextRole,
        style: TextStyle,
    ) -> Self {
        Self {
            spans: vec![Span::new(text, role, style)],
        }
    }

    /// A row of body text with no attributes.
    pub fn plain(text: impl Into<String>, role: TextRole) -> Self {
        Self::styled(text, role, TextStyle::empty())
    }

    /// Whether the row has no visible text.
    pub fn is_blank(&self) -> bool {
        self.spans.iter().all(|span| span.text.trim().is_empty())
    }
}

/// The whole page in page space: `lines[row]` is page row `row`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<Line>,
}

// =============================================================================
// Page assembly
// =============================================================================

fn place(rows: &mut [Line], top: u16, lines: Vec<Line>, max_height: u16) {
    for (offset, line) in lines.into_iter().take(max_height as usize).enumerate()
    {
        let row = top as usize + offset;
        if row < rows.len() {
            rows[row] = line;
        }
    }
}

/// Assemble the full page. Pure apart from reading reveal membership, which
/// is what gates each section between blank rows and its entered content.
pub fn render_page(content: &ProfileContent, layout: &PageLayout) -> Frame {
    let width = layout.width();
    let mut rows = vec![Line::empty(); layout.content_height() as usize];

    let hero = layout.hero();
    place(&mut rows, hero.y, hero_lines(&content.profile, width), hero.height);

    for kind in SectionKind::all() {
        let Some(rect) = layout.rect_of(&kind.id()) else {
            continue;
        };
        // The reveal gate: unrevealed sections keep their slot blank.
        if !reveal::has(&kind.id()) {
            continue;
        }
        let section = build_section(content, *kind, width);
        place(&mut rows, rect.y, section.lines, rect.height);
    }

    let footer = layout.footer();
    place(
        &mut rows,
        footer.y,
        footer_lines(&content.profile.footer, width),
        footer.height,
    );

    Frame { lines: rows }
}

fn footer_lines(footer: &str, width: u16) -> Vec<Line> {
    vec![
        Line::plain("─".repeat(width as usize), TextRole::Rule),
        Line::plain(footer.to_string(), TextRole::Dim),
    ]
}

/// The fixed nav row: brand on the left, controls on the right. Solid once
/// the page is scrolled past the threshold, transparent before.
pub fn nav_line(brand: &str, past_threshold: bool, dark: bool, width: u16) -> Line {
    let toggle = if dark { "[t] ☀ light" } else { "[t] ☾ dark" };
    let right = format!("{toggle}   [q] quit");
    let left = format!(" {brand}");

    let gap = (width as usize)
        .saturating_sub(left.chars().count() + right.chars().count() + 1);
    let text = format!("{left}{}{right} ", " ".repeat(gap));

    let style = if past_threshold {
        TextStyle::BOLD | TextStyle::REVERSE
    } else {
        TextStyle::BOLD
    };
    Line::styled(text, TextRole::Heading, style)
}

// =============================================================================
// Painting
// =============================================================================

fn role_color(role: TextRole, palette: &Palette) -> Rgb {
    match role {
        TextRole::Heading => palette.text,
        TextRole::Body => palette.text_muted,
        TextRole::Muted => palette.text_muted,
        TextRole::Dim => palette.text_dim,
        TextRole::Chip => palette.text_muted,
        TextRole::Link => palette.text,
        TextRole::Rule => palette.border,
    }
}

fn terminal_color(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

fn paint_span(span: &Span, palette: &Palette) -> String {
    let mut styled =
        span.text.clone().with(terminal_color(role_color(span.role, palette)));

    if span.style.contains(TextStyle::BOLD) {
        styled = styled.bold();
    }
    if span.style.contains(TextStyle::DIM) {
        styled = styled.dim();
    }
    if span.style.contains(TextStyle::UNDERLINE) {
        styled = styled.underlined();
    }
    if span.style.contains(TextStyle::ITALIC) {
        styled = styled.italic();
    }
    if span.style.contains(TextStyle::REVERSE) {
        styled = styled.reverse();
    }

    styled.to_string()
}

/// Paint one semantic line to an ANSI string.
pub fn paint_line(line: &Line, palette: &Palette) -> String {
    line.spans
        .iter()
        .map(|span| paint_span(span, palette))
        .collect()
}

/// Paint the visible window: the nav row first, then the page rows the
/// viewport exposes below it.
pub fn paint_screen(
    frame: &Frame,
    nav: &Line,
    palette: &Palette,
    viewport: Viewport,
) -> Vec<String> {
    let mut screen = Vec::with_capacity(viewport.height as usize);
    screen.push(paint_line(nav, palette));

    let first = viewport.top as usize;
    let body_rows = viewport.height.saturating_sub(1) as usize;
    for row in first..first + body_rows {
        match frame.lines.get(row) {
            Some(line) => screen.push(paint_line(line, palette)),
            None => screen.push(String::new()),
        }
    }

    screen
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{PageMetrics, SectionSpec, compute_page_layout};
    use crate::state::reveal::{reset_reveal_state, reveal};
    use crate::theme::presets;
    use crate::types::SectionId;

    fn test_layout(content: &ProfileContent) -> PageLayout {
        let metrics = PageMetrics {
            content_width: 60,
            ..Default::default()
        };
        let specs: Vec<SectionSpec> = SectionKind::all()
            .iter()
            .map(|kind| SectionSpec {
                id: kind.id(),
                height: build_section(content, *kind, 60).lines.len() as u16,
            })
            .collect();
        compute_page_layout(&specs, &metrics)
    }

    #[test]
    fn test_stagger_delays() {
        assert_eq!(stagger_delay_ms(0, CARD_STAGGER_MS), 0);
        assert_eq!(stagger_delay_ms(1, CARD_STAGGER_MS), 150);
        assert_eq!(stagger_delay_ms(3, SKILL_STAGGER_MS), 300);
    }

    #[test]
    fn test_unrevealed_sections_render_blank() {
        reset_reveal_state();
        let content = ProfileContent::sample();
        let layout = test_layout(&content);

        let frame = render_page(&content, &layout);
        let rect = layout.rect_of(&SectionId::new("projects")).unwrap();

        for row in rect.y..rect.y + rect.height {
            assert!(frame.lines[row as usize].is_blank());
        }
    }

    #[test]
    fn test_revealed_section_renders_content() {
        reset_reveal_state();
        let content = ProfileContent::sample();
        let layout = test_layout(&content);

        reveal(&SectionId::new("projects"));
        let frame = render_page(&content, &layout);
        let rect = layout.rect_of(&SectionId::new("projects")).unwrap();

        let section_rows = &frame.lines
            [rect.y as usize..(rect.y + rect.height) as usize];
        assert!(section_rows.iter().any(|line| !line.is_blank()));

        // A sibling that has not entered stays blank.
        let about = layout.rect_of(&SectionId::new("about")).unwrap();
        for row in about.y..about.y + about.height {
            assert!(frame.lines[row as usize].is_blank());
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        reset_reveal_state();
        let content = ProfileContent::sample();
        let layout = test_layout(&content);
        reveal(&SectionId::new("about"));

        assert_eq!(
            render_page(&content, &layout),
            render_page(&content, &layout)
        );
    }

    #[test]
    fn test_nav_style_follows_threshold() {
        let transparent = nav_line("robin.dev", false, false, 60);
        let solid = nav_line("robin.dev", true, false, 60);

        assert_ne!(transparent, solid);
        assert!(solid.spans[0].style.contains(TextStyle::REVERSE));
        assert!(!transparent.spans[0].style.contains(TextStyle::REVERSE));
    }

    #[test]
    fn test_nav_shows_toggle_hint() {
        let light = nav_line("robin.dev", false, false, 60);
        let dark = nav_line("robin.dev", false, true, 60);
        assert!(light.spans[0].text.contains("dark"));
        assert!(dark.spans[0].text.contains("light"));
    }

    #[test]
    fn test_paint_screen_windows_the_frame() {
        reset_reveal_state();
        let content = ProfileContent::sample();
        let layout = test_layout(&content);
        let frame = render_page(&content, &layout);
        let nav = nav_line("x", false, false, 60);
        let palette = presets::light();

        let screen =
            paint_screen(&frame, &nav, &palette, Viewport::new(0, 10));
        assert_eq!(screen.len(), 10);

        // Scrolling past the end pads with empty rows instead of panicking.
        let past_end = paint_screen(
            &frame,
            &nav,
            &palette,
            Viewport::new(layout.content_height(), 10),
        );
        assert_eq!(past_end.len(), 10);
    }

    #[test]
    fn test_paint_line_uses_palette() {
        let line = Line::plain("hello", TextRole::Heading);
        let light = paint_line(&line, &presets::light());
        let dark = paint_line(&line, &presets::dark());

        assert!(light.contains("hello"));
        assert_ne!(light, dark);
    }
}
