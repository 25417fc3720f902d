//! Section layout - page geometry for the reveal watcher and the painter.
//!
//! The page is a flex column: top padding, hero, the registered sections,
//! footer. Taffy computes absolute rects for a fixed content width; those
//! rects back the bounds providers handed to the reveal watcher, which is
//! the explicit registration list that replaces any query against rendering
//! internals.
//!
//! Also home to the small text-measurement helpers (display-cell width and
//! paragraph wrapping) the section builders rely on.

use std::rc::Rc;

use taffy::{
    AvailableSpace, Dimension, FlexDirection, LengthPercentage, Size, Style,
    TaffyTree,
};
use unicode_width::UnicodeWidthStr;

use crate::state::SectionRegistration;
use crate::types::{Rect, SectionId};

// =============================================================================
// Text measurement
// =============================================================================

/// Display width of a string in terminal cells.
pub fn string_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text) as u16
}

/// Greedy word wrap to the given cell width.
///
/// Words wider than the width land on their own line unbroken; the painter
/// truncates. An empty input yields one empty line so paragraphs keep their
/// row.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
            continue;
        }

        if string_width(&current) + 1 + string_width(word) <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }

    lines.push(current);
    lines
}

// =============================================================================
// Metrics
// =============================================================================

/// Static geometry for the page column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMetrics {
    /// Fixed content width in cells.
    pub content_width: u16,
    /// Rows of padding above the hero.
    pub top_padding: u16,
    /// Rows the hero block occupies.
    pub hero_height: u16,
    /// Rows between stacked blocks.
    pub section_gap: u16,
    /// Rows the footer occupies.
    pub footer_height: u16,
}

impl Default for PageMetrics {
    fn default() -> Self {
        Self {
            content_width: 80,
            top_padding: 4,
            hero_height: 7,
            section_gap: 3,
            footer_height: 2,
        }
    }
}

/// A section's measured height, in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpec {
    pub id: SectionId,
    pub height: u16,
}

// =============================================================================
// Page layout
// =============================================================================

/// Absolute page-space rects for every block, computed once per mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    hero: Rect,
    sections: Vec<(SectionId, Rect)>,
    footer: Rect,
    content_height: u16,
    width: u16,
}

impl PageLayout {
    /// The hero block's rect.
    pub fn hero(&self) -> Rect {
        self.hero
    }

    /// The footer block's rect.
    pub fn footer(&self) -> Rect {
        self.footer
    }

    /// A section's rect, or `None` for an id this layout does not contain.
    pub fn rect_of(&self, id: &SectionId) -> Option<Rect> {
        self.sections
            .iter()
            .find(|(section_id, _)| section_id == id)
            .map(|(_, rect)| *rect)
    }

    /// Section rects in page order.
    pub fn sections(&self) -> &[(SectionId, Rect)] {
        &self.sections
    }

    /// Total page height in rows.
    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    /// Content width in cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Maximum scroll offset for a viewport of the given height.
    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.content_height.saturating_sub(viewport_height)
    }

    /// Build the watcher registration list. Each provider captures the
    /// shared layout and resolves its section's rect on demand, returning
    /// `None` if the section has meanwhile no place in the layout.
    pub fn registrations(layout: &Rc<PageLayout>) -> Vec<SectionRegistration> {
        layout
            .sections
            .iter()
            .map(|(id, _)| {
                let id = id.clone();
                let provider_id = id.clone();
                let layout = Rc::clone(layout);
                SectionRegistration::new(
                    id,
                    Rc::new(move || layout.rect_of(&provider_id)),
                )
            })
            .collect()
    }
}

/// Stack the hero, sections, and footer into a column and read back their
/// absolute rects.
pub fn compute_page_layout(
    specs: &[SectionSpec],
    metrics: &PageMetrics,
) -> PageLayout {
    let width = metrics.content_width;

    let mut tree: TaffyTree<()> = TaffyTree::new();

    let block = |height: u16| Style {
        size: Size {
            width: Dimension::Length(width as f32),
            height: Dimension::Length(height as f32),
        },
        ..Default::default()
    };

    let hero_node = tree.new_leaf(block(metrics.hero_height)).unwrap();
    let section_nodes: Vec<_> = specs
        .iter()
        .map(|spec| tree.new_leaf(block(spec.height)).unwrap())
        .collect();
    let footer_node = tree.new_leaf(block(metrics.footer_height)).unwrap();

    let mut children = vec![hero_node];
    children.extend(&section_nodes);
    children.push(footer_node);

    let root_style = Style {
        flex_direction: FlexDirection::Column,
        size: Size {
            width: Dimension::Length(width as f32),
            height: Dimension::Auto,
        },
        gap: Size {
            width: LengthPercentage::Length(0.0),
            height: LengthPercentage::Length(metrics.section_gap as f32),
        },
        padding: taffy::Rect {
            left: LengthPercentage::Length(0.0),
            right: LengthPercentage::Length(0.0),
            top: LengthPercentage::Length(metrics.top_padding as f32),
            bottom: LengthPercentage::Length(0.0),
        },
        ..Default::default()
    };
    let root = tree.new_with_children(root_style, &children).unwrap();

    let _ = tree.compute_layout(
        root,
        Size {
            width: AvailableSpace::Definite(width as f32),
            height: AvailableSpace::MaxContent,
        },
    );

    let read_rect = |node| -> Rect {
        match tree.layout(node) {
            Ok(layout) => Rect::new(
                layout.location.x.round() as u16,
                layout.location.y.round() as u16,
                layout.size.width.round() as u16,
                layout.size.height.round() as u16,
            ),
            Err(_) => Rect::default(),
        }
    };

    let hero = read_rect(hero_node);
    let sections = specs
        .iter()
        .zip(&section_nodes)
        .map(|(spec, node)| (spec.id.clone(), read_rect(*node)))
        .collect();
    let footer = read_rect(footer_node);
    let content_height = match tree.layout(root) {
        Ok(layout) => layout.size.height.round() as u16,
        Err(_) => 0,
    };

    PageLayout {
        hero,
        sections,
        footer,
        content_height,
        width,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> PageMetrics {
        PageMetrics {
            content_width: 40,
            top_padding: 2,
            hero_height: 5,
            section_gap: 3,
            footer_height: 2,
        }
    }

    fn specs() -> Vec<SectionSpec> {
        vec![
            SectionSpec {
                id: SectionId::new("about"),
                height: 10,
            },
            SectionSpec {
                id: SectionId::new("projects"),
                height: 20,
            },
        ]
    }

    #[test]
    fn test_string_width() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
        // CJK cells are double width.
        assert_eq!(string_width("日本"), 4);
    }

    #[test]
    fn test_wrap_text_basic() {
        let lines = wrap_text("the quick brown fox jumps", 10);
        assert_eq!(lines, ["the quick", "brown fox", "jumps"]);
        for line in &lines {
            assert!(string_width(line) <= 10);
        }
    }

    #[test]
    fn test_wrap_text_long_word() {
        let lines = wrap_text("a extraordinarily b", 6);
        assert_eq!(lines, ["a", "extraordinarily", "b"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), [""]);
        assert_eq!(wrap_text("x", 0), [""]);
    }

    #[test]
    fn test_layout_stacks_in_order() {
        let layout = compute_page_layout(&specs(), &metrics());

        let hero = layout.hero();
        let about = layout.rect_of(&SectionId::new("about")).unwrap();
        let projects = layout.rect_of(&SectionId::new("projects")).unwrap();
        let footer = layout.footer();

        // Top padding, then hero, then sections with gaps.
        assert_eq!(hero.y, 2);
        assert_eq!(about.y, 2 + 5 + 3);
        assert_eq!(projects.y, about.bottom() as u16 + 3);
        assert_eq!(footer.y, projects.bottom() as u16 + 3);

        // Heights are the measured specs.
        assert_eq!(about.height, 10);
        assert_eq!(projects.height, 20);

        // Total height covers the last block.
        assert_eq!(layout.content_height() as u32, footer.bottom());
    }

    #[test]
    fn test_rects_are_disjoint() {
        let layout = compute_page_layout(&specs(), &metrics());
        let rects: Vec<Rect> =
            layout.sections().iter().map(|(_, rect)| *rect).collect();

        for pair in rects.windows(2) {
            assert!(pair[0].bottom() <= pair[1].y as u32);
        }
    }

    #[test]
    fn test_rect_of_unknown_id() {
        let layout = compute_page_layout(&specs(), &metrics());
        assert_eq!(layout.rect_of(&SectionId::new("missing")), None);
    }

    #[test]
    fn test_registrations_resolve_bounds() {
        let layout = Rc::new(compute_page_layout(&specs(), &metrics()));
        let registrations = PageLayout::registrations(&layout);

        assert_eq!(registrations.len(), 2);
        for registration in &registrations {
            let resolved = (registration.bounds)();
            assert_eq!(resolved, layout.rect_of(&registration.id));
            assert!(resolved.is_some());
        }
    }

    #[test]
    fn test_max_scroll() {
        let layout = compute_page_layout(&specs(), &metrics());
        let height = layout.content_height();

        assert_eq!(layout.max_scroll(height), 0);
        assert_eq!(layout.max_scroll(height + 10), 0);
        assert_eq!(layout.max_scroll(10), height - 10);
    }
}
