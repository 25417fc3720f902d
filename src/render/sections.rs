//! Section builders - content records to semantic lines.
//!
//! Builders are state-free: the same content and width always produce the
//! same lines, whether or not the section has entered. The reveal gate in
//! [`super::render_page`] decides if those lines are shown; the layout
//! module counts them to size each section's slot. Keeping both callers on
//! one builder is what keeps blank (pre-entrance) sections exactly as tall
//! as entered ones.

use crate::content::{
    ContactLink, Experience, Profile, ProfileContent, Project, SectionKind,
    SkillCategory,
};
use crate::layout::{string_width, wrap_text};
use crate::types::Rect;

use super::{Line, Span, TextRole, TextStyle};

/// Rows of chrome above every section body: rule, blank, heading, blank.
pub const SECTION_CHROME_ROWS: u16 = 4;

/// A built section: its rows plus the interactive regions inside it, as
/// rects relative to the section's own origin. Only project cards and
/// contact links are interactive.
pub struct SectionRender {
    pub lines: Vec<Line>,
    pub interactive: Vec<Rect>,
}

// =============================================================================
// Hero
// =============================================================================

/// The hero block: name, tagline, summary. Not a revealed section: it
/// fades in on load, so it renders unconditionally.
pub fn hero_lines(profile: &Profile, width: u16) -> Vec<Line> {
    let mut lines = vec![
        Line::styled(profile.name.clone(), TextRole::Heading, TextStyle::BOLD),
        Line::empty(),
        Line::plain(profile.tagline.clone(), TextRole::Muted),
        Line::empty(),
    ];
    for wrapped in wrap_text(&profile.summary, width) {
        lines.push(Line::plain(wrapped, TextRole::Dim));
    }
    lines
}

// =============================================================================
// Sections
// =============================================================================

/// Build one section's rows and interactive regions.
pub fn build_section(
    content: &ProfileContent,
    kind: SectionKind,
    width: u16,
) -> SectionRender {
    let mut lines = chrome(kind, width);
    let mut interactive = Vec::new();

    match kind {
        SectionKind::About => about_body(&content.profile, width, &mut lines),
        SectionKind::Projects => {
            projects_body(&content.projects, width, &mut lines, &mut interactive)
        }
        SectionKind::Experience => {
            experience_body(&content.experience, width, &mut lines)
        }
        SectionKind::Skills => skills_body(&content.skills, width, &mut lines),
        SectionKind::Contact => contact_body(
            &content.profile,
            &content.contact,
            width,
            &mut lines,
            &mut interactive,
        ),
    }

    SectionRender { lines, interactive }
}

fn chrome(kind: SectionKind, width: u16) -> Vec<Line> {
    vec![
        Line::plain("─".repeat(width as usize), TextRole::Rule),
        Line::empty(),
        Line::styled(kind.heading(), TextRole::Heading, TextStyle::BOLD),
        Line::empty(),
    ]
}

fn about_body(profile: &Profile, width: u16, lines: &mut Vec<Line>) {
    for (index, paragraph) in profile.about.iter().enumerate() {
        if index > 0 {
            lines.push(Line::empty());
        }
        for wrapped in wrap_text(paragraph, width) {
            lines.push(Line::plain(wrapped, TextRole::Body));
        }
    }
}

fn projects_body(
    projects: &[Project],
    width: u16,
    lines: &mut Vec<Line>,
    interactive: &mut Vec<Rect>,
) {
    for (index, project) in projects.iter().enumerate() {
        if index > 0 {
            lines.push(Line::empty());
        }

        let card_top = lines.len() as u16;
        lines.push(Line::styled(
            project.title.clone(),
            TextRole::Heading,
            TextStyle::BOLD,
        ));
        lines.push(Line::plain(project.tech.join(" · "), TextRole::Chip));
        for wrapped in wrap_text(&project.description, width) {
            lines.push(Line::plain(wrapped, TextRole::Body));
        }
        lines.push(Line {
            spans: vec![
                Span::new("Code ↗", TextRole::Link, TextStyle::UNDERLINE),
                Span::new("   ", TextRole::Body, TextStyle::empty()),
                Span::new("Demo ↗", TextRole::Link, TextStyle::UNDERLINE),
            ],
        });

        let card_height = lines.len() as u16 - card_top;
        interactive.push(Rect::new(0, card_top, width, card_height));
    }
}

fn experience_body(entries: &[Experience], width: u16, lines: &mut Vec<Line>) {
    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            lines.push(Line::empty());
        }

        lines.push(Line::styled(
            entry.role.clone(),
            TextRole::Heading,
            TextStyle::BOLD,
        ));
        lines.push(Line::plain(
            format!("{} • {}", entry.organization, entry.period),
            TextRole::Muted,
        ));
        lines.push(Line::empty());
        for highlight in &entry.highlights {
            let wrapped = wrap_text(highlight, width.saturating_sub(2));
            for (row, text) in wrapped.into_iter().enumerate() {
                let prefix = if row == 0 { "• " } else { "  " };
                lines.push(Line::plain(
                    format!("{prefix}{text}"),
                    TextRole::Body,
                ));
            }
        }
    }
}

fn skills_body(categories: &[SkillCategory], width: u16, lines: &mut Vec<Line>) {
    for (index, category) in categories.iter().enumerate() {
        if index > 0 {
            lines.push(Line::empty());
        }

        lines.push(Line::styled(
            category.category.to_uppercase(),
            TextRole::Muted,
            TextStyle::BOLD,
        ));
        lines.push(Line::plain(
            "─".repeat((width / 3) as usize),
            TextRole::Rule,
        ));
        lines.push(Line::plain(category.skills.join("  ·  "), TextRole::Chip));
    }
}

fn contact_body(
    profile: &Profile,
    links: &[ContactLink],
    width: u16,
    lines: &mut Vec<Line>,
    interactive: &mut Vec<Rect>,
) {
    for wrapped in wrap_text(&profile.contact_note, width) {
        lines.push(Line::plain(wrapped, TextRole::Body));
    }
    lines.push(Line::empty());

    // All links share one row; each label is its own hover region.
    let row = lines.len() as u16;
    let mut spans = Vec::new();
    let mut x = 0u16;
    for (index, link) in links.iter().enumerate() {
        if index > 0 {
            spans.push(Span::new("   ", TextRole::Body, TextStyle::empty()));
            x += 3;
        }
        let label = format!("[ {} ]", link.label);
        let label_width = string_width(&label);
        interactive.push(Rect::new(x, row, label_width, 1));
        spans.push(Span::new(label, TextRole::Link, TextStyle::UNDERLINE));
        x += label_width;
    }
    lines.push(Line { spans });
}

// =============================================================================
// Tests
// =============================================================================
