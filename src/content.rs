//! Static page content - the human-authored data the core consumes.
//!
//! These records define *what the page says*, not how it behaves. The core
//! forwards them to the renderer unmodified; nothing in here participates in
//! the reveal state machine. A profile can be authored as JSON and loaded
//! with [`ProfileContent::from_json`].

use serde::{Deserialize, Serialize};

use crate::types::SectionId;

// =============================================================================
// Section kinds
// =============================================================================

/// The sections a profile page is built from, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    About,
    Projects,
    Experience,
    Skills,
    Contact,
}

impl SectionKind {
    /// All sections in page order.
    pub const fn all() -> &'static [SectionKind] {
        &[
            Self::About,
            Self::Projects,
            Self::Experience,
            Self::Skills,
            Self::Contact,
        ]
    }

    /// Stable name, used as the section's registration id.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    /// The registration id for this section.
    pub fn id(self) -> SectionId {
        SectionId::new(self.as_str())
    }

    /// Section heading as displayed.
    pub const fn heading(self) -> &'static str {
        match self {
            Self::About => "About Me",
            Self::Projects => "Projects",
            Self::Experience => "Experience & Leadership",
            Self::Skills => "Technical Skills",
            Self::Contact => "Get In Touch",
        }
    }
}

// =============================================================================
// Content records
// =============================================================================

/// Identity and prose for the hero, about, and footer blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub summary: String,
    pub about: Vec<String>,
    pub contact_note: String,
    pub footer: String,
}

/// One project card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub tech: Vec<String>,
    pub description: String,
    pub repository: String,
    pub demo: String,
}

/// One skill category card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

/// One experience entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub organization: String,
    pub period: String,
    pub highlights: Vec<String>,
}

/// One outbound contact link. The target is an opaque string (mail address
/// or profile URL) the core never inspects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub target: String,
}

/// Everything the renderer needs to draw a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileContent {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub skills: Vec<SkillCategory>,
    pub contact: Vec<ContactLink>,
}

impl ProfileContent {
    /// Parse a profile from its JSON source.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// A small self-contained profile for demos and tests.
    pub fn sample() -> Self {
        Self {
            profile: Profile {
                name: "Robin Vasek".to_string(),
                tagline: "Systems • Terminals • Interfaces".to_string(),
                summary: "Building quiet tools that stay out of the way."
                    .to_string(),
                about: vec![
                    "I write software for terminals and the people who live in \
                     them, with a focus on responsive interfaces and honest \
                     state machines."
                        .to_string(),
                    "Away from the keyboard I restore old synthesizers, which \
                     turns out to be the same hobby."
                        .to_string(),
                ],
                contact_note: "Always happy to talk about terminals, tooling, \
                               or an interesting problem."
                    .to_string(),
                footer: "© 2025 Robin Vasek. Rendered with vitrine."
                    .to_string(),
            },
            projects: vec![
                Project {
                    title: "driftwood".to_string(),
                    tech: vec!["Rust".to_string(), "crossterm".to_string()],
                    description: "A log viewer that follows rotating files \
                                  without losing its place."
                        .to_string(),
                    repository: "https://github.com/rvasek/driftwood"
                        .to_string(),
                    demo: "#".to_string(),
                },
                Project {
                    title: "hushd".to_string(),
                    tech: vec!["Rust".to_string(), "serde".to_string()],
                    description: "A tiny notification daemon with do-not-disturb \
                                  windows defined as data."
                        .to_string(),
                    repository: "https://github.com/rvasek/hushd".to_string(),
                    demo: "#".to_string(),
                },
            ],
            experience: vec![Experience {
                role: "Tools Engineer".to_string(),
                organization: "Independent".to_string(),
                period: "2021 – Present".to_string(),
                highlights: vec![
                    "Maintains a family of terminal utilities used daily by a \
                     few thousand developers."
                        .to_string(),
                    "Mentors contributors through their first systems-level \
                     patches."
                        .to_string(),
                ],
            }],
            skills: vec![
                SkillCategory {
                    category: "Languages".to_string(),
                    skills: vec![
                        "Rust".to_string(),
                        "C".to_string(),
                        "Shell".to_string(),
                    ],
                },
                SkillCategory {
                    category: "Interests".to_string(),
                    skills: vec![
                        "TUIs".to_string(),
                        "Reactive state".to_string(),
                        "Text layout".to_string(),
                    ],
                },
            ],
            contact: vec![
                ContactLink {
                    label: "Email".to_string(),
                    target: "mailto:robin@vasek.dev".to_string(),
                },
                ContactLink {
                    label: "GitHub".to_string(),
                    target: "https://github.com/rvasek".to_string(),
                },
            ],
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
