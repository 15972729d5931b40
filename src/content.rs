//! Static page content, embedded at build time and checked on load.

use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

const EMBEDDED_CONTENT: &str = include_str!("../content/portfolio.json");

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("internship id `{id}` is used more than once")]
    DuplicateInternship { id: String },

    #[error("only one internship may be current, found {count}")]
    MultipleCurrent { count: usize },

    #[error("the landing typewriter needs at least one role")]
    NoRoles,
}

pub type Result<T> = std::result::Result<T, ContentError>;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: About,
    pub internships: Vec<Internship>,
    pub skill_categories: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub designs: Vec<DesignShowcase>,
    pub contact: Contact,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub photo: String,
    pub roles: Vec<String>,
    pub tagline: Vec<String>,
    pub resume: ResumeAsset,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResumeAsset {
    pub href: String,
    pub file_name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct About {
    pub stats: Vec<Stat>,
    pub paragraphs: Vec<Paragraph>,
    pub highlights: Vec<Highlight>,
    pub expertise: Vec<ExpertiseArea>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Stat {
    pub icon: Icon,
    /// Count-up target such as `"50+"`.
    pub number: String,
    pub label: String,
}

/// Paragraph with a single emphasised phrase.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Paragraph {
    pub lead: String,
    pub emphasis: String,
    pub rest: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Highlight {
    pub icon: Icon,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExpertiseArea {
    pub icon: Icon,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Internship {
    pub id: String,
    pub company: String,
    pub role: String,
    /// `dd/mm/yyyy - dd/mm/yyyy` or `dd/mm/yyyy - Present`.
    pub period: String,
    #[serde(default)]
    pub is_current: bool,
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub icon: Icon,
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub image: String,
    pub code_url: String,
    pub demo_url: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DesignShowcase {
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub portfolio_url: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub blurb: String,
    pub links: Vec<SocialLink>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: String,
    pub url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Email,
    Github,
    Linkedin,
}

impl SocialKind {
    /// Mail links open in the mail client rather than a new tab.
    pub fn opens_new_tab(self) -> bool {
        !matches!(self, Self::Email)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Brain,
    Code,
    Database,
    Sparkles,
    Zap,
    Layers,
    Message,
    Eye,
    Languages,
    Target,
    Rocket,
    Trending,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Brain => "🧠",
            Self::Code => "</>",
            Self::Database => "🗄",
            Self::Sparkles => "✦",
            Self::Zap => "⚡",
            Self::Layers => "▤",
            Self::Message => "💬",
            Self::Eye => "👁",
            Self::Languages => "文",
            Self::Target => "◎",
            Self::Rocket => "🚀",
            Self::Trending => "↗",
        }
    }
}

impl Portfolio {
    /// Parses and validates the content bundled with the site.
    pub fn load() -> Result<Self> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let portfolio: Portfolio = serde_json::from_str(raw)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<()> {
        if self.profile.roles.is_empty() {
            return Err(ContentError::NoRoles);
        }

        let mut seen = HashSet::new();
        for internship in &self.internships {
            if !seen.insert(internship.id.as_str()) {
                return Err(ContentError::DuplicateInternship {
                    id: internship.id.clone(),
                });
            }
        }

        let current = self
            .internships
            .iter()
            .filter(|internship| internship.is_current)
            .count();
        if current > 1 {
            return Err(ContentError::MultipleCurrent { count: current });
        }

        Ok(())
    }
}
