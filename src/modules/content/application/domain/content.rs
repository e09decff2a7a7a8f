use std::fmt::Debug;

use serde::Serialize;
use serde_json::Value;

use crate::shared::validation::ValidationErrors;

//
// ──────────────────────────────────────────────────────────
// ContentKind
// ──────────────────────────────────────────────────────────
//

/// The five content types managed through the CRUD surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Skill,
    Experience,
    Project,
    Publication,
    Blog,
}

impl ContentKind {
    pub const ALL: [ContentKind; 5] = [
        ContentKind::Skill,
        ContentKind::Experience,
        ContentKind::Project,
        ContentKind::Publication,
        ContentKind::Blog,
    ];

    /// Envelope key for a single record.
    pub fn singular(&self) -> &'static str {
        match self {
            ContentKind::Skill => "skill",
            ContentKind::Experience => "experience",
            ContentKind::Project => "project",
            ContentKind::Publication => "publication",
            ContentKind::Blog => "blog",
        }
    }

    /// Envelope key for a list and the URL segment of the resource.
    pub fn plural(&self) -> &'static str {
        match self {
            ContentKind::Skill => "skills",
            ContentKind::Experience => "experiences",
            ContentKind::Project => "projects",
            ContentKind::Publication => "publications",
            ContentKind::Blog => "blogs",
        }
    }

    /// Capitalized name used in human-readable messages.
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Skill => "Skill",
            ContentKind::Experience => "Experience",
            ContentKind::Project => "Project",
            ContentKind::Publication => "Publication",
            ContentKind::Blog => "Blog",
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// ContentCard
// ──────────────────────────────────────────────────────────
//

/// Compact summary rendered by the admin list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentCard {
    pub id: i32,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Content
// ──────────────────────────────────────────────────────────
//

/// A stored content record.
///
/// `Input` is the already-validated payload for create and replace. It is
/// only ever produced by [`Content::validate`], so everything past the HTTP
/// boundary can trust it.
pub trait Content: Serialize + Clone + Debug + Send + Sync + 'static {
    type Input: Clone + Debug + Send + Sync + 'static;

    const KIND: ContentKind;

    fn validate(payload: &Value) -> Result<Self::Input, ValidationErrors>;

    fn id(&self) -> i32;

    fn card(&self) -> ContentCard;
}
