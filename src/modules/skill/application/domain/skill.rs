use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::modules::content::application::domain::{Content, ContentCard, ContentKind};
use crate::shared::validation::{PayloadReader, TextRule, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "BEGINNER",
            SkillLevel::Intermediate => "INTERMEDIATE",
            SkillLevel::Advanced => "ADVANCED",
            SkillLevel::Expert => "EXPERT",
        }
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BEGINNER" => Ok(SkillLevel::Beginner),
            "INTERMEDIATE" => Ok(SkillLevel::Intermediate),
            "ADVANCED" => Ok(SkillLevel::Advanced),
            "EXPERT" => Ok(SkillLevel::Expert),
            _ => Err(format!("unknown skill level: {}", s)),
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Devops,
    Mobile,
    Other,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "FRONTEND",
            SkillCategory::Backend => "BACKEND",
            SkillCategory::Database => "DATABASE",
            SkillCategory::Devops => "DEVOPS",
            SkillCategory::Mobile => "MOBILE",
            SkillCategory::Other => "OTHER",
        }
    }
}

impl FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FRONTEND" => Ok(SkillCategory::Frontend),
            "BACKEND" => Ok(SkillCategory::Backend),
            "DATABASE" => Ok(SkillCategory::Database),
            "DEVOPS" => Ok(SkillCategory::Devops),
            "MOBILE" => Ok(SkillCategory::Mobile),
            "OTHER" => Ok(SkillCategory::Other),
            _ => Err(format!("unknown skill category: {}", s)),
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: i32,
    pub name: String,
    pub level: SkillLevel,
    pub category: SkillCategory,
    pub years: Option<i32>,
    pub icon_url: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillInput {
    pub name: String,
    pub level: SkillLevel,
    pub category: SkillCategory,
    /// Whole years, 0 to 50.
    pub years: Option<i32>,
    pub icon_url: Option<String>,
    pub description: Option<String>,
}

impl Content for Skill {
    type Input = SkillInput;

    const KIND: ContentKind = ContentKind::Skill;

    fn validate(payload: &Value) -> Result<SkillInput, ValidationErrors> {
        let mut reader = PayloadReader::new(payload);

        let name = reader.required_text("name", TextRule::new("Skill name", 1, Some(200)));
        let level = reader.required_enum("level", "Invalid level type");
        let category = reader.required_enum("category", "Invalid category type");
        let years = reader.optional_integer(
            "years",
            0..=50,
            "Years must be an integer between 0 and 50",
        );
        let icon_url = reader.optional_text("iconUrl", TextRule::new("URL", 0, Some(1000)));
        let description =
            reader.optional_text("description", TextRule::new("Description", 0, Some(1000)));

        reader.finish()?;

        let (Some(name), Some(level), Some(category)) = (name, level, category) else {
            return Err(ValidationErrors::single("payload", "Incomplete skill"));
        };

        Ok(SkillInput {
            name,
            level,
            category,
            years,
            icon_url,
            description,
        })
    }

    fn id(&self) -> i32 {
        self.id
    }

    fn card(&self) -> ContentCard {
        let summary = match (&self.description, self.years) {
            (Some(description), _) => Some(description.clone()),
            (None, Some(1)) => Some("1 year".to_string()),
            (None, Some(years)) => Some(format!("{} years", years)),
            (None, None) => None,
        };

        ContentCard {
            id: self.id,
            title: self.name.clone(),
            subtitle: Some(format!("{} / {}", self.level, self.category)),
            summary,
        }
    }
}
