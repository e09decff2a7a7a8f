use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::modules::content::application::domain::{Content, ContentCard, ContentKind};
use crate::shared::validation::{PayloadReader, TextRule, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExperienceType {
    FullTime,
    PartTime,
    Freelance,
    Internship,
}

impl ExperienceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceType::FullTime => "FULLTIME",
            ExperienceType::PartTime => "PARTTIME",
            ExperienceType::Freelance => "FREELANCE",
            ExperienceType::Internship => "INTERNSHIP",
        }
    }
}

impl FromStr for ExperienceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FULLTIME" => Ok(ExperienceType::FullTime),
            "PARTTIME" => Ok(ExperienceType::PartTime),
            "FREELANCE" => Ok(ExperienceType::Freelance),
            "INTERNSHIP" => Ok(ExperienceType::Internship),
            _ => Err(format!("unknown experience type: {}", s)),
        }
    }
}

impl fmt::Display for ExperienceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: i32,
    pub title: String,
    pub company: String,
    #[serde(rename = "type")]
    pub kind: ExperienceType,
    pub start_date: NaiveDate,
    /// `None` while the position is current.
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `end_date` is not checked against `start_date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceInput {
    pub title: String,
    pub company: String,
    pub kind: ExperienceType,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl Content for Experience {
    type Input = ExperienceInput;

    const KIND: ContentKind = ContentKind::Experience;

    fn validate(payload: &Value) -> Result<ExperienceInput, ValidationErrors> {
        let mut reader = PayloadReader::new(payload);

        let title = reader.required_text("title", TextRule::new("Title", 1, Some(200)));
        let company = reader.required_text("company", TextRule::new("Company", 1, Some(200)));
        let kind = reader.required_enum("type", "Invalid experience type");
        let start_date = reader.required_date("startDate", "Invalid start date");
        let end_date = reader.optional_date("endDate", "Invalid end date");
        let description =
            reader.optional_text("description", TextRule::new("Description", 0, Some(1000)));

        reader.finish()?;

        let (Some(title), Some(company), Some(kind), Some(start_date)) =
            (title, company, kind, start_date)
        else {
            return Err(ValidationErrors::single("payload", "Incomplete experience"));
        };

        Ok(ExperienceInput {
            title,
            company,
            kind,
            start_date,
            end_date,
            description,
        })
    }

    fn id(&self) -> i32 {
        self.id
    }

    fn card(&self) -> ContentCard {
        let until = self
            .end_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "present".to_string());

        ContentCard {
            id: self.id,
            title: self.title.clone(),
            subtitle: Some(format!("{} ({})", self.company, self.kind)),
            summary: Some(format!("{} to {}", self.start_date, until)),
        }
    }
}
