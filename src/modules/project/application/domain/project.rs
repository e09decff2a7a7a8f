use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::modules::content::application::domain::{Content, ContentCard, ContentKind};
use crate::shared::validation::{ListRule, PayloadReader, TextRule, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub repo_url: Option<String>,
    pub technologies: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInput {
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub repo_url: Option<String>,
    /// Never empty.
    pub technologies: Vec<String>,
}

const TECHNOLOGIES: ListRule = ListRule {
    label: "Technologies",
    empty_message: "At least one technology is required",
    blank_item_message: None,
};

impl Content for Project {
    type Input = ProjectInput;

    const KIND: ContentKind = ContentKind::Project;

    fn validate(payload: &Value) -> Result<ProjectInput, ValidationErrors> {
        let mut reader = PayloadReader::new(payload);

        let title = reader.required_text("title", TextRule::new("Title", 1, Some(200)));
        let description =
            reader.optional_text("description", TextRule::new("Description", 0, None));
        let url = reader.optional_text("url", TextRule::new("URL", 0, None));
        let repo_url = reader.optional_text("repoUrl", TextRule::new("Repository URL", 0, None));
        let technologies = reader.string_list("technologies", TECHNOLOGIES);

        reader.finish()?;

        let (Some(title), Some(technologies)) = (title, technologies) else {
            return Err(ValidationErrors::single("payload", "Incomplete project"));
        };

        Ok(ProjectInput {
            title,
            description,
            url,
            repo_url,
            technologies,
        })
    }

    fn id(&self) -> i32 {
        self.id
    }

    fn card(&self) -> ContentCard {
        ContentCard {
            id: self.id,
            title: self.title.clone(),
            subtitle: Some(self.technologies.join(", ")),
            summary: self.description.clone(),
        }
    }
}
