use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::modules::content::application::domain::{Content, ContentCard, ContentKind};
use crate::shared::validation::{parse_instant, PayloadReader, TextRule, ValidationErrors};

const PUBLISHED_AT_MESSAGE: &str = "Invalid date format or date cannot be in the future";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: i32,
    pub title: String,
    pub journal: String,
    pub published_at: NaiveDate,
    pub url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationInput {
    pub title: String,
    pub journal: String,
    /// Not in the future at validation time.
    pub published_at: NaiveDate,
    pub url: Option<String>,
}

impl Content for Publication {
    type Input = PublicationInput;

    const KIND: ContentKind = ContentKind::Publication;

    fn validate(payload: &Value) -> Result<PublicationInput, ValidationErrors> {
        let mut reader = PayloadReader::new(payload);

        let title = reader.required_text("title", TextRule::new("Title", 1, Some(200)));
        let journal = reader.required_text("journal", TextRule::new("Journal name", 1, Some(200)));
        let published_at = reader.required_date("publishedAt", PUBLISHED_AT_MESSAGE);
        if let Some(date) = published_at {
            // A value with a time is compared as an instant, a plain date by calendar day.
            let instant = payload
                .get("publishedAt")
                .and_then(Value::as_str)
                .and_then(parse_instant);
            let not_future = match instant {
                Some(instant) => instant <= Utc::now(),
                None => date <= Utc::now().date_naive(),
            };
            reader.check("publishedAt", not_future, PUBLISHED_AT_MESSAGE);
        }
        let url = reader.optional_url("url", 1000, "Invalid URL format");

        reader.finish()?;

        let (Some(title), Some(journal), Some(published_at)) = (title, journal, published_at)
        else {
            return Err(ValidationErrors::single("payload", "Incomplete publication"));
        };

        Ok(PublicationInput {
            title,
            journal,
            published_at,
            url,
        })
    }

    fn id(&self) -> i32 {
        self.id
    }

    fn card(&self) -> ContentCard {
        ContentCard {
            id: self.id,
            title: self.title.clone(),
            subtitle: Some(self.journal.clone()),
            summary: Some(self.published_at.to_string()),
        }
    }
}
