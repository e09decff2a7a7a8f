use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::modules::content::application::domain::{Content, ContentCard, ContentKind};
use crate::shared::validation::{ListRule, PayloadReader, TextRule, ValidationErrors};

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("slug pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub tags: Vec<String>,
    pub published_at: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogInput {
    pub title: String,
    /// Lowercase letters, digits and dashes.
    pub slug: String,
    pub content: String,
    pub tags: Vec<String>,
    pub published_at: NaiveDate,
}

const TAGS: ListRule = ListRule {
    label: "Tags",
    empty_message: "At least one tag is required",
    blank_item_message: Some("Tag cannot be empty"),
};

impl Content for Blog {
    type Input = BlogInput;

    const KIND: ContentKind = ContentKind::Blog;

    fn validate(payload: &Value) -> Result<BlogInput, ValidationErrors> {
        let mut reader = PayloadReader::new(payload);

        let title = reader.required_text("title", TextRule::new("Title", 3, None));
        let slug = reader.required_text("slug", TextRule::new("Slug", 3, None));
        if let Some(slug) = &slug {
            reader.check(
                "slug",
                SLUG_PATTERN.is_match(slug),
                "Slug can only contain lowercase letters, numbers, and dashes",
            );
        }
        let content = reader.required_text("content", TextRule::new("Content", 10, None));
        let tags = reader.string_list("tags", TAGS);
        let published_at = reader.required_date("publishedAt", "Invalid date format");

        reader.finish()?;

        let (Some(title), Some(slug), Some(content), Some(tags), Some(published_at)) =
            (title, slug, content, tags, published_at)
        else {
            return Err(ValidationErrors::single("payload", "Incomplete blog"));
        };

        Ok(BlogInput {
            title,
            slug,
            content,
            tags,
            published_at,
        })
    }

    fn id(&self) -> i32 {
        self.id
    }

    fn card(&self) -> ContentCard {
        ContentCard {
            id: self.id,
            title: self.title.clone(),
            subtitle: Some(format!("/{}", self.slug)),
            summary: Some(self.tags.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> Value {
        json!({
            "title": "Hello Rust",
            "slug": "hello-rust-2024",
            "content": "A first post about Rust.",
            "tags": ["rust", "intro"],
            "publishedAt": "2024-05-01"
        })
    }

    #[test]
    fn validate_accepts_blog() {
        let input = Blog::validate(&payload()).unwrap();

        assert_eq!(input.slug, "hello-rust-2024");
        assert_eq!(input.tags, vec!["rust", "intro"]);
        assert_eq!(input.published_at, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn validate_rejects_slug_with_spaces() {
        let mut body = payload();
        body["slug"] = json!("Has Spaces!");

        let errors = Blog::validate(&body).unwrap_err();
        assert_eq!(errors.errors().len(), 1);
        assert_eq!(errors.errors()[0].field, "slug");
        assert_eq!(
            errors.errors()[0].message,
            "Slug can only contain lowercase letters, numbers, and dashes"
        );
    }

    #[test]
    fn validate_enforces_minimum_lengths() {
        let errors = Blog::validate(&json!({
            "title": "Hi",
            "slug": "ab",
            "content": "short",
            "tags": [""],
            "publishedAt": "someday"
        }))
        .unwrap_err();

        let messages: Vec<_> = errors.errors().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Title must be at least 3 characters long",
                "Slug must be at least 3 characters long",
                "Content must be at least 10 characters long",
                "Tag cannot be empty",
                "Invalid date format",
            ]
        );
    }

    #[test]
    fn validate_allows_future_publication_date() {
        let mut body = payload();
        body["publishedAt"] = json!("2999-01-01");

        assert!(Blog::validate(&body).is_ok());
    }
}
