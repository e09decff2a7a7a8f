use chrono::NaiveDate;

use crate::modules::blog::BlogInput;
use crate::modules::experience::{ExperienceInput, ExperienceType};
use crate::modules::project::ProjectInput;
use crate::modules::publication::PublicationInput;
use crate::modules::skill::{SkillCategory, SkillInput, SkillLevel};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn skill_input(name: &str) -> SkillInput {
    SkillInput {
        name: name.to_string(),
        level: SkillLevel::Intermediate,
        category: SkillCategory::Backend,
        years: Some(3),
        icon_url: None,
        description: Some(format!("Production work with {}", name)),
    }
}

pub fn experience_input(title: &str) -> ExperienceInput {
    ExperienceInput {
        title: title.to_string(),
        company: "Acme".to_string(),
        kind: ExperienceType::FullTime,
        start_date: date(2021, 3, 1),
        end_date: None,
        description: None,
    }
}

pub fn project_input(title: &str) -> ProjectInput {
    ProjectInput {
        title: title.to_string(),
        description: Some("A small tool".to_string()),
        url: None,
        repo_url: Some("https://github.com/acme/tool".to_string()),
        technologies: vec!["rust".to_string(), "postgres".to_string()],
    }
}

pub fn publication_input(title: &str) -> PublicationInput {
    PublicationInput {
        title: title.to_string(),
        journal: "Journal of Systems".to_string(),
        published_at: date(2023, 6, 15),
        url: None,
    }
}

pub fn blog_input(slug: &str) -> BlogInput {
    BlogInput {
        title: "Hello".to_string(),
        slug: slug.to_string(),
        content: "Long enough content".to_string(),
        tags: vec!["rust".to_string(), "web".to_string()],
        published_at: date(2024, 1, 10),
    }
}
