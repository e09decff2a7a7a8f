use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::Set;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::content::adapter::outgoing::content_table::{
    created_at_value, from_json, id_value, to_json, ContentTable,
};
use crate::modules::content::application::ports::outgoing::ContentRepositoryError;
use crate::modules::project::{Project, ProjectInput};

impl ContentTable for Project {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn id_column() -> Column {
        Column::Id
    }

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn to_active_model(
        id: Option<i32>,
        input: ProjectInput,
        now: DateTimeWithTimeZone,
    ) -> Result<ActiveModel, ContentRepositoryError> {
        Ok(ActiveModel {
            id: id_value(id),
            title: Set(input.title),
            description: Set(input.description),
            url: Set(input.url),
            repo_url: Set(input.repo_url),
            technologies: Set(to_json(&input.technologies)?),
            created_at: created_at_value(id, now),
            updated_at: Set(now),
        })
    }

    fn from_model(model: Model) -> Result<Self, ContentRepositoryError> {
        Ok(Project {
            id: model.id,
            title: model.title,
            description: model.description,
            url: model.url,
            repo_url: model.repo_url,
            technologies: from_json(&model.technologies)?,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}
