use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::Set;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::blog::{Blog, BlogInput};
use crate::modules::content::adapter::outgoing::content_table::{
    created_at_value, from_json, id_value, to_json, ContentTable,
};
use crate::modules::content::application::ports::outgoing::ContentRepositoryError;

impl ContentTable for Blog {
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
        input: BlogInput,
        now: DateTimeWithTimeZone,
    ) -> Result<ActiveModel, ContentRepositoryError> {
        Ok(ActiveModel {
            id: id_value(id),
            title: Set(input.title),
            slug: Set(input.slug),
            content: Set(input.content),
            tags: Set(to_json(&input.tags)?),
            published_at: Set(input.published_at),
            created_at: created_at_value(id, now),
            updated_at: Set(now),
        })
    }

    fn from_model(model: Model) -> Result<Self, ContentRepositoryError> {
        Ok(Blog {
            id: model.id,
            title: model.title,
            slug: model.slug,
            content: model.content,
            tags: from_json(&model.tags)?,
            published_at: model.published_at,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}
