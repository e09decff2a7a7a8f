use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::Set;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::content::adapter::outgoing::content_table::{
    created_at_value, id_value, parse_column, ContentTable,
};
use crate::modules::content::application::ports::outgoing::ContentRepositoryError;
use crate::modules::skill::{Skill, SkillInput};

impl ContentTable for Skill {
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
        input: SkillInput,
        now: DateTimeWithTimeZone,
    ) -> Result<ActiveModel, ContentRepositoryError> {
        Ok(ActiveModel {
            id: id_value(id),
            name: Set(input.name),
            level: Set(input.level.as_str().to_string()),
            category: Set(input.category.as_str().to_string()),
            years: Set(input.years),
            icon_url: Set(input.icon_url),
            description: Set(input.description),
            created_at: created_at_value(id, now),
            updated_at: Set(now),
        })
    }

    fn from_model(model: Model) -> Result<Self, ContentRepositoryError> {
        Ok(Skill {
            id: model.id,
            name: model.name,
            level: parse_column("level", &model.level)?,
            category: parse_column("category", &model.category)?,
            years: model.years,
            icon_url: model.icon_url,
            description: model.description,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}
