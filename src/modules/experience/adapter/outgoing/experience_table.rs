use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::Set;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::content::adapter::outgoing::content_table::{
    created_at_value, id_value, parse_column, ContentTable,
};
use crate::modules::content::application::ports::outgoing::ContentRepositoryError;
use crate::modules::experience::{Experience, ExperienceInput};

impl ContentTable for Experience {
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
        input: ExperienceInput,
        now: DateTimeWithTimeZone,
    ) -> Result<ActiveModel, ContentRepositoryError> {
        Ok(ActiveModel {
            id: id_value(id),
            title: Set(input.title),
            company: Set(input.company),
            kind: Set(input.kind.as_str().to_string()),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            description: Set(input.description),
            created_at: created_at_value(id, now),
            updated_at: Set(now),
        })
    }

    fn from_model(model: Model) -> Result<Self, ContentRepositoryError> {
        Ok(Experience {
            id: model.id,
            title: model.title,
            company: model.company,
            kind: parse_column("type", &model.kind)?,
            start_date: model.start_date,
            end_date: model.end_date,
            description: model.description,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}
