use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::Set;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::content::adapter::outgoing::content_table::{
    created_at_value, id_value, ContentTable,
};
use crate::modules::content::application::ports::outgoing::ContentRepositoryError;
use crate::modules::publication::{Publication, PublicationInput};

impl ContentTable for Publication {
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
        input: PublicationInput,
        now: DateTimeWithTimeZone,
    ) -> Result<ActiveModel, ContentRepositoryError> {
        Ok(ActiveModel {
            id: id_value(id),
            title: Set(input.title),
            journal: Set(input.journal),
            published_at: Set(input.published_at),
            url: Set(input.url),
            created_at: created_at_value(id, now),
            updated_at: Set(now),
        })
    }

    fn from_model(model: Model) -> Result<Self, ContentRepositoryError> {
        Ok(Publication {
            id: model.id,
            title: model.title,
            journal: model.journal,
            published_at: model.published_at,
            url: model.url,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}
