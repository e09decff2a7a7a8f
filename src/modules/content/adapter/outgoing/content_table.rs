use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, ActiveValue, EntityTrait};

use crate::modules::content::application::domain::Content;
use crate::modules::content::application::ports::outgoing::ContentRepositoryError;

/// Maps a content type onto its SeaORM table.
///
/// `to_active_model` receives `None` for inserts (the id is generated by the
/// database) and `Some(id)` for replaces; `created_at` must only be set on
/// insert so a replace keeps the original value.
pub trait ContentTable: Content {
    type Entity: EntityTrait;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + Sync;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    fn created_at_column() -> <Self::Entity as EntityTrait>::Column;

    fn to_active_model(
        id: Option<i32>,
        input: Self::Input,
        now: DateTimeWithTimeZone,
    ) -> Result<Self::ActiveModel, ContentRepositoryError>;

    fn from_model(
        model: <Self::Entity as EntityTrait>::Model,
    ) -> Result<Self, ContentRepositoryError>;
}

//
// ──────────────────────────────────────────────────────────
// Column helpers shared by the table mappings
// ──────────────────────────────────────────────────────────
//

pub fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ContentRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ContentRepositoryError::SerializationError(e.to_string()))
}

pub fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ContentRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ContentRepositoryError::SerializationError(e.to_string()))
}

/// `NotSet` on insert so the sequence assigns the id.
pub fn id_value(id: Option<i32>) -> ActiveValue<i32> {
    id.map_or(ActiveValue::NotSet, ActiveValue::Set)
}

/// Only written on insert.
pub fn created_at_value(
    id: Option<i32>,
    now: DateTimeWithTimeZone,
) -> ActiveValue<DateTimeWithTimeZone> {
    match id {
        None => ActiveValue::Set(now),
        Some(_) => ActiveValue::NotSet,
    }
}

/// Enum columns are stored as their upper-case text form.
pub fn parse_column<T: std::str::FromStr>(
    column: &str,
    raw: &str,
) -> Result<T, ContentRepositoryError> {
    raw.parse().map_err(|_| {
        ContentRepositoryError::SerializationError(format!(
            "unexpected value '{}' in column {}",
            raw, column
        ))
    })
}
