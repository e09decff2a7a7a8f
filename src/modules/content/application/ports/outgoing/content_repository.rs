// src/modules/content/application/ports/outgoing/content_repository.rs

use async_trait::async_trait;

use crate::modules::content::application::domain::Content;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Storage for one content type.
///
/// `replace` overwrites every user-editable column and refreshes `updated_at`
/// while keeping `created_at`. Both `replace` and `delete` report
/// [`ContentRepositoryError::NotFound`] when no row carries the id.
#[async_trait]
pub trait ContentRepository<C: Content>: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<C>, ContentRepositoryError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<C>, ContentRepositoryError>;

    async fn create(&self, input: C::Input) -> Result<C, ContentRepositoryError>;

    async fn replace(&self, id: i32, input: C::Input) -> Result<C, ContentRepositoryError>;

    async fn delete(&self, id: i32) -> Result<(), ContentRepositoryError>;

    async fn count(&self) -> Result<u64, ContentRepositoryError>;
}
