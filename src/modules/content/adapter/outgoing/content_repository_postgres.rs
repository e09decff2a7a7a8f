// src/modules/content/adapter/outgoing/content_repository_postgres.rs

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::modules::content::adapter::outgoing::content_table::ContentTable;
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

/// One repository implementation for every [`ContentTable`].
pub struct ContentRepositoryPostgres<C> {
    db: Arc<DatabaseConnection>,
    _content: PhantomData<fn() -> C>,
}

impl<C> ContentRepositoryPostgres<C> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            _content: PhantomData,
        }
    }
}

impl<C> Clone for ContentRepositoryPostgres<C> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.db))
    }
}

#[async_trait]
impl<C> ContentRepository<C> for ContentRepositoryPostgres<C>
where
    C: ContentTable,
    <C::Entity as EntityTrait>::Model: IntoActiveModel<C::ActiveModel> + Sync,
{
    async fn list(&self) -> Result<Vec<C>, ContentRepositoryError> {
        let models = C::Entity::find()
            .order_by_desc(C::created_at_column())
            .order_by_desc(C::id_column())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(C::from_model).collect()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<C>, ContentRepositoryError> {
        C::Entity::find()
            .filter(C::id_column().eq(id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(C::from_model)
            .transpose()
    }

    async fn create(&self, input: C::Input) -> Result<C, ContentRepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = C::to_active_model(None, input, now)?;

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;

        C::from_model(saved)
    }

    async fn replace(&self, id: i32, input: C::Input) -> Result<C, ContentRepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = C::to_active_model(Some(id), input, now)?;

        let saved = model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ContentRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        C::from_model(saved)
    }

    async fn delete(&self, id: i32) -> Result<(), ContentRepositoryError> {
        let res = C::Entity::delete_many()
            .filter(C::id_column().eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ContentRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, ContentRepositoryError> {
        C::Entity::find().count(&*self.db).await.map_err(map_db_err)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
