use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::blog::{Blog, BlogInput};
use crate::modules::content::application::domain::Content;
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};
use crate::modules::experience::{Experience, ExperienceInput};
use crate::modules::project::{Project, ProjectInput};
use crate::modules::publication::{Publication, PublicationInput};
use crate::modules::skill::{Skill, SkillInput};

/// Builds a stored record out of a validated input, the way a table row
/// would come back from the database.
pub trait InMemoryRecord: Content {
    fn assemble(
        id: i32,
        input: Self::Input,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self;

    fn created_at(&self) -> DateTime<Utc>;
}

struct Store<C> {
    next_id: i32,
    records: Vec<C>,
}

/// Vec-backed repository; clones share the same records.
pub struct InMemoryContentRepository<C> {
    store: Arc<Mutex<Store<C>>>,
}

impl<C> Default for InMemoryContentRepository<C> {
    fn default() -> Self {
        Self {
            store: Arc::new(Mutex::new(Store {
                next_id: 1,
                records: Vec::new(),
            })),
        }
    }
}

impl<C> Clone for InMemoryContentRepository<C> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<C: InMemoryRecord> InMemoryContentRepository<C> {
    pub fn len(&self) -> usize {
        self.store.lock().unwrap().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl<C: InMemoryRecord> ContentRepository<C> for InMemoryContentRepository<C> {
    async fn list(&self) -> Result<Vec<C>, ContentRepositoryError> {
        let mut records = self.store.lock().unwrap().records.clone();
        records.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(records)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<C>, ContentRepositoryError> {
        let store = self.store.lock().unwrap();
        Ok(store.records.iter().find(|r| r.id() == id).cloned())
    }

    async fn create(&self, input: C::Input) -> Result<C, ContentRepositoryError> {
        let mut store = self.store.lock().unwrap();
        let now = Utc::now();
        let record = C::assemble(store.next_id, input, now, now);
        store.next_id += 1;
        store.records.push(record.clone());
        Ok(record)
    }

    async fn replace(&self, id: i32, input: C::Input) -> Result<C, ContentRepositoryError> {
        let mut store = self.store.lock().unwrap();
        let slot = store
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(ContentRepositoryError::NotFound)?;

        let updated = C::assemble(id, input, slot.created_at(), Utc::now());
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<(), ContentRepositoryError> {
        let mut store = self.store.lock().unwrap();
        let before = store.records.len();
        store.records.retain(|r| r.id() != id);

        if store.records.len() == before {
            return Err(ContentRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, ContentRepositoryError> {
        Ok(self.store.lock().unwrap().records.len() as u64)
    }
}

impl InMemoryRecord for Skill {
    fn assemble(
        id: i32,
        input: SkillInput,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Skill {
            id,
            name: input.name,
            level: input.level,
            category: input.category,
            years: input.years,
            icon_url: input.icon_url,
            description: input.description,
            created_at,
            updated_at,
        }
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl InMemoryRecord for Experience {
    fn assemble(
        id: i32,
        input: ExperienceInput,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Experience {
            id,
            title: input.title,
            company: input.company,
            kind: input.kind,
            start_date: input.start_date,
            end_date: input.end_date,
            description: input.description,
            created_at,
            updated_at,
        }
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl InMemoryRecord for Project {
    fn assemble(
        id: i32,
        input: ProjectInput,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Project {
            id,
            title: input.title,
            description: input.description,
            url: input.url,
            repo_url: input.repo_url,
            technologies: input.technologies,
            created_at,
            updated_at,
        }
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl InMemoryRecord for Publication {
    fn assemble(
        id: i32,
        input: PublicationInput,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Publication {
            id,
            title: input.title,
            journal: input.journal,
            published_at: input.published_at,
            url: input.url,
            created_at,
            updated_at,
        }
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl InMemoryRecord for Blog {
    fn assemble(
        id: i32,
        input: BlogInput,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Blog {
            id,
            title: input.title,
            slug: input.slug,
            content: input.content,
            tags: input.tags,
            published_at: input.published_at,
            created_at,
            updated_at,
        }
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
