use std::sync::Arc;

use crate::modules::content::application::domain::Content;
use crate::modules::content::application::ports::incoming::use_cases::{
    CountContentsUseCase, CreateContentUseCase, DeleteContentUseCase, GetContentUseCase,
    ListContentsUseCase, UpdateContentUseCase,
};
use crate::modules::content::application::ports::outgoing::ContentRepository;
use crate::modules::content::application::service::{
    CountContentsService, CreateContentService, DeleteContentService, GetContentService,
    ListContentsService, UpdateContentService,
};

/// Every operation on one content type, shared with the handlers as
/// `web::Data<ContentUseCases<C>>`.
pub struct ContentUseCases<C: Content> {
    pub list: Arc<dyn ListContentsUseCase<C>>,
    pub get: Arc<dyn GetContentUseCase<C>>,
    pub create: Arc<dyn CreateContentUseCase<C>>,
    pub update: Arc<dyn UpdateContentUseCase<C>>,
    pub delete: Arc<dyn DeleteContentUseCase<C>>,
    pub count: Arc<dyn CountContentsUseCase<C>>,
}

impl<C: Content> Clone for ContentUseCases<C> {
    fn clone(&self) -> Self {
        Self {
            list: Arc::clone(&self.list),
            get: Arc::clone(&self.get),
            create: Arc::clone(&self.create),
            update: Arc::clone(&self.update),
            delete: Arc::clone(&self.delete),
            count: Arc::clone(&self.count),
        }
    }
}

impl<C: Content> ContentUseCases<C> {
    pub fn from_repository<R>(repository: R) -> Self
    where
        R: ContentRepository<C> + Clone + 'static,
    {
        Self {
            list: Arc::new(ListContentsService::new(repository.clone())),
            get: Arc::new(GetContentService::new(repository.clone())),
            create: Arc::new(CreateContentService::new(repository.clone())),
            update: Arc::new(UpdateContentService::new(repository.clone())),
            delete: Arc::new(DeleteContentService::new(repository.clone())),
            count: Arc::new(CountContentsService::new(repository)),
        }
    }
}
