mod count_contents_service;
mod create_content_service;
mod delete_content_service;
mod get_content_service;
mod list_contents_service;
mod update_content_service;

pub use count_contents_service::CountContentsService;
pub use create_content_service::CreateContentService;
pub use delete_content_service::DeleteContentService;
pub use get_content_service::GetContentService;
pub use list_contents_service::ListContentsService;
pub use update_content_service::UpdateContentService;
