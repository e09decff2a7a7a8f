mod count_contents;
mod create_content;
mod delete_content;
mod get_content;
mod list_contents;
mod update_content;

pub use count_contents::{CountContentsError, CountContentsUseCase};
pub use create_content::{CreateContentError, CreateContentUseCase};
pub use delete_content::{DeleteContentError, DeleteContentUseCase};
pub use get_content::{GetContentError, GetContentUseCase};
pub use list_contents::{ListContentsError, ListContentsUseCase};
pub use update_content::{UpdateContentError, UpdateContentUseCase};
