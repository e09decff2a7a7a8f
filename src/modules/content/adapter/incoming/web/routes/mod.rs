mod content_scope;
mod create_content;
mod delete_content;
mod get_content;
mod list_contents;
mod update_content;

pub use content_scope::{content_scope, parse_content_id};
pub use create_content::create_content_handler;
pub use delete_content::delete_content_handler;
pub use get_content::get_content_handler;
pub use list_contents::list_contents_handler;
pub use update_content::update_content_handler;
