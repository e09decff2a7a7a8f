pub mod admin;
pub mod auth;
pub mod blog;
pub mod content;
pub mod experience;
pub mod portfolio;
pub mod project;
pub mod publication;
pub mod skill;
