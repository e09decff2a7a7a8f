pub mod app_state_builder;
pub mod content_fixtures;
pub mod in_memory_repository;
pub mod session_helper;
pub mod stubs;
