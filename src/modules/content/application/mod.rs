mod content_use_cases;
pub mod domain;
pub mod ports;
pub mod service;

pub use content_use_cases::ContentUseCases;
