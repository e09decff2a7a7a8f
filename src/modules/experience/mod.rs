pub mod adapter;
pub mod application;

pub use application::domain::{Experience, ExperienceInput, ExperienceType};
