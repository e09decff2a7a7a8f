pub mod adapter;
pub mod application;

pub use application::domain::{Skill, SkillCategory, SkillInput, SkillLevel};
