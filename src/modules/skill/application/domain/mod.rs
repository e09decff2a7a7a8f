mod skill;

pub use skill::{Skill, SkillCategory, SkillInput, SkillLevel};
