mod experience;

pub use experience::{Experience, ExperienceInput, ExperienceType};
