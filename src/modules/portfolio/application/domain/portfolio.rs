use serde::Serialize;

use crate::modules::experience::Experience;
use crate::modules::project::Project;
use crate::modules::publication::Publication;
use crate::modules::skill::Skill;

/// Everything the public home page renders, each list newest first.
#[derive(Debug, Clone, Serialize)]
pub struct Portfolio {
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub publications: Vec<Publication>,
}
