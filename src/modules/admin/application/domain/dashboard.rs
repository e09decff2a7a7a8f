use serde::Serialize;

/// Stored records per content type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardCounts {
    pub skills: u64,
    pub experiences: u64,
    pub projects: u64,
    pub publications: u64,
    pub blogs: u64,
}

impl DashboardCounts {
    pub fn total(&self) -> u64 {
        self.skills + self.experiences + self.projects + self.publications + self.blogs
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub counts: DashboardCounts,
    /// Base URL the admin forms submit to.
    pub api_base_url: String,
}
