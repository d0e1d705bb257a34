use serde::{Deserialize, Serialize};

/// Lifecycle stage of a construction project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planning,
    Active,
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Active => "Active",
            ProjectStatus::OnHold => "On hold",
            ProjectStatus::Completed => "Completed",
        }
    }

    /// Badge variant used by list pages
    pub fn badge_variant(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "neutral",
            ProjectStatus::Active => "primary",
            ProjectStatus::OnHold => "warning",
            ProjectStatus::Completed => "success",
        }
    }

    pub fn all() -> Vec<ProjectStatus> {
        vec![
            ProjectStatus::Planning,
            ProjectStatus::Active,
            ProjectStatus::OnHold,
            ProjectStatus::Completed,
        ]
    }
}
