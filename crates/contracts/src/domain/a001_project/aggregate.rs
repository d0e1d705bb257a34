use crate::enums::ProjectStatus;
use crate::shared::table::row::{compare_f64, compare_text};
use crate::shared::table::TableRow;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Construction project tracked on the projects board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Human-readable code, e.g. `PRJ-014`
    pub code: String,
    pub name: String,
    pub client: String,
    pub site_manager: String,
    pub region: String,
    pub status: ProjectStatus,
    pub budget: f64,
    pub spent: f64,
    /// ISO date
    pub start_date: String,
    /// Completion percentage 0..=100
    pub progress: u8,
}

impl Project {
    /// Share of the budget already spent, in percent
    pub fn burn_rate(&self) -> f64 {
        if self.budget <= 0.0 {
            0.0
        } else {
            self.spent / self.budget * 100.0
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget
    }
}

impl TableRow for Project {
    fn cell_text(&self, column_id: &str) -> Option<String> {
        match column_id {
            "code" => Some(self.code.clone()),
            "name" => Some(self.name.clone()),
            "client" => Some(self.client.clone()),
            "site_manager" => Some(self.site_manager.clone()),
            "region" => Some(self.region.clone()),
            "status" => Some(self.status.display_name().to_string()),
            "budget" => Some(format!("{:.0}", self.budget)),
            "spent" => Some(format!("{:.0}", self.spent)),
            "start_date" => Some(self.start_date.clone()),
            "progress" => Some(self.progress.to_string()),
            _ => None,
        }
    }

    fn compare_by_column(&self, other: &Self, column_id: &str) -> Ordering {
        match column_id {
            "code" => self.code.cmp(&other.code),
            "name" => compare_text(&self.name, &other.name),
            "client" => compare_text(&self.client, &other.client),
            "site_manager" => compare_text(&self.site_manager, &other.site_manager),
            "region" => compare_text(&self.region, &other.region),
            "status" => self.status.cmp(&other.status),
            "budget" => compare_f64(self.budget, other.budget),
            "spent" => compare_f64(self.spent, other.spent),
            "start_date" => self.start_date.cmp(&other.start_date),
            "progress" => self.progress.cmp(&other.progress),
            _ => Ordering::Equal,
        }
    }
}
