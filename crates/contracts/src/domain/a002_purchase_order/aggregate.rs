use crate::enums::OrderStatus;
use crate::shared::table::row::{compare_f64, compare_text};
use crate::shared::table::TableRow;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Procurement order placed against a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub number: String,
    pub project_code: String,
    pub vendor: String,
    pub item: String,
    pub category: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub status: OrderStatus,
    /// ISO date
    pub ordered_at: String,
}

impl PurchaseOrder {
    pub fn amount(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Columns searched by the procurement loader
pub const SEARCH_COLUMNS: [&str; 4] = ["number", "vendor", "item", "project_code"];

impl TableRow for PurchaseOrder {
    fn cell_text(&self, column_id: &str) -> Option<String> {
        match column_id {
            "number" => Some(self.number.clone()),
            "project_code" => Some(self.project_code.clone()),
            "vendor" => Some(self.vendor.clone()),
            "item" => Some(self.item.clone()),
            "category" => Some(self.category.clone()),
            "quantity" => Some(self.quantity.to_string()),
            "amount" => Some(format!("{:.2}", self.amount())),
            "status" => Some(self.status.display_name().to_string()),
            "ordered_at" => Some(self.ordered_at.clone()),
            _ => None,
        }
    }

    fn compare_by_column(&self, other: &Self, column_id: &str) -> Ordering {
        match column_id {
            "number" => self.number.cmp(&other.number),
            "project_code" => self.project_code.cmp(&other.project_code),
            "vendor" => compare_text(&self.vendor, &other.vendor),
            "item" => compare_text(&self.item, &other.item),
            "category" => compare_text(&self.category, &other.category),
            "quantity" => self.quantity.cmp(&other.quantity),
            "amount" => compare_f64(self.amount(), other.amount()),
            "status" => self.status.cmp(&other.status),
            "ordered_at" => self.ordered_at.cmp(&other.ordered_at),
            _ => Ordering::Equal,
        }
    }
}
