use crate::shared::table::row::{compare_f64, compare_text};
use crate::shared::table::TableRow;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub trade: String,
    pub city: String,
    pub contact_email: String,
    /// Average delivery rating, 1.0..=5.0
    pub rating: f64,
    pub open_orders: u32,
    pub preferred: bool,
}

impl TableRow for Vendor {
    fn cell_text(&self, column_id: &str) -> Option<String> {
        match column_id {
            "name" => Some(self.name.clone()),
            "trade" => Some(self.trade.clone()),
            "city" => Some(self.city.clone()),
            "contact_email" => Some(self.contact_email.clone()),
            "rating" => Some(format!("{:.1}", self.rating)),
            "open_orders" => Some(self.open_orders.to_string()),
            "preferred" => Some(if self.preferred { "Yes" } else { "No" }.to_string()),
            _ => None,
        }
    }

    fn compare_by_column(&self, other: &Self, column_id: &str) -> Ordering {
        match column_id {
            "name" => compare_text(&self.name, &other.name),
            "trade" => compare_text(&self.trade, &other.trade),
            "city" => compare_text(&self.city, &other.city),
            "contact_email" => compare_text(&self.contact_email, &other.contact_email),
            "rating" => compare_f64(self.rating, other.rating),
            "open_orders" => self.open_orders.cmp(&other.open_orders),
            "preferred" => self.preferred.cmp(&other.preferred),
            _ => Ordering::Equal,
        }
    }
}
