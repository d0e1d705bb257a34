use serde::{Deserialize, Serialize};

/// Purchase order workflow state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Draft,
    Pending,
    Approved,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "Draft",
            OrderStatus::Pending => "Pending approval",
            OrderStatus::Approved => "Approved",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "neutral",
            OrderStatus::Pending => "warning",
            OrderStatus::Approved => "primary",
            OrderStatus::Delivered => "success",
            OrderStatus::Cancelled => "error",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Draft,
            OrderStatus::Pending,
            OrderStatus::Approved,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }
}
