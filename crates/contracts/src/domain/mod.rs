pub mod a001_project;
pub mod a002_purchase_order;
pub mod a003_vendor;
pub mod common;
