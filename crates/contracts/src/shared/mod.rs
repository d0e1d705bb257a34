pub mod config;
pub mod pagination;
pub mod table;
