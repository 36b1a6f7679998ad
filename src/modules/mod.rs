pub mod browse;
pub mod catalog;
