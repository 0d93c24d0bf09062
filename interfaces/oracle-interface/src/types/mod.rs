pub mod error;
pub mod twap_data;
