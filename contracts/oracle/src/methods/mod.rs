pub mod average_price;
pub mod initialize;
pub mod reset_twap;
pub mod stake;
pub mod transfer_admin;
pub mod twap;
pub mod unstake;
pub mod utils;
pub mod vote;
