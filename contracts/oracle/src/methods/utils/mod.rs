pub mod observation;
pub mod transfer;
pub mod validation;
pub mod weighted_sum;
