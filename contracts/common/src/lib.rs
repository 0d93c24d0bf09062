#![deny(warnings)]
#![no_std]

mod weighted_price;

pub use weighted_price::*;

/// Decimals of reported prices, e.g. price 1.5 is represented as 1_500_000_000
pub const PRICE_DECIMALS: u32 = 9;
