mod average_price;
mod reset_twap;
