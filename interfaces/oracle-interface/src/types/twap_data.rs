use soroban_sdk::{contracttype, Env};

#[derive(Debug, Clone)]
#[contracttype]
pub struct TwapData {
    /// Accumulated price * seconds since the epoch start
    pub cumulative_price_time: i128,
    /// Price the open interval accrues at, kept across epoch resets
    pub last_price: i128,
    pub last_update_timestamp: u64,
    pub epoch_start: u64,
}

impl TwapData {
    /// Empty accumulator anchored at the current ledger time
    pub fn new(env: &Env) -> Self {
        let now = env.ledger().timestamp();
        Self {
            cumulative_price_time: 0,
            last_price: 0,
            last_update_timestamp: now,
            epoch_start: now,
        }
    }
}
