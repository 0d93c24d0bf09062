use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    Unauthorized = 2,

    InvalidAmount = 100,
    InsufficientStake = 101,
    NoStake = 102,
    TransferFailed = 103,
    InvalidPrice = 104,

    NoStakedTokens = 200,
    NoObservations = 201,

    MathOverflowError = 400,
}
