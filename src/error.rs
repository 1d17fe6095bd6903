use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Paused = 3,
    NotPaused = 4,
    RequiresAdmin = 5,
    LastAdmin = 6,
    NotTokenOwner = 7,
    DailyRateTooLow = 8,
    DailyRateTooHigh = 9,
    LifetimeValueTooLow = 10,
    LifetimeValueTooHigh = 11,
    InsufficientAllowance = 12,
    InsufficientPoolBalance = 13,
    GrantTooSmall = 14,
    NegativeAmount = 15,
    InvalidConstraints = 16,
    ArithmeticOverflow = 17,
    /// Custody balance did not drop by exactly the committed value across the faucet call.
    SettlementMismatch = 18,
}
