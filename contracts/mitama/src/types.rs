use soroban_sdk::contracttype;

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Storage keys for the Mitama contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Address currently holding ownership
    Owner,
    /// Label fixed at construction
    Name,
}
