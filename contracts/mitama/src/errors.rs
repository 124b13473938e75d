use soroban_sdk::contracterror;

/// Error codes for the Mitama contract.
/// Uses error codes starting at 100 so they never collide with the escrow's.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller is not the current owner
    Unauthorized = 100,
    /// Ownership cannot be handed to the resource itself
    InvalidTarget = 101,
}
