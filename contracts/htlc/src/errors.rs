use soroban_sdk::contracterror;

/// Error codes for the HTLC contract.
/// Uses error codes starting at 200 to stay clear of the Mitama contract's.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller is not the depositor
    Unauthorized = 200,
    /// Caller is not the beneficiary
    NotBeneficiary = 201,
    /// Deadline has not been reached
    TooEarly = 202,
    /// The escrow does not own the resource yet
    PreconditionFailed = 203,
    /// Constructor arguments reference the escrow or resource in an invalid role
    InvalidConfiguration = 204,
    /// Funding value is not positive or would overflow the balance
    InvalidAmount = 205,
    /// A second funding was attempted while top-ups are disabled
    AlreadyFunded = 206,
    /// A terminal disbursement already happened
    AlreadySettled = 207,
}

impl Error {
    /// Human-readable reason for off-chain callers.
    pub fn reason(&self) -> &'static str {
        match self {
            Error::Unauthorized => "Only the depositor can fund",
            Error::NotBeneficiary => "Only Provided address can withdraw...",
            Error::TooEarly => "too early",
            Error::PreconditionFailed => "resource not owned by escrow",
            Error::InvalidConfiguration => "invalid configuration",
            Error::InvalidAmount => "invalid amount",
            Error::AlreadyFunded => "already funded",
            Error::AlreadySettled => "already settled",
        }
    }
}
