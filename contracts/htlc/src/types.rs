use soroban_sdk::{contracttype, Address};

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Seconds between construction and the refund/reset deadline (48 hours).
pub const REFUND_WINDOW_SECONDS: u64 = 48 * 60 * 60;

/// Storage keys for the HTLC contract. Everything lives in instance storage:
/// one contract instance supervises exactly one escrow.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Fixed parties, resource, token, deadline and policy
    Config,
    /// Escrowed balance
    Amount,
    /// Lifecycle position
    Status,
}

/// Escrow lifecycle.
///
/// ```text
/// Unfunded ──fund──► Funded ──┬─ withdraw ─────────────────► Withdrawn
///     │                 ▲  │  ├─ refund ───────────────────► Refunded
///     │                 └──┘  └─ reset_contract_owner_... ─► Reset
///     └──────────── (same three exits, zero payout) ───────────┘
///
/// Refunded ── reset_contract_owner_... (zero payout) ──────────► Reset
/// ```
///
/// `Refunded` settles the funds but leaves the resource exit open, so a
/// resource handed over before the refund can still reach the final owner.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EscrowStatus {
    /// Constructed, nothing deposited yet
    Unfunded = 0,
    /// Holding the depositor's funds
    Funded = 1,
    /// Beneficiary claimed the funds and the resource went to the final owner
    Withdrawn = 2,
    /// Deadline passed and the funds went back to the depositor
    Refunded = 3,
    /// Deadline passed, the resource went to the final owner and the funds
    /// back to the depositor
    Reset = 4,
}

impl EscrowStatus {
    /// Whether the funds have been paid out
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            EscrowStatus::Withdrawn | EscrowStatus::Refunded | EscrowStatus::Reset
        )
    }

    /// Whether `next` is reachable from `self`. `Funded → Funded` is a top-up
    /// and is additionally gated by [`EscrowPolicy::allow_top_up`].
    pub fn can_transition_to(&self, next: &EscrowStatus) -> bool {
        match self {
            EscrowStatus::Unfunded => *next != EscrowStatus::Unfunded,
            EscrowStatus::Funded => *next != EscrowStatus::Unfunded,
            EscrowStatus::Refunded => *next == EscrowStatus::Reset,
            EscrowStatus::Withdrawn | EscrowStatus::Reset => false,
        }
    }
}

/// Knobs for behavior the protocol leaves to the deployer.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowPolicy {
    /// Accept further `fund` calls from the depositor after the first one.
    pub allow_top_up: bool,
    /// Reject constructions where the beneficiary is also the final owner
    /// or the depositor.
    pub require_distinct_parties: bool,
}

impl EscrowPolicy {
    /// Additive funding, overlapping parties allowed.
    pub fn permissive() -> Self {
        EscrowPolicy {
            allow_top_up: true,
            require_distinct_parties: false,
        }
    }

    /// Single funding event, three distinct parties.
    pub fn strict() -> Self {
        EscrowPolicy {
            allow_top_up: false,
            require_distinct_parties: true,
        }
    }
}

/// Everything fixed at construction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowConfig {
    pub depositor: Address,
    pub beneficiary: Address,
    pub final_owner: Address,
    /// Mitama contract whose ownership is being handed over
    pub resource: Address,
    /// Native asset contract the escrowed balance is held in
    pub token: Address,
    /// Ledger timestamp from which refund and reset unlock
    pub deadline: u64,
    pub policy: EscrowPolicy,
}
