use soroban_sdk::{contractevent, Address};

/// Event emitted when the escrow is deployed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowCreatedEvent {
    #[topic]
    pub depositor: Address,
    #[topic]
    pub beneficiary: Address,
    pub resource: Address,
    pub final_owner: Address,
    pub deadline: u64,
}

/// Event emitted on every accepted deposit
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowFundedEvent {
    #[topic]
    pub depositor: Address,
    pub value: i128,
    pub amount: i128,
}

/// Event emitted when the beneficiary claims
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowWithdrawnEvent {
    #[topic]
    pub beneficiary: Address,
    #[topic]
    pub final_owner: Address,
    pub amount: i128,
}

/// Event emitted when the funds return to the depositor after the deadline
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowRefundedEvent {
    #[topic]
    pub depositor: Address,
    pub amount: i128,
}

/// Event emitted when the resource is forced to the final owner and the
/// funds return to the depositor
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowResetEvent {
    #[topic]
    pub depositor: Address,
    #[topic]
    pub final_owner: Address,
    pub amount: i128,
}
