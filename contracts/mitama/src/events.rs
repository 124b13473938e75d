use soroban_sdk::{contractevent, Address};

/// Event emitted whenever the owner changes, including the initial
/// assignment at construction (where `previous_owner` is the resource itself).
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    #[topic]
    pub previous_owner: Address,
    #[topic]
    pub new_owner: Address,
}
