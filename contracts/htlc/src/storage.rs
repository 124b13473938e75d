use soroban_sdk::Env;

use crate::types::{
    EscrowConfig, EscrowStatus, StorageKey, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD,
};

// ============================================================================
// CONFIG STORAGE
// ============================================================================

/// Fixed escrow parameters. Written once by the constructor.
pub fn get_config(e: &Env) -> EscrowConfig {
    e.storage().instance().get(&StorageKey::Config).unwrap()
}

pub fn set_config(e: &Env, config: &EscrowConfig) {
    e.storage().instance().set(&StorageKey::Config, config);
}

// ============================================================================
// BALANCE & STATUS STORAGE
// ============================================================================

pub fn get_amount(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&StorageKey::Amount)
        .unwrap_or(0)
}

pub fn set_amount(e: &Env, amount: i128) {
    e.storage().instance().set(&StorageKey::Amount, &amount);
}

pub fn get_status(e: &Env) -> EscrowStatus {
    e.storage()
        .instance()
        .get(&StorageKey::Status)
        .unwrap_or(EscrowStatus::Unfunded)
}

pub fn set_status(e: &Env, status: EscrowStatus) {
    e.storage().instance().set(&StorageKey::Status, &status);
}

// ============================================================================
// TTL
// ============================================================================

/// Extend the TTL of instance storage.
/// Called during every state-changing operation.
pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}
