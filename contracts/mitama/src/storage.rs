use soroban_sdk::{Address, Env, String};

use crate::types::{StorageKey, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD};

// ============================================================================
// OWNER
// ============================================================================

/// Current owner. Always present once the constructor has run.
pub fn get_owner(e: &Env) -> Address {
    e.storage().instance().get(&StorageKey::Owner).unwrap()
}

pub fn set_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&StorageKey::Owner, owner);
}

// ============================================================================
// PAYLOAD
// ============================================================================

pub fn get_name(e: &Env) -> String {
    e.storage().instance().get(&StorageKey::Name).unwrap()
}

pub fn set_name(e: &Env, name: &String) {
    e.storage().instance().set(&StorageKey::Name, name);
}

// ============================================================================
// TTL
// ============================================================================

pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}
