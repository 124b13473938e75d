//! Calls into the supervised Mitama contract.
//!
//! The escrow only relies on the resource's public `owner` and
//! `transfer_ownership` entry points, invoked by name.

use soroban_sdk::{vec, Address, Env, IntoVal, Symbol, Val, Vec};

/// Current owner of the resource.
pub fn owner_of(env: &Env, resource: &Address) -> Address {
    let owner_fn = Symbol::new(env, "owner");
    env.invoke_contract(resource, &owner_fn, Vec::new(env))
}

/// Whether the beneficiary has handed the resource to this escrow.
pub fn is_held_by_escrow(env: &Env, resource: &Address) -> bool {
    owner_of(env, resource) == env.current_contract_address()
}

/// Pass ownership of the resource, which this escrow must currently own,
/// on to `new_owner`. Traps if the escrow is not the owner.
pub fn hand_over(env: &Env, resource: &Address, new_owner: &Address) {
    let transfer_fn = Symbol::new(env, "transfer_ownership");
    let args: Vec<Val> = vec![
        env,
        env.current_contract_address().into_val(env),
        new_owner.into_val(env),
    ];
    env.invoke_contract::<()>(resource, &transfer_fn, args);
}
