#![no_std]

//! # Mitama
//!
//! A resource with exactly one owner and an immutable name. The owner is the
//! only address that can hand ownership on, which is what the HTLC escrow
//! watches for: a beneficiary proves cooperation by making the escrow the
//! owner of this contract.
//!
//! ## Modules
//!
//! - [`errors`]  — [`Error`] variants returned by fallible functions.
//! - [`ownable`] — the owner capability check and transfer logic.

mod errors;
mod events;
mod ownable;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String};

pub use errors::Error;
pub use events::OwnershipTransferredEvent;

#[contract]
pub struct Mitama;

#[contractimpl]
impl Mitama {
    // ─── Construction ────────────────────────────────────────────────────────

    /// Create the resource owned by `owner` and labelled `name`.
    ///
    /// Soroban constructors have no implicit sender, so the deployer passes
    /// its own address as `owner`.
    ///
    /// # Panics
    ///
    /// - [`Error::InvalidTarget`] — `owner` is the contract's own address.
    pub fn __constructor(env: Env, owner: Address, name: String) {
        if !ownable::is_valid_owner(&env, &owner) {
            panic_with_error!(&env, Error::InvalidTarget);
        }

        storage::set_owner(&env, &owner);
        storage::set_name(&env, &name);
        storage::extend_instance_ttl(&env);

        OwnershipTransferredEvent {
            previous_owner: env.current_contract_address(),
            new_owner: owner,
        }
        .publish(&env);
    }

    // ─── Queries ─────────────────────────────────────────────────────────────

    /// Current owner. No authorization required.
    pub fn owner(e: &Env) -> Address {
        storage::get_owner(e)
    }

    /// Label supplied at construction.
    pub fn name(e: &Env) -> String {
        storage::get_name(e)
    }

    // ─── Ownership ───────────────────────────────────────────────────────────

    /// Hand ownership from `caller` to `new_owner`.
    ///
    /// `caller` must authorize the invocation. A contract calling this
    /// directly (such as the escrow, once it owns the resource) passes its
    /// own address and is authorized implicitly as the invoker.
    ///
    /// # Errors
    ///
    /// - [`Error::Unauthorized`]  — `caller` is not the current owner.
    /// - [`Error::InvalidTarget`] — `new_owner` is this contract's address.
    pub fn transfer_ownership(e: &Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        ownable::transfer_ownership(e, &caller, new_owner)?;
        storage::extend_instance_ttl(e);
        Ok(())
    }
}
