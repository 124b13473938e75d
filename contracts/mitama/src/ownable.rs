//! Single-owner access control.
//!
//! Privileged entry points call [`require_owner`] first. There is no
//! inheritance involved: the check is an ordinary function over the stored
//! owner, so any contract in this crate can attach it to an operation.

use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::events::OwnershipTransferredEvent;
use crate::storage;

/// Require that `caller` signed this invocation and is the current owner.
pub fn require_owner(e: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != storage::get_owner(e) {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Whether `new_owner` could ever act as owner again.
///
/// The resource's own address cannot sign for itself, so handing ownership
/// to it would lock the resource forever.
pub fn is_valid_owner(e: &Env, new_owner: &Address) -> bool {
    *new_owner != e.current_contract_address()
}

/// Replace the owner with `new_owner` on behalf of `caller`.
pub fn transfer_ownership(e: &Env, caller: &Address, new_owner: Address) -> Result<(), Error> {
    require_owner(e, caller)?;

    if !is_valid_owner(e, &new_owner) {
        return Err(Error::InvalidTarget);
    }

    storage::set_owner(e, &new_owner);

    OwnershipTransferredEvent {
        previous_owner: caller.clone(),
        new_owner,
    }
    .publish(e);

    Ok(())
}
