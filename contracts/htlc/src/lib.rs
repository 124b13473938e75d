#![no_std]

//! # HTLC Escrow
//!
//! Soroban contract that pays a beneficiary ("white hat") for handing over
//! ownership of a Mitama resource, with a 48-hour fallback for the
//! depositor.
//!
//! ## Architecture
//!
//! One contract instance supervises one escrow. The depositor funds it in
//! the native asset; the beneficiary makes the escrow the owner of the
//! resource and then claims. Three exits exist, and at most one of them
//! pays out:
//!
//! 1. **Withdraw** ([`Htlc::withdraw`]) — any time, beneficiary only, once
//!    the escrow owns the resource. Funds go to the beneficiary and the
//!    resource to the final owner.
//! 2. **Refund** ([`Htlc::refund`]) — after the deadline, anyone may trigger
//!    it. Funds go back to the depositor; the resource is not touched.
//! 3. **Reset** ([`Htlc::reset_contract_owner_and_refund`]) — after the
//!    deadline, once the escrow owns the resource. The resource goes to the
//!    final owner and the funds back to the depositor. Still open after a
//!    refund, with nothing left to pay, so a resource handed over late is
//!    never stuck with the escrow.
//!
//! Every precondition is checked before the first write or cross-contract
//! call. If a token or resource call traps, the Soroban runtime rolls back
//! the whole invocation, so funds and ownership always move together.
//!
//! ## Modules
//!
//! - [`errors`]   — [`Error`] variants returned by fallible functions.
//! - [`types`]    — [`EscrowConfig`], [`EscrowPolicy`], [`EscrowStatus`].
//! - [`resource`] — cross-contract calls into the Mitama contract.

mod errors;
mod events;
mod resource;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, panic_with_error, token, Address, Env};

pub use errors::Error;
pub use events::{
    EscrowCreatedEvent, EscrowFundedEvent, EscrowRefundedEvent, EscrowResetEvent,
    EscrowWithdrawnEvent,
};
pub use types::{EscrowConfig, EscrowPolicy, EscrowStatus, REFUND_WINDOW_SECONDS};

#[contract]
pub struct Htlc;

#[contractimpl]
impl Htlc {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Deploy the escrow.
    ///
    /// Soroban constructors carry no implicit sender, so the deployer passes
    /// its own address as `depositor`. The deadline is fixed to the current
    /// ledger timestamp plus [`REFUND_WINDOW_SECONDS`].
    ///
    /// # Arguments
    /// * `depositor` - Funds the escrow and receives refunds
    /// * `beneficiary` - Only address allowed to withdraw
    /// * `resource` - Mitama contract whose ownership is being handed over
    /// * `final_owner` - Receives the resource on withdraw or reset
    /// * `token` - Native asset contract the balance is held in
    /// * `policy` - Top-up and party-distinctness rules
    ///
    /// # Panics
    /// * `Error::InvalidConfiguration` - The escrow, resource or token is used
    ///   as a party, or parties overlap under a strict policy
    pub fn __constructor(
        env: Env,
        depositor: Address,
        beneficiary: Address,
        resource: Address,
        final_owner: Address,
        token: Address,
        policy: EscrowPolicy,
    ) {
        let config = EscrowConfig {
            depositor,
            beneficiary,
            final_owner,
            resource,
            token,
            deadline: env
                .ledger()
                .timestamp()
                .saturating_add(REFUND_WINDOW_SECONDS),
            policy,
        };

        if let Err(err) = Self::validate_config(&env, &config) {
            panic_with_error!(&env, err);
        }

        storage::set_config(&env, &config);
        storage::set_amount(&env, 0);
        storage::set_status(&env, EscrowStatus::Unfunded);
        storage::extend_instance_ttl(&env);

        EscrowCreatedEvent {
            depositor: config.depositor,
            beneficiary: config.beneficiary,
            resource: config.resource,
            final_owner: config.final_owner,
            deadline: config.deadline,
        }
        .publish(&env);
    }

    // ========================================================================
    // FUNDING
    // ========================================================================

    /// Deposit `value` of the native asset from the depositor.
    ///
    /// Repeated calls add to the balance when the policy allows top-ups.
    ///
    /// # Errors
    /// * `Error::Unauthorized` - `from` is not the depositor
    /// * `Error::InvalidAmount` - `value` is not positive or overflows the balance
    /// * `Error::AlreadyFunded` - Already funded and top-ups are disabled
    /// * `Error::AlreadySettled` - A terminal disbursement already happened
    pub fn fund(e: &Env, from: Address, value: i128) -> Result<(), Error> {
        from.require_auth();

        let config = storage::get_config(e);
        if from != config.depositor {
            return Err(Error::Unauthorized);
        }

        if value <= 0 {
            return Err(Error::InvalidAmount);
        }

        match storage::get_status(e) {
            EscrowStatus::Unfunded => {}
            EscrowStatus::Funded if config.policy.allow_top_up => {}
            EscrowStatus::Funded => return Err(Error::AlreadyFunded),
            _ => return Err(Error::AlreadySettled),
        }

        let amount = storage::get_amount(e)
            .checked_add(value)
            .ok_or(Error::InvalidAmount)?;

        token::Client::new(e, &config.token).transfer(
            &from,
            &e.current_contract_address(),
            &value,
        );

        storage::set_amount(e, amount);
        storage::set_status(e, EscrowStatus::Funded);
        storage::extend_instance_ttl(e);

        EscrowFundedEvent {
            depositor: from,
            value,
            amount,
        }
        .publish(e);

        Ok(())
    }

    // ========================================================================
    // DISBURSEMENT
    // ========================================================================

    /// Pay the whole balance to the beneficiary and pass the resource on to
    /// the final owner.
    ///
    /// The beneficiary must first have made this contract the resource's
    /// owner. There is no deadline check.
    ///
    /// # Errors
    /// * `Error::NotBeneficiary` - `caller` is not the beneficiary
    /// * `Error::AlreadySettled` - A terminal disbursement already happened
    /// * `Error::PreconditionFailed` - The escrow does not own the resource
    pub fn withdraw(e: &Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let config = storage::get_config(e);
        if caller != config.beneficiary {
            return Err(Error::NotBeneficiary);
        }

        Self::require_transition(e, EscrowStatus::Withdrawn)?;
        Self::require_custody(e, &config)?;

        resource::hand_over(e, &config.resource, &config.final_owner);
        let amount = Self::disburse(e, &config, &config.beneficiary, EscrowStatus::Withdrawn);

        EscrowWithdrawnEvent {
            beneficiary: config.beneficiary,
            final_owner: config.final_owner,
            amount,
        }
        .publish(e);

        Ok(())
    }

    /// Return the whole balance to the depositor once the deadline has
    /// passed. Anyone may trigger it; the payee is always the depositor.
    ///
    /// # Errors
    /// * `Error::TooEarly` - Deadline not reached
    /// * `Error::AlreadySettled` - A terminal disbursement already happened
    pub fn refund(e: &Env) -> Result<(), Error> {
        let config = storage::get_config(e);

        Self::require_deadline_passed(e, &config)?;
        Self::require_transition(e, EscrowStatus::Refunded)?;

        let amount = Self::disburse(e, &config, &config.depositor, EscrowStatus::Refunded);

        EscrowRefundedEvent {
            depositor: config.depositor,
            amount,
        }
        .publish(e);

        Ok(())
    }

    /// After the deadline, release a resource the beneficiary handed over
    /// but never claimed for: it goes to the final owner and the balance
    /// back to the depositor. Anyone may trigger it.
    ///
    /// After a refund the balance is already zero; the call then only
    /// releases the resource.
    ///
    /// # Errors
    /// * `Error::TooEarly` - Deadline not reached
    /// * `Error::AlreadySettled` - Already withdrawn or reset
    /// * `Error::PreconditionFailed` - The escrow does not own the resource
    pub fn reset_contract_owner_and_refund(e: &Env) -> Result<(), Error> {
        let config = storage::get_config(e);

        Self::require_deadline_passed(e, &config)?;
        Self::require_transition(e, EscrowStatus::Reset)?;
        Self::require_custody(e, &config)?;

        resource::hand_over(e, &config.resource, &config.final_owner);
        let amount = Self::disburse(e, &config, &config.depositor, EscrowStatus::Reset);

        EscrowResetEvent {
            depositor: config.depositor,
            final_owner: config.final_owner,
            amount,
        }
        .publish(e);

        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Current escrowed balance
    pub fn amount(e: &Env) -> i128 {
        storage::get_amount(e)
    }

    /// Ledger timestamp from which refund and reset unlock
    pub fn deadline(e: &Env) -> u64 {
        storage::get_config(e).deadline
    }

    /// Seconds left until the deadline, zero once it has passed
    pub fn time_remaining(e: &Env) -> u64 {
        storage::get_config(e)
            .deadline
            .saturating_sub(e.ledger().timestamp())
    }

    pub fn status(e: &Env) -> EscrowStatus {
        storage::get_status(e)
    }

    /// Parties, resource, token, deadline and policy
    pub fn get_config(e: &Env) -> EscrowConfig {
        storage::get_config(e)
    }

    /// Whether the resource is currently owned by this escrow
    pub fn resource_in_custody(e: &Env) -> bool {
        resource::is_held_by_escrow(e, &storage::get_config(e).resource)
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    /// Reject constructions that put the escrow, the resource or the token in
    /// a party role, plus overlapping parties when the policy asks for
    /// distinct ones.
    fn validate_config(e: &Env, config: &EscrowConfig) -> Result<(), Error> {
        let this = e.current_contract_address();

        let parties = [
            &config.depositor,
            &config.beneficiary,
            &config.final_owner,
        ];

        for party in parties {
            if *party == this || *party == config.resource || *party == config.token {
                return Err(Error::InvalidConfiguration);
            }
        }

        if config.resource == this || config.token == this || config.token == config.resource {
            return Err(Error::InvalidConfiguration);
        }

        if config.policy.require_distinct_parties
            && (config.beneficiary == config.final_owner || config.beneficiary == config.depositor)
        {
            return Err(Error::InvalidConfiguration);
        }

        Ok(())
    }

    fn require_deadline_passed(e: &Env, config: &EscrowConfig) -> Result<(), Error> {
        if e.ledger().timestamp() < config.deadline {
            return Err(Error::TooEarly);
        }
        Ok(())
    }

    fn require_transition(e: &Env, next: EscrowStatus) -> Result<(), Error> {
        if !storage::get_status(e).can_transition_to(&next) {
            return Err(Error::AlreadySettled);
        }
        Ok(())
    }

    fn require_custody(e: &Env, config: &EscrowConfig) -> Result<(), Error> {
        if !resource::is_held_by_escrow(e, &config.resource) {
            return Err(Error::PreconditionFailed);
        }
        Ok(())
    }

    /// Send the whole balance to `to`, zero it and record the terminal
    /// status. Returns the amount paid out.
    fn disburse(e: &Env, config: &EscrowConfig, to: &Address, outcome: EscrowStatus) -> i128 {
        let amount = storage::get_amount(e);

        // Unfunded escrows settle with no token call.
        if amount > 0 {
            token::Client::new(e, &config.token).transfer(
                &e.current_contract_address(),
                to,
                &amount,
            );
        }

        storage::set_amount(e, 0);
        storage::set_status(e, outcome);
        storage::extend_instance_ttl(e);

        amount
    }
}
