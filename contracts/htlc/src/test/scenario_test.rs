//! End-to-end runs of the three ways an escrow can play out.

use crate::test::{advance_ledger, setup, FUNDING};
use crate::{EscrowStatus, Error, REFUND_WINDOW_SECONDS};
use soroban_sdk::{testutils::Address as _, Address};

#[test]
fn test_white_hat_hands_over_and_withdraws() {
    let ctx = setup();
    assert_eq!(ctx.mitama.owner(), ctx.white_hat);

    ctx.fund();
    assert_eq!(ctx.escrow.amount(), FUNDING);

    let stranger = Address::generate(&ctx.env);
    assert!(ctx.escrow.try_fund(&stranger, &FUNDING).is_err());

    ctx.hand_over_to_escrow();

    assert_eq!(
        ctx.escrow.try_withdraw(&ctx.depositor),
        Err(Ok(Error::NotBeneficiary))
    );
    ctx.escrow.withdraw(&ctx.white_hat);

    assert_eq!(ctx.escrow.amount(), 0);
    assert_eq!(ctx.token.balance(&ctx.white_hat), FUNDING);
    assert_eq!(ctx.mitama.owner(), ctx.final_owner);
}

#[test]
fn test_white_hat_hands_over_but_never_withdraws() {
    let ctx = setup();
    ctx.fund();
    let depositor_after_funding = ctx.token.balance(&ctx.depositor);

    ctx.hand_over_to_escrow();

    assert_eq!(
        ctx.escrow.try_reset_contract_owner_and_refund(),
        Err(Ok(Error::TooEarly))
    );
    assert_eq!(ctx.escrow.try_refund(), Err(Ok(Error::TooEarly)));

    advance_ledger(&ctx.env, REFUND_WINDOW_SECONDS);
    ctx.escrow.reset_contract_owner_and_refund();

    assert_eq!(ctx.escrow.amount(), 0);
    assert_eq!(ctx.mitama.owner(), ctx.final_owner);
    assert_eq!(
        ctx.token.balance(&ctx.depositor),
        depositor_after_funding + FUNDING
    );
    assert_eq!(ctx.escrow.status(), EscrowStatus::Reset);
}

#[test]
fn test_white_hat_never_hands_over() {
    let ctx = setup();
    ctx.fund();
    let depositor_after_funding = ctx.token.balance(&ctx.depositor);

    assert_eq!(
        ctx.escrow.try_reset_contract_owner_and_refund(),
        Err(Ok(Error::TooEarly))
    );
    assert_eq!(ctx.escrow.try_refund(), Err(Ok(Error::TooEarly)));

    advance_ledger(&ctx.env, REFUND_WINDOW_SECONDS);
    assert!(ctx.escrow.try_reset_contract_owner_and_refund().is_err());

    ctx.escrow.refund();

    assert_eq!(ctx.escrow.amount(), 0);
    assert_eq!(
        ctx.token.balance(&ctx.depositor),
        depositor_after_funding + FUNDING
    );
    assert_eq!(ctx.mitama.owner(), ctx.white_hat);
}
