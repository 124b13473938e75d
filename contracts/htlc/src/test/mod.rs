pub mod scenario_test;

use crate::{EscrowPolicy, Htlc, HtlcClient};
use mitama::{Mitama, MitamaClient};
use soroban_sdk::{
    testutils::{Address as _, Events as _, Ledger},
    token, vec, Address, Env, Event, String,
};

/// 20 units of a 7-decimal asset.
pub const FUNDING: i128 = 200_000_000;

/// Ledger timestamp the escrow is deployed at.
pub const START_TIME: u64 = 1_000;

pub struct TestContext {
    pub env: Env,
    pub escrow: HtlcClient<'static>,
    pub mitama: MitamaClient<'static>,
    pub token: token::TokenClient<'static>,
    pub depositor: Address,
    pub white_hat: Address,
    pub final_owner: Address,
}

impl TestContext {
    pub fn fund(&self) {
        self.escrow.fund(&self.depositor, &FUNDING);
    }

    /// The white hat makes the escrow the owner of the resource.
    pub fn hand_over_to_escrow(&self) {
        self.mitama
            .transfer_ownership(&self.white_hat, &self.escrow.address);
    }
}

/// Deploy the native asset stand-in and mint `amount` to `recipient`.
pub fn create_token(env: &Env, recipient: &Address, amount: i128) -> Address {
    let token_admin = Address::generate(env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token_address = token_contract.address();
    token::StellarAssetClient::new(env, &token_address).mint(recipient, &amount);
    token_address
}

/// Deploy a Mitama owned by `first_owner` and pass it on to `white_hat`.
pub fn create_mitama(env: &Env, first_owner: &Address, white_hat: &Address) -> MitamaClient<'static> {
    let mitama_id = env.register(Mitama, (first_owner.clone(), String::from_str(env, "abc")));
    let mitama = MitamaClient::new(env, &mitama_id);
    mitama.transfer_ownership(first_owner, white_hat);
    mitama
}

pub fn deploy_escrow(
    env: &Env,
    depositor: &Address,
    beneficiary: &Address,
    resource: &Address,
    final_owner: &Address,
    token: &Address,
    policy: EscrowPolicy,
) -> HtlcClient<'static> {
    let escrow_id = env.register(
        Htlc,
        (
            depositor.clone(),
            beneficiary.clone(),
            resource.clone(),
            final_owner.clone(),
            token.clone(),
            policy,
        ),
    );
    HtlcClient::new(env, &escrow_id)
}

pub fn setup_with_policy(policy: EscrowPolicy) -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| {
        li.timestamp = START_TIME;
    });

    let depositor = Address::generate(&env);
    let first_owner = Address::generate(&env);
    let white_hat = Address::generate(&env);
    let final_owner = Address::generate(&env);

    let token_address = create_token(&env, &depositor, FUNDING * 10);
    let mitama = create_mitama(&env, &first_owner, &white_hat);
    let escrow = deploy_escrow(
        &env,
        &depositor,
        &white_hat,
        &mitama.address,
        &final_owner,
        &token_address,
        policy,
    );
    let token = token::TokenClient::new(&env, &token_address);

    TestContext {
        env,
        escrow,
        mitama,
        token,
        depositor,
        white_hat,
        final_owner,
    }
}

pub fn setup() -> TestContext {
    setup_with_policy(EscrowPolicy::permissive())
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}

/// Assert that the last event `contract` published in the latest invocation
/// is `event`.
pub fn assert_last_event(env: &Env, contract: &Address, event: &impl Event) {
    let last = env
        .events()
        .all()
        .iter()
        .filter(|(id, _, _)| id == contract)
        .last();
    let expected = (contract.clone(), event.topics(env), event.data(env));

    assert_eq!(last.map(|e| vec![env, e]), Some(vec![env, expected]));
}
