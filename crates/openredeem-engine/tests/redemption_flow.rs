//! Scenario tests for the full redemption lifecycle.
//!
//! These exercise the engine against the in-memory bank end to end:
//! proportional payouts across assets of different decimal scales, the
//! decreasing denominator across successive redemptions, multiple
//! redeemers in call order, and the timelocked sweep to the recovery
//! address.

use chrono::{DateTime, Duration, Utc};
use openredeem_engine::Redeemer;
use openredeem_ledger::{AssetLedger, TokenBank};
use openredeem_types::{Address, Amount, AssetId, RedeemError, RedemptionConfig, constants};

/// One whole unit of an 18-decimals asset.
const ONE_E18: Amount = 1_000_000_000_000_000_000;
/// One whole unit of a 6-decimals asset.
const ONE_E6: Amount = 1_000_000;

fn yam() -> AssetId {
    AssetId::new("YAM")
}

fn token1() -> AssetId {
    AssetId::new("TK1")
}

fn token2() -> AssetId {
    AssetId::new("TK2")
}

/// Claim pool of 100e18. The owner holds the whole claim supply plus the
/// treasury float: 1e18 of TK1 (18 decimals) and 2e6 of TK2 (6 decimals).
struct Fixture {
    redeemer: Redeemer,
    bank: TokenBank,
    owner: Address,
    user2: Address,
    created_at: DateTime<Utc>,
}

impl Fixture {
    fn new() -> Self {
        let created_at = Utc::now();
        let config =
            RedemptionConfig::new(yam(), vec![token1(), token2()], created_at).unwrap();
        let vault = Address([0xee; 20]);
        let redeemer = Redeemer::new(config, vault, 100 * ONE_E18);

        let mut bank = TokenBank::new();
        let owner = Address::random();
        let user2 = Address::random();
        bank.mint(&yam(), owner, 100 * ONE_E18).unwrap();
        bank.mint(&token1(), owner, ONE_E18).unwrap();
        bank.mint(&token2(), owner, 2 * ONE_E6).unwrap();

        Self {
            redeemer,
            bank,
            owner,
            user2,
            created_at,
        }
    }

    fn fund_vault(&mut self, asset: &AssetId, amount: Amount) {
        self.bank
            .transfer(asset, self.owner, self.redeemer.vault(), amount)
            .unwrap();
    }

    fn approve_and_redeem(&mut self, caller: Address, recipient: Address, amount: Amount) {
        self.bank
            .approve(&yam(), caller, self.redeemer.vault(), amount);
        self.redeemer
            .redeem(&mut self.bank, caller, recipient, amount)
            .unwrap();
    }

    fn balance(&self, asset: &AssetId, owner: Address) -> Amount {
        self.bank.balance_of(asset, owner)
    }

    fn deadline(&self) -> DateTime<Utc> {
        self.created_at + Duration::seconds(constants::REDEMPTION_WINDOW_SECS)
    }
}

// =============================================================================
// Proportional payout across mixed-decimal assets
// =============================================================================
#[test]
fn redeem_pays_a_proportional_share_of_every_asset() {
    let mut fx = Fixture::new();
    fx.fund_vault(&token1(), ONE_E18);
    fx.fund_vault(&token2(), 2 * ONE_E6);

    // Redeem 10% of the pool.
    let owner = fx.owner;
    fx.approve_and_redeem(owner, owner, 10 * ONE_E18);

    let vault = fx.redeemer.vault();
    assert_eq!(fx.balance(&yam(), owner), 90 * ONE_E18);
    assert_eq!(fx.balance(&yam(), vault), 10 * ONE_E18);

    // Vault keeps 90% of each treasury asset.
    assert_eq!(fx.balance(&token1(), vault), 9 * ONE_E18 / 10);
    assert_eq!(fx.balance(&token2(), vault), 18 * ONE_E6 / 10);

    // Redeemer holds 10% of each.
    assert_eq!(fx.balance(&token1(), owner), ONE_E18 / 10);
    assert_eq!(fx.balance(&token2(), owner), 2 * ONE_E6 / 10);

    assert_eq!(fx.redeemer.remaining_claim(), 90 * ONE_E18);
}

// =============================================================================
// Decreasing denominator across successive redemptions
// =============================================================================
#[test]
fn two_step_redeem_against_a_shrinking_pool() {
    let mut fx = Fixture::new();
    let owner = fx.owner;

    // Fund half the treasury float, redeem 10% of the pool.
    fx.fund_vault(&token1(), ONE_E18 / 2);
    fx.fund_vault(&token2(), ONE_E6);
    fx.approve_and_redeem(owner, owner, 10 * ONE_E18);

    // Fund the other half, redeem another 10e18 against the 90e18 pool.
    fx.fund_vault(&token1(), ONE_E18 / 2);
    fx.fund_vault(&token2(), ONE_E6);
    fx.approve_and_redeem(owner, owner, 10 * ONE_E18);

    let vault = fx.redeemer.vault();
    assert_eq!(fx.balance(&yam(), owner), 80 * ONE_E18);
    assert_eq!(fx.balance(&yam(), vault), 20 * ONE_E18);

    // Floor-division artifacts from the second pass.
    assert_eq!(fx.balance(&token1(), vault), 844_444_444_444_444_445);
    assert_eq!(fx.balance(&token2(), vault), 1_688_889);
    assert_eq!(fx.balance(&token1(), owner), 155_555_555_555_555_555);
    assert_eq!(fx.balance(&token2(), owner), 311_111);

    assert_eq!(fx.redeemer.remaining_claim(), 80 * ONE_E18);
}

// =============================================================================
// Multiple redeemers, applied in call order
// =============================================================================
#[test]
fn two_addresses_redeem_in_call_order() {
    let mut fx = Fixture::new();
    fx.fund_vault(&token1(), ONE_E18);
    fx.fund_vault(&token2(), 2 * ONE_E6);

    // Hand user2 part of the claim supply.
    let (owner, user2) = (fx.owner, fx.user2);
    fx.bank.transfer(&yam(), owner, user2, 5 * ONE_E18).unwrap();

    fx.approve_and_redeem(owner, owner, 5 * ONE_E18);
    fx.approve_and_redeem(user2, user2, 5 * ONE_E18);

    let vault = fx.redeemer.vault();
    assert_eq!(fx.balance(&yam(), owner), 90 * ONE_E18);
    assert_eq!(fx.balance(&yam(), user2), 0);
    assert_eq!(fx.balance(&yam(), vault), 10 * ONE_E18);

    assert_eq!(fx.balance(&token1(), vault), 9 * ONE_E18 / 10);
    assert_eq!(fx.balance(&token2(), vault), 18 * ONE_E6 / 10);

    // The second call saw the updated pool and balances: both ratios land
    // on the same 5% share.
    assert_eq!(fx.balance(&token1(), owner), 5 * ONE_E18 / 100);
    assert_eq!(fx.balance(&token2(), owner), 2 * ONE_E6 / 20);
    assert_eq!(fx.balance(&token1(), user2), 5 * ONE_E18 / 100);
    assert_eq!(fx.balance(&token2(), user2), 2 * ONE_E6 / 20);

    assert_eq!(fx.redeemer.remaining_claim(), 90 * ONE_E18);
}

// =============================================================================
// Timelocked sweep
// =============================================================================
#[test]
fn sweep_returns_remaining_balances_to_recovery() {
    let mut fx = Fixture::new();
    fx.fund_vault(&token1(), ONE_E18);
    fx.fund_vault(&token2(), 2 * ONE_E6);

    let owner = fx.owner;
    fx.approve_and_redeem(owner, owner, 90 * ONE_E18);

    let deadline = fx.deadline();
    let report = fx
        .redeemer
        .return_to_origin(&mut fx.bank, deadline)
        .unwrap();

    let vault = fx.redeemer.vault();
    assert_eq!(fx.balance(&token1(), vault), 0);
    assert_eq!(fx.balance(&token2(), vault), 0);
    assert_eq!(fx.balance(&yam(), vault), 0);

    // The 10% that was never redeemed, plus the surrendered claim tokens.
    let recovery = fx.redeemer.return_to_treasury();
    assert_eq!(fx.balance(&token1(), recovery), ONE_E18 / 10);
    assert_eq!(fx.balance(&token2(), recovery), 2 * ONE_E6 / 10);
    assert_eq!(fx.balance(&yam(), recovery), 90 * ONE_E18);

    assert_eq!(report.recovery_address, recovery);
    assert_eq!(report.returned.len(), 3);
}

#[test]
fn sweep_before_deadline_is_rejected_with_not_enough_time() {
    let mut fx = Fixture::new();
    fx.fund_vault(&token1(), ONE_E18);
    fx.fund_vault(&token2(), 2 * ONE_E6);
    let owner = fx.owner;
    fx.approve_and_redeem(owner, owner, 90 * ONE_E18);

    let just_before = fx.deadline() - Duration::seconds(100);
    let err = fx
        .redeemer
        .return_to_origin(&mut fx.bank, just_before)
        .unwrap_err();
    assert!(matches!(err, RedeemError::SweepTooEarly { .. }));
    assert!(err.to_string().contains("not enough time"));

    // Nothing moved.
    let vault = fx.redeemer.vault();
    assert_eq!(fx.balance(&token1(), vault), ONE_E18 / 10);
    assert_eq!(fx.balance(&yam(), vault), 90 * ONE_E18);
}

#[test]
fn redeem_after_sweep_pays_nothing_but_still_shrinks_the_pool() {
    let mut fx = Fixture::new();
    fx.fund_vault(&token1(), ONE_E18);
    fx.fund_vault(&token2(), 2 * ONE_E6);

    let deadline = fx.deadline();
    fx.redeemer
        .return_to_origin(&mut fx.bank, deadline)
        .unwrap();

    let owner = fx.owner;
    fx.bank
        .approve(&yam(), owner, fx.redeemer.vault(), 10 * ONE_E18);
    let receipt = fx
        .redeemer
        .redeem(&mut fx.bank, owner, owner, 10 * ONE_E18)
        .unwrap();

    assert!(receipt.payouts.iter().all(|p| p.amount == 0));
    assert_eq!(fx.balance(&token1(), owner), 0);
    assert_eq!(fx.redeemer.remaining_claim(), 90 * ONE_E18);
    // The surrendered claim accumulates in the vault again.
    assert_eq!(fx.balance(&yam(), fx.redeemer.vault()), 10 * ONE_E18);
}

// =============================================================================
// Failure paths leave no trace
// =============================================================================
#[test]
fn exhausting_the_pool_blocks_further_redemption() {
    let mut fx = Fixture::new();
    fx.fund_vault(&token1(), ONE_E18);
    fx.fund_vault(&token2(), 2 * ONE_E6);

    let owner = fx.owner;
    fx.approve_and_redeem(owner, owner, 100 * ONE_E18);
    assert_eq!(fx.redeemer.remaining_claim(), 0);
    // The whole treasury went out.
    assert_eq!(fx.balance(&token1(), owner), ONE_E18);
    assert_eq!(fx.balance(&token2(), owner), 2 * ONE_E6);

    // The pool gate fires before any balance or allowance check.
    fx.bank.approve(&yam(), owner, fx.redeemer.vault(), 1);
    let err = fx
        .redeemer
        .redeem(&mut fx.bank, owner, owner, 1)
        .unwrap_err();
    assert!(matches!(err, RedeemError::PoolExhausted));
}

#[test]
fn over_pool_claim_is_rejected_without_state_change() {
    let mut fx = Fixture::new();
    fx.fund_vault(&token1(), ONE_E18);
    let owner = fx.owner;
    fx.bank
        .approve(&yam(), owner, fx.redeemer.vault(), 100 * ONE_E18);

    // Pool is 100e18; the owner cannot surrender more than that even if
    // they somehow held more claim tokens.
    let err = fx
        .redeemer
        .redeem(&mut fx.bank, owner, owner, 101 * ONE_E18)
        .unwrap_err();
    assert!(matches!(err, RedeemError::ClaimExceedsPool { .. }));
    assert_eq!(fx.balance(&yam(), owner), 100 * ONE_E18);
    assert_eq!(fx.redeemer.remaining_claim(), 100 * ONE_E18);
}

#[test]
fn unapproved_redeem_is_rejected_without_state_change() {
    let mut fx = Fixture::new();
    fx.fund_vault(&token1(), ONE_E18);
    let owner = fx.owner;

    let err = fx
        .redeemer
        .redeem(&mut fx.bank, owner, owner, 10 * ONE_E18)
        .unwrap_err();
    assert!(matches!(err, RedeemError::InsufficientAllowance { .. }));
    assert_eq!(fx.balance(&yam(), owner), 100 * ONE_E18);
    assert_eq!(fx.balance(&token1(), fx.redeemer.vault()), ONE_E18);
    assert_eq!(fx.redeemer.remaining_claim(), 100 * ONE_E18);
}

// =============================================================================
// Invariants and read surface
// =============================================================================
#[test]
fn supply_is_conserved_through_the_whole_lifecycle() {
    let mut fx = Fixture::new();
    fx.fund_vault(&token1(), ONE_E18);
    fx.fund_vault(&token2(), 2 * ONE_E6);

    let (owner, user2) = (fx.owner, fx.user2);
    fx.bank.transfer(&yam(), owner, user2, 5 * ONE_E18).unwrap();
    fx.approve_and_redeem(owner, owner, 30 * ONE_E18);
    fx.approve_and_redeem(user2, user2, 5 * ONE_E18);
    let deadline = fx.deadline();
    fx.redeemer
        .return_to_origin(&mut fx.bank, deadline)
        .unwrap();

    for asset in [yam(), token1(), token2()] {
        fx.bank.verify_supply(&asset).unwrap();
    }
}

#[test]
fn read_surface_reports_configured_values() {
    let fx = Fixture::new();
    assert_eq!(*fx.redeemer.redeemed_token(), yam());
    assert_eq!(
        fx.redeemer.return_to_treasury(),
        Address::from_hex("0x97990B693835da58A281636296D2Bf02787DEa17").unwrap()
    );
    assert_eq!(fx.redeemer.deadline(), fx.deadline());
}
