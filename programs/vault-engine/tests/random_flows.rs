mod common;

use common::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use vault_engine::{AssetLedger, ShareLedger, U256};

const ACTORS: [Key; 3] = [ALICE, BOB, CAROL];
const STEPS: usize = 400;

/// (total_assets + asset offset, total_supply + share offset)
fn price_terms(vault: &TestVault) -> (U256, U256) {
    let offset = *vault.offset();
    (
        vault.total_assets() + offset.assets(),
        vault.total_supply() + offset.shares(),
    )
}

fn pick(rng: &mut StdRng) -> Key {
    ACTORS[rng.gen_range(0..ACTORS.len())]
}

/// Applies one random trade and returns the custody movement as (in, out)
fn step(vault: &mut TestVault, rng: &mut StdRng) -> (U256, U256) {
    let caller = pick(rng);
    let other = pick(rng);

    match rng.gen_range(0..6u8) {
        0 => {
            let balance = vault.asset_ledger().balance_of(&caller).low_u128();
            let assets = u(rng.gen_range(0..=balance.min(1_000_000_000)));
            let previewed = vault.preview_deposit(assets).unwrap();
            let minted = vault.deposit(&caller, assets, &other).unwrap();
            assert_eq!(minted, previewed);
            (assets, U256::zero())
        }
        1 => {
            let shares = u(rng.gen_range(0..1_000_000_000_000u128));
            let previewed = vault.preview_mint(shares).unwrap();
            if previewed <= vault.asset_ledger().balance_of(&caller) {
                let paid = vault.mint(&caller, shares, &other).unwrap();
                assert_eq!(paid, previewed);
                return (paid, U256::zero());
            }
            (U256::zero(), U256::zero())
        }
        2 => {
            let max = vault.max_withdraw(&caller).unwrap().low_u128();
            let assets = u(rng.gen_range(0..=max));
            let previewed = vault.preview_withdraw(assets).unwrap();
            let burned = vault.withdraw(&caller, assets, &other, &caller).unwrap();
            assert_eq!(burned, previewed);
            (U256::zero(), assets)
        }
        3 => {
            let max = vault.max_redeem(&caller).low_u128();
            let shares = u(rng.gen_range(0..=max));
            let previewed = vault.preview_redeem(shares).unwrap();
            let paid = vault.redeem(&caller, shares, &other, &caller).unwrap();
            assert_eq!(paid, previewed);
            (U256::zero(), paid)
        }
        4 => {
            // Redeem on behalf of `owner` through an exact allowance
            let owner = caller;
            let spender = other;
            if owner == spender {
                return (U256::zero(), U256::zero());
            }
            let max = vault.max_redeem(&owner).low_u128();
            let shares = u(rng.gen_range(0..=max));
            vault
                .share_ledger_mut()
                .approve(&owner, &spender, shares)
                .unwrap();
            let paid = vault.redeem(&spender, shares, &spender, &owner).unwrap();
            assert_eq!(vault.share_ledger().allowance(&owner, &spender), U256::zero());
            (U256::zero(), paid)
        }
        _ => {
            let balance = vault.asset_ledger().balance_of(&caller).low_u128();
            let amount = u(rng.gen_range(0..=balance.min(1_000_000)));
            donate(vault, caller, amount);
            (amount, U256::zero())
        }
    }
}

fn check_invariants(vault: &TestVault, before: (U256, U256)) {
    let supply: U256 = ACTORS
        .iter()
        .map(|actor| vault.share_ledger().balance_of(actor))
        .fold(U256::zero(), |sum, balance| sum + balance);
    assert_eq!(vault.total_supply(), supply);

    let claimable = ACTORS
        .iter()
        .map(|actor| vault.max_withdraw(actor).unwrap())
        .fold(U256::zero(), |sum, assets| sum + assets);
    assert!(
        claimable <= vault.total_assets(),
        "claims {claimable} exceed custody {}",
        vault.total_assets()
    );

    // Price per share never falls: assets0 / shares0 <= assets1 / shares1
    let (assets0, shares0) = before;
    let (assets1, shares1) = price_terms(vault);
    assert!(assets0 * shares1 <= assets1 * shares0, "share price decreased");
}

fn run(seed: u64, decimals_offset: u8) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut vault = vault(decimals_offset);
    let mut custody = U256::zero();

    for _ in 0..STEPS {
        let before = price_terms(&vault);
        let (entered, left) = step(&mut vault, &mut rng);
        custody = custody + entered - left;
        assert_eq!(vault.total_assets(), custody);
        check_invariants(&vault, before);
    }

    // Everyone can always leave with whatever their shares are worth
    for actor in ACTORS {
        let shares = vault.max_redeem(&actor);
        let expected = vault.preview_redeem(shares).unwrap();
        let paid = vault.redeem(&actor, shares, &actor, &actor).unwrap();
        assert_eq!(paid, expected);
    }
    assert_eq!(vault.total_supply(), U256::zero());
}

#[test]
fn random_flows_without_offset() {
    for seed in 0..8 {
        run(seed, 0);
    }
}

#[test]
fn random_flows_with_offset() {
    for seed in 100..108 {
        run(seed, 6);
    }
}

#[test]
fn random_flows_with_max_offset() {
    for seed in 200..204 {
        run(seed, 18);
    }
}
