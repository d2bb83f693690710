//! Integration tests for upgrades, derived stats and passive income.

use inkblade::config::GameConfig;
use inkblade::core::game_logic::{start_game, synthesize, upgrade_building, upgrade_skill};
use inkblade::core::tick::game_tick;
use inkblade::economy::logic::upgrade_cost;
use inkblade::items::pool::item_pool;
use inkblade::items::synthesis::ancient_secret_art;
use inkblade::items::types::Item;
use inkblade::GameState;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn game_with_gold(gold: f64) -> (GameState, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let config = GameConfig {
        starting_gold: gold,
        ..GameConfig::default()
    };
    (start_game(&config, &mut rng), rng)
}

fn pool_item(id: &str) -> Item {
    item_pool().into_iter().find(|i| i.id == id).unwrap()
}

#[test]
fn test_upgrade_charges_floor_cost() {
    let (mut state, _) = game_with_gold(1_000.0);

    // Basic Fist starts at level 1: floor(50 * 1.4^1) = 70
    assert!(upgrade_skill(&mut state, "s1"));
    assert_eq!(state.skills[0].level, 2);
    assert_eq!(state.stats.gold, 930.0);
    assert_eq!(state.derived().final_damage, 20);

    // Tea House level 0 costs its base cost
    assert!(upgrade_building(&mut state, "b1"));
    assert_eq!(state.stats.gold, 830.0);
    assert_eq!(state.derived().passive_gold, 5.0);
}

#[test]
fn test_unaffordable_upgrade_changes_nothing() {
    let (mut state, _) = game_with_gold(99.0);
    let before_buildings = state.buildings.clone();

    assert!(!upgrade_building(&mut state, "b1"));
    assert_eq!(state.stats.gold, 99.0);
    assert_eq!(state.buildings, before_buildings);
}

#[test]
fn test_unknown_ids_are_noops() {
    let (mut state, _) = game_with_gold(1e9);
    assert!(!upgrade_skill(&mut state, "nope"));
    assert!(!upgrade_building(&mut state, "b99"));
    assert_eq!(state.stats.gold, 1e9);
}

#[test]
fn test_gold_never_negative_across_upgrades() {
    let (mut state, _) = game_with_gold(5_000.0);
    loop {
        let bought_skill = upgrade_skill(&mut state, "s1");
        let bought_building = upgrade_building(&mut state, "b1");
        assert!(state.stats.gold >= 0.0);
        if !bought_skill && !bought_building {
            break;
        }
    }
    assert!(state.stats.gold < upgrade_cost(100.0, 1.15, state.buildings[0].level));
}

#[test]
fn test_passive_income_accumulates_per_tick() {
    let (mut state, mut rng) = game_with_gold(0.0);
    state.buildings[0].level = 2; // 10/s
    state.inventory.push(pool_item("i6")); // +10% gold

    let mut earned = 0.0;
    for _ in 0..5 {
        earned += game_tick(&mut state, &mut rng).gold_earned;
    }

    assert!((earned - 55.0).abs() < 1e-9);
    assert!((state.stats.gold - 55.0).abs() < 1e-9);
    assert_eq!(state.derived().gold_rate_bonus_percent(), 10);
}

#[test]
fn test_item_bonuses_in_bag_order() {
    let (mut state, _) = game_with_gold(0.0);
    // Starting tap damage is 15
    state.inventory.push(pool_item("i8")); // +100%
    state.inventory.push(pool_item("i2")); // +25 flat
    assert_eq!(state.derived().final_damage, 55); // 15 * 2 + 25

    state.inventory.clear();
    state.inventory.push(pool_item("i2"));
    state.inventory.push(pool_item("i8"));
    assert_eq!(state.derived().final_damage, 80); // (15 + 25) * 2
}

#[test]
fn test_synthesis_grants_artifact_bonuses() {
    let (mut state, _) = game_with_gold(0.0);
    state.inventory.push(pool_item("i3"));
    state.inventory.push(pool_item("i5"));
    state.inventory.push(pool_item("i4"));

    assert!(synthesize(&mut state));

    assert_eq!(state.inventory.len(), 2);
    assert_eq!(state.inventory[0].id, "i5");
    assert_eq!(state.inventory[1], ancient_secret_art());
    let derived = state.derived();
    assert_eq!(derived.final_luck, 30.0);
    assert_eq!(derived.final_damage, 22); // floor(15 * 1.5)

    assert!(!synthesize(&mut state));
}
