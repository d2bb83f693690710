//! Integration tests for shop generation and buying.
//!
//! Uses seeded ChaCha8Rng for deterministic behavior.

use inkblade::config::GameConfig;
use inkblade::core::game_logic::{buy, refresh_shop, start_game};
use inkblade::items::pool::item_pool;
use inkblade::items::shop::{generate_shop, make_listing, roll_rarity};
use inkblade::items::types::{Item, ItemEffects, Rarity};
use inkblade::GameState;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn pool_item(id: &str) -> Item {
    item_pool().into_iter().find(|i| i.id == id).unwrap()
}

fn game_with_gold(gold: f64) -> (GameState, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let config = GameConfig {
        starting_gold: gold,
        ..GameConfig::default()
    };
    (start_game(&config, &mut rng), rng)
}

#[test]
fn test_epic_roll_without_luck() {
    let rarity = roll_rarity(0.96, 0.0);
    assert_eq!(rarity, Rarity::Epic);

    let sword = pool_item("i2");
    let listing = make_listing(&sword, rarity, 1_700_000_000_000, 0);
    assert_eq!(listing.price, sword.price * 100.0);
    assert_eq!(listing.name, "[EPIC] Iron Sword");
    assert_eq!(listing.effects, sword.effects);
    assert_eq!(listing.item_type, sword.item_type);
}

#[test]
fn test_luck_never_lowers_rarity() {
    for roll_step in 0..100 {
        let roll = roll_step as f64 / 100.0;
        let mut previous = roll_rarity(roll, 0.0);
        for luck in [1.0, 10.0, 50.0, 100.0, 500.0, 1000.0] {
            let rarity = roll_rarity(roll, luck);
            assert!(
                rarity >= previous,
                "roll {} luck {} gave {:?} after {:?}",
                roll,
                luck,
                rarity,
                previous
            );
            previous = rarity;
        }
    }
}

#[test]
fn test_shop_batch_shape() {
    let pool = item_pool();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let batch = generate_shop(&pool, 0.0, 6, 1234, &mut rng);

    assert_eq!(batch.len(), 6);
    for (slot, listing) in batch.iter().enumerate() {
        assert!(listing.id.ends_with(&format!("-1234-{}", slot)));
        let template = pool
            .iter()
            .find(|t| listing.id.starts_with(&format!("{}-", t.id)))
            .unwrap();
        assert_eq!(listing.price, template.price * listing.rarity.price_multiplier());
        assert_eq!(listing.base_name(), template.name);
    }
}

#[test]
fn test_empty_pool_gives_empty_shop() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    assert!(generate_shop(&[], 0.0, 6, 0, &mut rng).is_empty());
}

#[test]
fn test_high_luck_shifts_distribution_up() {
    let pool = item_pool();
    let count_rare_plus = |luck: f64| {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        generate_shop(&pool, luck, 500, 0, &mut rng)
            .iter()
            .filter(|i| i.rarity >= Rarity::Rare)
            .count()
    };
    assert!(count_rare_plus(300.0) > count_rare_plus(0.0));
}

#[test]
fn test_buy_moves_exactly_one_listing() {
    let (mut state, _) = game_with_gold(0.0);
    state.shop = vec![
        make_listing(&pool_item("i1"), Rarity::Common, 0, 0),
        make_listing(&pool_item("i1"), Rarity::Common, 0, 1),
    ];
    state.stats.gold = 600.0;

    assert!(buy(&mut state, 1));
    assert_eq!(state.stats.gold, 100.0);
    assert_eq!(state.shop.len(), 1);
    assert_eq!(state.shop[0].id, "i1-0-0");
    assert_eq!(state.inventory.len(), 1);
    assert_eq!(state.inventory[0].id, "i1-0-1");
    assert_eq!(state.derived().final_craft, 5.0);
}

#[test]
fn test_buy_rejected_when_short_or_missing() {
    let (mut state, _) = game_with_gold(0.0);
    state.shop = vec![make_listing(&pool_item("i5"), Rarity::Rare, 0, 0)];
    state.stats.gold = 99_999.0;

    assert!(!buy(&mut state, 0)); // costs 100000
    assert!(!buy(&mut state, 7));
    assert_eq!(state.shop.len(), 1);
    assert!(state.inventory.is_empty());
    assert_eq!(state.stats.gold, 99_999.0);
}

#[test]
fn test_refresh_uses_current_luck() {
    let (mut state, mut rng) = game_with_gold(0.0);
    state.inventory.push(Item {
        effects: ItemEffects {
            luck: Some(1000.0),
            ..Default::default()
        },
        ..pool_item("i5")
    });

    refresh_shop(&mut state, &mut rng);

    assert_eq!(state.shop.len(), state.shop_size);
    // A full point of roll shift puts every listing in the top tier
    assert!(state.shop.iter().all(|i| i.rarity == Rarity::Legendary));
}
