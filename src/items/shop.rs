use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{Item, Rarity};
use crate::core::constants::*;
use crate::core::game_state::GameState;

/// Maps a uniform roll in `[0, 1)` and the player's luck to a rarity tier.
///
/// Luck shifts the effective roll upward by `luck * 0.001` before it is
/// compared against the fixed thresholds, so for a fixed roll more luck
/// never yields a lower tier.
pub fn roll_rarity(roll: f64, luck: f64) -> Rarity {
    let luck_factor = if luck.is_finite() {
        luck.max(0.0) * LUCK_ROLL_FACTOR
    } else {
        0.0
    };
    let r = roll + luck_factor;

    if r > LEGENDARY_THRESHOLD {
        Rarity::Legendary
    } else if r > EPIC_THRESHOLD {
        Rarity::Epic
    } else if r > RARE_THRESHOLD {
        Rarity::Rare
    } else if r > UNCOMMON_THRESHOLD {
        Rarity::Uncommon
    } else {
        Rarity::Common
    }
}

/// Turns a pool template into a shop listing of the rolled rarity.
///
/// Type and effects come from the template; rarity and price are
/// overridden. A listing whose rarity differs from the template's own gets
/// a `[RARITY]` name prefix.
pub fn make_listing(template: &Item, rarity: Rarity, timestamp_ms: i64, slot: usize) -> Item {
    let name = if rarity != template.rarity {
        format!("[{}] {}", rarity.tag(), template.name)
    } else {
        template.name.clone()
    };

    Item {
        id: format!("{}-{}-{}", template.id, timestamp_ms, slot),
        name,
        rarity,
        price: template.price * rarity.price_multiplier(),
        ..template.clone()
    }
}

/// Generates a fresh shop batch of `size` listings.
pub fn generate_shop(
    pool: &[Item],
    luck: f64,
    size: usize,
    timestamp_ms: i64,
    rng: &mut impl Rng,
) -> Vec<Item> {
    let mut batch = Vec::with_capacity(size);

    for slot in 0..size {
        let roll: f64 = rng.gen();
        let rarity = roll_rarity(roll, luck);
        let Some(template) = pool.choose(rng) else {
            break;
        };
        batch.push(make_listing(template, rarity, timestamp_ms, slot));
    }

    tracing::debug!(
        size = batch.len(),
        luck,
        rarities = ?batch.iter().map(|i| i.rarity).collect::<Vec<_>>(),
        "shop refreshed"
    );
    batch
}

/// Buys the listing in `slot`.
///
/// Rejected with no state change when the slot does not exist or gold is
/// short. On success the price is deducted, exactly that listing leaves the
/// shop and the item joins the bag.
pub fn buy_item(state: &mut GameState, slot: usize) -> bool {
    let Some(listing) = state.shop.get(slot) else {
        return false;
    };
    if !state.can_afford(listing.price) {
        return false;
    }

    let item = state.shop.remove(slot);
    state.stats.gold -= item.price;
    tracing::info!(item = %item.name, price = item.price, gold = state.stats.gold, "item bought");
    state.inventory.push(item);
    true
}
