//! Combining the two bamboo scroll halves into a finished artifact.
//!
//! Halves are recognised by the `(Top)` / `(Bot)` markers in their names.
//! Shop listings keep the template name after any rarity prefix, so a
//! re-rolled `[EPIC] Bamboo Scroll (Top)` still matches.

use super::types::{Item, ItemEffects, ItemType, Rarity};
use crate::core::game_state::GameState;

pub const TOP_HALF_MARKER: &str = "(Top)";
pub const BOTTOM_HALF_MARKER: &str = "(Bot)";

/// The artifact produced by synthesis.
pub fn ancient_secret_art() -> Item {
    Item {
        id: "completed_scroll".to_string(),
        name: "Ancient Secret Art".to_string(),
        description: "A completed masterpiece.".to_string(),
        item_type: ItemType::Artifact,
        rarity: Rarity::Legendary,
        price: 0.0,
        effects: ItemEffects {
            attack_percent: Some(0.5),
            luck: Some(20.0),
            ..Default::default()
        },
        part_of: None,
    }
}

/// Indices of the first top half and the first bottom half that is a
/// different item. A name carrying both markers counts as one half only.
fn find_pair(inventory: &[Item]) -> Option<(usize, usize)> {
    let top = inventory
        .iter()
        .position(|item| item.name.contains(TOP_HALF_MARKER))?;
    let bottom = inventory
        .iter()
        .enumerate()
        .position(|(i, item)| i != top && item.name.contains(BOTTOM_HALF_MARKER))?;
    Some((top, bottom))
}

/// True when the bag holds both a top and a bottom half.
pub fn can_synthesize(inventory: &[Item]) -> bool {
    find_pair(inventory).is_some()
}

/// Consumes the first top half and first bottom half in the bag and adds
/// one [`ancient_secret_art`]. Returns false, changing nothing, when either
/// half is missing.
pub fn synthesize(state: &mut GameState) -> bool {
    let Some((top, bottom)) = find_pair(&state.inventory) else {
        return false;
    };

    // Remove the higher index first so the lower one stays valid.
    let (first, second) = if top > bottom {
        (top, bottom)
    } else {
        (bottom, top)
    };
    state.inventory.remove(first);
    state.inventory.remove(second);

    let artifact = ancient_secret_art();
    tracing::info!(artifact = %artifact.name, "synthesis complete");
    state.inventory.push(artifact);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::pool::item_pool;
    use crate::items::shop::make_listing;

    fn pool_item(id: &str) -> Item {
        item_pool().into_iter().find(|i| i.id == id).unwrap()
    }

    #[test]
    fn test_requires_both_halves() {
        let mut state = GameState::default();
        state.inventory.push(pool_item("i3"));
        assert!(!can_synthesize(&state.inventory));
        assert!(!synthesize(&mut state));
        assert_eq!(state.inventory.len(), 1);
    }

    #[test]
    fn test_pair_becomes_artifact() {
        let mut state = GameState::default();
        state.inventory.push(pool_item("i1"));
        state.inventory.push(pool_item("i4"));
        state.inventory.push(pool_item("i3"));

        assert!(can_synthesize(&state.inventory));
        assert!(synthesize(&mut state));

        let names: Vec<_> = state.inventory.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Wooden Chair", "Ancient Secret Art"]);
        assert!(!can_synthesize(&state.inventory));
    }

    #[test]
    fn test_one_artifact_per_pair() {
        let mut state = GameState::default();
        for _ in 0..2 {
            state.inventory.push(pool_item("i3"));
            state.inventory.push(pool_item("i4"));
        }
        state.inventory.push(pool_item("i3"));

        assert!(synthesize(&mut state));
        assert!(synthesize(&mut state));
        assert!(!synthesize(&mut state));

        let artifacts = state
            .inventory
            .iter()
            .filter(|i| i.id == "completed_scroll")
            .count();
        assert_eq!(artifacts, 2);
        assert_eq!(state.inventory.len(), 3);
    }

    #[test]
    fn test_item_with_both_markers_is_one_half() {
        let mut state = GameState::default();
        state.inventory.push(Item {
            name: "Scroll (Top)(Bot)".to_string(),
            ..pool_item("i3")
        });
        assert!(!can_synthesize(&state.inventory));
        assert!(!synthesize(&mut state));
        assert_eq!(state.inventory.len(), 1);

        state.inventory.push(pool_item("i4"));
        assert!(synthesize(&mut state));
        let names: Vec<_> = state.inventory.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Ancient Secret Art"]);
    }

    #[test]
    fn test_rerolled_halves_still_match() {
        let mut state = GameState::default();
        state
            .inventory
            .push(make_listing(&pool_item("i3"), Rarity::Epic, 0, 0));
        state
            .inventory
            .push(make_listing(&pool_item("i4"), Rarity::Rare, 0, 1));
        assert!(synthesize(&mut state));
    }
}
