//! Static shop item catalogue.

use super::types::{Item, ItemEffects, ItemType, Rarity};

/// Synthesis group shared by the two bamboo scroll halves.
pub const ANCIENT_SCROLL_GROUP: &str = "scroll_ancient";

fn template(
    id: &str,
    name: &str,
    description: &str,
    item_type: ItemType,
    rarity: Rarity,
    price: f64,
    effects: ItemEffects,
) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        item_type,
        rarity,
        price,
        effects,
        part_of: None,
    }
}

/// Returns the templates the shop draws from.
pub fn item_pool() -> Vec<Item> {
    let mut scroll_top = template(
        "i3",
        "Bamboo Scroll (Top)",
        "Part of an ancient text.",
        ItemType::Material,
        Rarity::Uncommon,
        2000.0,
        ItemEffects::default(),
    );
    scroll_top.part_of = Some(ANCIENT_SCROLL_GROUP.to_string());

    let mut scroll_bottom = template(
        "i4",
        "Bamboo Scroll (Bot)",
        "Part of an ancient text.",
        ItemType::Material,
        Rarity::Uncommon,
        2000.0,
        ItemEffects::default(),
    );
    scroll_bottom.part_of = Some(ANCIENT_SCROLL_GROUP.to_string());

    vec![
        template(
            "i1",
            "Wooden Chair",
            "Simple comfort. Adds Craftsmanship.",
            ItemType::Artifact,
            Rarity::Common,
            500.0,
            ItemEffects {
                craftsmanship: Some(5.0),
                ..Default::default()
            },
        ),
        template(
            "i2",
            "Iron Sword",
            "A standard blade.",
            ItemType::Weapon,
            Rarity::Common,
            800.0,
            ItemEffects {
                attack_flat: Some(25.0),
                ..Default::default()
            },
        ),
        scroll_top,
        scroll_bottom,
        template(
            "i5",
            "Jade Pendant",
            "Brings good fortune.",
            ItemType::Artifact,
            Rarity::Rare,
            5000.0,
            ItemEffects {
                luck: Some(10.0),
                ..Default::default()
            },
        ),
        template(
            "i6",
            "Dragon Well Tea",
            "Increases gold production slightly.",
            ItemType::Consumable,
            Rarity::Rare,
            1500.0,
            ItemEffects {
                gold_rate: Some(0.1),
                ..Default::default()
            },
        ),
        template(
            "i7",
            "Red Ink Stone",
            "Essential for high level calligraphy.",
            ItemType::Material,
            Rarity::Epic,
            15000.0,
            ItemEffects {
                craftsmanship: Some(50.0),
                ..Default::default()
            },
        ),
        template(
            "i8",
            "Phoenix Feather",
            "A legendary material burning with eternal fire.",
            ItemType::Artifact,
            Rarity::Legendary,
            100000.0,
            ItemEffects {
                attack_percent: Some(1.0),
                ..Default::default()
            },
        ),
        template(
            "i9",
            "Tiger Tally",
            "Commands the armies of the west.",
            ItemType::Artifact,
            Rarity::Epic,
            25000.0,
            ItemEffects {
                attack_flat: Some(500.0),
                ..Default::default()
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pool_ids_unique() {
        let pool = item_pool();
        let ids: HashSet<_> = pool.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids.len(), pool.len());
        assert_eq!(pool.len(), 9);
    }

    #[test]
    fn test_scroll_halves_share_group() {
        let pool = item_pool();
        let halves: Vec<_> = pool
            .iter()
            .filter(|i| i.part_of.as_deref() == Some(ANCIENT_SCROLL_GROUP))
            .collect();
        assert_eq!(halves.len(), 2);
        assert!(halves.iter().all(|i| i.item_type == ItemType::Material));
    }
}
