use super::types::{Building, Skill, SkillType};
use crate::core::constants::BASE_DAMAGE;
use crate::items::types::Item;

/// Gold cost of raising a skill or building from `level` to `level + 1`.
///
/// cost = floor(base_cost * cost_multiplier^level)
pub fn upgrade_cost(base_cost: f64, cost_multiplier: f64, level: u32) -> f64 {
    (base_cost * cost_multiplier.powi(level as i32)).floor()
}

/// Stats folded from skills, buildings and the bag. Never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DerivedStats {
    /// Damage per tap
    pub final_damage: u64,
    /// Damage per second from speed skills
    pub final_auto: u64,
    pub final_luck: f64,
    pub final_craft: f64,
    /// Gold per second including item bonuses
    pub passive_gold: f64,
    /// Gold per second from buildings alone
    pub base_income: f64,
}

impl DerivedStats {
    /// Folds the three inputs into the derived stats.
    ///
    /// Attack skills add to a base of 10. Items are then applied in bag
    /// order: each adds its flat attack to the running total and then scales
    /// the running total by its percent bonus, so percent bonuses compound.
    pub fn calculate(skills: &[Skill], buildings: &[Building], inventory: &[Item]) -> Self {
        let mut damage = BASE_DAMAGE;
        let mut auto = 0.0;

        for skill in skills {
            match skill.skill_type {
                SkillType::Attack => damage += skill.contribution(),
                SkillType::Speed => auto += skill.contribution(),
                SkillType::Crit => {}
            }
        }

        let mut luck = 0.0;
        let mut craft = 0.0;
        let mut gold_mult = 1.0;

        for item in inventory {
            let effects = &item.effects;
            damage += effects.attack_flat();
            damage *= 1.0 + effects.attack_percent();
            luck += effects.luck();
            craft += effects.craftsmanship();
            gold_mult += effects.gold_rate();
        }

        let base_income: f64 = buildings.iter().map(Building::income).sum();

        Self {
            final_damage: damage.max(0.0).floor() as u64,
            final_auto: auto.max(0.0).floor() as u64,
            final_luck: luck,
            final_craft: craft,
            passive_gold: base_income * gold_mult,
            base_income,
        }
    }

    /// Item gold bonus as a whole percentage for display.
    ///
    /// The divisor falls back to 1 when no building produces income.
    pub fn gold_rate_bonus_percent(&self) -> i64 {
        let divisor = if self.base_income > 0.0 {
            self.base_income
        } else {
            1.0
        };
        ((self.passive_gold / divisor - 1.0) * 100.0).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::types::{initial_buildings, initial_skills};
    use crate::items::types::{ItemEffects, ItemType, Rarity};

    fn item_with(effects: ItemEffects) -> Item {
        Item {
            id: "t".to_string(),
            name: "Test".to_string(),
            description: String::new(),
            item_type: ItemType::Artifact,
            rarity: Rarity::Common,
            price: 0.0,
            effects,
            part_of: None,
        }
    }

    #[test]
    fn test_upgrade_cost_floor() {
        // 100 * 1.15^2 = 132.25
        assert_eq!(upgrade_cost(100.0, 1.15, 2), 132.0);
        assert_eq!(upgrade_cost(100.0, 1.15, 0), 100.0);
    }

    #[test]
    fn test_upgrade_cost_strictly_increasing() {
        for skill in initial_skills() {
            for level in 0..40 {
                let now = upgrade_cost(skill.base_cost, skill.cost_multiplier, level);
                let next = upgrade_cost(skill.base_cost, skill.cost_multiplier, level + 1);
                assert!(next > now, "{} level {}", skill.name, level);
            }
        }
        for building in initial_buildings() {
            for level in 0..40 {
                let now = upgrade_cost(building.base_cost, building.cost_multiplier, level);
                let next = upgrade_cost(building.base_cost, building.cost_multiplier, level + 1);
                assert!(next > now, "{} level {}", building.name, level);
            }
        }
    }

    #[test]
    fn test_starting_stats() {
        let stats = DerivedStats::calculate(&initial_skills(), &initial_buildings(), &[]);
        // 10 base + Basic Fist level 1 * 5
        assert_eq!(stats.final_damage, 15);
        assert_eq!(stats.final_auto, 0);
        assert_eq!(stats.final_luck, 0.0);
        assert_eq!(stats.passive_gold, 0.0);
    }

    #[test]
    fn test_speed_skills_drive_auto_damage() {
        let mut skills = initial_skills();
        skills[2].level = 3; // Wind Steps, 2 per level
        let stats = DerivedStats::calculate(&skills, &[], &[]);
        assert_eq!(stats.final_auto, 6);
        assert_eq!(stats.final_damage, 15);
    }

    #[test]
    fn test_crit_skills_contribute_nothing() {
        let mut skills = initial_skills();
        skills[0].skill_type = SkillType::Crit;
        let stats = DerivedStats::calculate(&skills, &[], &[]);
        assert_eq!(stats.final_damage, 10);
        assert_eq!(stats.final_auto, 0);
    }

    #[test]
    fn test_flat_then_percent() {
        let sword = item_with(ItemEffects {
            attack_flat: Some(25.0),
            ..Default::default()
        });
        let feather = item_with(ItemEffects {
            attack_percent: Some(1.0),
            ..Default::default()
        });
        let stats = DerivedStats::calculate(&initial_skills(), &[], &[sword, feather]);
        assert_eq!(stats.final_damage, 80); // (15 + 25) * 2
    }

    #[test]
    fn test_percent_bonuses_compound_in_bag_order() {
        let feather = item_with(ItemEffects {
            attack_percent: Some(1.0),
            ..Default::default()
        });
        let sword = item_with(ItemEffects {
            attack_flat: Some(25.0),
            ..Default::default()
        });
        let stats = DerivedStats::calculate(
            &initial_skills(),
            &[],
            &[feather.clone(), feather, sword],
        );
        // 15 * 2 * 2 + 25
        assert_eq!(stats.final_damage, 85);
    }

    #[test]
    fn test_luck_craft_and_gold_rate() {
        let pendant = item_with(ItemEffects {
            luck: Some(10.0),
            craftsmanship: Some(5.0),
            ..Default::default()
        });
        let tea = item_with(ItemEffects {
            gold_rate: Some(0.1),
            ..Default::default()
        });
        let mut buildings = initial_buildings();
        buildings[0].level = 2; // 10 gold/s
        buildings[1].level = 1; // 45 gold/s

        let stats = DerivedStats::calculate(&[], &buildings, &[pendant.clone(), pendant, tea]);
        assert_eq!(stats.final_luck, 20.0);
        assert_eq!(stats.final_craft, 10.0);
        assert_eq!(stats.base_income, 55.0);
        assert!((stats.passive_gold - 60.5).abs() < 1e-9);
        assert_eq!(stats.gold_rate_bonus_percent(), 10);
    }

    #[test]
    fn test_gold_rate_percent_without_buildings() {
        let stats = DerivedStats::calculate(&[], &initial_buildings(), &[]);
        // 0 / 1 - 1 => -100%, never a division by zero
        assert_eq!(stats.gold_rate_bonus_percent(), -100);
    }
}
