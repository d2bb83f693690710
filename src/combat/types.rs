use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::constants::*;

pub const MINION_NAMES: [&str; 9] = [
    "Rogue Thief",
    "Wild Wolf",
    "Bandit",
    "Corrupt Guard",
    "Swordsman",
    "Iron Golem",
    "Shadow Assassin",
    "Forest Spirit",
    "Drunken Master",
];

pub const BOSS_NAMES: [&str; 6] = [
    "Wolf King",
    "Tiger General",
    "Demon of the North",
    "Blood Monk",
    "Jade Emperor's Shadow",
    "Void Dragon",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: String,
    pub name: String,
    pub max_hp: u64,
    pub current_hp: u64,
    pub level: u32,
    pub is_boss: bool,
}

impl Enemy {
    pub fn new(id: String, name: String, max_hp: u64, level: u32, is_boss: bool) -> Self {
        Self {
            id,
            name,
            max_hp,
            current_hp: max_hp,
            level,
            is_boss,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn take_damage(&mut self, amount: u64) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Remaining HP as a fraction in `[0, 1]` for gauges.
    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        (self.current_hp as f64 / self.max_hp as f64).clamp(0.0, 1.0)
    }

    /// Gold granted when this enemy is defeated. Based on max HP, so
    /// overkill never changes the reward.
    pub fn gold_reward(&self) -> f64 {
        (self.max_hp as f64 * GOLD_DROP_RATIO).floor()
    }
}

/// Max HP of a regular enemy at `stage`: floor(50 * 1.5^stage).
pub fn minion_hp(stage: u32) -> u64 {
    (ENEMY_BASE_HP * ENEMY_HP_GROWTH.powi(stage as i32)).floor() as u64
}

/// Max HP of the stage boss: floor(50 * 1.5^stage * 10).
pub fn boss_hp(stage: u32) -> u64 {
    (ENEMY_BASE_HP * ENEMY_HP_GROWTH.powi(stage as i32) * BOSS_HP_MULTIPLIER).floor() as u64
}

fn pick_name(names: &[&'static str], rng: &mut impl Rng) -> String {
    names.choose(rng).copied().unwrap_or("Stranger").to_string()
}

/// Rolls a fresh minion for `stage`.
pub fn generate_minion(stage: u32, timestamp_ms: i64, rng: &mut impl Rng) -> Enemy {
    Enemy::new(
        format!("minion-{}", timestamp_ms),
        pick_name(&MINION_NAMES, rng),
        minion_hp(stage),
        stage,
        false,
    )
}

/// Rolls the persistent boss for `stage`.
pub fn generate_boss(stage: u32, timestamp_ms: i64, rng: &mut impl Rng) -> Enemy {
    Enemy::new(
        format!("boss-{}-{}", stage, timestamp_ms),
        pick_name(&BOSS_NAMES, rng),
        boss_hp(stage),
        stage,
        true,
    )
}
