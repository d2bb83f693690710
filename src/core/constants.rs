// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const COMMIT_INTERVAL_MS: u64 = 1000;
pub const FLOATING_NUMBER_SECONDS: f64 = 0.8;

// Player
pub const BASE_DAMAGE: f64 = 10.0;
pub const STARTING_STAGE: u32 = 1;

// Enemy scaling: hp = ENEMY_BASE_HP * ENEMY_HP_GROWTH^stage (* BOSS_HP_MULTIPLIER)
pub const ENEMY_BASE_HP: f64 = 50.0;
pub const ENEMY_HP_GROWTH: f64 = 1.5;
pub const BOSS_HP_MULTIPLIER: f64 = 10.0;

// Gold dropped on defeat, as a fraction of the enemy's max HP
pub const GOLD_DROP_RATIO: f64 = 0.1;

// Shop
pub const DEFAULT_SHOP_SIZE: usize = 6;
pub const LUCK_ROLL_FACTOR: f64 = 0.001;

// Shop rarity thresholds (roll strictly above the threshold)
pub const LEGENDARY_THRESHOLD: f64 = 0.98;
pub const EPIC_THRESHOLD: f64 = 0.90;
pub const RARE_THRESHOLD: f64 = 0.75;
pub const UNCOMMON_THRESHOLD: f64 = 0.50;

// Inventory
pub const BAG_SLOTS: usize = 20;
