use crate::combat::encounter::Encounter;
use crate::combat::types::Enemy;
use crate::config::GameConfig;
use crate::core::constants::STARTING_STAGE;
use crate::economy::logic::DerivedStats;
use crate::economy::types::{initial_buildings, initial_skills, Building, Skill};
use crate::i18n::Language;
use crate::items::pool::item_pool;
use crate::items::types::Item;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerStats {
    pub gold: f64,
    pub stage: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            gold: 0.0,
            stage: STARTING_STAGE,
        }
    }
}

/// Everything the game knows, owned by one controller and handed out by
/// reference to the engine functions.
#[derive(Debug, Clone)]
pub struct GameState {
    pub stats: PlayerStats,
    pub skills: Vec<Skill>,
    pub buildings: Vec<Building>,
    pub inventory: Vec<Item>,
    /// Current shop batch, replaced wholesale on refresh
    pub shop: Vec<Item>,
    pub encounter: Encounter,
    pub language: Language,
    /// Templates the shop draws from
    pub item_pool: Vec<Item>,
    /// Slots per shop refresh
    pub shop_size: usize,
}

impl GameState {
    /// Bare state with the starting catalogue, no shop batch and no boss.
    ///
    /// Use [`crate::core::game_logic::start_game`] for a playable game.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            stats: PlayerStats {
                gold: config.starting_gold.max(0.0),
                stage: STARTING_STAGE,
            },
            skills: initial_skills(),
            buildings: initial_buildings(),
            inventory: Vec::new(),
            shop: Vec::new(),
            encounter: Encounter::new(),
            language: config.language,
            item_pool: item_pool(),
            shop_size: config.shop_size,
        }
    }

    /// Recomputes the derived stats from skills, buildings and the bag.
    pub fn derived(&self) -> DerivedStats {
        DerivedStats::calculate(&self.skills, &self.buildings, &self.inventory)
    }

    pub fn active_enemy(&self) -> Option<&Enemy> {
        self.encounter.active_enemy()
    }

    pub fn can_afford(&self, price: f64) -> bool {
        self.stats.gold >= price
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
