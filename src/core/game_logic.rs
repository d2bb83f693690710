//! Player actions. Every action is a silent no-op when it cannot apply
//! (unknown id, short on gold); the returned bool says whether anything
//! changed.

use chrono::Utc;
use rand::Rng;

use super::game_state::GameState;
use crate::combat::encounter::EncounterMode;
use crate::combat::logic::{apply_damage, CombatEvent, DamageSource};
use crate::config::GameConfig;
use crate::i18n::Language;
use crate::items::shop::{buy_item, generate_shop};

/// Wall-clock milliseconds used to make entity ids unique.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Creates a playable game: first shop batch, stage boss and first minion.
pub fn start_game(config: &GameConfig, rng: &mut impl Rng) -> GameState {
    let mut state = GameState::new(config);
    refresh_shop(&mut state, rng);
    let stage = state.stats.stage;
    state.encounter.generate_stage_boss(stage, now_ms(), rng);
    spawn_enemy_if_needed(&mut state, rng);
    tracing::info!(
        gold = state.stats.gold,
        stage,
        language = state.language.code(),
        "new game started"
    );
    state
}

/// Refills an empty enemy slot according to the encounter mode.
pub fn spawn_enemy_if_needed(state: &mut GameState, rng: &mut impl Rng) -> bool {
    let stage = state.stats.stage;
    state.encounter.ensure_enemy(stage, now_ms(), rng)
}

/// Manual tap: deals the current tap damage to the active enemy.
pub fn tap(state: &mut GameState, rng: &mut impl Rng) -> Vec<CombatEvent> {
    if state.active_enemy().is_none() {
        return Vec::new();
    }
    let damage = state.derived().final_damage;
    let events = apply_damage(state, damage, DamageSource::Tap, rng);
    spawn_enemy_if_needed(state, rng);
    events
}

/// Buys the shop listing at `slot`.
pub fn buy(state: &mut GameState, slot: usize) -> bool {
    buy_item(state, slot)
}

/// Raises a skill by one level if it exists and is affordable.
pub fn upgrade_skill(state: &mut GameState, skill_id: &str) -> bool {
    let Some(index) = state.skills.iter().position(|s| s.id == skill_id) else {
        return false;
    };
    let cost = state.skills[index].next_cost();
    if !state.can_afford(cost) {
        return false;
    }

    state.stats.gold -= cost;
    let skill = &mut state.skills[index];
    skill.level += 1;
    tracing::info!(skill = %skill.name, level = skill.level, cost, "skill trained");
    true
}

/// Raises a building by one level if it exists and is affordable.
pub fn upgrade_building(state: &mut GameState, building_id: &str) -> bool {
    let Some(index) = state.buildings.iter().position(|b| b.id == building_id) else {
        return false;
    };
    let cost = state.buildings[index].next_cost();
    if !state.can_afford(cost) {
        return false;
    }

    state.stats.gold -= cost;
    let building = &mut state.buildings[index];
    building.level += 1;
    tracing::info!(building = %building.name, level = building.level, cost, "building upgraded");
    true
}

/// Replaces the shop batch with a fresh one rolled with the current luck.
pub fn refresh_shop(state: &mut GameState, rng: &mut impl Rng) {
    let luck = state.derived().final_luck;
    state.shop = generate_shop(&state.item_pool, luck, state.shop_size, now_ms(), rng);
}

/// Switches between minion and boss fights and refills the enemy slot.
pub fn toggle_boss_mode(state: &mut GameState, rng: &mut impl Rng) -> EncounterMode {
    let mode = state.encounter.toggle_boss_mode();
    spawn_enemy_if_needed(state, rng);
    tracing::debug!(?mode, "encounter mode changed");
    mode
}

/// Combines a matched scroll pair into the finished artifact.
pub fn synthesize(state: &mut GameState) -> bool {
    crate::items::synthesis::synthesize(state)
}

/// Sets the UI language from a code such as `en` or `zh`. Unknown codes
/// leave the language unchanged.
pub fn set_language(state: &mut GameState, code: &str) -> bool {
    match Language::from_code(code) {
        Some(language) => {
            state.language = language;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::encounter::EncounterState;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn new_game(gold: f64) -> (GameState, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let config = GameConfig {
            starting_gold: gold,
            ..Default::default()
        };
        (start_game(&config, &mut rng), rng)
    }

    #[test]
    fn test_start_game() {
        let (state, _) = new_game(0.0);
        assert_eq!(state.shop.len(), 6);
        assert_eq!(state.encounter.state(), EncounterState::MinionActive);
        assert_eq!(state.encounter.stage_boss().unwrap().max_hp, 750);
    }

    #[test]
    fn test_tap_uses_final_damage() {
        let (mut state, mut rng) = new_game(0.0);
        let before = state.active_enemy().unwrap().current_hp;
        tap(&mut state, &mut rng);
        assert_eq!(state.active_enemy().unwrap().current_hp, before - 15);
    }

    #[test]
    fn test_tap_kill_respawns() {
        let (mut state, mut rng) = new_game(0.0);
        // 75 hp minion at 15 per tap
        for _ in 0..5 {
            tap(&mut state, &mut rng);
        }
        assert_eq!(state.stats.gold, 7.0);
        let enemy = state.active_enemy().unwrap();
        assert_eq!(enemy.current_hp, enemy.max_hp);
    }

    #[test]
    fn test_upgrade_skill() {
        let (mut state, _) = new_game(100.0);
        assert!(upgrade_skill(&mut state, "s1"));
        assert_eq!(state.skills[0].level, 2);
        assert_eq!(state.stats.gold, 30.0); // 100 - 70

        // level 2 -> 3 costs floor(50 * 1.4^2), well above what is left
        assert!(!upgrade_skill(&mut state, "s1"));
        assert_eq!(state.skills[0].level, 2);
        assert_eq!(state.stats.gold, 30.0);
    }

    #[test]
    fn test_upgrade_unknown_ids_noop() {
        let (mut state, _) = new_game(1_000_000.0);
        assert!(!upgrade_skill(&mut state, "nope"));
        assert!(!upgrade_building(&mut state, "nope"));
        assert_eq!(state.stats.gold, 1_000_000.0);
    }

    #[test]
    fn test_upgrade_building() {
        let (mut state, _) = new_game(250.0);
        assert!(upgrade_building(&mut state, "b1"));
        assert_eq!(state.buildings[0].level, 1);
        assert_eq!(state.stats.gold, 150.0);
        assert_eq!(state.derived().passive_gold, 5.0);
    }

    #[test]
    fn test_refresh_replaces_batch() {
        let (mut state, mut rng) = new_game(0.0);
        state.shop.truncate(2);
        refresh_shop(&mut state, &mut rng);
        assert_eq!(state.shop.len(), 6);
    }

    #[test]
    fn test_toggle_boss_mode_round_trip() {
        let (mut state, mut rng) = new_game(0.0);

        assert_eq!(toggle_boss_mode(&mut state, &mut rng), EncounterMode::Boss);
        assert_eq!(state.encounter.state(), EncounterState::BossActive);

        assert_eq!(toggle_boss_mode(&mut state, &mut rng), EncounterMode::Minion);
        assert_eq!(state.encounter.state(), EncounterState::MinionActive);
    }

    #[test]
    fn test_set_language() {
        let (mut state, _) = new_game(0.0);
        assert!(set_language(&mut state, "en"));
        assert_eq!(state.language, Language::En);
        assert!(!set_language(&mut state, "klingon"));
        assert_eq!(state.language, Language::En);
    }
}
