//! Integration tests for the commit clock and game_tick().
//!
//! The clock is driven with synthetic instants, sampled every
//! TICK_INTERVAL_MS the way the terminal loop samples it.

use std::time::{Duration, Instant};

use inkblade::combat::encounter::EncounterState;
use inkblade::combat::logic::CombatEvent;
use inkblade::config::GameConfig;
use inkblade::core::game_logic::start_game;
use inkblade::core::tick::{game_tick, TickClock};
use inkblade::economy::types::SkillType;
use inkblade::{GameState, COMMIT_INTERVAL_MS, TICK_INTERVAL_MS};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn new_game() -> (GameState, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    (start_game(&GameConfig::default(), &mut rng), rng)
}

fn set_speed_level(state: &mut GameState, level: u32) {
    for skill in state
        .skills
        .iter_mut()
        .filter(|s| s.skill_type == SkillType::Speed)
    {
        skill.level = level;
    }
}

#[test]
fn test_sampling_commits_once_per_second() {
    let start = Instant::now();
    let mut clock = TickClock::new(start);
    let samples = 30_500 / TICK_INTERVAL_MS;

    let commits = (1..=samples)
        .filter(|i| clock.ready(start + Duration::from_millis(i * TICK_INTERVAL_MS)))
        .count();

    assert_eq!(commits as u64, 30_500 / COMMIT_INTERVAL_MS);
}

#[test]
fn test_stall_does_not_replay_missed_commits() {
    let start = Instant::now();
    let mut clock = TickClock::new(start);

    assert!(clock.ready(start + Duration::from_secs(10)));
    assert!(!clock.ready(start + Duration::from_millis(10_500)));
    assert!(clock.ready(start + Duration::from_secs(11)));
}

#[test]
fn test_tick_without_income_or_auto_is_quiet() {
    let (mut state, mut rng) = new_game();
    let hp = state.active_enemy().unwrap().current_hp;

    let result = game_tick(&mut state, &mut rng);

    assert_eq!(result.gold_earned, 0.0);
    assert_eq!(result.auto_damage, 0);
    assert!(result.combat_events.is_empty());
    assert!(!result.enemy_spawned);
    assert_eq!(state.active_enemy().unwrap().current_hp, hp);
}

#[test]
fn test_auto_damage_has_no_floating_number() {
    let (mut state, mut rng) = new_game();
    set_speed_level(&mut state, 1);

    let result = game_tick(&mut state, &mut rng);

    assert!(result.auto_damage > 0);
    assert!(!result
        .combat_events
        .iter()
        .any(|e| matches!(e, CombatEvent::FloatingNumber { .. })));
}

#[test]
fn test_auto_kills_keep_minions_coming() {
    let (mut state, mut rng) = new_game();
    set_speed_level(&mut state, 1_000);

    let mut kills = 0;
    for _ in 0..10 {
        let result = game_tick(&mut state, &mut rng);
        kills += result
            .combat_events
            .iter()
            .filter(|e| matches!(e, CombatEvent::EnemyDefeated { .. }))
            .count();
        assert!(result.enemy_spawned);
        assert_eq!(state.encounter.state(), EncounterState::MinionActive);
    }

    assert_eq!(kills, 10);
    assert_eq!(state.stats.stage, 1);
    assert!(state.stats.gold > 0.0);
}

#[test]
fn test_income_paid_even_without_enemy() {
    let (mut state, mut rng) = new_game();
    state.buildings[2].level = 1; // 300/s
    state.encounter.clear_active();

    let result = game_tick(&mut state, &mut rng);

    assert_eq!(result.gold_earned, 300.0);
    assert_eq!(state.stats.gold, 300.0);
    // The empty slot is refilled at the end of the commit
    assert!(result.enemy_spawned);
    assert!(state.active_enemy().is_some());
}
