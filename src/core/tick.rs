//! Game loop driver: the clock that paces commits and the per-commit work.
//!
//! The presentation layer samples [`TickClock`] every `TICK_INTERVAL_MS`.
//! Passive gold and auto damage are only committed once a full second has
//! passed since the previous commit, so their rates stay per-second no matter
//! how unevenly the loop wakes up. [`game_tick`] performs one commit and
//! returns a [`TickResult`] so the UI can react without the engine touching
//! any UI type.

use std::time::{Duration, Instant};

use rand::Rng;

use super::constants::COMMIT_INTERVAL_MS;
use super::game_logic::spawn_enemy_if_needed;
use super::game_state::GameState;
use crate::combat::logic::{apply_damage, CombatEvent, DamageSource};

/// Decides when a commit is due.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    last_commit: Instant,
    interval: Duration,
}

impl TickClock {
    pub fn new(now: Instant) -> Self {
        Self {
            last_commit: now,
            interval: Duration::from_millis(COMMIT_INTERVAL_MS),
        }
    }

    /// Returns true, and restarts the interval from `now`, once at least one
    /// full interval has elapsed since the last commit.
    pub fn ready(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_commit) >= self.interval {
            self.last_commit = now;
            true
        } else {
            false
        }
    }

    /// Time left until the next commit, for loop poll timeouts.
    pub fn until_next(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last_commit))
    }
}

/// Outcome of one commit.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// Gold added by buildings this commit
    pub gold_earned: f64,
    /// Auto damage dealt this commit
    pub auto_damage: u64,
    /// Combat events caused by the auto damage, in order
    pub combat_events: Vec<CombatEvent>,
    /// A new enemy entered the slot after this commit
    pub enemy_spawned: bool,
}

impl TickResult {
    pub fn stage_advanced(&self) -> bool {
        self.combat_events
            .iter()
            .any(|e| matches!(e, CombatEvent::StageAdvanced { .. }))
    }
}

/// Performs one commit: passive gold, then one hit of auto damage.
pub fn game_tick(state: &mut GameState, rng: &mut impl Rng) -> TickResult {
    let mut result = TickResult::default();
    let derived = state.derived();

    // ── 1. Passive income ───────────────────────────────────────
    if derived.passive_gold > 0.0 {
        state.stats.gold += derived.passive_gold;
        result.gold_earned = derived.passive_gold;
    }

    // ── 2. Auto damage ──────────────────────────────────────────
    let enemy_alive = state.active_enemy().is_some_and(|e| e.is_alive());
    if derived.final_auto > 0 && enemy_alive {
        result.auto_damage = derived.final_auto;
        result.combat_events = apply_damage(state, derived.final_auto, DamageSource::Auto, rng);
    }

    // ── 3. Respawn ──────────────────────────────────────────────
    result.enemy_spawned = spawn_enemy_if_needed(state, rng);

    result
}
