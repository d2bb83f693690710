use rand::Rng;

use crate::core::game_logic::now_ms;
use crate::core::game_state::GameState;

/// Where a hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageSource {
    Tap,
    Auto,
}

/// Events produced by damage resolution, for the combat log and effects.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    /// Transient number shown where the player tapped
    FloatingNumber { value: u64 },
    /// Enemy took damage and survived
    Hit {
        enemy_name: String,
        damage: u64,
        remaining_hp: u64,
        source: DamageSource,
    },
    EnemyDefeated {
        enemy_name: String,
        gold_reward: f64,
        was_boss: bool,
    },
    /// A boss fell and the next stage began
    StageAdvanced { new_stage: u32, boss_name: String },
}

/// Applies `amount` damage to the active enemy.
///
/// Without an active enemy nothing happens. A hit that brings HP to zero
/// defeats the enemy: gold equal to a tenth of its max HP is granted and the
/// slot is emptied. Defeating the stage boss also advances the stage, leaves
/// boss mode and rolls the boss of the new stage.
pub fn apply_damage(
    state: &mut GameState,
    amount: u64,
    source: DamageSource,
    rng: &mut impl Rng,
) -> Vec<CombatEvent> {
    let mut events = Vec::new();

    let Some(enemy) = state.encounter.active_enemy_mut() else {
        return events;
    };

    if source == DamageSource::Tap {
        events.push(CombatEvent::FloatingNumber { value: amount });
    }

    enemy.take_damage(amount);

    if enemy.is_alive() {
        events.push(CombatEvent::Hit {
            enemy_name: enemy.name.clone(),
            damage: amount,
            remaining_hp: enemy.current_hp,
            source,
        });
        return events;
    }

    let gold_reward = enemy.gold_reward();
    let was_boss = enemy.is_boss;
    let enemy_name = enemy.name.clone();

    state.stats.gold += gold_reward;
    state.encounter.clear_active();
    tracing::debug!(enemy = %enemy_name, gold = gold_reward, was_boss, "enemy defeated");

    events.push(CombatEvent::EnemyDefeated {
        enemy_name,
        gold_reward,
        was_boss,
    });

    if was_boss {
        state.stats.stage += 1;
        state.encounter.enter_minion_mode();
        state
            .encounter
            .generate_stage_boss(state.stats.stage, now_ms(), rng);

        let boss_name = state
            .encounter
            .stage_boss()
            .map(|b| b.name.clone())
            .unwrap_or_default();
        tracing::info!(stage = state.stats.stage, boss = %boss_name, "stage advanced");

        events.push(CombatEvent::StageAdvanced {
            new_stage: state.stats.stage,
            boss_name,
        });
    }

    events
}
