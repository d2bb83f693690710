//! Enemy lifecycle: which enemy is on screen and what replaces it.
//!
//! The encounter owns a single active-enemy slot plus the persistent boss of
//! the current stage. The boss is stored exactly once; while it is being
//! fought the active slot only points at it, so every hit lands on the
//! persisted record and its HP survives leaving and re-entering boss mode.

use rand::Rng;

use super::types::{generate_boss, generate_minion, Enemy};

/// Which kind of enemy the player has chosen to fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncounterMode {
    #[default]
    Minion,
    Boss,
}

/// Contents of the active-enemy slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActiveEnemy {
    #[default]
    None,
    Minion(Enemy),
    /// The stage boss held in [`Encounter::stage_boss`]
    Boss,
}

/// Observable state of the slot, for callers that only need the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterState {
    NoEnemy,
    MinionActive,
    BossActive,
}

#[derive(Debug, Clone, Default)]
pub struct Encounter {
    mode: EncounterMode,
    active: ActiveEnemy,
    stage_boss: Option<Enemy>,
}

impl Encounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EncounterMode {
        self.mode
    }

    pub fn is_boss_mode(&self) -> bool {
        self.mode == EncounterMode::Boss
    }

    pub fn state(&self) -> EncounterState {
        match self.active {
            ActiveEnemy::None => EncounterState::NoEnemy,
            ActiveEnemy::Minion(_) => EncounterState::MinionActive,
            ActiveEnemy::Boss => EncounterState::BossActive,
        }
    }

    /// The enemy currently being fought.
    pub fn active_enemy(&self) -> Option<&Enemy> {
        match &self.active {
            ActiveEnemy::None => None,
            ActiveEnemy::Minion(enemy) => Some(enemy),
            ActiveEnemy::Boss => self.stage_boss.as_ref(),
        }
    }

    pub fn active_enemy_mut(&mut self) -> Option<&mut Enemy> {
        match &mut self.active {
            ActiveEnemy::None => None,
            ActiveEnemy::Minion(enemy) => Some(enemy),
            ActiveEnemy::Boss => self.stage_boss.as_mut(),
        }
    }

    /// The persisted boss of the current stage, fought or not.
    pub fn stage_boss(&self) -> Option<&Enemy> {
        self.stage_boss.as_ref()
    }

    /// Rolls a new stage boss, replacing any previous one.
    pub fn generate_stage_boss(&mut self, stage: u32, timestamp_ms: i64, rng: &mut impl Rng) {
        let boss = generate_boss(stage, timestamp_ms, rng);
        tracing::debug!(stage, name = %boss.name, hp = boss.max_hp, "stage boss generated");
        if self.active == ActiveEnemy::Boss {
            self.active = ActiveEnemy::None;
        }
        self.stage_boss = Some(boss);
    }

    /// Empties the active slot. The next [`Encounter::ensure_enemy`] refills it.
    pub fn clear_active(&mut self) {
        self.active = ActiveEnemy::None;
    }

    /// Fills an empty slot according to the current mode.
    ///
    /// Boss mode re-activates the persisted boss, never a fresh one. Minion
    /// mode rolls a new minion scaled to `stage`. Returns true when the slot
    /// was filled by this call.
    pub fn ensure_enemy(&mut self, stage: u32, timestamp_ms: i64, rng: &mut impl Rng) -> bool {
        if self.active != ActiveEnemy::None {
            return false;
        }

        if self.mode == EncounterMode::Boss && self.stage_boss.is_some() {
            self.active = ActiveEnemy::Boss;
        } else {
            self.mode = EncounterMode::Minion;
            let minion = generate_minion(stage, timestamp_ms, rng);
            tracing::debug!(stage, name = %minion.name, hp = minion.max_hp, "minion spawned");
            self.active = ActiveEnemy::Minion(minion);
        }
        true
    }

    /// Switches to boss mode, swapping out an active minion immediately.
    ///
    /// Does nothing and returns false when no stage boss exists yet.
    pub fn enter_boss_mode(&mut self) -> bool {
        if self.stage_boss.is_none() {
            return false;
        }
        self.mode = EncounterMode::Boss;
        self.active = ActiveEnemy::Boss;
        true
    }

    /// Switches to minion mode. An active boss is put back (HP kept) and the
    /// slot is left empty for the next spawn.
    pub fn enter_minion_mode(&mut self) {
        self.mode = EncounterMode::Minion;
        if self.active == ActiveEnemy::Boss {
            self.active = ActiveEnemy::None;
        }
    }

    /// Flips between minion and boss mode. Returns the resulting mode.
    pub fn toggle_boss_mode(&mut self) -> EncounterMode {
        match self.mode {
            EncounterMode::Minion => {
                self.enter_boss_mode();
            }
            EncounterMode::Boss => self.enter_minion_mode(),
        }
        self.mode
    }
}
