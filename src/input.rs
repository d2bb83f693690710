//! Key handling for the game screen.
//!
//! The key-entry overlay takes priority, then global keys, then keys that
//! act on the selected row of the current tab.

use crossterm::event::{KeyCode, KeyEvent};
use inkblade::art::{ArtStudio, ArtSubject};
use inkblade::combat::encounter::EncounterMode;
use inkblade::core::game_logic::{
    buy, refresh_shop, set_language, synthesize, tap, toggle_boss_mode, upgrade_building,
    upgrade_skill,
};
use inkblade::GameState;
use rand::Rng;

use crate::ui::key_entry::KeyEntryScreen;
use crate::ui::{Tab, UiState};

/// Result of handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

pub fn handle_game_input(
    key: KeyEvent,
    state: &mut GameState,
    ui: &mut UiState,
    studio: Option<&mut ArtStudio>,
    rng: &mut impl Rng,
) -> InputResult {
    // 1. API key overlay swallows everything
    if let Some(entry) = ui.key_entry.as_mut() {
        match key.code {
            KeyCode::Esc => ui.key_entry = None,
            KeyCode::Enter => {
                if let Some(api_key) = entry.submit() {
                    if let Some(studio) = studio {
                        studio.set_credential(api_key);
                        ui.add_log_entry("New image API key set".to_string());
                    }
                    ui.key_entry = None;
                }
            }
            KeyCode::Backspace => entry.handle_backspace(),
            KeyCode::Char(c) => entry.handle_char_input(c),
            _ => {}
        }
        return InputResult::Continue;
    }

    // 2. Global keys
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::Char(' ') => {
            strike(state, ui, rng);
            return InputResult::Continue;
        }
        KeyCode::Tab => {
            ui.switch_tab(ui.tab.next());
            return InputResult::Continue;
        }
        KeyCode::Char(c @ '1'..='5') => {
            if let Some(tab) = Tab::from_digit(c) {
                ui.switch_tab(tab);
            }
            return InputResult::Continue;
        }
        KeyCode::Char('l') => {
            let next = state.language.toggle();
            set_language(state, next.code());
            return InputResult::Continue;
        }
        KeyCode::Char('b') => {
            let mode = toggle_boss_mode(state, rng);
            let message = match mode {
                EncounterMode::Boss => "You step forward to face the boss",
                EncounterMode::Minion => "You fall back to fight minions",
            };
            ui.add_log_entry(message.to_string());
            return InputResult::Continue;
        }
        KeyCode::Char('p') => {
            if let Some(studio) = studio {
                for subject in selected_subjects(state, ui) {
                    studio.request(subject);
                }
            }
            return InputResult::Continue;
        }
        KeyCode::Char('k') => {
            if studio.is_some() {
                ui.key_entry = Some(KeyEntryScreen::new());
            }
            return InputResult::Continue;
        }
        _ => {}
    }

    // 3. Tab keys
    match key.code {
        KeyCode::Up => {
            ui.selected = ui.selected.saturating_sub(1);
        }
        KeyCode::Down => {
            if ui.selected + 1 < ui.row_count(state) {
                ui.selected += 1;
            }
        }
        KeyCode::Enter if ui.tab == Tab::Battle => strike(state, ui, rng),
        KeyCode::Enter | KeyCode::Char('u') => activate_selected(state, ui),
        KeyCode::Char('r') if ui.tab == Tab::Shop => {
            refresh_shop(state, rng);
            ui.clamp_selection(state);
        }
        KeyCode::Char('s') if ui.tab == Tab::Bag => {
            if synthesize(state) {
                ui.add_log_entry("The scroll halves join into one".to_string());
                ui.clamp_selection(state);
            }
        }
        _ => {}
    }

    InputResult::Continue
}

fn strike(state: &mut GameState, ui: &mut UiState, rng: &mut impl Rng) {
    let events = tap(state, rng);
    ui.record_combat(&events);
}

/// Upgrade on Kung Fu and Invest, buy on Shop.
fn activate_selected(state: &mut GameState, ui: &mut UiState) {
    match ui.tab {
        Tab::KungFu => {
            if let Some(id) = state.skills.get(ui.selected).map(|s| s.id.clone()) {
                upgrade_skill(state, &id);
            }
        }
        Tab::Invest => {
            if let Some(id) = state.buildings.get(ui.selected).map(|b| b.id.clone()) {
                upgrade_building(state, &id);
            }
        }
        Tab::Shop => {
            let name = state.shop.get(ui.selected).map(|i| i.name.clone());
            if buy(state, ui.selected) {
                if let Some(name) = name {
                    ui.add_log_entry(format!("Bought {}", name));
                }
                ui.clamp_selection(state);
            }
        }
        Tab::Battle | Tab::Bag => {}
    }
}

/// Art subjects for what the player is looking at on the current tab.
pub fn selected_subjects(state: &GameState, ui: &UiState) -> Vec<ArtSubject> {
    match ui.tab {
        Tab::Battle => {
            let mut subjects: Vec<ArtSubject> =
                state.active_enemy().map(ArtSubject::enemy).into_iter().collect();
            if let Some(boss) = state.encounter.stage_boss() {
                subjects.push(ArtSubject::boss_avatar(boss));
            }
            subjects
        }
        Tab::KungFu => state
            .skills
            .get(ui.selected)
            .map(ArtSubject::skill)
            .into_iter()
            .collect(),
        Tab::Invest => state
            .buildings
            .get(ui.selected)
            .map(ArtSubject::building)
            .into_iter()
            .collect(),
        Tab::Shop => state
            .shop
            .get(ui.selected)
            .map(ArtSubject::item)
            .into_iter()
            .collect(),
        Tab::Bag => state
            .inventory
            .get(ui.selected)
            .map(ArtSubject::item)
            .into_iter()
            .collect(),
    }
}
