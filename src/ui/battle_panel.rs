use inkblade::art::{ArtStudio, ArtSubject};
use inkblade::combat::encounter::EncounterState;
use inkblade::combat::types::Enemy;
use inkblade::i18n::t;
use inkblade::GameState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use super::combat_effects::EffectType;
use super::{art_marker, UiState};

/// Draws the Battle tab: the enemy being fought, the boss banner and the log.
pub fn draw_battle(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    ui: &UiState,
    studio: Option<&ArtStudio>,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    draw_arena(frame, columns[0], state, ui, studio);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(3)])
        .split(columns[1]);

    draw_boss_banner(frame, side[0], state, studio);
    draw_combat_log(frame, side[1], ui);
}

fn draw_arena(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    ui: &UiState,
    studio: Option<&ArtStudio>,
) {
    let lang = state.language;
    let encounter_state = state.encounter.state();
    let border_color = if encounter_state == EncounterState::BossActive {
        Color::LightRed
    } else {
        Color::Gray
    };

    let arena_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", t(lang, "battle")));
    let inner = arena_block.inner(area);
    frame.render_widget(arena_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Name
            Constraint::Min(3),    // Floating numbers
            Constraint::Length(3), // HP bar
            Constraint::Length(1), // Banner effects
        ])
        .split(inner);

    match state.active_enemy() {
        Some(enemy) => {
            draw_enemy_name(frame, chunks[0], enemy, studio);
            draw_enemy_hp(frame, chunks[2], enemy);
        }
        None => {
            let searching = Paragraph::new(Span::styled(
                t(lang, "searching"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(searching, chunks[0]);
        }
    }

    draw_floating_numbers(frame, chunks[1], ui);
    draw_banner_effects(frame, chunks[3], ui);
}

fn draw_enemy_name(frame: &mut Frame, area: Rect, enemy: &Enemy, studio: Option<&ArtStudio>) {
    let key = ArtSubject::enemy(enemy).key;
    let name_style = if enemy.is_boss {
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![art_marker(studio, &key)];
    if enemy.is_boss {
        spans.push(Span::styled("☠ ", Style::default().fg(Color::LightRed)));
    }
    spans.push(Span::styled(enemy.name.clone(), name_style));
    spans.push(Span::styled(
        format!("  Lv.{}", enemy.level),
        Style::default().fg(Color::DarkGray),
    ));

    let name = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(name, area);
}

fn draw_enemy_hp(frame: &mut Frame, area: Rect, enemy: &Enemy) {
    let hp_ratio = enemy.hp_ratio();
    let hp_color = if hp_ratio > 0.66 {
        Color::Green
    } else if hp_ratio > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(hp_color).add_modifier(Modifier::BOLD))
        .label(format!("{}/{}", enemy.current_hp, enemy.max_hp))
        .ratio(hp_ratio.clamp(0.0, 1.0));
    frame.render_widget(gauge, area);
}

/// Damage numbers drift from the bottom of the area to the top over their lifetime.
fn draw_floating_numbers(frame: &mut Frame, area: Rect, ui: &UiState) {
    if area.height == 0 {
        return;
    }
    let bottom = area.height - 1;
    let mut rows: Vec<Vec<Span>> = vec![Vec::new(); area.height as usize];

    for effect in &ui.effects {
        if !matches!(effect.effect_type, EffectType::DamageNumber { .. }) {
            continue;
        }
        if let Some(line) = effect.render() {
            let row = (bottom - effect.rise(bottom)) as usize;
            if !rows[row].is_empty() {
                rows[row].push(Span::raw("  "));
            }
            rows[row].extend(line.spans);
        }
    }

    let lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_banner_effects(frame: &mut Frame, area: Rect, ui: &UiState) {
    let latest = ui
        .effects
        .iter()
        .rev()
        .filter(|e| e.is_active() && !matches!(e.effect_type, EffectType::DamageNumber { .. }))
        .find_map(|e| e.render());

    if let Some(line) = latest {
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}

fn draw_boss_banner(frame: &mut Frame, area: Rect, state: &GameState, studio: Option<&ArtStudio>) {
    let lang = state.language;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(format!(" {} ", t(lang, "boss_challenge")));

    let lines = match state.encounter.stage_boss() {
        Some(boss) => {
            let key = ArtSubject::boss_avatar(boss).key;
            let (action, action_style) = if state.encounter.is_boss_mode() {
                (
                    format!("[b] {}", t(lang, "minion")),
                    Style::default().fg(Color::Gray),
                )
            } else {
                (
                    format!("[b] {}", t(lang, "boss_warning")),
                    Style::default()
                        .fg(Color::LightRed)
                        .add_modifier(Modifier::BOLD),
                )
            };
            vec![
                Line::from(vec![
                    art_marker(studio, &key),
                    Span::styled(
                        boss.name.clone(),
                        Style::default()
                            .fg(Color::LightRed)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("HP {}/{}", boss.current_hp, boss.max_hp),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(Span::styled(
                    t(lang, "boss_desc"),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(action, action_style)),
            ]
        }
        None => vec![Line::from(Span::styled(
            t(lang, "searching"),
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let banner = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(banner, area);
}

fn draw_combat_log(frame: &mut Frame, area: Rect, ui: &UiState) {
    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = ui
        .log
        .iter()
        .take(visible)
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == 0 {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(entry.clone(), style))
        })
        .collect();

    let log = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Log "))
        .wrap(Wrap { trim: true });
    frame.render_widget(log, area);
}
