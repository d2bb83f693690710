use inkblade::art::{ArtStudio, ArtSubject};
use inkblade::economy::types::SkillType;
use inkblade::i18n::t;
use inkblade::items::synthesis::can_synthesize;
use inkblade::items::types::{Item, Rarity};
use inkblade::{GameState, BAG_SLOTS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{art_marker, format_gold, UiState};

pub fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::Gray,
        Rarity::Uncommon => Color::Green,
        Rarity::Rare => Color::Blue,
        Rarity::Epic => Color::Magenta,
        Rarity::Legendary => Color::Yellow,
    }
}

fn cursor(selected: bool) -> Span<'static> {
    if selected {
        Span::styled(
            "▶ ",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("  ")
    }
}

fn cost_span(label: &str, cost: f64, affordable: bool) -> Span<'static> {
    let style = if affordable {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(format!("{} {}", label, format_gold(cost)), style)
}

/// Lines for a single entity description, dimmed.
fn description(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("    {}", text),
        Style::default().fg(Color::DarkGray),
    ))
}

pub fn draw_skills(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    ui: &UiState,
    studio: Option<&ArtStudio>,
) {
    let lang = state.language;
    let mut lines = Vec::new();

    for (i, skill) in state.skills.iter().enumerate() {
        let cost = skill.next_cost();
        let effect = match skill.skill_type {
            SkillType::Attack => format!("+{} ATK", skill.contribution()),
            SkillType::Speed => format!("+{} DPS", skill.contribution()),
            SkillType::Crit => "-".to_string(),
        };
        lines.push(Line::from(vec![
            cursor(i == ui.selected),
            art_marker(studio, &ArtSubject::skill(skill).key),
            Span::styled(
                skill.name.clone(),
                Style::default()
                    .fg(rarity_color(skill.rarity))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  Lv.{}  ", skill.level)),
            Span::styled(
                format!("{} {}  ", t(lang, "effect"), effect),
                Style::default().fg(Color::Cyan),
            ),
            cost_span(t(lang, "cost"), cost, state.can_afford(cost)),
        ]));
        lines.push(description(&skill.description));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", t(lang, "kungfu"))),
    );
    frame.render_widget(panel, area);
}

pub fn draw_buildings(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    ui: &UiState,
    studio: Option<&ArtStudio>,
) {
    let lang = state.language;
    let mut lines = Vec::new();

    for (i, building) in state.buildings.iter().enumerate() {
        let cost = building.next_cost();
        lines.push(Line::from(vec![
            cursor(i == ui.selected),
            art_marker(studio, &ArtSubject::building(building).key),
            Span::styled(
                building.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  Lv.{}  ", building.level)),
            Span::styled(
                format!(
                    "{} +{}/s (+{}/s)  ",
                    t(lang, "income"),
                    building.income(),
                    building.base_income
                ),
                Style::default().fg(Color::Green),
            ),
            cost_span(t(lang, "cost"), cost, state.can_afford(cost)),
        ]));
        lines.push(description(&building.description));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", t(lang, "invest"))),
    );
    frame.render_widget(panel, area);
}

fn item_line(item: &Item, selected: bool, studio: Option<&ArtStudio>) -> Line<'static> {
    Line::from(vec![
        cursor(selected),
        art_marker(studio, &ArtSubject::item(item).key),
        Span::styled(
            item.name.clone(),
            Style::default()
                .fg(rarity_color(item.rarity))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{}] ", item.item_type.name()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(item.effects.summary(), Style::default().fg(Color::Cyan)),
    ])
}

pub fn draw_shop(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    ui: &UiState,
    studio: Option<&ArtStudio>,
) {
    let lang = state.language;
    let mut lines = Vec::new();

    for (i, item) in state.shop.iter().enumerate() {
        let mut line = item_line(item, i == ui.selected, studio);
        line.spans.push(Span::raw("  "));
        line.spans
            .push(cost_span(t(lang, "buy"), item.price, state.can_afford(item.price)));
        lines.push(line);
        lines.push(description(&item.description));
    }

    if state.shop.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("[r] {}", t(lang, "refresh")),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", t(lang, "shop")))
            .title_alignment(Alignment::Left),
    );
    frame.render_widget(panel, area);
}

pub fn draw_bag(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    ui: &UiState,
    studio: Option<&ArtStudio>,
) {
    let lang = state.language;
    let derived = state.derived();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Stat summary
            Constraint::Length(3), // Synthesis
            Constraint::Min(0),    // Slots
        ])
        .split(area);

    let summary = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} {}", t(lang, "luck"), derived.final_luck),
            Style::default().fg(Color::Green),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} {}", t(lang, "craft"), derived.final_craft),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} {:+}%", t(lang, "gold"), derived.gold_rate_bonus_percent()),
            Style::default().fg(Color::Yellow),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center);
    frame.render_widget(summary, chunks[0]);

    let ready = can_synthesize(&state.inventory);
    let synthesis = Paragraph::new(Span::styled(
        format!("[s] {}", t(lang, "synthesize")),
        if ready {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        },
    ))
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center);
    frame.render_widget(synthesis, chunks[1]);

    let mut lines: Vec<Line> = state
        .inventory
        .iter()
        .enumerate()
        .map(|(i, item)| item_line(item, i == ui.selected, studio))
        .collect();
    let empty_slots = BAG_SLOTS.saturating_sub(state.inventory.len());
    if empty_slots > 0 {
        lines.push(Line::from(Span::styled(
            format!("  {} × ·", empty_slots),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let slots = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " {} {}/{} ",
            t(lang, "bag"),
            state.inventory.len(),
            BAG_SLOTS
        )))
        .wrap(Wrap { trim: false });
    frame.render_widget(slots, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_colors_distinct() {
        let colors: Vec<Color> = [
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
        ]
        .iter()
        .map(|r| rarity_color(*r))
        .collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
