mod battle_panel;
mod catalog_panels;
pub mod combat_effects;
pub mod key_entry;

use std::collections::VecDeque;

use inkblade::art::{ArtStatus, ArtStudio};
use inkblade::combat::logic::{CombatEvent, DamageSource};
use inkblade::core::tick::TickResult;
use inkblade::i18n::t;
use inkblade::GameState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use combat_effects::{EffectType, VisualEffect};
use key_entry::KeyEntryScreen;

/// Max number of combat log lines kept
const MAX_LOG_ENTRIES: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Battle,
    KungFu,
    Invest,
    Shop,
    Bag,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Battle, Tab::KungFu, Tab::Invest, Tab::Shop, Tab::Bag];

    /// Translation key of the tab title.
    pub fn label_key(&self) -> &'static str {
        match self {
            Tab::Battle => "battle",
            Tab::KungFu => "kungfu",
            Tab::Invest => "invest",
            Tab::Shop => "shop",
            Tab::Bag => "bag",
        }
    }

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn from_digit(digit: char) -> Option<Tab> {
        let index = digit.to_digit(10)? as usize;
        index.checked_sub(1).and_then(|i| Tab::ALL.get(i).copied())
    }
}

/// Presentation-only state: never read by the engine.
#[derive(Debug)]
pub struct UiState {
    pub tab: Tab,
    /// Highlighted row in the current list tab
    pub selected: usize,
    pub effects: Vec<VisualEffect>,
    pub log: VecDeque<String>,
    /// Open while the player types a new API key
    pub key_entry: Option<KeyEntryScreen>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            tab: Tab::Battle,
            selected: 0,
            effects: Vec::new(),
            log: VecDeque::with_capacity(MAX_LOG_ENTRIES),
            key_entry: None,
        }
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            self.tab = tab;
            self.selected = 0;
        }
    }

    pub fn add_log_entry(&mut self, message: String) {
        if self.log.len() >= MAX_LOG_ENTRIES {
            self.log.pop_back();
        }
        self.log.push_front(message);
    }

    /// Number of selectable rows on the current tab.
    pub fn row_count(&self, state: &GameState) -> usize {
        match self.tab {
            Tab::Battle => 0,
            Tab::KungFu => state.skills.len(),
            Tab::Invest => state.buildings.len(),
            Tab::Shop => state.shop.len(),
            Tab::Bag => state.inventory.len(),
        }
    }

    pub fn clamp_selection(&mut self, state: &GameState) {
        let rows = self.row_count(state);
        if self.selected >= rows {
            self.selected = rows.saturating_sub(1);
        }
    }

    /// Turns combat events into log lines and effects.
    pub fn record_combat(&mut self, events: &[CombatEvent]) {
        for event in events {
            match event {
                CombatEvent::FloatingNumber { value } => {
                    self.effects.push(VisualEffect::damage_number(*value));
                }
                CombatEvent::Hit {
                    source: DamageSource::Auto,
                    enemy_name,
                    damage,
                    ..
                } => {
                    self.add_log_entry(format!("~ {} takes {} auto damage", enemy_name, damage));
                }
                CombatEvent::Hit { .. } => {}
                CombatEvent::EnemyDefeated {
                    enemy_name,
                    gold_reward,
                    was_boss,
                } => {
                    let icon = if *was_boss { "☠" } else { "✗" };
                    self.add_log_entry(format!(
                        "{} {} defeated, +{} gold",
                        icon, enemy_name, gold_reward
                    ));
                    self.effects.push(VisualEffect::new(
                        EffectType::Defeat { gold: *gold_reward },
                        1.0,
                    ));
                }
                CombatEvent::StageAdvanced {
                    new_stage,
                    boss_name,
                } => {
                    self.add_log_entry(format!(
                        "★ Stage {} reached. {} awaits.",
                        new_stage, boss_name
                    ));
                    self.effects.push(VisualEffect::new(
                        EffectType::StageClear { stage: *new_stage },
                        2.0,
                    ));
                }
            }
        }
    }

    pub fn record_tick(&mut self, result: &TickResult) {
        self.record_combat(&result.combat_events);
    }

    pub fn update_effects(&mut self, delta: f64) {
        self.effects.retain_mut(|effect| effect.update(delta));
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Small marker showing whether an entity's painting is cached.
pub fn art_marker(studio: Option<&ArtStudio>, key: &str) -> Span<'static> {
    match studio.map(|s| s.status(key)) {
        Some(ArtStatus::Ready) => Span::styled("◉ ", Style::default().fg(Color::White)),
        Some(ArtStatus::Painting) => Span::styled("◌ ", Style::default().fg(Color::Yellow)),
        Some(ArtStatus::Missing) => Span::styled("○ ", Style::default().fg(Color::DarkGray)),
        None => Span::raw(""),
    }
}

/// Formats gold without fractional digits, with thousands separators.
pub fn format_gold(gold: f64) -> String {
    let whole = gold.max(0.0).floor() as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, state: &GameState, ui: &UiState, studio: Option<&ArtStudio>) {
    let size = frame.size();
    let show_credential_banner = studio.is_some_and(|s| s.needs_credential());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Body
            Constraint::Length(if show_credential_banner { 1 } else { 0 }),
            Constraint::Length(1), // Footer
        ])
        .split(size);

    draw_header(frame, chunks[0], state);
    draw_tabs(frame, chunks[1], state, ui);

    match ui.tab {
        Tab::Battle => battle_panel::draw_battle(frame, chunks[2], state, ui, studio),
        Tab::KungFu => catalog_panels::draw_skills(frame, chunks[2], state, ui, studio),
        Tab::Invest => catalog_panels::draw_buildings(frame, chunks[2], state, ui, studio),
        Tab::Shop => catalog_panels::draw_shop(frame, chunks[2], state, ui, studio),
        Tab::Bag => catalog_panels::draw_bag(frame, chunks[2], state, ui, studio),
    }

    if show_credential_banner {
        let banner = Paragraph::new(Line::from(Span::styled(
            " The image service rejected the API key. Press [k] to enter a new one. ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(banner, chunks[3]);
    }

    draw_footer(frame, chunks[4], ui);

    if let Some(entry) = &ui.key_entry {
        entry.draw(frame, size);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, state: &GameState) {
    let lang = state.language;
    let derived = state.derived();

    let line = Line::from(vec![
        Span::styled(
            format!("{} {}", t(lang, "power"), derived.final_damage),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("{} {}", t(lang, "gold"), format_gold(state.stats.gold)),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("{} {}", t(lang, "stage"), state.stats.stage),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("+{:.1}/s", derived.passive_gold),
            Style::default().fg(Color::Green),
        ),
    ]);

    let header = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 墨剑 Ink Blade ")
                .title_alignment(Alignment::Center),
        )
        .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_tabs(frame: &mut Frame, area: Rect, state: &GameState, ui: &UiState) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, t(state.language, tab.label_key()))))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(ui.tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, ui: &UiState) {
    let hints = match ui.tab {
        Tab::Battle => "[Space] Strike  [b] Boss/Minion  [p] Paint  [Tab] Next  [l] Lang  [q] Quit",
        Tab::KungFu | Tab::Invest => {
            "[↑↓] Select  [Enter/u] Upgrade  [p] Paint  [Space] Strike  [Tab] Next  [q] Quit"
        }
        Tab::Shop => "[↑↓] Select  [Enter/u] Buy  [r] Refresh  [p] Paint  [Tab] Next  [q] Quit",
        Tab::Bag => "[↑↓] Select  [s] Synthesize  [p] Paint  [Tab] Next  [q] Quit",
    };
    let footer = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
