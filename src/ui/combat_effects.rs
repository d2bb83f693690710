use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use inkblade::core::constants::FLOATING_NUMBER_SECONDS;

#[derive(Debug, Clone)]
pub struct VisualEffect {
    pub effect_type: EffectType,
    pub lifetime: f64,
    pub max_lifetime: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EffectType {
    /// Number that floats up from a tap
    DamageNumber { value: u64 },
    /// Brief burst when an enemy falls
    Defeat { gold: f64 },
    /// Banner after a boss kill
    StageClear { stage: u32 },
}

impl VisualEffect {
    pub fn new(effect_type: EffectType, max_lifetime: f64) -> Self {
        Self {
            effect_type,
            lifetime: 0.0,
            max_lifetime,
        }
    }

    pub fn damage_number(value: u64) -> Self {
        Self::new(EffectType::DamageNumber { value }, FLOATING_NUMBER_SECONDS)
    }

    pub fn update(&mut self, delta: f64) -> bool {
        self.lifetime += delta;
        self.lifetime <= self.max_lifetime
    }

    pub fn is_active(&self) -> bool {
        self.lifetime <= self.max_lifetime
    }

    /// Rows the effect has drifted upward, for floating numbers.
    pub fn rise(&self, max_rows: u16) -> u16 {
        let progress = (self.lifetime / self.max_lifetime).clamp(0.0, 1.0);
        (progress * max_rows as f64) as u16
    }

    pub fn render(&self) -> Option<Line<'static>> {
        match &self.effect_type {
            EffectType::DamageNumber { value } => {
                let progress = self.lifetime / self.max_lifetime;
                let style = if progress > 0.6 {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD)
                };
                Some(Line::from(Span::styled(format!("-{}", value), style)))
            }
            EffectType::Defeat { gold } => {
                if self.lifetime < 0.5 {
                    Some(Line::from(Span::styled(
                        format!("✦ +{} ✦", gold),
                        Style::default().fg(Color::Yellow),
                    )))
                } else {
                    None
                }
            }
            EffectType::StageClear { stage } => Some(Line::from(Span::styled(
                format!("═══ Stage {} ═══", stage),
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_update() {
        let mut effect = VisualEffect::damage_number(42);
        assert!(effect.is_active());
        assert!(effect.update(0.4));
        assert!(effect.update(0.4));
        assert!(!effect.update(0.1));
    }

    #[test]
    fn test_rise() {
        let mut effect = VisualEffect::damage_number(1);
        assert_eq!(effect.rise(4), 0);
        effect.update(0.4);
        assert_eq!(effect.rise(4), 2);
    }

    #[test]
    fn test_defeat_burst_fades() {
        let mut effect = VisualEffect::new(EffectType::Defeat { gold: 7.0 }, 1.0);
        assert!(effect.render().is_some());
        effect.update(0.6);
        assert!(effect.render().is_none());
    }
}
