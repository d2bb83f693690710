use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Overlay for typing a replacement image API key.
#[derive(Debug, Default)]
pub struct KeyEntryScreen {
    pub key_input: String,
    pub validation_error: Option<String>,
}

impl KeyEntryScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let popup = centered_rect(60, 11, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Image API Key ")
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Prompt
                Constraint::Length(3), // Input field
                Constraint::Length(1), // Validation
                Constraint::Min(0),    // Controls
            ])
            .split(inner);

        let prompt = Paragraph::new("Paste a key for the image service. It is kept for this session only.")
            .style(Style::default().fg(Color::Gray));
        f.render_widget(prompt, chunks[0]);

        let input_widget = Paragraph::new(format!("{}_", self.masked()))
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White));
        f.render_widget(input_widget, chunks[1]);

        let validation_text = match &self.validation_error {
            Some(error) => Line::from(Span::styled(
                format!("✗ {}", error),
                Style::default().fg(Color::Red),
            )),
            None => Line::from(""),
        };
        f.render_widget(Paragraph::new(validation_text), chunks[2]);

        let controls = Paragraph::new("[Enter] Save    [Esc] Cancel")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::DIM),
            );
        f.render_widget(controls, chunks[3]);
    }

    /// Shows the last four characters only.
    pub fn masked(&self) -> String {
        let count = self.key_input.chars().count();
        let visible: String = self.key_input.chars().skip(count.saturating_sub(4)).collect();
        format!("{}{}", "*".repeat(count.saturating_sub(4)), visible)
    }

    pub fn handle_char_input(&mut self, c: char) {
        if !c.is_control() {
            self.key_input.push(c);
            self.validation_error = None;
        }
    }

    pub fn handle_backspace(&mut self) {
        self.key_input.pop();
        self.validation_error = None;
    }

    /// Trimmed key, or None (with an error shown) when blank.
    pub fn submit(&mut self) -> Option<String> {
        let key = self.key_input.trim();
        if key.is_empty() {
            self.validation_error = Some("Key cannot be empty".to_string());
            None
        } else {
            Some(key.to_string())
        }
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_masking() {
        let mut screen = KeyEntryScreen::new();
        for c in "abcdef".chars() {
            screen.handle_char_input(c);
        }
        assert_eq!(screen.masked(), "**cdef");
        screen.handle_backspace();
        assert_eq!(screen.key_input, "abcde");
    }

    #[test]
    fn test_blank_key_rejected() {
        let mut screen = KeyEntryScreen::new();
        screen.handle_char_input(' ');
        assert_eq!(screen.submit(), None);
        assert!(screen.validation_error.is_some());

        screen.handle_char_input('k');
        assert_eq!(screen.submit().as_deref(), Some("k"));
        assert!(screen.validation_error.is_none());
    }

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 40, 8);
        let rect = centered_rect(60, 11, area);
        assert_eq!(rect, Rect::new(0, 0, 40, 8));
    }
}
