use crate::localization::current_labels;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// A yes/no question guarding a destructive action. `entry` is the action
/// that runs when the user confirms.
#[derive(Debug)]
pub struct ConfirmDialogue<T> {
    prompt: String,
    pub entry: Option<T>,
}

impl<T> Default for ConfirmDialogue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ConfirmDialogue<T> {
    pub fn new() -> Self {
        Self {
            prompt: String::new(),
            entry: None,
        }
    }

    pub fn set(&mut self, prompt: String, entry: T) -> &mut Self {
        self.prompt = prompt;
        self.entry = Some(entry);
        self
    }

    pub fn has_value(&self) -> bool {
        self.entry.is_some()
    }

    /// Takes the pending action out, closing the dialogue.
    pub fn take(&mut self) -> Option<T> {
        self.prompt.clear();
        self.entry.take()
    }

    pub fn reset(&mut self) {
        self.prompt.clear();
        self.entry = None;
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if !self.has_value() {
            return;
        }
        let labels = current_labels();
        let widget = Paragraph::new(format!("{}\n{}", self.prompt, labels.yes_no_hint))
            .style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(labels.confirm));
        f.render_widget(widget, area);
    }
}
