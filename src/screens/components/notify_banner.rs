use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::localization::current_labels;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyMessage {
    Error(String),
    Warning(String),
    Info(String),
    /// Shown while deferred work runs; no key press is needed to dismiss it.
    Progress(String),
}

#[derive(Debug, Default)]
pub struct NotifyBanner {
    pub message: Option<NotifyMessage>,
}

impl NotifyBanner {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn set_error(&mut self, msg: String) {
        self.message = Some(NotifyMessage::Error(msg));
    }

    pub fn set_info(&mut self, msg: String) {
        self.message = Some(NotifyMessage::Info(msg));
    }

    pub fn set_warning(&mut self, msg: String) {
        self.message = Some(NotifyMessage::Warning(msg));
    }

    pub fn set_progress(&mut self, msg: String) {
        self.message = Some(NotifyMessage::Progress(msg));
    }

    pub fn reset(&mut self) {
        self.message = None;
    }

    /// True when a message waits to be dismissed by a key press.
    pub fn has_value(&self) -> bool {
        matches!(
            self.message,
            Some(NotifyMessage::Error(_) | NotifyMessage::Warning(_) | NotifyMessage::Info(_))
        )
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if let Some(message) = &self.message {
            let labels = current_labels();
            let (msg, color, title) = match message {
                NotifyMessage::Info(m) => (m, Color::Blue, labels.info),
                NotifyMessage::Error(m) => (m, Color::Red, labels.error),
                NotifyMessage::Warning(m) => (m, Color::Yellow, labels.warning),
                NotifyMessage::Progress(m) => (m, Color::DarkGray, labels.google_sync),
            };
            let widget = Paragraph::new(msg.clone())
                .style(
                    Style::default()
                        .fg(Color::White)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(title));
            f.render_widget(widget, area);
        }
    }
}
