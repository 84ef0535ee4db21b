use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Key hints shown at the bottom left, wrapped to the available width.
#[derive(Debug, Clone, Default)]
pub struct NavigationFooter {}

impl NavigationFooter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn render(&self, f: &mut Frame, area: Rect, entries: &[(String, String)]) {
        let max_width = area.width.saturating_sub(1) as usize;
        let mut lines = Vec::new();
        let mut current_line: Vec<Span> = Vec::new();
        let mut width = 0;
        for (key, description) in entries {
            let entry_len = key.chars().count() + description.chars().count() + 6; // " = " + gap
            if width > 0 && width + entry_len > max_width {
                lines.push(Line::from(std::mem::take(&mut current_line)));
                width = 0;
            }
            current_line.push(Span::styled(key.clone(), Style::default().fg(Color::Cyan)));
            current_line.push(Span::raw(" = "));
            current_line.push(Span::styled(
                description.clone(),
                Style::default().fg(Color::White),
            ));
            current_line.push(Span::raw("   "));
            width += entry_len;
        }
        if !current_line.is_empty() {
            lines.push(Line::from(current_line));
        }
        let paragraph = Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .borders(Borders::NONE)
                    .padding(Padding::new(1, 0, 0, 0)),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}
