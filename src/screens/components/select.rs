use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::fmt::Display;

#[derive(Debug)]
pub struct Select<T>
where
    T: Display + Clone + PartialEq,
{
    selection: ListState,
    value: Option<T>,
    pub writing_mode: bool,
    label: String,
    values: Vec<T>,
}

impl<T: Display + Clone + PartialEq> Select<T> {
    pub fn new(label: String, values: Vec<T>, initial: Option<T>, writing_mode: bool) -> Self {
        let index = initial
            .as_ref()
            .and_then(|v| values.iter().position(|x| x == v))
            .or(if values.is_empty() { None } else { Some(0) });
        let mut selection = ListState::default();
        selection.select(index);
        Self {
            selection,
            value: index.map(|i| values[i].clone()),
            writing_mode,
            label,
            values,
        }
    }

    pub fn get_selected_value(&self) -> Option<T> {
        self.value.clone()
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if self.writing_mode {
            self.render_writing(f, area);
        } else {
            self.render_reading(f, area);
        }
    }

    fn render_reading(&mut self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            format!("{}: ", self.label),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(value) = &self.value {
            spans.push(Span::raw(value.to_string()));
        }
        let widget = Paragraph::new(Text::from(Line::from(spans)));
        f.render_widget(widget, area);
    }

    fn render_writing(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .values
            .iter()
            .map(|entry| ListItem::new(entry.to_string()))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(Span::styled(
                self.label.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )))
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::REVERSED),
            )
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, area, &mut self.selection);
    }

    pub fn handle_up(&mut self) {
        if !self.writing_mode || self.values.is_empty() {
            return;
        }
        let next = match self.selection.selected() {
            Some(0) | None => self.values.len() - 1,
            Some(selected) => selected - 1,
        };
        self.select_value(next);
    }

    pub fn handle_down(&mut self) {
        if !self.writing_mode || self.values.is_empty() {
            return;
        }
        let next = match self.selection.selected() {
            Some(selected) => (selected + 1) % self.values.len(),
            None => 0,
        };
        self.select_value(next);
    }

    fn select_value(&mut self, new_selected: usize) {
        self.value = Some(self.values[new_selected].clone());
        self.selection.select(Some(new_selected));
    }
}
