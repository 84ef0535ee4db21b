use std::sync::Arc;

use crate::{
    localization::current_labels,
    screens::{
        components::{
            date_picker::DatePicker, navigation_footer::NavigationFooter,
            notify_banner::NotifyBanner,
        },
        screen::{error_message, get_keybinding_actions, AppAction, Renderable, ScreenAsync},
    },
    shapes::{
        enums::ScreenActionEnum, keybinding::KeyBindings, roster::RosterAction,
        settings::current_settings,
    },
    store::RosterStore,
};
use async_trait::async_trait;
use crokey::{
    crossterm::event::{KeyCode, KeyEvent},
    Combiner,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Adds a training date, prefilled with the day after the latest one.
#[derive(Debug)]
pub struct AddTrainingDateScreen {
    store: Arc<RosterStore>,
    date: DatePicker,
    notify_message: NotifyBanner,
    footer: NavigationFooter,
    footer_entries: Vec<(String, String)>,
    combiner: Combiner,
    screen_key_bindings: KeyBindings,
}

impl Renderable for AddTrainingDateScreen {
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect) {
        let labels = current_labels();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(labels.add_training_date);
        let inner = block.inner(body);
        f.render_widget(block, body);
        let area = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // date
                Constraint::Min(1),    // existing dates
            ])
            .split(inner);
        self.date.render(f, area[0]);
        let existing = self
            .store
            .snapshot()
            .training_dates()
            .iter()
            .rev()
            .take(area[1].height as usize)
            .map(|d| d.format("%d/%m/%Y").to_string())
            .collect::<Vec<_>>()
            .join("\n");
        f.render_widget(
            Paragraph::new(existing).style(Style::default().fg(Color::DarkGray)),
            area[1],
        );
        self.notify_message.render(f, footer_right);
        self.footer.render(f, footer_left, &self.footer_entries);
    }
}

#[async_trait]
impl ScreenAsync for AddTrainingDateScreen {
    async fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        let Some(key_combination) = self.combiner.transform(key) else {
            return AppAction::None;
        };
        match (
            self.notify_message.has_value(),
            self.screen_key_bindings.get(key_combination),
            key.code,
        ) {
            (true, _, _) => {
                self.notify_message.reset();
                AppAction::None
            }
            (_, Some(ScreenActionEnum::Back), _) => AppAction::Back(false, Some(1)),
            (_, Some(ScreenActionEnum::Confirm), _) => self.handle_enter(),
            (_, _, KeyCode::Char(c)) => {
                self.date.handle_char(c);
                AppAction::None
            }
            (_, _, KeyCode::Backspace) => {
                self.date.handle_backspace();
                AppAction::None
            }
            _ => AppAction::None,
        }
    }

    async fn refresh_data(&mut self) {}
}

impl AddTrainingDateScreen {
    pub fn new(store: Arc<RosterStore>) -> Self {
        let suggested = store.snapshot().next_suggested_date();
        let actions = [ScreenActionEnum::Confirm, ScreenActionEnum::Back];
        let kb = current_settings().keybindings;
        Self {
            store,
            date: DatePicker::new(
                current_labels().training_date.to_owned(),
                true,
                Some(suggested),
            ),
            notify_message: NotifyBanner::new(),
            footer: NavigationFooter::new(),
            footer_entries: get_keybinding_actions(&kb, &actions),
            combiner: Combiner::default(),
            screen_key_bindings: kb.slice(&actions),
        }
    }

    fn handle_enter(&mut self) -> AppAction {
        let result = self
            .date
            .get_selected_value()
            .and_then(|date| self.store.dispatch(RosterAction::AddTrainingDate(date)));
        match result {
            Ok(_) => AppAction::Back(true, Some(1)),
            Err(e) => {
                self.notify_message
                    .set_error(error_message(current_labels(), "", &e));
                AppAction::None
            }
        }
    }
}
