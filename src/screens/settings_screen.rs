use std::sync::Arc;

use crate::{
    localization::current_labels,
    providers::settings_writer::SettingsWriter,
    screens::{
        components::{
            navigation_footer::NavigationFooter, notify_banner::NotifyBanner, select::Select,
        },
        screen::{get_keybinding_actions, AppAction, Renderable, ScreenAsync},
    },
    shapes::{
        enums::{LanguageEnum, ScreenActionEnum},
        keybinding::KeyBindings,
        settings::{set_settings, Settings},
    },
};
use async_trait::async_trait;
use crokey::{crossterm::event::KeyEvent, Combiner, KeyCombinationFormat};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug)]
pub struct SettingsScreen<SW: SettingsWriter + Send + Sync> {
    language: Select<LanguageEnum>,
    notify_message: NotifyBanner,
    back: bool,
    footer: NavigationFooter,
    footer_entries: Vec<(String, String)>,
    settings_writer: Arc<SW>,
    settings: Settings,
    format: KeyCombinationFormat,
    combiner: Combiner,
    screen_key_bindings: KeyBindings,
}

impl<SW: SettingsWriter + Send + Sync> Renderable for SettingsScreen<SW> {
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect) {
        let inner = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(4), // language
                Constraint::Min(1),    // keybindings
            ])
            .split(body);
        self.language.render(f, inner[0]);
        self.render_key_bindings_widget(f, inner[1]);
        self.notify_message.render(f, footer_right);
        self.footer.render(f, footer_left, &self.footer_entries);
    }
}

#[async_trait]
impl<SW: SettingsWriter + Send + Sync> ScreenAsync for SettingsScreen<SW> {
    async fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if let Some(key_combination) = self.combiner.transform(key) {
            match (
                self.screen_key_bindings.get(key_combination),
                self.notify_message.has_value(),
            ) {
                (_, true) => {
                    self.notify_message.reset();
                    if self.back {
                        AppAction::Back(true, Some(1))
                    } else {
                        AppAction::None
                    }
                }
                (Some(ScreenActionEnum::Up), _) => {
                    self.language.handle_up();
                    AppAction::None
                }
                (Some(ScreenActionEnum::Down), _) => {
                    self.language.handle_down();
                    AppAction::None
                }
                (Some(ScreenActionEnum::Back), _) => AppAction::Back(true, Some(1)),
                (Some(ScreenActionEnum::Confirm), _) => self.handle_enter().await,
                (Some(ScreenActionEnum::Quit), _) => AppAction::Quit(Ok(())),
                _ => AppAction::None,
            }
        } else {
            AppAction::None
        }
    }

    async fn refresh_data(&mut self) {}
}

impl<SW: SettingsWriter + Send + Sync> SettingsScreen<SW> {
    pub fn new(settings: Settings, settings_writer: Arc<SW>) -> Self {
        let language = Select::new(
            current_labels().language.to_owned(),
            LanguageEnum::ALL.to_vec(),
            Some(settings.language),
            true,
        );
        let screen_actions = [
            ScreenActionEnum::Up,
            ScreenActionEnum::Down,
            ScreenActionEnum::Confirm,
            ScreenActionEnum::Back,
            ScreenActionEnum::Quit,
        ];
        let kb = &settings.keybindings;
        let footer_entries = get_keybinding_actions(kb, &screen_actions);
        let screen_key_bindings = kb.slice(&screen_actions);
        SettingsScreen {
            language,
            notify_message: NotifyBanner::new(),
            back: false,
            footer: NavigationFooter::new(),
            footer_entries,
            settings_writer,
            settings,
            format: KeyCombinationFormat::default(),
            combiner: Combiner::default(),
            screen_key_bindings,
        }
    }

    async fn handle_enter(&mut self) -> AppAction {
        let Some(language) = self.language.get_selected_value() else {
            return AppAction::None;
        };
        let settings = Settings {
            language,
            ..self.settings.clone()
        };
        match self.settings_writer.save(settings).await {
            Ok(saved_settings) => {
                set_settings(saved_settings.clone());
                self.settings = saved_settings;
                // labels follow the new language from here on
                self.notify_message
                    .set_info(current_labels().settings_saved.to_string());
                self.back = true;
            }
            Err(_) => {
                self.notify_message
                    .set_error(current_labels().could_not_save_settings.to_string());
            }
        }
        AppAction::None
    }

    fn render_key_bindings_widget(&mut self, f: &mut Frame, area: Rect) {
        let labels = current_labels();
        let keybindings = &self.settings.keybindings;
        let items: Vec<String> = ScreenActionEnum::ALL
            .iter()
            .map(|action| {
                let keys = keybindings.keys_for(action);
                let keys = if keys.is_empty() {
                    labels.unassigned.to_string()
                } else {
                    keys.iter()
                        .map(|k| self.format.to_string(*k))
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                format!("{}: {}", action.description(), keys)
            })
            .collect();
        let widget = Paragraph::new(items.join("\n")).style(Style::default()).block(
            Block::new()
                .title(labels.keybinding_settings)
                .borders(Borders::ALL),
        );
        f.render_widget(widget, area);
    }
}
