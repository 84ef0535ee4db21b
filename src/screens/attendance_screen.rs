use crate::{
    errors::AppError,
    localization::current_labels,
    logging::logger::{log_error, log_info},
    providers::{
        authenticator::{Authenticator, PendingAuthorization},
        document_storage::DocumentStorage,
        fs::path::get_csv_export_file_path,
        local_state::LocalState,
        settings_writer::SettingsWriter,
        spreadsheet_service::SpreadsheetService,
    },
    screens::{
        add_training_date_screen::AddTrainingDateScreen,
        components::{
            confirm_dialogue::ConfirmDialogue, navigation_footer::NavigationFooter,
            notify_banner::NotifyBanner,
        },
        edit_player_screen::EditPlayerScreen,
        screen::{error_message, get_keybinding_actions, AppAction, Renderable, ScreenAsync},
        settings_screen::SettingsScreen,
    },
    shapes::{
        enums::{AttendanceMark, ScreenActionEnum},
        keybinding::KeyBindings,
        roster::{Roster, RosterAction},
        settings::{current_settings, Settings},
    },
    store::RosterStore,
    sync::{
        gateway::SyncGateway,
        session::SyncSession,
        sheet::{to_tabular_export, write_csv},
    },
};
use async_trait::async_trait;
use chrono::NaiveDate;
use crokey::{crossterm::event::KeyEvent, Combiner};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};
use std::sync::Arc;
use tokio::sync::{oneshot, watch, Mutex};

const NAME_WIDTH: u16 = 22;
const DATE_WIDTH: u16 = 7;
const TOTAL_WIDTH: u16 = 4;
const PERCENTAGE_WIDTH: u16 = 6;

/// Destructive actions waiting for a yes/no answer.
#[derive(Debug, Clone, PartialEq)]
enum ConfirmedAction {
    RemovePlayer(u32),
    RemoveTrainingDate(NaiveDate),
    Load,
}

/// Network work run on a background task while the screen keeps drawing.
enum PendingTask {
    SignIn(PendingAuthorization),
    SignOut,
    Save,
    Load,
    Export,
}

#[derive(Debug)]
enum TaskDone {
    SignedIn(Option<String>),
    SignedOut,
    Saved,
    Loaded,
    Exported(String),
}

/// What a background task hands back: its result and the session it left.
#[derive(Debug)]
struct TaskOutcome {
    result: Result<TaskDone, AppError>,
    session: SyncSession,
}

/// A task in flight, with the banner prefix used if it fails.
struct RunningTask {
    rx: oneshot::Receiver<TaskOutcome>,
    failure: &'static str,
}

type SharedGateway<A, D, S, L> = Arc<Mutex<SyncGateway<A, D, S, L>>>;

pub struct AttendanceScreen<A, D, S, L, SW>
where
    A: Authenticator + Send + Sync + 'static,
    D: DocumentStorage + Send + Sync + 'static,
    S: SpreadsheetService + Send + Sync + 'static,
    L: LocalState + Send + Sync + 'static,
    SW: SettingsWriter + Send + Sync + 'static,
{
    store: Arc<RosterStore>,
    roster_rx: watch::Receiver<Arc<Roster>>,
    roster: Arc<Roster>,
    selected_player: usize,
    selected_date: usize,
    table_state: TableState,
    gateway: Option<SharedGateway<A, D, S, L>>,
    /// Last session reported by the gateway, `None` when sync is disabled.
    session: Option<SyncSession>,
    running: Option<RunningTask>,
    confirm: ConfirmDialogue<ConfirmedAction>,
    notify_message: NotifyBanner,
    footer: NavigationFooter,
    settings_writer: Arc<SW>,
    combiner: Combiner,
    screen_key_bindings: KeyBindings,
}

impl<A, D, S, L, SW> Renderable for AttendanceScreen<A, D, S, L, SW>
where
    A: Authenticator + Send + Sync + 'static,
    D: DocumentStorage + Send + Sync + 'static,
    S: SpreadsheetService + Send + Sync + 'static,
    L: LocalState + Send + Sync + 'static,
    SW: SettingsWriter + Send + Sync + 'static,
{
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect) {
        self.pull_snapshot();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(body);
        self.render_table(f, rows[0]);
        self.render_sync_status(f, rows[1]);
        let actions = self.screen_actions();
        let kb = current_settings().keybindings;
        self.footer
            .render(f, footer_left, &get_keybinding_actions(&kb, &actions));
        self.screen_key_bindings = kb.slice(&actions);
        if self.confirm.has_value() {
            self.confirm.render(f, footer_right);
        } else {
            self.notify_message.render(f, footer_right);
        }
    }
}

#[async_trait]
impl<A, D, S, L, SW> ScreenAsync for AttendanceScreen<A, D, S, L, SW>
where
    A: Authenticator + Send + Sync + 'static,
    D: DocumentStorage + Send + Sync + 'static,
    S: SpreadsheetService + Send + Sync + 'static,
    L: LocalState + Send + Sync + 'static,
    SW: SettingsWriter + Send + Sync + 'static,
{
    async fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        let Some(key_combination) = self.combiner.transform(key) else {
            return AppAction::None;
        };
        let action = self.screen_key_bindings.get(key_combination).copied();
        if self.running.is_some() {
            return match action {
                Some(ScreenActionEnum::Quit) => AppAction::Quit(Ok(())),
                _ => AppAction::None,
            };
        }
        if self.confirm.has_value() {
            return match action {
                Some(ScreenActionEnum::Confirm) => self.handle_confirmed(),
                Some(ScreenActionEnum::Back) => {
                    self.confirm.reset();
                    AppAction::None
                }
                _ => AppAction::None,
            };
        }
        if self.notify_message.has_value() {
            self.notify_message.reset();
            return AppAction::None;
        }
        match action {
            Some(ScreenActionEnum::Quit) => AppAction::Quit(Ok(())),
            Some(ScreenActionEnum::Up) => self.move_player(-1),
            Some(ScreenActionEnum::Down) => self.move_player(1),
            Some(ScreenActionEnum::Previous) => self.move_date(-1),
            Some(ScreenActionEnum::Next) => self.move_date(1),
            Some(ScreenActionEnum::CycleMark) => self.handle_cycle(),
            Some(ScreenActionEnum::NewPlayer) => self.handle_new_player(),
            Some(ScreenActionEnum::RenamePlayer) => self.handle_rename(),
            Some(ScreenActionEnum::RemovePlayer) => self.handle_remove_player(),
            Some(ScreenActionEnum::AddTrainingDate) => AppAction::SwitchScreen(Box::new(
                AddTrainingDateScreen::new(self.store.clone()),
            )),
            Some(ScreenActionEnum::RemoveTrainingDate) => self.handle_remove_training_date(),
            Some(ScreenActionEnum::SignIn) => self.handle_sign_in().await,
            Some(ScreenActionEnum::SignOut) => self.schedule(PendingTask::SignOut),
            Some(ScreenActionEnum::SaveToDrive) => self.schedule(PendingTask::Save),
            Some(ScreenActionEnum::LoadFromDrive) => self.handle_load(),
            Some(ScreenActionEnum::ExportToSheets) => self.schedule(PendingTask::Export),
            Some(ScreenActionEnum::ExportCsv) => self.handle_export_csv(),
            Some(ScreenActionEnum::Settings) => AppAction::SwitchScreen(Box::new(
                SettingsScreen::new(current_settings(), self.settings_writer.clone()),
            )),
            _ => AppAction::None,
        }
    }

    async fn refresh_data(&mut self) {
        self.pull_snapshot();
    }

    async fn tick(&mut self) {
        let Some(running) = self.running.as_mut() else {
            return;
        };
        let failure = running.failure;
        let outcome = match running.rx.try_recv() {
            Ok(outcome) => outcome,
            Err(oneshot::error::TryRecvError::Empty) => return,
            Err(oneshot::error::TryRecvError::Closed) => {
                self.running = None;
                log_error("sync task ended without reporting a result");
                let labels = current_labels();
                self.notify_message
                    .set_error(labels.operation_failed.to_string());
                return;
            }
        };
        self.running = None;
        self.session = Some(outcome.session);
        self.show_outcome(outcome.result, failure);
        self.pull_snapshot();
    }
}

impl<A, D, S, L, SW> AttendanceScreen<A, D, S, L, SW>
where
    A: Authenticator + Send + Sync + 'static,
    D: DocumentStorage + Send + Sync + 'static,
    S: SpreadsheetService + Send + Sync + 'static,
    L: LocalState + Send + Sync + 'static,
    SW: SettingsWriter + Send + Sync + 'static,
{
    pub fn new(
        store: Arc<RosterStore>,
        gateway: Option<SyncGateway<A, D, S, L>>,
        settings: Settings,
        settings_writer: Arc<SW>,
    ) -> Self {
        let roster_rx = store.subscribe();
        let roster = store.snapshot();
        let mut screen = Self {
            store,
            roster_rx,
            roster,
            selected_player: 0,
            selected_date: 0,
            table_state: TableState::default(),
            session: gateway.as_ref().map(|g| g.session().clone()),
            gateway: gateway.map(|g| Arc::new(Mutex::new(g))),
            running: None,
            confirm: ConfirmDialogue::new(),
            notify_message: NotifyBanner::new(),
            footer: NavigationFooter::new(),
            settings_writer,
            combiner: Combiner::default(),
            screen_key_bindings: KeyBindings::empty(),
        };
        let actions = screen.screen_actions();
        screen.screen_key_bindings = settings.keybindings.slice(&actions);
        // start on the most recent training
        screen.selected_date = screen.roster.training_dates().len().saturating_sub(1);
        screen.clamp_selection();
        screen
    }

    fn screen_actions(&self) -> Vec<ScreenActionEnum> {
        use ScreenActionEnum::*;
        let mut actions = vec![Up, Down, Previous, Next, CycleMark, NewPlayer];
        if !self.roster.players().is_empty() {
            actions.extend([RenamePlayer, RemovePlayer]);
        }
        actions.push(AddTrainingDate);
        if !self.roster.training_dates().is_empty() {
            actions.push(RemoveTrainingDate);
        }
        match self.session.as_ref().map(SyncSession::is_signed_in) {
            Some(true) => actions.extend([SaveToDrive, LoadFromDrive, ExportToSheets, SignOut]),
            Some(false) => actions.push(SignIn),
            None => {}
        }
        actions.extend([ExportCsv, ScreenActionEnum::Settings, Confirm, Back, Quit]);
        actions
    }

    /// Picks up the latest published roster, if it changed.
    fn pull_snapshot(&mut self) {
        if self.roster_rx.has_changed().unwrap_or(false) {
            self.roster = self.roster_rx.borrow_and_update().clone();
            self.clamp_selection();
        }
    }

    fn clamp_selection(&mut self) {
        let players = self.roster.players().len();
        let dates = self.roster.training_dates().len();
        self.selected_player = self.selected_player.min(players.saturating_sub(1));
        self.selected_date = self.selected_date.min(dates.saturating_sub(1));
        self.table_state
            .select(if players == 0 { None } else { Some(self.selected_player) });
    }

    fn selected_player_id(&self) -> Option<u32> {
        self.roster
            .players()
            .get(self.selected_player)
            .map(|p| p.id)
    }

    fn selected_training_date(&self) -> Option<NaiveDate> {
        self.roster
            .training_dates()
            .get(self.selected_date)
            .copied()
    }

    fn dispatch(&mut self, action: RosterAction) {
        match self.store.dispatch(action) {
            Ok(_) => self.pull_snapshot(),
            Err(e) => self.notify_message.set_error(error_message(
                current_labels(),
                current_labels().operation_failed,
                &e,
            )),
        }
    }

    fn move_player(&mut self, delta: isize) -> AppAction {
        let len = self.roster.players().len();
        if len > 0 {
            self.selected_player =
                (self.selected_player as isize + delta).rem_euclid(len as isize) as usize;
            self.table_state.select(Some(self.selected_player));
        }
        AppAction::None
    }

    fn move_date(&mut self, delta: isize) -> AppAction {
        let len = self.roster.training_dates().len();
        if len > 0 {
            self.selected_date =
                (self.selected_date as isize + delta).rem_euclid(len as isize) as usize;
        }
        AppAction::None
    }

    fn handle_cycle(&mut self) -> AppAction {
        if self.roster.training_dates().is_empty() {
            self.notify_message
                .set_warning(current_labels().no_training_dates_yet.to_string());
        } else if let Some(id) = self.selected_player_id() {
            self.dispatch(RosterAction::CycleAttendance(id, self.selected_date));
        }
        AppAction::None
    }

    fn handle_new_player(&mut self) -> AppAction {
        self.dispatch(RosterAction::AddPlayer);
        self.selected_player = self.roster.players().len().saturating_sub(1);
        self.clamp_selection();
        AppAction::None
    }

    fn handle_rename(&mut self) -> AppAction {
        match self.roster.players().get(self.selected_player) {
            Some(player) => AppAction::SwitchScreen(Box::new(EditPlayerScreen::new(
                self.store.clone(),
                player.clone(),
            ))),
            None => AppAction::None,
        }
    }

    fn handle_remove_player(&mut self) -> AppAction {
        if let Some(player) = self.roster.players().get(self.selected_player) {
            self.confirm.set(
                format!("{} {}?", current_labels().confirm_remove_player, player.name),
                ConfirmedAction::RemovePlayer(player.id),
            );
        }
        AppAction::None
    }

    fn handle_remove_training_date(&mut self) -> AppAction {
        if let Some(date) = self.selected_training_date() {
            self.confirm.set(
                format!(
                    "{} {}?",
                    current_labels().confirm_remove_training_date,
                    date.format("%d/%m/%Y")
                ),
                ConfirmedAction::RemoveTrainingDate(date),
            );
        }
        AppAction::None
    }

    fn handle_load(&mut self) -> AppAction {
        if self.require_signed_in() {
            self.confirm.set(
                current_labels().confirm_load.to_string(),
                ConfirmedAction::Load,
            );
        }
        AppAction::None
    }

    fn handle_confirmed(&mut self) -> AppAction {
        match self.confirm.take() {
            Some(ConfirmedAction::RemovePlayer(id)) => {
                self.dispatch(RosterAction::RemovePlayer(id))
            }
            Some(ConfirmedAction::RemoveTrainingDate(date)) => {
                self.dispatch(RosterAction::RemoveTrainingDate(date))
            }
            Some(ConfirmedAction::Load) => return self.schedule(PendingTask::Load),
            None => {}
        }
        AppAction::None
    }

    /// Warns and returns false when there is no signed-in session.
    fn require_signed_in(&mut self) -> bool {
        let labels = current_labels();
        match self.session.as_ref().map(SyncSession::is_signed_in) {
            Some(true) => true,
            Some(false) => {
                self.notify_message
                    .set_warning(labels.not_signed_in.to_string());
                false
            }
            None => {
                self.notify_message
                    .set_warning(labels.sync_disabled.to_string());
                false
            }
        }
    }

    fn schedule(&mut self, task: PendingTask) -> AppAction {
        if !self.require_signed_in() {
            return AppAction::None;
        }
        let labels = current_labels();
        let progress = match &task {
            PendingTask::Save => labels.saving,
            PendingTask::Load => labels.loading,
            PendingTask::Export => labels.exporting,
            PendingTask::SignOut => labels.signing_out,
            PendingTask::SignIn(_) => labels.complete_sign_in_in_browser,
        };
        self.notify_message.set_progress(progress.to_string());
        self.spawn(task);
        AppAction::None
    }

    /// Runs `task` on the runtime; its outcome is picked up by `tick`.
    fn spawn(&mut self, task: PendingTask) {
        let Some(gateway) = self.gateway.clone() else {
            return;
        };
        let labels = current_labels();
        let failure = match &task {
            PendingTask::SignIn(_) => labels.could_not_sign_in,
            PendingTask::Save => labels.could_not_save,
            PendingTask::Load => labels.could_not_load,
            PendingTask::Export => labels.could_not_export,
            PendingTask::SignOut => labels.operation_failed,
        };
        let (tx, rx) = oneshot::channel();
        let store = self.store.clone();
        tokio::spawn(async move {
            let outcome = run_task(gateway, store, task).await;
            if tx.send(outcome).is_err() {
                log_error("sync task finished after its screen was closed");
            }
        });
        self.running = Some(RunningTask { rx, failure });
    }

    fn show_outcome(&mut self, result: Result<TaskDone, AppError>, failure: &str) {
        let labels = current_labels();
        match result {
            Ok(TaskDone::SignedIn(Some(email))) => self
                .notify_message
                .set_info(format!("{} {}", labels.signed_in_as, email)),
            Ok(TaskDone::SignedIn(None)) => {
                self.notify_message.set_info(labels.signed_in.to_string())
            }
            Ok(TaskDone::SignedOut) => self.notify_message.set_info(labels.signed_out.to_string()),
            Ok(TaskDone::Saved) => self.notify_message.set_info(labels.saved.to_string()),
            Ok(TaskDone::Loaded) => self.notify_message.set_info(labels.loaded.to_string()),
            Ok(TaskDone::Exported(url)) => self
                .notify_message
                .set_info(format!("{} {}", labels.exported, url)),
            Err(e) => self
                .notify_message
                .set_error(error_message(labels, failure, &e)),
        }
    }

    async fn handle_sign_in(&mut self) -> AppAction {
        let labels = current_labels();
        let Some(gateway) = self.gateway.clone() else {
            self.notify_message
                .set_warning(labels.sync_disabled.to_string());
            return AppAction::None;
        };
        let started = gateway.lock().await.start_sign_in().await;
        match started {
            Ok(pending) => {
                self.notify_message.set_progress(format!(
                    "{}: {}",
                    labels.complete_sign_in_in_browser, pending.url
                ));
                self.spawn(PendingTask::SignIn(pending));
            }
            Err(e) => {
                self.notify_message
                    .set_error(error_message(labels, labels.could_not_sign_in, &e));
            }
        }
        AppAction::None
    }

    fn handle_export_csv(&mut self) -> AppAction {
        let labels = current_labels();
        match self.export_csv() {
            Ok(path) => {
                log_info(&format!("csv export written to {}", path));
                self.notify_message
                    .set_info(format!("{} {}", labels.csv_exported, path));
            }
            Err(e) => {
                log_error(&format!("csv export failed: {}", e));
                self.notify_message
                    .set_error(error_message(labels, labels.operation_failed, &e));
            }
        }
        AppAction::None
    }

    fn export_csv(&self) -> Result<String, AppError> {
        let labels = current_labels();
        let dir = current_settings()
            .get_default_path()
            .unwrap_or_else(|| std::path::PathBuf::from("."));
        let path = get_csv_export_file_path(&dir, labels.spreadsheet_title);
        write_csv(&to_tabular_export(&self.roster, labels), &path)?;
        Ok(path.display().to_string())
    }

    /// First date column shown, so that the selected one stays visible.
    fn first_visible_date(&self, visible: usize) -> usize {
        if visible == 0 || self.selected_date < visible {
            0
        } else {
            self.selected_date + 1 - visible
        }
    }

    fn render_table(&mut self, f: &mut Frame, area: Rect) {
        let labels = current_labels();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("{} ({})", labels.players, self.roster.players().len()));
        if self.roster.players().is_empty() {
            f.render_widget(Paragraph::new(labels.no_players_yet).block(block), area);
            return;
        }
        let fixed = NAME_WIDTH + 3 * TOTAL_WIDTH + PERCENTAGE_WIDTH + 2;
        let visible = (area.width.saturating_sub(fixed) / DATE_WIDTH) as usize;
        let dates = self.roster.training_dates();
        let first = self.first_visible_date(visible);
        let last = (first + visible).min(dates.len());
        let header_style = Style::default().add_modifier(Modifier::BOLD);
        let mut header = vec![Cell::from(labels.player_name_header)];
        header.extend(dates[first..last].iter().enumerate().map(|(i, d)| {
            let cell = Cell::from(d.format("%d/%m").to_string());
            if first + i == self.selected_date {
                cell.style(Style::default().fg(Color::Cyan))
            } else {
                cell
            }
        }));
        header.extend(["P", "A", "L", "%"].map(Cell::from));
        let rows: Vec<Row> = self
            .roster
            .players()
            .iter()
            .enumerate()
            .map(|(row_index, player)| {
                let stats = player.stats();
                let mut cells = vec![Cell::from(player.name.clone())];
                cells.extend(player.attendance[first..last].iter().enumerate().map(
                    |(i, mark)| {
                        let cell =
                            Cell::from(AttendanceMark::symbol(*mark)).style(mark_style(*mark));
                        if row_index == self.selected_player && first + i == self.selected_date {
                            cell.style(mark_style(*mark).add_modifier(Modifier::REVERSED))
                        } else {
                            cell
                        }
                    },
                ));
                cells.extend([
                    Cell::from(stats.present.to_string()),
                    Cell::from(stats.absent.to_string()),
                    Cell::from(stats.injured.to_string()),
                    Cell::from(stats.percentage_label()),
                ]);
                Row::new(cells)
            })
            .collect();
        let mut widths = vec![Constraint::Length(NAME_WIDTH)];
        widths.extend((first..last).map(|_| Constraint::Length(DATE_WIDTH)));
        widths.extend([
            Constraint::Length(TOTAL_WIDTH),
            Constraint::Length(TOTAL_WIDTH),
            Constraint::Length(TOTAL_WIDTH),
            Constraint::Length(PERCENTAGE_WIDTH),
        ]);
        let table = Table::new(rows, widths)
            .header(Row::new(header).style(header_style))
            .block(block)
            .row_highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_sync_status(&self, f: &mut Frame, area: Rect) {
        let labels = current_labels();
        let line = match self.session.as_ref() {
            None => Line::from(Span::styled(
                labels.sync_disabled,
                Style::default().fg(Color::DarkGray),
            )),
            Some(SyncSession::SignedOut) => Line::from(labels.signed_out_hint),
            Some(SyncSession::SignedIn { email, .. }) => Line::from(vec![
                Span::raw(format!("{} ", labels.signed_in_as)),
                Span::styled(
                    email.clone().unwrap_or_else(|| "?".to_string()),
                    Style::default().fg(Color::Green),
                ),
            ]),
        };
        let widget = Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(labels.google_sync));
        f.render_widget(widget, area);
    }
}

async fn run_task<A, D, S, L>(
    gateway: SharedGateway<A, D, S, L>,
    store: Arc<RosterStore>,
    task: PendingTask,
) -> TaskOutcome
where
    A: Authenticator + Send + Sync + 'static,
    D: DocumentStorage + Send + Sync + 'static,
    S: SpreadsheetService + Send + Sync + 'static,
    L: LocalState + Send + Sync + 'static,
{
    let mut gateway = gateway.lock().await;
    let result = match task {
        PendingTask::SignIn(pending) => gateway
            .finish_sign_in(pending)
            .await
            .map(TaskDone::SignedIn),
        PendingTask::SignOut => {
            gateway.sign_out().await;
            Ok(TaskDone::SignedOut)
        }
        PendingTask::Save => gateway.save(&store.snapshot()).await.map(|_| TaskDone::Saved),
        PendingTask::Load => gateway.load(&store).await.map(|_| TaskDone::Loaded),
        PendingTask::Export => gateway
            .export(&store.snapshot(), current_labels())
            .await
            .map(TaskDone::Exported),
    };
    TaskOutcome {
        result,
        session: gateway.session().clone(),
    }
}

fn mark_style(mark: Option<AttendanceMark>) -> Style {
    match mark {
        Some(AttendanceMark::Present) => Style::default().fg(Color::Green),
        Some(AttendanceMark::Absent) => Style::default().fg(Color::Red),
        Some(AttendanceMark::Injured) => Style::default().fg(Color::Yellow),
        None => Style::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::SyncError, providers::authenticator::AccessToken};
    use crokey::crossterm::event::{KeyCode, KeyModifiers};
    use serde_json::Value;
    use std::{sync::Mutex as StdMutex, time::Duration};
    use tokio::time::{sleep, timeout};

    /// Completes the consent flow only once `gate` is released.
    struct GatedAuthenticator {
        gate: StdMutex<Option<oneshot::Receiver<()>>>,
    }

    #[async_trait]
    impl Authenticator for GatedAuthenticator {
        async fn start(&self) -> Result<PendingAuthorization, AppError> {
            Ok(PendingAuthorization {
                url: "https://accounts.example/consent".to_string(),
                redirect_uri: "http://127.0.0.1:1".to_string(),
                state: "state".to_string(),
                listener: None,
            })
        }

        async fn finish(&self, _pending: PendingAuthorization) -> Result<AccessToken, AppError> {
            let gate = self.gate.lock().expect("expected the lock").take();
            if let Some(gate) = gate {
                gate.await.expect("expected the gate to be released");
            }
            Ok(AccessToken {
                value: "token-1".to_string(),
                expires_at: None,
            })
        }

        async fn user_email(&self, _token: &AccessToken) -> Result<Option<String>, AppError> {
            Ok(None)
        }

        async fn revoke(&self, _token: &AccessToken) -> Result<(), AppError> {
            Ok(())
        }
    }

    struct NoStorage;

    #[async_trait]
    impl DocumentStorage for NoStorage {
        async fn find(&self, _token: &AccessToken, _name: &str) -> Result<Option<String>, AppError> {
            Ok(None)
        }

        async fn upload(
            &self,
            _token: &AccessToken,
            _file_id: Option<&str>,
            _name: &str,
            _content: Vec<u8>,
        ) -> Result<String, AppError> {
            Ok("file-1".to_string())
        }

        async fn download(&self, _token: &AccessToken, _file_id: &str) -> Result<Value, AppError> {
            Err(AppError::Sync(SyncError::DocumentNotFound))
        }
    }

    struct NoSheets;

    #[async_trait]
    impl SpreadsheetService for NoSheets {
        async fn create(
            &self,
            _token: &AccessToken,
            _title: &str,
            _sheet_name: &str,
            _rows: &[Vec<String>],
        ) -> Result<String, AppError> {
            Ok("https://docs.example/spreadsheets/d/sheet-1".to_string())
        }
    }

    struct NoLocalState;

    #[async_trait]
    impl LocalState for NoLocalState {
        async fn get(&self, _key: &str) -> Result<Option<String>, AppError> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), AppError> {
            Ok(())
        }

        async fn remove(&self, _key: &str) -> Result<(), AppError> {
            Ok(())
        }
    }

    struct NoSettingsWriter;

    #[async_trait]
    impl SettingsWriter for NoSettingsWriter {
        async fn save(&self, settings: Settings) -> Result<Settings, AppError> {
            Ok(settings)
        }
    }

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn sign_in_runs_without_blocking_the_screen() {
        let (release, gate) = oneshot::channel();
        let gateway = SyncGateway::new(
            Arc::new(GatedAuthenticator {
                gate: StdMutex::new(Some(gate)),
            }),
            Arc::new(NoStorage),
            Arc::new(NoSheets),
            Arc::new(NoLocalState),
        );
        let mut screen = AttendanceScreen::new(
            Arc::new(RosterStore::default()),
            Some(gateway),
            Settings::default(),
            Arc::new(NoSettingsWriter),
        );

        let action = timeout(Duration::from_secs(1), screen.handle_key(press('g')))
            .await
            .expect("expected the key to be handled while consent is pending");
        assert!(matches!(action, AppAction::None));
        assert!(screen.running.is_some());

        timeout(Duration::from_secs(1), screen.tick())
            .await
            .expect("expected tick to return while consent is pending");
        assert!(screen.running.is_some());
        assert_eq!(screen.session, Some(SyncSession::SignedOut));

        // other actions wait, quitting does not
        assert!(matches!(
            screen.handle_key(press('n')).await,
            AppAction::None
        ));
        assert_eq!(screen.roster.players().len(), Roster::seeded().players().len());
        assert!(matches!(
            screen.handle_key(press('q')).await,
            AppAction::Quit(Ok(()))
        ));

        release.send(()).expect("expected the task to be waiting");
        for _ in 0..100 {
            screen.tick().await;
            if screen.running.is_none() {
                break;
            }
            sleep(Duration::from_millis(10)).await;
        }
        assert!(screen.running.is_none());
        assert!(screen
            .session
            .as_ref()
            .is_some_and(SyncSession::is_signed_in));
    }
}
