mod app;
mod constants;
mod errors;
mod localization;
mod logging;
mod providers;
mod screens;
mod shapes;
mod store;
mod sync;
mod util;

#[cfg(test)]
mod tests;

use crate::{
    app::App,
    errors::AppError,
    localization::current_labels,
    logging::logger::{init_logger, log_info, log_warn},
    providers::{
        fs::{
            local_state::FileSystemLocalState,
            path::{get_base_path, get_log_file_path},
            settings_reader::FileSystemSettingsReader,
            settings_writer::FileSystemSettingsWriter,
        },
        google::{
            build_client, drive::GoogleDriveStorage, oauth::GoogleAuthenticator,
            sheets::GoogleSheetsService,
        },
        settings_reader::SettingsReader,
    },
    screens::{attendance_screen::AttendanceScreen, screen::AppAction},
    shapes::settings::{init_settings, Settings},
    store::RosterStore,
    sync::gateway::SyncGateway,
    util::{resolve_client_id, resolve_client_secret},
};
use crokey::crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::Paragraph,
    Terminal,
};
use std::{error::Error, path::Path, sync::Arc};

type GoogleSyncGateway = SyncGateway<
    GoogleAuthenticator,
    GoogleDriveStorage,
    GoogleSheetsService,
    FileSystemLocalState,
>;

/// Wires the Google providers together. Without an OAuth client id there
/// is nothing to sign in with, so sync stays disabled.
fn build_gateway(
    settings: &Settings,
    base_dir: &Path,
) -> Result<Option<GoogleSyncGateway>, AppError> {
    let Some(client_id) = resolve_client_id(settings.google_client_id.as_deref()) else {
        log_warn("no OAuth client id configured, Google sync disabled");
        return Ok(None);
    };
    let client = build_client(settings.request_timeout())?;
    let authenticator = GoogleAuthenticator::new(
        client.clone(),
        client_id,
        resolve_client_secret(),
        settings.auth_timeout(),
    );
    Ok(Some(SyncGateway::new(
        Arc::new(authenticator),
        Arc::new(GoogleDriveStorage::new(client.clone())),
        Arc::new(GoogleSheetsService::new(client)),
        Arc::new(FileSystemLocalState::new(base_dir)),
    )))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    // a missing .env file is fine
    let _ = dotenvy::dotenv();
    let base_dir = get_base_path()?;
    init_logger(get_log_file_path(&base_dir));
    log_info(&format!("starting {}", env!("CARGO_PKG_VERSION")));

    let settings_reader = FileSystemSettingsReader::new(&base_dir);
    let settings_writer = Arc::new(FileSystemSettingsWriter::new(&base_dir));
    let settings = match settings_reader.read().await {
        Ok(settings) => settings,
        Err(e) => {
            log_info(&format!("using default settings: {}", e));
            Settings::default()
        }
    };
    init_settings(settings.clone());
    let gateway = build_gateway(&settings, &base_dir)?;
    let store = Arc::new(RosterStore::default());
    let root = AttendanceScreen::new(store, gateway, settings, settings_writer);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let res = run_app(&mut terminal, App::new(Box::new(root))).await;
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    if let Err(err) = res {
        println!("{:?}", err)
    }
    Ok(())
}

/// The main structure is the following one:
///
/// |----------------------------|
/// |          header            |
/// |----------------------------|
/// |                            |
/// |                            |
/// |           body             |
/// |                            |
/// |                            |
/// |----------------------------|
/// | footer_left | footer_right |
/// |----------------------------|
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();
            let container = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(5),
                ])
                .split(size);
            let footer = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(container[2]);
            let header = Paragraph::new(format!("✅ {}", current_labels().app_title))
                .style(Style::default().add_modifier(Modifier::BOLD));
            f.render_widget(header, container[0]);
            if let Some(screen) = app.current_screen() {
                screen.render(f, container[1], footer[0], footer[1]);
            }
        })?;
        // picks up results of background sync tasks
        if let Some(screen) = app.current_screen() {
            screen.tick().await;
        }
        if event::poll(std::time::Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                match (key.kind, app.current_screen()) {
                    (KeyEventKind::Release, _) => continue,
                    (_, Some(screen)) => match screen.handle_key(key).await {
                        AppAction::None => {}
                        AppAction::SwitchScreen(new_screen) => app.push_screen(new_screen),
                        AppAction::Back(refresh, count) => app.pop_screen(refresh, count).await,
                        AppAction::Quit(result) => return result,
                    },
                    _ => {}
                }
            }
        }
    }
}
