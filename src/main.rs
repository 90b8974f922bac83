mod app;
mod components;
mod draw;
mod keys;
mod state;
mod ui;

use crate::app::App;
use crate::state::app_settings::{AppSettings, CliCommand};
use crate::state::messages::{Command, NetworkRequest, NetworkResponse, UiEvent};
use crate::state::network::NetworkWorker;
use crate::state::refresher::PeriodicRefresher;
use crossterm::event::{self as crossterm_event, Event};
use crossterm::{cursor, execute, terminal};
use log::{debug, error, info};
use nba_api::{MockClient, NbaApi, NbaClient};
use std::io::Stdout;
use std::{io, panic};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tui::{Terminal, backend::CrosstermBackend};

const ANIMATION_INTERVAL: Duration = Duration::from_millis(80);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = match handle_cli_args() {
        Some(settings) => settings,
        None => return Ok(()),
    };

    better_panic::install();

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    setup_panic_hook();
    setup_terminal()?;

    let result = run(&mut terminal, settings).await;
    restore_terminal(result, cleanup_terminal)
}

/// Runs `cleanup` whatever `result` holds. The run's own error wins over a
/// failed cleanup.
fn restore_terminal<T>(
    result: anyhow::Result<T>,
    cleanup: impl FnOnce() -> io::Result<()>,
) -> anyhow::Result<T> {
    let cleaned = cleanup();
    let value = result?;
    cleaned?;
    Ok(value)
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    settings: AppSettings,
) -> anyhow::Result<()> {
    let level = settings.log_level.unwrap_or(log::LevelFilter::Error);
    tui_logger::init_logger(level)?;
    tui_logger::set_default_level(level);

    let size = terminal.size()?;
    let app = App::new(settings.clone(), size.width);

    let (ui_event_tx, ui_event_rx) = mpsc::channel::<UiEvent>(100);
    let (network_req_tx, network_req_rx) = mpsc::channel::<NetworkRequest>(100);
    let (network_resp_tx, network_resp_rx) = mpsc::channel::<NetworkResponse>(100);
    let (reset_tx, reset_rx) = mpsc::channel::<()>(8);

    let input_tx = ui_event_tx.clone();
    let input_handler = tokio::task::spawn_blocking(move || input_handler_task(input_tx));

    let network_task = if settings.use_mock {
        info!("using bundled mock data");
        spawn_network_worker(MockClient::new(), network_req_rx, network_resp_tx)
    } else {
        spawn_network_worker(NbaApi::new(), network_req_rx, network_resp_tx)
    };

    let refresher = PeriodicRefresher::new(settings.reload_interval, ui_event_tx.clone(), reset_rx);
    let refresh_task = tokio::spawn(refresher.run());

    let anim_tx = ui_event_tx.clone();
    let animation_task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(ANIMATION_INTERVAL);
        loop {
            interval.tick().await;
            if anim_tx.send(UiEvent::AnimationTick).await.is_err() {
                break;
            }
        }
    });

    let _ = ui_event_tx.send(UiEvent::AppStarted).await;

    main_ui_loop(terminal, app, ui_event_rx, network_req_tx, network_resp_rx, reset_tx).await;

    input_handler.abort();
    network_task.abort();
    refresh_task.abort();
    animation_task.abort();
    Ok(())
}

fn spawn_network_worker<C: NbaClient>(
    client: C,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
) -> JoinHandle<()> {
    tokio::spawn(NetworkWorker::new(client, requests, responses).run())
}

/// Settings to run with, or `None` when the arguments were fully handled.
fn handle_cli_args() -> Option<AppSettings> {
    match AppSettings::load().parse_args(std::env::args().skip(1)) {
        Ok(CliCommand::Run(settings)) => Some(settings),
        Ok(CliCommand::Help) => {
            println!("{}", usage_text());
            None
        }
        Ok(CliCommand::Version) => {
            println!("nbatui {}", env!("CARGO_PKG_VERSION"));
            None
        }
        Err(message) => {
            eprintln!("{message}\n\n{}", usage_text());
            std::process::exit(2);
        }
    }
}

fn usage_text() -> &'static str {
    "nbatui - live NBA scores in the terminal

Usage:
  nbatui [--mock] [--no-decoration] [--kawaii] [--reload <secs>]
  nbatui --help
  nbatui --version

Options:
  --mock               Serve bundled sample games instead of cdn.nba.com
  --no-decoration      No leader bolding or +/- colours in the box score
  --kawaii             Show stat badges and underline big numbers
  --reload <secs>      Refresh interval (default 10)

Environment:
  NBATUI_RELOAD        Refresh interval in seconds
  NBATUI_NO_DECORATION Same as --no-decoration when set to 1/true
  NBATUI_KAWAII        Same as --kawaii when set to 1/true
  NBATUI_BADGE_CAP     Badges shown per player (default 1)
  NBATUI_CARD_WIDTH    Columns per scoreboard card when laying out the grid (default 18)
  NBATUI_MOCK          Same as --mock when set to 1/true
  NBATUI_LOG           Log level for the log pane (error, warn, info, debug, trace)"
}

async fn main_ui_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    mut ui_events: mpsc::Receiver<UiEvent>,
    network_requests: mpsc::Sender<NetworkRequest>,
    mut network_responses: mpsc::Receiver<NetworkResponse>,
    refresh_resets: mpsc::Sender<()>,
) {
    loop {
        let commands = tokio::select! {
            Some(ui_event) = ui_events.recv() => {
                let (next, commands) = app.update(ui_event);
                app = next;
                commands
            }
            Some(response) = network_responses.recv() => {
                app = app.on_network_response(response);
                Vec::new()
            }
            else => break,
        };

        for command in commands {
            match command {
                Command::Fetch(request) => {
                    if let Err(e) = network_requests.send(request).await {
                        error!("Failed to queue network request: {e}");
                    }
                }
                Command::OpenUrl(url) => open_in_browser(url),
                Command::ResetRefreshTimer => {
                    let _ = refresh_resets.try_send(());
                }
                // Only the root turns this into a screen change.
                Command::SelectGame(game_id) => debug!("unrouted selection of {game_id}"),
                Command::Quit => return,
            }
        }

        draw::draw(terminal, &app);
    }
}

fn open_in_browser(url: String) {
    tokio::task::spawn_blocking(move || {
        if let Err(e) = open::that(&url) {
            debug!("could not open {url}: {e}");
        }
    });
}

/// Reads terminal events on a blocking thread until the UI loop goes away.
fn input_handler_task(ui_events: mpsc::Sender<UiEvent>) {
    while !ui_events.is_closed() {
        match crossterm_event::poll(INPUT_POLL_INTERVAL) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                error!("Failed to poll terminal events: {e}");
                continue;
            }
        }
        let ui_event = match crossterm_event::read() {
            Ok(Event::Key(key_event)) => Some(UiEvent::KeyPressed(key_event)),
            Ok(Event::Resize(width, _)) => Some(UiEvent::Resize(width)),
            Ok(_) => None,
            Err(e) => {
                error!("Failed to read terminal event: {e}");
                None
            }
        };

        if let Some(ui_event) = ui_event
            && ui_events.blocking_send(ui_event).is_err()
        {
            break;
        }
    }
}

fn setup_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;
    execute!(stdout, terminal::EnterAlternateScreen)?;
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
    terminal::enable_raw_mode()
}

pub fn cleanup_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, cursor::MoveTo(0, 0))?;
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
    execute!(stdout, terminal::LeaveAlternateScreen)?;
    execute!(stdout, cursor::Show)?;
    terminal::disable_raw_mode()
}

fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let _ = cleanup_terminal();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}
