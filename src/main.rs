use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;
use tracing::{debug, error, info, warn};

use vimlet::config::Config;
use vimlet::editor::session::EditorSession;
use vimlet::file::saver::{SaveOutcome, SaveWorker};
use vimlet::file::PersistError;
use vimlet::input::{AppEvent, Effect, EventRouter, InputHandler, ResizeWatcher};
use vimlet::logging;
use vimlet::theme::get_builtin_theme;
use vimlet::ui::UI;

/// vimlet - A small modal terminal text editor
#[derive(Parser)]
#[command(name = "vimlet")]
#[command(version)]
#[command(about = "A small modal terminal text editor", long_about = None)]
struct Cli {
    /// File or directory to open (default: current directory)
    path: Option<String>,
}

/// Set up a panic hook that restores the terminal before displaying panic information.
///
/// Panics are also written to the log, since the message on stderr is easy
/// to lose once the alternate screen is torn down.
fn setup_panic_hook() {
    use std::panic;

    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        error!(target: "runtime", panic = %panic_info, "panicked");

        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

fn main() {
    setup_panic_hook();

    let cli = Cli::parse();
    let config = Config::load();

    // Held until exit so buffered log lines get flushed
    let _log_guard = config.log_path().and_then(|path| logging::init_logging(&path));

    if let Err(e) = run(cli, config) {
        error!(target: "runtime", error = %format!("{:#}", e), "fatal");
        eprintln!("vimlet: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let target = cli.path.unwrap_or_else(|| "./".to_string());
    info!(target: "runtime", path = %target, "starting");

    // Setup terminal
    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let theme = match get_builtin_theme(&config.theme) {
        Some(theme) => theme,
        None => {
            warn!(target: "runtime", theme = %config.theme, "unknown theme, using default-dark");
            get_builtin_theme("default-dark").context("Built-in theme missing")?
        }
    };
    let ui = UI::new(theme)
        .with_margins(config.margin_x, config.margin_y)
        .with_tab_width(config.tab_width);
    let router = EventRouter::new().with_margins(config.margin_x, config.margin_y);
    let mut session = EditorSession::new(target);

    let (tx, rx) = mpsc::channel();
    let _input = InputHandler::spawn(tx.clone());
    let mut worker = SaveWorker::spawn(tx);

    // The first observed size sizes the buffer and loads the target
    let mut resize = ResizeWatcher::new();
    if let Some(event) = resize.poll()? {
        router.dispatch(event, &mut session);
    }

    let tick = Duration::from_millis(config.tick_rate_ms.max(1));
    let result = run_event_loop(
        &mut terminal,
        &ui,
        &router,
        &mut session,
        &worker,
        &mut resize,
        &rx,
        tick,
    );

    // Queued saves finish before the process exits
    worker.shutdown();
    info!(target: "runtime", "stopped");

    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;

    result
}

#[allow(clippy::too_many_arguments)]
fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &UI,
    router: &EventRouter,
    session: &mut EditorSession,
    worker: &SaveWorker,
    resize: &mut ResizeWatcher,
    events: &Receiver<AppEvent>,
    tick: Duration,
) -> Result<()> {
    loop {
        ui.render(terminal, session)?;

        let event = match events.recv_timeout(tick) {
            Ok(event) => event,
            Err(RecvTimeoutError::Timeout) => match resize.poll()? {
                Some(event) => event,
                None => continue,
            },
            Err(RecvTimeoutError::Disconnected) => {
                debug!(target: "runtime", "event channel closed");
                return Ok(());
            }
        };

        let mut pending = router.dispatch(event, session);
        while !pending.is_empty() {
            let mut next = Vec::new();
            for effect in pending {
                match effect {
                    Effect::Quit => return Ok(()),
                    Effect::Save(request) => {
                        if let Err(request) = worker.submit(request) {
                            let outcome = SaveOutcome::failed(request, PersistError::WorkerStopped);
                            next.extend(router.dispatch(AppEvent::SaveCompleted(outcome), session));
                        }
                    }
                }
            }
            pending = next;
        }
    }
}
