mod action;
mod affirmations;
mod app;
mod config;
mod greeting;
mod prefs;
mod timer;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::Config;
use greeting::LocalClock;
use prefs::PreferenceStore;
use ui::layout::Surfaces;

#[derive(Parser, Debug)]
#[command(name = "affirm")]
#[command(about = "TUI daily affirmation dashboard")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = "~/.config/affirmation-dash/config.toml")]
    config: String,

    /// Start with this theme instead of the saved preference
    #[arg(long)]
    theme: Option<String>,

    /// Disable mouse support
    #[arg(long)]
    no_mouse: bool,
}

/// Shown when startup fails; never a raw error.
const STARTUP_FALLBACK: &str =
    "Stay positive! The app encountered an issue, but your day is still amazing!";

/// Shown by the panic hook after the terminal is restored.
const PANIC_FALLBACK: &str = "Keep going! Every moment is a fresh start.";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "affirmation_dash=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    tracing::info!("Daily Affirmation Dashboard starting...");
    tracing::debug!("keyboard shortcuts: Alt+T toggle theme, Alt+N new affirmation");

    // Load config
    let config = Config::load(&cli.config)?;

    // Load the active affirmation list
    let affirmations = affirmations::load_list(config.affirmations.file.as_deref());

    // Any later fault must restore the terminal before reaching the user
    install_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    if !cli.no_mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = init_and_run(&mut terminal, config, affirmations, &cli).await;

    // Restore terminal
    restore_terminal()?;
    terminal.show_cursor()?;

    match result {
        Ok(()) => {
            tracing::info!("Daily Affirmation Dashboard exited cleanly");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            // The friendly line is the only user-visible output, but the
            // shell still sees the failure
            tracing::error!("failed to initialize dashboard: {e:#}");
            println!("{STARTUP_FALLBACK}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Startup sequence: resolve surfaces, build the app (theme load + first
/// greeting/affirmation + announcement), then run the event loop.
async fn init_and_run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: Config,
    affirmations: Vec<String>,
    cli: &Cli,
) -> Result<()> {
    let size = terminal.size()?;
    let surfaces = Surfaces::resolve(Rect::new(0, 0, size.width, size.height))?;

    let prefs = PreferenceStore::new(PreferenceStore::default_path());

    let mut app = App::new(
        config,
        surfaces,
        affirmations,
        prefs,
        SmallRng::from_os_rng(),
        Box::new(LocalClock),
        cli.theme.as_deref(),
        Instant::now(),
    );

    tracing::info!("Daily Affirmation Dashboard initialized successfully");

    run_app(terminal, &mut app).await
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);

        terminal.draw(|f| ui::draw(f, app, now))?;

        if app.should_quit {
            return Ok(());
        }

        // Wake for the nearest pending deadline, capped so greeting pulses
        // and announcements never stall behind a quiet input stream
        let timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::from_millis(100))
            .min(Duration::from_millis(100));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = action::map_key(key) {
                        app.handle_action(action, Instant::now());
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = action::map_mouse(mouse, app.surfaces()) {
                        app.handle_action(action, Instant::now());
                    }
                }
                // Regaining focus refreshes the time-sensitive greeting only
                Event::FocusGained => app.refresh_greeting(Instant::now()),
                Event::Resize(width, height) => {
                    app.schedule_resize(width, height, Instant::now());
                }
                _ => {}
            }
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    Ok(())
}

/// Restore the terminal before surfacing any fault, and keep the raw panic
/// out of the user-facing line.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        tracing::error!("unexpected fault: {panic_info}");
        eprintln!("{PANIC_FALLBACK}");
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[tokio::test]
    async fn startup_on_tiny_terminal_fails_instead_of_succeeding() {
        // Too small for the two critical surfaces: startup must come back
        // as an error (main maps it to the friendly line and a failure
        // exit code), not slip through as success
        let backend = TestBackend::new(10, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let cli = Cli {
            config: "/nonexistent/config.toml".to_string(),
            theme: None,
            no_mouse: true,
        };

        let result = init_and_run(&mut terminal, Config::default(), Vec::new(), &cli).await;
        assert!(result.is_err());
    }
}
