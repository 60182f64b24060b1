//! Gridmark - terminal entry point

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use gridmark_tui::{App, BoardLayout, Cli, TuiConfig, terminal, ui};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;
use tracing::{error, info, instrument};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = TuiConfig::load(cli.config.as_deref())?
        .with_overrides(cli.size, cli.log_file);
    config.validate()?;

    init_tracing(config.log_file())?;
    info!(?config, "Starting gridmark TUI");

    let app = App::new(*config.size()).context("Failed to start match")?;

    let guard = terminal::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, &config);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Setup logging to file to avoid interfering with the TUI.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Input, apply, evaluate, redraw; all on this thread.
#[instrument(skip_all)]
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    config: &TuiConfig,
) -> Result<()> {
    loop {
        let mut layout: Option<BoardLayout> = None;
        terminal.draw(|f| layout = Some(ui::draw(f, &app, config)))?;

        if app.should_quit() {
            return Ok(());
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code)?,
            Event::Mouse(mouse) => {
                if let Some(layout) = &layout {
                    app.handle_mouse(mouse, layout)?;
                }
            }
            _ => {}
        }
    }
}
