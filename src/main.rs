//! Conway's CLIfe runner (default binary).
//!
//! Menus and sessions run on a single-threaded tokio runtime; the terminal is
//! driven through crossterm and the framebuffer renderer.

use std::fs::File;
use std::io::{self, IsTerminal};
use std::panic;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::event::EventStream;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use clife::engine::{App, GameConfig};
use clife::term::{restore_terminal, TerminalRenderer};

fn main() -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: clife requires an interactive terminal (TTY)");
        std::process::exit(1);
    }

    let config = GameConfig::from_env();
    if let Some(path) = &config.log_path {
        init_logging(path)?;
    }

    // Restore the terminal before the default hook prints the panic.
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        original_hook(info);
    }));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = runtime.block_on(async {
        let mut app = App::new(config);
        let mut events = EventStream::new();
        app.run(&mut term, &mut events).await
    });

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Send `tracing` output to `path`; the terminal itself belongs to the renderer.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    Ok(())
}
