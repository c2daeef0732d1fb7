mod app;
mod catalog;
mod config;
mod constants;
mod input;
mod logging;
mod matcher;
mod theme;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{
  DefaultTerminal,
  crossterm::event::{self, Event, KeyEventKind},
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use app::App;
use catalog::Catalog;
use constants::constants;

// --- CLI ---

#[derive(Parser, Debug)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
struct Args {
  /// Path to a JSON catalog file (defaults to the embedded catalog)
  #[arg(short, long)]
  catalog: Option<PathBuf>,

  /// Theme name for this session (overrides the saved preference)
  #[arg(short, long)]
  theme: Option<String>,
}

// --- Main ---

fn main() -> Result<()> {
  let args = Args::parse();
  let _log_guard = logging::init();

  let catalog = match args.catalog {
    Some(ref path) => Catalog::load(path)?,
    None => Catalog::embedded()?,
  };
  if catalog.is_empty() {
    warn!("catalog is empty; searches will find nothing");
  }
  info!(movies = catalog.len(), "catalog loaded");

  let default_hook = std::panic::take_hook();
  std::panic::set_hook(Box::new(move |info| {
    ratatui::restore();
    default_hook(info);
  }));

  let mut terminal = ratatui::init();
  let result = run(&mut terminal, App::new(catalog, args.theme.as_deref()));
  ratatui::restore();
  result
}

fn run(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
  loop {
    terminal.draw(|frame| ui::ui(frame, &mut app)).context("failed to draw frame")?;

    if event::poll(Duration::from_millis(constants().event_poll_ms))? {
      match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
          input::handle_key_event(&mut app, key);
        }
        _ => {}
      }
    }

    if app.should_quit {
      break;
    }
  }
  Ok(())
}
