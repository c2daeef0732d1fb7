//! Tracing setup: structured logs to a file under the platform data dir.
//!
//! Logging to stderr would corrupt the terminal UI, so everything goes
//! through a non-blocking file appender. Filter directives come from
//! `MARQUEE_LOG`, then `RUST_LOG`, then default to `info` for this crate.

use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the global subscriber. Returns a guard that must be held for
/// the process lifetime so buffered log lines are flushed on exit. Returns
/// `None` (and logs nothing) when the log directory can't be created.
pub fn init() -> Option<WorkerGuard> {
  let proj_dirs = ProjectDirs::from("", "", "marquee")?;
  let log_dir = proj_dirs.data_dir().join("logs");
  std::fs::create_dir_all(&log_dir).ok()?;

  let appender = tracing_appender::rolling::daily(&log_dir, "marquee.log");
  let (writer, guard) = tracing_appender::non_blocking(appender);

  tracing_subscriber::registry()
    .with(build_env_filter())
    .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(true))
    .init();

  Some(guard)
}

/// `MARQUEE_LOG` > `RUST_LOG` > crate-level `info`. An unparseable
/// `MARQUEE_LOG` falls through rather than failing hard.
fn build_env_filter() -> EnvFilter {
  if let Ok(directives) = std::env::var("MARQUEE_LOG")
    && let Ok(filter) = EnvFilter::try_new(&directives)
  {
    return filter;
  }

  if let Ok(filter) = EnvFilter::try_from_default_env() {
    return filter;
  }

  EnvFilter::new("marquee=info")
}
