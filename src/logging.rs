use std::{env, fs::File};

use env_logger::Target;
use log::LevelFilter;
use util::error::GameResult;

use crate::args::{Args, RunMode};

/// Sets up `env_logger`. Logs go to `--log-file` when given, and otherwise to
/// stderr, except in play mode where the terminal belongs to the game and
/// logging stays off. `RUST_LOG` overrides the default level.
pub fn init_logger(args: &Args) -> GameResult {
  let level = match (&args.log_file, args.verbose) {
    (Some(_), _) => LevelFilter::Trace,
    (None, true) => LevelFilter::Debug,
    (None, false) => LevelFilter::Info,
  };

  let mut builder = env_logger::Builder::new();
  builder
    .filter_level(level)
    .format_timestamp(None)
    .format_module_path(false)
    .format_target(false);

  if let Ok(filters) = env::var("RUST_LOG") {
    builder.parse_filters(&filters);
  }

  match &args.log_file {
    Some(path) => {
      builder.target(Target::Pipe(Box::new(File::create(path)?)));
    }
    None if args.mode == RunMode::Play => return Ok(()),
    None => {}
  }

  builder.try_init()?;
  log::debug!("Logger initialized at {level:?} level");
  Ok(())
}
