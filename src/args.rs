use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
  /// The interactive game.
  Play,
  /// Print a generated board and its longest words, then exit.
  List,
  /// Filter the word list and save it as a compiled dictionary.
  CompileDict,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
  #[arg(long, value_enum, default_value = "play")]
  pub mode: RunMode,

  /// Newline-delimited word list, or a compiled `.bin` dictionary.
  #[arg(long, default_value = "/usr/share/dict/cracklib-small")]
  pub dict: PathBuf,

  #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..))]
  pub width: u32,

  #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u32).range(1..))]
  pub height: u32,

  /// Seed for board generation. Boards are random when omitted.
  #[arg(long)]
  pub seed: Option<u64>,

  /// How many of the longest words to show.
  #[arg(long, default_value_t = 10)]
  pub max_words: usize,

  /// Where `compile-dict` writes the compiled dictionary.
  #[arg(long, default_value = "dict.bin")]
  pub out: PathBuf,

  /// Send logs, including gravity traces, to this file.
  #[arg(long)]
  pub log_file: Option<PathBuf>,

  #[arg(long)]
  pub verbose: bool,
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use std::path::PathBuf;

  use clap::{CommandFactory, Parser};
  use googletest::prelude::*;

  use super::{Args, RunMode};

  #[gtest]
  fn test_command_is_well_formed() {
    Args::command().debug_assert();
  }

  #[gtest]
  fn test_defaults() {
    let args = Args::try_parse_from(["hex-words"]).unwrap();
    expect_that!(args.mode, eq(RunMode::Play));
    expect_that!(args.width, eq(8));
    expect_that!(args.height, eq(12));
    expect_that!(args.max_words, eq(10));
    expect_that!(args.seed, none());
    expect_that!(args.dict, eq(&PathBuf::from("/usr/share/dict/cracklib-small")));
  }

  #[gtest]
  fn test_modes() {
    let args = Args::try_parse_from(["hex-words", "--mode", "compile-dict", "--out", "x.bin"]);
    assert_that!(args, ok(anything()));
    let args = args.unwrap();
    expect_that!(args.mode, eq(RunMode::CompileDict));
    expect_that!(args.out, eq(&PathBuf::from("x.bin")));
  }

  #[gtest]
  fn test_rejects_empty_board() {
    expect_that!(Args::try_parse_from(["hex-words", "--width", "0"]), err(anything()));
    expect_that!(Args::try_parse_from(["hex-words", "--height", "0"]), err(anything()));
  }
}
