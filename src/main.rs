#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;
mod logging;
mod tower;
mod word_list;

use std::{fs::File, io::Write};

use args::{Args, RunMode};
use clap::Parser;
use itertools::Itertools;
use rand::{rngs::StdRng, SeedableRng};
use termgame::event_loop::EventLoop;
use tower::Tower;
use util::{error::GameResult, time::time_fn};
use word_dict::Dictionary;
use word_list::WordList;
use word_search::{board::Board, finder::find_words, trace::LogTrace};

fn new_board(args: &Args) -> Board {
  let board = match args.seed {
    Some(seed) => Board::generate(args.width, args.height, &mut StdRng::seed_from_u64(seed)),
    None => Board::generate(args.width, args.height, &mut rand::rng()),
  };

  if args.log_file.is_some() {
    board.with_trace(LogTrace)
  } else {
    board
  }
}

fn play(args: &Args) -> GameResult {
  let dict = Dictionary::load(&args.dict)?;
  let mut tower = Tower::new(new_board(args), dict, args.max_words);
  let mut ev = EventLoop::new()?;
  ev.run(&mut tower)
}

fn list(args: &Args) -> GameResult {
  let dict = Dictionary::load(&args.dict)?;
  let board = new_board(args);

  let (time, words) = time_fn(|| find_words(&board, &dict));
  log::info!("Found {} words in {}s", words.len(), time.as_secs_f32());

  println!("{board}");
  for word in WordList::from_words(words, args.max_words).words() {
    println!("{:<12} {}", word.letters(), word.coords().iter().join(" "));
  }
  Ok(())
}

fn compile_dict(args: &Args) -> GameResult {
  let dict = Dictionary::load(&args.dict)?;

  let mut file = File::create(&args.out)?;
  file.write_all(&dict.to_bytes())?;

  log::info!("Wrote {} words to {}", dict.len(), args.out.display());
  Ok(())
}

fn main() -> GameResult {
  let args = Args::parse();
  logging::init_logger(&args)?;

  match args.mode {
    RunMode::Play => play(&args),
    RunMode::List => list(&args),
    RunMode::CompileDict => compile_dict(&args),
  }
}
