use core::fmt;
use std::{
  error::Error,
  fmt::{Display, Formatter},
};

use crate::pos::Pos;

#[derive(Debug)]
pub enum GameError {
  Internal(String),
  Parse(String),
  OutOfBounds(Pos),
  Dictionary(String),
}

impl Display for GameError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      GameError::Internal(msg) => write!(f, "Internal error: {msg}"),
      GameError::Parse(msg) => write!(f, "Parse error: {msg}"),
      GameError::OutOfBounds(pos) => write!(f, "Position {pos} is out of bounds"),
      GameError::Dictionary(msg) => write!(f, "Dictionary error: {msg}"),
    }
  }
}

impl Error for GameError {}

pub type GameResult<T = ()> = Result<T, Box<dyn Error>>;
