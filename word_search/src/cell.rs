use std::fmt::Display;

use rand::Rng;

pub const WILDCARD_CHAR: char = '*';

/// Number of symbols a generated cell is drawn from: `a..=z` plus the
/// wildcard.
pub const ALPHABET_SIZE: u8 = 27;

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum Cell {
  Letter(char),
  Wildcard,
  /// Only present between an elimination and the board settling, or while the
  /// board is being edited by hand.
  #[default]
  Empty,
}

impl Cell {
  /// Parses a board character. Both `' '` and `'.'` denote an empty cell.
  pub fn from_char(c: char) -> Option<Self> {
    match c {
      'a'..='z' => Some(Self::Letter(c)),
      WILDCARD_CHAR => Some(Self::Wildcard),
      ' ' | '.' => Some(Self::Empty),
      _ => None,
    }
  }

  pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
    match rng.random_range(0..ALPHABET_SIZE) {
      n if n < 26 => Self::Letter((b'a' + n) as char),
      _ => Self::Wildcard,
    }
  }

  pub fn as_char(&self) -> char {
    match self {
      Self::Letter(c) => *c,
      Self::Wildcard => WILDCARD_CHAR,
      Self::Empty => ' ',
    }
  }

  pub fn is_empty(&self) -> bool {
    matches!(self, Self::Empty)
  }

  pub fn is_wildcard(&self) -> bool {
    matches!(self, Self::Wildcard)
  }
}

impl Display for Cell {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_char())
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use googletest::prelude::*;
  use rand::{rngs::StdRng, SeedableRng};

  use super::{Cell, ALPHABET_SIZE};

  #[gtest]
  fn test_from_char() {
    expect_that!(Cell::from_char('q'), some(eq(Cell::Letter('q'))));
    expect_that!(Cell::from_char('*'), some(eq(Cell::Wildcard)));
    expect_that!(Cell::from_char(' '), some(eq(Cell::Empty)));
    expect_that!(Cell::from_char('.'), some(eq(Cell::Empty)));
    expect_that!(Cell::from_char('Q'), none());
    expect_that!(Cell::from_char('1'), none());
  }

  #[gtest]
  fn test_as_char() {
    expect_that!(Cell::Letter('k').as_char(), eq('k'));
    expect_that!(Cell::Wildcard.as_char(), eq('*'));
    expect_that!(Cell::Empty.as_char(), eq(' '));
  }

  #[gtest]
  fn test_random_covers_alphabet() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let symbols: HashSet<_> = (0..10_000).map(|_| Cell::random(&mut rng)).collect();
    expect_that!(symbols.len(), eq(ALPHABET_SIZE as usize));
    expect_false!(symbols.contains(&Cell::Empty));
  }
}
