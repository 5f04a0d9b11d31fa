use std::fmt::Display;

use util::{grid::Gridlike, pos::Pos};
use word_dict::Lexicon;

use crate::board::Board;

/// Paths shorter than this never count as words, even if the dictionary
/// contains them.
pub const MIN_WORD_LEN: usize = 3;

/// A word under construction: a sequence of distinct, pairwise-adjacent cells
/// on a board, along with the letters read off those cells.
#[derive(Clone, Debug)]
pub struct PathState<'a> {
  board: &'a Board,
  coords: Vec<Pos>,
  letters: String,
}

impl<'a> PathState<'a> {
  pub fn new(board: &'a Board) -> Self {
    Self { board, coords: Vec::new(), letters: String::new() }
  }

  /// Appends `pos` if it is on the board, not yet part of the path, and
  /// adjacent to the current last cell. Returns whether it was appended.
  pub fn push(&mut self, pos: Pos) -> bool {
    let Some(cell) = self.board.grid().get(pos) else {
      return false;
    };
    let extends = self
      .coords
      .last()
      .is_none_or(|&last| self.board.are_adjacent(last, pos));
    if !extends || self.contains(pos) {
      return false;
    }

    self.coords.push(pos);
    self.letters.push(cell.as_char());
    true
  }

  pub fn pop(&mut self) -> Option<Pos> {
    let pos = self.coords.pop()?;
    self.letters.pop();
    Some(pos)
  }

  pub fn last(&self) -> Option<Pos> {
    self.coords.last().copied()
  }

  pub fn len(&self) -> usize {
    self.coords.len()
  }

  pub fn is_empty(&self) -> bool {
    self.coords.is_empty()
  }

  pub fn coords(&self) -> &[Pos] {
    &self.coords
  }

  pub fn letters(&self) -> &str {
    &self.letters
  }

  pub fn contains(&self, pos: Pos) -> bool {
    self.coords.contains(&pos)
  }

  pub fn is_prefix_of_some_word<L: Lexicon + ?Sized>(&self, lexicon: &L) -> bool {
    lexicon.has_prefix(&self.letters)
  }

  pub fn is_complete_word<L: Lexicon + ?Sized>(&self, lexicon: &L) -> bool {
    self.len() >= MIN_WORD_LEN && lexicon.contains(&self.letters)
  }

  pub fn snapshot(&self) -> FoundWord {
    FoundWord {
      coords: self.coords.clone(),
      letters: self.letters.clone(),
    }
  }
}

/// A word found on the board, frozen at the moment it was found.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct FoundWord {
  coords: Vec<Pos>,
  letters: String,
}

impl FoundWord {
  pub fn coords(&self) -> &[Pos] {
    &self.coords
  }

  pub fn letters(&self) -> &str {
    &self.letters
  }

  pub fn len(&self) -> usize {
    self.coords.len()
  }

  pub fn is_empty(&self) -> bool {
    self.coords.is_empty()
  }
}

impl Display for FoundWord {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.letters)
  }
}
