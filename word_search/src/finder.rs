use util::{pos::Pos, time::time_fn};
use word_dict::Lexicon;

use crate::{
  board::Board,
  path::{FoundWord, PathState},
};

/// Counts of the work done by one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
  /// Starting cells searched from.
  pub roots: usize,
  /// Cells tentatively appended to a path.
  pub extensions: usize,
  /// Extensions abandoned because no word starts with the path's letters.
  pub pruned: usize,
}

/// Enumerates every word on a board: every path of at least
/// [`MIN_WORD_LEN`](crate::path::MIN_WORD_LEN) adjacent, distinct cells whose
/// letters spell a word in the lexicon.
pub struct WordFinder<'a, L: ?Sized> {
  board: &'a Board,
  lexicon: &'a L,
}

impl<'a, L> WordFinder<'a, L>
where
  L: Lexicon + ?Sized,
{
  pub fn new(board: &'a Board, lexicon: &'a L) -> Self {
    Self { board, lexicon }
  }

  pub fn find_words(&self) -> Vec<FoundWord> {
    let (duration, (words, stats)) = time_fn(|| self.search());
    log::debug!(
      "Found {} words in {:.3}s: {} roots, {} extensions, {} pruned",
      words.len(),
      duration.as_secs_f32(),
      stats.roots,
      stats.extensions,
      stats.pruned
    );
    words
  }

  /// Runs a depth-first search from every cell, column by column. The same
  /// letters reached along different paths are reported once per path. Empty
  /// cells are holes: paths neither start at nor pass through them.
  pub fn search(&self) -> (Vec<FoundWord>, SearchStats) {
    let mut words = Vec::new();
    let mut stats = SearchStats::default();

    for x in 0..self.board.width() as i32 {
      for y in 0..self.board.height() as i32 {
        let root = Pos { x, y };
        if !self.board.is_occupied(root) {
          continue;
        }
        let mut path = PathState::new(self.board);
        path.push(root);
        stats.roots += 1;
        self.extend(&mut path, &mut words, &mut stats);
      }
    }

    (words, stats)
  }

  fn extend(&self, path: &mut PathState<'a>, words: &mut Vec<FoundWord>, stats: &mut SearchStats) {
    let Some(last) = path.last() else {
      return;
    };

    for next in self.board.neighbours(last) {
      // Cells already on the path are refused by `push`.
      if !self.board.is_occupied(next) || !path.push(next) {
        continue;
      }
      stats.extensions += 1;

      if path.is_prefix_of_some_word(self.lexicon) {
        if path.is_complete_word(self.lexicon) {
          words.push(path.snapshot());
        }
        // Keep going: a word may be the start of a longer one.
        self.extend(path, words, stats);
      } else {
        stats.pruned += 1;
      }

      path.pop();
    }
  }
}

pub fn find_words<L>(board: &Board, lexicon: &L) -> Vec<FoundWord>
where
  L: Lexicon + ?Sized,
{
  WordFinder::new(board, lexicon).find_words()
}
