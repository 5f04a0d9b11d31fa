use std::cmp::Reverse;

use itertools::Itertools;
use word_search::path::FoundWord;

/// The words shown beside the board: the longest found words, longest first,
/// with one of them selected.
#[derive(Clone, Debug, Default)]
pub struct WordList {
  words: Vec<FoundWord>,
  selected: usize,
}

impl WordList {
  /// Keeps the `max_words` longest words. Words of equal length stay in the
  /// order they were found.
  pub fn from_words(words: Vec<FoundWord>, max_words: usize) -> Self {
    Self {
      words: words
        .into_iter()
        .sorted_by_key(|word| Reverse(word.len()))
        .take(max_words)
        .collect(),
      selected: 0,
    }
  }

  pub fn words(&self) -> &[FoundWord] {
    &self.words
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  pub fn selected_index(&self) -> Option<usize> {
    (self.selected < self.words.len()).then_some(self.selected)
  }

  pub fn selected(&self) -> Option<&FoundWord> {
    self.words.get(self.selected)
  }

  pub fn select_next(&mut self) {
    if !self.is_empty() {
      self.selected = (self.selected + 1) % self.len();
    }
  }

  pub fn select_prev(&mut self) {
    if !self.is_empty() {
      self.selected = self.selected.checked_sub(1).unwrap_or(self.len() - 1);
    }
  }
}
