#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::{borrow::Borrow, fs, path::Path};

use bitcode::{Decode, Encode};
use itertools::Itertools;
use util::error::{GameError, GameResult};

/// Word-membership oracle consulted by the word search.
pub trait Lexicon {
  /// True if `word` is exactly one of the words in the lexicon.
  fn contains(&self, word: &str) -> bool;

  /// True if at least one word in the lexicon starts with `prefix`.
  fn has_prefix(&self, prefix: &str) -> bool;
}

impl<L> Lexicon for &L
where
  L: Lexicon + ?Sized,
{
  fn contains(&self, word: &str) -> bool {
    (**self).contains(word)
  }

  fn has_prefix(&self, prefix: &str) -> bool {
    (**self).has_prefix(prefix)
  }
}

/// Word-list filter: a line is dropped only when it is at most two characters
/// long *and* contains something other than `a..=z`. Longer proper nouns and
/// punctuated words are kept.
pub fn keep_word(word: &str) -> bool {
  let short = word.chars().count() <= 2;
  let non_lowercase = word.chars().any(|c| !c.is_ascii_lowercase());
  !(short && non_lowercase)
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct Dictionary {
  /// Sorted and deduplicated.
  words: Vec<String>,
}

impl Dictionary {
  pub fn from_words<S>(words: impl IntoIterator<Item = S>) -> Self
  where
    S: Into<String>,
  {
    Self {
      words: words.into_iter().map(Into::into).sorted().dedup().collect(),
    }
  }

  /// Builds a dictionary from the lines of a word list (line terminators
  /// already stripped), applying [`keep_word`] to each.
  pub fn parse_word_list<S>(lines: impl IntoIterator<Item = S>) -> Self
  where
    S: Borrow<str>,
  {
    Self::from_words(lines.into_iter().filter_map(|line| {
      let line: &str = line.borrow();
      keep_word(line).then(|| line.to_owned())
    }))
  }

  /// Loads either a compiled dictionary (`.bin`) or a newline-delimited word
  /// list. A dictionary with no words is an error.
  pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
    let path = path.as_ref();
    let dict = if path.extension().is_some_and(|ext| ext == "bin") {
      let bytes = fs::read(path).map_err(|err| {
        GameError::Dictionary(format!("Failed to read {}: {err}", path.display()))
      })?;
      Self::from_bytes(&bytes)?
    } else {
      let contents = fs::read_to_string(path).map_err(|err| {
        GameError::Dictionary(format!("Failed to read {}: {err}", path.display()))
      })?;
      Self::parse_word_list(contents.lines())
    };

    if dict.is_empty() {
      return Err(GameError::Dictionary(format!("{} contains no words", path.display())).into());
    }

    log::info!("Loaded {} words from {}", dict.len(), path.display());
    Ok(dict)
  }

  pub fn to_bytes(&self) -> Vec<u8> {
    bitcode::encode(self)
  }

  pub fn from_bytes(bytes: &[u8]) -> GameResult<Self> {
    let dict: Self = bitcode::decode(bytes)?;
    if !dict.words.windows(2).all(|pair| pair[0] < pair[1]) {
      return Err(GameError::Parse("Compiled dictionary is not sorted".to_owned()).into());
    }
    Ok(dict)
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  pub fn words(&self) -> impl Iterator<Item = &str> {
    self.words.iter().map(String::as_str)
  }
}

impl Lexicon for Dictionary {
  fn contains(&self, word: &str) -> bool {
    self
      .words
      .binary_search_by(|candidate| candidate.as_str().cmp(word))
      .is_ok()
  }

  fn has_prefix(&self, prefix: &str) -> bool {
    // Words sharing a prefix are contiguous and sort no earlier than the
    // prefix itself.
    let idx = self.words.partition_point(|word| word.as_str() < prefix);
    self
      .words
      .get(idx)
      .is_some_and(|word| word.starts_with(prefix))
  }
}
