use std::fmt::Display;

use termion::{color, style};
use util::pos::Pos;

#[derive(Clone)]
pub struct Draw {
  item: char,
  fg_color: Option<color::AnsiValue>,
  bold: bool,
  reverse: bool,
}

impl Draw {
  pub fn new(item: char) -> Self {
    Self {
      item,
      fg_color: None,
      bold: false,
      reverse: false,
    }
  }

  pub fn item(&self) -> char {
    self.item
  }

  pub fn with_fg(self, color: color::AnsiValue) -> Self {
    Self { fg_color: Some(color), ..self }
  }

  pub fn with_bold(self) -> Self {
    Self { bold: true, ..self }
  }

  /// Swaps foreground and background, used to highlight a tile.
  pub fn with_reverse(self) -> Self {
    Self { reverse: true, ..self }
  }

  pub fn reversed_if(self, reverse: bool) -> Self {
    Self { reverse, ..self }
  }
}

/// One tile per character of `text`, laid out rightwards from `pos`.
pub fn text(text: impl AsRef<str>, pos: Pos) -> impl Iterator<Item = (Draw, Pos)> {
  let chars: Vec<_> = text.as_ref().chars().collect();
  chars
    .into_iter()
    .enumerate()
    .map(move |(idx, c)| (Draw::new(c), Pos { x: pos.x + idx as i32, ..pos }))
}

impl Display for Draw {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let fg_str = if let Some(color) = self.fg_color {
      color.fg_string()
    } else {
      color::Reset.fg_str().to_owned()
    };
    let bold_str = if self.bold {
      style::Bold.to_string()
    } else {
      "".to_owned()
    };
    let reverse_str = if self.reverse {
      style::Invert.to_string()
    } else {
      "".to_owned()
    };
    write!(
      f,
      "{}{bold_str}{reverse_str}{fg_str}{}",
      style::Reset,
      self.item
    )
  }
}

impl PartialEq for Draw {
  fn eq(&self, other: &Self) -> bool {
    let same_color = |a: Option<color::AnsiValue>, b: Option<color::AnsiValue>| match (a, b) {
      (Some(color::AnsiValue(c1)), Some(color::AnsiValue(c2))) => c1 == c2,
      (None, None) => true,
      _ => false,
    };

    self.item == other.item
      && self.bold == other.bold
      && self.reverse == other.reverse
      && same_color(self.fg_color, other.fg_color)
  }
}

impl Eq for Draw {}
