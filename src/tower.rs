use std::collections::HashSet;

use termgame::{
  color::AnsiValue,
  draw::{text, Draw},
  entity::{Control, Entity},
  Key,
};
use util::{error::GameResult, pos::Pos};
use word_dict::Dictionary;
use word_search::{board::Board, cell::Cell, finder::find_words};

use crate::word_list::WordList;

const BROWSE_PROMPT: &str =
  "(R)egenerate Wordlist, (E)liminate Word, (Up/Down) Select Word, (N)ew Tower, (Q)uit";
const EDIT_PROMPT: &str = "Enter letters, use arrow keys, then hit (End)";
const WILDCARD_COLOR: AnsiValue = AnsiValue(214);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
  Browse,
  /// Filling in a cleared board by hand.
  Edit { cursor: Pos },
}

/// The game screen: the board, the longest words found on it, and the keys to
/// eliminate words or build a new board by hand.
pub struct Tower {
  board: Board,
  dict: Dictionary,
  words: WordList,
  max_words: usize,
  mode: Mode,
  last_key: String,
}

impl Tower {
  pub fn new(board: Board, dict: Dictionary, max_words: usize) -> Self {
    let mut tower = Self {
      board,
      dict,
      words: WordList::default(),
      max_words,
      mode: Mode::Browse,
      last_key: String::new(),
    };
    tower.refresh_words();
    tower
  }

  pub fn board(&self) -> &Board {
    &self.board
  }

  pub fn words(&self) -> &WordList {
    &self.words
  }

  pub fn is_editing(&self) -> bool {
    matches!(self.mode, Mode::Edit { .. })
  }

  fn refresh_words(&mut self) {
    self.words = WordList::from_words(find_words(&self.board, &self.dict), self.max_words);
  }

  fn list_x(&self) -> i32 {
    2 * self.board.width() as i32
  }

  fn prompt_y(&self) -> i32 {
    self.board.height() as i32 + 4
  }

  fn key_y(&self) -> i32 {
    self.board.height() as i32 + 6
  }

  fn highlighted(&self) -> HashSet<Pos> {
    match self.mode {
      Mode::Browse => self
        .words
        .selected()
        .map(|word| word.coords().iter().copied().collect())
        .unwrap_or_default(),
      Mode::Edit { cursor } => HashSet::from([cursor]),
    }
  }

  fn browse_key(&mut self, key: Key) -> GameResult<Control> {
    match key {
      Key::Char('e' | 'E') => {
        if let Some(word) = self.words.selected() {
          self.board.eliminate_word(word.coords())?;
        }
        self.refresh_words();
      }
      Key::Char('r' | 'R') => self.refresh_words(),
      Key::Char('q' | 'Q') => return Ok(Control::Quit),
      Key::Char('n' | 'N') => {
        self.board.clear();
        self.words = WordList::default();
        self.mode = Mode::Edit { cursor: Pos::zero() };
      }
      Key::Up => self.words.select_prev(),
      Key::Down => self.words.select_next(),
      _ => {}
    }

    Ok(Control::Continue)
  }

  fn edit_key(&mut self, key: Key, cursor: Pos) -> GameResult<Control> {
    let last_x = self.board.width() as i32 - 1;
    let last_y = self.board.height() as i32 - 1;

    let cursor = match key {
      Key::Char(c @ ('a'..='z' | '*' | ' ')) => {
        if let Some(cell) = Cell::from_char(c) {
          self.board.set(cursor, cell)?;
        }
        // Typing runs along the row, then continues at the start of the next.
        if cursor.x < last_x {
          Pos { x: cursor.x + 1, ..cursor }
        } else {
          Pos { x: 0, y: (cursor.y + 1).min(last_y) }
        }
      }
      Key::Left => Pos { x: (cursor.x - 1).max(0), ..cursor },
      Key::Right => Pos { x: (cursor.x + 1).min(last_x), ..cursor },
      Key::Up => Pos { y: (cursor.y - 1).max(0), ..cursor },
      Key::Down => Pos { y: (cursor.y + 1).min(last_y), ..cursor },
      Key::End => {
        self.board.apply_gravity();
        self.mode = Mode::Browse;
        self.refresh_words();
        return Ok(Control::Continue);
      }
      _ => cursor,
    };

    self.mode = Mode::Edit { cursor };
    Ok(Control::Continue)
  }
}

impl Entity for Tower {
  fn iterate_tiles(&self) -> Box<dyn Iterator<Item = (Draw, Pos)> + '_> {
    let highlighted = self.highlighted();
    let grid = self.board.grid();
    let board_tiles = grid.positions().zip(grid.iter()).map(move |(pos, cell)| {
      let mut draw = Draw::new(cell.as_char()).reversed_if(highlighted.contains(&pos));
      if cell.is_wildcard() {
        draw = draw.with_fg(WILDCARD_COLOR);
      }
      (draw, Pos { x: 2 * pos.x, y: pos.y })
    });

    let list_x = self.list_x();
    let selected = self.words.selected_index();
    let list_tiles = self
      .words
      .words()
      .iter()
      .enumerate()
      .flat_map(move |(row, word)| {
        let y = row as i32;
        text("| ", Pos { x: list_x, y }).chain(
          text(word.letters(), Pos { x: list_x + 2, y })
            .map(move |(draw, pos)| (draw.reversed_if(selected == Some(row)), pos)),
        )
      });

    let prompt = if self.is_editing() {
      EDIT_PROMPT
    } else {
      BROWSE_PROMPT
    };

    Box::new(
      board_tiles
        .chain(list_tiles)
        .chain(
          text(prompt, Pos { x: 0, y: self.prompt_y() })
            .map(|(draw, pos)| (draw.with_bold(), pos)),
        )
        .chain(text(self.last_key.as_str(), Pos { x: 0, y: self.key_y() })),
    )
  }

  fn keypress(&mut self, key: Key) -> GameResult<Control> {
    self.last_key = format!("{key:?}");
    match self.mode {
      Mode::Browse => self.browse_key(key),
      Mode::Edit { cursor } => self.edit_key(key, cursor),
    }
  }
}
