use std::fmt::{Debug, Display};

use itertools::Itertools;
use rand::Rng;
use util::{
  error::{GameError, GameResult},
  grid::{Grid, Gridlike, MutGridlike},
  pos::{Diff, Pos},
};

use crate::{
  cell::Cell,
  trace::{GravityTrace, NoTrace},
};

/// Offsets of the cells reachable from a cell: NW, N, W, E, S and SE. The NE
/// and SW diagonals are not neighbours, which makes the rectangular board a
/// hexagonal tiling.
pub const HEX_NEIGHBOURS: [Diff; 6] = [
  Diff { x: -1, y: -1 },
  Diff { x: -1, y: 0 },
  Diff { x: 0, y: -1 },
  Diff { x: 0, y: 1 },
  Diff { x: 1, y: 0 },
  Diff { x: 1, y: 1 },
];

/// Eliminated words at least this long clear every neighbouring cell, not just
/// the neighbouring wildcards.
pub const BLAST_WORD_LEN: usize = 5;

pub struct Board {
  grid: Grid<Cell>,
  trace: Box<dyn GravityTrace>,
}

impl Board {
  /// An all-empty board.
  pub fn new(width: u32, height: u32) -> Self {
    Self::from_grid(Grid::new(width, height))
  }

  pub fn from_grid(grid: Grid<Cell>) -> Self {
    Self { grid, trace: Box::new(NoTrace) }
  }

  /// Fills every cell independently and uniformly from the 26 letters and the
  /// wildcard.
  pub fn generate<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Self {
    Self::from_grid(Grid::from_fn(width, height, |_| Cell::random(rng)))
  }

  /// Parses one line per row. Lines are trimmed and blank lines skipped, so
  /// `'.'` is the way to write an empty cell.
  pub fn from_layout(layout: &str) -> GameResult<Self> {
    let (width, height, cells) = layout
      .lines()
      .map(str::trim)
      .filter(|line| !line.is_empty())
      .try_fold(
        (None, 0, vec![]),
        |(width, height, mut cells), line| -> GameResult<_> {
          let row = line
            .chars()
            .map(|c| {
              Cell::from_char(c)
                .ok_or_else(|| GameError::Parse(format!("Unrecognized board character '{c}'")).into())
            })
            .collect::<GameResult<Vec<_>>>()?;
          if let Some(width) = width {
            if row.len() != width {
              return Err(
                GameError::Parse(format!("Board line lengths differ: {} vs {width}", row.len()))
                  .into(),
              );
            }
          }

          let row_len = row.len();
          cells.extend(row);
          Ok((Some(row_len), height + 1, cells))
        },
      )?;

    let width = width.ok_or_else(|| GameError::Parse("Empty board string".to_owned()))? as u32;
    Ok(Self::from_grid(Grid::from_vec(cells, width, height)?))
  }

  pub fn with_trace(self, trace: impl GravityTrace + 'static) -> Self {
    Self { trace: Box::new(trace), ..self }
  }

  pub fn grid(&self) -> &Grid<Cell> {
    &self.grid
  }

  pub fn width(&self) -> u32 {
    self.grid.width()
  }

  pub fn height(&self) -> u32 {
    self.grid.height()
  }

  pub fn in_bounds(&self, pos: Pos) -> bool {
    self.grid.in_bounds(pos)
  }

  pub fn get(&self, pos: Pos) -> GameResult<Cell> {
    self
      .grid
      .get(pos)
      .copied()
      .ok_or_else(|| GameError::OutOfBounds(pos).into())
  }

  pub fn set(&mut self, pos: Pos, cell: Cell) -> GameResult {
    *self.grid.get_mut(pos).ok_or(GameError::OutOfBounds(pos))? = cell;
    Ok(())
  }

  /// The on-board cells adjacent to `pos`, in [`HEX_NEIGHBOURS`] order.
  pub fn neighbours(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
    HEX_NEIGHBOURS
      .iter()
      .map(move |&diff| pos + diff)
      .filter(|&neighbour| self.in_bounds(neighbour))
  }

  pub fn are_adjacent(&self, a: Pos, b: Pos) -> bool {
    self.in_bounds(a) && self.in_bounds(b) && HEX_NEIGHBOURS.contains(&(b - a))
  }

  pub fn clear(&mut self) {
    self.grid.fill(Cell::Empty);
  }

  /// True for on-board cells holding a letter or a wildcard.
  pub fn is_occupied(&self, pos: Pos) -> bool {
    self.grid.get(pos).is_some_and(|cell| !cell.is_empty())
  }

  /// Empties `pos`, returning whether it held anything.
  fn clear_cell(&mut self, pos: Pos) -> bool {
    self
      .grid
      .get_mut(pos)
      .map(std::mem::take)
      .is_some_and(|cell| !cell.is_empty())
  }

  /// Drops every non-empty cell as far down its column as it will go,
  /// preserving the order of the cells within each column.
  pub fn apply_gravity(&mut self) {
    for x in 0..self.width() as i32 {
      for y in (0..self.height() as i32).rev() {
        let slot = Pos { x, y };
        if self.is_occupied(slot) {
          continue;
        }
        self.trace.empty_slot(slot);

        let Some(source) = (0..y)
          .rev()
          .map(|above| Pos { x, y: above })
          .find(|&above| self.is_occupied(above))
        else {
          // Nothing left above this slot in the column.
          break;
        };

        let cell = self.grid.get_mut(source).map(std::mem::take).unwrap_or_default();
        if let Some(dest) = self.grid.get_mut(slot) {
          *dest = cell;
        }
        self.trace.moved(source, slot);
      }
    }
  }

  /// The first half of eliminating `path`: empties the path's cells and then
  /// its neighbours, either all of them (for words of at least
  /// [`BLAST_WORD_LEN`] letters) or only those holding a wildcard. Returns the
  /// number of cells that were emptied.
  pub fn clear_word_cells(&mut self, path: &[Pos]) -> GameResult<usize> {
    if let Some(&pos) = path.iter().find(|&&pos| !self.in_bounds(pos)) {
      return Err(GameError::OutOfBounds(pos).into());
    }

    let blast = path.len() >= BLAST_WORD_LEN;
    let mut cleared = path.iter().filter(|&&pos| self.clear_cell(pos)).count();

    let doomed: Vec<_> = path
      .iter()
      .flat_map(|&pos| self.neighbours(pos))
      .unique()
      .filter(|&neighbour| blast || self.grid.get(neighbour).is_some_and(Cell::is_wildcard))
      .collect();
    cleared += doomed.into_iter().filter(|&pos| self.clear_cell(pos)).count();

    Ok(cleared)
  }

  /// Removes a found word from the board and lets the remaining cells settle.
  pub fn eliminate_word(&mut self, path: &[Pos]) -> GameResult {
    let cleared = self.clear_word_cells(path)?;
    log::debug!(
      "Eliminated a {}-cell path, emptying {cleared} cells",
      path.len()
    );
    self.apply_gravity();
    Ok(())
  }
}

impl Debug for Board {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Board")
      .field("width", &self.width())
      .field("height", &self.height())
      .finish_non_exhaustive()?;
    writeln!(f)?;
    write!(f, "{}", self.grid)
  }
}

impl Display for Board {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.grid)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use std::{cell::RefCell, collections::HashSet, rc::Rc};

  use googletest::prelude::*;
  use rand::{rngs::StdRng, SeedableRng};
  use util::{
    grid::{Grid, Gridlike},
    pos::Pos,
  };

  use crate::{cell::Cell, trace::GravityTrace};

  use super::Board;

  fn board(layout: &str) -> Board {
    Board::from_layout(layout).unwrap()
  }

  fn settled(board: &Board) -> bool {
    (0..board.width()).all(|x| {
      board
        .grid()
        .iter_col(x)
        .skip_while(|cell| cell.is_empty())
        .all(|cell| !cell.is_empty())
    })
  }

  #[derive(Clone, Default)]
  struct RecordedMoves(Rc<RefCell<Vec<(Pos, Pos)>>>);

  impl GravityTrace for RecordedMoves {
    fn moved(&mut self, from: Pos, to: Pos) {
      self.0.borrow_mut().push((from, to));
    }
  }

  #[gtest]
  fn test_interior_neighbours() {
    let board = Board::new(8, 12);
    let neighbours: Vec<_> = board.neighbours(Pos::new(3, 3)).collect();
    expect_that!(
      neighbours,
      container_eq([
        Pos::new(2, 2),
        Pos::new(2, 3),
        Pos::new(3, 2),
        Pos::new(3, 4),
        Pos::new(4, 3),
        Pos::new(4, 4),
      ])
    );
  }

  #[gtest]
  fn test_corner_neighbours() {
    let board = Board::new(8, 12);
    expect_that!(
      board.neighbours(Pos::zero()).collect::<Vec<_>>(),
      container_eq([Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)])
    );
    expect_that!(
      board.neighbours(Pos::new(7, 11)).collect::<Vec<_>>(),
      container_eq([Pos::new(6, 10), Pos::new(6, 11), Pos::new(7, 10)])
    );
    // The other two corners only touch their row and column.
    expect_that!(board.neighbours(Pos::new(7, 0)).count(), eq(2));
    expect_that!(board.neighbours(Pos::new(0, 11)).count(), eq(2));
  }

  #[gtest]
  fn test_no_anti_diagonal() {
    let board = Board::new(8, 12);
    expect_false!(board.are_adjacent(Pos::new(3, 3), Pos::new(4, 2)));
    expect_false!(board.are_adjacent(Pos::new(3, 3), Pos::new(2, 4)));
    expect_true!(board.are_adjacent(Pos::new(3, 3), Pos::new(4, 4)));
    expect_true!(board.are_adjacent(Pos::new(3, 3), Pos::new(2, 2)));
    expect_false!(board.are_adjacent(Pos::new(3, 3), Pos::new(3, 3)));
    expect_false!(board.are_adjacent(Pos::new(3, 3), Pos::new(3, 5)));
  }

  #[gtest]
  fn test_adjacency_symmetric() {
    let board = Board::new(4, 5);
    let positions: Vec<_> = board.grid().positions().collect();
    for &a in &positions {
      let neighbours: HashSet<_> = board.neighbours(a).collect();
      expect_false!(neighbours.contains(&a));
      for &b in &positions {
        let b_neighbours: HashSet<_> = board.neighbours(b).collect();
        expect_that!(neighbours.contains(&b), eq(b_neighbours.contains(&a)));
        expect_that!(board.are_adjacent(a, b), eq(neighbours.contains(&b)));
      }
    }
  }

  #[gtest]
  fn test_from_layout() {
    let board = board(
      "ab*
       .cd",
    );
    expect_that!(board.width(), eq(3));
    expect_that!(board.height(), eq(2));
    expect_that!(board.get(Pos::new(2, 0)).unwrap(), eq(Cell::Wildcard));
    expect_that!(board.get(Pos::new(0, 1)).unwrap(), eq(Cell::Empty));
    expect_that!(board.get(Pos::new(2, 1)).unwrap(), eq(Cell::Letter('d')));
  }

  #[gtest]
  fn test_from_layout_errors() {
    expect_that!(Board::from_layout(""), err(anything()));
    expect_that!(Board::from_layout("ab\nc"), err(anything()));
    expect_that!(Board::from_layout("aB"), err(anything()));
  }

  #[gtest]
  fn test_out_of_bounds_access() {
    let mut board = Board::new(2, 2);
    expect_that!(board.get(Pos::new(2, 0)), err(anything()));
    expect_that!(board.get(Pos::new(0, -1)), err(anything()));
    expect_that!(board.set(Pos::new(0, 2), Cell::Wildcard), err(anything()));
    expect_that!(board.set(Pos::new(1, 1), Cell::Wildcard), ok(anything()));
    expect_that!(board.get(Pos::new(1, 1)).unwrap(), eq(Cell::Wildcard));
  }

  #[gtest]
  fn test_generate_is_seeded() {
    let first = Board::generate(8, 12, &mut StdRng::seed_from_u64(17));
    let second = Board::generate(8, 12, &mut StdRng::seed_from_u64(17));
    expect_that!(first.grid(), eq(second.grid()));
    expect_true!(first.grid().iter().all(|cell| !cell.is_empty()));
  }

  #[gtest]
  fn test_clear() {
    let mut board = Board::generate(3, 3, &mut StdRng::seed_from_u64(1));
    board.clear();
    expect_true!(board.grid().iter().all(Cell::is_empty));
    expect_that!(board.width(), eq(3));
  }

  #[gtest]
  fn test_gravity() {
    let mut board = board(
      "a.c
       .b.
       d..",
    );
    board.apply_gravity();
    expect_that!(
      board.grid(),
      eq(&board_grid(
        "...
         a..
         dbc"
      ))
    );
  }

  fn board_grid(layout: &str) -> Grid<Cell> {
    Board::from_layout(layout).unwrap().grid().clone()
  }

  #[gtest]
  fn test_gravity_preserves_column_order() {
    let mut board = board(
      "a
       .
       b
       .
       .
       c
       .",
    );
    board.apply_gravity();
    expect_that!(
      board.grid().iter_col(0).map(Cell::as_char).collect::<String>(),
      eq("    abc")
    );
  }

  #[gtest]
  fn test_gravity_fixed_point() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut board = Board::generate(8, 12, &mut rng);
    for pos in board.grid().positions().collect::<Vec<_>>() {
      if (pos.x * 7 + pos.y * 3) % 4 == 0 {
        board.set(pos, Cell::Empty).unwrap();
      }
    }

    board.apply_gravity();
    expect_true!(settled(&board));
    let once = board.grid().clone();
    board.apply_gravity();
    expect_that!(board.grid(), eq(&once));
  }

  #[gtest]
  fn test_gravity_trace() {
    let moves = RecordedMoves::default();
    let mut board = board(
      "a.c
       .b.
       d..",
    )
    .with_trace(moves.clone());
    board.apply_gravity();
    expect_that!(
      moves.0.borrow().clone(),
      container_eq([
        (Pos::new(0, 0), Pos::new(0, 1)),
        (Pos::new(1, 1), Pos::new(1, 2)),
        (Pos::new(2, 0), Pos::new(2, 2)),
      ])
    );
  }

  #[gtest]
  fn test_long_word_blast_radius() {
    let mut board = board(
      "abcde
       fghij
       klmno
       pqrst
       uvwxy",
    );
    let path: Vec<_> = (0..5).map(|x| Pos::new(x, 2)).collect();
    let expected: HashSet<_> = path
      .iter()
      .flat_map(|&pos| board.neighbours(pos).chain([pos]))
      .collect();

    expect_that!(board.clear_word_cells(&path).unwrap(), eq(15));
    for pos in board.grid().positions() {
      expect_that!(board.get(pos).unwrap().is_empty(), eq(expected.contains(&pos)));
    }
  }

  #[gtest]
  fn test_short_word_only_clears_wildcards() {
    let mut board = board(
      "abc*d
       *fgh*
       ijklm",
    );
    let path = [Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0)];
    expect_that!(board.clear_word_cells(&path).unwrap(), eq(5));
    // The wildcard at (4, 1) is not next to the word.
    expect_that!(
      board.grid(),
      eq(&board_grid(
        "....d
         .fgh*
         ijklm"
      ))
    );
  }

  #[gtest]
  fn test_four_letter_word_is_not_long() {
    let mut board = board(
      "abcde
       fghij",
    );
    let path: Vec<_> = (0..4).map(|x| Pos::new(x, 0)).collect();
    expect_that!(board.clear_word_cells(&path).unwrap(), eq(4));
    expect_that!(
      board.grid(),
      eq(&board_grid(
        "....e
         fghij"
      ))
    );
  }

  #[gtest]
  fn test_eliminate_long_word() {
    let mut board = board(
      "abcde
       fghij
       klmno
       pqrst
       uvwxy",
    );
    let path: Vec<_> = (0..5).map(|x| Pos::new(x, 2)).collect();
    assert_that!(board.eliminate_word(&path), ok(anything()));
    expect_that!(
      board.grid(),
      eq(&board_grid(
        ".....
         .....
         .....
         abcde
         uvwxy"
      ))
    );
  }

  #[gtest]
  fn test_eliminate_out_of_bounds_leaves_board() {
    let mut board = board(
      "abc
       def",
    );
    let before = board.grid().clone();
    expect_that!(
      board.eliminate_word(&[Pos::new(0, 0), Pos::new(0, 2)]),
      err(anything())
    );
    expect_that!(board.grid(), eq(&before));
  }
}
