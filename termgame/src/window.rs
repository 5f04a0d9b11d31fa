use std::io::{self, Write};

use termion::cursor;
use util::pos::Pos;

use crate::draw::Draw;

/// A double-buffered character canvas. Each frame is drawn onto a blank
/// canvas, and `render` only rewrites the region that changed since the last
/// frame.
pub struct Window<W: Write> {
  stdout: W,
  width: u32,
  height: u32,
  canvas: Vec<Option<Draw>>,
  prev_canvas: Vec<Option<Draw>>,
}

impl<W: Write> Window<W> {
  pub fn new(mut stdout: W, width: u32, height: u32) -> io::Result<Self> {
    write!(stdout, "{}{}", termion::clear::All, cursor::Goto(1, 1))?;
    stdout.flush()?;
    Ok(Self {
      stdout,
      width,
      height,
      canvas: vec![None; (width * height) as usize],
      prev_canvas: vec![None; (width * height) as usize],
    })
  }

  pub fn width(&self) -> u32 {
    self.width
  }

  pub fn height(&self) -> u32 {
    self.height
  }

  fn idx_to_pos(&self, idx: usize) -> (u32, u32) {
    (idx as u32 % self.width, idx as u32 / self.width)
  }

  fn idx(&self, x: u32, y: u32) -> usize {
    (x + y * self.width) as usize
  }

  /// Starts a new frame.
  pub fn reset(&mut self) {
    std::mem::swap(&mut self.prev_canvas, &mut self.canvas);
    self.canvas.fill(None);
  }

  /// Places `draw` at `pos`, replacing whatever this frame already put there.
  /// Positions outside the window are ignored.
  pub fn draw(&mut self, draw: Draw, pos: Pos) {
    let (x, y) = (pos.x, pos.y);
    if 0 > x || x >= self.width() as i32 || 0 > y || y >= self.height() as i32 {
      return;
    }

    let idx = self.idx(x as u32, y as u32);
    if let Some(tile) = self.canvas.get_mut(idx) {
      *tile = Some(draw);
    }
  }

  pub fn render(&mut self) -> io::Result<()> {
    let ((min_x, max_x), (min_y, max_y)) = self
      .canvas
      .iter()
      .zip(self.prev_canvas.iter())
      .enumerate()
      .fold(
        ((u32::MAX, 0), (u32::MAX, 0)),
        |((min_x, max_x), (min_y, max_y)), (idx, (d1, d2))| {
          if d1 != d2 {
            let (x, y) = self.idx_to_pos(idx);
            ((min_x.min(x), max_x.max(x)), (min_y.min(y), max_y.max(y)))
          } else {
            ((min_x, max_x), (min_y, max_y))
          }
        },
      );

    // Don't render if no change.
    if max_x < min_x {
      return Ok(());
    }

    for y in min_y..=max_y {
      write!(
        self.stdout,
        "{}",
        cursor::Goto((min_x + 1) as u16, (y + 1) as u16)
      )?;
      for x in min_x..=max_x {
        match self.canvas.get(self.idx(x, y)) {
          Some(Some(draw)) => write!(self.stdout, "{draw}")?,
          _ => write!(self.stdout, "{} ", termion::style::Reset)?,
        }
      }
    }
    write!(self.stdout, "{}", cursor::Goto(1, (self.height + 1) as u16))?;
    self.stdout.flush()
  }

  #[cfg(test)]
  fn output(&self) -> &W {
    &self.stdout
  }
}
