use std::io::Write;

use termion::event::Key;
use util::{error::GameResult, pos::Pos};

use crate::{draw::Draw, window::Window};

/// What the event loop should do after a keypress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
  Continue,
  Quit,
}

pub trait Entity {
  fn iterate_tiles(&self) -> Box<dyn Iterator<Item = (Draw, Pos)> + '_>;

  fn keypress(&mut self, _key: Key) -> GameResult<Control> {
    Ok(Control::Continue)
  }

  fn render<W: Write>(&self, window: &mut Window<W>)
  where
    Self: Sized,
  {
    self.iterate_tiles().for_each(|(draw, pos)| {
      window.draw(draw, pos);
    })
  }
}
