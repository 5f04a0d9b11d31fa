use std::io::{self, StdoutLock};

use termion::{
  cursor::HideCursor,
  event::Key,
  input::TermRead,
  raw::{IntoRawMode, RawTerminal},
  screen::{AlternateScreen, IntoAlternateScreen},
};
use util::error::GameResult;

use crate::{
  entity::{Control, Entity},
  window::Window,
};

type Term<'a> = HideCursor<AlternateScreen<RawTerminal<StdoutLock<'a>>>>;

/// Owns the terminal for the lifetime of the game: raw mode, the alternate
/// screen and a hidden cursor, all restored on drop.
pub struct EventLoop<'a> {
  window: Window<Term<'a>>,
}

impl EventLoop<'_> {
  pub fn new() -> GameResult<Self> {
    let stdout = HideCursor::from(
      io::stdout()
        .lock()
        .into_raw_mode()?
        .into_alternate_screen()?,
    );

    let (width, height) = termion::terminal_size()?;
    let window = Window::new(stdout, width as u32, height as u32)?;
    Ok(Self { window })
  }

  /// Renders `entity`, then blocks for the next key and hands it over, until
  /// the entity asks to quit, Esc is pressed or input runs out.
  pub fn run<E: Entity>(&mut self, entity: &mut E) -> GameResult {
    let mut keys = io::stdin().keys();
    loop {
      self.window.reset();
      entity.render(&mut self.window);
      self.window.render()?;

      let Some(key) = keys.next() else {
        return Ok(());
      };
      match key? {
        Key::Esc => return Ok(()),
        key => {
          if entity.keypress(key)? == Control::Quit {
            return Ok(());
          }
        }
      }
    }
  }
}
