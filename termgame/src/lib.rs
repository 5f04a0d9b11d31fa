#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod draw;
pub mod entity;
pub mod event_loop;
pub mod window;

pub use termion::{color, event::Key};
