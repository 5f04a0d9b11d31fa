#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod board;
pub mod cell;
pub mod finder;
pub mod path;
pub mod trace;
