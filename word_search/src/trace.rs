use util::pos::Pos;

/// Receives the individual steps of a gravity collapse.
pub trait GravityTrace {
  /// Called for every empty slot the collapse visits, bottom to top.
  fn empty_slot(&mut self, _pos: Pos) {}

  /// Called when the contents of `from` drop down into `to`.
  fn moved(&mut self, from: Pos, to: Pos);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl GravityTrace for NoTrace {
  fn moved(&mut self, _from: Pos, _to: Pos) {}
}

/// Forwards gravity steps to the `log` facade at trace level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTrace;

impl GravityTrace for LogTrace {
  fn empty_slot(&mut self, pos: Pos) {
    log::trace!("{pos} is empty");
  }

  fn moved(&mut self, from: Pos, to: Pos) {
    log::trace!("move {from} -> {to}");
  }
}
