use glam::Vec2;

/// Last known pointer state, written by input events and read once per
/// simulation step.
///
/// `last_move` is the timestamp (seconds, same clock as the `now` passed to
/// the phase functions) of the most recent movement event. It is what lets
/// the repel policy distinguish a pointer that is merely present from one
/// that is actively moving.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
    pub over: bool,
    pub last_move: f64,
}

impl PointerState {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            over: false,
            last_move: f64::NEG_INFINITY,
        }
    }

    /// Records a movement event at `now`; the pointer is necessarily over
    /// the surface when one arrives.
    pub fn move_to(&mut self, pos: Vec2, now: f64) {
        self.pos = pos;
        self.over = true;
        self.last_move = now;
    }

    /// Records that the pointer entered the surface without moving yet.
    pub fn enter(&mut self) {
        self.over = true;
    }

    /// Records that the pointer left the surface.
    pub fn leave(&mut self) {
        self.over = false;
    }

    /// `true` while the pointer is over the surface and has moved within
    /// the last `window` seconds.
    pub fn is_moving(&self, now: f64, window: f64) -> bool {
        self.over && now - self.last_move <= window
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}
