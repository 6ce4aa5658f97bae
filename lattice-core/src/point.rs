use glam::Vec2;

/// A single simulated lattice point.
///
/// `base` is the rest position assigned at generation time and never changes
/// afterwards; new rest positions only come from rebuilding the whole
/// lattice. `pos` and `vel` are the dynamic state advanced once per frame by
/// the phase functions in [`crate::phases`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub pos: Vec2,
    pub base: Vec2,
    pub vel: Vec2,
}

impl Point {
    /// Creates a point resting at `base` with zero velocity.
    pub fn at_rest(base: Vec2) -> Self {
        Self {
            pos: base,
            base,
            vel: Vec2::ZERO,
        }
    }

    /// Offset of the current position from the rest position.
    pub fn displacement(&self) -> Vec2 {
        self.pos - self.base
    }
}
