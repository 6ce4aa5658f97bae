/// Identifier for a point in a [`crate::lattice::Lattice`].
///
/// This is an index into `Lattice::points`, and is only meaningful within
/// the lifetime of a given `Lattice` instance; rebuilding the lattice
/// invalidates every previously obtained id.
pub type PointId = usize;

/// Pixel size of the drawing surface the lattice covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceDimensions {
    pub width: u32,
    pub height: u32,
}

impl SurfaceDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A surface with a zero extent holds no lattice.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
