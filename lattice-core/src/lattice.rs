use glam::Vec2;
use rand::Rng;

use crate::{
    hex::HexLayout,
    point::Point,
    types::{PointId, SurfaceDimensions},
};

/// The full ordered set of simulated points covering the surface.
///
/// `cols` and `rows` record the candidate grid the generator scanned, in
/// point columns and rows. For the square layout every candidate exists, so
/// `cols` doubles as the row-major stride: the point at grid cell
/// `(col, row)` is `points[row * cols + col]`, and rendering reconstructs
/// horizontal and vertical polylines from that law alone. The sparse hex
/// layout keeps only the candidates that survived their inclusion draw;
/// every hexagon is drawn independently, so no index law applies there.
///
/// A lattice is rebuilt from scratch whenever the surface dimensions
/// change; points are never carried over between rebuilds.
#[derive(Debug)]
pub struct Lattice {
    pub points: Vec<Point>,
    cols: usize,
    rows: usize,
}

impl Lattice {
    /// Dense square grid with `cell` pixels between neighbouring points,
    /// covering the surface edge to edge.
    ///
    /// Degenerate dimensions yield an empty lattice.
    pub fn square(dims: SurfaceDimensions, cell: f32) -> Self {
        if dims.is_degenerate() {
            return Self::empty();
        }
        let cols = (dims.width as f32 / cell).ceil() as usize + 1;
        let rows = (dims.height as f32 / cell).ceil() as usize + 1;

        let mut points = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                let base = Vec2::new(col as f32 * cell, row as f32 * cell);
                points.push(Point::at_rest(base));
            }
        }
        Self { points, cols, rows }
    }

    /// Sparse hexagonal grid. Each candidate cell is kept with independent
    /// probability `layout.fill_probability`, drawn fresh on every rebuild,
    /// so two rebuilds of the same surface generally differ.
    pub fn hex(dims: SurfaceDimensions, layout: &HexLayout, rng: &mut impl Rng) -> Self {
        if dims.is_degenerate() {
            return Self::empty();
        }
        let cols = (dims.width as f32 / layout.horizontal_step()).ceil() as usize + 1;
        let rows = (dims.height as f32 / layout.vertical_step()).ceil() as usize + 1;

        let mut points = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                if rng.random_bool(layout.fill_probability) {
                    points.push(Point::at_rest(layout.cell_center(col, row)));
                }
            }
        }
        Self { points, cols, rows }
    }

    fn empty() -> Self {
        Self {
            points: Vec::new(),
            cols: 0,
            rows: 0,
        }
    }

    /// Number of point columns the generator scanned.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of point rows the generator scanned.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Row-major index law for the square layout: grid cell `(col, row)`
    /// maps to `points[row * cols + col]`.
    pub fn index_of(&self, col: usize, row: usize) -> PointId {
        row * self.cols + col
    }
}
