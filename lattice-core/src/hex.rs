use glam::Vec2;

/// Geometry of the sparse hexagonal lattice.
///
/// Hexagons are flat-topped with the given circumradius and a `spacing`
/// pixel gap between neighbours. Odd columns sit half a row lower than even
/// columns, the brick-laying offset that makes adjacent columns interlock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexLayout {
    pub circumradius: f32,
    pub spacing: f32,
    /// Independent inclusion probability per candidate cell.
    pub fill_probability: f64,
}

impl HexLayout {
    pub fn new(circumradius: f32, spacing: f32, fill_probability: f64) -> Self {
        Self {
            circumradius,
            spacing,
            fill_probability,
        }
    }

    /// Width of one hexagon, corner to corner.
    pub fn hex_width(&self) -> f32 {
        2.0 * self.circumradius
    }

    /// Height of one hexagon, edge to edge.
    pub fn hex_height(&self) -> f32 {
        self.circumradius * 3.0_f32.sqrt()
    }

    /// Horizontal distance between adjacent column origins. The 0.75 factor
    /// overlaps columns so the flat-topped hexagons tile instead of
    /// stacking edge to edge.
    pub fn horizontal_step(&self) -> f32 {
        (self.hex_width() + self.spacing) * 0.75
    }

    /// Vertical distance between adjacent row origins within one column.
    pub fn vertical_step(&self) -> f32 {
        self.hex_height() + self.spacing
    }

    /// Rest position of the candidate cell at `(col, row)`.
    pub fn cell_center(&self, col: usize, row: usize) -> Vec2 {
        let x = col as f32 * self.horizontal_step();
        let mut y = row as f32 * self.vertical_step();
        if col % 2 == 1 {
            y += self.vertical_step() * 0.5;
        }
        Vec2::new(x, y)
    }

    /// The six outline vertices of a flat-topped hexagon centred at
    /// `center`, in winding order.
    pub fn vertices(&self, center: Vec2) -> [Vec2; 6] {
        use std::f32::consts::FRAC_PI_3;
        let mut out = [Vec2::ZERO; 6];
        for (i, v) in out.iter_mut().enumerate() {
            let angle = FRAC_PI_3 * i as f32;
            *v = center + self.circumradius * Vec2::new(angle.cos(), angle.sin());
        }
        out
    }
}

impl Default for HexLayout {
    fn default() -> Self {
        Self::new(40.0, 10.0, 0.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_steps_match_the_layout_constants() {
        let hex = HexLayout::new(40.0, 10.0, 0.3);
        assert_eq!(hex.hex_width(), 80.0);
        assert!((hex.hex_height() - 40.0 * 3.0_f32.sqrt()).abs() < 1e-4);
        assert_eq!(hex.horizontal_step(), (80.0 + 10.0) * 0.75);
        assert_eq!(hex.vertical_step(), hex.hex_height() + 10.0);
    }

    #[test]
    fn adjacent_columns_interlock_by_half_a_row() {
        let hex = HexLayout::default();
        let half = hex.vertical_step() * 0.5;
        for col in 0..6 {
            for row in 0..4 {
                let a = hex.cell_center(col, row);
                let b = hex.cell_center(col + 1, row);
                assert!(
                    ((b.y - a.y).abs() - half).abs() < 1e-3,
                    "columns {col} and {} are offset by {}, want {half}",
                    col + 1,
                    (b.y - a.y).abs()
                );
            }
        }
    }

    #[test]
    fn even_columns_share_row_origins() {
        let hex = HexLayout::default();
        assert_eq!(hex.cell_center(0, 2).y, hex.cell_center(2, 2).y);
        assert_eq!(hex.cell_center(1, 2).y, hex.cell_center(3, 2).y);
    }

    #[test]
    fn vertices_lie_on_the_circumcircle() {
        let hex = HexLayout::default();
        let center = Vec2::new(12.0, -3.0);
        for v in hex.vertices(center) {
            assert!(((v - center).length() - hex.circumradius).abs() < 1e-3);
        }
    }

    #[test]
    fn vertices_span_the_full_hex_width() {
        let hex = HexLayout::default();
        let verts = hex.vertices(Vec2::ZERO);
        let min_x = verts.iter().map(|v| v.x).fold(f32::MAX, f32::min);
        let max_x = verts.iter().map(|v| v.x).fold(f32::MIN, f32::max);
        assert!((max_x - min_x - hex.hex_width()).abs() < 1e-3);
    }
}
