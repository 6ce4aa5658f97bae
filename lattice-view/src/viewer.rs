//! Pointer-reactive lattice viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation context
//! (lattice, pointer state, force configuration) and implements
//! [`eframe::App`] to advance and draw the effect every frame.
//!
//! The per-frame update is:
//! 1. Rebuild the lattice if the drawable area changed since last frame.
//! 2. Feed this frame's hover position into the pointer state.
//! 3. Advance every point by one step via [`phases::step`].
//! 4. Paint every point at its *current* (not rest) position.
//! 5. Request a repaint, so the effect redraws at the display cadence.

use eframe::App;
use glam::Vec2;
use lattice_core::{
    config::SimConfig, hex::HexLayout, lattice::Lattice, phases, pointer::PointerState,
    types::SurfaceDimensions,
};

/// Which lattice generator the viewer rebuilds with. Each layout carries
/// the force configuration of the effect variant it belongs to.
#[derive(Clone, Copy, Debug)]
pub enum LayoutKind {
    /// Legacy dense grid drawn as connected row/column polylines.
    Square { cell: f32 },
    /// Sparse interlocking hexagons drawn as glowing outlines.
    Hex(HexLayout),
}

impl LayoutKind {
    pub fn square() -> Self {
        Self::Square { cell: 20.0 }
    }

    pub fn hex() -> Self {
        Self::Hex(HexLayout::default())
    }

    fn config(&self) -> SimConfig {
        match self {
            Self::Square { .. } => SimConfig::attract_grid(),
            Self::Hex(_) => SimConfig::repel_hex(),
        }
    }
}

/// Main application state for the effect.
///
/// [`Viewer`] glues together:
/// - The simulation core: [`Lattice`], [`PointerState`], [`SimConfig`].
/// - The chosen [`LayoutKind`] and the last surface size it was built for.
/// - eframe/egui callbacks for input and drawing.
pub struct Viewer {
    lattice: Lattice,
    pointer: PointerState,
    cfg: SimConfig,
    layout: LayoutKind,
    surface: SurfaceDimensions,

    rng: rand::rngs::ThreadRng,
}

impl Viewer {
    /// Creates a viewer with an empty lattice; the first frame's surface
    /// size triggers the initial build.
    pub fn new(layout: LayoutKind) -> Self {
        let surface = SurfaceDimensions::new(0, 0);
        let mut rng = rand::rng();
        let lattice = Self::build(layout, surface, &mut rng);

        Self {
            lattice,
            pointer: PointerState::new(),
            cfg: layout.config(),
            layout,
            surface,
            rng,
        }
    }

    fn build(
        layout: LayoutKind,
        dims: SurfaceDimensions,
        rng: &mut rand::rngs::ThreadRng,
    ) -> Lattice {
        match layout {
            LayoutKind::Square { cell } => Lattice::square(dims, cell),
            LayoutKind::Hex(hex) => Lattice::hex(dims, &hex, rng),
        }
    }

    /// Rebuilds the lattice in full whenever the drawable area changes.
    /// Old points are discarded wholesale; a frame sees either the old or
    /// the new lattice, never a mix.
    fn sync_surface(&mut self, dims: SurfaceDimensions) {
        if dims == self.surface {
            return;
        }
        self.surface = dims;
        self.lattice = Self::build(self.layout, dims, &mut self.rng);
        log::debug!(
            "rebuilt lattice for {}x{}: {} points",
            dims.width,
            dims.height,
            self.lattice.len()
        );
    }

    /// Feeds this frame's hover position into the pointer state.
    ///
    /// A changed position counts as a movement event and stamps `now`; an
    /// unchanged position while absent is an enter, and `None` is a leave.
    fn sync_pointer(&mut self, hover: Option<Vec2>, now: f64) {
        match hover {
            Some(pos) if pos != self.pointer.pos => self.pointer.move_to(pos, now),
            Some(_) => self.pointer.enter(),
            None => self.pointer.leave(),
        }
    }

    fn to_screen(rect: egui::Rect, p: Vec2) -> egui::Pos2 {
        egui::pos2(rect.left() + p.x, rect.top() + p.y)
    }

    /// Draws every hexagon as a wide translucent glow stroke with a thin
    /// bright outline on top.
    fn draw_hexes(&self, painter: &egui::Painter, rect: egui::Rect, hex: &HexLayout) {
        let glow = egui::Stroke::new(5.0, egui::Color32::from_rgba_unmultiplied(64, 220, 255, 48));
        let line = egui::Stroke::new(1.2, egui::Color32::from_rgb(235, 245, 255));

        for p in &self.lattice.points {
            let corners: Vec<egui::Pos2> = hex
                .vertices(p.pos)
                .iter()
                .map(|&v| Self::to_screen(rect, v))
                .collect();
            painter.add(egui::Shape::closed_line(corners.clone(), glow));
            painter.add(egui::Shape::closed_line(corners, line));
        }
    }

    /// Reconstructs the square grid's horizontal and vertical polylines
    /// from the row-major index law and strokes them.
    fn draw_grid(&self, painter: &egui::Painter, rect: egui::Rect) {
        let stroke = egui::Stroke::new(1.0, egui::Color32::from_black_alpha(26));
        let cols = self.lattice.cols();
        let rows = self.lattice.rows();

        for row in 0..rows {
            let pts: Vec<egui::Pos2> = (0..cols)
                .map(|col| {
                    Self::to_screen(rect, self.lattice.points[self.lattice.index_of(col, row)].pos)
                })
                .collect();
            painter.add(egui::Shape::line(pts, stroke));
        }
        for col in 0..cols {
            let pts: Vec<egui::Pos2> = (0..rows)
                .map(|row| {
                    Self::to_screen(rect, self.lattice.points[self.lattice.index_of(col, row)].pos)
                })
                .collect();
            painter.add(egui::Shape::line(pts, stroke));
        }
    }

    fn background(&self) -> egui::Color32 {
        match self.layout {
            LayoutKind::Square { .. } => egui::Color32::WHITE,
            LayoutKind::Hex(_) => egui::Color32::from_rgb(10, 12, 24),
        }
    }
}

impl App for Viewer {
    /// eframe callback: one simulation step and one full redraw per frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.background()))
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let painter = ui.painter_at(rect);
                let now = ctx.input(|i| i.time);

                self.sync_surface(SurfaceDimensions::new(
                    rect.width().max(0.0).round() as u32,
                    rect.height().max(0.0).round() as u32,
                ));

                let hover = response
                    .hover_pos()
                    .map(|p| Vec2::new(p.x - rect.left(), p.y - rect.top()));
                self.sync_pointer(hover, now);

                phases::step(&mut self.lattice, &self.pointer, &self.cfg, now);

                match self.layout {
                    LayoutKind::Square { .. } => self.draw_grid(&painter, rect),
                    LayoutKind::Hex(hex) => self.draw_hexes(&painter, rect, &hex),
                }
            });

        // Continuous redraw; the effect never idles.
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(w: u32, h: u32) -> SurfaceDimensions {
        SurfaceDimensions::new(w, h)
    }

    #[test]
    fn viewer_starts_with_an_empty_lattice() {
        let viewer = Viewer::new(LayoutKind::hex());
        assert!(viewer.lattice.is_empty());
    }

    #[test]
    fn sync_surface_builds_on_first_real_size() {
        let mut viewer = Viewer::new(LayoutKind::square());
        viewer.sync_surface(dims(400, 400));
        assert_eq!(viewer.lattice.len(), 441);
    }

    #[test]
    fn sync_surface_keeps_the_lattice_when_size_is_unchanged() {
        let mut viewer = Viewer::new(LayoutKind::square());
        viewer.sync_surface(dims(400, 400));

        // Disturb a point; an unnecessary rebuild would snap it to rest.
        viewer.lattice.points[0].pos += Vec2::new(5.0, 5.0);
        viewer.sync_surface(dims(400, 400));
        assert_ne!(viewer.lattice.points[0].pos, viewer.lattice.points[0].base);
    }

    #[test]
    fn sync_surface_rebuilds_from_scratch_on_resize() {
        let mut viewer = Viewer::new(LayoutKind::square());
        viewer.sync_surface(dims(400, 400));
        viewer.lattice.points[0].pos += Vec2::new(5.0, 5.0);

        viewer.sync_surface(dims(200, 400));
        assert_eq!(viewer.lattice.len(), 11 * 21);
        for p in &viewer.lattice.points {
            assert_eq!(p.pos, p.base);
            assert_eq!(p.vel, Vec2::ZERO);
        }
    }

    #[test]
    fn sync_surface_handles_collapse_to_zero() {
        let mut viewer = Viewer::new(LayoutKind::hex());
        viewer.sync_surface(dims(800, 600));
        viewer.sync_surface(dims(0, 0));
        assert!(viewer.lattice.is_empty());
    }

    #[test]
    fn sync_pointer_tracks_move_enter_and_leave() {
        let mut viewer = Viewer::new(LayoutKind::hex());

        viewer.sync_pointer(Some(Vec2::new(10.0, 20.0)), 1.0);
        assert!(viewer.pointer.over);
        assert_eq!(viewer.pointer.last_move, 1.0);

        // Hovering in place is presence, not motion.
        viewer.sync_pointer(Some(Vec2::new(10.0, 20.0)), 2.0);
        assert_eq!(viewer.pointer.last_move, 1.0);

        viewer.sync_pointer(None, 3.0);
        assert!(!viewer.pointer.over);

        // Re-entering at the old position does not fake a movement event.
        viewer.sync_pointer(Some(Vec2::new(10.0, 20.0)), 4.0);
        assert!(viewer.pointer.over);
        assert_eq!(viewer.pointer.last_move, 1.0);

        viewer.sync_pointer(Some(Vec2::new(11.0, 20.0)), 5.0);
        assert_eq!(viewer.pointer.last_move, 5.0);
    }

    #[test]
    fn each_layout_uses_its_variant_config() {
        let hex = Viewer::new(LayoutKind::hex());
        assert_eq!(hex.cfg, SimConfig::repel_hex());

        let square = Viewer::new(LayoutKind::square());
        assert_eq!(square.cfg, SimConfig::attract_grid());
    }
}
