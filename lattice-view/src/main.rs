//! Application entry point for the hex drift effect.
//!
//! This binary sets up eframe/egui and delegates all per-frame simulation
//! and rendering to [`Viewer`] from the `viewer` module.

mod viewer;

use viewer::{LayoutKind, Viewer};

/// Starts the native eframe application.
///
/// Renders the sparse hexagon variant by default; passing `square` as the
/// first argument selects the legacy dense-grid variant.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let layout = match std::env::args().nth(1).as_deref() {
        Some("square") => LayoutKind::square(),
        _ => LayoutKind::hex(),
    };

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Hex Drift",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(layout)))),
    )
}
