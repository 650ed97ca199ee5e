//! slowcore — shared library for slow computer applications

pub mod dither;
pub mod logging;
pub mod safety;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use theme::SlowTheme;

/// Window position offset for staggered instances.
///
/// Reads `SLOWOS_CASCADE` (the instance index set by the desktop launcher);
/// each step moves the window 30px down and right from (100, 100).
pub fn cascade_position() -> Option<egui::Pos2> {
    std::env::var("SLOWOS_CASCADE")
        .ok()
        .and_then(|s| cascade_offset(&s))
}

fn cascade_offset(value: &str) -> Option<egui::Pos2> {
    let n = value.trim().parse::<u32>().ok()?;
    let offset = n as f32 * 30.0;
    Some(egui::Pos2::new(100.0 + offset, 100.0 + offset))
}
