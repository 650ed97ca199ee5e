//! SlowCalc - A calculator for the Slow Computer

use eframe::NativeOptions;
use slowcalc::app::SlowCalcApp;
use slowcalc::config::CalcConfig;

fn main() -> eframe::Result<()> {
    slowcore::logging::init("slowcalc");

    let config = CalcConfig::load();
    tracing::info!(?config, "starting calculator");

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.window_width, config.window_height])
        .with_min_inner_size([200.0, 260.0])
        .with_title("calculator");
    if let Some(pos) = slowcore::cascade_position() {
        viewport = viewport.with_position(pos);
    }
    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(move |cc| {
            slowcore::SlowTheme::default().apply(&cc.egui_ctx);
            Box::new(SlowCalcApp::new(cc, config))
        }),
    )
}
