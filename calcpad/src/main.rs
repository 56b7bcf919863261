//! CalcPad - a pocket calculator for the desktop
//!
//! All calculator behavior lives in calccore; this binary is the keypad
//! and the display.

mod app;

use app::CalcPadApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([260.0, 330.0])
            .with_resizable(false)
            .with_title("calcpad"),
        ..Default::default()
    };

    eframe::run_native(
        "calcpad",
        options,
        Box::new(|cc| {
            calccore::CalcTheme::default().apply(&cc.egui_ctx);
            Box::new(CalcPadApp::new(cc))
        }),
    )
}
