// Main application layout
// Places the screen in the central panel with its outer padding

use eframe::egui;

use crate::ui::content_view::ContentView;
use crate::ui::theme::DEFAULT_PADDING;

/// Render the whole window for one frame
pub fn render_app_layout(ctx: &egui::Context, view: &ContentView) {
    let frame = egui::Frame::central_panel(&ctx.style()).inner_margin(DEFAULT_PADDING);

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            view.show(ui);
        });
    });
}
