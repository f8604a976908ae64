// Visual tokens and font setup
// Colors and sizes shared by the screen, plus the extra font families it uses

use eframe::egui;

/// Name of the serif font family registered by `install_fonts`
pub const SERIF_FAMILY: &str = "serif";

/// Platform-style yellow used behind the title card
pub const SYSTEM_YELLOW: egui::Color32 = egui::Color32::from_rgb(255, 204, 0);

/// Default padding applied around padded elements
pub const DEFAULT_PADDING: f32 = 16.0;

/// Default spacing between stacked elements
pub const DEFAULT_SPACING: f32 = 8.0;

/// Register the font families the screen refers to by name
///
/// No serif face is bundled, so `serif` aliases the proportional stack.
/// Takes effect at the start of the next frame.
pub fn install_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    let proportional = fonts
        .families
        .get(&egui::FontFamily::Proportional)
        .cloned()
        .unwrap_or_default();
    fonts
        .families
        .entry(egui::FontFamily::Name(SERIF_FAMILY.into()))
        .or_insert(proportional);
    ctx.set_fonts(fonts);
}
