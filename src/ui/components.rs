// Reusable UI components
// Paints layout tree elements into an egui Ui

use eframe::egui;

use crate::text::DisplayText;
use crate::ui::elements::{
    Background, ButtonView, Element, FontDesign, FontSpec, IconView, TextView, Tint,
};
use crate::ui::theme::SERIF_FAMILY;

/// Paint any element, returning its response
pub fn element(ui: &mut egui::Ui, element: &Element) -> egui::Response {
    match element {
        Element::Icon(icon) => icon_view(ui, icon),
        Element::Text(text) => text_view(ui, text),
        Element::Button(button) => button_view(ui, button),
    }
}

/// Render a symbol as a tinted glyph
pub fn icon_view(ui: &mut egui::Ui, icon: &IconView) -> egui::Response {
    let color = match icon.tint {
        Tint::Accent => ui.visuals().selection.bg_fill,
        Tint::Primary => ui.visuals().text_color(),
    };
    ui.label(
        egui::RichText::new(icon.glyph.to_string())
            .size(icon.scale.point_size())
            .color(color),
    )
}

/// Render formatted text, padded and on its background if it has one
pub fn text_view(ui: &mut egui::Ui, view: &TextView) -> egui::Response {
    let job = layout_job(ui, &view.text, &view.font);

    let mut frame = egui::Frame::none().inner_margin(egui::Margin::same(view.padding));
    // egui only draws circular corners; continuous corners use the same radius
    if let Some(Background { color, shape }) = view.background {
        frame = frame
            .fill(color)
            .rounding(egui::Rounding::same(shape.corner_radius()));
    }

    frame.show(ui, |ui| ui.label(job)).response
}

/// Render a plain push button
pub fn button_view(ui: &mut egui::Ui, button: &ButtonView) -> egui::Response {
    ui.button(button.label.as_str())
}

/// Build one layout section per styled run
pub fn layout_job(ui: &egui::Ui, text: &DisplayText, font: &FontSpec) -> egui::text::LayoutJob {
    let font_id = egui::FontId::new(font.size, font_family(ui, font.design));
    let visuals = ui.visuals();

    let mut job = egui::text::LayoutJob::default();
    for run in text.runs() {
        let color = if run.style.strong || font.weight.is_heavy() {
            visuals.strong_text_color()
        } else {
            visuals.text_color()
        };
        job.append(
            &run.text,
            0.0,
            egui::TextFormat {
                font_id: font_id.clone(),
                color,
                italics: run.style.italic,
                ..Default::default()
            },
        );
    }
    job
}

/// Map a font design onto a registered egui family
fn font_family(ui: &egui::Ui, design: FontDesign) -> egui::FontFamily {
    match design {
        FontDesign::Default => egui::FontFamily::Proportional,
        FontDesign::Monospaced => egui::FontFamily::Monospace,
        FontDesign::Serif => {
            let serif = egui::FontFamily::Name(SERIF_FAMILY.into());
            if ui.fonts(|f| f.families().contains(&serif)) {
                serif
            } else {
                egui::FontFamily::Proportional
            }
        }
    }
}
