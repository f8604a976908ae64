// Main screen
// An icon, the title card and a placeholder button, stacked vertically

use eframe::egui;

use crate::text::DisplayText;
use crate::ui::components;
use crate::ui::elements::{
    BackgroundShape, ButtonView, CornerStyle, Element, FontDesign, FontSpec, FontWeight,
    IconView, ImageScale, Screen, TextView, Tint,
};
use crate::ui::theme::{DEFAULT_PADDING, DEFAULT_SPACING, SYSTEM_YELLOW};

/// Markup shown on the title card
pub const TITLE_MARKUP: &str = "_Hamlet_ by William Shakespeare";

/// Label of the placeholder button
pub const BUTTON_LABEL: &str = "Button";

/// The application's only screen
///
/// Stateless across renders: the title is formatted once at construction
/// and every render pass builds the same layout tree from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentView {
    title: DisplayText,
}

impl ContentView {
    /// Create the screen with the built-in title
    pub fn new() -> Self {
        Self::with_markup(TITLE_MARKUP)
    }

    /// Create the screen with a custom title markup
    ///
    /// Markup that fails to parse is shown verbatim.
    pub fn with_markup(markup: &str) -> Self {
        Self {
            title: DisplayText::from_markup_or_plain(markup),
        }
    }

    /// Formatted title shown on the card
    pub fn title(&self) -> &DisplayText {
        &self.title
    }

    /// Build the layout tree for one render pass
    pub fn body(&self) -> Screen {
        Screen {
            padding: DEFAULT_PADDING,
            spacing: DEFAULT_SPACING,
            elements: vec![
                Element::Icon(
                    IconView::globe()
                        .scale(ImageScale::Large)
                        .tint(Tint::Accent),
                ),
                Element::Text(
                    TextView::new(self.title.clone())
                        .font(FontSpec::system(18.0, FontWeight::Light, FontDesign::Serif))
                        .padding(DEFAULT_PADDING)
                        .background(
                            SYSTEM_YELLOW,
                            BackgroundShape::RoundedRect {
                                radius: 8.0,
                                style: CornerStyle::Continuous,
                            },
                        ),
                ),
                Element::Button(ButtonView::new(BUTTON_LABEL)),
            ],
        }
    }

    /// Button action; intentionally does nothing
    pub fn on_button_pressed(&self) {
        tracing::debug!(label = BUTTON_LABEL, "Button pressed");
    }

    /// Paint the screen's elements into the given Ui
    ///
    /// Returns one response per element, in the order of `body().elements`.
    pub fn show(&self, ui: &mut egui::Ui) -> Vec<egui::Response> {
        let screen = self.body();
        ui.spacing_mut().item_spacing.y = screen.spacing;

        screen
            .elements
            .iter()
            .map(|element| {
                let response = components::element(ui, element);
                if matches!(element, Element::Button(_)) && response.clicked() {
                    self.on_button_pressed();
                }
                response
            })
            .collect()
    }
}

impl Default for ContentView {
    fn default() -> Self {
        Self::new()
    }
}
