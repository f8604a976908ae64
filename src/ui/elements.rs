// Layout tree
// Plain data describing what a render pass draws, independent of egui state

use eframe::egui;

use crate::text::DisplayText;

/// Root of the layout tree: elements stacked vertically
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    /// Outer padding around the whole stack
    pub padding: f32,
    /// Vertical gap between consecutive elements
    pub spacing: f32,
    /// Elements from top to bottom
    pub elements: Vec<Element>,
}

/// A single visual element of the screen
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Icon(IconView),
    Text(TextView),
    Button(ButtonView),
}

impl Element {
    /// Short name of the element kind
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Icon(_) => "icon",
            Element::Text(_) => "text",
            Element::Button(_) => "button",
        }
    }
}

/// Relative size of a symbol image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageScale {
    Small,
    Medium,
    Large,
}

impl ImageScale {
    /// Glyph size in points
    pub fn point_size(self) -> f32 {
        match self {
            ImageScale::Small => 14.0,
            ImageScale::Medium => 18.0,
            ImageScale::Large => 24.0,
        }
    }
}

/// Foreground color source for an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tint {
    /// The visuals' accent color
    Accent,
    /// The regular text color
    Primary,
}

/// A symbol image drawn as a font glyph
#[derive(Debug, Clone, PartialEq)]
pub struct IconView {
    /// Symbol name, e.g. `globe`
    pub symbol: &'static str,
    /// Glyph drawn for the symbol
    pub glyph: char,
    pub scale: ImageScale,
    pub tint: Tint,
}

impl IconView {
    /// The globe symbol
    pub fn globe() -> Self {
        Self {
            symbol: "globe",
            glyph: '🌐',
            scale: ImageScale::Medium,
            tint: Tint::Primary,
        }
    }

    /// Set the image scale
    pub fn scale(mut self, scale: ImageScale) -> Self {
        self.scale = scale;
        self
    }

    /// Set the foreground tint
    pub fn tint(mut self, tint: Tint) -> Self {
        self.tint = tint;
        self
    }
}

/// Font weight, lightest to heaviest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontWeight {
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    /// Whether the weight renders with the strong text color
    pub fn is_heavy(self) -> bool {
        self >= FontWeight::Semibold
    }
}

/// Typeface design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontDesign {
    Default,
    Serif,
    Monospaced,
}

/// Font selection for a text element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub size: f32,
    pub weight: FontWeight,
    pub design: FontDesign,
}

impl FontSpec {
    /// System font with the given size, weight and design
    pub fn system(size: f32, weight: FontWeight, design: FontDesign) -> Self {
        Self {
            size,
            weight,
            design,
        }
    }
}

/// Corner curve of a rounded rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerStyle {
    Circular,
    Continuous,
}

/// Shape filled behind an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundShape {
    Rectangle,
    RoundedRect { radius: f32, style: CornerStyle },
}

impl BackgroundShape {
    /// Corner radius in points, zero for sharp corners
    pub fn corner_radius(&self) -> f32 {
        match self {
            BackgroundShape::Rectangle => 0.0,
            BackgroundShape::RoundedRect { radius, .. } => *radius,
        }
    }
}

/// Colored shape drawn behind an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background {
    pub color: egui::Color32,
    pub shape: BackgroundShape,
}

/// Formatted text with font, padding and background
#[derive(Debug, Clone, PartialEq)]
pub struct TextView {
    pub text: DisplayText,
    pub font: FontSpec,
    /// Padding between the text and its background edge
    pub padding: f32,
    pub background: Option<Background>,
}

impl TextView {
    /// Unpadded text in the default system font
    pub fn new(text: DisplayText) -> Self {
        Self {
            text,
            font: FontSpec::system(14.0, FontWeight::Regular, FontDesign::Default),
            padding: 0.0,
            background: None,
        }
    }

    /// Set the font
    pub fn font(mut self, font: FontSpec) -> Self {
        self.font = font;
        self
    }

    /// Set the padding on every side
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Fill the given shape behind the padded text
    pub fn background(mut self, color: egui::Color32, shape: BackgroundShape) -> Self {
        self.background = Some(Background { color, shape });
        self
    }
}

/// A push button with a text label
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub label: String,
}

impl ButtonView {
    /// Button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_builder() {
        let icon = IconView::globe().scale(ImageScale::Large).tint(Tint::Accent);
        assert_eq!(icon.symbol, "globe");
        assert_eq!(icon.scale, ImageScale::Large);
        assert_eq!(icon.tint, Tint::Accent);
        assert!(ImageScale::Large.point_size() > ImageScale::Medium.point_size());
    }

    #[test]
    fn test_font_weight_ordering() {
        assert!(!FontWeight::Light.is_heavy());
        assert!(!FontWeight::Medium.is_heavy());
        assert!(FontWeight::Semibold.is_heavy());
        assert!(FontWeight::Bold.is_heavy());
    }

    #[test]
    fn test_text_view_builder() {
        let view = TextView::new(DisplayText::plain("x"))
            .padding(4.0)
            .background(
                egui::Color32::RED,
                BackgroundShape::RoundedRect {
                    radius: 3.0,
                    style: CornerStyle::Circular,
                },
            );
        assert_eq!(view.padding, 4.0);
        let background = view.background.unwrap();
        assert_eq!(background.color, egui::Color32::RED);
        assert_eq!(background.shape.corner_radius(), 3.0);
        assert_eq!(BackgroundShape::Rectangle.corner_radius(), 0.0);
    }
}
