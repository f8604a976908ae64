// Formatted text module
// Parses lightweight inline markup into styled runs for display

pub mod markup;

use crate::error::MarkupError;

/// Style applied to a single run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RunStyle {
    /// Emphasis, written `_x_` or `*x*`
    pub italic: bool,
    /// Strong emphasis, written `__x__` or `**x**`
    pub strong: bool,
}

impl RunStyle {
    /// Unstyled text
    pub const PLAIN: RunStyle = RunStyle {
        italic: false,
        strong: false,
    };

    /// Emphasized text
    pub const ITALIC: RunStyle = RunStyle {
        italic: true,
        strong: false,
    };

    /// Whether this style carries no formatting
    pub fn is_plain(&self) -> bool {
        *self == Self::PLAIN
    }
}

/// A contiguous piece of text sharing one style
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextRun {
    /// Text content of the run, never empty
    pub text: String,
    /// Style of the run
    pub style: RunStyle,
}

impl TextRun {
    /// Create a run from text and style
    pub fn new(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Immutable formatted text made of styled runs
///
/// Adjacent runs always differ in style and no run is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DisplayText {
    runs: Vec<TextRun>,
}

impl DisplayText {
    /// Parse inline markup into formatted text
    pub fn parse(markup: &str) -> Result<Self, MarkupError> {
        markup::parse_runs(markup).map(|runs| Self { runs })
    }

    /// Formatted text consisting of a single unstyled run
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self {
            runs: vec![TextRun::new(text, RunStyle::PLAIN)],
        }
    }

    /// Parse inline markup, showing the source verbatim if it does not parse
    pub fn from_markup_or_plain(markup: &str) -> Self {
        match Self::parse(markup) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, markup, "Falling back to unformatted text");
                Self::plain(markup)
            }
        }
    }

    /// Styled runs in display order
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Text content with all formatting removed
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Whether there is no text at all
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}
