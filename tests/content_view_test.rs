//! Tests for the content screen through the public API

use reddot_mobile::error::MarkupError;
use reddot_mobile::text::DisplayText;
use reddot_mobile::ui::elements::Element;
use reddot_mobile::ui::{install_fonts, render_app_layout, ContentView};

#[test]
fn test_screen_layout() {
    // The screen is exactly icon, title, button from top to bottom
    let screen = ContentView::new().body();

    assert_eq!(screen.elements.len(), 3);
    assert!(matches!(screen.elements[0], Element::Icon(_)));
    assert!(matches!(screen.elements[1], Element::Text(_)));
    assert!(matches!(screen.elements[2], Element::Button(_)));
}

#[test]
fn test_title_emphasis() {
    let view = ContentView::new();
    let runs = view.title().runs();

    assert_eq!(view.title().plain_text(), "Hamlet by William Shakespeare");
    assert_eq!(runs[0].text, "Hamlet");
    assert!(runs[0].style.italic);
    assert!(runs[1].style.is_plain());
}

#[test]
fn test_parse_error_is_reported() {
    let err = DisplayText::parse("_Hamlet").unwrap_err();

    assert_eq!(
        err,
        MarkupError::Unclosed {
            delimiter: "_",
            offset: 0,
        }
    );
    assert_eq!(err.to_string(), "Unclosed delimiter `_` at byte 0");
}

#[test]
fn test_frames_render_identically() {
    // Two frames on one context with no input produce the same shapes
    let view = ContentView::new();
    let ctx = egui::Context::default();
    install_fonts(&ctx);

    let first = ctx.run(egui::RawInput::default(), |ctx| render_app_layout(ctx, &view));
    let second = ctx.run(egui::RawInput::default(), |ctx| render_app_layout(ctx, &view));

    assert_eq!(format!("{:?}", first.shapes), format!("{:?}", second.shapes));
}
