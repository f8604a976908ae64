// UI module
// Contains layout, the screen, its element tree and the components that paint it

pub mod components;
pub mod content_view;
pub mod elements;
pub mod layout;
pub mod theme;

pub use content_view::ContentView;
pub use layout::render_app_layout;
pub use theme::install_fonts;
