//! Light/dark theming: palettes, the persisted preference and the toggle.

mod palette;
pub mod preference;
mod toggle;

pub use palette::{BackdropPalette, Color};
pub use preference::ThemeMode;
pub use toggle::ThemeToggle;
