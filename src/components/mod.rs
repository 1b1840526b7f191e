//! Page components.

pub mod backdrop;
pub mod cursor;
pub mod magnetic;
pub mod navbar;
pub mod reveal;
pub mod scroll;
pub mod showcase;
pub mod theme;
