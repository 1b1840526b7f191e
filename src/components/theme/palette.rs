//! Colors used by the particle backdrop.
//!
//! Each theme mode has four dot shades and one link stroke color. The
//! backdrop picks its palette once, when the particle field is created.

use super::preference::ThemeMode;

/// Opaque RGB color. Transparency is applied separately when drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	/// Color from its red, green and blue channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// `#rrggbb` form for canvas fill and stroke styles.
	pub fn to_css(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Dot shades and link color for one theme mode.
#[derive(Clone, Debug, PartialEq)]
pub struct BackdropPalette {
	/// Dot shades, picked uniformly per particle.
	pub dots: [Color; 4],
	/// Stroke color of the connection lines.
	pub link: Color,
}

impl BackdropPalette {
	/// Pastel to vibrant purples on a light page.
	pub fn light() -> Self {
		Self {
			dots: [
				Color::rgb(0xd8, 0xb4, 0xfe),
				Color::rgb(0xc0, 0x84, 0xfc),
				Color::rgb(0xa8, 0x55, 0xf7),
				Color::rgb(0x7e, 0x22, 0xce),
			],
			link: Color::rgb(0x3b, 0x82, 0xf6),
		}
	}

	/// Rich, deep purples on a dark page.
	pub fn dark() -> Self {
		Self {
			dots: [
				Color::rgb(0x6d, 0x28, 0xd9),
				Color::rgb(0x5b, 0x21, 0xb6),
				Color::rgb(0x4c, 0x1d, 0x95),
				Color::rgb(0x3b, 0x07, 0x64),
			],
			link: Color::rgb(0x60, 0xa5, 0xfa),
		}
	}

	/// Palette for the given theme mode.
	pub fn for_mode(mode: ThemeMode) -> Self {
		match mode {
			ThemeMode::Light => Self::light(),
			ThemeMode::Dark => Self::dark(),
		}
	}

	/// Dot shade `index`, wrapping around.
	pub fn dot(&self, index: usize) -> Color {
		self.dots[index % self.dots.len()]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_output_is_lowercase_hex() {
		assert_eq!(Color::rgb(0x60, 0xa5, 0xfa).to_css(), "#60a5fa");
		assert_eq!(Color::rgb(0, 7, 255).to_css(), "#0007ff");
	}

	#[test]
	fn palettes_match_their_mode() {
		let light = BackdropPalette::for_mode(ThemeMode::Light);
		let dark = BackdropPalette::for_mode(ThemeMode::Dark);
		assert_eq!(light.dots[0].to_css(), "#d8b4fe");
		assert_eq!(light.link.to_css(), "#3b82f6");
		assert_eq!(dark.dots[3].to_css(), "#3b0764");
		assert_eq!(dark.link.to_css(), "#60a5fa");
		assert_eq!(light.dot(5), light.dots[1]);
	}
}
