//! Light/dark mode and its persisted preference.
//!
//! The only state the site keeps across page loads is the `theme` key in
//! `localStorage`. The active mode is mirrored as the `dark` class on the
//! document element, which is what the particle backdrop reads at mount.

use std::fmt;
use std::str::FromStr;

use log::debug;

/// `localStorage` key holding the preferred mode.
pub const STORAGE_KEY: &str = "theme";

/// Class toggled on `<html>` while the dark mode is active.
pub const DARK_CLASS: &str = "dark";

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Site color mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
	/// Light page, dark particles.
	#[default]
	Light,
	/// Dark page, `dark` class on `<html>`.
	Dark,
}

impl ThemeMode {
	/// Value stored under [`STORAGE_KEY`].
	pub fn as_str(self) -> &'static str {
		match self {
			ThemeMode::Light => "light",
			ThemeMode::Dark => "dark",
		}
	}

	/// The other mode.
	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Light => ThemeMode::Dark,
			ThemeMode::Dark => ThemeMode::Light,
		}
	}

	/// Whether this is [`ThemeMode::Dark`].
	pub fn is_dark(self) -> bool {
		self == ThemeMode::Dark
	}
}

impl fmt::Display for ThemeMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error for a stored value that is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemeMode(pub String);

impl fmt::Display for UnknownThemeMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unknown theme mode: {:?}", self.0)
	}
}

impl std::error::Error for UnknownThemeMode {}

impl FromStr for ThemeMode {
	type Err = UnknownThemeMode;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"light" => Ok(ThemeMode::Light),
			"dark" => Ok(ThemeMode::Dark),
			other => Err(UnknownThemeMode(other.to_string())),
		}
	}
}

/// Outcome of reconciling the stored preference with the system one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolved {
	/// Mode to apply.
	pub mode: ThemeMode,
	/// The mode came from the system and should be written back.
	pub persist: bool,
}

/// A valid stored value wins. Otherwise the system preference is adopted
/// and marked for persisting.
pub fn resolve_preference(stored: Option<&str>, system_dark: bool) -> Resolved {
	match stored.map(ThemeMode::from_str) {
		Some(Ok(mode)) => Resolved {
			mode,
			persist: false,
		},
		_ => Resolved {
			mode: if system_dark {
				ThemeMode::Dark
			} else {
				ThemeMode::Light
			},
			persist: true,
		},
	}
}

fn local_storage() -> Option<web_sys::Storage> {
	web_sys::window()?.local_storage().ok().flatten()
}

/// Raw stored preference, if any.
pub fn load_stored() -> Option<String> {
	local_storage()?.get_item(STORAGE_KEY).ok().flatten()
}

/// Persist `mode`. Storage failures are logged and ignored.
pub fn store(mode: ThemeMode) {
	if let Some(storage) = local_storage() {
		if storage.set_item(STORAGE_KEY, mode.as_str()).is_err() {
			debug!("yali: could not persist theme preference");
		}
	}
}

/// Whether the system asks for a dark color scheme.
pub fn system_prefers_dark() -> bool {
	web_sys::window()
		.and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
		.map(|mq| mq.matches())
		.unwrap_or(false)
}

/// Mode currently applied to the document (`dark` class on `<html>`).
pub fn document_mode() -> ThemeMode {
	let is_dark = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
		.map(|el| el.class_list().contains(DARK_CLASS))
		.unwrap_or(false);
	if is_dark {
		ThemeMode::Dark
	} else {
		ThemeMode::Light
	}
}

/// Adds or removes the `dark` class on `<html>`.
pub fn apply_to_document(mode: ThemeMode) {
	let Some(root) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
	else {
		return;
	};
	let classes = root.class_list();
	let _ = if mode.is_dark() {
		classes.add_1(DARK_CLASS)
	} else {
		classes.remove_1(DARK_CLASS)
	};
}
