//! yali-site: interactive pieces of the Yali landing page.
//!
//! This crate provides the WASM client for the site: an animated particle
//! backdrop behind the hero section, a custom cursor, magnetic
//! call-to-action buttons, a persisted light/dark theme toggle, a navbar
//! with a mobile menu, sections that reveal on scroll, a rotating product
//! showcase and a back-to-top button.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::backdrop::{AnimatedBackground, BackdropConfig};
pub use components::cursor::CustomCursor;
pub use components::magnetic::CtaButton;
pub use components::navbar::{NavItem, Navbar};
pub use components::reveal::Reveal;
pub use components::scroll::ScrollTopButton;
pub use components::showcase::ProductShowcase;
pub use components::theme::{ThemeMode, ThemeToggle};

/// Header links, in display order.
pub const NAV_ITEMS: &[NavItem] = &[
	NavItem { label: "Home", href: "/" },
	NavItem { label: "Products", href: "#products" },
	NavItem { label: "About", href: "#about" },
	NavItem { label: "Contact", href: "#contact" },
	NavItem { label: "Start Project", href: "/start-project" },
];

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("yali: logging initialized");
}

/// Parse a backdrop configuration document. Fields left out keep their
/// defaults; the result is normalized.
pub fn parse_backdrop_config(json: &str) -> Result<BackdropConfig, serde_json::Error> {
	serde_json::from_str::<BackdropConfig>(json).map(BackdropConfig::normalized)
}

/// Load backdrop tuning from a script element with id="backdrop-config".
/// Falls back to the defaults when the element is missing or invalid.
pub fn load_backdrop_config() -> BackdropConfig {
	let Some(json_text) = backdrop_config_text() else {
		return BackdropConfig::default();
	};

	match parse_backdrop_config(&json_text) {
		Ok(config) => {
			info!(
				"yali: loaded backdrop config ({}..{} particles)",
				config.spawn.min_particles, config.spawn.max_particles
			);
			config
		}
		Err(e) => {
			warn!("yali: failed to parse backdrop config: {}", e);
			BackdropConfig::default()
		}
	}
}

fn backdrop_config_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("backdrop-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component.
/// Mounts the backdrop behind the hero and the page-wide decorations.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_backdrop_config();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Yali" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<CustomCursor />
		<Navbar items=NAV_ITEMS />

		<section class="hero">
			<AnimatedBackground config=config />
			<div class="hero-content">
				<h1>"AI for a sustainable future"</h1>
				<CtaButton href="#products">"Explore products"</CtaButton>
			</div>
		</section>

		<Reveal id="about" class="features">
			<h2>"Why Yali"</h2>
			<p>"We build AI that serves the sustainable development goals."</p>
		</Reveal>
		<ProductShowcase />

		<ScrollTopButton />
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::backdrop::particle_count;

	#[test]
	fn partial_config_keeps_defaults() {
		let config = parse_backdrop_config(r#"{"spawn": {"max_particles": 120}}"#).unwrap();
		assert_eq!(config.spawn.max_particles, 120);
		assert_eq!(config.spawn.min_particles, 60);
		assert_eq!(config.motion, BackdropConfig::default().motion);
	}

	#[test]
	fn parsed_config_is_normalized() {
		let config =
			parse_backdrop_config(r#"{"spawn": {"radius": [3.0, 1.0], "min_particles": 500}}"#)
				.unwrap();
		assert_eq!(config.spawn.radius, (1.0, 3.0));
		assert_eq!(config.spawn.min_particles, config.spawn.max_particles);
	}

	#[test]
	fn oversized_config_stays_within_hard_limits() {
		let config =
			parse_backdrop_config(r#"{"spawn": {"max_particles": 5000}, "links": {"distance": 300}}"#)
				.unwrap();
		assert_eq!(particle_count(4000.0, 4000.0, &config.spawn), 200);
		assert_eq!(config.links.alpha_at(0.0), Some(0.4));
	}

	#[test]
	fn malformed_config_is_an_error() {
		assert!(parse_backdrop_config("{ spawn: ").is_err());
		assert!(parse_backdrop_config(r#"{"spawn": {"density": "lots"}}"#).is_err());
	}
}
