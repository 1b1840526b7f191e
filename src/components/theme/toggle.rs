//! Button switching between light and dark mode.

use leptos::prelude::*;
use log::debug;

use super::preference::{self, ThemeMode};

/// Round button that flips the site theme and remembers the choice.
///
/// On mount the stored preference is applied, falling back to the system
/// color scheme (which is then stored). The `dark` class on `<html>`
/// follows the current mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
	let (mode, set_mode) = signal(ThemeMode::default());

	Effect::new(move |_| {
		let stored = preference::load_stored();
		let resolved =
			preference::resolve_preference(stored.as_deref(), preference::system_prefers_dark());
		if resolved.persist {
			preference::store(resolved.mode);
		}
		debug!("yali: initial theme {}", resolved.mode);
		set_mode.set(resolved.mode);
	});

	Effect::new(move |_| preference::apply_to_document(mode.get()));

	let toggle = move |_| {
		set_mode.update(|m| {
			*m = m.toggled();
			preference::store(*m);
		});
	};

	view! {
		<button
			class=move || {
				if mode.get().is_dark() { "theme-toggle is-dark" } else { "theme-toggle" }
			}
			aria-label=move || format!("Switch to {} mode", mode.get().toggled())
			on:click=toggle
		>
			<span class="sr-only">"Toggle theme"</span>
		</button>
	}
}
