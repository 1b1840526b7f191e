//! Scroll-driven chrome: the navbar condense threshold and the back-to-top
//! button.

use leptos::ev;
use leptos::prelude::*;
use log::debug;
use send_wrapper::SendWrapper;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Scroll offset past which the navbar switches to its compact style.
pub const NAVBAR_CONDENSE_AT: f64 = 20.0;

/// Whether the navbar uses its compact style at `scroll_y`.
pub fn navbar_condensed(scroll_y: f64) -> bool {
	scroll_y > NAVBAR_CONDENSE_AT
}

/// The back-to-top button appears once a full screen has been scrolled.
pub fn show_scroll_top(scroll_y: f64, viewport_height: f64) -> bool {
	scroll_y > viewport_height
}

fn scroll_y() -> f64 {
	web_sys::window()
		.and_then(|w| w.scroll_y().ok())
		.unwrap_or(0.0)
}

fn viewport_height() -> f64 {
	web_sys::window()
		.and_then(|w| w.inner_height().ok())
		.and_then(|h| h.as_f64())
		.unwrap_or(0.0)
}

/// Signal mapping the current scroll position through `f`, updated on
/// every window `scroll` event while the calling scope lives.
pub(crate) fn scroll_signal(f: impl Fn(f64) -> bool + 'static) -> ReadSignal<bool> {
	let (value, set_value) = signal(f(scroll_y()));
	let handle = window_event_listener(ev::scroll, move |_| set_value.set(f(scroll_y())));
	let handle = SendWrapper::new(handle);
	on_cleanup(move || handle.take().remove());
	value
}

/// Floating button that smooth-scrolls back to the top of the page.
#[component]
pub fn ScrollTopButton() -> impl IntoView {
	let visible = scroll_signal(|y| show_scroll_top(y, viewport_height()));

	let to_top = move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		let options = ScrollToOptions::new();
		options.set_top(0.0);
		options.set_behavior(ScrollBehavior::Smooth);
		window.scroll_to_with_scroll_to_options(&options);
		debug!("yali: scrolling to top");
	};

	view! {
		<button
			class=move || if visible.get() { "scroll-top is-visible" } else { "scroll-top" }
			aria-label="Scroll to top"
			on:click=to_top
		>
			"↑"
		</button>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn navbar_condenses_past_threshold() {
		assert!(!navbar_condensed(0.0));
		assert!(!navbar_condensed(20.0));
		assert!(navbar_condensed(20.5));
	}

	#[test]
	fn scroll_top_needs_a_full_screen() {
		assert!(!show_scroll_top(0.0, 900.0));
		assert!(!show_scroll_top(900.0, 900.0));
		assert!(show_scroll_top(901.0, 900.0));
	}
}
