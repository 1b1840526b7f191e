//! Fixed page header with a collapsible menu on narrow screens.
//!
//! Below [`MOBILE_BREAKPOINT`] the links move behind a toggle button. While
//! that menu is open the page body does not scroll. Widening the window past
//! the breakpoint closes the menu and releases the body.

use leptos::either::Either;
use leptos::ev;
use leptos::prelude::*;
use log::debug;
use send_wrapper::SendWrapper;

use super::scroll::{navbar_condensed, scroll_signal};
use super::theme::ThemeToggle;

/// Viewport widths below this use the mobile menu.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Whether a viewport `width` gets the mobile layout.
pub fn is_mobile(width: f64) -> bool {
	width < MOBILE_BREAKPOINT
}

/// One header link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
	/// Link text.
	pub label: &'static str,
	/// Link target, a path or an in-page `#anchor`.
	pub href: &'static str,
}

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
	/// Whether the links are showing.
	pub open: bool,
}

impl MenuState {
	/// Open a closed menu or close an open one.
	pub fn toggle(&mut self) {
		self.open = !self.open;
	}

	/// Close the menu when the layout is no longer mobile. Returns whether
	/// anything changed.
	pub fn viewport_changed(&mut self, mobile: bool) -> bool {
		if mobile || !self.open {
			return false;
		}
		self.open = false;
		true
	}

	/// CSS `overflow` for the page body in this state.
	pub fn body_overflow(self) -> &'static str {
		if self.open { "hidden" } else { "auto" }
	}
}

fn viewport_width() -> f64 {
	web_sys::window()
		.and_then(|w| w.inner_width().ok())
		.and_then(|w| w.as_f64())
		.unwrap_or(MOBILE_BREAKPOINT)
}

fn set_body_overflow(value: &str) {
	let Some(body) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.body())
	else {
		return;
	};
	if body.style().set_property("overflow", value).is_err() {
		debug!("yali: could not set body overflow");
	}
}

/// `<li>` links for `items`. `on_pick` runs when one is clicked.
fn link_list(
	items: &'static [NavItem],
	on_pick: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
	items
		.iter()
		.map(|item| {
			view! {
				<li>
					<a href=item.href class="nav-link interactive" on:click=move |_| on_pick()>
						{item.label}
					</a>
				</li>
			}
		})
		.collect_view()
}

/// Fixed page header. Gets the `is-condensed` class once the page scrolls.
///
/// On mobile widths `items` sit in a toggled menu. Picking one closes it.
#[component]
pub fn Navbar(items: &'static [NavItem]) -> impl IntoView {
	let condensed = scroll_signal(navbar_condensed);
	let mobile = RwSignal::new(is_mobile(viewport_width()));
	let menu = RwSignal::new(MenuState::default());

	let set_menu = move |next: MenuState| {
		menu.set(next);
		set_body_overflow(next.body_overflow());
	};
	let toggle = move || {
		let mut next = menu.get_untracked();
		next.toggle();
		set_menu(next);
	};
	let close = move || set_menu(MenuState::default());

	let handle = window_event_listener(ev::resize, move |_| {
		let now_mobile = is_mobile(viewport_width());
		if mobile.get_untracked() != now_mobile {
			mobile.set(now_mobile);
		}
		let mut next = menu.get_untracked();
		if next.viewport_changed(now_mobile) {
			set_menu(next);
		}
	});
	let handle = SendWrapper::new(handle);
	on_cleanup(move || handle.take().remove());

	view! {
		<header class=move || if condensed.get() { "navbar is-condensed" } else { "navbar" }>
			<a href="/" class="navbar-logo interactive">"Yali"</a>
			{move || {
				if mobile.get() {
					Either::Left(view! {
						<div class="navbar-actions">
							<ThemeToggle />
							<button
								class="menu-toggle interactive"
								aria-label="Toggle menu"
								aria-expanded=move || menu.get().open.to_string()
								on:click=move |_| toggle()
							>
								{move || if menu.get().open { "✕" } else { "☰" }}
							</button>
						</div>
						<nav class=move || {
							if menu.get().open { "mobile-menu is-open" } else { "mobile-menu" }
						}>
							<ul>{link_list(items, close)}</ul>
						</nav>
					})
				} else {
					Either::Right(view! {
						<nav class="navbar-links">
							<ul>{link_list(items, || {})}</ul>
							<ThemeToggle />
						</nav>
					})
				}
			}}
		</header>
	}
}
