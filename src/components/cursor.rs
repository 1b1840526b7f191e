//! Custom pointer: a dot that tracks the mouse and an outline trailing it.

use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget};

use super::backdrop::Point;

/// Delay before the outline catches up with the dot.
pub const OUTLINE_DELAY: Duration = Duration::from_millis(50);

const HOVER_QUERY: &str = "(hover: hover)";
const INTERACTIVE_SELECTOR: &str = ".interactive";

/// What the custom cursor shows.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
	/// Pointer position in viewport coordinates.
	pub position: Point,
	/// Set by the first mouse move; the cursor stays invisible before that.
	pub active: bool,
	/// A mouse button is held.
	pub pressed: bool,
	/// The pointer is over something clickable.
	pub hovering: bool,
}

impl CursorState {
	/// Follow a mouse move.
	pub fn moved(&mut self, x: f64, y: f64) {
		self.position = Point::new(x, y);
		self.active = true;
	}

	/// Classes for the dot.
	pub fn dot_class(&self) -> String {
		let mut class = String::from("cursor-dot");
		if self.active {
			class.push_str(" is-active");
		}
		if self.pressed {
			class.push_str(" is-pressed");
		}
		class
	}

	/// Classes for the trailing outline.
	pub fn outline_class(&self) -> String {
		let mut class = String::from("cursor-outline");
		if self.active {
			class.push_str(" is-active");
		}
		if self.hovering {
			class.push_str(" is-hovering");
		}
		class
	}
}

/// Inline style placing an element at `p`.
pub fn translate(p: Point) -> String {
	format!("transform: translate3d({}px, {}px, 0)", p.x, p.y)
}

/// Buttons, links and anything inside an `.interactive` element.
pub fn is_interactive(tag_name: &str, inside_interactive: bool) -> bool {
	tag_name.eq_ignore_ascii_case("button") || tag_name.eq_ignore_ascii_case("a") || inside_interactive
}

fn target_is_interactive(target: Option<EventTarget>) -> bool {
	let Some(el) = target.and_then(|t| t.dyn_into::<Element>().ok()) else {
		return false;
	};
	let inside = el.closest(INTERACTIVE_SELECTOR).ok().flatten().is_some();
	is_interactive(&el.tag_name(), inside)
}

fn has_hover() -> bool {
	web_sys::window()
		.and_then(|w| w.match_media(HOVER_QUERY).ok().flatten())
		.map(|mq| mq.matches())
		.unwrap_or(false)
}

/// Replaces the system pointer on devices that have one.
///
/// Renders nothing on touch-only devices.
#[component]
pub fn CustomCursor() -> impl IntoView {
	if !has_hover() {
		return None;
	}

	let state = RwSignal::new(CursorState::default());
	let outline = RwSignal::new(Point::ORIGIN);

	let handles = SendWrapper::new([
		window_event_listener(ev::mousemove, move |e| {
			let (x, y) = (e.client_x() as f64, e.client_y() as f64);
			state.update(|s| s.moved(x, y));
			set_timeout(move || outline.set(Point::new(x, y)), OUTLINE_DELAY);
		}),
		window_event_listener(ev::mousedown, move |_| state.update(|s| s.pressed = true)),
		window_event_listener(ev::mouseup, move |_| state.update(|s| s.pressed = false)),
		window_event_listener(ev::mouseover, move |e| {
			if target_is_interactive(e.target()) {
				state.update(|s| s.hovering = true);
			}
		}),
		window_event_listener(ev::mouseout, move |e| {
			if target_is_interactive(e.target()) {
				state.update(|s| s.hovering = false);
			}
		}),
	]);
	on_cleanup(move || {
		for handle in handles.take() {
			handle.remove();
		}
	});

	Some(view! {
		<div
			class=move || state.with(CursorState::dot_class)
			style=move || translate(state.with(|s| s.position))
			aria-hidden="true"
		/>
		<div
			class=move || state.with(CursorState::outline_class)
			style=move || translate(outline.get())
			aria-hidden="true"
		>
			{move || {
				state.with(|s| s.hovering).then(|| view! { <span class="cursor-label">"interact"</span> })
			}}
		</div>
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hidden_until_first_move() {
		let mut s = CursorState::default();
		assert_eq!(s.dot_class(), "cursor-dot");
		s.moved(12.0, 30.0);
		assert!(s.active);
		assert_eq!(s.position, Point::new(12.0, 30.0));
		assert_eq!(s.dot_class(), "cursor-dot is-active");
	}

	#[test]
	fn classes_reflect_press_and_hover() {
		let s = CursorState {
			active: true,
			pressed: true,
			hovering: true,
			..Default::default()
		};
		assert_eq!(s.dot_class(), "cursor-dot is-active is-pressed");
		assert_eq!(s.outline_class(), "cursor-outline is-active is-hovering");
	}

	#[test]
	fn interactive_targets() {
		assert!(is_interactive("BUTTON", false));
		assert!(is_interactive("A", false));
		assert!(is_interactive("SPAN", true));
		assert!(!is_interactive("DIV", false));
		assert!(!is_interactive("ARTICLE", false));
	}

	#[test]
	fn translate_style() {
		assert_eq!(
			translate(Point::new(4.5, 10.0)),
			"transform: translate3d(4.5px, 10px, 0)"
		);
	}
}
