//! Call-to-action button that leans towards the pointer.

use leptos::either::Either;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::backdrop::Point;

/// Largest shift in px, reached at the button edges.
pub const MAX_SHIFT: f64 = 10.0;

/// Offset for a pointer at `local` (relative to the button's top-left
/// corner) over a button of `size`. Zero at the center, `±max` at the
/// edges, zero for a button with no area.
pub fn magnetic_offset(local: Point, size: (f64, f64), max: f64) -> Point {
	let (cx, cy) = (size.0 / 2.0, size.1 / 2.0);
	if !(cx > 0.0 && cy > 0.0) {
		return Point::ORIGIN;
	}
	Point::new((local.x - cx) / cx * max, (local.y - cy) / cy * max)
}

fn button_style(hovered: bool, offset: Point) -> String {
	if hovered {
		format!(
			"transform: translate({}px, {}px); transition: transform 0.2s ease-out",
			offset.x, offset.y
		)
	} else {
		"transition: transform 0.3s ease-out".to_string()
	}
}

fn glow_style(at: Point) -> String {
	format!(
		"background: radial-gradient(circle 80px at {}px {}px, rgba(255,255,255,0.3), transparent)",
		at.x, at.y
	)
}

/// Rounded CTA with a pointer-following glow.
///
/// Renders a link when `href` is set and a plain button otherwise.
#[component]
pub fn CtaButton(children: Children, #[prop(optional, into)] href: Option<String>) -> impl IntoView {
	let hovered = RwSignal::new(false);
	let glow = RwSignal::new(Point::ORIGIN);
	let offset = RwSignal::new(Point::ORIGIN);

	let on_enter = move |_: MouseEvent| hovered.set(true);
	let on_move = move |ev: MouseEvent| {
		let Some(el) = ev
			.current_target()
			.and_then(|t| t.dyn_into::<Element>().ok())
		else {
			return;
		};
		let rect = el.get_bounding_client_rect();
		let local = Point::new(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		glow.set(local);
		offset.set(magnetic_offset(local, (rect.width(), rect.height()), MAX_SHIFT));
	};
	let on_leave = move |_: MouseEvent| {
		hovered.set(false);
		offset.set(Point::ORIGIN);
	};
	let style = move || button_style(hovered.get(), offset.get());

	let content = view! {
		{move || {
			hovered.get().then(|| view! { <span class="cta-glow" style=move || glow_style(glow.get()) /> })
		}}
		<span class="cta-border" />
		<span class="cta-label">{children()}</span>
		<span class="cta-arrow" aria-hidden="true">"→"</span>
	};

	match href {
		Some(href) => Either::Left(view! {
			<a
				href=href
				class="cta-button"
				style=style
				on:mouseenter=on_enter
				on:mousemove=on_move
				on:mouseleave=on_leave
			>
				{content}
			</a>
		}),
		None => Either::Right(view! {
			<button
				class="cta-button"
				style=style
				on:mouseenter=on_enter
				on:mousemove=on_move
				on:mouseleave=on_leave
			>
				{content}
			</button>
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn centered_pointer_does_not_move() {
		let o = magnetic_offset(Point::new(60.0, 20.0), (120.0, 40.0), MAX_SHIFT);
		assert_eq!(o, Point::ORIGIN);
	}

	#[test]
	fn corners_reach_the_limit() {
		let size = (120.0, 40.0);
		assert_eq!(
			magnetic_offset(Point::new(0.0, 0.0), size, MAX_SHIFT),
			Point::new(-10.0, -10.0)
		);
		assert_eq!(
			magnetic_offset(Point::new(120.0, 40.0), size, MAX_SHIFT),
			Point::new(10.0, 10.0)
		);
	}

	#[test]
	fn partial_offset() {
		let o = magnetic_offset(Point::new(90.0, 10.0), (120.0, 40.0), MAX_SHIFT);
		assert_eq!(o, Point::new(5.0, -5.0));
	}

	#[test]
	fn empty_button_stays_put() {
		assert_eq!(
			magnetic_offset(Point::new(3.0, 3.0), (0.0, 40.0), MAX_SHIFT),
			Point::ORIGIN
		);
		assert_eq!(
			magnetic_offset(Point::new(3.0, 3.0), (0.0, 0.0), MAX_SHIFT),
			Point::ORIGIN
		);
	}

	#[test]
	fn style_resets_when_not_hovered() {
		assert_eq!(
			button_style(false, Point::new(4.0, 4.0)),
			"transition: transform 0.3s ease-out"
		);
		assert_eq!(
			button_style(true, Point::new(4.0, -2.5)),
			"transform: translate(4px, -2.5px); transition: transform 0.2s ease-out"
		);
	}
}
