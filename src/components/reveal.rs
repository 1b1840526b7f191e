//! Sections that fade in the first time they scroll into view.
//!
//! Each [`Reveal`] watches its own element with an `IntersectionObserver`.
//! Once a tenth of the element is on screen it is marked visible, stays
//! visible, and is no longer observed.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use leptos::prelude::*;
use log::debug;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of the element that must be visible to reveal it.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Visibility of a revealable section. Once shown it stays shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
	visible: bool,
}

impl RevealState {
	/// Whether the section has been revealed.
	pub fn is_visible(self) -> bool {
		self.visible
	}

	/// Feed one intersection report. Returns `true` only for the report
	/// that reveals the section.
	pub fn observe(&mut self, intersecting: bool) -> bool {
		if self.visible || !intersecting {
			return false;
		}
		self.visible = true;
		true
	}

	/// `base` plus `is-visible` once revealed.
	pub fn class(self, base: &str) -> String {
		if self.visible {
			format!("{base} is-visible")
		} else {
			base.to_string()
		}
	}
}

/// Live observer and the callback it calls into.
struct Observation {
	observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observation {
	fn start(target: &Element, state: RwSignal<RevealState>) -> Result<Self, JsValue> {
		let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
			move |entries: Array, observer: IntersectionObserver| {
				for entry in entries.iter() {
					let entry: IntersectionObserverEntry = entry.unchecked_into();
					state.maybe_update(|s| s.observe(entry.is_intersecting()));
					if state.with_untracked(|s| s.is_visible()) {
						observer.unobserve(&entry.target());
					}
				}
			},
		);
		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
		let observer =
			IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
		observer.observe(target);
		Ok(Self {
			observer,
			_callback: callback,
		})
	}

	fn stop(self) {
		self.observer.disconnect();
	}
}

/// Section whose content animates in on first view.
///
/// The element carries `class` plus `reveal`, and `is-visible` once shown.
/// Without `IntersectionObserver` the content is shown right away.
#[component]
pub fn Reveal(
	children: Children,
	#[prop(optional, into)] id: Option<String>,
	#[prop(optional, into)] class: String,
) -> impl IntoView {
	let node = NodeRef::<leptos::html::Section>::new();
	let state = RwSignal::new(RevealState::default());
	let observation: Rc<RefCell<Option<Observation>>> = Rc::new(RefCell::new(None));

	let observation_init = observation.clone();
	Effect::new(move |_| {
		let Some(el) = node.get() else {
			return;
		};
		if observation_init.borrow().is_some() || state.with_untracked(|s| s.is_visible()) {
			return;
		}
		match Observation::start(&el, state) {
			Ok(o) => *observation_init.borrow_mut() = Some(o),
			Err(e) => {
				debug!("yali: no intersection observer ({e:?}), revealing now");
				state.maybe_update(|s| s.observe(true));
			}
		}
	});

	let observation_cleanup = SendWrapper::new(observation);
	on_cleanup(move || {
		if let Some(o) = observation_cleanup.borrow_mut().take() {
			o.stop();
		}
	});

	let base = if class.is_empty() {
		"reveal".to_string()
	} else {
		format!("{class} reveal")
	};

	view! {
		<section node_ref=node id=id class=move || state.get().class(&base)>
			{children()}
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hidden_until_intersecting() {
		let mut s = RevealState::default();
		assert!(!s.observe(false));
		assert!(!s.is_visible());
		assert_eq!(s.class("reveal"), "reveal");
	}

	#[test]
	fn reveals_exactly_once() {
		let mut s = RevealState::default();
		assert!(s.observe(true));
		assert!(s.is_visible());
		assert!(!s.observe(true));
		assert_eq!(s.class("features reveal"), "features reveal is-visible");
	}

	#[test]
	fn stays_visible_after_leaving() {
		let mut s = RevealState::default();
		s.observe(true);
		assert!(!s.observe(false));
		assert!(s.is_visible());
	}
}
