//! Leptos component mounting the particle backdrop.
//!
//! On mount the canvas is sized to its container, a 2D context is obtained
//! and an [`AnimationLoop`] is started. Window `resize` and document
//! `mousemove` listeners feed it. Everything is undone when the owning
//! scope is cleaned up.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, Element, Event, EventTarget, HtmlCanvasElement, MouseEvent, Window,
};

use super::animation::{AnimationLoop, FrameScheduler};
use super::config::BackdropConfig;
use super::surface::CanvasSurface;
use crate::components::theme::preference;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Why the backdrop could not start. The page works without it, so these
/// are only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
	/// `window` is unavailable.
	NoWindow,
	/// The window has no document.
	NoDocument,
	/// The canvas refused a 2D rendering context.
	NoContext,
	/// Registering a listener for the named event failed.
	Listener(&'static str),
}

impl fmt::Display for MountError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			MountError::NoWindow => write!(f, "no window available"),
			MountError::NoDocument => write!(f, "no document available"),
			MountError::NoContext => write!(f, "canvas has no 2d context"),
			MountError::Listener(event) => write!(f, "could not listen for `{event}`"),
		}
	}
}

impl std::error::Error for MountError {}

/// `requestAnimationFrame` against a shared frame callback.
struct RafScheduler {
	window: Window,
	callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
	type Handle = i32;

	fn request_frame(&mut self) -> Option<i32> {
		let callback = self.callback.borrow();
		let callback = callback.as_ref()?;
		self.window
			.request_animation_frame(callback.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel_frame(&mut self, handle: i32) {
		let _ = self.window.cancel_animation_frame(handle);
	}
}

/// Event listener that stays registered until [`Listener::detach`].
struct Listener {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
	fn attach(
		target: EventTarget,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Result<Self, MountError> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		target
			.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
			.map_err(|_| MountError::Listener(event))?;
		Ok(Self {
			target,
			event,
			callback,
		})
	}

	fn detach(self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}
}

/// Empties a shared slot when dropped, unless disarmed. Keeps an early
/// return from leaving the frame closure (and the loop it owns) alive.
struct ClearOnDrop<T> {
	slot: Option<Rc<RefCell<Option<T>>>>,
}

impl<T> ClearOnDrop<T> {
	fn new(slot: Rc<RefCell<Option<T>>>) -> Self {
		Self { slot: Some(slot) }
	}

	fn disarm(mut self) {
		self.slot = None;
	}
}

impl<T> Drop for ClearOnDrop<T> {
	fn drop(&mut self) {
		if let Some(slot) = self.slot.take() {
			slot.borrow_mut().take();
		}
	}
}

/// A running backdrop and everything needed to stop it.
struct Mounted {
	animation: Rc<RefCell<AnimationLoop<RafScheduler>>>,
	frame: FrameCallback,
	listeners: Vec<Listener>,
}

impl Mounted {
	fn teardown(self) {
		for listener in self.listeners {
			listener.detach();
		}
		self.animation.borrow_mut().teardown();
		// The frame closure holds the loop; dropping it breaks the cycle.
		self.frame.borrow_mut().take();
	}
}

/// Sets the canvas drawing buffer to the container's size and returns it.
fn sync_canvas_size(container: &Element, canvas: &HtmlCanvasElement) -> (f64, f64) {
	let (w, h) = (container.client_width().max(0), container.client_height().max(0));
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	(w as f64, h as f64)
}

fn viewport(window: &Window) -> (f64, f64) {
	let w = window.inner_width().ok().and_then(|v| v.as_f64());
	let h = window.inner_height().ok().and_then(|v| v.as_f64());
	(w.unwrap_or(0.0), h.unwrap_or(0.0))
}

fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

fn mount(
	config: BackdropConfig,
	container: Element,
	canvas: HtmlCanvasElement,
) -> Result<Mounted, MountError> {
	let window = web_sys::window().ok_or(MountError::NoWindow)?;
	let document = window.document().ok_or(MountError::NoDocument)?;

	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
		.ok_or(MountError::NoContext)?;

	let frame: FrameCallback = Rc::new(RefCell::new(None));
	let scheduler = RafScheduler {
		window: window.clone(),
		callback: frame.clone(),
	};
	let animation = Rc::new(RefCell::new(AnimationLoop::new(
		config,
		preference::document_mode(),
		random_seed(),
		viewport(&window),
		scheduler,
	)));

	let mut surface = CanvasSurface::new(ctx);
	let animation_frame = animation.clone();
	*frame.borrow_mut() = Some(Closure::new(move || {
		animation_frame.borrow_mut().tick(&mut surface);
	}));
	let release_frame = ClearOnDrop::new(frame.clone());

	let (animation_resize, container_resize, canvas_resize) =
		(animation.clone(), container.clone(), canvas.clone());
	let on_resize = Listener::attach(window.into(), "resize", move |_| {
		let (w, h) = sync_canvas_size(&container_resize, &canvas_resize);
		animation_resize.borrow_mut().resize(w, h);
	})?;

	let animation_move = animation.clone();
	let on_move = Listener::attach(document.into(), "mousemove", move |ev: Event| {
		if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
			animation_move
				.borrow_mut()
				.pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
		}
	});
	let on_move = match on_move {
		Ok(listener) => listener,
		Err(e) => {
			on_resize.detach();
			return Err(e);
		}
	};

	let (w, h) = sync_canvas_size(&container, &canvas);
	animation.borrow_mut().resize(w, h);
	release_frame.disarm();

	Ok(Mounted {
		animation,
		frame,
		listeners: vec![on_resize, on_move],
	})
}

/// Full-bleed animated particle field behind the page content.
///
/// Particles drift away from the pointer and settle back when it leaves.
/// Colors follow the theme applied to the document when the component
/// mounts. The container is decorative and hidden from assistive tech.
#[component]
pub fn AnimatedBackground(#[prop(optional)] config: BackdropConfig) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mounted: Rc<RefCell<Option<Mounted>>> = Rc::new(RefCell::new(None));

	let mounted_init = mounted.clone();
	Effect::new(move |_| {
		let (Some(container), Some(canvas)) = (container_ref.get(), canvas_ref.get()) else {
			return;
		};
		if mounted_init.borrow().is_some() {
			return;
		}
		match mount(config.clone(), container.into(), canvas.into()) {
			Ok(m) => *mounted_init.borrow_mut() = Some(m),
			Err(e) => debug!("backdrop: not started: {e}"),
		}
	});

	let mounted_cleanup = SendWrapper::new(mounted);
	on_cleanup(move || {
		if let Some(m) = mounted_cleanup.borrow_mut().take() {
			m.teardown();
		}
	});

	view! {
		<div node_ref=container_ref class="animated-background" aria-hidden="true">
			<canvas node_ref=canvas_ref class="animated-background-canvas" />
		</div>
	}
}

#[cfg(test)]
mod tests {
	use std::rc::Weak;

	use super::*;

	/// Stands in for the frame closure: holds the thing that holds the slot.
	struct Owner {
		_slot: Rc<RefCell<Option<Owner>>>,
	}

	fn cycle() -> (Rc<RefCell<Option<Owner>>>, Weak<RefCell<Option<Owner>>>) {
		let slot: Rc<RefCell<Option<Owner>>> = Rc::new(RefCell::new(None));
		*slot.borrow_mut() = Some(Owner {
			_slot: slot.clone(),
		});
		let weak = Rc::downgrade(&slot);
		(slot, weak)
	}

	#[test]
	fn early_return_breaks_the_cycle() {
		let (slot, weak) = cycle();
		{
			let _guard = ClearOnDrop::new(slot.clone());
		}
		assert!(slot.borrow().is_none());
		drop(slot);
		assert!(weak.upgrade().is_none());
	}

	#[test]
	fn disarmed_guard_keeps_the_slot() {
		let (slot, _weak) = cycle();
		ClearOnDrop::new(slot.clone()).disarm();
		assert!(slot.borrow().is_some());
		slot.borrow_mut().take();
	}

	#[test]
	fn mount_errors_read_well() {
		assert_eq!(MountError::NoContext.to_string(), "canvas has no 2d context");
		assert_eq!(
			MountError::Listener("resize").to_string(),
			"could not listen for `resize`"
		);
	}
}
