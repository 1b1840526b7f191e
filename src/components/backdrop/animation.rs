//! Frame loop driving the backdrop.
//!
//! The loop does not schedule itself. After each frame it asks a
//! [`FrameScheduler`] for the next one and keeps the returned handle, so
//! teardown can cancel the pending request. In the browser the scheduler
//! wraps `requestAnimationFrame`; tests step it by hand.
//!
//! Lifecycle: `Idle` until the first size is known, then `Running` until
//! [`AnimationLoop::teardown`], then `Terminated` for good.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::config::BackdropConfig;
use super::particles::ParticleField;
use super::point::Point;
use super::pointer::SmoothedPointer;
use super::render;
use super::surface::Surface;
use crate::components::theme::{BackdropPalette, ThemeMode};

/// Source of display-refresh callbacks.
pub trait FrameScheduler {
	/// Identifies one pending request.
	type Handle;

	/// Ask for one callback on the next frame. `None` if nothing could be
	/// scheduled.
	fn request_frame(&mut self) -> Option<Self::Handle>;

	/// Withdraw a request that has not fired yet.
	fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Where an [`AnimationLoop`] is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
	/// Waiting for the first surface size.
	Idle,
	/// Drawing one frame per scheduler callback.
	Running,
	/// Torn down; ignores all input.
	Terminated,
}

/// Owns the particle field and the pointer, and draws one frame per
/// scheduler callback.
pub struct AnimationLoop<S: FrameScheduler> {
	config: BackdropConfig,
	theme: ThemeMode,
	rng: StdRng,
	scheduler: S,
	pointer: SmoothedPointer,
	field: Option<ParticleField>,
	width: f64,
	height: f64,
	state: LoopState,
	pending: Option<S::Handle>,
	frames: u64,
}

impl<S: FrameScheduler> AnimationLoop<S> {
	/// `config` is normalized first. `theme` is captured now and used when
	/// the field is created; later theme changes do not recolor the
	/// particles. `viewport` is the window size, whose center is the initial
	/// smoothed pointer.
	pub fn new(
		config: BackdropConfig,
		theme: ThemeMode,
		seed: u64,
		viewport: (f64, f64),
		scheduler: S,
	) -> Self {
		let config = config.normalized();
		let center = Point::new(viewport.0 / 2.0, viewport.1 / 2.0);
		let pointer = SmoothedPointer::new(center, config.motion.pointer_smoothing);
		Self {
			config,
			theme,
			rng: StdRng::seed_from_u64(seed),
			scheduler,
			pointer,
			field: None,
			width: 0.0,
			height: 0.0,
			state: LoopState::Idle,
			pending: None,
			frames: 0,
		}
	}

	/// Current lifecycle state.
	pub fn state(&self) -> LoopState {
		self.state
	}

	/// Particles, once the first size is known and until teardown.
	pub fn field(&self) -> Option<&ParticleField> {
		self.field.as_ref()
	}

	/// Pointer state fed by `pointer_moved`.
	pub fn pointer(&self) -> &SmoothedPointer {
		&self.pointer
	}

	/// Last recorded surface size.
	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Frames drawn so far.
	pub fn frames(&self) -> u64 {
		self.frames
	}

	/// Whether a frame request is outstanding.
	pub fn has_pending_frame(&self) -> bool {
		self.pending.is_some()
	}

	/// The scheduler frames are requested from.
	pub fn scheduler(&self) -> &S {
		&self.scheduler
	}

	/// Record the surface size. The first call spawns the particles and
	/// starts the loop.
	pub fn resize(&mut self, width: f64, height: f64) {
		match self.state {
			LoopState::Terminated => return,
			LoopState::Running => {
				self.width = width;
				self.height = height;
			}
			LoopState::Idle => {
				self.width = width;
				self.height = height;
				let palette = BackdropPalette::for_mode(self.theme);
				let field = ParticleField::new(
					&mut self.rng,
					width,
					height,
					&palette,
					&self.config.spawn,
				);
				debug!(
					"backdrop: running with {} particles on {}x{} ({} theme)",
					field.len(),
					width,
					height,
					self.theme
				);
				self.field = Some(field);
				self.state = LoopState::Running;
				self.schedule_next();
			}
		}
	}

	/// Record a raw pointer position in viewport coordinates.
	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		if self.state != LoopState::Terminated {
			self.pointer.set_raw(Point::new(x, y));
		}
	}

	/// Advance and draw one frame, then request the next one. Does nothing
	/// unless running. Returns whether a frame was drawn.
	pub fn tick<T: Surface + ?Sized>(&mut self, surface: &mut T) -> bool {
		if self.state != LoopState::Running {
			return false;
		}
		let Some(field) = self.field.as_mut() else {
			return false;
		};
		// The request that triggered this frame has fired.
		self.pending = None;

		let pointer = self.pointer.follow();
		field.step(pointer, &self.config.motion);
		render::render(field, surface, &self.config.links, self.width, self.height);
		self.frames += 1;

		self.schedule_next();
		true
	}

	/// Stop for good: cancel the pending frame and drop the particles.
	pub fn teardown(&mut self) {
		if self.state == LoopState::Terminated {
			return;
		}
		if let Some(handle) = self.pending.take() {
			self.scheduler.cancel_frame(handle);
		}
		self.field = None;
		self.state = LoopState::Terminated;
		debug!("backdrop: stopped after {} frames", self.frames);
	}

	fn schedule_next(&mut self) {
		if self.pending.is_some() {
			return;
		}
		self.pending = self.scheduler.request_frame();
		if self.pending.is_none() {
			debug!("backdrop: frame request refused");
		}
	}
}
