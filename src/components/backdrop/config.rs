//! Tunable parameters for the particle backdrop.
//!
//! Every constant of the simulation lives here so the look can be adjusted
//! from the page (see [`crate::load_backdrop_config`]) without touching the
//! simulation code. Missing fields fall back to the defaults below.
//!
//! # Per-frame factors
//!
//! The easing and smoothing factors are applied once per displayed frame,
//! not scaled by elapsed time. A display running at 120 Hz animates twice as
//! fast as one at 60 Hz.

use log::warn;
use serde::Deserialize;

/// Hard ceiling on the particle count. The link pass is quadratic in the
/// count, so a page cannot raise it.
pub const MAX_PARTICLES: usize = 200;

/// Hard ceiling on a link's alpha, whatever the link settings.
pub const MAX_LINK_ALPHA: f64 = 0.4;

/// How many particles are spawned and what they look like.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
	/// Surface area (px²) per particle.
	pub density: f64,
	/// Lower bound on the particle count, even for an empty surface.
	pub min_particles: usize,
	/// Upper bound on the particle count, at most [`MAX_PARTICLES`].
	pub max_particles: usize,
	/// Dot radius range in px.
	pub radius: (f64, f64),
	/// Range of the distance at which the pointer starts pushing a particle.
	pub activation_radius: (f64, f64),
	/// Fill alpha range.
	pub opacity: (f64, f64),
}

impl Default for SpawnConfig {
	fn default() -> Self {
		Self {
			density: 5500.0,
			min_particles: 60,
			max_particles: 200,
			radius: (0.8, 2.6),
			activation_radius: (180.0, 360.0),
			opacity: (0.3, 1.0),
		}
	}
}

/// Pointer interaction and easing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
	/// Displacement applied at zero distance, as a fraction of the
	/// pointer offset.
	pub repulsion: f64,
	/// Fraction of the remaining distance covered per frame while fleeing.
	pub flee_easing: f64,
	/// Fraction of the remaining distance covered per frame while returning.
	pub return_easing: f64,
	/// Fraction of the raw pointer delta the smoothed pointer follows per frame.
	pub pointer_smoothing: f64,
}

impl Default for MotionConfig {
	fn default() -> Self {
		Self {
			repulsion: 0.4,
			flee_easing: 0.15,
			return_easing: 0.05,
			pointer_smoothing: 0.1,
		}
	}
}

/// Connection lines between nearby particles.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
	/// Pairs closer than this are connected.
	pub distance: f64,
	/// Alpha is `(distance - d) / alpha_divisor`.
	pub alpha_divisor: f64,
	/// Stroke width in px.
	pub width: f64,
}

impl Default for LinkConfig {
	fn default() -> Self {
		Self {
			distance: 100.0,
			alpha_divisor: 250.0,
			width: 0.6,
		}
	}
}

impl LinkConfig {
	/// Alpha of a link at distance `d`, or `None` when the pair is too far
	/// apart. Always within `[0, MAX_LINK_ALPHA]`.
	pub fn alpha_at(&self, d: f64) -> Option<f64> {
		if !(d < self.distance) {
			return None;
		}
		let alpha = (self.distance - d) / self.alpha_divisor;
		if alpha.is_nan() {
			return None;
		}
		Some(alpha.clamp(0.0, MAX_LINK_ALPHA))
	}
}

/// Complete backdrop configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
	/// Particle count and appearance.
	pub spawn: SpawnConfig,
	/// Pointer response.
	pub motion: MotionConfig,
	/// Connection lines.
	pub links: LinkConfig,
}

impl BackdropConfig {
	/// Repairs values that would make spawning or drawing misbehave:
	/// reversed or unbounded ranges, a count above [`MAX_PARTICLES`],
	/// non-positive divisors, a minimum above the maximum.
	pub fn normalized(mut self) -> Self {
		let defaults = SpawnConfig::default();
		let spawn = &mut self.spawn;
		spawn.radius = ordered("spawn.radius", spawn.radius, defaults.radius);
		spawn.activation_radius = ordered(
			"spawn.activation_radius",
			spawn.activation_radius,
			defaults.activation_radius,
		);
		spawn.opacity = ordered("spawn.opacity", spawn.opacity, defaults.opacity);
		if spawn.max_particles > MAX_PARTICLES {
			warn!(
				"backdrop: max_particles {} is above the limit, using {}",
				spawn.max_particles, MAX_PARTICLES
			);
			spawn.max_particles = MAX_PARTICLES;
		}
		if spawn.min_particles > spawn.max_particles {
			warn!(
				"backdrop: min_particles {} exceeds max_particles {}, using the maximum for both",
				spawn.min_particles, spawn.max_particles
			);
			spawn.min_particles = spawn.max_particles;
		}
		if !(spawn.density > 0.0) {
			warn!("backdrop: density must be positive, got {}", spawn.density);
			spawn.density = defaults.density;
		}
		let link_defaults = LinkConfig::default();
		if !(self.links.distance.is_finite() && self.links.distance >= 0.0) {
			warn!(
				"backdrop: links.distance must be finite and non-negative, got {}",
				self.links.distance
			);
			self.links.distance = link_defaults.distance;
		}
		if !(self.links.alpha_divisor > 0.0) {
			warn!(
				"backdrop: links.alpha_divisor must be positive, got {}",
				self.links.alpha_divisor
			);
			self.links.alpha_divisor = link_defaults.alpha_divisor;
		}
		self
	}
}

/// Sampling needs finite bounds and a finite width; anything else falls
/// back to `fallback`.
fn ordered(name: &str, (lo, hi): (f64, f64), fallback: (f64, f64)) -> (f64, f64) {
	if !(lo.is_finite() && hi.is_finite() && (hi - lo).is_finite()) {
		warn!(
			"backdrop: {} range ({}, {}) is unbounded, using ({}, {})",
			name, lo, hi, fallback.0, fallback.1
		);
		fallback
	} else if lo > hi {
		warn!("backdrop: {} range is reversed ({}, {})", name, lo, hi);
		(hi, lo)
	} else {
		(lo, hi)
	}
}
