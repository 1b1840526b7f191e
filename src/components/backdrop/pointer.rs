//! Low-pass filtered pointer position.

use super::point::Point;

/// Pointer coordinate that trails the raw input to hide jitter.
///
/// The raw position only changes on input events; the smoothed one moves
/// once per frame, covering `factor` of the remaining gap.
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothedPointer {
	raw: Point,
	smoothed: Point,
	factor: f64,
}

impl SmoothedPointer {
	/// Smoothed position starts at `start` (the viewport center); the raw
	/// position starts at the origin until the first move event arrives.
	pub fn new(start: Point, factor: f64) -> Self {
		Self {
			raw: Point::ORIGIN,
			smoothed: start,
			factor,
		}
	}

	/// Latest input position. Takes effect on the next [`Self::follow`].
	pub fn set_raw(&mut self, raw: Point) {
		self.raw = raw;
	}

	/// Latest reported position.
	pub fn raw(&self) -> Point {
		self.raw
	}

	/// Filtered position particles react to.
	pub fn smoothed(&self) -> Point {
		self.smoothed
	}

	/// One frame of smoothing. Returns the new smoothed position.
	pub fn follow(&mut self) -> Point {
		self.smoothed = self.smoothed.eased_towards(self.raw, self.factor);
		self.smoothed
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn one_frame_covers_a_tenth() {
		let mut pointer = SmoothedPointer::new(Point::ORIGIN, 0.1);
		pointer.set_raw(Point::new(100.0, 100.0));
		let p = pointer.follow();
		assert!(p.distance_to(Point::new(10.0, 10.0)) < 1e-12);
		assert_eq!(pointer.raw(), Point::new(100.0, 100.0));
	}

	#[test]
	fn raw_updates_do_not_move_smoothed_until_a_frame() {
		let mut pointer = SmoothedPointer::new(Point::new(400.0, 300.0), 0.1);
		pointer.set_raw(Point::new(0.0, 0.0));
		pointer.set_raw(Point::new(800.0, 600.0));
		assert_eq!(pointer.smoothed(), Point::new(400.0, 300.0));
	}

	#[test]
	fn converges_on_a_still_pointer() {
		let mut pointer = SmoothedPointer::new(Point::new(640.0, 360.0), 0.1);
		pointer.set_raw(Point::new(20.0, 40.0));
		for _ in 0..400 {
			pointer.follow();
		}
		assert!(pointer.smoothed().distance_to(Point::new(20.0, 40.0)) < 1e-9);
	}

	#[test]
	fn drifts_towards_origin_before_any_input() {
		let mut pointer = SmoothedPointer::new(Point::new(500.0, 500.0), 0.1);
		let p = pointer.follow();
		assert!(p.distance_to(Point::new(450.0, 450.0)) < 1e-12);
	}
}
