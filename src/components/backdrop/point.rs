//! 2D point in canvas pixels.

use std::ops::{Add, Mul, Sub};

/// Position or offset in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	/// `(0, 0)`.
	pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean length of the offset.
	pub fn length(self) -> f64 {
		(self.x * self.x + self.y * self.y).sqrt()
	}

	/// Euclidean distance to `other`.
	pub fn distance_to(self, other: Point) -> f64 {
		(other - self).length()
	}

	/// Moves `factor` of the way towards `target` (exponential easing step).
	pub fn eased_towards(self, target: Point, factor: f64) -> Point {
		self + (target - self) * factor
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Mul<f64> for Point {
	type Output = Point;

	fn mul(self, rhs: f64) -> Point {
		Point::new(self.x * rhs, self.y * rhs)
	}
}
