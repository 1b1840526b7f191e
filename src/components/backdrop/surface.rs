//! Drawing target for the backdrop.
//!
//! The renderer only needs three primitives, so it talks to this trait
//! instead of the canvas directly. [`CanvasSurface`] forwards to a
//! `CanvasRenderingContext2d`; tests record the calls instead.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::point::Point;
use crate::components::theme::Color;

/// 2D drawing primitives the backdrop renderer needs.
pub trait Surface {
	/// Erase the `width × height` area starting at the origin.
	fn clear(&mut self, width: f64, height: f64);

	/// Filled disc at `alpha` opacity.
	fn fill_circle(&mut self, center: Point, radius: f64, color: Color, alpha: f64);

	/// Single segment of the given stroke width at `alpha` opacity.
	fn stroke_line(&mut self, from: Point, to: Point, color: Color, alpha: f64, width: f64);
}

/// [`Surface`] backed by a 2D canvas context.
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Draws through `ctx`.
	pub fn new(ctx: CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}
}

impl Surface for CanvasSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, center: Point, radius: f64, color: Color, alpha: f64) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(center.x, center.y, radius, 0.0, PI * 2.0);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.set_global_alpha(alpha);
		self.ctx.fill();
	}

	fn stroke_line(&mut self, from: Point, to: Point, color: Color, alpha: f64, width: f64) {
		self.ctx.set_global_alpha(alpha);
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.begin_path();
		self.ctx.move_to(from.x, from.y);
		self.ctx.line_to(to.x, to.y);
		self.ctx.stroke();
	}
}
