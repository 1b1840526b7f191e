//! Frame rendering for the particle backdrop.
//!
//! Every frame is drawn from scratch, in order:
//! 1. Clear the whole surface
//! 2. Particles as filled dots
//! 3. Links between nearby particles on top

use super::config::LinkConfig;
use super::particles::ParticleField;
use super::surface::Surface;

/// Draws one complete frame of `field` onto `surface`.
pub fn render<S: Surface + ?Sized>(
	field: &ParticleField,
	surface: &mut S,
	links: &LinkConfig,
	width: f64,
	height: f64,
) {
	surface.clear(width, height);

	for p in field.particles() {
		surface.fill_circle(p.position, p.radius, p.color, p.opacity);
	}

	let color = field.link_color();
	for link in field.links(links) {
		surface.stroke_line(link.from, link.to, color, link.alpha, links.width);
	}
}
