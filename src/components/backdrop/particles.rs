//! Pointer-reactive particle field.
//!
//! Every particle is anchored to a rest position. When the (smoothed)
//! pointer comes within the particle's activation radius, the particle
//! eases towards a point pushed away from the pointer, harder the closer
//! the pointer is. Otherwise it drifts back home. Fleeing eases faster
//! than returning.

use rand::Rng;

use super::config::{LinkConfig, MAX_PARTICLES, MotionConfig, SpawnConfig};
use super::point::Point;
use crate::components::theme::{BackdropPalette, Color};

/// A single anchored particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	rest: Point,
	/// Where the particle is drawn this frame.
	pub position: Point,
	pub radius: f64,
	/// Pointer distance below which the particle is pushed away.
	pub activation_radius: f64,
	pub color: Color,
	/// Fill alpha.
	pub opacity: f64,
}

impl Particle {
	/// Particle resting (and currently sitting) at `rest`.
	pub fn new(rest: Point, radius: f64, activation_radius: f64, color: Color, opacity: f64) -> Self {
		Self {
			rest,
			position: rest,
			radius,
			activation_radius,
			color,
			opacity,
		}
	}

	/// Random particle inside a `width × height` surface.
	pub fn spawn<R: Rng + ?Sized>(
		rng: &mut R,
		width: f64,
		height: f64,
		palette: &BackdropPalette,
		spawn: &SpawnConfig,
	) -> Self {
		let rest = Point::new(uniform(rng, 0.0, width), uniform(rng, 0.0, height));
		let radius = uniform(rng, spawn.radius.0, spawn.radius.1);
		let activation_radius = uniform(rng, spawn.activation_radius.0, spawn.activation_radius.1);
		let color = palette.dot(rng.gen_range(0..palette.dots.len()));
		let opacity = uniform(rng, spawn.opacity.0, spawn.opacity.1);
		Self::new(rest, radius, activation_radius, color, opacity)
	}

	/// Anchor position. Fixed for the particle's lifetime.
	pub fn rest(&self) -> Point {
		self.rest
	}

	/// Advance one frame towards the repelled target or back to rest.
	pub fn update(&mut self, pointer: Point, motion: &MotionConfig) {
		let offset = pointer - self.rest;
		let distance = offset.length();

		if distance < self.activation_radius {
			let force = (1.0 - distance / self.activation_radius) * motion.repulsion;
			let target = self.rest - offset * force;
			self.position = self.position.eased_towards(target, motion.flee_easing);
		} else {
			self.position = self.position.eased_towards(self.rest, motion.return_easing);
		}
	}
}

/// Uniform sample in `[lo, hi)`, or `lo` for an empty or unbounded range.
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
	if hi > lo && (hi - lo).is_finite() {
		rng.gen_range(lo..hi)
	} else {
		lo
	}
}

/// Number of particles for a surface of the given size.
///
/// One particle per `density` px², rounded up, then held within
/// `[min_particles, max_particles]` and never above [`MAX_PARTICLES`].
pub fn particle_count(width: f64, height: f64, spawn: &SpawnConfig) -> usize {
	let area = width.max(0.0) * height.max(0.0);
	let wanted = (area / spawn.density).ceil() as usize;
	wanted
		.max(spawn.min_particles)
		.min(spawn.max_particles)
		.min(MAX_PARTICLES)
}

/// Line segment between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	/// Index of the first particle.
	pub a: usize,
	/// Index of the second particle, always above `a`.
	pub b: usize,
	pub from: Point,
	pub to: Point,
	/// Stroke alpha, in `[0, MAX_LINK_ALPHA]`.
	pub alpha: f64,
}

/// All particles of one backdrop plus the link color picked at creation.
#[derive(Clone, Debug)]
pub struct ParticleField {
	particles: Vec<Particle>,
	link_color: Color,
}

impl ParticleField {
	/// Spawns [`particle_count`] particles over a `width × height` surface
	/// with colors from `palette`.
	pub fn new<R: Rng + ?Sized>(
		rng: &mut R,
		width: f64,
		height: f64,
		palette: &BackdropPalette,
		spawn: &SpawnConfig,
	) -> Self {
		let count = particle_count(width, height, spawn);
		let particles = (0..count)
			.map(|_| Particle::spawn(&mut *rng, width, height, palette, spawn))
			.collect();
		Self::from_particles(particles, palette.link)
	}

	/// Field made of the given particles, for callers that place them.
	pub fn from_particles(particles: Vec<Particle>, link_color: Color) -> Self {
		Self {
			particles,
			link_color,
		}
	}

	/// Particles in spawn order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether the field has no particles.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Stroke color for links, fixed at creation.
	pub fn link_color(&self) -> Color {
		self.link_color
	}

	/// Advances every particle one frame against `pointer`.
	pub fn step(&mut self, pointer: Point, motion: &MotionConfig) {
		for p in &mut self.particles {
			p.update(pointer, motion);
		}
	}

	/// Every unordered pair closer than `config.distance`, each reported once.
	///
	/// Quadratic in the particle count.
	pub fn links<'a>(&'a self, config: &'a LinkConfig) -> impl Iterator<Item = Link> + 'a {
		let particles = &self.particles;
		(0..particles.len()).flat_map(move |a| {
			((a + 1)..particles.len()).filter_map(move |b| {
				let (from, to) = (particles[a].position, particles[b].position);
				config
					.alpha_at(from.distance_to(to))
					.map(|alpha| Link {
						a,
						b,
						from,
						to,
						alpha,
					})
			})
		})
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn dot(rest: Point, activation_radius: f64) -> Particle {
		Particle::new(rest, 1.0, activation_radius, Color::rgb(0, 0, 0), 1.0)
	}

	#[test]
	fn count_follows_area_within_bounds() {
		let spawn = SpawnConfig::default();
		assert_eq!(particle_count(0.0, 0.0, &spawn), 60);
		assert_eq!(particle_count(1000.0, 2000.0, &spawn), 200);
		assert_eq!(particle_count(1000.0, 500.0, &spawn), 91);
		assert_eq!(particle_count(-50.0, 400.0, &spawn), 60);
	}

	#[test]
	fn count_never_exceeds_the_hard_cap() {
		let spawn = SpawnConfig {
			max_particles: 5000,
			..SpawnConfig::default()
		};
		assert_eq!(particle_count(4000.0, 4000.0, &spawn), MAX_PARTICLES);
	}

	#[test]
	fn huge_ranges_do_not_panic() {
		let spawn = SpawnConfig {
			radius: (-1e308, 1e308),
			opacity: (f64::NEG_INFINITY, 1.0),
			..SpawnConfig::default()
		};
		let mut rng = StdRng::seed_from_u64(5);
		let field = ParticleField::new(&mut rng, 300.0, 200.0, &BackdropPalette::light(), &spawn);
		assert_eq!(field.len(), 60);
		assert!(field.particles().iter().all(|p| p.radius == -1e308));
	}

	#[test]
	fn count_is_monotone_in_area() {
		let spawn = SpawnConfig::default();
		let mut last = 0;
		for side in (0..2000).step_by(25) {
			let n = particle_count(side as f64, side as f64, &spawn);
			assert!(n >= last, "count dropped at side {side}");
			assert!((60..=200).contains(&n));
			last = n;
		}
	}

	#[test]
	fn spawned_attributes_stay_in_range() {
		let mut rng = StdRng::seed_from_u64(7);
		let palette = BackdropPalette::dark();
		let spawn = SpawnConfig::default();
		let field = ParticleField::new(&mut rng, 1280.0, 720.0, &palette, &spawn);

		assert_eq!(field.len(), 168);
		assert_eq!(field.link_color(), palette.link);
		for p in field.particles() {
			assert!((0.0..1280.0).contains(&p.rest().x));
			assert!((0.0..720.0).contains(&p.rest().y));
			assert_eq!(p.position, p.rest());
			assert!((0.8..=2.6).contains(&p.radius));
			assert!((180.0..=360.0).contains(&p.activation_radius));
			assert!((0.3..=1.0).contains(&p.opacity));
			assert!(palette.dots.contains(&p.color));
		}
	}

	#[test]
	fn same_seed_same_field() {
		let palette = BackdropPalette::light();
		let spawn = SpawnConfig::default();
		let a = ParticleField::new(&mut StdRng::seed_from_u64(42), 800.0, 600.0, &palette, &spawn);
		let b = ParticleField::new(&mut StdRng::seed_from_u64(42), 800.0, 600.0, &palette, &spawn);
		assert_eq!(a.particles(), b.particles());
	}

	#[test]
	fn zero_sized_surface_still_spawns() {
		let mut rng = StdRng::seed_from_u64(1);
		let field = ParticleField::new(
			&mut rng,
			0.0,
			0.0,
			&BackdropPalette::light(),
			&SpawnConfig::default(),
		);
		assert_eq!(field.len(), 60);
		assert!(field.particles().iter().all(|p| p.rest() == Point::ORIGIN));
	}

	#[test]
	fn rest_position_never_moves() {
		let mut rng = StdRng::seed_from_u64(3);
		let motion = MotionConfig::default();
		let mut field = ParticleField::new(
			&mut rng,
			600.0,
			400.0,
			&BackdropPalette::light(),
			&SpawnConfig::default(),
		);
		let rests: Vec<Point> = field.particles().iter().map(Particle::rest).collect();

		for i in 0..500 {
			let t = i as f64 * 0.05;
			field.step(Point::new(300.0 + 250.0 * t.cos(), 200.0 + 150.0 * t.sin()), &motion);
		}

		let after: Vec<Point> = field.particles().iter().map(Particle::rest).collect();
		assert_eq!(rests, after);
	}

	#[test]
	fn far_pointer_relaxes_geometrically() {
		let motion = MotionConfig::default();
		let rest = Point::new(100.0, 100.0);
		let mut p = dot(rest, 200.0);
		p.position = Point::new(160.0, 20.0);
		let far = Point::new(1000.0, 1000.0);

		let mut gap = p.position.distance_to(rest);
		for _ in 0..10 {
			p.update(far, &motion);
			let next = p.position.distance_to(rest);
			assert!((next - gap * 0.95).abs() < 1e-9);
			gap = next;
		}
		for _ in 0..600 {
			p.update(far, &motion);
		}
		assert!(p.position.distance_to(rest) < 1e-9);
	}

	#[test]
	fn held_pointer_settles_on_repelled_point() {
		let motion = MotionConfig::default();
		let rest = Point::new(200.0, 200.0);
		let mut p = dot(rest, 200.0);
		let pointer = Point::new(250.0, 200.0);

		for _ in 0..400 {
			p.update(pointer, &motion);
		}

		// force = (1 - 50/200) * 0.4 = 0.3, target = rest - (50, 0) * 0.3
		let expected = Point::new(185.0, 200.0);
		assert!(p.position.distance_to(expected) < 1e-9);
		assert!(p.position.distance_to(rest) > 14.0);
	}

	#[test]
	fn flee_step_covers_fifteen_percent() {
		let motion = MotionConfig::default();
		let rest = Point::new(0.0, 0.0);
		let mut p = dot(rest, 100.0);

		p.update(Point::new(0.0, 50.0), &motion);

		// force = 0.5 * 0.4 = 0.2, target = (0, -10), first step 15% of that
		assert!(p.position.distance_to(Point::new(0.0, -1.5)) < 1e-12);
	}

	#[test]
	fn pointer_on_the_boundary_does_not_push() {
		let motion = MotionConfig::default();
		let mut p = dot(Point::ORIGIN, 100.0);
		p.position = Point::new(10.0, 0.0);

		p.update(Point::new(100.0, 0.0), &motion);

		assert!(p.position.distance_to(Point::new(9.5, 0.0)) < 1e-12);
	}

	#[test]
	fn links_only_join_close_pairs_once() {
		let c = Color::rgb(1, 2, 3);
		let field = ParticleField::from_particles(
			vec![
				dot(Point::new(0.0, 0.0), 200.0),
				dot(Point::new(60.0, 0.0), 200.0),
				dot(Point::new(160.0, 0.0), 200.0),
				dot(Point::new(0.0, 100.0), 200.0),
			],
			c,
		);
		let config = LinkConfig::default();
		let links: Vec<Link> = field.links(&config).collect();

		let pairs: Vec<(usize, usize)> = links.iter().map(|l| (l.a, l.b)).collect();
		// 0-1: 60 -> linked; 1-2: 100 -> not linked; 0-3: 100 -> not linked;
		// 1-3: ~116.6 -> not linked; 0-2 / 2-3 far apart.
		assert_eq!(pairs, vec![(0, 1)]);
		assert!((links[0].alpha - 0.16).abs() < 1e-12);
		assert_eq!(links[0].from, Point::new(0.0, 0.0));
		assert_eq!(links[0].to, Point::new(60.0, 0.0));
	}

	#[test]
	fn link_alpha_tracks_current_positions() {
		let mut field = ParticleField::from_particles(
			vec![
				dot(Point::new(0.0, 0.0), 10.0),
				dot(Point::new(150.0, 0.0), 10.0),
			],
			Color::rgb(0, 0, 0),
		);
		let config = LinkConfig::default();
		assert_eq!(field.links(&config).count(), 0);

		field.particles[1].position = Point::new(25.0, 0.0);
		let link = field.links(&config).next().unwrap();
		assert!((link.alpha - 0.3).abs() < 1e-12);
		assert!(link.alpha <= 0.4);
	}
}
