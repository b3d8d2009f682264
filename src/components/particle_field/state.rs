use rand::Rng;

use super::config::BackdropConfig;
use super::types::{Link, Particle};

/// The simulated particle set and the surface extent it bounces inside.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
	/// The fixed-size particle set.
	pub particles: Vec<Particle>,
	/// Surface width particles reflect against.
	pub width: f64,
	/// Surface height particles reflect against.
	pub height: f64,
}

/// Uniform sample from `[0, extent)`, or `0` for an empty extent.
fn sample_extent<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> f64 {
	if extent > 0.0 {
		rng.gen_range(0.0..extent)
	} else {
		0.0
	}
}

fn sample_speed<R: Rng + ?Sized>(rng: &mut R, max_speed: f64) -> f64 {
	if max_speed > 0.0 {
		rng.gen_range(-max_speed..max_speed)
	} else {
		0.0
	}
}

/// Advance one axis and bounce off `[0, extent]`.
///
/// The position is not pulled back inside, so a bounced particle may sit up
/// to one step outside the surface for a single frame. Only a velocity that
/// still points outward is negated, which lets a particle stranded outside
/// by a shrinking resize find its way back in.
fn advance(pos: &mut f64, vel: &mut f64, extent: f64) {
	*pos += *vel;
	if (*pos < 0.0 && *vel < 0.0) || (*pos > extent && *vel > 0.0) {
		*vel = -*vel;
	}
}

impl ParticleField {
	/// Scatter `config.particle_count` particles uniformly over a `width` x `height` surface.
	pub fn new<R: Rng + ?Sized>(
		config: &BackdropConfig,
		width: f64,
		height: f64,
		rng: &mut R,
	) -> Self {
		let particles = (0..config.particle_count)
			.map(|_| Particle {
				x: sample_extent(rng, width),
				y: sample_extent(rng, height),
				vx: sample_speed(rng, config.max_speed),
				vy: sample_speed(rng, config.max_speed),
				radius: config.particle_radius,
			})
			.collect();

		Self {
			particles,
			width,
			height,
		}
	}

	/// Field over an explicit particle set.
	pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
		Self {
			particles,
			width,
			height,
		}
	}

	/// One frame of motion: integrate velocity, then reflect at the edges.
	pub fn step(&mut self) {
		let (width, height) = (self.width, self.height);
		for p in &mut self.particles {
			advance(&mut p.x, &mut p.vx, width);
			advance(&mut p.y, &mut p.vy, height);
		}
	}

	/// Record a new surface extent. Particles keep their position and velocity.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Every unordered pair closer than `link_distance`, visited as `(a, b)` with `a < b`.
	pub fn links<'a>(&'a self, config: &'a BackdropConfig) -> impl Iterator<Item = Link> + 'a {
		let n = self.particles.len();
		(0..n)
			.flat_map(move |a| (a + 1..n).map(move |b| (a, b)))
			.filter_map(move |(a, b)| {
				let distance = self.particles[a].distance_to(&self.particles[b]);
				(distance < config.link_distance).then(|| Link {
					a,
					b,
					distance,
					alpha: config.link_opacity(distance),
				})
			})
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;

	use super::*;

	fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			x,
			y,
			vx,
			vy,
			radius: 2.5,
		}
	}

	fn single(p: Particle) -> ParticleField {
		ParticleField::from_particles(vec![p], 800.0, 600.0)
	}

	#[test]
	fn reflects_off_left_edge() {
		let mut field = single(particle(0.0, 300.0, -0.2, 0.0));
		field.step();
		assert!(field.particles[0].vx > 0.0);
		assert_eq!(field.particles[0].vy, 0.0);
	}

	#[test]
	fn reflects_off_right_edge() {
		let mut field = single(particle(800.0, 300.0, 0.2, 0.0));
		field.step();
		assert!(field.particles[0].vx < 0.0);
	}

	#[test]
	fn reflects_off_top_and_bottom_independently() {
		let mut field = ParticleField::from_particles(
			vec![
				particle(400.0, 0.0, 0.1, -0.2),
				particle(400.0, 600.0, 0.1, 0.2),
			],
			800.0,
			600.0,
		);
		field.step();
		assert!(field.particles[0].vy > 0.0);
		assert!(field.particles[1].vy < 0.0);
		// x axis untouched by a y bounce
		assert_eq!(field.particles[0].vx, 0.1);
		assert_eq!(field.particles[1].vx, 0.1);
	}

	#[test]
	fn bounce_keeps_speed_and_overshoots_one_frame() {
		let mut field = single(particle(0.1, 300.0, -0.25, 0.0));
		field.step();
		let p = field.particles[0];
		assert!(p.x < 0.0, "position is not clamped on the bounce frame");
		assert_eq!(p.vx, 0.25);

		field.step();
		assert!(field.particles[0].x >= 0.0);
	}

	#[test]
	fn particle_inside_is_never_reflected() {
		let mut field = single(particle(400.0, 300.0, 0.25, -0.25));
		for _ in 0..10 {
			field.step();
		}
		let p = field.particles[0];
		assert_eq!((p.vx, p.vy), (0.25, -0.25));
	}

	#[test]
	fn stranded_particle_drifts_back_after_shrink() {
		let mut field = single(particle(790.0, 300.0, 0.2, 0.0));
		field.resize(700.0, 600.0);
		field.step();
		assert!(field.particles[0].vx < 0.0);

		for _ in 0..1000 {
			field.step();
		}
		assert!(field.particles[0].x <= 700.0);
	}

	#[test]
	fn link_threshold_is_strict() {
		let config = BackdropConfig::default();
		let field = ParticleField::from_particles(
			vec![particle(0.0, 0.0, 0.0, 0.0), particle(150.0, 0.0, 0.0, 0.0)],
			800.0,
			600.0,
		);
		assert_eq!(field.links(&config).count(), 0);
	}

	#[test]
	fn link_alpha_falls_off_with_distance() {
		let config = BackdropConfig::default();
		let near = ParticleField::from_particles(
			vec![particle(0.0, 0.0, 0.0, 0.0), particle(0.001, 0.0, 0.0, 0.0)],
			800.0,
			600.0,
		);
		let far = ParticleField::from_particles(
			vec![particle(0.0, 0.0, 0.0, 0.0), particle(149.999, 0.0, 0.0, 0.0)],
			800.0,
			600.0,
		);

		let near: Vec<_> = near.links(&config).collect();
		let far: Vec<_> = far.links(&config).collect();
		assert_eq!(near.len(), 1);
		assert_eq!(far.len(), 1);
		assert!((near[0].alpha - (0.15 - 0.001 / 1500.0)).abs() < 1e-12);
		assert!((near[0].alpha - 0.1499).abs() < 1e-4);
		assert!((far[0].alpha - 0.05).abs() < 1e-4);
	}

	#[test]
	fn links_visit_each_pair_once() {
		let config = BackdropConfig::default();
		let field = ParticleField::from_particles(
			vec![
				particle(0.0, 0.0, 0.0, 0.0),
				particle(10.0, 0.0, 0.0, 0.0),
				particle(20.0, 0.0, 0.0, 0.0),
				particle(500.0, 500.0, 0.0, 0.0),
			],
			800.0,
			600.0,
		);
		let pairs: Vec<_> = field.links(&config).map(|l| (l.a, l.b)).collect();
		assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
	}

	#[test]
	fn zero_sized_surface_places_at_origin() {
		let mut rng = ChaCha8Rng::seed_from_u64(7);
		let field = ParticleField::new(&BackdropConfig::default(), 0.0, 0.0, &mut rng);
		assert_eq!(field.particles.len(), 30);
		assert!(field.particles.iter().all(|p| p.x == 0.0 && p.y == 0.0));
	}
}
