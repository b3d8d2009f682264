use super::types::Rgb;

/// Tunables for the particle backdrop. `Default` is the stock green-on-dark look.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackdropConfig {
	/// Number of particles allocated on start.
	pub particle_count: usize,
	/// Radius of every particle, in surface units.
	pub particle_radius: f64,
	/// Initial velocity is drawn per axis from `[-max_speed, max_speed)`.
	pub max_speed: f64,
	/// Accent colour shared by particles and links.
	pub color: Rgb,
	/// Fill opacity of particles.
	pub particle_alpha: f64,
	/// Pairs closer than this get a link.
	pub link_distance: f64,
	/// Link opacity at distance zero.
	pub link_alpha: f64,
	/// Link opacity drops by `distance / link_falloff`.
	pub link_falloff: f64,
	/// Stroke width of links.
	pub line_width: f64,
	/// CSS opacity of the whole canvas.
	pub opacity: f64,
	/// Fixed RNG seed. `None` seeds from `Math.random()` at mount time.
	pub seed: Option<u64>,
}

impl Default for BackdropConfig {
	fn default() -> Self {
		Self {
			particle_count: 30,
			particle_radius: 2.5,
			max_speed: 0.25,
			color: Rgb(74, 222, 128),
			particle_alpha: 1.0,
			link_distance: 150.0,
			link_alpha: 0.15,
			link_falloff: 1500.0,
			line_width: 2.0,
			opacity: 0.4,
			seed: None,
		}
	}
}

impl BackdropConfig {
	/// Opacity of a link between two particles `distance` apart.
	pub fn link_opacity(&self, distance: f64) -> f64 {
		self.link_alpha - distance / self.link_falloff
	}
}
