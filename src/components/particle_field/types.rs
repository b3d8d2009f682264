/// An opaque RGB colour; opacity is supplied per draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
	/// CSS `rgba(...)` string for this colour at `alpha`.
	pub fn rgba(&self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
	}
}

/// A drifting point. Velocity is in surface units per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
	/// Horizontal velocity.
	pub vx: f64,
	/// Vertical velocity.
	pub vy: f64,
	/// Drawn radius, fixed for the particle's lifetime.
	pub radius: f64,
}

impl Particle {
	/// Euclidean distance between the two centres.
	pub fn distance_to(&self, other: &Particle) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}
}

/// A proximity edge between particles `a < b`, rebuilt every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	/// Index of the first particle.
	pub a: usize,
	/// Index of the second particle, always greater than `a`.
	pub b: usize,
	/// Distance between the two particles.
	pub distance: f64,
	/// Stroke opacity for this distance.
	pub alpha: f64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rgba_formats_css_colour() {
		assert_eq!(Rgb(74, 222, 128).rgba(0.15), "rgba(74, 222, 128, 0.15)");
		assert_eq!(Rgb(0, 0, 0).rgba(1.0), "rgba(0, 0, 0, 1)");
	}

	#[test]
	fn distance_is_euclidean() {
		let p = |x, y| Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 1.0,
		};
		assert_eq!(p(0.0, 0.0).distance_to(&p(3.0, 4.0)), 5.0);
	}
}
