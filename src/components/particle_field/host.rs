use log::{debug, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::config::BackdropConfig;
use super::render;
use super::state::ParticleField;
use super::surface::Surface;

/// Scheduling services the environment provides to a running backdrop.
///
/// A request made with [`FrameHost::request_frame`] must eventually be answered
/// by exactly one call to [`Backdrop::on_frame`] unless it is cancelled first.
/// While resize observation is active the host forwards viewport changes to
/// [`Backdrop::on_resize`].
pub trait FrameHost {
	/// Ask for one frame callback before the next repaint.
	fn request_frame(&mut self);
	/// Drop the outstanding frame request, if any.
	fn cancel_frame(&mut self);
	/// Start forwarding viewport size changes.
	fn observe_resize(&mut self);
	/// Stop forwarding viewport size changes.
	fn unobserve_resize(&mut self);
}

/// Whether a [`Backdrop`] is animating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackdropState {
	/// No particles, no frame request, no resize observation.
	Stopped,
	/// Particles allocated and a frame request outstanding.
	Running,
}

/// Lifecycle driver for a particle field running against a [`FrameHost`].
///
/// The field only exists while running; stopping discards the whole set.
pub struct Backdrop<H: FrameHost> {
	host: H,
	config: BackdropConfig,
	rng: ChaCha8Rng,
	field: Option<ParticleField>,
}

impl<H: FrameHost> Backdrop<H> {
	/// A stopped backdrop whose particle placement is drawn from `seed`.
	pub fn new(host: H, config: BackdropConfig, seed: u64) -> Self {
		Self {
			host,
			config,
			rng: ChaCha8Rng::seed_from_u64(seed),
			field: None,
		}
	}

	/// Current lifecycle state.
	pub fn state(&self) -> BackdropState {
		if self.field.is_some() {
			BackdropState::Running
		} else {
			BackdropState::Stopped
		}
	}

	/// Configuration the backdrop was built with.
	pub fn config(&self) -> &BackdropConfig {
		&self.config
	}

	/// The live particle field, `None` while stopped.
	pub fn field(&self) -> Option<&ParticleField> {
		self.field.as_ref()
	}

	/// The scheduling host.
	pub fn host(&self) -> &H {
		&self.host
	}

	/// Mutable access to the scheduling host.
	pub fn host_mut(&mut self) -> &mut H {
		&mut self.host
	}

	/// Allocate the particle set for a `width` x `height` surface and begin animating.
	pub fn start(&mut self, width: f64, height: f64) {
		if self.field.is_some() {
			warn!("particle backdrop already running, ignoring start");
			return;
		}
		let field = ParticleField::new(&self.config, width, height, &mut self.rng);
		debug!(
			"particle backdrop started: {} particles on {}x{}",
			field.particles.len(),
			width,
			height
		);
		self.field = Some(field);
		self.host.observe_resize();
		self.host.request_frame();
	}

	/// Halt animation and release host registrations. Safe to call repeatedly.
	pub fn stop(&mut self) {
		if self.field.take().is_none() {
			return;
		}
		self.host.cancel_frame();
		self.host.unobserve_resize();
		debug!("particle backdrop stopped");
	}

	/// Advance, draw, and schedule the next frame. Ignored while stopped.
	pub fn on_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
		let Some(field) = self.field.as_mut() else {
			return;
		};
		field.step();
		render::render(field, &self.config, surface);
		self.host.request_frame();
	}

	/// Record a new surface size. Particles are left where they are.
	pub fn on_resize(&mut self, width: f64, height: f64) {
		if let Some(field) = self.field.as_mut() {
			debug!("particle backdrop resized to {}x{}", width, height);
			field.resize(width, height);
		}
	}
}
