use super::config::BackdropConfig;
use super::state::ParticleField;
use super::surface::Surface;

/// Paint one frame of `field`: clear, particles, then proximity links on top.
pub fn render<S: Surface + ?Sized>(field: &ParticleField, config: &BackdropConfig, surface: &mut S) {
	surface.clear(field.width, field.height);
	draw_particles(field, config, surface);
	draw_links(field, config, surface);
}

fn draw_particles<S: Surface + ?Sized>(field: &ParticleField, config: &BackdropConfig, surface: &mut S) {
	for p in &field.particles {
		surface.fill_circle(p.x, p.y, p.radius, config.color, config.particle_alpha);
	}
}

fn draw_links<S: Surface + ?Sized>(field: &ParticleField, config: &BackdropConfig, surface: &mut S) {
	for link in field.links(config) {
		let (p1, p2) = (&field.particles[link.a], &field.particles[link.b]);
		surface.stroke_line(
			(p1.x, p1.y),
			(p2.x, p2.y),
			config.line_width,
			config.color,
			link.alpha,
		);
	}
}
