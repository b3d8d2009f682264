use std::f64::consts::PI;

use log::debug;
use web_sys::CanvasRenderingContext2d;

use super::error::BackdropError;
use super::types::Rgb;

/// The drawing capabilities the backdrop needs from its host.
pub trait Surface {
	/// Erase the rectangle `(0, 0, width, height)`.
	fn clear(&mut self, width: f64, height: f64);

	/// Fill a circle centred on `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb, alpha: f64);

	/// Stroke a straight segment from `from` to `to`.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Rgb, alpha: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb, alpha: f64) {
		self.begin_path();
		if let Err(err) = self.arc(x, y, radius, 0.0, 2.0 * PI) {
			debug!("particle arc skipped: {}", BackdropError::from(err));
			return;
		}
		self.set_fill_style_str(&color.rgba(alpha));
		self.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Rgb, alpha: f64) {
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.set_stroke_style_str(&color.rgba(alpha));
		self.set_line_width(width);
		self.stroke();
	}
}
