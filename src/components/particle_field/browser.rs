use std::cell::RefCell;
use std::rc::Rc;

use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::error::BackdropError;
use super::host::FrameHost;

/// Shared slot for a JS callback; cleared on teardown to break the Rc cycle.
pub type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// [`FrameHost`] backed by `requestAnimationFrame` and the window `resize` event.
pub struct BrowserHost {
	window: Window,
	frame: Callback,
	resize: Callback,
	frame_id: Option<i32>,
	observing: bool,
}

impl BrowserHost {
	/// Host on `window` that schedules `frame` and listens with `resize`.
	pub fn new(window: Window, frame: Callback, resize: Callback) -> Self {
		Self {
			window,
			frame,
			resize,
			frame_id: None,
			observing: false,
		}
	}
}

impl FrameHost for BrowserHost {
	fn request_frame(&mut self) {
		let frame = self.frame.borrow();
		let Some(cb) = frame.as_ref() else {
			return;
		};
		match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
			Ok(id) => self.frame_id = Some(id),
			Err(err) => error!("requestAnimationFrame failed: {}", BackdropError::from(err)),
		}
	}

	fn cancel_frame(&mut self) {
		if let Some(id) = self.frame_id.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
	}

	fn observe_resize(&mut self) {
		if self.observing {
			return;
		}
		let resize = self.resize.borrow();
		let Some(cb) = resize.as_ref() else {
			return;
		};
		match self
			.window
			.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
		{
			Ok(()) => self.observing = true,
			Err(err) => error!("adding resize listener failed: {}", BackdropError::from(err)),
		}
	}

	fn unobserve_resize(&mut self) {
		if !self.observing {
			return;
		}
		self.observing = false;
		if let Some(ref cb) = *self.resize.borrow() {
			let _ = self
				.window
				.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	}
}

/// Current `innerWidth` x `innerHeight` of `window`.
pub fn viewport_size(window: &Window) -> Result<(f64, f64), BackdropError> {
	let width = window.inner_width()?.as_f64().ok_or(BackdropError::Viewport)?;
	let height = window.inner_height()?.as_f64().ok_or(BackdropError::Viewport)?;
	Ok((width, height))
}

/// Size the canvas should take: the viewport when fullscreen, otherwise its parent's box.
pub fn measure(
	window: &Window,
	canvas: &HtmlCanvasElement,
	fullscreen: bool,
) -> Result<(f64, f64), BackdropError> {
	if fullscreen {
		return viewport_size(window);
	}
	Ok(canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.unwrap_or((0.0, 0.0)))
}
