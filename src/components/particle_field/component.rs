use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::browser::{BrowserHost, Callback, measure};
use super::config::BackdropConfig;
use super::error::BackdropError;
use super::host::Backdrop;

/// Everything a mounted backdrop keeps alive between callbacks.
#[derive(Clone, Default)]
struct Mount {
	backdrop: Rc<RefCell<Option<Backdrop<BrowserHost>>>>,
	frame: Callback,
	resize: Callback,
}

fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// The configured seed if pinned, otherwise a fresh one from `fallback`.
fn choose_seed(config: &BackdropConfig, fallback: impl FnOnce() -> u64) -> u64 {
	config.seed.unwrap_or_else(fallback)
}

impl Mount {
	fn start(
		&self,
		canvas: HtmlCanvasElement,
		config: BackdropConfig,
		fullscreen: bool,
	) -> Result<(), BackdropError> {
		let window = web_sys::window().ok_or(BackdropError::NoWindow)?;
		let (w, h) = measure(&window, &canvas, fullscreen)?;
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let mut ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or(BackdropError::NoContext)?
			.dyn_into()
			.map_err(|_| BackdropError::NoContext)?;

		let host = BrowserHost::new(window, self.frame.clone(), self.resize.clone());
		let seed = choose_seed(&config, random_seed);
		*self.backdrop.borrow_mut() = Some(Backdrop::new(host, config, seed));

		let backdrop_anim = self.backdrop.clone();
		*self.frame.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut b) = *backdrop_anim.borrow_mut() {
				b.on_frame(&mut ctx);
			}
		}));

		let (backdrop_resize, canvas_resize) = (self.backdrop.clone(), canvas);
		*self.resize.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			match measure(&win, &canvas_resize, fullscreen) {
				Ok((nw, nh)) => {
					canvas_resize.set_width(nw as u32);
					canvas_resize.set_height(nh as u32);
					if let Some(ref mut b) = *backdrop_resize.borrow_mut() {
						b.on_resize(nw, nh);
					}
				}
				Err(err) => warn!("particle backdrop resize skipped: {}", err),
			}
		}));

		if let Some(ref mut b) = *self.backdrop.borrow_mut() {
			b.start(w, h);
		}
		Ok(())
	}

	/// Stop the animation, then drop the closures so nothing can call back into freed state.
	fn teardown(&self) {
		let backdrop = self.backdrop.borrow_mut().take();
		if let Some(mut b) = backdrop {
			b.stop();
		}
		self.frame.borrow_mut().take();
		self.resize.borrow_mut().take();
	}
}

/// Decorative animated particle field drawn on a `<canvas>` behind the page.
///
/// With `fullscreen` the canvas is pinned to the viewport and follows window
/// resizes; otherwise it takes the size of its parent element.
#[component]
pub fn ParticleBackdrop(
	#[prop(default = BackdropConfig::default())] config: BackdropConfig,
	#[prop(default = true)] fullscreen: bool,
	#[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mount = Mount::default();
	let mount_init = mount.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		mount_init.teardown();
		if let Err(err) = mount_init.start(canvas.into(), config, fullscreen) {
			error!("particle backdrop failed to start: {}", err);
		}
	});

	let mount = SendWrapper::new(mount);
	on_cleanup(move || mount.teardown());

	let style = if fullscreen {
		format!(
			"position: fixed; top: 0; left: 0; width: 100%; height: 100%; z-index: 1; \
			 opacity: {}; background-color: transparent; pointer-events: none;",
			config.opacity
		)
	} else {
		format!(
			"display: inline-block; width: 100%; height: 100%; opacity: {}; pointer-events: none;",
			config.opacity
		)
	};
	let class = match class {
		Some(extra) => format!("particle-backdrop {}", extra),
		None => "particle-backdrop".to_string(),
	};

	view! { <canvas node_ref=canvas_ref class=class style=style aria-hidden="true" /> }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::host::FrameHost;

	struct Idle;

	impl FrameHost for Idle {
		fn request_frame(&mut self) {}
		fn cancel_frame(&mut self) {}
		fn observe_resize(&mut self) {}
		fn unobserve_resize(&mut self) {}
	}

	#[test]
	fn pinned_seed_wins_over_fallback() {
		let config = BackdropConfig {
			seed: Some(42),
			..BackdropConfig::default()
		};
		assert_eq!(choose_seed(&config, || panic!("fallback must not run")), 42);
	}

	#[test]
	fn unpinned_seed_uses_fallback() {
		assert_eq!(choose_seed(&BackdropConfig::default(), || 7), 7);
	}

	#[test]
	fn pinned_seed_reproduces_layout() {
		let config = BackdropConfig {
			seed: Some(1234),
			..BackdropConfig::default()
		};
		let layout = || {
			let mut backdrop = Backdrop::new(Idle, config, choose_seed(&config, || 0));
			backdrop.start(800.0, 600.0);
			backdrop.field().map(|f| f.particles.clone())
		};
		assert_eq!(layout(), layout());
	}
}
