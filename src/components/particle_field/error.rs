//! Failures while binding the backdrop to the browser.

use std::fmt;

use wasm_bindgen::JsValue;

/// Errors raised while acquiring the window, canvas context or viewport size.
#[derive(Debug)]
pub enum BackdropError {
	/// No global `window` (not running in a browser main thread).
	NoWindow,
	/// The canvas did not hand out a `2d` rendering context.
	NoContext,
	/// `innerWidth`/`innerHeight` were not numbers.
	Viewport,
	/// A DOM call threw.
	Js(String),
}

impl fmt::Display for BackdropError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BackdropError::NoWindow => write!(f, "no global window available"),
			BackdropError::NoContext => write!(f, "canvas has no 2d rendering context"),
			BackdropError::Viewport => write!(f, "viewport size is not a number"),
			BackdropError::Js(msg) => write!(f, "DOM call failed: {}", msg),
		}
	}
}

impl std::error::Error for BackdropError {}

impl From<JsValue> for BackdropError {
	fn from(value: JsValue) -> Self {
		BackdropError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
	}
}
