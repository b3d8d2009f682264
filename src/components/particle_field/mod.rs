//! Animated particle field with proximity links, drawn as a page backdrop.

mod browser;
mod component;
mod config;
mod error;
mod host;
mod render;
mod state;
mod surface;
mod types;

pub use browser::BrowserHost;
pub use component::ParticleBackdrop;
pub use config::BackdropConfig;
pub use error::BackdropError;
pub use host::{Backdrop, BackdropState, FrameHost};
pub use render::render;
pub use state::ParticleField;
pub use surface::Surface;
pub use types::{Link, Particle, Rgb};
