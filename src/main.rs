//! Browser entry point: installs logging and mounts the app on `<body>`.

// the remaining dependencies are consumed by the library crate
#![allow(unused_crate_dependencies)]

use particle_backdrop::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
