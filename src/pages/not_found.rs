use leptos::prelude::*;

use crate::components::particle_field::ParticleBackdrop;

/// 404 fallback for unknown routes.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<ParticleBackdrop />
		<main class="page-content" style="position: relative; z-index: 2;">
			<h1>"Page not found"</h1>
			<a href="/">"Back home"</a>
		</main>
	}
}
