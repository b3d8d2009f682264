use leptos::prelude::*;

use crate::components::particle_field::{BackdropConfig, ParticleBackdrop};

/// Landing page: the particle backdrop behind a short introduction.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<ParticleBackdrop config=BackdropConfig::default() fullscreen=true />
			<main class="page-content" style="position: relative; z-index: 2;">
				<header class="intro">
					<h1>"Hello, I build things for the web."</h1>
					<p class="subtitle">"Experience, publications, projects and writing."</p>
				</header>
			</main>
		</ErrorBoundary>
	}
}
