use leptos::prelude::*;

use crate::components::network_background::NetworkBackground;

/// Default Home Page
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

			<div class="hero" style="position: relative; min-height: 100vh; overflow: hidden;">
				<NetworkBackground node_count=40 opacity=0.3 pause_when_hidden=true />
				<div class="hero-overlay">
					<h1>"Connected infrastructure"</h1>
					<p class="subtitle">"Nodes drift, links follow, and every arrival sparks."</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
