use leptos::prelude::*;

use crate::components::network_background::NetworkBackground;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found" style="position: relative; min-height: 100vh; overflow: hidden;">
			<NetworkBackground node_count=20 opacity=0.2 />
			<h1>"Uh oh!" <br /> "We couldn't find that page!"</h1>
		</div>
	}
}
