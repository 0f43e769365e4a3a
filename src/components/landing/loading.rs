//! Splash overlay shown briefly after the page mounts.

use std::time::Duration;

use leptos::prelude::*;
use log::warn;

const LOADING_DURATION: Duration = Duration::from_millis(2000);

#[component]
pub fn LoadingOverlay() -> impl IntoView {
	let (loading, set_loading) = signal(true);

	match set_timeout_with_handle(move || set_loading.set(false), LOADING_DURATION) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(e) => {
			warn!("landing: could not schedule loading timeout: {:?}", e);
			set_loading.set(false);
		}
	}

	view! {
		<Show when=move || loading.get()>
			<div class="loading-overlay">
				<div class="loading-rings">
					<div class="ring ring-ping"></div>
					<div class="ring ring-spin"></div>
					<div class="ring ring-spin-slow"></div>
					<div class="ring ring-spin-slower"></div>
					<div class="ring ring-spin-reverse"></div>
				</div>
				<div class="loading-label">"INITIALIZING LYVORA"</div>
				<div class="loading-dots">
					<span class="dot dot-purple"></span>
					<span class="dot dot-pink" style="animation-delay: 0.1s"></span>
					<span class="dot dot-cyan" style="animation-delay: 0.2s"></span>
				</div>
			</div>
		</Show>
	}
}
