//! Smooth in-page scrolling and the scroll-to-top button.

use leptos::ev;
use leptos::prelude::*;
use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use super::icons::{Icon, IconKind};

/// Vertical scroll offset (px) past which the scroll-to-top button shows.
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;

pub fn should_show_scroll_top(scroll_y: f64) -> bool {
	scroll_y > SCROLL_TOP_THRESHOLD
}

/// Smoothly scrolls the element with the given id into view. Missing ids are ignored.
pub fn scroll_to_section(id: &str) {
	let Some(el) = document().get_element_by_id(id) else {
		debug!("landing: no section #{id} to scroll to");
		return;
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	el.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
	let options = ScrollToOptions::new();
	options.set_top(0.0);
	options.set_behavior(ScrollBehavior::Smooth);
	window().scroll_to_with_scroll_to_options(&options);
}

/// Floating button that appears once the page is scrolled down.
#[component]
pub fn ScrollTopButton() -> impl IntoView {
	let (show, set_show) = signal(false);

	let handle = window_event_listener(ev::scroll, move |_| {
		let y = window().scroll_y().unwrap_or(0.0);
		let visible = should_show_scroll_top(y);
		if show.get_untracked() != visible {
			set_show.set(visible);
		}
	});
	on_cleanup(move || handle.remove());

	view! {
		<Show when=move || show.get()>
			<button class="scroll-top" aria-label="Scroll to top" on:click=move |_| scroll_to_top()>
				<Icon kind=IconKind::ChevronUp class="icon" />
			</button>
		</Show>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn button_shows_past_threshold() {
		assert!(!should_show_scroll_top(0.0));
		assert!(!should_show_scroll_top(500.0));
		assert!(should_show_scroll_top(500.5));
		assert!(should_show_scroll_top(2400.0));
	}
}
