//! Reveal-on-scroll tracking.
//!
//! Every element carrying a `data-animate` attribute is watched by an
//! `IntersectionObserver`. The first time one scrolls into view its id is
//! recorded, and sections switch their hidden class for an entrance
//! animation. Ids are never removed, so an element animates once.

use std::collections::HashSet;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of an element that must be visible before it counts.
const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Class applied to a reveal target that has not been seen yet.
pub const HIDDEN_CLASS: &str = "is-hidden";

/// Ids of sections that have been on screen at least once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleSections(HashSet<String>);

impl VisibleSections {
	/// Records `id` as seen. Returns `true` if it was not seen before.
	pub fn mark(&mut self, id: &str) -> bool {
		if id.is_empty() || self.0.contains(id) {
			return false;
		}
		self.0.insert(id.to_string())
	}

	pub fn contains(&self, id: &str) -> bool {
		self.0.contains(id)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// Picks the entrance animation class once visible, the hidden class before.
pub fn reveal_class(visible: bool, animation: &'static str) -> &'static str {
	if visible { animation } else { HIDDEN_CLASS }
}

/// Reactive `class` value for an element inside section `id`: the static
/// `base` classes plus the reveal state.
pub fn reveal(
	sections: ReadSignal<VisibleSections>,
	id: &'static str,
	base: &'static str,
	animation: &'static str,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
	move || {
		let state = reveal_class(sections.with(|s| s.contains(id)), animation);
		format!("{base} {state}")
	}
}

/// The live observer and the callback it holds. Disconnects on drop.
struct SectionObserver {
	observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl SectionObserver {
	fn attach(set_visible: WriteSignal<VisibleSections>) -> Option<Self> {
		let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
			move |entries: js_sys::Array, _observer: IntersectionObserver| {
				for entry in entries.iter() {
					let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
						continue;
					};
					if !entry.is_intersecting() {
						continue;
					}
					let id = entry.target().id();
					set_visible.maybe_update(|s| s.mark(&id));
				}
			},
		);

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
		let observer =
			match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
			{
				Ok(o) => o,
				Err(e) => {
					warn!("landing: IntersectionObserver unavailable: {:?}", e);
					return None;
				}
			};

		let targets = document().query_selector_all("[data-animate]").ok()?;
		for i in 0..targets.length() {
			if let Some(el) = targets.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
				observer.observe(&el);
			}
		}
		debug!("landing: observing {} sections", targets.length());

		Some(Self {
			observer,
			_callback: callback,
		})
	}
}

impl Drop for SectionObserver {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

/// Starts watching all `[data-animate]` elements once the view is mounted.
/// The observer is disconnected when the calling component is cleaned up.
pub fn use_section_visibility() -> ReadSignal<VisibleSections> {
	let (visible, set_visible) = signal(VisibleSections::default());
	let observer = StoredValue::new_local(None::<SectionObserver>);

	Effect::new(move |_| {
		if observer.with_value(Option::is_some) {
			return;
		}
		if let Some(o) = SectionObserver::attach(set_visible) {
			observer.set_value(Some(o));
		}
	});

	on_cleanup(move || {
		let _ = observer.try_update_value(Option::take);
	});

	visible
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mark_is_monotonic() {
		let mut s = VisibleSections::default();
		assert!(s.is_empty());
		assert!(s.mark("hero"));
		assert!(!s.mark("hero"));
		assert!(s.mark("faq"));
		assert!(s.contains("hero"));
		assert!(s.contains("faq"));
		assert_eq!(s.len(), 2);
	}

	#[test]
	fn anonymous_elements_are_ignored() {
		let mut s = VisibleSections::default();
		assert!(!s.mark(""));
		assert!(s.is_empty());
	}

	#[test]
	fn reveal_class_switches_once_visible() {
		assert_eq!(reveal_class(false, "animate-fade-in-up"), HIDDEN_CLASS);
		assert_eq!(reveal_class(true, "animate-fade-in-up"), "animate-fade-in-up");
	}
}
