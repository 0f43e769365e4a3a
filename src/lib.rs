//! lyvora-landing: the Lyvora marketplace landing page.
//!
//! This crate provides a WASM-based single page: marketing sections and a
//! waitlist form rendered over an animated particle field background.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::landing::LandingPage;
pub use components::particle_field::{FieldConfig, ParticleField, ParticleFieldCanvas};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("lyvora: logging initialized");
}

/// Parses a particle field override. Missing keys keep their defaults.
pub fn parse_field_config(json: &str) -> Result<FieldConfig, serde_json::Error> {
	serde_json::from_str(json)
}

/// Load particle field overrides from a script element with id="particle-config".
/// Expected format: a JSON object with any subset of [`FieldConfig`] fields.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;
	if json_text.trim().is_empty() {
		return None;
	}

	match parse_field_config(&json_text) {
		Ok(config) => {
			info!("lyvora: loaded particle config ({} particles)", config.count);
			Some(config)
		}
		Err(e) => {
			warn!("lyvora: failed to parse particle config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Reads optional particle settings from the DOM and renders the page over
/// the particle background.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Lyvora | A New Era. A New Marketplace." />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta
			name="description"
			content="Lyvora is a decentralized marketplace for real-world products with crypto payments, smart contract escrow and on-chain reputation."
		/>

		<div class="landing-root">
			<ParticleFieldCanvas config=config />
			<LandingPage />
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn config_override_parses() {
		let config = parse_field_config(r#"{ "count": 80, "link_distance": 120.0 }"#).unwrap();
		assert_eq!(config.count, 80);
		assert_eq!(config.link_distance, 120.0);
		assert_eq!(config.hue_min, 280.0);
	}

	#[test]
	fn malformed_config_is_an_error() {
		assert!(parse_field_config("{ count: 80 }").is_err());
		assert!(parse_field_config(r#"{ "count": -1 }"#).is_err());
	}
}
