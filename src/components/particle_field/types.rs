//! Configuration input for the particle field component.

use log::warn;
use serde::Deserialize;

/// Upper bound on `count`. The connection table grows with the square of
/// the particle count, so larger overrides are clamped to this.
pub const MAX_PARTICLES: usize = 1000;

/// Tunable parameters for the particle field.
///
/// Every field has a default, so a partial JSON object such as
/// `{ "count": 120 }` is a valid override.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Number of particles created on mount, at most [`MAX_PARTICLES`].
	/// Never changes afterwards.
	pub count: usize,
	/// Distance at which a connection line fades out completely.
	pub link_distance: f64,
	/// Line opacity for two particles at the same position.
	pub link_max_opacity: f64,
	/// Width of the symmetric velocity range: each component is sampled
	/// from `[-speed / 2, speed / 2)`.
	pub speed: f64,
	pub size_min: f64,
	pub size_max: f64,
	pub opacity_min: f64,
	pub opacity_max: f64,
	/// Pulse phase advance per frame, sampled per particle. Always positive
	/// after [`FieldConfig::sanitized`].
	pub pulse_speed_min: f64,
	pub pulse_speed_max: f64,
	/// Hue range (degrees) for particles and connection lines.
	pub hue_min: f64,
	pub hue_max: f64,
	/// HSL saturation in percent.
	pub saturation: u8,
	/// HSL lightness in percent.
	pub lightness: u8,
	/// Amplitude of the sinusoidal opacity pulse.
	pub pulse_opacity: f64,
	/// Amplitude of the sinusoidal radius pulse.
	pub pulse_radius: f64,
	/// Shadow blur used for the particle glow.
	pub glow_blur: f64,
	pub line_width: f64,
	/// CSS opacity of the whole canvas element.
	pub canvas_opacity: f64,
	/// Fixed RNG seed. When unset a seed is drawn from the browser.
	pub seed: Option<u64>,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			count: 200,
			link_distance: 150.0,
			link_max_opacity: 0.3,
			speed: 0.5,
			size_min: 1.0,
			size_max: 4.0,
			opacity_min: 0.2,
			opacity_max: 0.7,
			pulse_speed_min: 0.02,
			pulse_speed_max: 0.04,
			hue_min: 280.0,
			hue_max: 340.0,
			saturation: 70,
			lightness: 60,
			pulse_opacity: 0.2,
			pulse_radius: 0.5,
			glow_blur: 10.0,
			line_width: 1.0,
			canvas_opacity: 0.4,
			seed: None,
		}
	}
}

/// Keeps `value` if it is a finite positive number, else `fallback`.
fn positive_or(value: f64, fallback: f64) -> f64 {
	if value.is_finite() && value > 0.0 { value } else { fallback }
}

/// Orders a range so that `min <= max`.
fn ordered(min: f64, max: f64) -> (f64, f64) {
	if min <= max { (min, max) } else { (max, min) }
}

impl FieldConfig {
	/// Returns a copy with inverted ranges swapped and degenerate values
	/// replaced by their defaults.
	///
	/// Hand-written overrides go through here before the field is built, so
	/// the sampling code can assume well-formed ranges.
	pub fn sanitized(&self) -> Self {
		let defaults = Self::default();
		let mut c = self.clone();

		if c.count > MAX_PARTICLES {
			warn!(
				"particle-field: count {} clamped to {}",
				c.count, MAX_PARTICLES
			);
			c.count = MAX_PARTICLES;
		}
		c.link_distance = positive_or(c.link_distance, defaults.link_distance);
		c.link_max_opacity = c.link_max_opacity.clamp(0.0, 1.0);
		c.speed = c.speed.abs();
		(c.size_min, c.size_max) = ordered(c.size_min.abs(), c.size_max.abs());
		(c.opacity_min, c.opacity_max) =
			ordered(c.opacity_min.clamp(0.0, 1.0), c.opacity_max.clamp(0.0, 1.0));
		(c.pulse_speed_min, c.pulse_speed_max) = ordered(
			positive_or(c.pulse_speed_min, defaults.pulse_speed_min),
			positive_or(c.pulse_speed_max, defaults.pulse_speed_max),
		);
		(c.hue_min, c.hue_max) = ordered(c.hue_min, c.hue_max);
		c.saturation = c.saturation.min(100);
		c.lightness = c.lightness.min(100);
		c.canvas_opacity = c.canvas_opacity.clamp(0.0, 1.0);
		c
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_json_keeps_defaults() {
		let config: FieldConfig = serde_json::from_str(r#"{ "count": 12, "seed": 7 }"#).unwrap();
		assert_eq!(config.count, 12);
		assert_eq!(config.seed, Some(7));
		assert_eq!(config.link_distance, 150.0);
		assert_eq!(config.link_max_opacity, 0.3);
	}

	#[test]
	fn empty_object_is_default() {
		let config: FieldConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config, FieldConfig::default());
	}

	#[test]
	fn sanitized_swaps_inverted_ranges() {
		let config = FieldConfig {
			size_min: 5.0,
			size_max: 2.0,
			hue_min: 340.0,
			hue_max: 280.0,
			..FieldConfig::default()
		}
		.sanitized();
		assert_eq!((config.size_min, config.size_max), (2.0, 5.0));
		assert_eq!((config.hue_min, config.hue_max), (280.0, 340.0));
	}

	#[test]
	fn sanitized_restores_bad_link_distance() {
		let config = FieldConfig {
			link_distance: 0.0,
			link_max_opacity: 3.0,
			..FieldConfig::default()
		}
		.sanitized();
		assert_eq!(config.link_distance, 150.0);
		assert_eq!(config.link_max_opacity, 1.0);
	}

	#[test]
	fn sanitized_forces_positive_pulse_speed() {
		let config = FieldConfig {
			pulse_speed_min: -0.04,
			pulse_speed_max: 0.0,
			..FieldConfig::default()
		}
		.sanitized();
		assert_eq!((config.pulse_speed_min, config.pulse_speed_max), (0.02, 0.04));

		let config = FieldConfig {
			pulse_speed_min: f64::NAN,
			pulse_speed_max: 0.01,
			..FieldConfig::default()
		}
		.sanitized();
		assert_eq!((config.pulse_speed_min, config.pulse_speed_max), (0.01, 0.02));
	}

	#[test]
	fn sanitized_caps_particle_count() {
		let huge = FieldConfig {
			count: 100_000,
			..FieldConfig::default()
		};
		assert_eq!(huge.sanitized().count, MAX_PARTICLES);
		assert_eq!(FieldConfig::default().sanitized().count, 200);
	}
}
