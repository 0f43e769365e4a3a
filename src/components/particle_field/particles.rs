//! Drifting particles and the proximity lines between them.
//!
//! The field owns a fixed set of particles plus one [`Connection`] for every
//! unordered pair. Both sets are built once and only their contents change
//! from frame to frame. Motion is toroidal: a particle leaving one edge of
//! the viewport re-enters from the opposite edge.

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::theme::Hsl;
use super::types::FieldConfig;

/// A single drifting point.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub speed_x: f64,
	pub speed_y: f64,
	/// Base radius before pulsing.
	pub size: f64,
	pub hue: f64,
	/// Base opacity before pulsing.
	pub opacity: f64,
	/// Pulse phase in radians, advanced every frame.
	pub pulse: f64,
	pub pulse_speed: f64,
}

impl Particle {
	/// A particle at rest with the default look, for placing by hand.
	pub fn at(x: f64, y: f64) -> Self {
		Self {
			x,
			y,
			speed_x: 0.0,
			speed_y: 0.0,
			size: 2.0,
			hue: 300.0,
			opacity: 0.5,
			pulse: 0.0,
			pulse_speed: 0.03,
		}
	}

	pub fn with_velocity(self, speed_x: f64, speed_y: f64) -> Self {
		Self {
			speed_x,
			speed_y,
			..self
		}
	}

	fn random(rng: &mut SmallRng, config: &FieldConfig, width: f64, height: f64) -> Self {
		let half_speed = config.speed / 2.0;
		Self {
			x: sample(rng, 0.0, width),
			y: sample(rng, 0.0, height),
			speed_x: sample(rng, -half_speed, half_speed),
			speed_y: sample(rng, -half_speed, half_speed),
			size: sample(rng, config.size_min, config.size_max),
			hue: sample(rng, config.hue_min, config.hue_max),
			opacity: sample(rng, config.opacity_min, config.opacity_max),
			pulse: sample(rng, 0.0, TAU),
			pulse_speed: sample(rng, config.pulse_speed_min, config.pulse_speed_max),
		}
	}

	/// Opacity after the sinusoidal pulse, never negative.
	pub fn pulse_opacity(&self, config: &FieldConfig) -> f64 {
		(self.opacity + self.pulse.sin() * config.pulse_opacity).max(0.0)
	}

	/// Radius after the sinusoidal pulse, never negative.
	pub fn pulse_radius(&self, config: &FieldConfig) -> f64 {
		(self.size + self.pulse.sin() * config.pulse_radius).max(0.0)
	}

	pub fn color(&self, config: &FieldConfig) -> Hsl {
		Hsl::new(self.hue, config.saturation, config.lightness)
	}
}

/// A line between two particles, referenced by index with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	pub a: usize,
	pub b: usize,
	/// Opacity for the current frame; `0.0` means the line is not drawn.
	pub opacity: f64,
}

/// Uniform sample in `[min, max)`, tolerating an empty range.
fn sample(rng: &mut SmallRng, min: f64, max: f64) -> f64 {
	if max > min { rng.gen_range(min..max) } else { min }
}

/// Wraps a coordinate into `[0, extent)`.
///
/// A non-positive extent has no interior, so everything collapses to `0`.
pub fn wrap_axis(value: f64, extent: f64) -> f64 {
	if extent.is_nan() || extent <= 0.0 || !value.is_finite() {
		return 0.0;
	}
	let wrapped = value.rem_euclid(extent);
	// rem_euclid can round up to `extent` for tiny negative inputs
	if wrapped >= extent { 0.0 } else { wrapped }
}

/// Line opacity for two particles `distance` apart.
///
/// Falls off linearly from `max_opacity` at distance zero to nothing at
/// `threshold`.
pub fn connection_opacity(distance: f64, threshold: f64, max_opacity: f64) -> f64 {
	if distance < threshold {
		((threshold - distance) / threshold) * max_opacity
	} else {
		0.0
	}
}

/// The complete animated particle field.
///
/// Created once when the canvas mounts, then advanced by [`ParticleField::step`]
/// once per frame until the canvas is torn down.
pub struct ParticleField {
	pub config: FieldConfig,
	pub particles: Vec<Particle>,
	pub connections: Vec<Connection>,
	width: f64,
	height: f64,
	rng: SmallRng,
}

impl ParticleField {
	pub fn new(config: &FieldConfig, width: f64, height: f64, seed: u64) -> Self {
		let config = config.sanitized();
		let mut rng = SmallRng::seed_from_u64(seed);
		let particles = (0..config.count)
			.map(|_| Particle::random(&mut rng, &config, width, height))
			.collect();
		Self::build(config, width, height, particles, rng)
	}

	/// Builds a field around caller-placed particles. `config.count` is
	/// ignored in favour of `particles.len()`.
	pub fn from_particles(
		config: &FieldConfig,
		width: f64,
		height: f64,
		particles: Vec<Particle>,
		seed: u64,
	) -> Self {
		Self::build(
			config.sanitized(),
			width,
			height,
			particles,
			SmallRng::seed_from_u64(seed),
		)
	}

	fn build(
		config: FieldConfig,
		width: f64,
		height: f64,
		particles: Vec<Particle>,
		rng: SmallRng,
	) -> Self {
		let n = particles.len();
		let mut connections = Vec::with_capacity(n * n.saturating_sub(1) / 2);
		for a in 0..n {
			for b in (a + 1)..n {
				connections.push(Connection { a, b, opacity: 0.0 });
			}
		}

		let mut field = Self {
			config,
			particles,
			connections,
			width,
			height,
			rng,
		};
		field.update_connections();
		field
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	/// Advance every particle one frame, then refresh connection opacities.
	pub fn step(&mut self) {
		for p in &mut self.particles {
			p.x = wrap_axis(p.x + p.speed_x, self.width);
			p.y = wrap_axis(p.y + p.speed_y, self.height);
			p.pulse += p.pulse_speed;
		}
		self.update_connections();
	}

	fn update_connections(&mut self) {
		let (threshold, max_opacity) = (self.config.link_distance, self.config.link_max_opacity);
		for c in &mut self.connections {
			let (p1, p2) = (&self.particles[c.a], &self.particles[c.b]);
			let distance = (p1.x - p2.x).hypot(p1.y - p2.y);
			c.opacity = connection_opacity(distance, threshold, max_opacity);
		}
	}

	/// Track new viewport bounds. Positions are left alone; anything now
	/// outside the bounds is wrapped back in by its next step.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Fresh hue for a connection line, sampled every time a line is drawn.
	pub fn line_color(&mut self) -> Hsl {
		let hue = sample(&mut self.rng, self.config.hue_min, self.config.hue_max);
		Hsl::new(hue, self.config.saturation, self.config.lightness)
	}

	/// Connections that should be drawn this frame.
	pub fn visible_connections(&self) -> impl Iterator<Item = &Connection> {
		self.connections.iter().filter(|c| c.opacity > 0.0)
	}
}

#[cfg(test)]
mod tests {
	use super::super::types::MAX_PARTICLES;
	use super::*;

	const EPS: f64 = 1e-9;

	fn pair(a: (f64, f64), b: (f64, f64)) -> ParticleField {
		ParticleField::from_particles(
			&FieldConfig::default(),
			800.0,
			600.0,
			vec![Particle::at(a.0, a.1), Particle::at(b.0, b.1)],
			1,
		)
	}

	#[test]
	fn wraps_past_right_edge() {
		let mut field = ParticleField::from_particles(
			&FieldConfig::default(),
			800.0,
			600.0,
			vec![Particle::at(799.0, 300.0).with_velocity(2.0, 0.0)],
			1,
		);
		field.step();
		assert!((field.particles[0].x - 1.0).abs() < EPS);
		assert!((field.particles[0].y - 300.0).abs() < EPS);
	}

	#[test]
	fn wraps_past_top_and_left_edges() {
		let mut field = ParticleField::from_particles(
			&FieldConfig::default(),
			800.0,
			600.0,
			vec![Particle::at(0.1, 0.2).with_velocity(-0.5, -0.5)],
			1,
		);
		field.step();
		assert!((field.particles[0].x - 799.6).abs() < 1e-6);
		assert!((field.particles[0].y - 599.7).abs() < 1e-6);
	}

	#[test]
	fn positions_stay_in_bounds() {
		let config = FieldConfig {
			count: 60,
			speed: 40.0,
			..FieldConfig::default()
		};
		let mut field = ParticleField::new(&config, 320.0, 240.0, 42);
		for _ in 0..500 {
			field.step();
			for p in &field.particles {
				assert!((0.0..320.0).contains(&p.x), "x out of bounds: {}", p.x);
				assert!((0.0..240.0).contains(&p.y), "y out of bounds: {}", p.y);
			}
		}
	}

	#[test]
	fn initial_particles_sampled_within_ranges() {
		let config = FieldConfig::default();
		let field = ParticleField::new(&config, 800.0, 600.0, 3);
		for p in &field.particles {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((-0.25..0.25).contains(&p.speed_x));
			assert!((-0.25..0.25).contains(&p.speed_y));
			assert!((1.0..4.0).contains(&p.size));
			assert!((280.0..340.0).contains(&p.hue));
			assert!((0.2..0.7).contains(&p.opacity));
			assert!((0.0..TAU).contains(&p.pulse));
			assert!((0.02..0.04).contains(&p.pulse_speed));
		}
	}

	#[test]
	fn velocity_never_changes() {
		let mut field = ParticleField::new(&FieldConfig::default(), 800.0, 600.0, 9);
		let before: Vec<_> = field.particles.iter().map(|p| (p.speed_x, p.speed_y)).collect();
		for _ in 0..50 {
			field.step();
		}
		let after: Vec<_> = field.particles.iter().map(|p| (p.speed_x, p.speed_y)).collect();
		assert_eq!(before, after);
	}

	#[test]
	fn pulse_always_advances() {
		let mut field = ParticleField::new(&FieldConfig::default(), 800.0, 600.0, 11);
		let before: Vec<f64> = field.particles.iter().map(|p| p.pulse).collect();
		field.step();
		for (p, old) in field.particles.iter().zip(before) {
			assert!(p.pulse > old);
		}
	}

	#[test]
	fn same_seed_same_field() {
		let a = ParticleField::new(&FieldConfig::default(), 800.0, 600.0, 5);
		let b = ParticleField::new(&FieldConfig::default(), 800.0, 600.0, 5);
		assert_eq!(a.particles, b.particles);
	}

	#[test]
	fn counts_are_fixed() {
		let config = FieldConfig {
			count: 25,
			..FieldConfig::default()
		};
		let mut field = ParticleField::new(&config, 800.0, 600.0, 2);
		assert_eq!(field.particles.len(), 25);
		assert_eq!(field.connections.len(), 25 * 24 / 2);
		for _ in 0..100 {
			field.step();
		}
		field.resize(100.0, 100.0);
		field.step();
		assert_eq!(field.particles.len(), 25);
		assert_eq!(field.connections.len(), 300);
	}

	#[test]
	fn default_field_has_every_pair() {
		let field = ParticleField::new(&FieldConfig::default(), 800.0, 600.0, 0);
		assert_eq!(field.particles.len(), 200);
		assert_eq!(field.connections.len(), 19_900);
		assert!(field.connections.iter().all(|c| c.a < c.b));
	}

	#[test]
	fn tiny_fields_have_no_connections() {
		for count in [0, 1] {
			let config = FieldConfig {
				count,
				..FieldConfig::default()
			};
			let field = ParticleField::new(&config, 800.0, 600.0, 0);
			assert!(field.connections.is_empty());
		}
	}

	#[test]
	fn opacity_for_pair_at_hundred() {
		let field = pair((0.0, 0.0), (100.0, 0.0));
		assert!((field.connections[0].opacity - 0.1).abs() < EPS);
	}

	#[test]
	fn opacity_drops_to_zero_beyond_threshold() {
		let mut field = pair((0.0, 0.0), (100.0, 0.0));
		field.particles[1].x = 200.0;
		field.step();
		assert_eq!(field.connections[0].opacity, 0.0);
		assert_eq!(field.visible_connections().count(), 0);
	}

	#[test]
	fn opacity_at_threshold_is_zero() {
		assert_eq!(connection_opacity(150.0, 150.0, 0.3), 0.0);
		assert_eq!(connection_opacity(400.0, 150.0, 0.3), 0.0);
		assert!((connection_opacity(0.0, 150.0, 0.3) - 0.3).abs() < EPS);
	}

	#[test]
	fn opacity_decreases_with_distance() {
		let mut last = f64::INFINITY;
		let mut d = 0.0;
		while d < 150.0 {
			let o = connection_opacity(d, 150.0, 0.3);
			assert!(o > 0.0);
			assert!(o < last);
			last = o;
			d += 0.5;
		}
	}

	#[test]
	fn resize_leaves_positions_alone() {
		let mut field = pair((700.0, 500.0), (10.0, 10.0));
		field.resize(400.0, 300.0);
		assert_eq!((field.width(), field.height()), (400.0, 300.0));
		assert_eq!((field.particles[0].x, field.particles[0].y), (700.0, 500.0));
		field.step();
		assert!((0.0..400.0).contains(&field.particles[0].x));
		assert!((0.0..300.0).contains(&field.particles[0].y));
	}

	#[test]
	fn wrap_handles_degenerate_extent() {
		assert_eq!(wrap_axis(12.0, 0.0), 0.0);
		assert_eq!(wrap_axis(12.0, -5.0), 0.0);
		assert_eq!(wrap_axis(f64::NAN, 10.0), 0.0);
		assert_eq!(wrap_axis(-1e-20, 10.0), 0.0);
	}

	#[test]
	fn pulse_modulates_radius_and_opacity() {
		let config = FieldConfig::default();
		let mut p = Particle::at(0.0, 0.0);
		p.pulse = std::f64::consts::FRAC_PI_2;
		assert!((p.pulse_opacity(&config) - 0.7).abs() < EPS);
		assert!((p.pulse_radius(&config) - 2.5).abs() < EPS);
		p.opacity = 0.1;
		p.pulse = -std::f64::consts::FRAC_PI_2;
		assert_eq!(p.pulse_opacity(&config), 0.0);
	}

	#[test]
	fn line_color_stays_in_hue_range() {
		let mut field = pair((0.0, 0.0), (1.0, 1.0));
		for _ in 0..100 {
			let c = field.line_color();
			assert!((280.0..340.0).contains(&c.h));
			assert_eq!((c.s, c.l), (70, 60));
		}
	}

	#[test]
	fn pulse_advances_with_reversed_speed_override() {
		let config: FieldConfig =
			serde_json::from_str(r#"{ "count": 30, "pulse_speed_min": -0.04, "pulse_speed_max": -0.02 }"#)
				.unwrap();
		let mut field = ParticleField::new(&config, 400.0, 300.0, 9);
		for _ in 0..5 {
			let before: Vec<f64> = field.particles.iter().map(|p| p.pulse).collect();
			field.step();
			for (p, old) in field.particles.iter().zip(before) {
				assert!(p.pulse > old, "pulse went from {} to {}", old, p.pulse);
			}
		}
	}

	#[test]
	fn oversized_count_is_capped() {
		let config = FieldConfig {
			count: 100_000,
			..FieldConfig::default()
		};
		let field = ParticleField::new(&config, 400.0, 300.0, 3);
		assert_eq!(field.particles.len(), MAX_PARTICLES);
		assert_eq!(field.connections.len(), MAX_PARTICLES * (MAX_PARTICLES - 1) / 2);
	}
}
