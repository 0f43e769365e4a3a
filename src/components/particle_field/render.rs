//! Canvas drawing for the particle field.
//!
//! Two passes per frame: glowing particles first, then the proximity lines
//! on top of them.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::particles::{Particle, ParticleField};
use super::types::FieldConfig;

/// Clears the surface and draws the current state of the field.
///
/// Takes the field mutably because every line gets a freshly sampled hue.
pub fn render(field: &mut ParticleField, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	for p in &field.particles {
		draw_particle(ctx, &field.config, p);
	}

	draw_connections(field, ctx);

	ctx.set_global_alpha(1.0);
}

fn draw_particle(ctx: &CanvasRenderingContext2d, config: &FieldConfig, p: &Particle) {
	let color = p.color(config).to_css();

	ctx.set_global_alpha(p.pulse_opacity(config));
	ctx.set_fill_style_str(&color);
	ctx.begin_path();
	let _ = ctx.arc(p.x, p.y, p.pulse_radius(config), 0.0, TAU);
	ctx.fill();

	// Second fill with a shadow gives the glow
	ctx.set_shadow_blur(config.glow_blur);
	ctx.set_shadow_color(&color);
	ctx.fill();
	ctx.set_shadow_blur(0.0);
}

fn draw_connections(field: &mut ParticleField, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_width(field.config.line_width);

	for i in 0..field.connections.len() {
		let c = field.connections[i];
		if c.opacity <= 0.0 {
			continue;
		}
		let color = field.line_color().to_css();
		let (p1, p2) = (&field.particles[c.a], &field.particles[c.b]);

		ctx.set_global_alpha(c.opacity);
		ctx.set_stroke_style_str(&color);
		ctx.begin_path();
		ctx.move_to(p1.x, p1.y);
		ctx.line_to(p2.x, p2.y);
		ctx.stroke();
	}
}
