//! Leptos component wrapping the particle field canvas.
//!
//! The component creates a viewport-sized canvas and, once it is mounted,
//! builds the field and starts a `requestAnimationFrame` loop. A window
//! `resize` listener keeps the canvas matched to the viewport. Unmounting
//! cancels the outstanding frame and removes the listener.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::frame_loop::FrameLoop;
use super::particles::ParticleField;
use super::render;
use super::types::FieldConfig;

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn browser_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// A running animation: the field, its drawing surface, and the two
/// callbacks registered with the browser.
///
/// Callbacks only hold a [`Weak`] back-reference, so dropping the last
/// [`Rc`] tears everything down.
struct Animation {
	field: RefCell<ParticleField>,
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	frame_loop: RefCell<FrameLoop>,
	animate: RefCell<Option<Closure<dyn FnMut()>>>,
	on_resize: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Animation {
	/// Sizes the canvas, builds the field and starts the loop.
	///
	/// Returns `None` when there is no window or no 2D context; the
	/// background is decorative, so that just means nothing is drawn.
	fn mount(canvas: HtmlCanvasElement, config: &FieldConfig) -> Option<Rc<Self>> {
		let window = web_sys::window()?;
		let (w, h) = viewport_size(&window)?;
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;

		let seed = config.seed.unwrap_or_else(browser_seed);
		let field = ParticleField::new(config, w, h, seed);
		info!(
			"particle-field: {} particles, {} connections, {}x{}",
			field.particles.len(),
			field.connections.len(),
			w,
			h
		);

		let anim = Rc::new(Self {
			field: RefCell::new(field),
			canvas,
			ctx,
			frame_loop: RefCell::new(FrameLoop::new()),
			animate: RefCell::new(None),
			on_resize: RefCell::new(None),
		});

		let weak: Weak<Self> = Rc::downgrade(&anim);
		*anim.on_resize.borrow_mut() = Some(Closure::new(move || {
			if let Some(anim) = weak.upgrade() {
				anim.resize();
			}
		}));
		if let Some(ref cb) = *anim.on_resize.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let weak: Weak<Self> = Rc::downgrade(&anim);
		*anim.animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(anim) = weak.upgrade() {
				anim.frame();
			}
		}));

		if anim.frame_loop.borrow_mut().start() {
			anim.request_frame();
		}
		Some(anim)
	}

	fn frame(&self) {
		if !self.frame_loop.borrow_mut().begin_frame() {
			return;
		}
		{
			let mut field = self.field.borrow_mut();
			field.step();
			render::render(&mut field, &self.ctx);
		}
		self.request_frame();
	}

	fn request_frame(&self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(ref cb) = *self.animate.borrow() {
			match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				Ok(id) => self.frame_loop.borrow_mut().scheduled(id),
				Err(e) => warn!("particle-field: requestAnimationFrame failed: {:?}", e),
			}
		}
	}

	fn resize(&self) {
		let Some((w, h)) = web_sys::window().as_ref().and_then(viewport_size) else {
			return;
		};
		self.canvas.set_width(w as u32);
		self.canvas.set_height(h as u32);
		self.field.borrow_mut().resize(w, h);
		debug!("particle-field: resized to {}x{}", w, h);
	}

	fn teardown(&self) {
		let pending = self.frame_loop.borrow_mut().stop();
		if let Some(window) = web_sys::window() {
			if let Some(id) = pending {
				let _ = window.cancel_animation_frame(id);
			}
			if let Some(cb) = self.on_resize.borrow_mut().take() {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		self.animate.borrow_mut().take();
		info!(
			"particle-field: stopped after {} frames",
			self.frame_loop.borrow().frames()
		);
	}
}

impl Drop for Animation {
	fn drop(&mut self) {
		self.teardown();
	}
}

/// Full-viewport decorative canvas with drifting, connected particles.
///
/// Pass a [`FieldConfig`] to override the defaults. The canvas ignores
/// pointer events and is hidden from assistive technology.
#[component]
pub fn ParticleFieldCanvas(#[prop(optional)] config: FieldConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let style = format!("opacity: {};", config.sanitized().canvas_opacity);
	let animation = StoredValue::new_local(None::<Rc<Animation>>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if animation.with_value(Option::is_some) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		match Animation::mount(canvas, &config) {
			Some(anim) => animation.set_value(Some(anim)),
			None => debug!("particle-field: no drawing surface, skipping animation"),
		}
	});

	on_cleanup(move || {
		// Dropping the last Rc runs the teardown.
		let _ = animation.try_update_value(Option::take);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field"
			style=style
			aria-hidden="true"
		/>
	}
}
