//! Animated particle field background.
//!
//! Renders a fixed number of drifting points on a full-viewport canvas:
//! - Toroidal motion, so particles leaving one edge re-enter opposite
//! - A sinusoidal pulse on each particle's radius and opacity, with a glow
//! - Lines between every pair closer than a threshold, fading with distance
//!
//! # Example
//!
//! ```ignore
//! use lyvora_landing::{FieldConfig, ParticleFieldCanvas};
//!
//! let config = FieldConfig { count: 120, ..FieldConfig::default() };
//! view! { <ParticleFieldCanvas config=config /> }
//! ```

mod component;
mod frame_loop;
mod particles;
mod render;
pub mod theme;
mod types;

pub use component::ParticleFieldCanvas;
pub use frame_loop::{FrameLoop, LoopPhase};
pub use particles::{Connection, Particle, ParticleField, connection_opacity, wrap_axis};
pub use theme::Hsl;
pub use types::{FieldConfig, MAX_PARTICLES};
