//! UI components.

pub mod landing;
pub mod particle_field;
