//! Rotating sphere of glowing particles, projected through a pinhole camera.
//!
//! Platform-free: the browser front end supplies a [`Surface`] and frame
//! scheduling, and feeds the two slider values into the [`ParticleField`].

pub mod color;
pub mod config;
pub mod constants;
pub mod envelope;
pub mod error;
pub mod field;
pub mod particle;
pub mod projector;
pub mod render;
pub mod spawn;

pub use color::*;
pub use config::*;
pub use constants::*;
pub use envelope::*;
pub use error::*;
pub use field::*;
pub use particle::*;
pub use projector::*;
pub use render::*;
pub use spawn::*;
