//! Configuration errors.
//!
//! The simulation itself has no failure modes once running; everything that
//! can go wrong is caught when a [`SphereConfig`](crate::SphereConfig) is
//! validated.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("particle count must be at least 1")]
    EmptyPopulation,
    #[error("focal length must be positive and finite, got {0}")]
    FocalLength(f32),
    #[error("z clip {z_max_clip} must lie in front of the focal length {focal_length}")]
    ClipBehindCamera { z_max_clip: f32, focal_length: f32 },
    #[error("zero-alpha depth must be non-zero and finite, got {0}")]
    ZeroAlphaDepth(f32),
    #[error("stuck time range {start}..{end} is empty, negative or unbounded")]
    StuckTime { start: f32, end: f32 },
    #[error("envelope must last at least one tick")]
    EmptyEnvelope,
    #[error("peak alpha must be in (0, 1], got {0}")]
    PeakAlpha(f32),
    #[error("turn speed must be positive and finite, got {0}")]
    TurnSpeed(f32),
    #[error("sphere radius {0} is outside the slider range")]
    SphereRadius(f32),
    #[error("projection scale {0} is outside the slider range")]
    ProjectionScale(f32),
    #[error("particle radius must be positive and finite, got {0}")]
    ParticleRadius(f32),
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },
}
