//! Tunable parameters for the particle sphere.
//!
//! Every artistic constant of the effect lives here with a documented default
//! (see `constants.rs`). Hosts override fields directly or through the
//! `with_*` helpers, then hand the config to
//! [`ParticleField::new`](crate::ParticleField::new), which validates it.

use crate::color::Rgba;
use crate::constants::*;
use crate::envelope::Envelope;
use crate::error::ConfigError;
use crate::projector::{CameraModel, Projector};
use glam::{Vec2, Vec3};
use std::ops::Range;

#[derive(Clone, Debug, PartialEq)]
pub struct SphereConfig {
    /// Number of live particles; constant for the lifetime of a field.
    pub particle_count: usize,
    /// Fraction of the spawn offset used as initial velocity.
    pub velocity_scale: f32,
    /// Ticks a fresh particle stays attached to the shell, sampled per particle.
    pub stuck_time: Range<f32>,
    pub attack: u32,
    pub hold: u32,
    pub decay: u32,
    /// Opacity at the envelope plateau.
    pub peak_alpha: f32,
    /// Constant vertical acceleration applied once a particle is free.
    pub gravity: f32,
    /// Per-axis half-width of the uniform acceleration jitter.
    pub accel_random_range: Vec3,
    /// Radians added to the turn angle each tick.
    pub turn_speed: f32,
    pub focal_length: f32,
    /// Particles rotating past this depth are culled before drawing.
    pub z_max_clip: f32,
    /// Depth at which the depth shading reaches zero.
    pub zero_alpha_depth: f32,
    pub sphere_center_z: f32,
    /// Disc radius at perspective scale 1.
    pub particle_radius: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub background: Rgba,
    pub camera: CameraModel,
    /// Radius of the shell new particles spawn on.
    pub sphere_radius: f32,
    pub projection_scale: f32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            velocity_scale: DEFAULT_VELOCITY_SCALE,
            stuck_time: DEFAULT_STUCK_TIME,
            attack: DEFAULT_ATTACK,
            hold: DEFAULT_HOLD,
            decay: DEFAULT_DECAY,
            peak_alpha: DEFAULT_PEAK_ALPHA,
            gravity: DEFAULT_GRAVITY,
            accel_random_range: Vec3::from_array(DEFAULT_ACCEL_RANDOM_RANGE),
            turn_speed: DEFAULT_TURN_SPEED,
            focal_length: DEFAULT_FOCAL_LENGTH,
            z_max_clip: DEFAULT_Z_MAX_CLIP,
            zero_alpha_depth: DEFAULT_ZERO_ALPHA_DEPTH,
            sphere_center_z: DEFAULT_SPHERE_CENTER_Z,
            particle_radius: DEFAULT_PARTICLE_RADIUS,
            saturation: DEFAULT_SATURATION,
            lightness: DEFAULT_LIGHTNESS,
            background: Rgba::BLACK,
            camera: CameraModel::Perspective,
            sphere_radius: DEFAULT_SPHERE_RADIUS,
            projection_scale: DEFAULT_PROJECTION_SCALE,
        }
    }
}

impl SphereConfig {
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    pub fn with_sphere_radius(mut self, radius: f32) -> Self {
        self.sphere_radius = radius;
        self
    }

    pub fn with_projection_scale(mut self, scale: f32) -> Self {
        self.projection_scale = scale;
        self
    }

    pub fn with_camera(mut self, camera: CameraModel) -> Self {
        self.camera = camera;
        self
    }

    /// Check every field the simulation divides by or iterates over.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if !(self.focal_length.is_finite() && self.focal_length > 0.0) {
            return Err(ConfigError::FocalLength(self.focal_length));
        }
        if !(self.z_max_clip < self.focal_length) {
            return Err(ConfigError::ClipBehindCamera {
                z_max_clip: self.z_max_clip,
                focal_length: self.focal_length,
            });
        }
        if !self.zero_alpha_depth.is_finite() || self.zero_alpha_depth == 0.0 {
            return Err(ConfigError::ZeroAlphaDepth(self.zero_alpha_depth));
        }
        if !(self.stuck_time.start >= 0.0
            && self.stuck_time.start < self.stuck_time.end
            && self.stuck_time.end.is_finite())
        {
            return Err(ConfigError::StuckTime {
                start: self.stuck_time.start,
                end: self.stuck_time.end,
            });
        }
        for (name, value) in [
            ("velocity scale", self.velocity_scale),
            ("gravity", self.gravity),
            ("accel random range x", self.accel_random_range.x),
            ("accel random range y", self.accel_random_range.y),
            ("accel random range z", self.accel_random_range.z),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        if self.envelope().total() == 0 {
            return Err(ConfigError::EmptyEnvelope);
        }
        if !(self.peak_alpha > 0.0 && self.peak_alpha <= 1.0) {
            return Err(ConfigError::PeakAlpha(self.peak_alpha));
        }
        if !(self.turn_speed.is_finite() && self.turn_speed > 0.0) {
            return Err(ConfigError::TurnSpeed(self.turn_speed));
        }
        if !SPHERE_RADIUS_RANGE.contains(&self.sphere_radius) {
            return Err(ConfigError::SphereRadius(self.sphere_radius));
        }
        if !PROJECTION_SCALE_RANGE.contains(&self.projection_scale) {
            return Err(ConfigError::ProjectionScale(self.projection_scale));
        }
        if !(self.particle_radius.is_finite() && self.particle_radius > 0.0) {
            return Err(ConfigError::ParticleRadius(self.particle_radius));
        }
        Ok(())
    }

    /// Opacity envelope every new particle starts with.
    pub fn envelope(&self) -> Envelope {
        Envelope::new(self.attack, self.hold, self.decay, self.peak_alpha)
    }

    /// Scene-space centre of the sphere.
    #[inline]
    pub fn sphere_center(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.sphere_center_z)
    }

    /// Projector for the current camera settings and drawing-surface size.
    pub fn projector(&self, viewport: Vec2) -> Projector {
        Projector {
            model: self.camera,
            focal_length: self.focal_length,
            scale: self.projection_scale,
            center: viewport * 0.5,
            sphere_center_z: self.sphere_center_z,
        }
    }
}

/// Clamp a radius slider value into its domain.
#[inline]
pub fn clamp_sphere_radius(value: f32) -> f32 {
    value.clamp(*SPHERE_RADIUS_RANGE.start(), *SPHERE_RADIUS_RANGE.end())
}

/// Snap a scale slider value to its step and clamp it into its domain.
#[inline]
pub fn snap_projection_scale(value: f32) -> f32 {
    let snapped = (value / PROJECTION_SCALE_STEP).round() * PROJECTION_SCALE_STEP;
    snapped.clamp(
        *PROJECTION_SCALE_RANGE.start(),
        *PROJECTION_SCALE_RANGE.end(),
    )
}
