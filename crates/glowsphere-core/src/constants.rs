use std::f32::consts::TAU;
use std::ops::{Range, RangeInclusive};

// Default tuning for the sphere effect. `SphereConfig::default()` is built from these.

// Population and spawning
pub const DEFAULT_PARTICLE_COUNT: usize = 300;
pub const DEFAULT_VELOCITY_SCALE: f32 = 0.002; // initial outward drift per unit of spawn offset
pub const DEFAULT_STUCK_TIME: Range<f32> = 90.0..110.0; // ticks before a particle starts moving

// Opacity envelope (ticks)
pub const DEFAULT_ATTACK: u32 = 50;
pub const DEFAULT_HOLD: u32 = 50;
pub const DEFAULT_DECAY: u32 = 100;
pub const DEFAULT_PEAK_ALPHA: f32 = 1.0;

// Motion
pub const DEFAULT_GRAVITY: f32 = 0.0;
pub const DEFAULT_ACCEL_RANDOM_RANGE: [f32; 3] = [0.1, 0.1, 0.1];
pub const DEFAULT_TURN_SPEED: f32 = TAU / 1200.0; // one revolution every 1200 ticks

// Camera
pub const DEFAULT_FOCAL_LENGTH: f32 = 320.0; // distance from the eye to the z = 0 plane
pub const DEFAULT_Z_MAX_CLIP: f32 = DEFAULT_FOCAL_LENGTH - 2.0;
pub const DEFAULT_ZERO_ALPHA_DEPTH: f32 = -750.0;
pub const DEFAULT_SPHERE_CENTER_Z: f32 = -143.0;
pub const MIN_DEPTH_GAP: f32 = 1e-3; // smallest allowed focal_length - rotated_z

// Drawing
pub const DEFAULT_PARTICLE_RADIUS: f32 = 1.8;
pub const DEFAULT_SATURATION: f32 = 0.8;
pub const DEFAULT_LIGHTNESS: f32 = 0.6;

// Slider domains
pub const SPHERE_RADIUS_RANGE: RangeInclusive<f32> = 20.0..=500.0;
pub const DEFAULT_SPHERE_RADIUS: f32 = 280.0;
pub const PROJECTION_SCALE_RANGE: RangeInclusive<f32> = 1.0..=2.0;
pub const PROJECTION_SCALE_STEP: f32 = 0.01;
pub const DEFAULT_PROJECTION_SCALE: f32 = 1.0;
