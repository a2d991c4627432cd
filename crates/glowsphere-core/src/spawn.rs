//! Random sampling used when particles are (re)spawned.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;
use std::ops::Range;

/// Random point on the surface of a sphere of `radius`, centred at the origin.
///
/// `phi = acos(U(-1, 1))` makes the distribution uniform over surface area;
/// sampling `phi` uniformly would crowd points at the poles.
pub fn random_on_sphere<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let theta = rng.gen_range(0.0..TAU);
    let phi = rng.gen_range(-1.0f32..=1.0).acos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    Vec3::new(
        radius * sin_phi * theta.cos(),
        radius * sin_phi * theta.sin(),
        radius * cos_phi,
    )
}

/// Uniform jitter in `[-range, range]` on each axis.
pub fn random_jitter<R: Rng + ?Sized>(rng: &mut R, range: Vec3) -> Vec3 {
    Vec3::new(
        range.x * rng.gen_range(-1.0f32..=1.0),
        range.y * rng.gen_range(-1.0f32..=1.0),
        range.z * rng.gen_range(-1.0f32..=1.0),
    )
}

#[inline]
pub fn random_stuck_time<R: Rng + ?Sized>(rng: &mut R, range: &Range<f32>) -> f32 {
    rng.gen_range(range.clone())
}
