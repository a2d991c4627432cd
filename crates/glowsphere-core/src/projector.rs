//! Pinhole projection of scene-space points onto the drawing surface.
//!
//! The scene rotates about the vertical axis through the sphere centre. The
//! eye sits on the +z axis at `focal_length`, looking towards -z; points on the
//! z = 0 plane project at unit scale.

use crate::constants::MIN_DEPTH_GAP;
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraModel {
    #[default]
    Perspective,
    /// Constant scale regardless of depth.
    Orthographic,
}

/// Sine and cosine of the current turn angle, computed once per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Turn {
    pub sin: f32,
    pub cos: f32,
}

impl Turn {
    pub const IDENTITY: Turn = Turn { sin: 0.0, cos: 1.0 };

    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { sin, cos }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Surface coordinates in pixels.
    pub screen: Vec2,
    /// Size multiplier for things drawn at this point.
    pub scale: f32,
    /// Depth after rotation; larger is closer to the eye.
    pub rotated_z: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    pub model: CameraModel,
    pub focal_length: f32,
    /// User-controlled zoom applied on top of perspective.
    pub scale: f32,
    /// Surface point the scene origin projects to.
    pub center: Vec2,
    pub sphere_center_z: f32,
}

impl Projector {
    /// Rotate `p` about the sphere's vertical axis, returning `(rotated_x, rotated_z)`.
    #[inline]
    pub fn rotate(&self, p: Vec3, turn: Turn) -> (f32, f32) {
        let dz = p.z - self.sphere_center_z;
        let rotated_x = turn.cos * p.x + turn.sin * dz;
        let rotated_z = -turn.sin * p.x + turn.cos * dz + self.sphere_center_z;
        (rotated_x, rotated_z)
    }

    /// Scale factor for a point at depth `rotated_z`.
    ///
    /// The perspective denominator never drops below `MIN_DEPTH_GAP`, so a
    /// point at or behind the eye yields a large finite scale rather than an
    /// infinite or negative one.
    #[inline]
    pub fn scale_at(&self, rotated_z: f32) -> f32 {
        match self.model {
            CameraModel::Perspective => {
                let z = rotated_z.min(self.focal_length - MIN_DEPTH_GAP);
                self.scale * self.focal_length / (self.focal_length - z)
            }
            CameraModel::Orthographic => self.scale,
        }
    }

    pub fn project(&self, p: Vec3, turn: Turn) -> Projection {
        let (rotated_x, rotated_z) = self.rotate(p, turn);
        let scale = self.scale_at(rotated_z);
        Projection {
            screen: Vec2::new(rotated_x, p.y) * scale + self.center,
            scale,
            rotated_z,
        }
    }
}

/// Opacity multiplier fading particles out as they recede towards `zero_alpha_depth`.
#[inline]
pub fn depth_alpha_factor(rotated_z: f32, zero_alpha_depth: f32) -> f32 {
    (1.0 - rotated_z / zero_alpha_depth).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn projector() -> Projector {
        Projector {
            model: CameraModel::Perspective,
            focal_length: 320.0,
            scale: 1.0,
            center: Vec2::new(400.0, 300.0),
            sphere_center_z: -143.0,
        }
    }

    #[test]
    fn unit_scale_on_the_focal_plane() {
        let p = projector().project(Vec3::ZERO, Turn::IDENTITY);
        assert_eq!(p.scale, 1.0);
        assert_eq!(p.rotated_z, 0.0);
        assert_eq!(p.screen, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn half_scale_one_focal_length_behind() {
        let p = projector().project(Vec3::new(0.0, 0.0, -320.0), Turn::IDENTITY);
        assert!((p.scale - 0.5).abs() < 1e-6);
    }

    #[test]
    fn projection_scale_multiplies() {
        let mut pr = projector();
        pr.scale = 1.5;
        let p = pr.project(Vec3::new(10.0, -20.0, 0.0), Turn::IDENTITY);
        assert!((p.scale - 1.5).abs() < 1e-6);
        assert!((p.screen.x - 415.0).abs() < 1e-4);
        assert!((p.screen.y - 270.0).abs() < 1e-4);
    }

    #[test]
    fn quarter_turn_about_the_sphere_center() {
        let pr = projector();
        // A point in front of the centre swings out to +x after a quarter turn.
        let (x, z) = pr.rotate(Vec3::new(0.0, 0.0, -43.0), Turn::from_angle(FRAC_PI_2));
        assert!((x - 100.0).abs() < 1e-3);
        assert!((z - -143.0).abs() < 1e-3);
    }

    #[test]
    fn degenerate_depth_is_clamped() {
        let pr = projector();
        for z in [319.9995, 320.0, 500.0] {
            let s = pr.scale_at(z);
            assert!(s.is_finite() && s > 0.0, "scale {s} at z {z}");
        }
        let p = pr.project(Vec3::new(0.0, 0.0, 400.0), Turn::IDENTITY);
        assert_eq!(p.rotated_z, 400.0);
    }

    #[test]
    fn orthographic_ignores_depth() {
        let mut pr = projector();
        pr.model = CameraModel::Orthographic;
        assert_eq!(pr.scale_at(-500.0), 1.0);
        assert_eq!(pr.scale_at(200.0), 1.0);
    }

    #[test]
    fn depth_shading_clamps() {
        assert_eq!(depth_alpha_factor(0.0, -750.0), 1.0);
        assert_eq!(depth_alpha_factor(100.0, -750.0), 1.0);
        assert!((depth_alpha_factor(-375.0, -750.0) - 0.5).abs() < 1e-6);
        assert_eq!(depth_alpha_factor(-1000.0, -750.0), 0.0);
    }
}
