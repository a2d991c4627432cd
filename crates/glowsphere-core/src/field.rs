//! The particle population and the shared rotation phase.
//!
//! `ParticleField` is the single owner of every particle and of the
//! user-controlled radius/scale settings. Each [`tick`](ParticleField::tick)
//! advances all particles with one shared rotation, emits a [`Sprite`] for
//! every particle that survives, and respawns the rest in their slots so the
//! population never changes size.

use crate::color::{hue_for, Hsla, Rgba};
use crate::config::{clamp_sphere_radius, snap_projection_scale, SphereConfig};
use crate::error::ConfigError;
use crate::particle::Particle;
use crate::projector::{depth_alpha_factor, Turn};
use crate::spawn::{random_on_sphere, random_stuck_time};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// A visible particle for the current frame, ready to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub slot: usize,
    pub position: Vec2,
    pub scale: f32,
    /// Envelope alpha times depth shading.
    pub alpha: f32,
    pub color: Rgba,
}

pub struct ParticleField<R = StdRng> {
    config: SphereConfig,
    particles: Vec<Particle>,
    turn_angle: f32,
    viewport: Vec2,
    rng: R,
}

impl ParticleField<StdRng> {
    /// Field with a reproducible random stream.
    pub fn new(config: SphereConfig, viewport: Vec2, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, viewport, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleField<R> {
    /// Validate `config` and seed `config.particle_count` particles on the shell.
    pub fn with_rng(config: SphereConfig, viewport: Vec2, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut field = Self {
            particles: Vec::with_capacity(config.particle_count),
            config,
            turn_angle: 0.0,
            viewport,
            rng,
        };
        for _ in 0..field.config.particle_count {
            let p = field.spawn();
            field.particles.push(p);
        }
        log::info!(
            "[field] seeded {} particles radius={:.1} viewport={}x{}",
            field.particles.len(),
            field.config.sphere_radius,
            viewport.x,
            viewport.y
        );
        Ok(field)
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn config(&self) -> &SphereConfig {
        &self.config
    }

    #[inline]
    pub fn turn_angle(&self) -> f32 {
        self.turn_angle
    }

    #[inline]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Radius used by the next spawn. Live particles keep their own radius.
    pub fn set_sphere_radius(&mut self, radius: f32) {
        if !radius.is_finite() {
            log::warn!("[field] ignoring sphere radius {radius}");
            return;
        }
        let clamped = clamp_sphere_radius(radius);
        if clamped != radius {
            log::warn!("[field] sphere radius {radius} clamped to {clamped}");
        }
        self.config.sphere_radius = clamped;
        log::debug!("[field] sphere radius = {clamped}");
    }

    /// Zoom used from the next projection on.
    pub fn set_projection_scale(&mut self, scale: f32) {
        if !scale.is_finite() {
            log::warn!("[field] ignoring projection scale {scale}");
            return;
        }
        let snapped = snap_projection_scale(scale);
        if (snapped - scale).abs() > f32::EPSILON * 4.0 {
            log::warn!("[field] projection scale {scale} snapped to {snapped}");
        }
        self.config.projection_scale = snapped;
        log::debug!("[field] projection scale = {snapped}");
    }

    /// Follow a change in drawing-surface size; bounds and projection centre move with it.
    pub fn resize(&mut self, viewport: Vec2) {
        if viewport.x <= 0.0 || viewport.y <= 0.0 || !viewport.is_finite() {
            log::warn!("[field] ignoring viewport {}x{}", viewport.x, viewport.y);
            return;
        }
        if viewport != self.viewport {
            log::debug!("[field] viewport {}x{}", viewport.x, viewport.y);
            self.viewport = viewport;
        }
    }

    /// Advance one frame, appending a sprite per surviving particle to `out`.
    ///
    /// Runs in two passes: every slot is updated and judged first, then the
    /// culled slots are respawned. Respawned particles are not drawn until the
    /// next tick.
    pub fn tick(&mut self, out: &mut Vec<Sprite>) {
        self.turn_angle = (self.turn_angle + self.config.turn_speed) % TAU;
        let turn = Turn::from_angle(self.turn_angle);
        let projector = self.config.projector(self.viewport);
        let jitter = self.config.accel_random_range;
        let viewport = self.viewport;

        let mut culled: SmallVec<[usize; 32]> = SmallVec::new();
        for (slot, p) in self.particles.iter_mut().enumerate() {
            let proj = p.update(turn, &projector, jitter, &mut self.rng);
            if p.is_dead()
                || !on_surface(proj.screen, viewport)
                || proj.rotated_z > self.config.z_max_clip
            {
                culled.push(slot);
                continue;
            }
            let alpha = depth_alpha_factor(proj.rotated_z, self.config.zero_alpha_depth) * p.alpha();
            let color = Hsla {
                hue: hue_for(p.age(), slot),
                saturation: self.config.saturation,
                lightness: self.config.lightness,
                alpha,
            }
            .to_rgba();
            out.push(Sprite {
                slot,
                position: proj.screen,
                scale: proj.scale,
                alpha,
                color,
            });
        }

        if !culled.is_empty() {
            log::trace!("[field] respawning {} of {}", culled.len(), self.particles.len());
        }
        for slot in culled {
            self.particles[slot] = self.spawn();
        }
    }

    /// New particle on the shell at the current radius, drifting outwards.
    pub fn spawn(&mut self) -> Particle {
        let offset = random_on_sphere(&mut self.rng, self.config.sphere_radius);
        let stuck_time = random_stuck_time(&mut self.rng, &self.config.stuck_time);
        Particle::new(
            self.config.sphere_center() + offset,
            offset * self.config.velocity_scale,
            Vec3::new(0.0, self.config.gravity, 0.0),
            stuck_time,
            self.config.envelope(),
        )
    }
}

#[inline]
fn on_surface(p: Vec2, viewport: Vec2) -> bool {
    p.x >= 0.0 && p.x <= viewport.x && p.y >= 0.0 && p.y <= viewport.y
}
