use crate::envelope::Envelope;
use crate::projector::{Projection, Projector, Turn};
use crate::spawn::random_jitter;
use glam::{Vec2, Vec3};
use rand::Rng;

/// One glowing point of the cloud.
///
/// A particle sits still on the shell for `stuck_time` ticks, then drifts
/// under its own acceleration plus random jitter. Its opacity follows an
/// [`Envelope`] over its age and it is dead once the envelope ends.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    pub stuck_time: f32,
    pub envelope: Envelope,
    age: u32,
    alpha: f32,
    projected: Vec2,
    dead: bool,
}

impl Particle {
    pub fn new(
        position: Vec3,
        velocity: Vec3,
        acceleration: Vec3,
        stuck_time: f32,
        envelope: Envelope,
    ) -> Self {
        Self {
            position,
            velocity,
            acceleration,
            stuck_time,
            envelope,
            age: 0,
            alpha: envelope.init_value,
            projected: Vec2::ZERO,
            dead: false,
        }
    }

    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Surface coordinates from the most recent update.
    #[inline]
    pub fn projected(&self) -> Vec2 {
        self.projected
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Advance one tick and project with the field's shared rotation.
    ///
    /// The particle does not draw itself; callers use the returned scale and
    /// depth for shading and culling.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        turn: Turn,
        projector: &Projector,
        jitter_range: Vec3,
        rng: &mut R,
    ) -> Projection {
        self.age = self.age.saturating_add(1);

        if self.age as f32 > self.stuck_time {
            self.velocity += self.acceleration + random_jitter(rng, jitter_range);
            self.position += self.velocity;
        }

        let projection = projector.project(self.position, turn);
        self.projected = projection.screen;

        if self.envelope.is_finished(self.age) {
            self.dead = true;
        }
        self.alpha = if self.dead {
            self.envelope.last_value
        } else {
            self.envelope.value(self.age)
        };

        projection
    }
}
