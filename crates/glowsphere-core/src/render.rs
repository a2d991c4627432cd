//! Frame driver: clear, tick the field, draw one disc per visible particle.
//!
//! Scheduling belongs to the host. It calls [`RenderLoop::frame`] once per
//! display refresh and stops asking for frames once the loop reports
//! [`FrameStatus::Cancelled`].

use crate::color::Rgba;
use crate::field::{ParticleField, Sprite};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use std::cell::Cell;
use std::rc::Rc;

/// 2D drawing target.
pub trait Surface {
    fn clear(&mut self, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// `start` has not been called yet; nothing was drawn.
    Idle,
    Continue { drawn: usize },
    /// The handle was cancelled; the host should stop scheduling frames.
    Cancelled,
}

/// Cancellation token shared between the loop and whoever started it.
#[derive(Clone, Debug, Default)]
pub struct LoopHandle {
    cancelled: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        if !self.cancelled.replace(true) {
            log::info!("[loop] cancel requested");
        }
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

pub struct RenderLoop<S, R = StdRng> {
    surface: S,
    field: ParticleField<R>,
    state: LoopState,
    handle: LoopHandle,
    sprites: Vec<Sprite>,
    frames: u64,
}

impl<S: Surface, R: Rng> RenderLoop<S, R> {
    pub fn new(surface: S, field: ParticleField<R>) -> Self {
        let sprites = Vec::with_capacity(field.len());
        Self {
            surface,
            field,
            state: LoopState::Stopped,
            handle: LoopHandle::default(),
            sprites,
            frames: 0,
        }
    }

    /// Move to `Running` and hand out the cancellation token. Calling again
    /// returns the same token.
    pub fn start(&mut self) -> LoopHandle {
        if self.state == LoopState::Stopped {
            self.state = LoopState::Running;
            log::info!("[loop] running with {} particles", self.field.len());
        }
        self.handle.clone()
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }

    #[inline]
    pub fn field_mut(&mut self) -> &mut ParticleField<R> {
        &mut self.field
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Sprites drawn by the most recent frame.
    #[inline]
    pub fn last_sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn frame(&mut self) -> FrameStatus {
        if self.handle.is_cancelled() {
            return FrameStatus::Cancelled;
        }
        if self.state == LoopState::Stopped {
            return FrameStatus::Idle;
        }

        self.surface.clear(self.field.config().background);
        self.sprites.clear();
        self.field.tick(&mut self.sprites);

        let base_radius = self.field.config().particle_radius;
        for s in &self.sprites {
            self.surface
                .fill_circle(s.position, base_radius * s.scale, s.color);
        }
        self.frames += 1;
        FrameStatus::Continue {
            drawn: self.sprites.len(),
        }
    }
}

/// Build and start a loop, or do nothing when the host has no drawing surface.
pub fn launch<S: Surface, R: Rng>(
    surface: Option<S>,
    field: ParticleField<R>,
) -> Option<(RenderLoop<S, R>, LoopHandle)> {
    let Some(surface) = surface else {
        log::warn!("[loop] rendering unavailable: no 2D drawing surface");
        return None;
    };
    let mut render_loop = RenderLoop::new(surface, field);
    let handle = render_loop.start();
    Some((render_loop, handle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SphereConfig;

    #[derive(Default)]
    struct CountingSurface {
        clears: usize,
        circles: usize,
    }

    impl Surface for CountingSurface {
        fn clear(&mut self, _color: Rgba) {
            self.clears += 1;
        }

        fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Rgba) {
            self.circles += 1;
        }
    }

    fn field() -> ParticleField {
        ParticleField::new(SphereConfig::default(), Vec2::new(800.0, 600.0), 9).unwrap()
    }

    #[test]
    fn stopped_loop_draws_nothing() {
        let mut rl = RenderLoop::new(CountingSurface::default(), field());
        assert_eq!(rl.state(), LoopState::Stopped);
        assert_eq!(rl.frame(), FrameStatus::Idle);
        assert_eq!(rl.surface().clears, 0);
    }

    #[test]
    fn running_loop_clears_then_draws_each_sprite() {
        let mut rl = RenderLoop::new(CountingSurface::default(), field());
        rl.start();
        assert_eq!(rl.state(), LoopState::Running);
        let FrameStatus::Continue { drawn } = rl.frame() else {
            panic!("expected a drawn frame");
        };
        assert_eq!(rl.surface().clears, 1);
        assert_eq!(rl.surface().circles, drawn);
        assert_eq!(rl.last_sprites().len(), drawn);
        assert_eq!(rl.frames(), 1);
    }

    #[test]
    fn cancelled_loop_stops_drawing() {
        let mut rl = RenderLoop::new(CountingSurface::default(), field());
        let handle = rl.start();
        rl.frame();
        handle.cancel();
        assert_eq!(rl.frame(), FrameStatus::Cancelled);
        assert_eq!(rl.surface().clears, 1);
        assert_eq!(rl.state(), LoopState::Running);
    }

    #[test]
    fn handle_does_not_keep_the_loop_alive() {
        use std::cell::RefCell;

        let rl = Rc::new(RefCell::new(RenderLoop::new(CountingSurface::default(), field())));
        let handle = rl.borrow_mut().start();
        let weak = Rc::downgrade(&rl);
        drop(rl);
        assert!(weak.upgrade().is_none());
        handle.cancel();
        assert!(handle.is_cancelled());
    }

    #[test]
    fn launch_without_surface_is_a_no_op() {
        assert!(launch::<CountingSurface, _>(None, field()).is_none());
        let (mut rl, handle) = launch(Some(CountingSurface::default()), field()).unwrap();
        assert!(!handle.is_cancelled());
        assert!(matches!(rl.frame(), FrameStatus::Continue { .. }));
    }
}
