// Host-side tests for the frame driver, using a surface that records draw calls.

use glam::Vec2;
use glowsphere_core::*;

#[derive(Debug, Clone, PartialEq)]
enum DrawCall {
    Clear(Rgba),
    Circle { center: Vec2, radius: f32, color: Rgba },
}

#[derive(Default)]
struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgba)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Circle { center, radius, color } => Some((*center, *radius, *color)),
            DrawCall::Clear(_) => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Rgba) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(DrawCall::Circle { center, radius, color });
    }
}

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

fn started(config: SphereConfig) -> (RenderLoop<RecordingSurface>, LoopHandle) {
    let field = ParticleField::new(config, VIEWPORT, 17).unwrap();
    launch(Some(RecordingSurface::default()), field).expect("surface available")
}

#[test]
fn every_frame_starts_with_a_clear_to_background() {
    let (mut rl, _handle) = started(SphereConfig::default());
    for _ in 0..3 {
        rl.surface_mut().calls.clear();
        rl.frame();
        assert_eq!(rl.surface().calls.first(), Some(&DrawCall::Clear(Rgba::BLACK)));
        let clears = rl
            .surface()
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Clear(_)))
            .count();
        assert_eq!(clears, 1);
    }
}

#[test]
fn discs_stay_on_the_surface_and_scale_with_depth() {
    // Large radius so plenty of particles leave the surface and get culled.
    let (mut rl, _handle) = started(SphereConfig::default().with_sphere_radius(500.0));
    for _ in 0..120 {
        rl.surface_mut().calls.clear();
        let status = rl.frame();
        let drawn = rl.surface().circles().count();
        assert_eq!(status, FrameStatus::Continue { drawn });
        for (center, radius, color) in rl.surface().circles() {
            assert!((0.0..=VIEWPORT.x).contains(&center.x), "x {}", center.x);
            assert!((0.0..=VIEWPORT.y).contains(&center.y), "y {}", center.y);
            assert!(radius > 0.0 && radius.is_finite());
            assert!((0.0..=1.0).contains(&color.a));
        }
    }
    assert_eq!(rl.field().len(), 300);
}

#[test]
fn radius_follows_the_perspective_scale() {
    let (mut rl, _handle) = started(SphereConfig::default().with_sphere_radius(20.0));
    rl.frame();
    let sprites = rl.last_sprites().to_vec();
    let circles: Vec<_> = rl.surface().circles().collect();
    assert_eq!(sprites.len(), circles.len());
    for (s, (center, radius, color)) in sprites.iter().zip(circles) {
        assert_eq!(s.position, center);
        assert!((radius - 1.8 * s.scale).abs() < 1e-5);
        assert_eq!(s.color, color);
    }
}

#[test]
fn cancellation_is_checked_before_drawing() {
    let (mut rl, handle) = started(SphereConfig::default());
    rl.frame();
    let before = rl.surface().calls.len();
    let remote = handle.clone();
    remote.cancel();
    assert!(handle.is_cancelled());
    for _ in 0..5 {
        assert_eq!(rl.frame(), FrameStatus::Cancelled);
    }
    assert_eq!(rl.surface().calls.len(), before);
    assert_eq!(rl.frames(), 1);
}

#[test]
fn missing_surface_means_no_loop() {
    let field = ParticleField::new(SphereConfig::default(), VIEWPORT, 0).unwrap();
    assert!(launch::<RecordingSurface, _>(None, field).is_none());
}
