// Host-side statistical checks for spawn sampling.

use glowsphere_core::random_on_sphere;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SAMPLES: usize = 10_000;
const RADIUS: f32 = 250.0;

#[test]
fn spawn_points_sit_on_the_shell() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..SAMPLES {
        let p = random_on_sphere(&mut rng, RADIUS);
        assert!((p.length() - RADIUS).abs() < 1e-2);
    }
}

#[test]
fn spawn_points_cover_the_surface_uniformly() {
    // Archimedes: a uniform point on a sphere has z uniform in [-R, R].
    let mut rng = StdRng::seed_from_u64(99);
    let mut bins = [0usize; 10];
    let (mut sx, mut sy, mut sz) = (0.0f64, 0.0f64, 0.0f64);
    for _ in 0..SAMPLES {
        let p = random_on_sphere(&mut rng, RADIUS);
        let t = (p.z + RADIUS) / (2.0 * RADIUS);
        let bin = ((t * bins.len() as f32) as usize).min(bins.len() - 1);
        bins[bin] += 1;
        sx += p.x as f64;
        sy += p.y as f64;
        sz += p.z as f64;
    }
    let expected = SAMPLES / bins.len();
    for (i, count) in bins.iter().enumerate() {
        assert!(
            count.abs_diff(expected) < 150,
            "z bin {i} has {count} samples, expected about {expected}"
        );
    }
    let n = SAMPLES as f64;
    let tol = 0.05 * RADIUS as f64;
    assert!((sx / n).abs() < tol);
    assert!((sy / n).abs() < tol);
    assert!((sz / n).abs() < tol);
}

#[test]
fn zero_radius_collapses_to_the_centre() {
    let mut rng = StdRng::seed_from_u64(1);
    let p = random_on_sphere(&mut rng, 0.0);
    assert_eq!(p.length(), 0.0);
}
