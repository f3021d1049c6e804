//! Geometry, projection and shading properties over the full θ/φ sweep.

use std::f64::consts::{SQRT_2, TAU};

use tui_donut::core::{
    angle_steps, luminance_index, render_frame, sample_surface, RotationTrig, SurfaceSample,
    Trig,
};
use tui_donut::types::{Angles, TorusConfig, LUMINANCE_RAMP};

const EPS: f64 = 1e-9;

/// A spread of rotation pairs, including unnormalized and negative ones.
fn sampled_angles() -> Vec<Angles> {
    let mut out = Vec::new();
    for i in 0..8 {
        for j in 0..8 {
            out.push(Angles::new(i as f64 * TAU / 8.0, j as f64 * TAU / 8.0));
        }
    }
    out.push(Angles::new(1.0, 1.0));
    out.push(Angles::new(1.0 + 999.0 * 0.07, 1.0 + 999.0 * 0.02));
    out.push(Angles::new(-3.3, 12.7));
    out
}

fn for_each_sample(config: &TorusConfig, angles: Angles, mut f: impl FnMut(&SurfaceSample)) {
    let rot = RotationTrig::new(angles);
    for theta in angle_steps(config.theta_spacing) {
        for phi in angle_steps(config.phi_spacing) {
            f(&sample_surface(config, &rot, Trig::of(theta), Trig::of(phi)));
        }
    }
}

#[test]
fn depth_stays_above_viewer_clearance() {
    let config = TorusConfig::default();
    let floor = config.min_depth();
    assert_eq!(floor, 2.0);

    for angles in sampled_angles() {
        for_each_sample(&config, angles, |s| {
            assert!(s.z >= floor - EPS, "z={} at {:?}", s.z, angles);
            assert!(s.ooz.is_finite() && s.ooz > 0.0);
        });
    }
}

#[test]
fn every_sample_projects_inside_the_grid() {
    let config = TorusConfig::default();
    let k1 = config.k1();

    for angles in sampled_angles() {
        for_each_sample(&config, angles, |s| {
            let (xp, yp) = s.project(&config, k1);
            assert!((0..32).contains(&xp), "xp={xp} at {:?}", angles);
            assert!((0..32).contains(&yp), "yp={yp} at {:?}", angles);
        });
    }
}

#[test]
fn luminance_stays_within_sqrt_two() {
    let config = TorusConfig::default();
    let mut max_seen = f64::MIN;
    let mut min_seen = f64::MAX;

    for angles in sampled_angles() {
        for_each_sample(&config, angles, |s| {
            max_seen = max_seen.max(s.luminance);
            min_seen = min_seen.min(s.luminance);
        });
    }

    assert!(max_seen <= SQRT_2 + EPS, "max L={max_seen}");
    assert!(min_seen >= -SQRT_2 - EPS, "min L={min_seen}");
    // The sweep reaches both lit and unlit faces.
    assert!(max_seen > 1.0);
    assert!(min_seen < -1.0);
}

#[test]
fn lit_luminance_maps_into_ramp() {
    let config = TorusConfig::default();
    for angles in sampled_angles() {
        for_each_sample(&config, angles, |s| {
            if s.luminance > 0.0 {
                let idx = luminance_index(s.luminance, LUMINANCE_RAMP.len()).unwrap();
                assert!(idx <= 11);
                assert_eq!(idx, (s.luminance * 8.0).floor() as usize);
            } else {
                assert_eq!(luminance_index(s.luminance, LUMINANCE_RAMP.len()), None);
            }
        });
    }
}

#[test]
fn luminance_index_boundaries() {
    assert_eq!(luminance_index(f64::MIN_POSITIVE, 12), Some(0));
    assert_eq!(luminance_index(0.01, 12), Some(0));
    assert_eq!(luminance_index(SQRT_2 - 1e-12, 12), Some(11));
    assert_eq!(luminance_index(SQRT_2, 12), Some(11));
    assert_eq!(luminance_index(0.0, 12), None);
    assert_eq!(luminance_index(-f64::MIN_POSITIVE, 12), None);
}

#[test]
fn rendering_is_deterministic() {
    let config = TorusConfig::default();
    for angles in [Angles::new(1.0, 1.0), Angles::new(4.2, 0.5)] {
        let first = render_frame(&config, angles);
        let second = render_frame(&config, angles);
        assert_eq!(first, second);
        assert_eq!(first.cells(), second.cells());
    }
}

#[test]
fn different_angles_give_different_frames() {
    let config = TorusConfig::default();
    let a = render_frame(&config, Angles::new(1.0, 1.0));
    let b = render_frame(&config, Angles::new(1.07, 1.02));
    assert_ne!(a.cells(), b.cells());
}

#[test]
fn angles_are_periodic() {
    let config = TorusConfig::default();
    let base = render_frame(&config, Angles::new(1.0, 1.0));
    let wrapped = render_frame(&config, Angles::new(1.0 + TAU, 1.0 - TAU));
    // Same picture up to rounding in sin/cos; allow a handful of cells to differ.
    let differing = base
        .cells()
        .iter()
        .zip(wrapped.cells())
        .filter(|(a, b)| a != b)
        .count();
    assert!(differing <= 8, "{differing} cells differ");
}
