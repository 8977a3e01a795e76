use light::ShapeSample;
use math::float::{linspace, Float};
use math::hcm::{vec3, Point3, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shape::Sphere;
use std::f64::consts::PI;

#[test]
fn test_samples_lie_on_surface_with_outward_normal() {
    let s = Sphere::from_raw((5.0, 6.0, 12.0), 2.0);
    let (uvec, _) = linspace((0.0, 1.0), 20);
    for u in uvec.iter().cloned() {
        for v in uvec.iter().cloned() {
            let sample = s.sample_surface((u, v));
            let radial = sample.pos - s.center();
            assert!(radial.norm_squared().dist_to(s.radius().powi(2)) < 1e-9);
            // The normal is unit-length and parallel to the radial direction.
            assert!((sample.normal.norm_squared() - 1.0).abs() < 1e-12);
            assert!(
                sample.normal.cross(radial).norm_squared() < 1e-9,
                "radial = {}, normal = {}",
                radial,
                sample.normal
            );
        }
    }
}

#[test]
fn test_pdf_is_inverse_area_for_every_sample() {
    let s = Sphere::from_raw((0.0, 0.0, 0.0), 3.0);
    let expected = 1.0 / (4.0 * PI * 9.0);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let sample = s.sample_surface((rng.gen(), rng.gen()));
        assert!(sample.pdf.dist_to(expected) < 1e-15);
    }
    assert!(s.area().dist_to(4.0 * PI * 9.0) < 1e-9);
}

#[test]
fn test_uniformity_first_and_second_moments() {
    // Uniform points on a sphere of radius r centered at c have mean c and
    // per-axis second central moment r^2 / 3.
    let center = Point3::new(1.0, -2.0, 4.0);
    let radius = 2.5;
    let s = Sphere::new(center, radius);

    let mut rng = StdRng::seed_from_u64(42);
    let count = 40_000;
    let mut mean = Vec3::ZERO;
    let mut second = Vec3::ZERO;
    for _ in 0..count {
        let sample = s.sample_surface((rng.gen(), rng.gen()));
        let d = sample.pos - center;
        mean += d;
        second += vec3(d.x * d.x, d.y * d.y, d.z * d.z);
    }
    mean = mean / count as f64;
    second = second / count as f64;

    // Standard error of the mean per axis is r / sqrt(3 N) ~ 0.007.
    assert!(mean.norm() < 0.05, "mean offset = {}", mean);
    let expected_m2 = radius * radius / 3.0;
    for axis in 0..3 {
        assert!(
            second[axis].dist_to(expected_m2) < expected_m2 * 0.05,
            "axis {}: m2 = {} vs {}",
            axis,
            second[axis],
            expected_m2
        );
    }
}

#[test]
fn test_deterministic_under_fixed_variates() {
    let s = Sphere::from_raw((0.0, 0.0, 0.0), 1.0);
    let a = s.sample_surface((0.25, 0.75));
    let b = s.sample_surface((0.25, 0.75));
    assert_eq!(a.pos, b.pos);
    assert_eq!(a.normal, b.normal);

    // The z coordinate is exactly 2u - 1.
    assert!(a.normal.z.dist_to(-0.5) < 1e-12);
}
