use std::f64::consts::PI;

use geometry::ray::Ray;
use math::hcm::{Point3, Vec3};

/// Distances below this margin are treated as the ray re-hitting the surface
/// it was spawned from and discarded.
pub const HIT_EPSILON: f64 = 1e-4;

#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64) -> Sphere {
        assert!(!center.has_nan());
        assert!(radius > 0.0 && radius.is_finite());
        Sphere { center, radius }
    }
    pub fn from_raw(center: (f64, f64, f64), radius: f64) -> Sphere {
        let (x, y, z) = center;
        Self::new(Point3::new(x, y, z), radius)
    }
    pub fn center(&self) -> Point3 {
        self.center
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Distance along `r` (unit direction assumed) to the nearest acceptable
    /// intersection, or `None` on a miss.
    ///
    /// Solves t^2 + 2t d.(o-c) + (o-c).(o-c) - radius^2 = 0. A negative
    /// discriminant (the ray passes by, tangency included up to rounding) is
    /// a clean miss. Of the two roots, the smaller is preferred; a root is
    /// acceptable only beyond `HIT_EPSILON`, so a ray starting on the surface
    /// can still hit the far side from inside.
    pub fn intersect(&self, r: &Ray) -> Option<f64> {
        let op = self.center - r.origin;
        let b = op.dot(r.dir);
        let det = b * b - op.dot(op) + self.radius * self.radius;
        if det < 0.0 {
            return None;
        }
        let det = det.sqrt();
        let t = b - det;
        if t > HIT_EPSILON {
            return Some(t);
        }
        let t = b + det;
        if t > HIT_EPSILON {
            Some(t)
        } else {
            None
        }
    }

    /// Outward unit normal at a point assumed to lie on the surface.
    pub fn normal_at(&self, p: Point3) -> Vec3 {
        (p - self.center).hat()
    }

    pub fn area(&self) -> f64 {
        self.radius * self.radius * 4.0 * PI
    }
}
