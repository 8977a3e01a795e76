use std::fmt::{Display, Formatter, Result};

use crate::ray::Ray;
use math::hcm::{Point3, Vec3};

/// Contains geometric information on a ray-surface intersection:
///  - `pos`: position of intersection
///  - `ray_t`: t-value of the ray at the intersection
///  - `normal`: shading normal, flipped to the side the ray arrived from
///  - `index`: which primitive of the scene was hit
#[derive(Debug, Clone, Copy)]
pub struct Interaction {
    pub pos: Point3,
    pub ray_t: f64,
    pub normal: Vec3,
    pub index: usize,
}

impl Interaction {
    pub fn new(pos: Point3, ray_t: f64, normal: Vec3, index: usize) -> Interaction {
        Interaction {
            pos,
            ray_t,
            normal,
            index,
        }
    }

    /// Starts a new ray from the intersection point. The origin is not offset;
    /// re-hitting the originating surface is excluded by the intersection
    /// epsilon instead.
    pub fn spawn_ray(&self, dir: Vec3) -> Ray {
        Ray::new(self.pos, dir)
    }
}

impl Display for Interaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "pos = {}, t = {:.2}, normal = {}, primitive #{}",
            self.pos, self.ray_t, self.normal, self.index
        )
    }
}
