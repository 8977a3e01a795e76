use crate::ray::Ray;
use math::hcm::{Point3, Vec3};

/// Fraction of the image height covered by one film-plane unit. Fixes the
/// vertical field of view at roughly 29 degrees.
const FILM_SCALE: f64 = 0.5135;

/// Pinhole camera. Pixel (0, 0) is at the bottom-left of the image; x grows
/// rightward and y grows upward. Every pixel is subdivided into a 2x2 grid of
/// sub-pixel cells, and sample positions inside a cell are jittered with a
/// tent filter so that neighboring cells share their support.
pub struct Camera {
    origin: Point3,
    dir: Vec3,
    cx: Vec3,
    cy: Vec3,

    // Film image resolution.
    width: u32,
    height: u32,
}

impl Camera {
    /// Builds a camera at `origin` looking along `dir` (normalized here).
    pub fn new(resolution: (u32, u32), origin: Point3, dir: Vec3) -> Camera {
        let (width, height) = resolution;
        assert!(width > 0 && height > 0);
        let dir = dir.hat();
        let cx = Vec3::new(width as f64 * FILM_SCALE / height as f64, 0.0, 0.0);
        let cy = cx.cross(dir).hat() * FILM_SCALE;
        Camera {
            origin,
            dir,
            cx,
            cy,
            width,
            height,
        }
    }

    /// Returns resolution (width x height) of the camera film.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Generates the unit-direction camera ray through pixel `(x, y)` for
    /// sub-pixel cell `(sx, sy)` in {0, 1}^2, jittered by `rnd2`.
    pub fn shoot_ray(&self, (x, y): (u32, u32), (sx, sy): (u32, u32), rnd2: (f64, f64)) -> Ray {
        let dx = tent_sample(rnd2.0);
        let dy = tent_sample(rnd2.1);
        let px = ((sx as f64 + 0.5 + dx) / 2.0 + x as f64) / self.width as f64 - 0.5;
        let py = ((sy as f64 + 0.5 + dy) / 2.0 + y as f64) / self.height as f64 - 0.5;
        let d = self.cx * px + self.cy * py + self.dir;
        Ray::new(self.origin, d.hat())
    }
}

/// Maps a uniform [0, 1) variate to [-1, 1) with a tent (triangle) density
/// peaking at 0.
fn tent_sample(u: f64) -> f64 {
    let r = 2.0 * u;
    if r < 1.0 {
        r.sqrt() - 1.0
    } else {
        1.0 - (2.0 - r).sqrt()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_center_ray_matches_view_direction() {
        let dir = Vec3::new(0.0, -0.042612, -1.0);
        let camera = Camera::new((480, 360), Point3::new(50.0, 52.0, 295.6), dir);
        // The four sub-pixel cells of the two center pixels bracket the view
        // axis; an unjittered sample of the lower-left cell of pixel
        // (240, 180) sits half a pixel away from it.
        let ray = camera.shoot_ray((240, 180), (0, 0), (0.5, 0.5));
        assert!((ray.dir - dir.hat()).norm() < 5e-3, "ray dir = {}", ray.dir);
        assert!((ray.dir.norm_squared() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tent_sample_range_and_symmetry() {
        for i in 0..100 {
            let u = i as f64 / 100.0;
            let d = tent_sample(u);
            assert!((-1.0..1.0).contains(&d), "tent({}) = {}", u, d);
        }
        assert_eq!(tent_sample(0.5), 0.0);
        assert!((tent_sample(0.125) + tent_sample(0.875)).abs() < 1e-12);
    }
}
