pub mod preset;

use std::sync::Arc;

use geometry::camera::Camera;
use geometry::ray::Ray;
use geometry::Interaction;
use material::Brdf;
use math::hcm::Vec3;
use radiometry::color::Color;
use shape::Sphere;

/// A renderable object: a sphere tied to the radiance it emits (black for
/// non-luminous surfaces) and a reflectance model. The BRDF is shared across
/// all primitives built from the same material.
pub struct Primitive {
    pub sphere: Sphere,
    pub emission: Color,
    pub brdf: Arc<dyn Brdf>,
}

impl Primitive {
    pub fn new(sphere: Sphere, emission: Color, brdf: Arc<dyn Brdf>) -> Self {
        Primitive {
            sphere,
            emission,
            brdf,
        }
    }

    pub fn is_emissive(&self) -> bool {
        !self.emission.is_black()
    }
}

/// An immutable collection of primitives with one of them designated as the
/// light source for next-event estimation, plus the camera observing them.
pub struct Scene {
    primitives: Vec<Primitive>,
    light: usize,
    pub camera: Camera,
}

impl Scene {
    /// Builds a scene from its primitives. The designated light is resolved
    /// here, once: exactly one primitive must be emissive.
    ///
    /// Panics otherwise; a scene without that invariant is a construction
    /// bug, not a runtime condition.
    pub fn new(primitives: Vec<Primitive>, camera: Camera) -> Scene {
        let emissive: Vec<usize> = primitives
            .iter()
            .enumerate()
            .filter(|(_, prim)| prim.is_emissive())
            .map(|(index, _)| index)
            .collect();
        assert!(
            emissive.len() == 1,
            "expected exactly one emissive primitive, found {}",
            emissive.len()
        );
        let light = emissive[0];
        log::info!(
            "scene: {} primitives, luminaire is #{} emitting {}",
            primitives.len(),
            light,
            primitives[light].emission
        );
        Scene {
            primitives,
            light,
            camera,
        }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// The primitive designated as the light source.
    pub fn light(&self) -> &Primitive {
        &self.primitives[self.light]
    }

    /// Nearest-hit query over all primitives: a linear scan, keeping the
    /// smallest distance beyond the intersection epsilon. The returned normal
    /// is flipped, if needed, to face the side the ray came from.
    pub fn intersect(&self, r: &Ray) -> Option<Interaction> {
        let mut nearest: Option<(f64, usize)> = None;
        for (index, prim) in self.primitives.iter().enumerate() {
            if let Some(t) = prim.sphere.intersect(r) {
                if nearest.map_or(true, |(t_min, _)| t < t_min) {
                    nearest = Some((t, index));
                }
            }
        }
        nearest.map(|(t, index)| {
            let pos = r.position_at(t);
            let outward = self.primitives[index].sphere.normal_at(pos);
            let normal = if outward.dot(r.dir) > 0.0 {
                -outward
            } else {
                outward
            };
            Interaction::new(pos, t, normal, index)
        })
    }

    /// Shadow query for a luminaire sample: true iff the first thing
    /// `shadow_ray` hits is the designated light AND the sampled surface
    /// normal faces back toward the ray origin. Any occluder, a miss, or a
    /// sample on the light's far side all answer false.
    ///
    /// Identifying the hit by primitive identity is sound only while the
    /// scene holds a single luminaire.
    pub fn visible(&self, shadow_ray: &Ray, light_normal: Vec3) -> bool {
        match self.intersect(shadow_ray) {
            None => false,
            Some(hit) => hit.index == self.light && (-shadow_ray.dir).dot(light_normal) > 0.0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use math::float::Float;
    use math::hcm::{point3, vec3, Point3, Vec3};

    fn test_camera() -> Camera {
        Camera::new((4, 3), Point3::ORIGIN, Vec3::Z)
    }

    fn gray_ball(center: (f64, f64, f64), radius: f64) -> Primitive {
        Primitive::new(
            Sphere::from_raw(center, radius),
            Color::black(),
            Arc::new(material::Diffuse::new(Color::gray(0.75))),
        )
    }

    fn small_light(center: (f64, f64, f64), radius: f64) -> Primitive {
        Primitive::new(
            Sphere::from_raw(center, radius),
            Color::gray(50.0),
            Arc::new(material::Diffuse::new(Color::black())),
        )
    }

    #[test]
    fn test_light_is_resolved_at_construction() {
        let scene = Scene::new(
            vec![
                gray_ball((0.0, 0.0, 5.0), 1.0),
                small_light((0.0, 10.0, 5.0), 0.5),
                gray_ball((0.0, -3.0, 5.0), 1.0),
            ],
            test_camera(),
        );
        assert!(scene.light().is_emissive());
        assert!(scene.light().sphere.radius().dist_to(0.5) < 1e-12);
    }

    #[test]
    #[should_panic(expected = "exactly one emissive")]
    fn test_rejects_lightless_scene() {
        Scene::new(vec![gray_ball((0.0, 0.0, 5.0), 1.0)], test_camera());
    }

    #[test]
    fn test_intersect_returns_nearest() {
        let scene = Scene::new(
            vec![
                gray_ball((0.0, 0.0, 10.0), 1.0),
                gray_ball((0.0, 0.0, 5.0), 1.0),
                small_light((0.0, 20.0, 0.0), 0.5),
            ],
            test_camera(),
        );
        let hit = scene
            .intersect(&Ray::new(Point3::ORIGIN, Vec3::Z))
            .expect("two spheres on the axis");
        assert_eq!(hit.index, 1);
        assert!(hit.ray_t.dist_to(4.0) < 1e-9);
        // The normal faces the ray origin.
        assert!((hit.normal - vec3(0.0, 0.0, -1.0)).norm_squared() < 1e-12);
    }

    #[test]
    fn test_visibility_blocked_and_clear() {
        let occluded = Scene::new(
            vec![
                gray_ball((0.0, 5.0, 0.0), 1.0),
                small_light((0.0, 10.0, 0.0), 0.5),
            ],
            test_camera(),
        );
        let shadow_ray = Ray::new(Point3::ORIGIN, Vec3::Y);
        // Sampled light point faces the origin.
        let light_normal = vec3(0.0, -1.0, 0.0);
        assert!(!occluded.visible(&shadow_ray, light_normal));

        let clear = Scene::new(
            vec![
                gray_ball((4.0, 5.0, 0.0), 1.0),
                small_light((0.0, 10.0, 0.0), 0.5),
            ],
            test_camera(),
        );
        assert!(clear.visible(&shadow_ray, light_normal));

        // A sample on the light's far side never counts as visible, even
        // though the shadow ray still hits the light first.
        assert!(!clear.visible(&shadow_ray, vec3(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_visibility_miss_is_false() {
        let scene = Scene::new(vec![small_light((0.0, 10.0, 0.0), 0.5)], test_camera());
        let astray = Ray::new(point3(0.0, 0.0, 0.0), Vec3::X);
        assert!(!scene.visible(&astray, vec3(-1.0, 0.0, 0.0)));
    }
}
