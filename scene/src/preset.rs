use std::sync::Arc;

use geometry::camera::Camera;
use material::{Brdf, Diffuse, Specular};
use math::hcm::{Point3, Vec3};
use radiometry::color::Color;
use shape::Sphere;

use crate::{Primitive, Scene};

const WIDTH: u32 = 480;
const HEIGHT: u32 = 360;

/// Radius used for the wall spheres; large enough that their surfaces are
/// flat at the scale of the box interior.
const WALL_RADIUS: f64 = 1e5;

/// Looks up a compiled-in scene by name.
pub fn by_name(name: &str) -> Option<Scene> {
    match name {
        "cornell" => Some(cornell_spheres()),
        "mirror" => Some(mirror_ball()),
        _ => None,
    }
}

pub fn preset_names() -> &'static [&'static str] {
    &["cornell", "mirror"]
}

fn box_camera() -> Camera {
    Camera::new(
        (WIDTH, HEIGHT),
        Point3::new(50.0, 52.0, 295.6),
        Vec3::new(0.0, -0.042612, -1.0),
    )
}

/// The five wall spheres of the box, the camera facing its open side, and the
/// ceiling light; the two balls vary by preset.
fn box_shell(ball1: Primitive, ball2: Primitive) -> Scene {
    let left_wall: Arc<dyn Brdf> = Arc::new(Diffuse::new(Color::new(0.75, 0.25, 0.25)));
    let right_wall: Arc<dyn Brdf> = Arc::new(Diffuse::new(Color::new(0.25, 0.25, 0.75)));
    let other_wall: Arc<dyn Brdf> = Arc::new(Diffuse::new(Color::gray(0.75)));
    let black_surf: Arc<dyn Brdf> = Arc::new(Diffuse::new(Color::black()));

    let no_emission = Color::black();
    let primitives = vec![
        Primitive::new(
            Sphere::from_raw((WALL_RADIUS + 1.0, 40.8, 81.6), WALL_RADIUS),
            no_emission,
            left_wall,
        ),
        Primitive::new(
            Sphere::from_raw((-WALL_RADIUS + 99.0, 40.8, 81.6), WALL_RADIUS),
            no_emission,
            right_wall,
        ),
        Primitive::new(
            Sphere::from_raw((50.0, 40.8, WALL_RADIUS), WALL_RADIUS),
            no_emission,
            Arc::clone(&other_wall),
        ),
        Primitive::new(
            Sphere::from_raw((50.0, WALL_RADIUS, 81.6), WALL_RADIUS),
            no_emission,
            Arc::clone(&other_wall),
        ),
        Primitive::new(
            Sphere::from_raw((50.0, -WALL_RADIUS + 81.6, 81.6), WALL_RADIUS),
            no_emission,
            other_wall,
        ),
        ball1,
        ball2,
        Primitive::new(
            Sphere::from_raw((50.0, 70.0, 81.6), 5.0),
            Color::gray(50.0),
            black_surf,
        ),
    ];
    Scene::new(primitives, box_camera())
}

/// The all-diffuse box: two bright gray balls under a spherical ceiling light.
pub fn cornell_spheres() -> Scene {
    let bright_surf: Arc<dyn Brdf> = Arc::new(Diffuse::new(Color::gray(0.9)));
    box_shell(
        Primitive::new(
            Sphere::from_raw((27.0, 16.5, 47.0), 16.5),
            Color::black(),
            Arc::clone(&bright_surf),
        ),
        Primitive::new(
            Sphere::from_raw((73.0, 16.5, 78.0), 16.5),
            Color::black(),
            bright_surf,
        ),
    )
}

/// Same box with the far ball switched to an ideal mirror.
pub fn mirror_ball() -> Scene {
    let bright_surf: Arc<dyn Brdf> = Arc::new(Diffuse::new(Color::gray(0.9)));
    let mirror_surf: Arc<dyn Brdf> = Arc::new(Specular::new(Color::gray(0.999)));
    box_shell(
        Primitive::new(
            Sphere::from_raw((27.0, 16.5, 47.0), 16.5),
            Color::black(),
            bright_surf,
        ),
        Primitive::new(
            Sphere::from_raw((73.0, 16.5, 78.0), 16.5),
            Color::black(),
            mirror_surf,
        ),
    )
}
