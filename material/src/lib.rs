use std::f64::consts::{FRAC_1_PI, PI};

use math::hcm::{self, Vec3};
use math::prob::Prob;
use radiometry::color::Color;

/// Describes how a surface scatters incoming light, as seen by the
/// integrator: a value query and an importance-sampling query.
///
/// All directions point away from the surface and are unit-length; `n` is the
/// shading normal on the side the outgoing direction `o` lies.
///
/// The two operations are tied by the Monte-Carlo contract
///
///   E[ eval(n, o, wi) * (n . wi) / pdf(wi) ] = reflected radiance
///
/// where `wi` and its probability come from `sample`. Whenever `sample`
/// returns a direction, the returned probability is strictly positive, so the
/// caller may always divide by it.
pub trait Brdf: Sync + Send {
    /// Evaluates the reflectance for the (outgoing, incoming) direction pair,
    /// per unit solid angle. The cosine factor is applied by the caller.
    fn eval(&self, n: Vec3, o: Vec3, i: Vec3) -> Color;

    /// Draws an incoming direction given the outgoing one, consuming a 2D
    /// uniform [0, 1) random variable. Returns the direction and the
    /// probability (a density for smooth distributions, a mass for the
    /// deterministic mirror case) with which it was produced.
    fn sample(&self, n: Vec3, o: Vec3, rnd2: (f64, f64)) -> (Vec3, Prob);

    fn summary(&self) -> String;
}

/// Ideal diffuse (Lambertian) reflectance.
#[derive(Debug, Clone)]
pub struct Diffuse {
    pub albedo: Color,
}

impl Diffuse {
    pub fn new(albedo: Color) -> Self {
        Diffuse { albedo }
    }
}

impl Brdf for Diffuse {
    fn eval(&self, _n: Vec3, _o: Vec3, _i: Vec3) -> Color {
        self.albedo * FRAC_1_PI
    }

    /// Cosine-weighted hemisphere direction about `n`, pdf = cos(theta) / pi.
    fn sample(&self, n: Vec3, _o: Vec3, rnd2: (f64, f64)) -> (Vec3, Prob) {
        let (u, v) = rnd2;
        // 1 - u is uniform on (0, 1], keeping z (and thus the pdf) nonzero.
        let z = (1.0 - u).sqrt();
        let r = (1.0 - z * z).max(0.0).sqrt();
        let phi = 2.0 * PI * v;
        let (t, b) = hcm::make_coord_system(n);
        let wi = t * (r * phi.cos()) + b * (r * phi.sin()) + n * z;
        (wi, Prob::Density(wi.dot(n) * FRAC_1_PI))
    }

    fn summary(&self) -> String {
        format!("Diffuse{{albedo = {}}}", self.albedo)
    }
}

/// Ideal specular (mirror) reflectance.
#[derive(Debug, Clone)]
pub struct Specular {
    pub ks: Color,
}

/// Per-component distance below which an incoming direction counts as the
/// exact mirror direction. Unit-vector components differ by far more than
/// this for any direction `sample` did not produce.
const MIRROR_TOLERANCE: f64 = 1e-6;

impl Specular {
    pub fn new(ks: Color) -> Self {
        Specular { ks }
    }

    fn mirror_direction(&self, n: Vec3, o: Vec3) -> Vec3 {
        hcm::reflect(n, o)
    }
}

impl Brdf for Specular {
    /// Nonzero only for the mirror direction of `o`, where the value
    /// `ks / (n . i)` cancels the cosine factor the caller applies.
    fn eval(&self, n: Vec3, o: Vec3, i: Vec3) -> Color {
        let mirrored = self.mirror_direction(n, o);
        let is_mirror = (i.x - mirrored.x).abs() < MIRROR_TOLERANCE
            && (i.y - mirrored.y).abs() < MIRROR_TOLERANCE
            && (i.z - mirrored.z).abs() < MIRROR_TOLERANCE;
        if is_mirror {
            self.ks * n.dot(i).recip()
        } else {
            Color::black()
        }
    }

    fn sample(&self, n: Vec3, o: Vec3, _rnd2: (f64, f64)) -> (Vec3, Prob) {
        (self.mirror_direction(n, o), Prob::Mass(1.0))
    }

    fn summary(&self) -> String {
        format!("Specular{{ks = {}}}", self.ks)
    }
}
