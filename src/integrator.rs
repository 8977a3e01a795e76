use geometry::ray::Ray;
use geometry::Interaction;
use light::ShapeSample;
use math::hcm::Vec3;
use math::prob::Prob;
use radiometry::color::Color;
use scene::Scene;

use crate::sampler::Sampler;

/// The recursive radiance estimator. For a ray hitting a surface point x:
///
///   radiance(x)  = emitted(x) + reflected(x)
///   reflected(x) = direct(x) + indirect(x)
///
/// `direct` is a single-sample next-event estimate against the scene's
/// designated luminaire; `indirect` recurses through `reflected` with
/// Russian-roulette termination. Emission is added at every hit, and the
/// recursion re-enters at `reflected`, not `radiance`, so light seen through
/// a bounce is accounted by the direct term at that bounce.
pub struct PathIntegrator {
    /// Depths up to this bound always survive the roulette.
    pub rr_depth: i32,
    /// Survival probability applied beyond `rr_depth`. Must be in (0, 1];
    /// surviving contributions are divided by it, which is all the
    /// normalization an unbiased roulette needs.
    pub survival_prob: f64,
}

impl Default for PathIntegrator {
    fn default() -> Self {
        Self {
            rr_depth: 5,
            survival_prob: 0.9,
        }
    }
}

impl PathIntegrator {
    /// Estimates the radiance traveling backward along `ray` from the
    /// nearest surface it hits. Returns black on a miss. `depth` is 1 for
    /// camera rays and grows by one per bounce.
    pub fn received_radiance(
        &self,
        scene: &Scene,
        ray: &Ray,
        depth: i32,
        sampler: &mut Sampler,
    ) -> Color {
        match scene.intersect(ray) {
            None => Color::black(),
            Some(hit) => {
                scene.primitives()[hit.index].emission
                    + self.reflected(scene, ray, &hit, depth, sampler)
            }
        }
    }

    /// Reflected-only radiance at a hit: direct plus indirect, no emission.
    fn reflected(
        &self,
        scene: &Scene,
        ray: &Ray,
        hit: &Interaction,
        depth: i32,
        sampler: &mut Sampler,
    ) -> Color {
        let o = -ray.dir;
        self.direct(scene, hit, o, sampler) + self.indirect(scene, hit, o, depth, sampler)
    }

    /// Single-sample estimate of the radiance arriving from the designated
    /// luminaire: importance-sampled over the light's surface area and
    /// converted to the solid-angle measure with the cos(theta_y) / r^2
    /// factor. Does not recurse.
    fn direct(&self, scene: &Scene, hit: &Interaction, o: Vec3, sampler: &mut Sampler) -> Color {
        let light = scene.light();
        let sample = light.sphere.sample_surface(sampler.uniform2());
        let to_light = sample.pos - hit.pos;
        let r2 = to_light.norm_squared();
        let wi = to_light.hat();

        let shadow_ray = hit.spawn_ray(wi);
        if !scene.visible(&shadow_ray, sample.normal) {
            return Color::black();
        }

        let brdf = &scene.primitives()[hit.index].brdf;
        // cos at x keeps its sign; the visibility test already rejected
        // samples on the light's far side.
        let cos_x = hit.normal.dot(wi);
        let cos_y = sample.normal.dot(-wi);
        light.emission * brdf.eval(hit.normal, o, wi) * (cos_x * cos_y / (r2 * sample.pdf))
    }

    /// One roulette-gated bounce: sample the BRDF, trace, and weight the
    /// recursive `reflected` estimate by eval * cos / (pdf * p).
    fn indirect(
        &self,
        scene: &Scene,
        hit: &Interaction,
        o: Vec3,
        depth: i32,
        sampler: &mut Sampler,
    ) -> Color {
        let p = if depth <= self.rr_depth {
            1.0
        } else {
            self.survival_prob
        };
        if sampler.uniform() >= p {
            return Color::black();
        }

        let brdf = &scene.primitives()[hit.index].brdf;
        let (wi, prob) = brdf.sample(hit.normal, o, sampler.uniform2());
        let pdf = match prob {
            Prob::Density(pdf) => pdf,
            Prob::Mass(pmf) => pmf,
        };

        let bounce = hit.spawn_ray(wi);
        match scene.intersect(&bounce) {
            None => Color::black(),
            Some(next) => {
                let incoming = self.reflected(scene, &bounce, &next, depth + 1, sampler);
                incoming * brdf.eval(hit.normal, o, wi) * (hit.normal.dot(wi) / (pdf * p))
            }
        }
    }
}
