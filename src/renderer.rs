use indicatif::ProgressBar;
use itertools::iproduct;
use radiometry::color::Color;
use rayon::prelude::*;
use scene::Scene;

use crate::film::Film;
use crate::integrator::PathIntegrator;
use crate::sampler::Sampler;

pub struct RenderOptions {
    /// Total samples per pixel; spread over the 2x2 sub-pixel grid with at
    /// least one sample per cell.
    pub samples_per_pixel: u32,
    pub master_seed: u64,
}

/// Renders the scene onto a fresh film. Work is partitioned by pixel row:
/// rayon hands whole rows to the worker pool, each row owns a disjoint slice
/// of the film and its own sample stream, so the loop body runs without any
/// synchronization. The progress bar ticks once per row, well away from the
/// per-sample path.
pub fn render(scene: &Scene, integrator: &PathIntegrator, opts: &RenderOptions) -> Film {
    let (width, height) = scene.camera.resolution();
    let samples_per_cell = (opts.samples_per_pixel / 4).max(1);
    log::info!(
        "rendering {}x{} at {} spp ({} per sub-pixel cell)",
        width,
        height,
        samples_per_cell * 4,
        samples_per_cell
    );

    let mut film = Film::new(width, height);
    let progress = ProgressBar::new(height as u64);
    film.pixels_mut()
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(row_index, row)| {
            // The film stores the top scanline first; camera rows count from
            // the bottom.
            let y = height - 1 - row_index as u32;
            let mut sampler = Sampler::derived(opts.master_seed, y as u64);
            for (x, pixel) in row.iter_mut().enumerate() {
                let mut resolved = Color::black();
                for (sy, sx) in iproduct!(0..2u32, 0..2u32) {
                    let mut cell = Color::black();
                    for _ in 0..samples_per_cell {
                        let ray =
                            scene
                                .camera
                                .shoot_ray((x as u32, y), (sx, sy), sampler.uniform2());
                        cell += integrator.received_radiance(scene, &ray, 1, &mut sampler);
                    }
                    // Each cell is averaged and clamped independently before
                    // contributing a quarter of the pixel.
                    resolved += (cell * (1.0 / samples_per_cell as f64)).clamp01() * 0.25;
                }
                *pixel = resolved;
            }
            progress.inc(1);
        });
    progress.finish_and_clear();
    film
}
