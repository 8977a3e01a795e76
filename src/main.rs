mod cli_options;
mod film;
mod integrator;
mod renderer;
mod sampler;

use std::time::Instant;

use cli_options::CliOptions;
use integrator::PathIntegrator;
use renderer::RenderOptions;

fn main() {
    env_logger::init();

    let args = std::env::args().collect::<Vec<_>>();
    let options = match cli_options::parse_args(args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("usage: {}", CliOptions::message());
            std::process::exit(1);
        }
    };

    if !options.use_multi_thread {
        if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(1).build_global() {
            log::warn!("couldn't pin the pool to one thread: {}", e);
        }
    }

    let scene = match scene::preset::by_name(&options.scene_name) {
        Some(scene) => scene,
        None => {
            eprintln!(
                "Unknown scene '{}'; available: {}",
                options.scene_name,
                scene::preset::preset_names().join(", ")
            );
            std::process::exit(1);
        }
    };

    let integrator = PathIntegrator::default();
    let render_options = RenderOptions {
        samples_per_pixel: options.samples_per_pixel,
        master_seed: options.master_seed,
    };

    let start = Instant::now();
    let film = renderer::render(&scene, &integrator, &render_options);
    log::info!("render finished in {:.2?}", start.elapsed());

    let is_png = options
        .output
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("png"));
    let written = if is_png {
        film.write_png(&options.output)
    } else {
        film.write_ppm(&options.output)
    };
    match written {
        Ok(()) => println!("wrote {}", options.output.display()),
        Err(e) => {
            eprintln!("writing {}: {}", options.output.display(), e);
            std::process::exit(1);
        }
    }
}
