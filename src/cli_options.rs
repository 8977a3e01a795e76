use std::collections::HashMap;
use std::path::PathBuf;

use crate::sampler;

pub struct CliOptions {
    pub use_multi_thread: bool,
    pub samples_per_pixel: u32,
    pub scene_name: String,
    pub output: PathBuf,
    pub master_seed: u64,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            use_multi_thread: true,
            samples_per_pixel: 4,
            scene_name: String::from("cornell"),
            output: PathBuf::from("image.ppm"),
            master_seed: sampler::DEFAULT_SEED,
        }
    }
}

impl CliOptions {
    pub fn message() -> &'static str {
        r#"
        --spp <n>                  total samples per pixel (positive)
        --scene <name>             compiled-in scene to render
        --output <file.ppm|.png>   output image path
        --seed <n>                 master RNG seed
        --use_multi_thread | --use_single_thread
        "#
    }
}

pub fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut pairs: HashMap<String, Option<String>> = HashMap::new();
    let mut args = args.into_iter().rev().collect::<Vec<_>>();
    args.pop(); // Removes args[0]

    while let Some(key) = args.pop() {
        if !key.starts_with('-') {
            return Err(format!("Unrecognized key {}", key));
        }
        match args.last() {
            None => {
                pairs.insert(key, None);
            }
            Some(value) => {
                if value.starts_with('-') {
                    pairs.insert(key, None);
                } else {
                    let value = args.pop();
                    pairs.insert(key, value);
                }
            }
        }
    }

    let mut options = CliOptions::default();
    for (k, v) in pairs.into_iter() {
        match k.as_str() {
            "--use_multi_thread" => options.use_multi_thread = true,
            "--use_single_thread" => options.use_multi_thread = false,
            "--spp" => {
                let spp = required(&k, v)?
                    .parse::<i64>()
                    .map_err(|e| format!("Bad value for {}: {}", k, e))?;
                if spp <= 0 {
                    return Err(format!("Samples per pixel must be positive, got {}", spp));
                }
                options.samples_per_pixel = spp as u32;
            }
            "--scene" => options.scene_name = required(&k, v)?,
            "--output" => options.output = PathBuf::from(required(&k, v)?),
            "--seed" => {
                options.master_seed = required(&k, v)?
                    .parse::<u64>()
                    .map_err(|e| format!("Bad value for {}: {}", k, e))?;
            }
            "--help" => {
                println!("usage: {}", CliOptions::message());
            }
            _ => return Err(format!("Unrecognized key {}", k)),
        }
    }
    Ok(options)
}

fn required(key: &str, value: Option<String>) -> Result<String, String> {
    value.ok_or_else(|| format!("{} expects a value", key))
}
