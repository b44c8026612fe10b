use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Write a synthetic sample directory: sam_1.csv .. sam_N.csv plus the
/// feature-name and class-label sidecars.
#[derive(Parser, Debug)]
struct Args {
    /// Output directory, created if missing
    #[arg(default_value = "sample_data")]
    out: PathBuf,

    #[arg(long, default_value_t = 20)]
    samples: usize,

    #[arg(long, default_value_t = 128)]
    time: usize,

    #[arg(long, default_value_t = 14)]
    features: usize,

    #[arg(long, default_value_t = 2)]
    classes: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

const CHANNELS: [&str; 14] = [
    "AF3", "F7", "F3", "FC5", "T7", "P7", "O1", "O2", "P8", "T8", "FC6", "F4", "F8", "AF4",
];

/// Box-Muller transform for normal distribution
fn gauss(rng: &mut impl Rng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-15);
    let u2: f64 = rng.gen();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}

/// One recording: a per-class sine on every channel plus noise.
fn generate_sample(rng: &mut impl Rng, args: &Args, class: usize) -> String {
    let freq = 0.05 * (class + 1) as f64;
    let mut out = String::new();

    for t in 0..args.time {
        let row: Vec<String> = (0..args.features)
            .map(|f| {
                let phase = f as f64 * 0.3;
                let v = 50.0 + 10.0 * (freq * t as f64 + phase).sin() + gauss(rng, 0.0, 2.0);
                format!("{v:.8}")
            })
            .collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);
    let classes = args.classes.max(1);

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;

    let mut labels = String::new();
    for i in 1..=args.samples {
        let class = rng.gen_range(0..classes);
        let body = generate_sample(&mut rng, &args, class);
        write(&args.out.join(format!("sam_{i}.csv")), &body)?;
        labels.push_str(&format!("{}\n", class + 1));
        log::debug!("sam_{i}.csv: class {}", class + 1);
    }
    write(&args.out.join("tar_class_labels.csv"), &labels)?;

    let names: Vec<String> = (0..args.features)
        .map(|f| {
            CHANNELS
                .get(f)
                .map(|c| c.to_string())
                .unwrap_or_else(|| format!("feature {}", f + 1))
        })
        .collect();
    write(&args.out.join("feature_names_eeg.txt"), &names.join("\n"))?;

    println!(
        "Wrote {} samples ({} x {}) to {}",
        args.samples,
        args.time,
        args.features,
        args.out.display()
    );
    Ok(())
}
