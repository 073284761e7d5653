use anyhow::{Context, Result};
use clap::Parser;
use peakstream::save_wav;
use peakstream::simulation::{ClickTrainSpec, generate_click_train, regular_onsets};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "generate_wav")]
#[command(about = "Generate synthetic click-train WAV files for onset detection testing")]
struct Args {
    /// TOML click configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "data/synthetic")]
    output_dir: PathBuf,

    /// Click intervals in ms: comma-separated (e.g., "50,80") or range (e.g., "20-100:20")
    #[arg(short, long, default_value = "100")]
    intervals: String,

    /// Number of trials per interval
    #[arg(short, long, default_value_t = 1)]
    trials: u32,

    /// Base seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Signal duration in seconds
    #[arg(short, long, default_value_t = 1.0)]
    duration: f32,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 48000)]
    sample_rate: u32,

    /// Uniform noise half-width (CLI override)
    #[arg(long)]
    noise: Option<f32>,

    /// Click decay time constant in ms (CLI override)
    #[arg(long)]
    decay_ms: Option<f32>,

    /// Output filename prefix
    #[arg(long, default_value = "clicks")]
    prefix: String,

    /// Generate manifest.json with the expected peak positions
    #[arg(long)]
    manifest: bool,
}

#[derive(Debug, Deserialize, Default)]
struct TomlConfig {
    click: Option<ClickSection>,
}

#[derive(Debug, Deserialize)]
struct ClickSection {
    amplitude: Option<f32>,
    attack_samples: Option<usize>,
    decay_ms: Option<f32>,
    noise_amplitude: Option<f32>,
}

#[derive(Debug, serde::Serialize)]
struct ManifestEntry {
    file: String,
    interval_ms: f32,
    trial: u32,
    seed: u64,
    peaks: Vec<usize>,
}

#[derive(Debug, serde::Serialize)]
struct Manifest {
    sample_rate: u32,
    duration: f32,
    files: Vec<ManifestEntry>,
}

fn parse_intervals(s: &str) -> Result<Vec<f32>> {
    let intervals: Vec<f32> = if s.contains(':') {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 2 {
            anyhow::bail!("Invalid range format. Use 'start-end:step'");
        }
        let step: f32 = parts[1].parse().context("Invalid step value")?;
        if step <= 0.0 {
            anyhow::bail!("Step must be positive");
        }
        let range_parts: Vec<&str> = parts[0].split('-').collect();
        if range_parts.len() != 2 {
            anyhow::bail!("Invalid range format. Use 'start-end:step'");
        }
        let start: f32 = range_parts[0].parse().context("Invalid start value")?;
        let end: f32 = range_parts[1].parse().context("Invalid end value")?;

        let mut intervals = Vec::new();
        let mut interval = start;
        while interval <= end {
            intervals.push(interval);
            interval += step;
        }
        intervals
    } else {
        s.split(',')
            .map(|p| p.trim().parse::<f32>().context("Invalid interval value"))
            .collect::<Result<_>>()?
    };

    if intervals.iter().any(|&ms| ms <= 0.0) {
        anyhow::bail!("Intervals must be positive");
    }
    Ok(intervals)
}

fn load_toml_config(path: &PathBuf) -> Result<TomlConfig> {
    let content = fs::read_to_string(path).context("Failed to read config file")?;
    toml::from_str(&content).context("Failed to parse config file")
}

fn build_spec(toml: &TomlConfig, args: &Args) -> ClickTrainSpec {
    let mut spec = ClickTrainSpec {
        sample_rate: args.sample_rate,
        num_samples: (args.duration * args.sample_rate as f32) as usize,
        ..Default::default()
    };

    if let Some(ref click) = toml.click {
        if let Some(amplitude) = click.amplitude {
            spec.amplitude = amplitude;
        }
        if let Some(attack) = click.attack_samples {
            spec.attack_samples = attack;
        }
        if let Some(decay) = click.decay_ms {
            spec.decay_ms = decay;
        }
        if let Some(noise) = click.noise_amplitude {
            spec.noise_amplitude = noise;
        }
    }

    if let Some(noise) = args.noise {
        spec.noise_amplitude = noise;
    }
    if let Some(decay) = args.decay_ms {
        spec.decay_ms = decay;
    }

    spec
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    fs::create_dir_all(&args.output_dir).context("Failed to create output directory")?;

    let toml_config = if let Some(ref config_path) = args.config {
        load_toml_config(config_path)?
    } else {
        TomlConfig::default()
    };

    let intervals = parse_intervals(&args.intervals)?;
    let base_seed = args.seed.unwrap_or(0);
    let base_spec = build_spec(&toml_config, &args);

    let mut manifest_entries = Vec::new();
    let total_files = intervals.len() * args.trials as usize;
    let mut file_count = 0;

    for &interval_ms in &intervals {
        let interval = (interval_ms * args.sample_rate as f32 / 1000.0).round() as usize;
        for trial in 0..args.trials {
            let seed = base_seed + trial as u64 * 1000 + interval_ms as u64;
            let spec = ClickTrainSpec {
                // first click half an interval in, so it has quiet lead-in
                onsets: regular_onsets(interval / 2, interval, base_spec.num_samples),
                ..base_spec.clone()
            }
            .with_seed(seed);

            let (signal, peaks) = generate_click_train(&spec);

            let filename = format!("{}_i{:04}_t{:02}.wav", args.prefix, interval_ms as u32, trial);
            let filepath = args.output_dir.join(&filename);

            save_wav(&filepath, &signal, args.sample_rate).context("Failed to write WAV file")?;
            log::info!("{}: {} clicks", filename, peaks.len());

            manifest_entries.push(ManifestEntry {
                file: filename,
                interval_ms,
                trial,
                seed,
                peaks,
            });

            file_count += 1;
            eprint!("\rGenerating: {}/{}", file_count, total_files);
        }
    }
    eprintln!();

    if args.manifest {
        let manifest = Manifest {
            sample_rate: args.sample_rate,
            duration: args.duration,
            files: manifest_entries,
        };
        let manifest_path = args.output_dir.join("manifest.json");
        let manifest_json =
            serde_json::to_string_pretty(&manifest).context("Failed to serialize manifest")?;
        fs::write(&manifest_path, manifest_json).context("Failed to write manifest")?;
        eprintln!("Manifest written to: {}", manifest_path.display());
    }

    eprintln!(
        "Generated {} files in {}",
        total_files,
        args.output_dir.display()
    );
    Ok(())
}
