use anyhow::Context;
use clap::Parser;
use rolling_stats::Stats;
use std::path::{Path, PathBuf};

use peakstream::StreamingPeakFinder;
use peakstream::audio::{AudioSource, WavFileSource};
use peakstream::config::{PatternSpec, PeakStreamConfig};
use peakstream::output::{Formatter, OutputFormat, PeakOutput, create_formatter};
use peakstream::stream_pos::{StreamPos, advance};

#[derive(Parser, Debug)]
#[command(name = "peakstream")]
#[command(about = "Detect dominant peaks (onsets) in WAV files", long_about = None)]
struct Args {
    /// WAV files to analyze
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Dominance window (e.g., "7", "7smp", "12.5ms")
    #[arg(short = 'p', long)]
    pattern: Option<PatternSpec>,

    /// Minimum peak value
    #[arg(short = 't', long)]
    threshold: Option<f32>,

    /// Samples per processing block
    #[arg(short = 'b', long)]
    block_size: Option<usize>,

    /// Channel to analyze (zero-based)
    #[arg(long)]
    channel: Option<usize>,

    /// Detect on signed sample values instead of absolute values
    #[arg(long)]
    no_rectify: bool,

    /// Output format: text, csv, json
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct FileSummary {
    sample_rate: u32,
    sample_count: u64,
    peak_count: usize,
    /// Inter-peak intervals in milliseconds
    intervals: Stats<f32>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = build_config(&args)?;
    let formatter = create_formatter(args.format, args.verbose > 0);
    if let Some(header) = formatter.header() {
        println!("{}", header);
    }

    let mut failures = 0;
    for path in &args.files {
        match analyze_file(path, &config, formatter.as_ref()) {
            Ok(summary) => {
                if args.verbose > 0 {
                    print_summary(path, &summary);
                }
            }
            Err(e) => {
                eprintln!("{}: ERROR: {:#}", path.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} file(s) failed", failures, args.files.len());
    }
    Ok(())
}

fn build_config(args: &Args) -> anyhow::Result<PeakStreamConfig> {
    let mut config = match args.config {
        Some(ref path) => PeakStreamConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PeakStreamConfig::default(),
    };

    if let Some(pattern) = args.pattern {
        config.peak.pattern = pattern;
    }
    if let Some(threshold) = args.threshold {
        config.peak.threshold = threshold;
    }
    if let Some(block_size) = args.block_size {
        config.audio.block_size = block_size;
    }
    if let Some(channel) = args.channel {
        config.audio.channel = channel;
    }
    if args.no_rectify {
        config.peak.rectify = false;
    }

    log::debug!("Configuration: {:?}", config);
    Ok(config)
}

fn analyze_file(
    path: &Path,
    config: &PeakStreamConfig,
    formatter: &dyn Formatter,
) -> anyhow::Result<FileSummary> {
    let mut source = WavFileSource::open(path, config.audio.channel, config.audio.block_size)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let sample_rate = source.sample_rate();

    let pattern_size = config.validate(sample_rate)?;
    let mut finder = StreamingPeakFinder::<f32>::new(pattern_size)?;
    log::info!(
        "Pattern {} -> {} samples ({:.2} ms lock-out)",
        config.peak.pattern,
        pattern_size,
        finder.lockout_distance() as f32 * 1000.0 / sample_rate as f32
    );

    let mut stream_pos: StreamPos = 0;
    let mut peak_count = 0;
    let mut last_peak: Option<StreamPos> = None;
    let mut intervals: Stats<f32> = Stats::new();

    while let Some(mut block) = source.next_block()? {
        if config.peak.rectify {
            for sample in block.iter_mut() {
                *sample = sample.abs();
            }
        }

        finder.process(&block, stream_pos, config.peak.threshold, |peak| {
            println!("{}", formatter.format(&PeakOutput::new(&peak, sample_rate)));
            if let Some(last) = last_peak {
                let interval = peak.stream_pos.wrapping_sub(last);
                intervals.update(interval as f32 * 1000.0 / sample_rate as f32);
            }
            last_peak = Some(peak.stream_pos);
            peak_count += 1;
        });
        stream_pos = advance(stream_pos, block.len());
    }

    Ok(FileSummary {
        sample_rate,
        sample_count: stream_pos,
        peak_count,
        intervals,
    })
}

fn print_summary(path: &Path, summary: &FileSummary) {
    eprintln!(
        "{}: {} peak(s) in {:.2} s",
        path.display(),
        summary.peak_count,
        summary.sample_count as f64 / summary.sample_rate as f64
    );
    if summary.intervals.count > 0 {
        eprintln!(
            "  interval: mean {:.2} ms, std {:.2} ms, min {:.2} ms, max {:.2} ms",
            summary.intervals.mean,
            summary.intervals.std_dev,
            summary.intervals.min,
            summary.intervals.max
        );
    }
}
