use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use ringrep::audio::{process_wav, read_wav, write_wav};
use ringrep::instance::Ringer;
use ringrep::trace::write_trace;
use ringrep::types::{CopyRange, RuntimeRange};

/// Ringrep - sample-repeat ring effect harness
///
/// Repeats each retained input sample N times, striding the input by N,
/// which lends the output a ring-modulator character.
#[derive(Parser, Debug)]
#[command(name = "ringrep")]
#[command(version = "0.1.0")]
#[command(about = "Sample-repeat ring effect harness", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the effect over a synthetic ramp and inspect the result.
    Ramp(RampArgs),
    /// Apply the effect to a WAV file, channel by channel.
    Wav(WavArgs),
}

#[derive(Args, Debug)]
struct RangeArgs {
    /// Use the extended [5, 500] harness range instead of [5, 200].
    #[arg(long)]
    extended: bool,

    /// Inline JSON clamp bounds, e.g. '{"min": 5, "max": 300}'.
    #[arg(long, value_name = "JSON", conflicts_with = "range_file")]
    range_json: Option<String>,

    /// Path to a JSON file holding clamp bounds.
    #[arg(long, value_name = "PATH", conflicts_with = "range_json")]
    range_file: Option<PathBuf>,
}

impl RangeArgs {
    /// Resolve the clamp bounds: an explicit JSON range wins, then the
    /// `--extended` preset, then the production range.
    fn resolve(&self) -> Result<CopyRange> {
        let runtime = match (&self.range_json, &self.range_file) {
            (Some(json), None) => Some(
                serde_json::from_str::<RuntimeRange>(json)
                    .context("Failed to parse inline JSON range")?,
            ),
            (None, Some(path)) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read range file: {}", path.display()))?;
                Some(
                    serde_json::from_str::<RuntimeRange>(&text)
                        .context("Failed to parse range file JSON")?,
                )
            }
            (None, None) => None,
            (Some(_), Some(_)) => {
                anyhow::bail!("Provide an inline JSON range or a range file, not both")
            }
        };

        match runtime {
            Some(runtime) => runtime.to_copy_range(),
            None if self.extended => Ok(CopyRange::extended()),
            None => Ok(CopyRange::production()),
        }
    }
}

#[derive(Args, Debug)]
struct RampArgs {
    /// Number of samples in the ramp buffer.
    #[arg(value_name = "SAMPLES")]
    samples: usize,

    /// Requested copy count (clamped into the active range).
    #[arg(value_name = "COPIES", allow_hyphen_values = true)]
    copies: f32,

    /// Write every output sample to a plain-text trace file.
    #[arg(long, value_name = "PATH")]
    trace: Option<PathBuf>,

    #[command(flatten)]
    range: RangeArgs,
}

#[derive(Args, Debug)]
struct WavArgs {
    /// Input WAV file.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file.
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Requested copy count (clamped into the active range).
    #[arg(long, allow_hyphen_values = true)]
    copies: f32,

    #[command(flatten)]
    range: RangeArgs,
}

impl WavArgs {
    /// Validate CLI arguments
    fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            anyhow::bail!("Input file does not exist: {:?}", self.input);
        }
        if !self.input.is_file() {
            anyhow::bail!("Input path is not a file: {:?}", self.input);
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Ramp(args) => run_ramp(&args),
        Command::Wav(args) => run_wav(&args),
    }
}

fn run_ramp(args: &RampArgs) -> Result<()> {
    let range = args.range.resolve()?;
    info!(samples = args.samples, copies = args.copies, "running ramp harness");

    // The sample values are arbitrary, but sequential values make the
    // output easy to read back.
    let input: Vec<f32> = (0..args.samples).map(|i| i as f32).collect();

    let mut ringer = Ringer::new(range);
    ringer.set_copies(args.copies);
    ringer.bind_input(input);
    ringer.bind_output(vec![0.0; args.samples]);
    ringer.run().context("Effect run failed")?;

    let output = ringer
        .take_output()
        .context("Output port was unbound after a successful run")?;

    println!("Ringrep v0.1.0 - sample repeat harness");
    println!("Samples: {}", args.samples);
    println!(
        "Copies:  {} requested, {} after clamp to [{}, {}]",
        args.copies,
        range.clamp(args.copies as i64),
        range.min(),
        range.max()
    );

    if let Some(path) = &args.trace {
        write_trace(&output, path)?;
        println!("Trace written to {:?}", path);
    } else {
        let shown = output.len().min(8);
        println!("First {} output sample(s): {:?}", shown, &output[..shown]);
    }

    Ok(())
}

fn run_wav(args: &WavArgs) -> Result<()> {
    args.validate()
        .context("Failed to validate command-line arguments")?;
    let range = args.range.resolve()?;

    let audio = read_wav(&args.input)?;
    info!(
        frames = audio.frames(),
        channels = audio.channels.len(),
        "loaded WAV input"
    );

    let processed = process_wav(&audio, args.copies as i64, range).context("Effect run failed")?;
    write_wav(&processed, &args.output)?;

    println!(
        "Processed {} frame(s) across {} channel(s)",
        audio.frames(),
        audio.channels.len()
    );
    println!(
        "Copies:  {} requested, {} after clamp to [{}, {}]",
        args.copies,
        range.clamp(args.copies as i64),
        range.min(),
        range.max()
    );
    println!("Output written to {:?}", args.output);

    Ok(())
}
