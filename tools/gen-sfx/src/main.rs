//! gen-sfx - procedural sound effect generator
//!
//! Renders swoosh effects to mono 16-bit WAV files, either one at a time from
//! command-line flags or in bulk from an sfx.toml manifest.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod manifest;

use manifest::{build_all, ensure_parent_dir, load_params, SfxManifest};

#[derive(Parser)]
#[command(name = "gen-sfx")]
#[command(about = "Generate procedural sound effects")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single swoosh
    Swoosh {
        /// Output WAV file
        #[arg(short, long, default_value = "assets/swoosh.wav")]
        output: PathBuf,

        /// TOML file with synthesis parameters
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Noise seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Duration in seconds
        #[arg(long)]
        duration: Option<f64>,

        /// Sample rate in Hz
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Fade-in/fade-out length in seconds
        #[arg(long)]
        fade: Option<f64>,

        /// Soft clipper drive gain (> 1)
        #[arg(long)]
        drive: Option<f64>,
    },

    /// Render every sound in a manifest
    Build {
        /// Path to sfx.toml manifest
        #[arg(default_value = "sfx.toml")]
        manifest: PathBuf,

        /// Output directory (overrides manifest)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate manifest without rendering
    Check {
        /// Path to sfx.toml manifest
        #[arg(default_value = "sfx.toml")]
        manifest: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match cli.command {
        Commands::Swoosh {
            output,
            config,
            seed,
            duration,
            sample_rate,
            fade,
            drive,
        } => {
            let mut params = load_params(config.as_deref())?;
            if let Some(seed) = seed {
                params.seed = Some(seed);
            }
            if let Some(duration) = duration {
                params.duration = duration;
            }
            if let Some(sample_rate) = sample_rate {
                params.sample_rate = sample_rate;
            }
            if let Some(fade) = fade {
                params.fade = fade;
            }
            if let Some(drive) = drive {
                params.drive = drive;
            }

            params.validate().context("Invalid swoosh parameters")?;
            let rendered = sfx_synth::render_swoosh(&params)
                .with_context(|| format!("Failed to generate {}", output.display()))?;

            ensure_parent_dir(&output)?;
            let report = rendered
                .write(&output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!(
                "{} ({} samples @ {} Hz, seed {})",
                report.path.display(),
                report.samples,
                report.sample_rate,
                report.seed
            );
        }
        Commands::Build { manifest, output } => {
            tracing::info!("Building sounds from {:?}", manifest);
            let config = SfxManifest::load(&manifest)?;
            let reports = build_all(&config, output.as_deref())?;
            for report in &reports {
                println!(
                    "{} ({} samples, seed {})",
                    report.path.display(),
                    report.samples,
                    report.seed
                );
            }
            tracing::info!("Build complete!");
        }
        Commands::Check { manifest } => {
            let config = SfxManifest::load(&manifest)?;
            config.validate()?;
            println!("{}: {} sounds OK", manifest.display(), config.sounds.len());
        }
    }

    Ok(())
}
