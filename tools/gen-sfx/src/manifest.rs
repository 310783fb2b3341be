//! sfx.toml manifest parsing and batch rendering
//!
//! A manifest lists any number of sounds, each with its own parameters:
//!
//! ```toml
//! output_dir = "assets"
//!
//! [[sounds]]
//! id = "swoosh"
//! seed = 7
//!
//! [[sounds]]
//! id = "swoosh_long"
//! duration = 0.5
//! drive = 2.0
//! ```

use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use serde::Deserialize;
use sfx_synth::{generate_swoosh, SwooshParams, SwooshReport};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// sfx.toml manifest structure
#[derive(Debug, Deserialize)]
pub struct SfxManifest {
    /// Directory the rendered WAV files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub sounds: Vec<SoundEntry>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("assets")
}

/// One sound to render, written to `<output_dir>/<id>.wav`
#[derive(Debug, Deserialize)]
pub struct SoundEntry {
    pub id: String,
    #[serde(flatten)]
    pub params: SwooshParams,
}

impl SfxManifest {
    /// Load manifest from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid manifest: {}", path.display()))
    }

    /// Parse manifest from a string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse sfx.toml")
    }

    /// Check ids and every sound's parameters without rendering
    pub fn validate(&self) -> Result<()> {
        if self.sounds.is_empty() {
            bail!("Manifest declares no sounds");
        }

        let mut seen = HashSet::new();
        for sound in &self.sounds {
            if sound.id.is_empty() || sound.id.contains(['/', '\\']) || sound.id.starts_with('.') {
                bail!("Invalid sound id '{}': must be a plain file stem", sound.id);
            }
            if !seen.insert(sound.id.as_str()) {
                bail!("Duplicate sound id '{}'", sound.id);
            }
            sound
                .params
                .validate()
                .with_context(|| format!("Sound '{}' has invalid parameters", sound.id))?;
        }

        Ok(())
    }
}

/// Load swoosh parameters from an optional TOML file
pub fn load_params(path: Option<&Path>) -> Result<SwooshParams> {
    let Some(path) = path else {
        return Ok(SwooshParams::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
}

/// Create the parent directory of `path` if it does not exist yet
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    Ok(())
}

/// Render every sound in the manifest
///
/// Sounds are independent and render in parallel. Fails if any sound fails;
/// sounds that succeeded are still on disk.
pub fn build_all(
    manifest: &SfxManifest,
    output_override: Option<&Path>,
) -> Result<Vec<SwooshReport>> {
    manifest.validate()?;

    let output_dir = output_override.unwrap_or(manifest.output_dir.as_path());
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    tracing::info!(
        "Rendering {} sounds to {}",
        manifest.sounds.len(),
        output_dir.display()
    );

    manifest
        .sounds
        .par_iter()
        .map(|sound| {
            let path = output_dir.join(format!("{}.wav", sound.id));
            generate_swoosh(&sound.params, &path)
                .with_context(|| format!("Failed to render sound '{}'", sound.id))
        })
        .collect()
}
