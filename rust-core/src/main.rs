use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use crystal_lattice::config::ViewerConfig;
use crystal_lattice::geometries::{FitResult, OrthographicFrustum};
use crystal_lattice::structure::{PresetCatalog, ViewerSession};
use env_logger::Env;
use log::{debug, info};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "crystal-lattice")]
#[command(about = "Unit cells, atom positions and camera framing for crystal lattice presets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML file with viewer settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available presets
    List,
    /// Print the geometry of a preset as JSON
    Show {
        /// Preset key, e.g. `fcc`
        key: String,

        #[command(flatten)]
        view: ViewArgs,
    },
    /// Print the bounding-box fit and orthographic frustum of a preset as JSON
    Frame {
        /// Preset key, e.g. `hcp`
        key: String,

        /// Viewport width / height
        #[arg(short, long)]
        aspect: Option<f64>,

        #[command(flatten)]
        view: ViewArgs,
    },
}

/// Overrides on top of the config file
#[derive(Args, Debug, Default)]
struct ViewArgs {
    /// Draw hexagonal cells as a full hexagonal prism
    #[arg(long)]
    prism: bool,

    /// Translate the structure so its bounding box is centered on the origin
    #[arg(long, conflicts_with = "no_recenter")]
    recenter: bool,

    /// Keep the structure at its lattice coordinates
    #[arg(long)]
    no_recenter: bool,
}

impl ViewArgs {
    fn apply(&self, config: &ViewerConfig) -> ViewerConfig {
        ViewerConfig {
            prism_for_hexagonal: self.prism || config.prism_for_hexagonal,
            recenter: (self.recenter || config.recenter) && !self.no_recenter,
            ..config.clone()
        }
    }
}

#[derive(Serialize)]
struct Framing {
    fit: FitResult,
    frustum: OrthographicFrustum,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let config = load_config(cli.config.as_ref())?;
    debug!("Using {:?}", config);

    info!("Starting crystal-lattice v{}", crystal_lattice::VERSION);

    match cli.command {
        Commands::List => list_presets(),
        Commands::Show { key, view } => show_structure(&key, view.apply(&config)),
        Commands::Frame { key, aspect, view } => {
            let aspect = aspect.unwrap_or(config.aspect);
            frame_structure(&key, aspect, view.apply(&config))
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ViewerConfig> {
    let Some(path) = path else {
        return Ok(ViewerConfig::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = ViewerConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid settings in config file {}", path.display()))?;
    Ok(config)
}

fn list_presets() -> anyhow::Result<()> {
    for preset in PresetCatalog::global() {
        println!("{:<14} {}", preset.key, preset.name);
    }
    Ok(())
}

fn show_structure(key: &str, config: ViewerConfig) -> anyhow::Result<()> {
    let mut session = ViewerSession::new(config);
    let structure = session.select(key)?;
    info!(
        "{}: {} edges, {} atoms",
        structure.name,
        structure.edges.len(),
        structure.atoms.len()
    );
    println!("{}", serde_json::to_string_pretty(structure.as_ref())?);
    Ok(())
}

fn frame_structure(key: &str, aspect: f64, config: ViewerConfig) -> anyhow::Result<()> {
    if !(aspect.is_finite() && aspect > 0.0) {
        anyhow::bail!("Aspect ratio must be positive, got {}", aspect);
    }
    let mut session = ViewerSession::new(config);
    let structure = session.select(key)?;
    let framing = Framing {
        fit: structure.fit,
        frustum: OrthographicFrustum::from_fit(&structure.fit, aspect),
    };
    println!("{}", serde_json::to_string_pretty(&framing)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_extend_config() {
        let config = ViewerConfig {
            recenter: false,
            ..ViewerConfig::default()
        };
        let view = ViewArgs {
            prism: true,
            recenter: true,
            no_recenter: false,
        };
        let merged = view.apply(&config);
        assert!(merged.prism_for_hexagonal);
        assert!(merged.recenter);
    }

    #[test]
    fn test_config_recenter_is_honoured() {
        let merged = ViewArgs::default().apply(&ViewerConfig::default());
        assert!(merged.recenter);
        assert!(!merged.prism_for_hexagonal);

        let view = ViewArgs {
            no_recenter: true,
            ..ViewArgs::default()
        };
        assert!(!view.apply(&ViewerConfig::default()).recenter);
    }

    #[test]
    fn test_cli_parses_view_flags() {
        let args = ["crystal-lattice", "frame", "hcp", "--prism", "--no-recenter"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Frame { key, aspect, view } => {
                assert_eq!(key, "hcp");
                assert_eq!(aspect, None);
                assert!(view.prism);
                assert!(view.no_recenter);
            }
            _ => panic!("expected the frame command"),
        }
        let clashing = ["crystal-lattice", "show", "sc", "--recenter", "--no-recenter"];
        assert!(Cli::try_parse_from(clashing).is_err());
    }
}
