use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use faceframes::{analysis, catalog::Catalog, config, input, ShapeLabel};
use log::{debug, info, warn};

#[derive(Parser)]
#[command(name = "faceframes")]
#[command(
    version,
    about = "Face-shape classification and eyewear recommendations from facial landmarks"
)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a JSON file of 68 facial landmarks
    Classify {
        /// Landmark file: [{"x": .., "y": ..}, ...] or [[x, y], ...]
        file: PathBuf,
        /// Print the full analysis as JSON
        #[arg(short, long)]
        json: bool,
        /// Log measurements and per-shape scores
        #[arg(short, long)]
        verbose: bool,
    },
    /// Show the eyewear recommendation for a face shape
    Recommend {
        /// Shape name, e.g. Oval or Heart
        shape: String,
    },
    /// Open config file in editor
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose_flag = matches!(cli.command, Commands::Classify { verbose: true, .. });
    let mut cfg = config::load_config(cli.config.as_deref())?;
    cfg.verbose |= verbose_flag;

    env_logger::builder()
        .filter_level(if cfg.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_target(false)
        .format_timestamp(None)
        .init();

    match cli.command {
        Commands::Classify { file, json, .. } => classify(&cfg, &file, json),
        Commands::Recommend { shape } => recommend(&cfg, &shape),
        Commands::Config => open_config(cli.config.as_deref()),
    }
}

fn load_catalog(cfg: &config::Config) -> Result<Catalog> {
    match &cfg.catalog {
        Some(path) => Catalog::load(path),
        None => Catalog::builtin(),
    }
}

fn classify(cfg: &config::Config, file: &Path, json: bool) -> Result<()> {
    let points = input::load_landmarks(file).context("Failed to load landmarks")?;
    debug!("Loaded {} landmarks from {}", points.len(), file.display());

    let catalog = match load_catalog(cfg) {
        Ok(catalog) => Some(catalog),
        Err(e) => {
            warn!("Recommendation table unavailable: {e:#}");
            None
        }
    };

    let result = analysis::analyze(&points, cfg, catalog.as_ref());

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match result.label {
        ShapeLabel::NoFaceData => warn!(
            "Only {} landmarks found; a full 68-point set is required",
            points.len()
        ),
        ShapeLabel::Inconclusive => {
            warn!("The face geometry does not clearly match any shape")
        }
        label => info!("Face shape: {}", label),
    }
    if let Some(features) = &result.features {
        debug!(
            "height/cheek={:.3} jaw/cheek={:.3} forehead/cheek={:.3} jaw angle={:.1}°",
            features.height_to_cheek(),
            features.jaw_to_cheek(),
            features.forehead_to_cheek(),
            features.jaw_angle
        );
    }

    println!("Shape: {}", result.label);
    println!("Recommendation: {}", result.recommendation);
    if let Some(record) = &result.record {
        print_record(record);
    }
    Ok(())
}

fn recommend(cfg: &config::Config, shape: &str) -> Result<()> {
    let label: ShapeLabel = shape
        .parse()
        .with_context(|| format!("Unknown face shape '{shape}'"))?;

    println!("{}: {}", label, label.recommendation());

    let catalog = load_catalog(cfg).context("Failed to load recommendation table")?;
    match catalog.get(label) {
        Some(record) => print_record(record),
        None => info!("No catalog entry for {}", label),
    }
    Ok(())
}

fn print_record(record: &faceframes::catalog::RecommendationRecord) {
    println!();
    println!("{}", record.description);
    println!();
    println!("Recommended glasses:");
    for (style, why) in record.styles() {
        println!("  - {style}: {why}");
    }
    let pictures = record.pictures_by_style();
    if !pictures.is_empty() {
        println!();
        println!("Examples:");
        for (style, refs) in pictures {
            println!("  {style}: {}", refs.join(", "));
        }
    }
}

fn open_config(path: Option<&Path>) -> Result<()> {
    let config_path = path.unwrap_or(&config::CONFIG_PATH).to_path_buf();
    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    if !config_path.exists() {
        config::save_config(&config::Config::default(), Some(&config_path))
            .context("Failed to write default config")?;
    }

    info!("Opening config file: {:?}", config_path);

    let status = std::process::Command::new(editor)
        .arg(&config_path)
        .status()
        .context("Failed to open editor")?;

    if !status.success() {
        anyhow::bail!("Editor exited with non-zero status");
    }

    Ok(())
}
