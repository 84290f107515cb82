//! Build generated theme files from design-token sources.
//!
//! ```bash
//! cast-build                                # build every configured theme
//! cast-build --theme default --out-dir dist # build one theme elsewhere
//! cast-build --check                        # assemble without writing
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cast::theme::{emit, BuildConfig};

#[derive(Parser)]
#[command(name = "cast-build")]
#[command(about = "Resolve design tokens into generated theme files")]
struct Cli {
    /// Build configuration file (TOML). Falls back to CAST_BUILD_CONFIG, then defaults
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Directory holding the token source files
    #[arg(long)]
    tokens_dir: Option<PathBuf>,

    /// Directory to write generated files to
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Only build the theme with this name
    #[arg(long)]
    theme: Option<String>,

    /// Assemble every theme and report errors without writing files
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if cli.check {
        let themes = emit::check(&config).context("Token check failed")?;
        for theme in &themes {
            log::info!("Theme '{}' assembles cleanly", theme.name);
        }
        return Ok(());
    }

    let manifest = emit::build(&config)
        .with_context(|| format!("Failed to build themes into {:?}", config.out_dir))?;
    log::info!("Token build complete ({} themes)", manifest.themes.len());
    Ok(())
}

fn load_config(cli: &Cli) -> Result<BuildConfig> {
    let mut config = match &cli.config {
        Some(path) => BuildConfig::from_file(path)
            .with_context(|| format!("Failed to load build config {:?}", path))?,
        None => BuildConfig::from_env_or_default(),
    };

    if let Some(dir) = &cli.tokens_dir {
        config = config.with_tokens_dir(dir.clone());
    }
    if let Some(dir) = &cli.out_dir {
        config = config.with_out_dir(dir.clone());
    }
    if let Some(name) = &cli.theme {
        config = config
            .only_theme(name)
            .with_context(|| format!("Theme '{}' is not configured", name))?;
    }

    Ok(config)
}
