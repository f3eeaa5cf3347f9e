use std::io::Read as _;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use va_core::config::RenderOptions;
use va_core::grid::Grid;

pub mod cli;

/// Config cherchée dans le répertoire courant quand --config est absent.
const DEFAULT_CONFIG: &str = "vectascii.toml";

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config
    let mut options = resolve_options(&cli)?;

    // 4. Appliquer les overrides CLI
    cli.apply_overrides(&mut options)?;

    // 5. Lire l'entrée
    let text = read_input(cli.input.as_deref())?;

    // 6. Rendu
    let grid = Grid::load(&text);
    let svg = va_svg::render(&grid, &options);

    // 7. Écrire la sortie
    write_output(cli.output.as_deref(), &svg)
}

/// Resolve options: --config must exist; the default path silently falls
/// back to defaults.
fn resolve_options(cli: &cli::Cli) -> Result<RenderOptions> {
    if let Some(ref path) = cli.config {
        return va_core::config::load_options(path);
    }
    let fallback = Path::new(DEFAULT_CONFIG);
    if fallback.exists() {
        va_core::config::load_options(fallback)
    } else {
        log::warn!("Config introuvable : {DEFAULT_CONFIG}. Utilisation des défauts.");
        Ok(RenderOptions::default())
    }
}

/// Lit le fichier d'entrée, ou stdin si absent ou "-".
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Impossible de lire {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Impossible de lire stdin")?;
            Ok(text)
        }
    }
}

/// Écrit le document, ou l'imprime sur stdout si aucun chemin n'est donné.
fn write_output(output: Option<&Path>, svg: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, svg)
            .with_context(|| format!("Impossible d'écrire {}", path.display())),
        None => {
            print!("{svg}");
            Ok(())
        }
    }
}
