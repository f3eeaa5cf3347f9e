use std::path::PathBuf;

use clap::Parser;

use va_core::config::RenderOptions;

/// vectascii — ASCII art to SVG diagram renderer.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fichier texte d'entrée. "-" ou absent : lecture de stdin.
    pub input: Option<PathBuf>,

    /// Fichier SVG de sortie. Absent : écriture sur stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fichier de configuration TOML. Défaut : vectascii.toml si présent.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Largeur de cellule en pixels (écrase la config).
    #[arg(long)]
    pub cell_width: Option<f32>,

    /// Hauteur de cellule en pixels (écrase la config).
    #[arg(long)]
    pub cell_height: Option<f32>,

    /// Taille de police en pixels (écrase la config).
    #[arg(long)]
    pub font_size: Option<f32>,

    /// Désactiver la fusion des segments colinéaires.
    #[arg(long, default_value_t = false)]
    pub no_optimize: bool,

    /// Émettre les coordonnées en décimales fixes plutôt qu'en forme compacte.
    #[arg(long, default_value_t = false)]
    pub no_compact_path: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Applique les surcharges CLI sur les options chargées, puis valide.
    ///
    /// # Errors
    /// Returns an error if an override produces unusable dimensions.
    pub fn apply_overrides(&self, options: &mut RenderOptions) -> anyhow::Result<()> {
        if let Some(v) = self.cell_width {
            options.cell_width = v;
        }
        if let Some(v) = self.cell_height {
            options.cell_height = v;
        }
        if let Some(v) = self.font_size {
            options.font_size = v;
        }
        if self.no_optimize {
            options.optimize = false;
        }
        if self.no_compact_path {
            options.compact_path = false;
        }
        options.validate()?;
        options.clamp_all();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli::parse_from(["vectascii"])
    }

    #[test]
    fn overrides_replace_config_values() {
        let mut cli = bare_cli();
        cli.cell_width = Some(10.0);
        cli.no_optimize = true;
        let mut options = RenderOptions::default();
        cli.apply_overrides(&mut options).unwrap();
        assert_eq!(options.cell_width, 10.0);
        assert!(!options.optimize);
        assert_eq!(options.cell_height, 16.0);
    }

    #[test]
    fn zero_cell_width_is_rejected() {
        let mut cli = bare_cli();
        cli.cell_width = Some(0.0);
        let mut options = RenderOptions::default();
        assert!(cli.apply_overrides(&mut options).is_err());
    }
}
