use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Options de rendu, immuables après construction.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use va_core::config::RenderOptions;
/// let options = RenderOptions::default();
/// assert_eq!(options.cell_width, 8.0);
/// assert_eq!(options.cell_height, 16.0);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RenderOptions {
    /// Taille de police en pixels, pour les éléments texte et le style du document.
    pub font_size: f32,
    /// Largeur d'une cellule en pixels.
    pub cell_width: f32,
    /// Hauteur d'une cellule en pixels.
    pub cell_height: f32,
    /// Fusionner les segments colinéaires adjacents au rendu.
    pub optimize: bool,
    /// Émettre les coordonnées en forme compacte (zéros traînants supprimés).
    pub compact_path: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            cell_width: 8.0,
            cell_height: 16.0,
            optimize: true,
            compact_path: true,
        }
    }
}

impl RenderOptions {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.font_size = self.font_size.clamp(4.0, 128.0);
        self.cell_width = self.cell_width.clamp(1.0, 256.0);
        self.cell_height = self.cell_height.clamp(1.0, 256.0);
    }

    /// Reject values that clamping cannot repair (non-finite, non-positive).
    ///
    /// # Errors
    /// Returns an error if a cell dimension or the font size is unusable.
    ///
    /// # Example
    /// ```
    /// use va_core::config::RenderOptions;
    /// let mut options = RenderOptions::default();
    /// options.cell_width = 0.0;
    /// assert!(options.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.cell_width.is_finite()
            || !self.cell_height.is_finite()
            || self.cell_width <= 0.0
            || self.cell_height <= 0.0
        {
            return Err(CoreError::InvalidCellSize {
                width: self.cell_width,
                height: self.cell_height,
            });
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(CoreError::Config(format!(
                "font_size invalide : {}",
                self.font_size
            )));
        }
        Ok(())
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct OptionsFile {
    render: RenderSection,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct RenderSection {
    font_size: Option<f32>,
    cell_width: Option<f32>,
    cell_height: Option<f32>,
    optimize: Option<bool>,
    compact_path: Option<bool>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if a merged
/// value is unusable.
///
/// # Example
/// ```no_run
/// use va_core::config::load_options;
/// use std::path::Path;
/// let options = load_options(Path::new("vectascii.toml")).unwrap();
/// ```
pub fn load_options(path: &Path) -> Result<RenderOptions> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let file: OptionsFile = toml::from_str(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;

    let mut options = RenderOptions::default();

    let r = file.render;
    if let Some(v) = r.font_size {
        options.font_size = v;
    }
    if let Some(v) = r.cell_width {
        options.cell_width = v;
    }
    if let Some(v) = r.cell_height {
        options.cell_height = v;
    }
    if let Some(v) = r.optimize {
        options.optimize = v;
    }
    if let Some(v) = r.compact_path {
        options.compact_path = v;
    }

    options.validate()?;
    options.clamp_all();
    Ok(options)
}
