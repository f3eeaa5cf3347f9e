use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Invalid cell width/height dimensions.
    #[error("Dimensions de cellule invalides : {width}×{height}")]
    InvalidCellSize {
        /// Cell width in pixels.
        width: f32,
        /// Cell height in pixels.
        height: f32,
    },
}
