//! Types partagés et configuration pour vectascii.
//!
//! This crate contains the character grid, the primitive data model, and
//! the render options used across the vectascii workspace.

pub mod config;
pub mod element;
pub mod error;
pub mod grid;

pub use config::RenderOptions;
pub use element::{Element, Marker, Stroke};
pub use error::CoreError;
pub use grid::{Grid, Loc, Point};

/// Re-exports pour accès par chemin sémantique.
pub mod geometry {
    pub use crate::grid::{Loc, Point};
}
