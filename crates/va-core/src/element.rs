use crate::grid::{Loc, Point};

/// Style de trait d'une primitive.
///
/// # Example
/// ```
/// use va_core::element::Stroke;
/// assert!(matches!(Stroke::default(), Stroke::Solid));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stroke {
    /// Trait plein.
    #[default]
    Solid,
    /// Trait pointillé.
    Dashed,
}

/// Décoration d'extrémité d'une primitive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Marker {
    /// Pointe de flèche à l'extrémité finale.
    Arrow,
    /// Aucune décoration.
    #[default]
    None,
}

/// Primitive géométrique produite par la classification d'une cellule.
///
/// Union fermée, toujours filtrée par match exhaustif : ajouter un variant
/// force la mise à jour localisée de chaque consommateur à la compilation.
/// La table de règles actuelle ne produit que `Line` ; `Arc`, `Text` et
/// `Path` font partie du modèle cible et sont sérialisables (jamais un
/// chemin « non implémenté »).
///
/// # Example
/// ```
/// use va_core::element::{Element, Marker, Stroke};
/// use va_core::grid::Point;
/// let line = Element::Line {
///     start: Point::new(0.0, 8.0),
///     end: Point::new(8.0, 8.0),
///     stroke: Stroke::Solid,
///     marker: Marker::None,
/// };
/// assert!(matches!(line, Element::Line { .. }));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    /// Segment de droite entre deux points.
    Line {
        /// Extrémité initiale.
        start: Point,
        /// Extrémité finale.
        end: Point,
        /// Style de trait.
        stroke: Stroke,
        /// Décoration d'extrémité.
        marker: Marker,
    },
    /// Arc circulaire entre deux points.
    Arc {
        /// Extrémité initiale.
        start: Point,
        /// Extrémité finale.
        end: Point,
        /// Rayon en pixels.
        radius: f32,
        /// Prendre le grand arc plutôt que le petit.
        large_arc: bool,
    },
    /// Contenu textuel ancré sur une cellule.
    Text {
        /// Cellule d'ancrage.
        at: Loc,
        /// Contenu, échappé à la sérialisation.
        content: String,
    },
    /// Chemin libre exprimé en commande de tracé.
    Path {
        /// Extrémité initiale.
        start: Point,
        /// Extrémité finale.
        end: Point,
        /// Commande de tracé, émise après le déplacement initial.
        command: String,
        /// Style de trait.
        stroke: Stroke,
    },
}
