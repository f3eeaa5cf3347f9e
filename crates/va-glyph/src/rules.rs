//! Table ordonnée des règles de glyphes.
//!
//! Chaque règle associe un prédicat sur le caractère de la cellule à un
//! producteur de primitives. La table est évaluée en séquence et la
//! première règle qui matche gagne. L'ordre fait partie du contrat, pas
//! d'un détail d'implémentation.

use va_core::config::RenderOptions;
use va_core::element::{Element, Marker, Stroke};
use va_core::grid::{Grid, Loc, Point};

use crate::anchor::CellFrame;

/// Barre verticale pleine.
#[must_use]
pub const fn is_vertical(c: char) -> bool {
    c == '|'
}

/// Tiret horizontal plein.
#[must_use]
pub const fn is_horizontal(c: char) -> bool {
    c == '-'
}

/// Trait bas, le long de l'arête inférieure.
#[must_use]
pub const fn is_underscore(c: char) -> bool {
    c == '_'
}

/// Diagonale montante.
#[must_use]
pub const fn is_slash(c: char) -> bool {
    c == '/'
}

/// Diagonale descendante.
#[must_use]
pub const fn is_backslash(c: char) -> bool {
    c == '\\'
}

/// Barre verticale pointillée.
#[must_use]
pub const fn is_vertical_dashed(c: char) -> bool {
    c == ':'
}

/// Tiret horizontal pointillé.
#[must_use]
pub const fn is_horizontal_dashed(c: char) -> bool {
    c == '='
}

/// Une règle : prédicat sur le caractère, producteur de primitives.
struct GlyphRule {
    matches: fn(char) -> bool,
    emit: fn(&CellFrame) -> Vec<Element>,
}

/// Table évaluée dans l'ordre, première règle qui matche.
///
/// Les cinq règles pleines précèdent les deux règles pointillées : l'ordre
/// relatif des glyphes d'origine reste intact.
const RULES: &[GlyphRule] = &[
    GlyphRule {
        matches: is_vertical,
        emit: vertical,
    },
    GlyphRule {
        matches: is_horizontal,
        emit: horizontal,
    },
    GlyphRule {
        matches: is_underscore,
        emit: low_horizontal,
    },
    GlyphRule {
        matches: is_slash,
        emit: diagonal_up,
    },
    GlyphRule {
        matches: is_backslash,
        emit: diagonal_down,
    },
    GlyphRule {
        matches: is_vertical_dashed,
        emit: vertical_dashed,
    },
    GlyphRule {
        matches: is_horizontal_dashed,
        emit: horizontal_dashed,
    },
];

fn line(start: Point, end: Point, stroke: Stroke) -> Vec<Element> {
    vec![Element::Line {
        start,
        end,
        stroke,
        marker: Marker::None,
    }]
}

fn vertical(frame: &CellFrame) -> Vec<Element> {
    line(frame.top_mid(), frame.bottom_mid(), Stroke::Solid)
}

fn horizontal(frame: &CellFrame) -> Vec<Element> {
    line(frame.mid_left(), frame.mid_right(), Stroke::Solid)
}

fn low_horizontal(frame: &CellFrame) -> Vec<Element> {
    line(frame.bottom_left(), frame.bottom_right(), Stroke::Solid)
}

fn diagonal_up(frame: &CellFrame) -> Vec<Element> {
    line(frame.bottom_left(), frame.top_right(), Stroke::Solid)
}

fn diagonal_down(frame: &CellFrame) -> Vec<Element> {
    line(frame.top_left(), frame.bottom_right(), Stroke::Solid)
}

fn vertical_dashed(frame: &CellFrame) -> Vec<Element> {
    line(frame.top_mid(), frame.bottom_mid(), Stroke::Dashed)
}

fn horizontal_dashed(frame: &CellFrame) -> Vec<Element> {
    line(frame.mid_left(), frame.mid_right(), Stroke::Dashed)
}

/// Classifie la cellule `loc` : primitives du premier glyphe reconnu.
///
/// `None` couvre deux cas indistinguables : position hors de la région
/// occupée, ou caractère sans règle. Jamais de `Some(vec![])`.
///
/// # Example
/// ```
/// use va_core::config::RenderOptions;
/// use va_core::grid::{Grid, Loc};
/// use va_glyph::classify;
///
/// let grid = Grid::load("|x");
/// let options = RenderOptions::default();
/// assert!(classify(Loc::new(0, 0), &grid, &options).is_some());
/// assert!(classify(Loc::new(1, 0), &grid, &options).is_none());
/// ```
#[must_use]
pub fn classify(loc: Loc, grid: &Grid, options: &RenderOptions) -> Option<Vec<Element>> {
    let ch = grid.get(loc)?;
    let rule = RULES.iter().find(|rule| (rule.matches)(ch))?;
    let frame = CellFrame::new(loc, options);
    let elements = (rule.emit)(&frame);
    debug_assert!(!elements.is_empty(), "règle à ensemble vide");
    Some(elements)
}
