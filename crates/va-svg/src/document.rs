//! Assemblage du document : collecte row-major, fusion, dimensions.

use rayon::prelude::*;

use va_core::config::RenderOptions;
use va_core::element::{Element, Marker};
use va_core::grid::{Grid, Loc, Point};
use va_glyph::classify;

use crate::writer;

/// Tolérance de contact entre extrémités lors de la fusion.
const MERGE_EPS: f32 = 1e-4;

/// Classifie toutes les cellules occupées, en ordre row-major.
///
/// Chaque ligne est classifiée en parallèle (aucune cellule ne dépend de
/// ses voisines), puis les résultats sont recollés dans l'ordre des lignes.
/// L'ordre de sortie (ligne 0 de gauche à droite, puis ligne 1, etc.) est
/// un contrat observable : c'est l'ordre de dessin.
#[must_use]
pub fn collect_cells(grid: &Grid, options: &RenderOptions) -> Vec<(Loc, Vec<Element>)> {
    let per_row: Vec<Vec<(Loc, Vec<Element>)>> = (0..grid.rows())
        .into_par_iter()
        .map(|y| {
            (0..grid.cols())
                .filter_map(|x| {
                    let loc = Loc::new(x as i32, y as i32);
                    classify(loc, grid, options).map(|elements| (loc, elements))
                })
                .collect()
        })
        .collect();
    per_row.into_iter().flatten().collect()
}

fn touches(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() <= MERGE_EPS && (a.y - b.y).abs() <= MERGE_EPS
}

/// Tente d'absorber `next` dans `prev` (prolongement colinéaire).
fn try_merge(prev: &mut Element, next: &Element) -> bool {
    let (
        Element::Line {
            start: prev_start,
            end: prev_end,
            stroke: prev_stroke,
            marker: prev_marker,
        },
        Element::Line {
            start: next_start,
            end: next_end,
            stroke: next_stroke,
            marker: next_marker,
        },
    ) = (prev, next)
    else {
        return false;
    };

    if prev_stroke != next_stroke
        || *prev_marker != Marker::None
        || *next_marker != Marker::None
        || !touches(*prev_end, *next_start)
    {
        return false;
    }

    let du = (prev_end.x - prev_start.x, prev_end.y - prev_start.y);
    let dv = (next_end.x - next_start.x, next_end.y - next_start.y);
    // Colinéaire et de même sens : produit vectoriel nul, produit scalaire positif.
    if (du.0 * dv.1 - du.1 * dv.0).abs() > MERGE_EPS || du.0 * dv.0 + du.1 * dv.1 <= 0.0 {
        return false;
    }

    *prev_end = *next_end;
    true
}

/// Fusionne les suites de segments colinéaires adjacents dans l'ordre de
/// dessin. Les segments survivants gardent leur ordre relatif.
#[must_use]
pub fn merge_adjacent(elements: Vec<Element>) -> Vec<Element> {
    let mut merged: Vec<Element> = Vec::with_capacity(elements.len());
    for element in elements {
        if let Some(prev) = merged.last_mut() {
            if try_merge(prev, &element) {
                continue;
            }
        }
        merged.push(element);
    }
    merged
}

/// Rend la grille en document SVG complet.
///
/// Pur et idempotent : même grille, mêmes options → sortie identique à
/// l'octet près. Une grille vide produit un document de surface nulle.
///
/// # Example
/// ```
/// use va_core::config::RenderOptions;
/// use va_core::grid::Grid;
///
/// let svg = va_svg::render(&Grid::load("|-"), &RenderOptions::default());
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("width=\"16\""));
/// ```
#[must_use]
pub fn render(grid: &Grid, options: &RenderOptions) -> String {
    let cells = collect_cells(grid, options);
    let mut elements: Vec<Element> = cells
        .into_iter()
        .flat_map(|(_, elements)| elements)
        .collect();
    if options.optimize {
        elements = merge_adjacent(elements);
    }

    let width = options.cell_width * grid.cols() as f32;
    let height = options.cell_height * grid.rows() as f32;
    log::debug!(
        "rendu : {} éléments, canevas {width}×{height}",
        elements.len()
    );
    writer::write_document(&elements, width, height, options)
}
