//! Géométrie d'ancrage d'une cellule.

use va_core::config::RenderOptions;
use va_core::grid::{Loc, Point};

/// Fractions de subdivision d'une cellule le long de chaque axe.
const FRACTIONS: [f32; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Treillis de subdivision 4×4 d'une cellule : 5×5 points de fraction de
/// `cell_width`/`cell_height`.
///
/// Les neuf ancres nommées (quatre coins, quatre milieux d'arête, centre)
/// indexent ce treillis. Tout est dérivé des ratios, jamais d'offsets
/// pixels bruts, pour que les traits de deux cellules adjacentes se
/// rejoignent bord à bord sans trou ni chevauchement.
///
/// # Example
/// ```
/// use va_core::config::RenderOptions;
/// use va_core::grid::{Loc, Point};
/// use va_glyph::anchor::CellFrame;
///
/// let frame = CellFrame::new(Loc::new(0, 0), &RenderOptions::default());
/// assert_eq!(frame.center(), Point::new(4.0, 8.0));
/// assert_eq!(frame.bottom_right(), Point::new(8.0, 16.0));
/// ```
pub struct CellFrame {
    xs: [f32; 5],
    ys: [f32; 5],
}

impl CellFrame {
    /// Construit le treillis de la cellule `loc`.
    #[must_use]
    pub fn new(loc: Loc, options: &RenderOptions) -> Self {
        let ox = loc.x as f32 * options.cell_width;
        let oy = loc.y as f32 * options.cell_height;
        let mut xs = [0.0; 5];
        let mut ys = [0.0; 5];
        for (i, f) in FRACTIONS.iter().enumerate() {
            xs[i] = ox + f * options.cell_width;
            ys[i] = oy + f * options.cell_height;
        }
        Self { xs, ys }
    }

    /// Point du treillis aux indices de fraction `(ix, iy)`.
    ///
    /// # Panics
    /// Panics if an index exceeds 4.
    #[inline]
    #[must_use]
    pub fn at(&self, ix: usize, iy: usize) -> Point {
        Point::new(self.xs[ix], self.ys[iy])
    }

    /// Coin haut-gauche.
    #[inline]
    #[must_use]
    pub fn top_left(&self) -> Point {
        self.at(0, 0)
    }

    /// Milieu de l'arête haute.
    #[inline]
    #[must_use]
    pub fn top_mid(&self) -> Point {
        self.at(2, 0)
    }

    /// Coin haut-droite.
    #[inline]
    #[must_use]
    pub fn top_right(&self) -> Point {
        self.at(4, 0)
    }

    /// Milieu de l'arête gauche.
    #[inline]
    #[must_use]
    pub fn mid_left(&self) -> Point {
        self.at(0, 2)
    }

    /// Centre de la cellule.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point {
        self.at(2, 2)
    }

    /// Milieu de l'arête droite.
    #[inline]
    #[must_use]
    pub fn mid_right(&self) -> Point {
        self.at(4, 2)
    }

    /// Coin bas-gauche.
    #[inline]
    #[must_use]
    pub fn bottom_left(&self) -> Point {
        self.at(0, 4)
    }

    /// Milieu de l'arête basse.
    #[inline]
    #[must_use]
    pub fn bottom_mid(&self) -> Point {
        self.at(2, 4)
    }

    /// Coin bas-droite.
    #[inline]
    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.at(4, 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_of_origin_cell() {
        let frame = CellFrame::new(Loc::new(0, 0), &RenderOptions::default());
        assert_eq!(frame.top_left(), Point::new(0.0, 0.0));
        assert_eq!(frame.top_mid(), Point::new(4.0, 0.0));
        assert_eq!(frame.mid_right(), Point::new(8.0, 8.0));
        assert_eq!(frame.bottom_mid(), Point::new(4.0, 16.0));
    }

    #[test]
    fn anchors_offset_by_cell_size() {
        let options = RenderOptions::default();
        let frame = CellFrame::new(Loc::new(3, 2), &options);
        assert_eq!(frame.top_left(), Point::new(24.0, 32.0));
        assert_eq!(frame.center(), Point::new(28.0, 40.0));
    }

    #[test]
    fn quarter_lattice_points() {
        let frame = CellFrame::new(Loc::new(0, 0), &RenderOptions::default());
        assert_eq!(frame.at(1, 3), Point::new(2.0, 12.0));
    }

    #[test]
    fn adjacent_cells_share_their_edge() {
        let options = RenderOptions::default();
        let left = CellFrame::new(Loc::new(0, 0), &options);
        let right = CellFrame::new(Loc::new(1, 0), &options);
        assert_eq!(left.mid_right(), right.mid_left());
        assert_eq!(left.bottom_right(), right.bottom_left());
    }
}
