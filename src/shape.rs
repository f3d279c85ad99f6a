//! Multi-rectangle silhouettes.
//!
//! A sprite's bounding box is a poor collision shape for anything that is not
//! itself rectangular. A [`ShapeMatrix`] describes a handful of sub-rectangles
//! as proportions of the bounding box, so the silhouette scales with the
//! sprite and costs only a few rect tests per pair.

use serde::Deserialize;
use thiserror::Error;

use crate::math::{overlaps, Rect};

/// One sub-rectangle as `(dx, dy, dw, dh)`, proportions of the base rect.
pub type ShapeRow = (f32, f32, f32, f32);

#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("shape matrix has no rows")]
    Empty,
    #[error("shape row {row} has a non-finite value")]
    NonFinite { row: usize },
    #[error("shape row {row} has negative size ({dw}, {dh})")]
    NegativeSize { row: usize, dw: f32, dh: f32 },
    #[error("facing matrices differ in row count: left {left}, right {right}")]
    RowCountMismatch { left: usize, right: usize },
}

/// Validated, immutable list of proportional sub-rectangles.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<ShapeRow>")]
pub struct ShapeMatrix {
    rows: Vec<ShapeRow>,
}

impl ShapeMatrix {
    pub fn new(rows: Vec<ShapeRow>) -> Result<Self, ShapeError> {
        if rows.is_empty() {
            return Err(ShapeError::Empty);
        }
        for (row, &(dx, dy, dw, dh)) in rows.iter().enumerate() {
            if ![dx, dy, dw, dh].iter().all(|v| v.is_finite()) {
                return Err(ShapeError::NonFinite { row });
            }
            if dw < 0.0 || dh < 0.0 {
                return Err(ShapeError::NegativeSize { row, dw, dh });
            }
        }
        Ok(Self { rows })
    }

    /// Single row covering the whole base rect.
    pub fn identity() -> Self {
        Self {
            rows: vec![(0.0, 0.0, 1.0, 1.0)],
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Sub-rectangles for `base`, in row order.
    pub fn apply<'a>(&'a self, base: &'a Rect) -> impl Iterator<Item = Rect> + 'a {
        self.rows.iter().map(move |&(dx, dy, dw, dh)| Rect {
            x: base.x + dx * base.width,
            y: base.y + dy * base.height,
            width: dw * base.width,
            height: dh * base.height,
        })
    }
}

impl TryFrom<Vec<ShapeRow>> for ShapeMatrix {
    type Error = ShapeError;

    fn try_from(rows: Vec<ShapeRow>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

pub fn shape_rects(base: &Rect, matrix: &ShapeMatrix) -> Vec<Rect> {
    matrix.apply(base).collect()
}

/// True if any sub-rect of `a` overlaps any sub-rect of `b`.
pub fn shapes_collide(a: &[Rect], b: &[Rect]) -> bool {
    a.iter().any(|ra| b.iter().any(|rb| overlaps(ra, rb)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_matrix() -> ShapeMatrix {
        ShapeMatrix::new(vec![
            (0.20, 0.08, 0.60, 0.18),
            (0.06, 0.20, 0.88, 0.35),
            (0.13, 0.55, 0.74, 0.15),
            (0.28, 0.70, 0.45, 0.25),
        ])
        .unwrap()
    }

    #[test]
    fn output_count_matches_rows() {
        let base = Rect::new(10.0, 20.0, 50.0, 50.0);
        let m = player_matrix();
        assert_eq!(shape_rects(&base, &m).len(), m.len());
        assert_eq!(shape_rects(&base, &ShapeMatrix::identity()).len(), 1);
    }

    #[test]
    fn identity_row_reproduces_base() {
        let base = Rect::new(-7.5, 31.0, 70.0, 50.0);
        let rects = shape_rects(&base, &ShapeMatrix::identity());
        assert_eq!(rects, vec![base]);
    }

    #[test]
    fn rows_scale_with_base() {
        let base = Rect::new(100.0, 200.0, 50.0, 40.0);
        let m = ShapeMatrix::new(vec![(0.5, 0.25, 0.5, 0.5)]).unwrap();
        let rects = shape_rects(&base, &m);
        assert_eq!(rects, vec![Rect::new(125.0, 210.0, 25.0, 20.0)]);
    }

    #[test]
    fn rejects_empty_matrix() {
        assert_eq!(ShapeMatrix::new(vec![]), Err(ShapeError::Empty));
    }

    #[test]
    fn rejects_negative_size() {
        let err = ShapeMatrix::new(vec![(0.0, 0.0, 1.0, 1.0), (0.1, 0.1, -0.2, 0.5)]).unwrap_err();
        assert!(matches!(err, ShapeError::NegativeSize { row: 1, .. }));
    }

    #[test]
    fn rejects_nan() {
        let err = ShapeMatrix::new(vec![(f32::NAN, 0.0, 1.0, 1.0)]).unwrap_err();
        assert_eq!(err, ShapeError::NonFinite { row: 0 });
    }

    #[test]
    fn deserializes_through_validation() {
        let m: ShapeMatrix = ron::from_str("[(0.0, 0.0, 1.0, 1.0), (0.25, 0.5, 0.5, 0.5)]").unwrap();
        assert_eq!(m.len(), 2);
        assert!(ron::from_str::<ShapeMatrix>("[(0.0, 0.0, -1.0, 1.0)]").is_err());
    }

    #[test]
    fn collide_short_circuits_on_any_pair() {
        let a = [Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(50.0, 50.0, 10.0, 10.0)];
        let b = [Rect::new(55.0, 55.0, 10.0, 10.0)];
        assert!(shapes_collide(&a, &b));
        assert!(shapes_collide(&b, &a));
    }

    #[test]
    fn no_collision_in_gaps_between_sub_rects() {
        // The bounding boxes overlap, but the probe sits in the empty corner
        // left of the player's head.
        let player = Rect::new(0.0, 0.0, 50.0, 50.0);
        let probe = Rect::new(0.0, 0.0, 5.0, 5.0);
        assert!(overlaps(&player, &probe));
        let shapes = shape_rects(&player, &player_matrix());
        assert!(!shapes_collide(&shapes, &[probe]));
    }
}
