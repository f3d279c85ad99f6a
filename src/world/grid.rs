use bevy::math::Vec2;
use serde::Deserialize;

use crate::math::Rect;

/// Tile grid geometry loaded from RON.
///
/// Ground images carry a transparent band on top, so each row's visible
/// surface starts `offset_v` below the row's nominal origin. Zones are aligned
/// to the visible surface; sprite anchors are expressed relative to the
/// nominal origin.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GridConfig {
    pub col_width: f32,
    pub row_height: f32,
    pub offset_v: f32,
    pub rows: u32,
    pub cols: u32,
}

/// A block of whole cells. Row/col may be negative (just outside the map).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CellSpan {
    pub row: i32,
    pub col: i32,
    pub rows: u32,
    pub cols: u32,
}

impl CellSpan {
    pub fn new(row: i32, col: i32, rows: u32, cols: u32) -> Self {
        Self {
            row,
            col,
            rows,
            cols,
        }
    }
}

/// A point given as a cell plus a pixel inset from the cell's nominal origin.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Anchor {
    pub row: i32,
    pub col: i32,
    pub dx: f32,
    pub dy: f32,
}

impl GridConfig {
    /// Rect covering the visible surface of a span of cells.
    pub fn ground_rect(&self, span: CellSpan) -> Rect {
        Rect::new(
            span.col as f32 * self.col_width,
            span.row as f32 * self.row_height + self.offset_v,
            span.cols as f32 * self.col_width,
            span.rows as f32 * self.row_height,
        )
    }

    pub fn cell_rect(&self, row: i32, col: i32) -> Rect {
        self.ground_rect(CellSpan::new(row, col, 1, 1))
    }

    pub fn anchor_point(&self, anchor: Anchor) -> Vec2 {
        Vec2::new(
            anchor.col as f32 * self.col_width + anchor.dx,
            anchor.row as f32 * self.row_height + anchor.dy,
        )
    }

    /// One-cell-thick strips hugging the four map edges.
    pub fn border_spans(&self) -> [CellSpan; 4] {
        [
            CellSpan::new(-1, 0, 1, self.cols),
            CellSpan::new(self.rows as i32, 0, 1, self.cols),
            CellSpan::new(0, -1, self.rows, 1),
            CellSpan::new(0, self.cols as i32, self.rows, 1),
        ]
    }

    /// Canvas size including the transparent band above the first row and a
    /// matching margin below the last one.
    pub fn board_size(&self) -> Vec2 {
        Vec2::new(
            self.cols as f32 * self.col_width,
            self.rows as f32 * self.row_height + 2.0 * self.offset_v,
        )
    }
}
