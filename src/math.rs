use bevy::math::Vec2;

/// Axis-aligned rectangle in canvas space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(
            width >= 0.0 && height >= 0.0,
            "rect size must be non-negative, got {width}x{height}"
        );
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    pub fn x1(&self) -> f32 {
        self.x
    }

    pub fn y1(&self) -> f32 {
        self.y
    }

    pub fn x2(&self) -> f32 {
        self.x + self.width
    }

    pub fn y2(&self) -> f32 {
        self.y + self.height
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn set_pos(&mut self, pos: Vec2) {
        self.x = pos.x;
        self.y = pos.y;
    }

    /// Same size, shifted by `delta`.
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..*self
        }
    }
}

/// Coarse overlap test used as a pre-filter before shape checks.
///
/// Compares corner distances against the summed extents on each axis.
/// Rects that merely touch, or have zero extent on an axis, do not overlap.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    let w = a.width + b.width;
    let h = a.height + b.height;
    (a.x1() - b.x2()).abs() < w
        && (a.x2() - b.x1()).abs() < w
        && (a.y1() - b.y2()).abs() < h
        && (a.y2() - b.y1()).abs() < h
}

/// True when `inner` lies entirely inside `outer` (edges may coincide).
pub fn contains(inner: &Rect, outer: &Rect) -> bool {
    inner.x1() >= outer.x1()
        && inner.y1() >= outer.y1()
        && inner.x2() <= outer.x2()
        && inner.y2() <= outer.y2()
}
