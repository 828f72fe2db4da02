//! Rectangles and points in the editor's coordinate space.
//!
//! The space is y-up: `+x` points right and `+y` points up, so the first
//! line of a document sits just below the logical bounds' `top` edge.

/// A point in editor coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle given by its four edges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

impl Rect {
    /// Create a rectangle from its edges.
    #[must_use]
    pub const fn new(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Create a rectangle from its lower-left corner and size.
    #[must_use]
    pub fn from_origin_size(origin: Point, width: f32, height: f32) -> Self {
        Self::new(origin.x, origin.y, origin.x + width, origin.y + height)
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Lower-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.bottom)
    }

    /// Same size, moved so the lower-left corner sits at `origin`.
    #[must_use]
    pub fn moved_to(&self, origin: Point) -> Self {
        Self::from_origin_size(origin, self.width(), self.height())
    }

    /// Check whether `other` lies entirely within this rectangle (edges inclusive).
    #[must_use]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.bottom >= self.bottom
            && other.top <= self.top
    }
}
