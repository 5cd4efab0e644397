//! Geometry primitives: homogeneous 2D points, rectangles and affine
//! transforms. Foundation for all chart layout.

use std::fmt;

/// A homogeneous 2D coordinate (x, y, 1).
///
/// The projective component is always 1; the type only exists to make
/// transform application explicit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference, useful for turning two corners into a size.
    pub fn delta(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point( x={}, y={} )", self.x, self.y)
    }
}

/// An axis-aligned rectangle: an origin plus a size.
///
/// The coordinate space depends on context: device pixels at the figure
/// root, normalized [0,1]x[0,1] inside a series' plot area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub position: Point,
    pub scale: Point,
}

impl Rect {
    pub const fn new(position: Point, scale: Point) -> Self {
        Self { position, scale }
    }

    pub fn width(&self) -> f64 {
        self.scale.x
    }

    pub fn height(&self) -> f64 {
        self.scale.y
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect( position={}, scale={} )", self.position, self.scale)
    }
}

/// A 2D affine transform restricted to axis-aligned scale and translation.
///
/// Equivalent to the 3x3 matrix
///
/// ```text
/// | sx  0  tx |
/// |  0 sy  ty |
/// |  0  0   1 |
/// ```
///
/// The closed representation makes the domain invariant (no rotation, no
/// shear, no projective part) hold by construction. A negative `sy` is how
/// the renderer flips the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    sx: f64,
    sy: f64,
    tx: f64,
    ty: f64,
}

impl AffineTransform {
    pub const fn identity() -> Self {
        Self {
            sx: 1.0,
            sy: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Scale by `(sx, sy)` then translate by `(tx, ty)`.
    pub const fn scale_translate(sx: f64, sy: f64, tx: f64, ty: f64) -> Self {
        Self { sx, sy, tx, ty }
    }

    /// Matrix product `self * other`: `other` is applied first.
    pub fn compose(&self, other: &AffineTransform) -> AffineTransform {
        AffineTransform {
            sx: self.sx * other.sx,
            sy: self.sy * other.sy,
            tx: self.sx * other.tx + self.tx,
            ty: self.sy * other.ty + self.ty,
        }
    }

    /// Apply to a homogeneous point.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(self.sx * p.x + self.tx, self.sy * p.y + self.ty)
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}
