//! Geometric primitives for circuit-element placement.
//!
//! This module provides the types the element and wire layers are built on:
//!
//! - [`Point`] - A 3-D coordinate in diagram space (z is conventionally 0)
//! - [`Axis`] / [`Axes`] - Coordinate axes and axis masks for wire bindings
//! - [`Affine`] - The transform applied to an element's outline and terminals
//! - [`Bounds`] - An axis-aligned rectangle in the drawing plane
//!
//! # Coordinate System
//!
//! Faraday uses the renderer's convention of a right-handed plane with the
//! origin at the center of the frame, X increasing rightward and Y increasing
//! upward. The third component exists so callers can keep full 3-D
//! coordinates around, but every catalogued symbol lives in the z = 0 plane.

/// A 3-D point in diagram coordinate space.
///
/// Coordinates are `f32`; the z component is carried through every operation
/// but stays 0 for planar diagrams.
///
/// # Examples
///
/// ```
/// use faraday_core::geometry::Point;
///
/// let a = Point::new(1.0, 2.0, 0.0);
/// let b = Point::new(3.0, -2.0, 0.0);
///
/// assert_eq!(a.add_point(b), Point::new(4.0, 0.0, 0.0));
/// assert_eq!(a.midpoint(b), Point::new(2.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
    z: f32,
}

impl Point {
    /// The origin.
    pub const ORIGIN: Point = Point {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new point with the specified coordinates.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a point in the drawing plane (z = 0).
    pub const fn flat(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Returns the x-coordinate.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate.
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns the z-coordinate.
    pub fn z(self) -> f32 {
        self.z
    }

    /// Returns the coordinate on the given axis.
    pub fn component(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Returns a copy with the coordinate on the given axis replaced.
    pub fn with_component(mut self, axis: Axis, value: f32) -> Self {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
        self
    }

    /// Vector addition.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    /// Vector subtraction.
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    /// Multiplies every coordinate by the given factor.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    /// Linear interpolation from `self` (t = 0) to `other` (t = 1).
    pub fn lerp(self, other: Point, t: f32) -> Self {
        self.add_point(other.sub_point(self).scale(t))
    }

    /// The point halfway between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Self {
        self.lerp(other, 0.5)
    }

    /// Euclidean length of this point treated as a vector.
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns the unit vector in this direction, or `None` for a vector too
    /// short to normalize meaningfully.
    pub fn normalized(self) -> Option<Self> {
        let length = self.length();
        if length < 1e-6 {
            None
        } else {
            Some(self.scale(1.0 / length))
        }
    }

    /// Checks whether all coordinates are zero.
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

/// A single coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes, in x, y, z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Index of this axis into per-axis storage.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// A set of coordinate axes, used to select which coordinates of a wire
/// endpoint track a bound terminal.
///
/// # Examples
///
/// ```
/// use faraday_core::geometry::{Axes, Axis};
///
/// let planar = Axes::X | Axes::Y;
/// assert!(planar.contains(Axis::X));
/// assert!(!planar.contains(Axis::Z));
/// assert!(Axes::ALL.contains(Axis::Z));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Axes {
    x: bool,
    y: bool,
    z: bool,
}

impl Axes {
    /// The empty axis set.
    pub const NONE: Axes = Axes {
        x: false,
        y: false,
        z: false,
    };

    /// The x axis alone.
    pub const X: Axes = Axes {
        x: true,
        y: false,
        z: false,
    };

    /// The y axis alone.
    pub const Y: Axes = Axes {
        x: false,
        y: true,
        z: false,
    };

    /// The z axis alone.
    pub const Z: Axes = Axes {
        x: false,
        y: false,
        z: true,
    };

    /// All three axes.
    pub const ALL: Axes = Axes {
        x: true,
        y: true,
        z: true,
    };

    /// Whether the given axis is in this set.
    pub fn contains(self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Whether this set selects no axes at all.
    pub fn is_empty(self) -> bool {
        !(self.x || self.y || self.z)
    }
}

impl std::ops::BitOr for Axes {
    type Output = Axes;

    fn bitor(self, rhs: Axes) -> Axes {
        Axes {
            x: self.x || rhs.x,
            y: self.y || rhs.y,
            z: self.z || rhs.z,
        }
    }
}

/// The transform applied to a circuit element.
///
/// Holds a 2×2 linear part acting on the drawing plane plus a 3-component
/// translation; z coordinates pass through the linear part untouched.
/// Rotation and scaling pivot about the element's anchor (its translation
/// point), so a symbol authored around its own origin rotates in place after
/// being positioned.
///
/// # Examples
///
/// ```
/// use faraday_core::geometry::{Affine, Point};
///
/// let mut transform = Affine::IDENTITY;
/// transform.translate(Point::flat(2.0, 0.0));
/// transform.rotate(std::f32::consts::FRAC_PI_2);
///
/// let moved = transform.apply(Point::flat(1.0, 0.0));
/// assert!((moved.x() - 2.0).abs() < 1e-6);
/// assert!((moved.y() - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    xx: f32,
    xy: f32,
    yx: f32,
    yy: f32,
    translation: Point,
}

impl Affine {
    /// The identity transform.
    pub const IDENTITY: Affine = Affine {
        xx: 1.0,
        xy: 0.0,
        yx: 0.0,
        yy: 1.0,
        translation: Point::ORIGIN,
    };

    /// A pure translation.
    pub fn translation(offset: Point) -> Self {
        Self {
            translation: offset,
            ..Self::IDENTITY
        }
    }

    /// Returns the anchor point (the accumulated translation).
    pub fn anchor(&self) -> Point {
        self.translation
    }

    /// Shifts the transform by the given offset.
    pub fn translate(&mut self, offset: Point) {
        self.translation = self.translation.add_point(offset);
    }

    /// Rotates by `angle` radians (counterclockwise) about the anchor.
    pub fn rotate(&mut self, angle: f32) {
        let (sin, cos) = angle.sin_cos();
        let (xx, xy, yx, yy) = (self.xx, self.xy, self.yx, self.yy);
        self.xx = cos * xx - sin * yx;
        self.xy = cos * xy - sin * yy;
        self.yx = sin * xx + cos * yx;
        self.yy = sin * xy + cos * yy;
    }

    /// Uniformly scales about the anchor.
    pub fn scale(&mut self, factor: f32) {
        self.scale_xy(factor, factor);
    }

    /// Scales about the anchor with independent x and y factors.
    pub fn scale_xy(&mut self, sx: f32, sy: f32) {
        self.xx *= sx;
        self.xy *= sx;
        self.yx *= sy;
        self.yy *= sy;
    }

    /// Applies the transform to a local-frame point.
    pub fn apply(&self, point: Point) -> Point {
        Point {
            x: self.xx * point.x() + self.xy * point.y() + self.translation.x(),
            y: self.yx * point.x() + self.yy * point.y() + self.translation.y(),
            z: point.z() + self.translation.z(),
        }
    }

    /// The uniform scale factor carried by the linear part, derived from its
    /// determinant. Exact for uniform scaling, the area-preserving average
    /// for anisotropic scaling.
    pub fn uniform_scale(&self) -> f32 {
        (self.xx * self.yy - self.xy * self.yx).abs().sqrt()
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// An axis-aligned rectangle in the drawing plane.
///
/// Used to size the export viewport; z coordinates are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// A degenerate bounds containing exactly one point.
    pub fn from_point(point: Point) -> Self {
        Self {
            min_x: point.x(),
            min_y: point.y(),
            max_x: point.x(),
            max_y: point.y(),
        }
    }

    /// The smallest bounds containing every given point, or `None` for an
    /// empty sequence.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let mut bounds = Self::from_point(points.next()?);
        for point in points {
            bounds.expand_to(point);
        }
        Some(bounds)
    }

    /// Returns the minimum x-coordinate.
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate.
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate.
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate.
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds.
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds.
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Grows the bounds to contain the given point.
    pub fn expand_to(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x());
        self.min_y = self.min_y.min(point.y());
        self.max_x = self.max_x.max(point.x());
        self.max_y = self.max_y.max(point.y());
    }

    /// The smallest bounds containing both `self` and `other`.
    pub fn merge(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Grows the bounds outward by `margin` on every side.
    pub fn with_margin(self, margin: f32) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }
}
