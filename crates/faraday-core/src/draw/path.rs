//! Vector path construction.
//!
//! Circuit symbols are assembled from a small set of primitives: straight
//! polylines, circular and elliptical arcs tessellated into cubic Bézier
//! segments, and filled pointer triangles. [`PathBuilder`] appends
//! primitives; the finished [`Path`] knows how to transform itself, compute
//! bounds, and serialize to SVG path data for the renderer.

use std::f32::consts::TAU;
use std::fmt::Write as _;

use thiserror::Error;

use crate::geometry::{Affine, Bounds, Point};

/// Cubic segments used to approximate one full turn of a circle.
///
/// A rendering-quality parameter, not a correctness constraint; nine
/// segments keep the error well under a stroke width at diagram scale.
const SEGMENTS_PER_TURN: f32 = 9.0;

/// Errors raised while constructing path geometry.
///
/// All of these are precondition violations on the call just made; nothing
/// is appended to the path when one is returned.
#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    /// A polyline needs at least two vertices to produce a segment.
    #[error("polyline needs at least two vertices, got {0}")]
    ShortPolyline(usize),

    /// An arc with zero sweep has no extent to tessellate.
    #[error("arc sweep angle must be non-zero")]
    ZeroSweep,

    /// A pointer whose tip coincides with its target has no direction.
    #[error("pointer tip and target coincide, direction is undefined")]
    DegeneratePointer,
}

/// One drawing step within a subpath.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// A straight segment to the given anchor.
    Line(Point),
    /// A cubic Bézier segment with two control handles.
    Cubic { c1: Point, c2: Point, to: Point },
}

impl Segment {
    /// The anchor this segment ends on.
    pub fn end(&self) -> Point {
        match *self {
            Segment::Line(to) => to,
            Segment::Cubic { to, .. } => to,
        }
    }
}

/// A connected run of segments starting from a move-to point.
#[derive(Debug, Clone, PartialEq)]
pub struct SubPath {
    start: Point,
    segments: Vec<Segment>,
}

impl SubPath {
    /// The move-to point this subpath starts at.
    pub fn start(&self) -> Point {
        self.start
    }

    /// The drawing steps after the start point.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The anchor this subpath ends on.
    pub fn end(&self) -> Point {
        self.segments.last().map_or(self.start, Segment::end)
    }

    /// Every anchor and control point, in traversal order.
    fn control_points(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.start).chain(self.segments.iter().flat_map(|segment| {
            let points: Vec<Point> = match *segment {
                Segment::Line(to) => vec![to],
                Segment::Cubic { c1, c2, to } => vec![c1, c2, to],
            };
            points
        }))
    }

    /// The same geometry traversed from the other end.
    fn reversed(&self) -> SubPath {
        let mut anchors = vec![self.start];
        anchors.extend(self.segments.iter().map(Segment::end));

        let mut segments = Vec::with_capacity(self.segments.len());
        for (i, segment) in self.segments.iter().enumerate().rev() {
            let to = anchors[i];
            segments.push(match *segment {
                Segment::Line(_) => Segment::Line(to),
                Segment::Cubic { c1, c2, .. } => Segment::Cubic { c1: c2, c2: c1, to },
            });
        }

        SubPath {
            start: self.end(),
            segments,
        }
    }

    fn map(&self, f: &impl Fn(Point) -> Point) -> SubPath {
        SubPath {
            start: f(self.start),
            segments: self
                .segments
                .iter()
                .map(|segment| match *segment {
                    Segment::Line(to) => Segment::Line(f(to)),
                    Segment::Cubic { c1, c2, to } => Segment::Cubic {
                        c1: f(c1),
                        c2: f(c2),
                        to: f(to),
                    },
                })
                .collect(),
        }
    }
}

/// A complete vector path: zero or more subpaths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    subpaths: Vec<SubPath>,
}

impl Path {
    /// An empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// A single straight segment. Wires rebuild their geometry with this on
    /// every refresh, so it cannot fail.
    pub fn line(from: Point, to: Point) -> Self {
        Path {
            subpaths: vec![SubPath {
                start: from,
                segments: vec![Segment::Line(to)],
            }],
        }
    }

    /// Whether the path contains no subpaths.
    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    /// The subpaths in drawing order.
    pub fn subpaths(&self) -> &[SubPath] {
        &self.subpaths
    }

    /// Every anchor point, in traversal order. Control handles are skipped.
    pub fn anchors(&self) -> impl Iterator<Item = Point> + '_ {
        self.subpaths.iter().flat_map(|subpath| {
            std::iter::once(subpath.start()).chain(subpath.segments.iter().map(Segment::end))
        })
    }

    /// Applies an affine transform to every point of the path.
    pub fn transform(&self, affine: &Affine) -> Path {
        let f = |point: Point| affine.apply(point);
        Path {
            subpaths: self.subpaths.iter().map(|sp| sp.map(&f)).collect(),
        }
    }

    /// The same geometry with subpaths and segments traversed in reverse,
    /// so a draw-in animation sweeps from the other end.
    pub fn reversed(&self) -> Path {
        Path {
            subpaths: self.subpaths.iter().rev().map(SubPath::reversed).collect(),
        }
    }

    /// World-space bounds over anchors and control handles, or `None` for an
    /// empty path. Conservative: control handles may lie slightly outside
    /// the inked curve.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.subpaths.iter().flat_map(SubPath::control_points))
    }

    /// Serializes to SVG path data (`M`/`L`/`C` commands).
    pub fn to_svg_data(&self) -> String {
        let mut data = String::new();
        for subpath in &self.subpaths {
            if !data.is_empty() {
                data.push(' ');
            }
            let start = subpath.start();
            let _ = write!(data, "M {} {}", start.x(), start.y());
            for segment in subpath.segments() {
                match *segment {
                    Segment::Line(to) => {
                        let _ = write!(data, " L {} {}", to.x(), to.y());
                    }
                    Segment::Cubic { c1, c2, to } => {
                        let _ = write!(
                            data,
                            " C {} {} {} {} {} {}",
                            c1.x(),
                            c1.y(),
                            c2.x(),
                            c2.y(),
                            to.x(),
                            to.y()
                        );
                    }
                }
            }
        }
        data
    }
}

/// Incremental builder for [`Path`] geometry.
///
/// # Examples
///
/// ```
/// use faraday_core::draw::PathBuilder;
/// use faraday_core::geometry::Point;
///
/// let mut builder = PathBuilder::new();
/// builder
///     .polyline(&[Point::flat(-1.0, 0.0), Point::flat(1.0, 0.0)])
///     .unwrap();
/// builder
///     .circle(Point::ORIGIN, 0.5, 0.0)
///     .unwrap();
/// let path = builder.build();
/// assert_eq!(path.subpaths().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a straight polyline through the given vertices.
    pub fn polyline(&mut self, vertices: &[Point]) -> Result<&mut Self, PathError> {
        if vertices.len() < 2 {
            return Err(PathError::ShortPolyline(vertices.len()));
        }
        self.path.subpaths.push(SubPath {
            start: vertices[0],
            segments: vertices[1..].iter().copied().map(Segment::Line).collect(),
        });
        Ok(self)
    }

    /// Appends several disconnected polylines.
    pub fn polygram<'a>(
        &mut self,
        groups: impl IntoIterator<Item = &'a [Point]>,
    ) -> Result<&mut Self, PathError> {
        for group in groups {
            self.polyline(group)?;
        }
        Ok(self)
    }

    /// Appends a circular arc of `sweep` radians starting at `start_angle`,
    /// tessellated into cubic segments.
    pub fn arc(
        &mut self,
        start_angle: f32,
        sweep: f32,
        center: Point,
        radius: f32,
    ) -> Result<&mut Self, PathError> {
        let subpath = unit_arc(start_angle, sweep)?;
        self.path.subpaths.push(subpath.map(&|point| {
            Point::new(
                point.x() * radius + center.x(),
                point.y() * radius + center.y(),
                center.z(),
            )
        }));
        Ok(self)
    }

    /// Appends a full circle, drawn starting from `start_angle`.
    pub fn circle(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
    ) -> Result<&mut Self, PathError> {
        self.arc(start_angle, TAU, center, radius)
    }

    /// Appends an elliptical arc: the unit arc stretched to `width` × `height`
    /// and moved to `center`.
    pub fn elliptical_arc(
        &mut self,
        start_angle: f32,
        sweep: f32,
        center: Point,
        width: f32,
        height: f32,
    ) -> Result<&mut Self, PathError> {
        let subpath = unit_arc(start_angle, sweep)?;
        self.path.subpaths.push(subpath.map(&|point| {
            Point::new(
                point.x() * 0.5 * width + center.x(),
                point.y() * 0.5 * height + center.y(),
                center.z(),
            )
        }));
        Ok(self)
    }

    /// Appends a full ellipse, drawn starting from `start_angle`.
    pub fn ellipse(
        &mut self,
        center: Point,
        width: f32,
        height: f32,
        start_angle: f32,
    ) -> Result<&mut Self, PathError> {
        self.elliptical_arc(start_angle, TAU, center, width, height)
    }

    /// Appends a pointer triangle with its tip at `tip`, aimed at `target`.
    ///
    /// `notch_depth_ratio` controls the back edge: 0 gives a solid triangle,
    /// larger values cut a concave notch toward the tip. Fails when tip and
    /// target coincide, since the direction would be undefined.
    pub fn pointer(
        &mut self,
        tip: Point,
        target: Point,
        width: f32,
        length: f32,
        notch_depth_ratio: f32,
    ) -> Result<&mut Self, PathError> {
        let direction = target
            .sub_point(tip)
            .normalized()
            .ok_or(PathError::DegeneratePointer)?;
        let orthogonal = Point::flat(direction.y(), -direction.x());

        let back = tip.sub_point(direction.scale(length));
        self.polyline(&[
            tip,
            back.add_point(orthogonal.scale(width / 2.0)),
            tip.sub_point(direction.scale(length * (1.0 - notch_depth_ratio))),
            back.sub_point(orthogonal.scale(width / 2.0)),
            tip,
        ])
    }

    /// Consumes the builder and returns the finished path.
    pub fn build(self) -> Path {
        self.path
    }
}

/// Tessellates an arc of the unit circle into cubic segments.
///
/// Anchors sit exactly on the circle; handles are offset along the tangent
/// by a third of the angular step.
fn unit_arc(start_angle: f32, sweep: f32) -> Result<SubPath, PathError> {
    if sweep == 0.0 {
        return Err(PathError::ZeroSweep);
    }

    let segment_count = ((SEGMENTS_PER_TURN * sweep.abs() / TAU).ceil() as usize).max(1);
    let d_theta = sweep / segment_count as f32;

    let anchor = |angle: f32| Point::flat(angle.cos(), angle.sin());
    let tangent = |angle: f32| Point::flat(-angle.sin(), angle.cos());

    let mut segments = Vec::with_capacity(segment_count);
    for i in 0..segment_count {
        let a0 = start_angle + d_theta * i as f32;
        let a1 = a0 + d_theta;
        let p0 = anchor(a0);
        let p1 = anchor(a1);
        segments.push(Segment::Cubic {
            c1: p0.add_point(tangent(a0).scale(d_theta / 3.0)),
            c2: p1.sub_point(tangent(a1).scale(d_theta / 3.0)),
            to: p1,
        });
    }

    Ok(SubPath {
        start: anchor(start_angle),
        segments,
    })
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    use float_cmp::assert_approx_eq;

    use super::*;

    fn assert_point_eq(actual: Point, expected: Point) {
        assert_approx_eq!(f32, actual.x(), expected.x(), epsilon = 1e-4);
        assert_approx_eq!(f32, actual.y(), expected.y(), epsilon = 1e-4);
    }

    #[test]
    fn test_polyline_needs_two_vertices() {
        let mut builder = PathBuilder::new();
        assert_eq!(builder.polyline(&[]).unwrap_err(), PathError::ShortPolyline(0));
        assert_eq!(
            builder.polyline(&[Point::ORIGIN]).unwrap_err(),
            PathError::ShortPolyline(1)
        );
        assert!(builder.build().is_empty());
    }

    #[test]
    fn test_polyline_anchors() {
        let vertices = [
            Point::flat(0.0, 0.0),
            Point::flat(1.0, 1.0),
            Point::flat(2.0, 0.0),
        ];
        let mut builder = PathBuilder::new();
        builder.polyline(&vertices).unwrap();
        let path = builder.build();

        let anchors: Vec<Point> = path.anchors().collect();
        assert_eq!(anchors, vertices);
    }

    #[test]
    fn test_quarter_arc_endpoints() {
        let mut builder = PathBuilder::new();
        builder
            .arc(0.0, FRAC_PI_2, Point::ORIGIN, 2.0)
            .unwrap();
        let path = builder.build();

        let subpath = &path.subpaths()[0];
        assert_point_eq(subpath.start(), Point::flat(2.0, 0.0));
        assert_point_eq(subpath.end(), Point::flat(0.0, 2.0));
    }

    #[test]
    fn test_full_circle_closes() {
        let mut builder = PathBuilder::new();
        builder.circle(Point::flat(1.0, -1.0), 1.5, -PI).unwrap();
        let path = builder.build();

        let subpath = &path.subpaths()[0];
        assert_eq!(subpath.segments().len(), 9);
        assert_point_eq(subpath.start(), subpath.end());

        // Every anchor sits on the circle.
        for anchor in path.anchors() {
            let r = anchor.sub_point(Point::flat(1.0, -1.0)).length();
            assert_approx_eq!(f32, r, 1.5, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_zero_sweep_rejected() {
        let mut builder = PathBuilder::new();
        assert_eq!(
            builder.arc(0.0, 0.0, Point::ORIGIN, 1.0).unwrap_err(),
            PathError::ZeroSweep
        );
    }

    #[test]
    fn test_elliptical_arc_endpoints() {
        // A half turn of a 2 x 1 ellipse runs from (+w/2, 0) to (-w/2, 0).
        let mut builder = PathBuilder::new();
        builder
            .elliptical_arc(0.0, PI, Point::flat(3.0, 0.0), 2.0, 1.0)
            .unwrap();
        let path = builder.build();

        let subpath = &path.subpaths()[0];
        assert_point_eq(subpath.start(), Point::flat(4.0, 0.0));
        assert_point_eq(subpath.end(), Point::flat(2.0, 0.0));
    }

    #[test]
    fn test_pointer_outline() {
        let mut builder = PathBuilder::new();
        builder
            .pointer(Point::ORIGIN, Point::flat(1.0, 0.0), 0.5, 0.7, 0.0)
            .unwrap();
        let path = builder.build();

        let anchors: Vec<Point> = path.anchors().collect();
        assert_eq!(anchors.len(), 5);
        assert_point_eq(anchors[0], Point::ORIGIN);
        assert_point_eq(anchors[1], Point::flat(-0.7, -0.25));
        assert_point_eq(anchors[2], Point::flat(-0.7, 0.0));
        assert_point_eq(anchors[3], Point::flat(-0.7, 0.25));
        assert_point_eq(anchors[4], Point::ORIGIN);
    }

    #[test]
    fn test_pointer_notch() {
        let mut builder = PathBuilder::new();
        builder
            .pointer(Point::ORIGIN, Point::flat(1.0, 0.0), 0.5, 1.0, 0.3)
            .unwrap();
        let anchors: Vec<Point> = builder.build().anchors().collect();

        // The back-center vertex moves toward the tip by the notch depth.
        assert_point_eq(anchors[2], Point::flat(-0.7, 0.0));
    }

    #[test]
    fn test_pointer_degenerate_direction() {
        let mut builder = PathBuilder::new();
        let err = builder
            .pointer(Point::flat(1.0, 1.0), Point::flat(1.0, 1.0), 0.5, 0.7, 0.0)
            .unwrap_err();
        assert_eq!(err, PathError::DegeneratePointer);
        assert!(builder.build().is_empty());
    }

    #[test]
    fn test_transform_moves_every_point() {
        let mut builder = PathBuilder::new();
        builder
            .polyline(&[Point::ORIGIN, Point::flat(1.0, 0.0)])
            .unwrap();
        builder.circle(Point::ORIGIN, 1.0, 0.0).unwrap();
        let path = builder.build();

        let mut affine = Affine::IDENTITY;
        affine.translate(Point::flat(10.0, 5.0));
        let moved = path.transform(&affine);

        for (a, b) in path.anchors().zip(moved.anchors()) {
            assert_point_eq(b, a.add_point(Point::flat(10.0, 5.0)));
        }
    }

    #[test]
    fn test_reversed_traversal() {
        let mut builder = PathBuilder::new();
        builder
            .polyline(&[
                Point::flat(0.0, 0.0),
                Point::flat(1.0, 0.0),
                Point::flat(1.0, 1.0),
            ])
            .unwrap();
        let path = builder.build();
        let reversed = path.reversed();

        let forward: Vec<Point> = path.anchors().collect();
        let mut backward: Vec<Point> = reversed.anchors().collect();
        backward.reverse();
        assert_eq!(forward, backward);

        // Reversing twice restores the original.
        assert_eq!(reversed.reversed(), path);
    }

    #[test]
    fn test_arc_reversed_preserves_shape() {
        let mut builder = PathBuilder::new();
        builder.arc(0.0, TAU / 4.0, Point::ORIGIN, 1.0).unwrap();
        let path = builder.build();
        let reversed = path.reversed();

        assert_point_eq(reversed.subpaths()[0].start(), path.subpaths()[0].end());
        assert_point_eq(reversed.subpaths()[0].end(), path.subpaths()[0].start());
        assert_eq!(reversed.reversed(), path);
    }

    #[test]
    fn test_svg_data() {
        let mut builder = PathBuilder::new();
        builder
            .polyline(&[Point::flat(0.0, 0.0), Point::flat(2.0, 0.0)])
            .unwrap();
        let data = builder.build().to_svg_data();
        assert_eq!(data, "M 0 0 L 2 0");
    }

    #[test]
    fn test_bounds() {
        let mut builder = PathBuilder::new();
        builder
            .polyline(&[Point::flat(-1.0, -2.0), Point::flat(3.0, 4.0)])
            .unwrap();
        let bounds = builder.build().bounds().unwrap();

        assert_approx_eq!(f32, bounds.min_x(), -1.0);
        assert_approx_eq!(f32, bounds.min_y(), -2.0);
        assert_approx_eq!(f32, bounds.max_x(), 3.0);
        assert_approx_eq!(f32, bounds.max_y(), 4.0);

        assert!(Path::new().bounds().is_none());
    }
}
