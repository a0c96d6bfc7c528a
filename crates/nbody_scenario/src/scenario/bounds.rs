//! Axis-aligned bounding boxes used as the sampling domain of a scenario.
//!
//! A box is either derived from a reference density so that larger scenarios
//! keep roughly the same spatial density, or parsed from four explicit corners.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scenario::body::Position;
use crate::scenario::config::ReferenceDensity;

/// Axis-aligned rectangle described by its bottom-left and top-right corners.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    pub bottom_left: Position,
    pub top_right: Position,
}

impl BoundingBox {
    pub const fn new(bottom_left: Position, top_right: Position) -> Self {
        Self {
            bottom_left,
            top_right,
        }
    }

    /// Square box of side `side` anchored at the origin.
    pub fn square_at_origin(side: f64) -> Self {
        Self::new(Position::ORIGIN, Position::new(side, side))
    }

    pub fn left(&self) -> f64 {
        self.bottom_left.x
    }

    pub fn right(&self) -> f64 {
        self.top_right.x
    }

    pub fn bottom(&self) -> f64 {
        self.bottom_left.y
    }

    pub fn top(&self) -> f64 {
        self.top_right.y
    }

    pub fn width(&self) -> f64 {
        self.right() - self.left()
    }

    pub fn height(&self) -> f64 {
        self.top() - self.bottom()
    }

    pub fn surface(&self) -> f64 {
        self.width() * self.height()
    }

    /// Fails unless width and height are finite and strictly positive.
    pub fn check_extent(&self) -> Result<()> {
        let (w, h) = (self.width(), self.height());
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(Error::Validation(format!(
                "bounding box must have finite, positive width and height, got {w} x {h}"
            )));
        }
        Ok(())
    }

    /// Returns true if `p` lies inside the box, edges included.
    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.bottom() && p.y <= self.top()
    }

    /// Smallest box enclosing every position, or `None` for an empty input.
    pub fn enclosing<I>(positions: I) -> Option<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut iter = positions.into_iter();
        let first = iter.next()?;
        let (mut bl, mut tr) = (first, first);
        for p in iter {
            bl.x = bl.x.min(p.x);
            bl.y = bl.y.min(p.y);
            tr.x = tr.x.max(p.x);
            tr.y = tr.y.max(p.y);
        }
        Some(Self::new(bl, tr))
    }
}

/// Derive a square box at the origin whose surface scales linearly with `body_count`.
///
/// `surface = reference_surface * body_count / reference_body_count`, side is `sqrt(surface)`.
/// A zero body count yields a degenerate box at the origin. The reference must be a
/// positive body count and a finite, positive surface.
pub fn derive_bounding_box(
    body_count: usize,
    reference_body_count: usize,
    reference_surface: f64,
) -> Result<BoundingBox> {
    ReferenceDensity::new(reference_body_count, reference_surface).validate()?;

    let surface = reference_surface * body_count as f64 / reference_body_count as f64;
    let side = surface.sqrt();
    if !side.is_finite() {
        return Err(Error::InvalidConfig(format!(
            "derived surface for {body_count} bodies is not finite"
        )));
    }
    Ok(BoundingBox::square_at_origin(side))
}

/// Four corners of a user-supplied box, named by compass direction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Corners {
    pub north_west: Position,
    pub north_east: Position,
    pub south_east: Position,
    pub south_west: Position,
}

impl Corners {
    pub const fn new(
        north_west: Position,
        north_east: Position,
        south_east: Position,
        south_west: Position,
    ) -> Self {
        Self {
            north_west,
            north_east,
            south_east,
            south_west,
        }
    }

    /// Validate the corners and convert them into a [`BoundingBox`].
    ///
    /// Edges must be axis aligned and the box must have positive width and height.
    /// Checks run in a fixed order and the first failure is reported.
    pub fn to_bounding_box(&self) -> Result<BoundingBox> {
        let (nw, ne, se, sw) = (
            self.north_west,
            self.north_east,
            self.south_east,
            self.south_west,
        );

        for (name, corner) in [
            ("upper-left", nw),
            ("upper-right", ne),
            ("bottom-right", se),
            ("bottom-left", sw),
        ] {
            if !(corner.x.is_finite() && corner.y.is_finite()) {
                return Err(Error::Validation(format!(
                    "{name} corner ({}, {}) is not finite",
                    corner.x, corner.y
                )));
            }
        }

        if nw.x != sw.x {
            return Err(Error::Validation(format!(
                "upper-left x ({}) and bottom-left x ({}) are different",
                nw.x, sw.x
            )));
        }
        if ne.x != se.x {
            return Err(Error::Validation(format!(
                "upper-right x ({}) and bottom-right x ({}) are different",
                ne.x, se.x
            )));
        }
        if nw.y != ne.y {
            return Err(Error::Validation(format!(
                "upper-left y ({}) and upper-right y ({}) are different",
                nw.y, ne.y
            )));
        }
        if sw.y != se.y {
            return Err(Error::Validation(format!(
                "bottom-left y ({}) and bottom-right y ({}) are different",
                sw.y, se.y
            )));
        }

        if ne.x <= nw.x {
            return Err(Error::Validation(format!(
                "upper-right x ({}) is not greater than upper-left x ({})",
                ne.x, nw.x
            )));
        }
        if nw.y <= sw.y {
            return Err(Error::Validation(format!(
                "upper-left y ({}) is not greater than bottom-left y ({})",
                nw.y, sw.y
            )));
        }

        let bbox = BoundingBox::new(sw, ne);
        bbox.check_extent()?;
        Ok(bbox)
    }
}

/// Parse an explicit box from its north-west, north-east, south-east and south-west corners.
pub fn parse_explicit_bounding_box(
    north_west: Position,
    north_east: Position,
    south_east: Position,
    south_west: Position,
) -> Result<BoundingBox> {
    Corners::new(north_west, north_east, south_east, south_west).to_bounding_box()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Position {
        Position::new(x, y)
    }

    fn validation_message(result: Result<BoundingBox>) -> String {
        match result {
            Err(Error::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_axis_aligned_rectangle() {
        let bbox =
            parse_explicit_bounding_box(p(0.0, 10.0), p(10.0, 10.0), p(10.0, 0.0), p(0.0, 0.0))
                .expect("valid box");
        assert_eq!(bbox.bottom_left, p(0.0, 0.0));
        assert_eq!(bbox.top_right, p(10.0, 10.0));
        assert_eq!(bbox.width(), 10.0);
        assert_eq!(bbox.height(), 10.0);
    }

    #[test]
    fn rejects_mismatched_left_edge() {
        let msg = validation_message(parse_explicit_bounding_box(
            p(0.0, 5.0),
            p(10.0, 6.0),
            p(10.0, 0.0),
            p(1.0, 0.0),
        ));
        assert!(msg.contains("upper-left x (0)"), "{msg}");
        assert!(msg.contains("bottom-left x (1)"), "{msg}");
    }

    #[test]
    fn rejects_each_inconsistency_with_its_own_message() {
        let right = validation_message(parse_explicit_bounding_box(
            p(0.0, 5.0),
            p(10.0, 5.0),
            p(11.0, 0.0),
            p(0.0, 0.0),
        ));
        assert!(right.starts_with("upper-right x"), "{right}");

        let top = validation_message(parse_explicit_bounding_box(
            p(0.0, 5.0),
            p(10.0, 6.0),
            p(10.0, 0.0),
            p(0.0, 0.0),
        ));
        assert!(top.starts_with("upper-left y (5) and upper-right y (6)"), "{top}");

        let bottom = validation_message(parse_explicit_bounding_box(
            p(0.0, 5.0),
            p(10.0, 5.0),
            p(10.0, 1.0),
            p(0.0, 0.0),
        ));
        assert!(bottom.starts_with("bottom-left y"), "{bottom}");

        let width = validation_message(parse_explicit_bounding_box(
            p(10.0, 5.0),
            p(10.0, 5.0),
            p(10.0, 0.0),
            p(10.0, 0.0),
        ));
        assert!(width.contains("not greater than upper-left x"), "{width}");

        let height = validation_message(parse_explicit_bounding_box(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(10.0, 5.0),
            p(0.0, 5.0),
        ));
        assert!(height.contains("not greater than bottom-left y"), "{height}");
    }

    #[test]
    fn rejects_nan_corners() {
        let result = parse_explicit_bounding_box(
            p(f64::NAN, 5.0),
            p(10.0, 5.0),
            p(10.0, 0.0),
            p(f64::NAN, 0.0),
        );
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn derived_box_for_reference_count_matches_reference_surface() {
        let bbox = derive_bounding_box(10, 10, 223_267_590_144.0).expect("valid reference");
        assert_eq!(bbox.bottom_left, Position::ORIGIN);
        assert_eq!(bbox.width(), 472_512.0);
        assert_eq!(bbox.height(), 472_512.0);
    }

    #[test]
    fn derived_surface_scales_linearly_with_count() {
        let small = derive_bounding_box(50, 10, 1_000.0).expect("valid reference");
        let large = derive_bounding_box(100, 10, 1_000.0).expect("valid reference");
        assert!((large.surface() - 2.0 * small.surface()).abs() < 1e-6);
        assert!((large.width() / small.width() - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn zero_count_derives_degenerate_box_at_origin() {
        let bbox = derive_bounding_box(0, 10, 1_000.0).expect("valid reference");
        assert_eq!(bbox.bottom_left, Position::ORIGIN);
        assert_eq!(bbox.top_right, Position::ORIGIN);
        assert!(bbox.contains(Position::ORIGIN));
    }

    #[test]
    fn derivation_rejects_unusable_references() {
        assert!(matches!(
            derive_bounding_box(5, 0, 1.0),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            derive_bounding_box(0, 0, 1.0),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            derive_bounding_box(5, 10, f64::INFINITY),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            derive_bounding_box(usize::MAX, 1, f64::MAX),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_infinite_corners() {
        let msg = validation_message(parse_explicit_bounding_box(
            p(f64::NEG_INFINITY, f64::INFINITY),
            p(f64::INFINITY, f64::INFINITY),
            p(f64::INFINITY, f64::NEG_INFINITY),
            p(f64::NEG_INFINITY, f64::NEG_INFINITY),
        ));
        assert!(msg.contains("not finite"), "{msg}");
    }

    #[test]
    fn rejects_boxes_whose_extent_overflows() {
        let msg = validation_message(parse_explicit_bounding_box(
            p(-f64::MAX, f64::MAX),
            p(f64::MAX, f64::MAX),
            p(f64::MAX, -f64::MAX),
            p(-f64::MAX, -f64::MAX),
        ));
        assert!(msg.contains("finite, positive width and height"), "{msg}");
    }

    #[test]
    fn enclosing_box_covers_all_positions() {
        assert!(BoundingBox::enclosing(Vec::new()).is_none());

        let bbox = BoundingBox::enclosing(vec![p(1.0, -2.0), p(-3.0, 4.0), p(0.5, 0.5)])
            .expect("non-empty input");
        assert_eq!(bbox.bottom_left, p(-3.0, -2.0));
        assert_eq!(bbox.top_right, p(1.0, 4.0));
    }
}
