// Copyright 2023 John Nunley
//
// This file is part of sweep-geometry.
//
// sweep-geometry is free software: you can redistribute it and/or modify it
// under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or (at your
// option) any later version.
//
// sweep-geometry is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License
// for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with sweep-geometry. If not, see <https://www.gnu.org/licenses/>.

//! Caller-owned edge soup fed to and produced by the sweep.

use alloc::vec::Vec;

use crate::line::Edge;
use crate::point::Point;

/// An axis-aligned bounding box, used for `Polygon`'s cached bounding
/// box and for the optional clip limits a polygon may carry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoundingBox {
    min: Point<i32>,
    max: Point<i32>,
}

impl BoundingBox {
    /// The smallest box containing all of `points`.
    ///
    /// Returns `None` for an empty iterator — there is no meaningful
    /// bounding box for zero points.
    pub fn of_points(points: impl IntoIterator<Item = Point<i32>>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut min = first;
        let mut max = first;
        for p in points {
            min = Point::new(min.x().min(p.x()), min.y().min(p.y()));
            max = Point::new(max.x().max(p.x()), max.y().max(p.y()));
        }
        Some(BoundingBox { min, max })
    }

    /// The minimum corner.
    #[inline]
    pub fn min(&self) -> Point<i32> {
        self.min
    }

    /// The maximum corner.
    #[inline]
    pub fn max(&self) -> Point<i32> {
        self.max
    }

    /// Does this box overlap `other` in `x`?
    #[inline]
    pub fn x_overlaps(&self, other: &BoundingBox) -> bool {
        self.min.x() <= other.max.x() && other.min.x() <= self.max.x()
    }
}

/// An ordered collection of input edges, plus optional clip limits and
/// a cached bounding box.
///
/// A `Polygon` need not be simple or even correctly wound; the
/// [`crate::reduce_polygon`] and [`crate::tessellate_polygon`]
/// operations exist precisely to resolve self-intersections and
/// extract a fill region from whatever edge soup is handed in.
#[derive(Debug, Clone, Default)]
pub struct Polygon {
    edges: Vec<Edge>,
    clip: Option<BoundingBox>,
    bbox: Option<BoundingBox>,
}

impl Polygon {
    /// An empty polygon.
    pub fn new() -> Self {
        Polygon::default()
    }

    /// Build a polygon from an edge list, dropping degenerate edges
    /// and computing the cached bounding box.
    pub fn from_edges(edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut poly = Polygon::new();
        for edge in edges {
            poly.push_edge(edge);
        }
        poly
    }

    /// Append a single edge, refreshing the cached bounding box.
    pub fn push_edge(&mut self, edge: Edge) {
        let new_box = BoundingBox::of_points([edge.top_point(), edge.bottom_point()]);
        self.bbox = match (self.bbox.take(), new_box) {
            (Some(a), Some(b)) => BoundingBox::of_points([a.min(), a.max(), b.min(), b.max()]),
            (existing, new) => existing.or(new),
        };
        self.edges.push(edge);
    }

    /// The edges making up this polygon.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Remove every edge, preparing this polygon to be refilled
    /// in-place by [`crate::reduce_polygon`] / [`crate::intersect_polygons`].
    pub fn clear(&mut self) {
        self.edges.clear();
        self.bbox = None;
    }

    /// The cached bounding box, if any edges have been pushed.
    #[inline]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bbox
    }

    /// Optional axis-aligned clip limits applied before the edges are
    /// swept; edges entirely outside the clip box contribute nothing.
    #[inline]
    pub fn clip_limits(&self) -> Option<BoundingBox> {
        self.clip
    }

    /// Set the clip limits.
    pub fn set_clip_limits(&mut self, clip: Option<BoundingBox>) {
        self.clip = clip;
    }

    fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub(crate) fn clipped_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let clip = self.clip;
        self.edges.iter().copied().filter(move |edge| match clip {
            None => true,
            Some(clip) => {
                let edge_box = BoundingBox::of_points([edge.top_point(), edge.bottom_point()])
                    .expect("edge has two points");
                clip.x_overlaps(&edge_box) && edge.top() < clip.max().y() && edge.bottom() > clip.min().y()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_grows_with_edges() {
        let mut poly = Polygon::new();
        poly.push_edge(Edge::from_segment(Point::new(0, 0), Point::new(10, 10), 1).unwrap());
        poly.push_edge(Edge::from_segment(Point::new(-5, 0), Point::new(0, 20), 1).unwrap());

        let bbox = poly.bounding_box().unwrap();
        assert_eq!(bbox.min(), Point::new(-5, 0));
        assert_eq!(bbox.max(), Point::new(10, 20));
    }

    #[test]
    fn clear_resets_bbox() {
        let mut poly = Polygon::new();
        poly.push_edge(Edge::from_segment(Point::new(0, 0), Point::new(10, 10), 1).unwrap());
        poly.clear();
        assert!(poly.is_empty());
        assert!(poly.bounding_box().is_none());
    }
}
