use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{ConvexShape, SupportMap};

/// Computes the local AABB of a support-mapped shape, inclusive of margin.
///
/// For a convex shape the extreme coordinate along each axis is exactly the
/// corresponding coordinate of the support point along that axis, so six
/// support queries give the tight margin-excluded box; the margin then
/// loosens it uniformly.
pub fn local_support_map_aabb<G: SupportMap>(shape: &G, margin: Real) -> Aabb {
    let maxs = Point::new(
        shape.local_support_point(&Vector::x()).x,
        shape.local_support_point(&Vector::y()).y,
        shape.local_support_point(&Vector::z()).z,
    );
    let mins = Point::new(
        shape.local_support_point(&(-Vector::x())).x,
        shape.local_support_point(&(-Vector::y())).y,
        shape.local_support_point(&(-Vector::z())).z,
    );

    Aabb::new(mins, maxs).loosened(margin)
}

impl ConvexShape {
    /// Computes the local AABB of this shape, inclusive of margin.
    pub fn local_aabb(&self) -> Aabb {
        local_support_map_aabb(self, self.margin())
    }
}
