//! Axis-aligned bounding boxes.

use crate::math::{Point, Real, Vector};

/// An axis-aligned bounding box.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with minimum coordinates of this AABB.
    pub mins: Point<Real>,
    /// The point with maximum coordinates of this AABB.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB.
    ///
    /// `mins` must be componentwise smaller than or equal to `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Aabb {
        Aabb::new(center - half_extents, center + half_extents)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// Enlarges this AABB by `amount` on every side.
    #[inline]
    pub fn loosened(&self, amount: Real) -> Aabb {
        Aabb {
            mins: self.mins - Vector::repeat(amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }

    /// Tests whether `pt` lies inside of this AABB.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        pt.x >= self.mins.x
            && pt.y >= self.mins.y
            && pt.z >= self.mins.z
            && pt.x <= self.maxs.x
            && pt.y <= self.maxs.y
            && pt.z <= self.maxs.z
    }
}
