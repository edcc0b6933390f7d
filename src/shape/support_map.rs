//! Trait for convex shapes representable by a support mapping function.

use crate::math::{Isometry, Point, Real, Vector};
use na::Unit;

/// Trait of convex shapes representable by a support mapping function.
///
/// The support mapping of a convex shape maps a direction to the shape point
/// that maximizes their dot product. It is the only geometric primitive
/// GJK/EPA-style algorithms need, and it is queried many times per contact
/// test, so implementations must be allocation-free.
///
/// All support points returned by this trait exclude the collision margin:
/// the margin is a Minkowski-sum inflation the caller applies on top.
pub trait SupportMap {
    /// Evaluates the support function of this shape, in its scaled local
    /// frame.
    ///
    /// `dir` is used only for its orientation: two directions that are
    /// positive multiples of each other yield the same point. Directions with
    /// a degenerate projection (e.g. exactly along the axis of a solid of
    /// revolution) resolve to a canonical point documented by each impl.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as [`Self::local_support_point`] except that `dir` is normalized.
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.local_support_point(dir.as_ref())
    }

    /// Evaluates the support function of this shape transformed by
    /// `transform`.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }

    /// Same as [`Self::support_point`] except that `dir` is normalized.
    fn support_point_toward(
        &self,
        transform: &Isometry<Real>,
        dir: &Unit<Vector<Real>>,
    ) -> Point<Real> {
        let local_dir = Unit::new_unchecked(transform.inverse_transform_vector(dir));
        transform * self.local_support_point_toward(&local_dir)
    }
}
