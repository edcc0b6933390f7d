use crate::bounding_volume::BoundingSphere;
use crate::math::{Isometry, Real};
use crate::shape::Cone;

impl Cone {
    /// Computes the world-space bounding sphere of this cone, transformed by
    /// `pos`.
    #[inline]
    pub fn bounding_sphere(&self, pos: &Isometry<Real>) -> BoundingSphere {
        self.local_bounding_sphere().transform_by(pos)
    }

    /// Computes the local-space bounding sphere of this cone, inclusive of
    /// margin.
    ///
    /// The sphere is centered at the cone's center of mass, not at the local
    /// origin.
    #[inline]
    pub fn local_bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.local_center_of_mass(), self.max_radius() + self.margin())
    }
}
