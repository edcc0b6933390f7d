use crate::bounding_volume::BoundingSphere;
use crate::math::{Isometry, Real};
use crate::shape::Cuboid;

impl Cuboid {
    /// Computes the world-space bounding sphere of this cuboid, transformed
    /// by `pos`.
    #[inline]
    pub fn bounding_sphere(&self, pos: &Isometry<Real>) -> BoundingSphere {
        self.local_bounding_sphere().transform_by(pos)
    }

    /// Computes the local-space bounding sphere of this cuboid, inclusive of
    /// margin.
    #[inline]
    pub fn local_bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.local_center_of_mass(), self.max_radius() + self.margin())
    }
}
