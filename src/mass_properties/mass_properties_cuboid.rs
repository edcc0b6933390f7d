use crate::math::{PrincipalAngularInertia, Real, Vector};

/// Volume and unit-mass principal inertia of a solid cuboid given by its
/// half-extents.
pub fn cuboid_volume_unit_inertia(
    half_extents: &Vector<Real>,
) -> (Real, PrincipalAngularInertia<Real>) {
    let volume = half_extents.x * half_extents.y * half_extents.z * 8.0;
    let ix = (half_extents.x * half_extents.x) / 3.0;
    let iy = (half_extents.y * half_extents.y) / 3.0;
    let iz = (half_extents.z * half_extents.z) / 3.0;

    (volume, Vector::new(iy + iz, ix + iz, ix + iy))
}
