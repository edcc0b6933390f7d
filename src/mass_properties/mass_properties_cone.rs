use crate::math::{PrincipalAngularInertia, Real, Vector};

/// Volume and unit-mass principal inertia of a solid cone aligned with the
/// `y` axis, about its center of mass (a quarter height above the base).
pub fn cone_volume_unit_inertia(
    half_height: Real,
    radius: Real,
) -> (Real, PrincipalAngularInertia<Real>) {
    let volume = radius * radius * std::f32::consts::PI * half_height * 2.0 / 3.0;
    let sq_radius = radius * radius;
    let sq_height = half_height * half_height * 4.0;
    let off_principal = sq_radius * 3.0 / 20.0 + sq_height * 3.0 / 80.0;
    let principal = sq_radius * 3.0 / 10.0;

    (volume, Vector::new(off_principal, principal, off_principal))
}
