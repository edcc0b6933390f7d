use crate::math::{PrincipalAngularInertia, Real, Vector};

/// Volume and unit-mass principal inertia of a solid cylinder aligned with
/// the `y` axis.
///
/// With full height `h = 2 * half_height`, the axial moment is `r²/2` and the
/// transverse moments are `r²/4 + h²/12`.
pub fn cylinder_volume_unit_inertia(
    half_height: Real,
    radius: Real,
) -> (Real, PrincipalAngularInertia<Real>) {
    let volume = half_height * radius * radius * std::f32::consts::PI * 2.0;
    let sq_radius = radius * radius;
    let sq_height = half_height * half_height * 4.0;
    let off_principal = sq_radius / 4.0 + sq_height / 12.0;

    (
        volume,
        Vector::new(off_principal, sq_radius / 2.0, off_principal),
    )
}
