use crate::math::{PrincipalAngularInertia, Real, Vector};

/// Volume and unit-mass principal inertia of a solid ball.
///
/// The inertia is isotropic: `2/5 * r²` about every axis.
pub fn ball_volume_unit_inertia(radius: Real) -> (Real, PrincipalAngularInertia<Real>) {
    let volume = std::f32::consts::PI * radius * radius * radius * 4.0 / 3.0;
    let i = radius * radius * 2.0 / 5.0;

    (volume, Vector::repeat(i))
}
