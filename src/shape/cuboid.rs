//! Support mapping based Cuboid shape.

use crate::mass_properties;
use crate::math::{Point, Real, Vector};
use crate::shape::convex_state::impl_convex_state_api;
use crate::shape::{ConstructionError, ConvexState, InvalidScaleError, SupportMap};

/// A box shape centered at the origin, defined by its half-extents.
///
/// A cuboid has no rotational symmetry to preserve, so any positive per-axis
/// scale is accepted.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    unscaled_half_extents: Vector<Real>,
    scaled_half_extents: Vector<Real>,
    state: ConvexState,
}

impl Cuboid {
    /// Creates a new cuboid from its half-extents, before scaling and
    /// excluding margin.
    pub fn new(half_extents: Vector<Real>) -> Result<Cuboid, ConstructionError> {
        for (name, value) in [
            ("half_extents.x", half_extents.x),
            ("half_extents.y", half_extents.y),
            ("half_extents.z", half_extents.z),
        ] {
            if value <= 0.0 {
                return Err(ConstructionError::NonPositiveDimension { name, value });
            }
        }

        let mut result = Cuboid {
            unscaled_half_extents: half_extents,
            scaled_half_extents: half_extents,
            state: ConvexState::new(),
        };
        let scale = *result.state.scale();
        result.apply_scale(&scale);
        Ok(result)
    }

    /// The half-extents of the cuboid, for scale `(1, 1, 1)` and excluding
    /// margin.
    #[inline]
    pub fn half_extents(&self) -> &Vector<Real> {
        &self.unscaled_half_extents
    }

    /// The half-extents of the cuboid at the current scale, excluding margin.
    #[inline]
    pub fn scaled_half_extents(&self) -> &Vector<Real> {
        &self.scaled_half_extents
    }

    /// Tests whether `scale` can be applied to this cuboid: every component
    /// must be positive.
    pub fn can_scale(&self, scale: &Vector<Real>) -> bool {
        ConvexState::scale_is_positive(scale)
    }

    /// Alters the scale of this cuboid.
    ///
    /// On success the scaled half-extents and unit inertia are recomputed
    /// before returning; on failure the cuboid is left untouched.
    pub fn set_scale(&mut self, scale: &Vector<Real>) -> Result<(), InvalidScaleError> {
        if !ConvexState::scale_is_positive(scale) {
            return Err(InvalidScaleError::NonPositive(*scale));
        }

        self.apply_scale(scale);
        Ok(())
    }

    fn apply_scale(&mut self, scale: &Vector<Real>) {
        self.scaled_half_extents = self.unscaled_half_extents.component_mul(scale);
        let (_, unit_inertia) =
            mass_properties::cuboid_volume_unit_inertia(&self.scaled_half_extents);
        self.state.commit_scale(*scale, unit_inertia);
    }

    /// The volume of the cuboid, including scale and margin. The margin grows
    /// every half-extent.
    pub fn scaled_volume(&self) -> Real {
        let he = self.scaled_half_extents.add_scalar(self.state.margin());
        mass_properties::cuboid_volume_unit_inertia(&he).0
    }

    /// How far the scaled cuboid extends from its center of mass, excluding
    /// margin.
    #[inline]
    pub fn max_radius(&self) -> Real {
        self.scaled_half_extents.norm()
    }

    /// The center of mass of the cuboid, in its local frame.
    #[inline]
    pub fn local_center_of_mass(&self) -> Point<Real> {
        Point::origin()
    }

    pub(crate) fn state(&self) -> &ConvexState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut ConvexState {
        &mut self.state
    }
}

impl_convex_state_api!(Cuboid);

impl SupportMap for Cuboid {
    /// Components of `dir` that are exactly zero resolve to the positive
    /// half-extent (IEEE `copysign` on `+0.0`).
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let he = &self.scaled_half_extents;
        Point::new(
            he.x.copysign(dir.x),
            he.y.copysign(dir.y),
            he.z.copysign(dir.z),
        )
    }
}
