//! Support mapping based Ball shape.

use crate::mass_properties;
use crate::math::{Point, Real, Vector};
use crate::shape::convex_state::impl_convex_state_api;
use crate::shape::{ConstructionError, ConvexState, InvalidScaleError, SupportMap};
use num::Zero;

/// A ball shape, i.e. a solid sphere centered at the origin.
///
/// Scaling a ball must be uniform: any other scale would turn it into an
/// ellipsoid, which has no closed-form support point in this family.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball {
    unscaled_radius: Real,
    scaled_radius: Real,
    state: ConvexState,
}

impl Ball {
    /// Creates a new ball with the given radius, before scaling and excluding
    /// margin.
    pub fn new(radius: Real) -> Result<Ball, ConstructionError> {
        if radius <= 0.0 {
            return Err(ConstructionError::NonPositiveDimension {
                name: "radius",
                value: radius,
            });
        }

        let mut result = Ball {
            unscaled_radius: radius,
            scaled_radius: radius,
            state: ConvexState::new(),
        };
        let scale = *result.state.scale();
        result.apply_scale(&scale);
        Ok(result)
    }

    /// The radius of the ball, for scale `(1, 1, 1)` and excluding margin.
    #[inline]
    pub fn radius(&self) -> Real {
        self.unscaled_radius
    }

    /// The radius of the ball at the current scale, excluding margin.
    #[inline]
    pub fn scaled_radius(&self) -> Real {
        self.scaled_radius
    }

    /// Tests whether `scale` can be applied to this ball: every component
    /// must be positive and all three must be equal.
    pub fn can_scale(&self, scale: &Vector<Real>) -> bool {
        ConvexState::scale_is_positive(scale) && scale.x == scale.y && scale.x == scale.z
    }

    /// Alters the scale of this ball.
    ///
    /// On success the scaled radius and unit inertia are recomputed before
    /// returning; on failure the ball is left untouched.
    pub fn set_scale(&mut self, scale: &Vector<Real>) -> Result<(), InvalidScaleError> {
        if !ConvexState::scale_is_positive(scale) {
            return Err(InvalidScaleError::NonPositive(*scale));
        }
        if scale.x != scale.y || scale.x != scale.z {
            return Err(InvalidScaleError::NonUniform(*scale));
        }

        self.apply_scale(scale);
        Ok(())
    }

    fn apply_scale(&mut self, scale: &Vector<Real>) {
        self.scaled_radius = scale.x * self.unscaled_radius;
        let (_, unit_inertia) = mass_properties::ball_volume_unit_inertia(self.scaled_radius);
        self.state.commit_scale(*scale, unit_inertia);
    }

    /// The volume of the ball, including scale and margin.
    pub fn scaled_volume(&self) -> Real {
        let r = self.scaled_radius + self.state.margin();
        mass_properties::ball_volume_unit_inertia(r).0
    }

    /// How far the scaled ball extends from its center of mass, excluding
    /// margin.
    #[inline]
    pub fn max_radius(&self) -> Real {
        self.scaled_radius
    }

    /// The center of mass of the ball, in its local frame.
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

impl_convex_state_api!(Ball);

impl SupportMap for Ball {
    /// Degenerate directions (zero norm) resolve to `(scaled_radius, 0, 0)`.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let mut vres = *dir;

        if vres.normalize_mut().is_zero() {
            vres = Vector::x() * self.scaled_radius;
        } else {
            vres *= self.scaled_radius;
        }

        Point::from(vres)
    }
}
