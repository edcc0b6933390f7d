//! Support mapping based Cylinder shape.

use crate::mass_properties;
use crate::math::{Point, Real, Vector};
use crate::shape::convex_state::impl_convex_state_api;
use crate::shape::{ConstructionError, ConvexState, InvalidScaleError, SupportMap};

/// A solid right circular cylinder with its principal axis aligned with the
/// `y` axis, centered at the origin.
///
/// Scaling must preserve the circular cross-section, so the `x` and `z` scale
/// components must be equal.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cylinder {
    unscaled_radius: Real,
    unscaled_height: Real,
    scaled_radius: Real,
    scaled_height: Real,
    state: ConvexState,
}

impl Cylinder {
    /// Creates a new cylinder with the given base radius and full height,
    /// before scaling and excluding margin.
    pub fn new(radius: Real, height: Real) -> Result<Cylinder, ConstructionError> {
        if radius <= 0.0 {
            return Err(ConstructionError::NonPositiveDimension {
                name: "radius",
                value: radius,
            });
        }
        if height <= 0.0 {
            return Err(ConstructionError::NonPositiveDimension {
                name: "height",
                value: height,
            });
        }

        let mut result = Cylinder {
            unscaled_radius: radius,
            unscaled_height: height,
            scaled_radius: radius,
            scaled_height: height,
            state: ConvexState::new(),
        };
        let scale = *result.state.scale();
        result.apply_scale(&scale);
        Ok(result)
    }

    /// The base radius of the cylinder, for scale `(1, 1, 1)` and excluding
    /// margin.
    #[inline]
    pub fn radius(&self) -> Real {
        self.unscaled_radius
    }

    /// The height of the cylinder, for scale `(1, 1, 1)` and excluding
    /// margin.
    #[inline]
    pub fn height(&self) -> Real {
        self.unscaled_height
    }

    /// The base radius of the cylinder at the current scale, excluding
    /// margin.
    #[inline]
    pub fn scaled_radius(&self) -> Real {
        self.scaled_radius
    }

    /// The height of the cylinder at the current scale, excluding margin.
    #[inline]
    pub fn scaled_height(&self) -> Real {
        self.scaled_height
    }

    /// Tests whether `scale` can be applied to this cylinder: every component
    /// must be positive and the `x` and `z` components must be equal.
    pub fn can_scale(&self, scale: &Vector<Real>) -> bool {
        ConvexState::scale_is_positive(scale) && scale.x == scale.z
    }

    /// Alters the scale of this cylinder.
    ///
    /// On success the scaled dimensions and unit inertia are recomputed
    /// before returning; on failure the cylinder is left untouched.
    pub fn set_scale(&mut self, scale: &Vector<Real>) -> Result<(), InvalidScaleError> {
        if !ConvexState::scale_is_positive(scale) {
            return Err(InvalidScaleError::NonPositive(*scale));
        }
        if scale.x != scale.z {
            return Err(InvalidScaleError::AsymmetricCrossSection(*scale));
        }

        self.apply_scale(scale);
        Ok(())
    }

    fn apply_scale(&mut self, scale: &Vector<Real>) {
        self.scaled_radius = scale.x * self.unscaled_radius;
        self.scaled_height = scale.y * self.unscaled_height;
        let (_, unit_inertia) = mass_properties::cylinder_volume_unit_inertia(
            0.5 * self.scaled_height,
            self.scaled_radius,
        );
        self.state.commit_scale(*scale, unit_inertia);
    }

    /// The volume of the cylinder, including scale and margin. The margin
    /// grows the radius by `margin` and the height by `2 * margin`.
    pub fn scaled_volume(&self) -> Real {
        let margin = self.state.margin();
        let r = self.scaled_radius + margin;
        let half_height = 0.5 * self.scaled_height + margin;
        mass_properties::cylinder_volume_unit_inertia(half_height, r).0
    }

    /// How far the scaled cylinder extends from its center of mass, excluding
    /// margin: the distance to a rim of one of its bases.
    #[inline]
    pub fn max_radius(&self) -> Real {
        let half_height = 0.5 * self.scaled_height;
        (self.scaled_radius * self.scaled_radius + half_height * half_height).sqrt()
    }

    /// The center of mass of the cylinder, in its local frame.
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

impl_convex_state_api!(Cylinder);

impl SupportMap for Cylinder {
    /// The supporting vertex lies on the rim of one of the bases. When the
    /// lateral projection of `dir` is exactly zero, the canonical rim point
    /// `(scaled_radius, ±height/2, 0)` is returned.
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let y = (0.5 * self.scaled_height).copysign(dir.y);

        let dxz = (dir.x * dir.x + dir.z * dir.z).sqrt();
        if dxz == 0.0 {
            Point::new(self.scaled_radius, y, 0.0)
        } else {
            Point::new(
                self.scaled_radius * (dir.x / dxz),
                y,
                self.scaled_radius * (dir.z / dxz),
            )
        }
    }
}
