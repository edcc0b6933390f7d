//! Support mapping based Cone shape.

use crate::mass_properties;
use crate::math::{Point, Real, Vector};
use crate::shape::convex_state::impl_convex_state_api;
use crate::shape::{ConstructionError, ConvexState, InvalidScaleError, SupportMap};

/// A solid right circular cone with its principal axis aligned with the `y`
/// axis, the base disk at `y = -height/2` and the apex at `y = +height/2`.
///
/// Scaling must preserve the circular cross-section, so the `x` and `z` scale
/// components must be equal. The center of mass sits a quarter height above
/// the base, not at the origin.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cone {
    unscaled_radius: Real,
    unscaled_height: Real,
    scaled_radius: Real,
    scaled_height: Real,
    state: ConvexState,
}

impl Cone {
    /// Creates a new cone with the given base radius and full height, before
    /// scaling and excluding margin.
    pub fn new(radius: Real, height: Real) -> Result<Cone, ConstructionError> {
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

        let mut result = Cone {
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

    /// The base radius of the cone, for scale `(1, 1, 1)` and excluding
    /// margin.
    #[inline]
    pub fn radius(&self) -> Real {
        self.unscaled_radius
    }

    /// The height of the cone, for scale `(1, 1, 1)` and excluding margin.
    #[inline]
    pub fn height(&self) -> Real {
        self.unscaled_height
    }

    /// The base radius of the cone at the current scale, excluding margin.
    #[inline]
    pub fn scaled_radius(&self) -> Real {
        self.scaled_radius
    }

    /// The height of the cone at the current scale, excluding margin.
    #[inline]
    pub fn scaled_height(&self) -> Real {
        self.scaled_height
    }

    /// Tests whether `scale` can be applied to this cone: every component
    /// must be positive and the `x` and `z` components must be equal.
    pub fn can_scale(&self, scale: &Vector<Real>) -> bool {
        ConvexState::scale_is_positive(scale) && scale.x == scale.z
    }

    /// Alters the scale of this cone.
    ///
    /// On success the scaled dimensions and unit inertia are recomputed
    /// before returning; on failure the cone is left untouched.
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
        let (_, unit_inertia) = mass_properties::cone_volume_unit_inertia(
            0.5 * self.scaled_height,
            self.scaled_radius,
        );
        self.state.commit_scale(*scale, unit_inertia);
    }

    /// The volume of the cone, including scale and margin. The margin grows
    /// the base radius by `margin` and the height by `2 * margin`.
    pub fn scaled_volume(&self) -> Real {
        let margin = self.state.margin();
        let r = self.scaled_radius + margin;
        let half_height = 0.5 * self.scaled_height + margin;
        mass_properties::cone_volume_unit_inertia(half_height, r).0
    }

    /// How far the scaled cone extends from its center of mass, excluding
    /// margin: the distance to the apex or to the base rim, whichever is
    /// greater.
    pub fn max_radius(&self) -> Real {
        let half_height = 0.5 * self.scaled_height;
        // The center of mass sits at y = -half_height / 2.
        let apex_dist = half_height * 1.5;
        let quarter_height = 0.5 * half_height;
        let rim_dist =
            (self.scaled_radius * self.scaled_radius + quarter_height * quarter_height).sqrt();
        apex_dist.max(rim_dist)
    }

    /// The center of mass of the cone, in its local frame: a quarter height
    /// above the base disk.
    #[inline]
    pub fn local_center_of_mass(&self) -> Point<Real> {
        Point::new(0.0, -0.25 * self.scaled_height, 0.0)
    }

    pub(crate) fn state(&self) -> &ConvexState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut ConvexState {
        &mut self.state
    }
}

impl_convex_state_api!(Cone);

impl SupportMap for Cone {
    /// The supporting vertex is either the apex or a point on the base rim.
    /// When the lateral projection of `dir` is exactly zero, the canonical
    /// axis point `(0, ±height/2, 0)` is returned.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let half_height = 0.5 * self.scaled_height;

        let dxz = (dir.x * dir.x + dir.z * dir.z).sqrt();
        if dxz == 0.0 {
            return Point::new(0.0, half_height.copysign(dir.y), 0.0);
        }

        let rim = Vector::new(
            self.scaled_radius * (dir.x / dxz),
            -half_height,
            self.scaled_radius * (dir.z / dxz),
        );
        if dir.dot(&rim) < dir.y * half_height {
            Point::new(0.0, half_height, 0.0)
        } else {
            Point::from(rim)
        }
    }
}
