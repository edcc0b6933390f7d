//! Mutable state shared by every analytic convex shape.

use crate::math::{Real, Vector};
use crate::shape::ConstructionError;

/// The default collision margin of a convex shape.
///
/// This matches the conventional convex-distance margin of impulse-based
/// rigid-body engines (0.04 physics-space units).
pub const DEFAULT_MARGIN: Real = 0.04;

/// Scale, margin, and scale-derived inertia of an analytic convex shape.
///
/// Every shape family embeds one of these next to its own (immutable)
/// unscaled dimensions. The scale and unit inertia fields are only written by
/// the family's `set_scale`, which recomputes all derived quantities before
/// returning, so readers never observe a scale paired with stale inertia.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConvexState {
    scale: Vector<Real>,
    margin: Real,
    unit_inertia: Vector<Real>,
}

impl ConvexState {
    /// A fresh state with scale `(1, 1, 1)` and the default margin.
    ///
    /// The unit inertia starts out zeroed; the owning shape's constructor is
    /// responsible for running its scale path once to fill it in.
    pub(crate) fn new() -> Self {
        ConvexState {
            scale: Vector::repeat(1.0),
            margin: DEFAULT_MARGIN,
            unit_inertia: Vector::zeros(),
        }
    }

    /// The current scale factors, one per local axis.
    #[inline]
    pub fn scale(&self) -> &Vector<Real> {
        &self.scale
    }

    /// The current collision margin.
    #[inline]
    pub fn margin(&self) -> Real {
        self.margin
    }

    /// Principal angular inertia of the scaled shape for a unit mass, about
    /// its center of mass, excluding margin.
    #[inline]
    pub fn unit_inertia(&self) -> &Vector<Real> {
        &self.unit_inertia
    }

    /// Alters the collision margin. Fails on negative values without
    /// modifying the shape.
    pub fn set_margin(&mut self, margin: Real) -> Result<(), ConstructionError> {
        if margin < 0.0 {
            return Err(ConstructionError::NegativeMargin { value: margin });
        }
        self.margin = margin;
        Ok(())
    }

    /// Commits a validated scale together with the inertia derived from it.
    ///
    /// Callers must have validated `scale` already; this is the single write
    /// point for both fields so they can never be observed out of sync.
    pub(crate) fn commit_scale(&mut self, scale: Vector<Real>, unit_inertia: Vector<Real>) {
        self.scale = scale;
        self.unit_inertia = unit_inertia;
    }

    /// Checks that every component of `scale` is strictly positive.
    pub(crate) fn scale_is_positive(scale: &Vector<Real>) -> bool {
        scale.x > 0.0 && scale.y > 0.0 && scale.z > 0.0
    }
}

/// Implements the accessors every shape family forwards to its embedded
/// [`ConvexState`].
macro_rules! impl_convex_state_api(
    ($Shape: ident) => {
        impl $Shape {
            /// The current scale factors, one per local axis. Defaults to
            /// `(1, 1, 1)`.
            #[inline]
            pub fn scale(&self) -> &crate::math::Vector<crate::math::Real> {
                self.state().scale()
            }

            /// The current collision margin.
            #[inline]
            pub fn margin(&self) -> crate::math::Real {
                self.state().margin()
            }

            /// Alters the collision margin. Fails on negative values without
            /// modifying the shape.
            pub fn set_margin(
                &mut self,
                margin: crate::math::Real,
            ) -> Result<(), crate::shape::ConstructionError> {
                self.state_mut().set_margin(margin)
            }

            /// Principal angular inertia of the scaled shape for a unit mass,
            /// about its center of mass, excluding margin.
            #[inline]
            pub fn unit_inertia(&self) -> &crate::math::Vector<crate::math::Real> {
                self.state().unit_inertia()
            }
        }
    }
);

pub(crate) use impl_convex_state_api;
