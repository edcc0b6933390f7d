use crate::math::{Real, Vector};

/// Errors that can occur while constructing an analytic shape.
///
/// Construction never produces a partially-initialized shape: on error the
/// shape simply does not exist.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ConstructionError {
    /// A defining dimension (radius, height, half-extent) was zero or negative.
    #[error("shape dimension `{name}` must be positive, got {value}")]
    NonPositiveDimension {
        /// Name of the offending dimension.
        name: &'static str,
        /// The rejected value.
        value: Real,
    },
    /// A negative collision margin was requested.
    #[error("collision margin must be non-negative, got {value}")]
    NegativeMargin {
        /// The rejected value.
        value: Real,
    },
}

/// Errors raised by [`set_scale`](crate::shape::ConvexShape::set_scale) when a
/// scale vector is inconsistent with a shape's symmetry.
///
/// A failed `set_scale` leaves the shape exactly as it was: no scaled
/// dimension or inertia component is updated before validation passes.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidScaleError {
    /// One or more scale components were zero or negative.
    #[error("scale factors must all be positive, got {0:?}")]
    NonPositive(Vector<Real>),
    /// A ball only accepts uniform scaling.
    #[error("scaling a ball must be uniform, got {0:?}")]
    NonUniform(Vector<Real>),
    /// A cylinder or cone must keep its circular cross-section, so the `x`
    /// and `z` scale components must be equal.
    #[error("scale {0:?} does not preserve the circular cross-section (x and z must match)")]
    AsymmetricCrossSection(Vector<Real>),
}
