//! Reference-counted sharing of a shape between simulated bodies.

use crate::math::{Real, Vector};
use crate::shape::{Ball, Cone, ConstructionError, ConvexShape, Cuboid, Cylinder};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A reference-counted, shareable analytic convex shape.
///
/// A single shape is commonly referenced by many simulated bodies; cloning a
/// `SharedShape` only increments a reference count. All read-only queries
/// (support points, bounds, inertia) go through [`Deref`].
///
/// Mutation while shared is a documented hazard, not something this type
/// defends against: see [`SharedShape::make_mut`].
#[derive(Clone)]
pub struct SharedShape(pub Arc<ConvexShape>);

impl Deref for SharedShape {
    type Target = ConvexShape;
    fn deref(&self) -> &ConvexShape {
        &self.0
    }
}

impl AsRef<ConvexShape> for SharedShape {
    fn as_ref(&self) -> &ConvexShape {
        &self.0
    }
}

impl fmt::Debug for SharedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedShape ( Arc<{:?}> )", *self.0)
    }
}

impl SharedShape {
    /// Wraps any shape family into a `SharedShape`.
    pub fn new(shape: impl Into<ConvexShape>) -> Self {
        SharedShape(Arc::new(shape.into()))
    }

    /// Returns a mutable reference to the underlying shape, cloning it if
    /// necessary.
    ///
    /// If the shape is currently shared, the mutation applies to a private
    /// copy: bodies holding the other references keep the old geometry. An
    /// engine that intends a scale or margin change to affect every holder
    /// must perform it before the shape is shared.
    pub fn make_mut(&mut self) -> &mut ConvexShape {
        if Arc::strong_count(&self.0) > 1 {
            log::warn!(
                "mutating a shape shared by {} handles; other holders keep the old geometry",
                Arc::strong_count(&self.0)
            );
        }
        Arc::make_mut(&mut self.0)
    }

    /// Initializes a shared ball shape.
    pub fn ball(radius: Real) -> Result<Self, ConstructionError> {
        Ok(SharedShape::new(Ball::new(radius)?))
    }

    /// Initializes a shared cuboid shape from its half-extents.
    pub fn cuboid(half_extents: Vector<Real>) -> Result<Self, ConstructionError> {
        Ok(SharedShape::new(Cuboid::new(half_extents)?))
    }

    /// Initializes a shared cylinder shape from its base radius and full
    /// height.
    pub fn cylinder(radius: Real, height: Real) -> Result<Self, ConstructionError> {
        Ok(SharedShape::new(Cylinder::new(radius, height)?))
    }

    /// Initializes a shared cone shape from its base radius and full height.
    pub fn cone(radius: Real, height: Real) -> Result<Self, ConstructionError> {
        Ok(SharedShape::new(Cone::new(radius, height)?))
    }
}
