//! Tagged dispatch over the closed set of analytic shape families.

use crate::bounding_volume::BoundingSphere;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{
    Ball, Cone, ConstructionError, Cuboid, Cylinder, InvalidScaleError, SupportMap,
};

/// Enum representing the type of an analytic convex shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeType {
    /// A ball shape.
    Ball,
    /// A cuboid shape.
    Cuboid,
    /// A cylindrical shape.
    Cylinder,
    /// A conical shape.
    Cone,
}

/// An analytic convex shape: one variant per shape family.
///
/// Every family carries its own unscaled dimensions, its current scale and
/// margin, and the inertia derived from them; this enum dispatches the common
/// operations without dynamic allocation or downcasting.
#[derive(PartialEq, Debug, Clone)]
pub enum ConvexShape {
    /// A ball shape.
    Ball(Ball),
    /// A cuboid shape.
    Cuboid(Cuboid),
    /// A cylindrical shape.
    Cylinder(Cylinder),
    /// A conical shape.
    Cone(Cone),
}

macro_rules! dispatch(
    ($self_: ident . $method: ident ($($arg: expr),*)) => {
        match $self_ {
            ConvexShape::Ball(s) => s.$method($($arg),*),
            ConvexShape::Cuboid(s) => s.$method($($arg),*),
            ConvexShape::Cylinder(s) => s.$method($($arg),*),
            ConvexShape::Cone(s) => s.$method($($arg),*),
        }
    }
);

impl ConvexShape {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            ConvexShape::Ball(_) => ShapeType::Ball,
            ConvexShape::Cuboid(_) => ShapeType::Cuboid,
            ConvexShape::Cylinder(_) => ShapeType::Cylinder,
            ConvexShape::Cone(_) => ShapeType::Cone,
        }
    }

    /// The current scale factors, one per local axis. Defaults to
    /// `(1, 1, 1)`.
    pub fn scale(&self) -> &Vector<Real> {
        dispatch!(self.scale())
    }

    /// The current collision margin of this shape.
    pub fn margin(&self) -> Real {
        dispatch!(self.margin())
    }

    /// Alters the collision margin of this shape. Fails on negative values
    /// without modifying the shape.
    pub fn set_margin(&mut self, margin: Real) -> Result<(), ConstructionError> {
        dispatch!(self.set_margin(margin))
    }

    /// Tests whether `scale` satisfies this shape family's symmetry
    /// constraint, without committing it.
    pub fn can_scale(&self, scale: &Vector<Real>) -> bool {
        dispatch!(self.can_scale(scale))
    }

    /// Alters the scale of this shape.
    ///
    /// On success the scaled dimensions and unit inertia are recomputed
    /// atomically, before this returns. On failure the shape is left exactly
    /// as it was.
    pub fn set_scale(&mut self, scale: &Vector<Real>) -> Result<(), InvalidScaleError> {
        dispatch!(self.set_scale(scale))
    }

    /// Principal angular inertia of the scaled shape for a unit mass, about
    /// its center of mass and expressed in its local axes, excluding margin.
    ///
    /// The dynamics integrator multiplies this by the body's actual mass.
    pub fn unit_inertia(&self) -> &Vector<Real> {
        dispatch!(self.unit_inertia())
    }

    /// The volume of the shape, including scale and margin. Strictly positive
    /// for every constructible shape.
    pub fn scaled_volume(&self) -> Real {
        dispatch!(self.scaled_volume())
    }

    /// How far the scaled shape extends from its center of mass, excluding
    /// margin. Recomputed on demand, never cached.
    pub fn max_radius(&self) -> Real {
        dispatch!(self.max_radius())
    }

    /// The center of mass of the scaled shape, in its local frame.
    pub fn local_center_of_mass(&self) -> Point<Real> {
        dispatch!(self.local_center_of_mass())
    }

    /// Computes the world-space bounding sphere of this shape, transformed by
    /// `pos`.
    pub fn bounding_sphere(&self, pos: &Isometry<Real>) -> BoundingSphere {
        dispatch!(self.bounding_sphere(pos))
    }

    /// Computes the local-space bounding sphere of this shape, inclusive of
    /// margin.
    pub fn local_bounding_sphere(&self) -> BoundingSphere {
        dispatch!(self.local_bounding_sphere())
    }
}

impl SupportMap for ConvexShape {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        dispatch!(self.local_support_point(dir))
    }
}

impl From<Ball> for ConvexShape {
    fn from(shape: Ball) -> Self {
        ConvexShape::Ball(shape)
    }
}

impl From<Cuboid> for ConvexShape {
    fn from(shape: Cuboid) -> Self {
        ConvexShape::Cuboid(shape)
    }
}

impl From<Cylinder> for ConvexShape {
    fn from(shape: Cylinder) -> Self {
        ConvexShape::Cylinder(shape)
    }
}

impl From<Cone> for ConvexShape {
    fn from(shape: Cone) -> Self {
        ConvexShape::Cone(shape)
    }
}
