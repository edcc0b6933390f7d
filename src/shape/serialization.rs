//! Persistence of analytic shapes as tagged field records.
//!
//! Shapes are persisted through an intermediate [`ShapeRecord`]: a tagged
//! enum whose fields all carry explicit, documented defaults. A field absent
//! from the stream deserializes to its default instead of failing, so records
//! written by an older revision keep loading. The field names and defaults
//! are a stable on-disk contract.
//!
//! Reading never trusts derived state from the stream: [`read_shape`] rebuilds
//! the shape through its constructor, margin mutator, and scale validator, so
//! a deserialized shape satisfies exactly the same invariants as a freshly
//! constructed one.

use crate::math::{Real, Vector};
use crate::shape::{Ball, Cone, ConvexShape, Cuboid, Cylinder, DEFAULT_MARGIN};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

fn default_dimension() -> Real {
    1.0
}

fn default_half_extents() -> [Real; 3] {
    [1.0, 1.0, 1.0]
}

fn default_margin() -> Real {
    DEFAULT_MARGIN
}

fn default_scale() -> [Real; 3] {
    [1.0, 1.0, 1.0]
}

/// The tagged field-value form of a [`ConvexShape`].
///
/// Defaults used when a field is absent from the stream: every dimension
/// `1.0`, `margin` [`DEFAULT_MARGIN`], `scale` `[1, 1, 1]`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeRecord {
    /// Record of a [`Ball`].
    Ball {
        /// Radius before scaling, excluding margin.
        #[serde(default = "default_dimension")]
        unscaled_radius: Real,
        /// Collision margin.
        #[serde(default = "default_margin")]
        margin: Real,
        /// Scale factors, one per local axis.
        #[serde(default = "default_scale")]
        scale: [Real; 3],
    },
    /// Record of a [`Cuboid`].
    Cuboid {
        /// Half-extents before scaling, excluding margin.
        #[serde(default = "default_half_extents")]
        unscaled_half_extents: [Real; 3],
        /// Collision margin.
        #[serde(default = "default_margin")]
        margin: Real,
        /// Scale factors, one per local axis.
        #[serde(default = "default_scale")]
        scale: [Real; 3],
    },
    /// Record of a [`Cylinder`].
    Cylinder {
        /// Base radius before scaling, excluding margin.
        #[serde(default = "default_dimension")]
        unscaled_radius: Real,
        /// Full height before scaling, excluding margin.
        #[serde(default = "default_dimension")]
        unscaled_height: Real,
        /// Collision margin.
        #[serde(default = "default_margin")]
        margin: Real,
        /// Scale factors, one per local axis.
        #[serde(default = "default_scale")]
        scale: [Real; 3],
    },
    /// Record of a [`Cone`].
    Cone {
        /// Base radius before scaling, excluding margin.
        #[serde(default = "default_dimension")]
        unscaled_radius: Real,
        /// Full height before scaling, excluding margin.
        #[serde(default = "default_dimension")]
        unscaled_height: Real,
        /// Collision margin.
        #[serde(default = "default_margin")]
        margin: Real,
        /// Scale factors, one per local axis.
        #[serde(default = "default_scale")]
        scale: [Real; 3],
    },
}

impl From<&ConvexShape> for ShapeRecord {
    fn from(shape: &ConvexShape) -> Self {
        let scale: [Real; 3] = (*shape.scale()).into();
        let margin = shape.margin();
        match shape {
            ConvexShape::Ball(s) => ShapeRecord::Ball {
                unscaled_radius: s.radius(),
                margin,
                scale,
            },
            ConvexShape::Cuboid(s) => ShapeRecord::Cuboid {
                unscaled_half_extents: (*s.half_extents()).into(),
                margin,
                scale,
            },
            ConvexShape::Cylinder(s) => ShapeRecord::Cylinder {
                unscaled_radius: s.radius(),
                unscaled_height: s.height(),
                margin,
                scale,
            },
            ConvexShape::Cone(s) => ShapeRecord::Cone {
                unscaled_radius: s.radius(),
                unscaled_height: s.height(),
                margin,
                scale,
            },
        }
    }
}

impl ShapeRecord {
    /// Rebuilds the shape this record describes, running it through the
    /// constructor, the margin mutator, and the scale validator.
    pub fn into_shape<E: DeError>(self) -> Result<ConvexShape, E> {
        let (mut shape, margin, scale) = match self {
            ShapeRecord::Ball {
                unscaled_radius,
                margin,
                scale,
            } => (
                ConvexShape::from(Ball::new(unscaled_radius).map_err(E::custom)?),
                margin,
                scale,
            ),
            ShapeRecord::Cuboid {
                unscaled_half_extents,
                margin,
                scale,
            } => (
                ConvexShape::from(
                    Cuboid::new(Vector::from(unscaled_half_extents)).map_err(E::custom)?,
                ),
                margin,
                scale,
            ),
            ShapeRecord::Cylinder {
                unscaled_radius,
                unscaled_height,
                margin,
                scale,
            } => (
                ConvexShape::from(
                    Cylinder::new(unscaled_radius, unscaled_height).map_err(E::custom)?,
                ),
                margin,
                scale,
            ),
            ShapeRecord::Cone {
                unscaled_radius,
                unscaled_height,
                margin,
                scale,
            } => (
                ConvexShape::from(Cone::new(unscaled_radius, unscaled_height).map_err(E::custom)?),
                margin,
                scale,
            ),
        };

        shape.set_margin(margin).map_err(E::custom)?;
        shape.set_scale(&Vector::from(scale)).map_err(E::custom)?;
        Ok(shape)
    }
}

/// Serializes `shape` as a tagged field record.
///
/// Stream failures are the serializer's own error type, propagated unchanged.
pub fn write_shape<S: Serializer>(shape: &ConvexShape, serializer: S) -> Result<S::Ok, S::Error> {
    ShapeRecord::from(shape).serialize(serializer)
}

/// Deserializes a shape from a tagged field record, supplying the documented
/// default for every absent field.
///
/// Stream failures are the deserializer's own error type, propagated
/// unchanged; a record with non-positive dimensions fails the same way.
pub fn read_shape<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ConvexShape, D::Error> {
    ShapeRecord::deserialize(deserializer)?.into_shape()
}

impl Serialize for ConvexShape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        write_shape(self, serializer)
    }
}

impl<'de> Deserialize<'de> for ConvexShape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        read_shape(deserializer)
    }
}
