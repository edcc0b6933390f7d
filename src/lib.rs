/*!
minkow
======

**minkow** is an analytic convex-shape library for narrow-phase collision
detection, written with the rust programming language.

Each shape family (ball, cuboid, cylinder, cone) is described by a closed-form
support function together with closed-form mass properties, instead of an
approximating polytope. Shapes carry a mutable scale and a collision margin:
support queries exclude the margin, volume and broad-phase bounds include it.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]

#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod mass_properties;
pub mod query;
pub mod shape;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Isometry3, Point3, Translation3, UnitVector3, Vector3};

    /// The scalar type used throughout this crate.
    pub type Real = f32;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The translation type.
    pub use Translation3 as Translation;

    /// The principal angular inertia of a rigid body.
    pub type PrincipalAngularInertia<N> = Vector3<N>;
}
