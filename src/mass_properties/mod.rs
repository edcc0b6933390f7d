//! Closed-form volume and unit-mass inertia for each analytic shape family.
//!
//! Every function returns `(volume, unit_inertia)` for a uniform-density
//! solid of unit mass: the inertia is about the solid's own center of mass,
//! expressed in its local axes. The dynamics integrator multiplies the unit
//! inertia by the body's actual mass.

pub use self::mass_properties_ball::ball_volume_unit_inertia;
pub use self::mass_properties_cone::cone_volume_unit_inertia;
pub use self::mass_properties_cuboid::cuboid_volume_unit_inertia;
pub use self::mass_properties_cylinder::cylinder_volume_unit_inertia;

mod mass_properties_ball;
mod mass_properties_cone;
mod mass_properties_cuboid;
mod mass_properties_cylinder;
