//! Bounding volumes for broad-phase culling.

pub use self::aabb::Aabb;
pub use self::aabb_support_map::local_support_map_aabb;
pub use self::bounding_sphere::BoundingSphere;

mod aabb;
mod aabb_support_map;
mod bounding_sphere;
mod bounding_sphere_ball;
mod bounding_sphere_cone;
mod bounding_sphere_cuboid;
mod bounding_sphere_cylinder;
