//! Analytic convex shapes: closed-form support functions, scale and margin
//! handling, and per-family symmetry constraints.

pub use self::ball::Ball;
pub use self::cone::Cone;
pub use self::convex_shape::{ConvexShape, ShapeType};
pub use self::convex_state::{ConvexState, DEFAULT_MARGIN};
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::error::{ConstructionError, InvalidScaleError};
pub use self::serialization::{read_shape, write_shape, ShapeRecord};
pub use self::shared_shape::SharedShape;
#[doc(inline)]
pub use self::support_map::SupportMap;

mod ball;
mod cone;
mod convex_shape;
mod convex_state;
mod cuboid;
mod cylinder;
mod error;
mod serialization;
mod shared_shape;
mod support_map;
