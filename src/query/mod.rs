//! Read-only queries the collision pipeline runs against shapes.

pub use self::support_evaluator::SupportEvaluator;

mod support_evaluator;
