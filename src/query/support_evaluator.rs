//! Per-worker support query evaluation.

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::SupportMap;

/// A per-worker evaluator for repeated support queries against shared shapes.
///
/// The collision pipeline runs support queries from many worker threads at
/// once, all reading the same shape. Each worker owns one `SupportEvaluator`:
/// the result is written into the evaluator's own scratch storage, so two
/// workers never alias the same memory and no query allocates. The scratch
/// lives as long as the worker, not as long as any shape.
///
/// The borrow returned by [`eval`](Self::eval) stays valid until the next
/// query through the same evaluator.
#[derive(Debug)]
pub struct SupportEvaluator {
    result: Point<Real>,
}

impl Default for SupportEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl SupportEvaluator {
    /// Creates an evaluator with zeroed scratch storage.
    pub fn new() -> Self {
        SupportEvaluator {
            result: Point::origin(),
        }
    }

    /// Evaluates the margin-excluded support point of `shape` along `dir`, in
    /// the shape's scaled local frame.
    #[inline]
    pub fn eval<'a, G: SupportMap>(
        &'a mut self,
        shape: &G,
        dir: &Vector<Real>,
    ) -> &'a Point<Real> {
        self.result = shape.local_support_point(dir);
        &self.result
    }

    /// Evaluates the margin-excluded support point of `shape` transformed by
    /// `pos`, along `dir`.
    #[inline]
    pub fn eval_at<'a, G: SupportMap>(
        &'a mut self,
        shape: &G,
        pos: &Isometry<Real>,
        dir: &Vector<Real>,
    ) -> &'a Point<Real> {
        self.result = shape.support_point(pos, dir);
        &self.result
    }

    /// The result of the most recent query, without re-evaluating.
    #[inline]
    pub fn last(&self) -> &Point<Real> {
        &self.result
    }
}
