//! Evaluates the basis spline functions using the Cox-de Boor recurrence relation.
//!
//! The order-1 basis functions are indicators on the left-closed, right-open
//! knot spans `[u_i, u_{i+1})`; the last non-empty span is additionally
//! closed on the right so that the upper domain boundary is included exactly.
//! An order-`m` function blends the two neighboring order-`m-1` functions
//! with the pre-factors
//!
//! `(u - u_i) / (u_{i+m-1} - u_i)` and `(u_{i+m} - u) / (u_{i+m} - u_{i+1})`,
//!
//! where a pre-factor is defined as zero whenever its denominator vanishes.
//! Repeated boundary knots are the normal case for clamped splines, so this
//! zero-denominator rule is load-bearing, not an afterthought.

use crate::{
    curve::knots::KnotVector,
    types::{MatD, RowVecD, VecD},
};

/// Evaluates every basis function of the given order at the parameter `u`.
///
/// The recurrence is run bottom-up over a call-local buffer holding one value
/// per knot span, elevating the whole row one order at a time. Nothing is
/// cached across calls.
fn evaluate(knots: &VecD, order: usize, u: f64) -> RowVecD {
    let m = knots.len();
    let back = knots[m - 1];

    let mut values = RowVecD::zeros(m - 1);
    for i in 0..m - 1 {
        let contains = knots[i] <= u && u < knots[i + 1];
        let closes_domain = u == back && knots[i] < back && knots[i + 1] == back;
        if contains || closes_domain {
            values[i] = 1.0;
        }
    }

    for k in 2..=order {
        for i in 0..m - k {
            let left_den = knots[i + k - 1] - knots[i];
            let left = if left_den == 0.0 { 0.0 } else { (u - knots[i]) / left_den * values[i] };

            let right_den = knots[i + k] - knots[i + 1];
            let right = if right_den == 0.0 {
                0.0
            } else {
                (knots[i + k] - u) / right_den * values[i + 1]
            };

            values[i] = left + right;
        }
    }

    values.columns(0, m - order).into_owned()
}

/// The B-spline basis defined by a knot vector and its order.
///
/// Every evaluation is a pure function of the immutable knot vector and the
/// query points, so a shared instance may be evaluated from multiple threads
/// without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct Basis {
    knots: KnotVector,
}

impl Basis {
    pub fn new(knots: KnotVector) -> Self {
        Basis { knots }
    }

    pub fn knots(&self) -> &KnotVector {
        &self.knots
    }

    /// Number of basis functions.
    pub fn count(&self) -> usize {
        self.knots.count()
    }

    /// Evaluates all basis functions at a single parameter.
    ///
    /// Parameters outside the knot domain are clamped to the nearest
    /// boundary before evaluation.
    pub fn row(&self, u: f64) -> RowVecD {
        let (front, back) = self.knots.domain();
        evaluate(self.knots.vector(), self.knots.order(), u.clamp(front, back))
    }

    /// Evaluates the basis matrix with one row per query point and one
    /// column per basis function.
    pub fn basis(&self, x: &VecD) -> MatD {
        let mut matrix = MatD::zeros(x.len(), self.count());
        for (r, &u) in x.iter().enumerate() {
            matrix.row_mut(r).copy_from(&self.row(u));
        }
        matrix
    }
}
