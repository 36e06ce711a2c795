//! **tensor-bsplines** evaluates B-spline bases, curves, and tensor-product
//! splines over clamped knot vectors, built with
//! [nalgebra](https://crates.io/crates/nalgebra) to store query points,
//! basis matrices, and coefficients in contiguous arrays.
//!
//! ## Features
//! - [Knot vectors][curve::knots] validated once at construction: clamped
//!   boundary knots, interior knots, and an integer order.
//! - [Basis evaluation][curve::basis] via the Cox-de Boor recurrence,
//!   returning the full basis matrix for a batch of query points.
//! - [Curve evaluation][curve::Curve] as the contraction of basis rows with
//!   a coefficient vector.
//! - [Tensor-product splines][tensor::TensorProductSpline] composing one 1-D
//!   basis per axis through the Kronecker product of their basis rows.
//!
//! All state is immutable after construction and every evaluation is a pure
//! function of that state and the query points, so shared instances are safe
//! to evaluate concurrently.
//!
//! ## What are B-splines?
//!
//! B-splines are parametric functions composed of piecewise polynomials of a
//! fixed order (degree plus one), joined at the knots. A spline value is a
//! weighted combination of basis functions, each supported on only a few
//! neighboring knot spans, which keeps evaluation local, stable, and cheap.
//! Repeating the boundary knots `order` times clamps the spline so that it
//! passes exactly through its first and last coefficient.

pub mod curve;
pub mod tensor;
pub mod types;

use crate::{
    curve::SplineError,
    types::{MatD, VecD},
};

/// Common evaluation capability of 1-D curves and tensor-product splines.
///
/// Query points are the rows of `x`, with one column per parametric dimension
/// (a single column for a 1-D curve).
pub trait Spline {
    /// Evaluates the basis matrix, one row per query point.
    fn basis(&self, x: &MatD) -> Result<MatD, SplineError>;

    /// Evaluates the spline, one value per query point.
    fn eval(&self, x: &MatD) -> Result<VecD, SplineError>;
}
