//! Implements the B-spline curve: a [basis] paired with one coefficient per
//! basis function.
//!
//! A point on the curve is the contraction of the basis row at the query
//! parameter with the coefficient vector. The curve is immutable once built;
//! every evaluation is a pure function of its state and the query points.

use thiserror::Error;

use crate::{
    curve::{basis::Basis, knots::KnotVector},
    types::{MatD, VecD},
    Spline,
};

pub mod basis;
pub mod knots;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplineError {
    #[error("invalid knot vector: {0}")]
    InvalidKnotVector(String),

    #[error("dimension mismatch: {context} expects {expected} entries but received {found}")]
    DimensionMismatch { context: &'static str, expected: usize, found: usize },

    #[error("degenerate basis: order {order} with {knots} knots leaves no basis function")]
    DegenerateBasis { order: usize, knots: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    basis: Basis,
    coefficients: VecD,
}

impl Curve {
    /// Pairs a basis with its coefficient vector.
    ///
    /// The coefficient count must equal the basis-function count of the
    /// underlying knot vector.
    pub fn new(basis: Basis, coefficients: VecD) -> Result<Self, SplineError> {
        if coefficients.len() != basis.count() {
            return Err(SplineError::DimensionMismatch {
                context: "coefficient vector",
                expected: basis.count(),
                found: coefficients.len(),
            });
        }
        Ok(Curve { basis, coefficients })
    }

    /// Builds a clamped curve directly from boundary knots, interior knots,
    /// order, and coefficients.
    ///
    /// # Examples
    /// ```
    /// use nalgebra::{dvector, DVector};
    /// use tensor_bsplines::curve::Curve;
    ///
    /// let curve = Curve::clamped(
    ///     dvector![0.0, 0.0],
    ///     DVector::zeros(0),
    ///     dvector![1.0, 1.0],
    ///     2,
    ///     dvector![3.0, 7.0],
    /// )
    /// .unwrap();
    /// assert_eq!(curve.eval(&dvector![0.5])[0], 5.0);
    /// ```
    pub fn clamped(
        boundary_left: VecD,
        interior: VecD,
        boundary_right: VecD,
        order: usize,
        coefficients: VecD,
    ) -> Result<Self, SplineError> {
        let knots = KnotVector::new(boundary_left, interior, boundary_right, order)?;
        Curve::new(Basis::new(knots), coefficients)
    }

    pub fn order(&self) -> usize {
        self.basis.knots().order()
    }

    pub fn coefficients(&self) -> &VecD {
        &self.coefficients
    }

    /// Evaluates the basis matrix at the query parameters, one row per point.
    pub fn basis(&self, x: &VecD) -> MatD {
        self.basis.basis(x)
    }

    /// Evaluates the curve at the query parameters.
    pub fn eval(&self, x: &VecD) -> VecD {
        self.basis(x) * &self.coefficients
    }
}

impl Spline for Curve {
    fn basis(&self, x: &MatD) -> Result<MatD, SplineError> {
        Ok(Curve::basis(self, &query_column(x)?))
    }

    fn eval(&self, x: &MatD) -> Result<VecD, SplineError> {
        Ok(Curve::eval(self, &query_column(x)?))
    }
}

fn query_column(x: &MatD) -> Result<VecD, SplineError> {
    if x.ncols() != 1 {
        return Err(SplineError::DimensionMismatch {
            context: "query matrix columns",
            expected: 1,
            found: x.ncols(),
        });
    }
    Ok(x.column(0).into_owned())
}

#[cfg(test)]
mod tests {
    use nalgebra::{dmatrix, dvector};
    use rstest::{fixture, rstest};

    use super::*;

    /// A clamped linear curve interpolating between 3 and 7.
    #[fixture]
    fn linear() -> Curve {
        Curve::clamped(dvector![0., 0.], VecD::zeros(0), dvector![1., 1.], 2, dvector![3., 7.])
            .unwrap()
    }

    #[rstest]
    fn interpolates_linearly(linear: Curve) {
        assert_eq!(linear.eval(&dvector![0.0, 0.5, 1.0]), dvector![3.0, 5.0, 7.0]);
    }

    #[rstest]
    fn extrapolation_clamps_to_the_endpoints(linear: Curve) {
        assert_eq!(linear.eval(&dvector![-1.0, 2.0]), dvector![3.0, 7.0]);
    }

    #[test]
    fn clamps_to_endpoint_coefficients() {
        let curve = Curve::clamped(
            dvector![0., 0., 0.],
            dvector![0.5],
            dvector![1., 1., 1.],
            3,
            dvector![1., 2., 2., 1.],
        )
        .unwrap();

        assert_eq!(curve.eval(&dvector![0.0])[0], 1.0);
        assert_eq!(curve.eval(&dvector![1.0])[0], 1.0);
        assert_eq!(curve.eval(&dvector![0.5])[0], 2.0);
    }

    #[test]
    fn coefficient_count_must_match_basis() {
        let result = Curve::clamped(
            dvector![0., 0.],
            VecD::zeros(0),
            dvector![1., 1.],
            2,
            dvector![3., 7., 9.],
        );

        assert_eq!(
            result.unwrap_err(),
            SplineError::DimensionMismatch {
                context: "coefficient vector",
                expected: 2,
                found: 3
            }
        );
    }

    #[rstest]
    fn evaluates_through_the_spline_trait(linear: Curve) {
        let x = dmatrix![0.0; 0.5; 1.0];

        assert_eq!(Spline::eval(&linear, &x).unwrap(), dvector![3.0, 5.0, 7.0]);
        assert_eq!(Spline::basis(&linear, &x).unwrap(), linear.basis(&dvector![0.0, 0.5, 1.0]));
    }

    #[rstest]
    fn trait_queries_require_a_single_column(linear: Curve) {
        let result = Spline::eval(&linear, &dmatrix![0.0, 0.5]);

        assert!(matches!(result, Err(SplineError::DimensionMismatch { expected: 1, found: 2, .. })));
    }
}
