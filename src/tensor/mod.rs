//! Implements the tensor-product B-spline.
//!
//! The multi-dimensional basis is the Kronecker product of independent
//! per-axis 1-D bases: each tensor basis row is the outer product of the
//! per-axis basis rows, flattened with the first axis varying slowest and the
//! last axis fastest. The coefficient array follows the same row-major
//! flattening, so evaluation is a single contraction of the tensor row with
//! the coefficient vector.
//!
//! Each 1-D basis is evaluated exactly once per axis and query point; the
//! contraction runs over the materialized Kronecker row so the result is
//! identical to the outer-product-then-contract formulation.

use crate::{
    curve::{basis::Basis, SplineError},
    types::{MatD, RowVecD, VecD},
    Spline,
};

#[derive(Debug, Clone, PartialEq)]
pub struct TensorProductSpline {
    splines: Vec<Basis>,
    coefficients: VecD,
}

impl TensorProductSpline {
    /// Combines one basis per coordinate axis with a flattened coefficient
    /// array.
    ///
    /// The coefficient array is row-major over the per-axis basis counts and
    /// must hold exactly their product. Orders and knot vectors may differ
    /// across axes.
    ///
    /// # Examples
    /// ```
    /// use nalgebra::{dmatrix, dvector, DVector};
    /// use tensor_bsplines::curve::{basis::Basis, knots::KnotVector};
    /// use tensor_bsplines::tensor::TensorProductSpline;
    ///
    /// let axis = || {
    ///     let knots =
    ///         KnotVector::new(dvector![0.0, 0.0], DVector::zeros(0), dvector![1.0, 1.0], 2).unwrap();
    ///     Basis::new(knots)
    /// };
    /// let surface =
    ///     TensorProductSpline::new(vec![axis(), axis()], dvector![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(surface.eval(&dmatrix![1.0, 1.0]).unwrap()[0], 4.0);
    /// ```
    pub fn new(splines: Vec<Basis>, coefficients: VecD) -> Result<Self, SplineError> {
        if splines.is_empty() {
            return Err(SplineError::DimensionMismatch {
                context: "spline axes",
                expected: 1,
                found: 0,
            });
        }

        let count = splines.iter().map(Basis::count).product::<usize>();
        if coefficients.len() != count {
            return Err(SplineError::DimensionMismatch {
                context: "tensor coefficient array",
                expected: count,
                found: coefficients.len(),
            });
        }

        Ok(TensorProductSpline { splines, coefficients })
    }

    /// Number of parametric dimensions.
    pub fn dimension(&self) -> usize {
        self.splines.len()
    }

    /// Total number of tensor basis functions.
    pub fn count(&self) -> usize {
        self.splines.iter().map(Basis::count).product()
    }

    pub fn splines(&self) -> &[Basis] {
        &self.splines
    }

    pub fn coefficients(&self) -> &VecD {
        &self.coefficients
    }

    fn check_query(&self, x: &MatD) -> Result<(), SplineError> {
        if x.ncols() != self.dimension() {
            return Err(SplineError::DimensionMismatch {
                context: "query matrix columns",
                expected: self.dimension(),
                found: x.ncols(),
            });
        }
        Ok(())
    }

    /// Kronecker product of the per-axis basis rows at one query point.
    fn tensor_row(&self, x: &MatD, r: usize) -> RowVecD {
        let mut row = RowVecD::from_element(1, 1.0);
        for (d, spline) in self.splines.iter().enumerate() {
            row = row.kronecker(&spline.row(x[(r, d)]));
        }
        row
    }

    /// Evaluates the tensor basis matrix; one row per query point, one column
    /// per tensor basis function.
    pub fn basis(&self, x: &MatD) -> Result<MatD, SplineError> {
        self.check_query(x)?;

        let mut matrix = MatD::zeros(x.nrows(), self.count());
        for r in 0..x.nrows() {
            matrix.row_mut(r).copy_from(&self.tensor_row(x, r));
        }
        Ok(matrix)
    }

    /// Evaluates the tensor spline at the query points given as matrix rows.
    pub fn eval(&self, x: &MatD) -> Result<VecD, SplineError> {
        self.check_query(x)?;

        let mut values = VecD::zeros(x.nrows());
        for r in 0..x.nrows() {
            values[r] = (self.tensor_row(x, r) * &self.coefficients)[(0, 0)];
        }
        Ok(values)
    }
}

impl Spline for TensorProductSpline {
    fn basis(&self, x: &MatD) -> Result<MatD, SplineError> {
        TensorProductSpline::basis(self, x)
    }

    fn eval(&self, x: &MatD) -> Result<VecD, SplineError> {
        TensorProductSpline::eval(self, x)
    }
}
