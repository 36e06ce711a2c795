//! Implements the knot vector defining the [spline basis functions][crate::curve::basis].
//!
//! A knot vector is a non-decreasing sequence of parameters partitioning the
//! domain into the segments over which the spline is piecewise polynomial.
//! For a clamped spline of order `m` it consists of `m` repeated *boundary
//! knots* on each end and an arbitrary number of *interior knots* in between,
//! so that the curve passes exactly through the first and last coefficient.
//!
//! The vector is validated once at construction and immutable afterwards;
//! changing knots means building a new spline.

use crate::{curve::SplineError, types::VecD};

#[derive(Debug, Clone, PartialEq)]
pub struct KnotVector {
    knots: VecD,
    order: usize,
}

impl KnotVector {
    /// Builds a clamped knot vector from its boundary and interior parts.
    ///
    /// Both boundary sequences must contain exactly `order` knots and the
    /// merged sequence must be non-decreasing.
    ///
    /// # Examples
    /// ```
    /// use nalgebra::dvector;
    /// use tensor_bsplines::curve::knots::KnotVector;
    ///
    /// let knots = KnotVector::new(dvector![0.0, 0.0], dvector![0.5], dvector![1.0, 1.0], 2).unwrap();
    /// assert_eq!(knots.count(), 3);
    /// assert_eq!(knots.domain(), (0.0, 1.0));
    /// ```
    pub fn new(
        boundary_left: VecD,
        interior: VecD,
        boundary_right: VecD,
        order: usize,
    ) -> Result<Self, SplineError> {
        if order < 1 {
            return Err(SplineError::DegenerateBasis {
                order,
                knots: boundary_left.len() + interior.len() + boundary_right.len(),
            });
        }

        if boundary_left.len() != order || boundary_right.len() != order {
            return Err(SplineError::InvalidKnotVector(format!(
                "expected {order} boundary knots on each side, received {} and {}",
                boundary_left.len(),
                boundary_right.len()
            )));
        }

        let len = boundary_left.len() + interior.len() + boundary_right.len();
        let merged = VecD::from_iterator(
            len,
            boundary_left
                .iter()
                .chain(interior.iter())
                .chain(boundary_right.iter())
                .copied(),
        );

        Self::from_vector(merged, order)
    }

    /// Builds a knot vector from an already-merged sequence.
    ///
    /// The sequence must be non-decreasing, span a non-empty domain, and be
    /// long enough to define at least one basis function.
    pub fn from_vector(knots: VecD, order: usize) -> Result<Self, SplineError> {
        if order < 1 || knots.len() <= order {
            return Err(SplineError::DegenerateBasis { order, knots: knots.len() });
        }

        if let Some(i) = (1..knots.len()).find(|&i| knots[i] < knots[i - 1]) {
            return Err(SplineError::InvalidKnotVector(format!(
                "sequence decreases at index {i} ({} > {})",
                knots[i - 1],
                knots[i]
            )));
        }

        if knots[0] == knots[knots.len() - 1] {
            return Err(SplineError::InvalidKnotVector("parametric domain has zero width".into()));
        }

        Ok(KnotVector { knots, order })
    }

    pub fn vector(&self) -> &VecD {
        &self.knots
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn len(&self) -> usize {
        self.knots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    /// Number of basis functions defined by this knot vector.
    pub fn count(&self) -> usize {
        self.knots.len() - self.order
    }

    pub fn front(&self) -> f64 {
        self.knots[0]
    }

    pub fn back(&self) -> f64 {
        self.knots[self.knots.len() - 1]
    }

    /// The parametric interval on which the spline is defined.
    pub fn domain(&self) -> (f64, f64) {
        (self.front(), self.back())
    }
}
