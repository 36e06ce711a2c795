use nalgebra::{Dyn, Matrix, OMatrix, OVector, Owned, U1};

pub type VecD = OVector<f64, Dyn>;
pub type RowVecD = Matrix<f64, U1, Dyn, Owned<f64, U1, Dyn>>;

pub type MatD = OMatrix<f64, Dyn, Dyn>;
