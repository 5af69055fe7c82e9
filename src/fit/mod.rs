mod iterative;
pub use iterative::IterativePolynomialFit;

mod least_squares;
pub use least_squares::{LeastSquaresSolution, solve_least_squares};

mod polynomial;
pub use polynomial::{Polynomial, PolynomialFit};
