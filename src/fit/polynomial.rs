use crate::error::FitError;
use crate::fit::least_squares::solve_least_squares;
use crate::float_trait::Float;

use ndarray::{Array1, Array2};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Polynomial of the normalised abscissa `u = (x - x_offset) / x_scale`
///
/// Julian dates are large numbers, fitting their powers directly is numerically hopeless, so the
/// abscissa is centred and scaled to `[-1, 1]` before fitting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float")]
pub struct Polynomial<T> {
    /// Coefficients, highest degree first
    pub coefficients: Vec<T>,
    pub x_offset: T,
    pub x_scale: T,
}

impl<T> Polynomial<T>
where
    T: Float,
{
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluate with the Horner scheme
    pub fn eval(&self, x: T) -> T {
        let u = (x - self.x_offset) / self.x_scale;
        self.coefficients
            .iter()
            .fold(T::zero(), |acc, &c| acc * u + c)
    }
}

/// Normalisation of the abscissa: mean and maximum absolute deviation from it
fn normalization<T: Float>(x: &[T]) -> (T, T) {
    let offset = x.iter().copied().sum::<T>() / T::from_len(x.len());
    let scale = x
        .iter()
        .fold(T::zero(), |acc, &x| acc.max((x - offset).abs()));
    if scale.is_zero() || !scale.is_finite() {
        (offset, T::one())
    } else {
        (offset, scale)
    }
}

/// Least-squares polynomial of a fixed degree and its goodness of fit
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float")]
pub struct PolynomialFit<T> {
    pub polynomial: Polynomial<T>,
    pub degree: usize,
    /// Residual sum of squares divided by `n - (degree + 1)`
    pub reduced_chi2: T,
}

impl<T> PolynomialFit<T>
where
    T: Float,
{
    /// Unweighted least-squares fit of `y(x)`
    pub fn fit(x: &[T], y: &[T], degree: usize) -> Result<Self, FitError> {
        assert_eq!(x.len(), y.len(), "x and y should have the same size");
        let n = x.len();
        if n == 0 {
            return Err(FitError::ShortSeries {
                actual: 0,
                minimum: degree + 2,
            });
        }
        let (x_offset, x_scale) = normalization(x);
        let design = Array2::from_shape_fn((n, degree + 1), |(i, j)| {
            let u = (x[i] - x_offset) / x_scale;
            // The first column holds the highest power
            (0..degree - j).fold(T::one(), |acc, _| acc * u)
        });
        let y = Array1::from_vec(y.to_vec());
        let solution = solve_least_squares(design.view(), y.view(), degree)?;
        let dof = T::from_len(n - (degree + 1));
        Ok(Self {
            polynomial: Polynomial {
                coefficients: solution.coefficients.to_vec(),
                x_offset,
                x_scale,
            },
            degree,
            reduced_chi2: solution.rss / dof,
        })
    }

    pub fn eval(&self, x: T) -> T {
        self.polynomial.eval(x)
    }
}
