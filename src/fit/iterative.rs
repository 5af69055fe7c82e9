use crate::fit::polynomial::PolynomialFit;
use crate::float_trait::Float;

use log::debug;
use macro_const::macro_const;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

macro_const! {
    const DOC: &str = r"
Iterative polynomial trend with parsimonious degree selection

A straight line is fitted first, then polynomials of degree $2, \ldots, 1 + \mathrm{max\_order}$
are tried in turn, each one only if the series has more than $\mathrm{degree} + 2$ points.
A candidate replaces the current best model only if its reduced $\chi^2$ is lower by more than
20%:
$$
\chi^2_\mathrm{new} < 0.8 \, \chi^2_\mathrm{best},
$$
where $\chi^2 = \sum_i (y_i - p(x_i))^2 / (N - \mathrm{degree} - 1)$. If the straight line is
degenerate (all $x_i$ are equal) a constant is used instead.

- Depends on: **time**, **value**
- Minimum number of observations: **3**
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct IterativePolynomialFit {
    max_order: usize,
}

impl IterativePolynomialFit {
    pub const MIN_LENGTH: usize = 3;

    /// Relative reduced chi-square improvement required to accept a higher degree
    pub const IMPROVEMENT_FACTOR: f64 = 0.8;

    pub fn new(max_order: usize) -> Self {
        Self { max_order }
    }

    #[inline]
    pub fn default_max_order() -> usize {
        2
    }

    pub fn max_order(&self) -> usize {
        self.max_order
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    /// Parsimony rule: `true` if `candidate` is significantly better than `best`
    pub fn is_improvement<T: Float>(best: T, candidate: T) -> bool {
        candidate < best * T::from_f64_lossy(Self::IMPROVEMENT_FACTOR)
    }

    /// Best polynomial model of `y(x)`, `None` if the series is too short or degenerate
    pub fn fit<T>(&self, x: &[T], y: &[T]) -> Option<PolynomialFit<T>>
    where
        T: Float,
    {
        let n = y.len();
        if n < Self::MIN_LENGTH {
            debug!("{n} point(s) are too few for a polynomial fit");
            return None;
        }

        let mut best = match PolynomialFit::fit(x, y, 1) {
            Ok(fit) => fit,
            Err(error) => {
                debug!("straight line fit failed: {error}, trying a constant");
                PolynomialFit::fit(x, y, 0)
                    .map_err(|error| debug!("constant fit failed: {error}"))
                    .ok()?
            }
        };

        for degree in 2..=1 + self.max_order {
            if n <= degree + 2 {
                break;
            }
            debug!("trying degree {degree} polynomial");
            match PolynomialFit::fit(x, y, degree) {
                Ok(candidate) => {
                    if Self::is_improvement(best.reduced_chi2, candidate.reduced_chi2) {
                        best = candidate;
                    }
                }
                Err(error) => {
                    debug!("degree {degree} fit failed: {error}");
                    break;
                }
            }
        }
        Some(best)
    }
}

impl Default for IterativePolynomialFit {
    fn default() -> Self {
        Self::new(Self::default_max_order())
    }
}
