use crate::fit::{IterativePolynomialFit, PolynomialFit};
use crate::float_trait::Float;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Days ahead of the reference time for the short-term trend
pub const DAY_AHEAD: f64 = 1.0;

/// Days ahead of the reference time for the long-term trend
pub const WEEK_AHEAD: f64 = 7.0;

/// Polynomial trend of a series and its extrapolation into the near future
///
/// Both series kinds decrease when they become more interesting: magnitudes decrease when the
/// source brightens, colors decrease when it becomes bluer. So `trend_1d` is true when the model
/// value a day after the reference time is smaller than at the reference time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float")]
pub struct TrendFit<T> {
    pub fit: Option<PolynomialFit<T>>,
    pub trend_1d: bool,
    pub trend_1w: bool,
}

impl<T> TrendFit<T>
where
    T: Float,
{
    pub fn no_fit() -> Self {
        Self {
            fit: None,
            trend_1d: false,
            trend_1w: false,
        }
    }

    pub fn from_fit(fit: Option<PolynomialFit<T>>, now: T) -> Self {
        match fit {
            Some(fit) => {
                let at_now = fit.eval(now);
                let decreases_by = |days: f64| fit.eval(now + T::from_f64_lossy(days)) < at_now;
                Self {
                    trend_1d: decreases_by(DAY_AHEAD),
                    trend_1w: decreases_by(WEEK_AHEAD),
                    fit: Some(fit),
                }
            }
            None => Self::no_fit(),
        }
    }

    /// Fit `y(t)` and extrapolate the model from `now`
    pub fn estimate(fitter: &IterativePolynomialFit, t: &[T], y: &[T], now: T) -> Self {
        Self::from_fit(fitter.fit(t, y), now)
    }

    pub fn has_fit(&self) -> bool {
        self.fit.is_some()
    }
}
