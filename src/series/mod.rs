use crate::array_stats::mean;
use crate::bayesian_blocks::BayesianBlocks;
use crate::fit::IterativePolynomialFit;
use crate::float_trait::Float;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

mod color;
pub use color::{ColorPair, ColorResult, color_pairs};

mod photometry;
pub use photometry::PhotometryResult;

/// Result of a single series analysis, tagged by the physical quantity
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "quantity", rename_all = "lowercase", bound = "T: Float")]
pub enum SeriesResult<T> {
    Mag(PhotometryResult<T>),
    Color(ColorResult<T>),
}

impl<T> SeriesResult<T>
where
    T: Float,
{
    pub fn label(&self) -> &str {
        match self {
            Self::Mag(result) => &result.label,
            Self::Color(result) => &result.label,
        }
    }
}

impl<T> From<PhotometryResult<T>> for SeriesResult<T> {
    fn from(result: PhotometryResult<T>) -> Self {
        Self::Mag(result)
    }
}

impl<T> From<ColorResult<T>> for SeriesResult<T> {
    fn from(result: ColorResult<T>) -> Self {
        Self::Color(result)
    }
}

/// Trend and segmentation estimators shared by all series of an analysis run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Estimators {
    pub polynomial: IterativePolynomialFit,
    pub blocks: BayesianBlocks,
}

/// `true` if the last value is below the mean of all preceding values by more than its error
///
/// Lower magnitude is brighter and lower color is bluer. A single value has nothing to be
/// compared with.
pub fn is_last_below_preceding_mean<T>(values: &[T], errors: &[T]) -> bool
where
    T: Float,
{
    match (values.split_last(), errors.last()) {
        (Some((&last, preceding)), Some(&last_err)) => {
            mean(preceding).is_some_and(|preceding_mean| last + last_err < preceding_mean)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_below_mean() {
        assert!(is_last_below_preceding_mean(&[18.0_f64, 18.2, 17.0], &[0.1, 0.1, 0.2]));
        assert!(!is_last_below_preceding_mean(&[18.0_f64, 18.2, 17.95], &[0.1, 0.1, 0.2]));
        // Preceding mean excludes the last point
        assert!(is_last_below_preceding_mean(&[18.0_f64, 17.6], &[0.1, 0.3]));
    }

    #[test]
    fn single_value_is_never_below() {
        assert!(!is_last_below_preceding_mean(&[1.0_f32], &[0.0]));
        assert!(!is_last_below_preceding_mean::<f32>(&[], &[]));
    }
}
