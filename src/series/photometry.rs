use crate::bayesian_blocks::BlockSegmentation;
use crate::data::{Band, BandSeries};
use crate::float_trait::Float;
use crate::series::{Estimators, is_last_below_preceding_mean};
use crate::trend::TrendFit;

use log::info;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Magnitude history of a single band and its trends
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float")]
pub struct PhotometryResult<T> {
    /// `phot_mag_<band name>`
    pub label: String,
    pub band: Band,
    pub time: Vec<T>,
    pub time_err: Vec<T>,
    pub mag: Vec<T>,
    pub mag_err: Vec<T>,
    pub upper_limit_time: Vec<T>,
    pub upper_limit_mag: Vec<T>,
    pub bayesian_blocks: BlockSegmentation<T>,
    /// The last detection is brighter than the mean of the preceding ones beyond its error
    pub is_brighter: bool,
    pub trend: TrendFit<T>,
}

impl<T> PhotometryResult<T>
where
    T: Float,
{
    pub fn label_for(band_name: &str) -> String {
        format!("phot_mag_{band_name}")
    }

    pub fn estimate(
        series: &BandSeries<T>,
        band_name: &str,
        estimators: &Estimators,
        now: T,
    ) -> Self {
        info!("photometry of band {band_name}");
        Self {
            label: Self::label_for(band_name),
            band: series.band,
            time: series.t.clone(),
            time_err: vec![T::zero(); series.len()],
            mag: series.m.clone(),
            mag_err: series.err.clone(),
            upper_limit_time: series.upper_limit_t.clone(),
            upper_limit_mag: series.upper_limit_m.clone(),
            bayesian_blocks: estimators.blocks.segment(&series.t, &series.m, &series.err),
            is_brighter: is_last_below_preceding_mean(&series.m, &series.err),
            trend: TrendFit::estimate(&estimators.polynomial, &series.t, &series.m, now),
        }
    }
}
