use crate::excitement::{ExcitementScore, ExcitementSignals};
use crate::float_trait::Float;
use crate::series::{ColorResult, PhotometryResult, SeriesResult};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the analyzer learned about a light curve
///
/// The caller decides whether and where to store it, the report is plain data made of maps,
/// arrays, numbers, strings and booleans.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float")]
pub struct TrendReport<T> {
    /// Series results by label, e.g. `phot_mag_g` or `g-r`
    pub series: BTreeMap<String, SeriesResult<T>>,
    /// Photometry labels in band order
    pub photometry_labels: Vec<String>,
    /// Color labels in band pair order
    pub color_labels: Vec<String>,
    /// Julian date the trends were extrapolated from
    pub reference_time: T,
    pub score: ExcitementScore,
    /// `None` if there was not a single series to score
    pub excitement: Option<T>,
}

impl<T> TrendReport<T>
where
    T: Float,
{
    pub(crate) fn new(
        photometry: Vec<PhotometryResult<T>>,
        colors: Vec<ColorResult<T>>,
        reference_time: T,
    ) -> Self {
        let score: ExcitementScore = photometry
            .iter()
            .map(|result| result.signals())
            .chain(colors.iter().map(|result| result.signals()))
            .collect();
        let photometry_labels = photometry.iter().map(|r| r.label.clone()).collect();
        let color_labels = colors.iter().map(|r| r.label.clone()).collect();
        let series = photometry
            .into_iter()
            .map(SeriesResult::from)
            .chain(colors.into_iter().map(SeriesResult::from))
            .map(|result| (result.label().to_owned(), result))
            .collect();
        Self {
            series,
            photometry_labels,
            color_labels,
            reference_time,
            excitement: score.value(),
            score,
        }
    }

    pub fn get(&self, label: &str) -> Option<&SeriesResult<T>> {
        self.series.get(label)
    }

    pub fn photometry(&self, label: &str) -> Option<&PhotometryResult<T>> {
        match self.series.get(label)? {
            SeriesResult::Mag(result) => Some(result),
            SeriesResult::Color(_) => None,
        }
    }

    pub fn color(&self, label: &str) -> Option<&ColorResult<T>> {
        match self.series.get(label)? {
            SeriesResult::Color(result) => Some(result),
            SeriesResult::Mag(_) => None,
        }
    }

    /// Number of analysed series, check it before relying on [Self::excitement]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
