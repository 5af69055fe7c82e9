use crate::bayesian_blocks::BayesianBlocks;
use crate::data::Band;
use crate::error::ConfigError;
use crate::fit::IterativePolynomialFit;

use lazy_static::lazy_static;
use schemars::JsonSchema;
use schemars::schema::RootSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

lazy_static! {
    /// ZTF filter identifiers
    static ref ZTF_BAND_NAMES: BTreeMap<u8, String> = [(1, "g"), (2, "r"), (3, "i")]
        .into_iter()
        .map(|(id, name)| (id, name.to_owned()))
        .collect();
}

/// Run configuration of [crate::TrendAnalyzer]
///
/// Every key is optional, missing keys take their default values. Unknown keys and values of a
/// wrong type are rejected when parsing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Maximum number of polynomial degrees tried on top of the straight line
    pub max_order: usize,
    /// False alarm probability of a Bayesian blocks change point
    pub bblocks_p0: f64,
    /// Maximum time difference in days between two observations forming a color
    pub max_pair_time_diff: f64,
    /// Compute colors of every band pair
    pub calculate_color: bool,
    /// Human-readable band names used in series labels
    pub band_names: BTreeMap<u8, String>,
    /// Julian date the trends are extrapolated from, current time if absent
    pub reference_time: Option<f64>,
}

impl AnalyzerConfig {
    pub const MAX_ORDER_LIMIT: usize = 8;

    /// Parse and validate JSON configuration
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_order > Self::MAX_ORDER_LIMIT {
            return Err(ConfigError::MaxOrderTooLarge {
                actual: self.max_order,
                maximum: Self::MAX_ORDER_LIMIT,
            });
        }
        if !(self.bblocks_p0.is_finite() && self.bblocks_p0 > 0.0 && self.bblocks_p0 < 1.0) {
            return Err(ConfigError::FalseAlarmProbability(self.bblocks_p0));
        }
        if !(self.max_pair_time_diff.is_finite() && self.max_pair_time_diff >= 0.0) {
            return Err(ConfigError::MaxPairTimeDiff(self.max_pair_time_diff));
        }
        if let Some(reference_time) = self.reference_time {
            if !reference_time.is_finite() {
                return Err(ConfigError::ReferenceTime(reference_time));
            }
        }
        self.validate_band_names()
    }

    /// Names are series labels: non-empty, unique, and numeric only for the band of that number
    fn validate_band_names(&self) -> Result<(), ConfigError> {
        let mut seen: BTreeMap<&str, u8> = BTreeMap::new();
        for (&band, name) in self.band_names.iter() {
            if name.is_empty() {
                return Err(ConfigError::EmptyBandName(band));
            }
            if name.bytes().all(|c| c.is_ascii_digit()) && *name != band.to_string() {
                return Err(ConfigError::NumericBandName {
                    band,
                    name: name.clone(),
                });
            }
            if let Some(&first) = seen.get(name.as_str()) {
                return Err(ConfigError::DuplicateBandName {
                    first,
                    second: band,
                    name: name.clone(),
                });
            }
            seen.insert(name, band);
        }
        Ok(())
    }

    /// Configured band name, or the band identifier if the band is unknown
    pub fn band_name(&self, band: Band) -> Cow<'_, str> {
        match self.band_names.get(&band.id()) {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Owned(band.to_string()),
        }
    }

    pub fn json_schema() -> RootSchema {
        schemars::schema_for!(AnalyzerConfig)
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_order: IterativePolynomialFit::default_max_order(),
            bblocks_p0: BayesianBlocks::default_p0(),
            max_pair_time_diff: 1.0,
            calculate_color: true,
            band_names: ZTF_BAND_NAMES.clone(),
            reference_time: None,
        }
    }
}
