use crate::bayesian_blocks::BayesianBlocks;
use crate::config::AnalyzerConfig;
use crate::data::{LightCurve, MultiBandSeries};
use crate::error::ConfigError;
use crate::fit::IterativePolynomialFit;
use crate::float_trait::Float;
use crate::report::TrendReport;
use crate::series::{ColorResult, Estimators, PhotometryResult};

use log::{info, warn};
use macro_const::macro_const;
use std::time::{SystemTime, UNIX_EPOCH};

macro_const! {
    const DOC: &str = r"
Light curve trend analyzer

For every band with detections the analyzer reports the magnitude history, whether the last
detection is significantly brighter than the preceding mean, an iterative polynomial trend
extrapolated one day and one week ahead of the reference time, and Bayesian blocks. The same
products are computed for the color of every band pair, made of all observation pairs taken
within `max_pair_time_diff` days of each other.

All boolean signals are aggregated into the excitement score, the fraction of the available
signals which point to brightening or bluening.

- Depends on: **time**, **band**, **magnitude**, **magnitude error**, **quality**
- Minimum number of observations: **1** per series, **3** for a trend

Times are Julian dates, so use `f64`: `f32` resolves a date near $2.46 \times 10^6$ only to a
quarter of a day, which is too coarse for the one-day pairing and trend.
";
}

/// Julian date of the Unix epoch
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Coarsest acceptable spacing of representable times near the reference time, days
pub const MAX_TIME_RESOLUTION: f64 = 1e-3;

/// `false` if `T` cannot tell apart times closer than [MAX_TIME_RESOLUTION] near `now`,
/// which is the case for `f32` Julian dates
pub(crate) fn has_sufficient_time_resolution<T: Float>(now: T) -> bool {
    now.abs() * T::epsilon() <= T::from_f64_lossy(MAX_TIME_RESOLUTION)
}

/// Current UTC time as a Julian date
pub fn current_julian_date() -> f64 {
    let unix_seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |duration| duration.as_secs_f64());
    UNIX_EPOCH_JD + unix_seconds / SECONDS_PER_DAY
}

#[doc = DOC!()]
#[derive(Clone, Debug, PartialEq)]
pub struct TrendAnalyzer {
    config: AnalyzerConfig,
    estimators: Estimators,
}

impl TrendAnalyzer {
    /// Validate the configuration and build the analyzer
    pub fn new(config: AnalyzerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let estimators = Estimators {
            polynomial: IterativePolynomialFit::new(config.max_order),
            blocks: BayesianBlocks::new(config.bblocks_p0),
        };
        Ok(Self { config, estimators })
    }

    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Self::new(AnalyzerConfig::from_json(s)?)
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    /// Analyze relative to the configured reference time, or to the current time
    pub fn analyze<T>(&self, light_curve: &LightCurve<T>) -> TrendReport<T>
    where
        T: Float,
    {
        let now = self
            .config
            .reference_time
            .unwrap_or_else(current_julian_date);
        self.analyze_at(light_curve, T::from_f64_lossy(now))
    }

    /// Analyze with trends extrapolated from Julian date `now`
    pub fn analyze_at<T>(&self, light_curve: &LightCurve<T>, now: T) -> TrendReport<T>
    where
        T: Float,
    {
        if !has_sufficient_time_resolution(now) {
            warn!(
                "{} resolves times near {now} only to {} days, use f64 for Julian dates",
                std::any::type_name::<T>(),
                now.abs() * T::epsilon()
            );
        }
        let bands = MultiBandSeries::from_light_curve(light_curve);
        info!(
            "analyzing {} photopoint(s) in {} band(s)",
            light_curve.photopoints.len(),
            bands.len()
        );

        let photometry: Vec<_> = bands
            .iter()
            .map(|series| {
                let name = self.config.band_name(series.band);
                PhotometryResult::estimate(series, &name, &self.estimators, now)
            })
            .collect();

        let colors: Vec<_> = if self.config.calculate_color {
            let max_time_diff = T::from_f64_lossy(self.config.max_pair_time_diff);
            bands
                .pairs()
                .filter_map(|(a, b)| {
                    let names = [
                        self.config.band_name(a.band),
                        self.config.band_name(b.band),
                    ];
                    ColorResult::estimate(
                        a,
                        b,
                        [&*names[0], &*names[1]],
                        max_time_diff,
                        &self.estimators,
                        now,
                    )
                })
                .collect()
        } else {
            vec![]
        };

        let report = TrendReport::new(photometry, colors, now);
        info!(
            "excitement {:?} from {} series",
            report.excitement,
            report.len()
        );
        report
    }
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        let config = AnalyzerConfig::default();
        Self {
            estimators: Estimators {
                polynomial: IterativePolynomialFit::new(config.max_order),
                blocks: BayesianBlocks::new(config.bblocks_p0),
            },
            config,
        }
    }
}
