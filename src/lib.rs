#![doc = include_str!("../README.md")]


mod analyzer;
pub use analyzer::{MAX_TIME_RESOLUTION, TrendAnalyzer, UNIX_EPOCH_JD, current_julian_date};

mod array_stats;

pub mod bayesian_blocks;
pub use bayesian_blocks::{BayesianBlock, BayesianBlocks, BlockSegmentation};

mod config;
pub use config::AnalyzerConfig;

mod data;
pub use data::{
    Band, BandSeries, LightCurve, MultiBandSeries, Photopoint, UpperLimit, deduplicate,
};

mod error;
pub use error::{ConfigError, FitError, LightCurveError};

mod excitement;
pub use excitement::{ExcitementScore, ExcitementSignals, Signals};

pub mod fit;
pub use fit::{IterativePolynomialFit, Polynomial, PolynomialFit};

mod float_trait;
pub use float_trait::Float;

mod report;
pub use report::TrendReport;

pub mod series;
pub use series::{ColorResult, PhotometryResult, SeriesResult};

mod trend;
pub use trend::{DAY_AHEAD, TrendFit, WEEK_AHEAD};

pub use ndarray;
