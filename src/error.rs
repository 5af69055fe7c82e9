/// Error returned when [crate::AnalyzerConfig] cannot be parsed or holds an invalid value
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot parse analyzer configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("max_order must not exceed {maximum}, got {actual}")]
    MaxOrderTooLarge { actual: usize, maximum: usize },

    #[error("bblocks_p0 must be a finite number in (0, 1), got {0}")]
    FalseAlarmProbability(f64),

    #[error("max_pair_time_diff must be a finite non-negative number, got {0}")]
    MaxPairTimeDiff(f64),

    #[error("reference_time must be finite, got {0}")]
    ReferenceTime(f64),

    #[error("band {0} has an empty name")]
    EmptyBandName(u8),

    #[error("bands {first} and {second} have the same name {name:?}")]
    DuplicateBandName { first: u8, second: u8, name: String },

    #[error("band {band} name {name:?} is a number, it may clash with an unnamed band")]
    NumericBandName { band: u8, name: String },
}

/// Error returned from polynomial least-squares routines
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FitError {
    #[error("series' length {actual} is smaller than the minimum required length {minimum}")]
    ShortSeries { actual: usize, minimum: usize },

    #[error("design matrix of the degree {degree} polynomial is singular")]
    SingularDesignMatrix { degree: usize },

    #[error("no residual degrees of freedom left for the degree {degree} polynomial")]
    ZeroDegreesOfFreedom { degree: usize },
}

/// Error returned when a [crate::LightCurve] cannot be parsed
#[derive(Debug, thiserror::Error)]
pub enum LightCurveError {
    #[error("cannot parse light curve: {0}")]
    Parse(#[from] serde_json::Error),
}
