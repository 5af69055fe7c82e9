//! Synthetic light curves shared by light-curve-trend tests and benchmarks
//!
//! Records are plain tuples, returning library types from here would make them different types
//! in the library's own unit tests.

mod synthetic;
pub use synthetic::{
    DetectionRecord, JD_START, SyntheticLightCurve, UpperLimitRecord, duplicated_exposures,
    flaring_blazar, linear_light_curve, noisy_flat_light_curve,
};

mod catalog;
pub use catalog::{SYNTHETIC_LIGHT_CURVES, SyntheticEntry};
