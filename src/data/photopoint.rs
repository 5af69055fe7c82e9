use crate::data::Band;
use crate::float_trait::Float;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Single detection of a source
///
/// Field aliases allow to deserialize ZTF alert photopoints (`jd`, `fid`, `magpsf`, `sigmapsf`,
/// `rb`) directly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float")]
#[schemars(bound = "T: Float")]
pub struct Photopoint<T> {
    /// Julian date of the observation
    #[serde(alias = "jd")]
    pub time: T,
    #[serde(alias = "fid")]
    pub band: Band,
    #[serde(alias = "magpsf")]
    pub mag: T,
    #[serde(alias = "sigmapsf")]
    pub mag_err: T,
    /// Real-bogus score in `[0, 1]`, higher is better
    #[serde(alias = "rb", default)]
    pub quality: T,
}

impl<T> Photopoint<T>
where
    T: Float,
{
    pub fn new(time: T, band: u8, mag: T, mag_err: T, quality: T) -> Self {
        Self {
            time,
            band: Band(band),
            mag,
            mag_err,
            quality,
        }
    }

    /// Time and magnitude are finite and the error can be used as an inverse-variance weight
    pub fn is_usable(&self) -> bool {
        self.time.is_finite()
            && self.mag.is_finite()
            && self.mag_err.is_finite()
            && self.mag_err > T::zero()
    }
}

/// Non-detection: the source was fainter than `limiting_mag` at `time`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float")]
pub struct UpperLimit<T> {
    #[serde(alias = "jd")]
    pub time: T,
    #[serde(alias = "fid")]
    pub band: Band,
    #[serde(alias = "diffmaglim")]
    pub limiting_mag: T,
}

impl<T> UpperLimit<T>
where
    T: Float,
{
    pub fn new(time: T, band: u8, limiting_mag: T) -> Self {
        Self {
            time,
            band: Band(band),
            limiting_mag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_ztf_field_names() {
        let json = r#"{"jd": 2458658.7, "fid": 2, "magpsf": 17.3, "sigmapsf": 0.05, "rb": 0.9}"#;
        let pp: Photopoint<f64> = serde_json::from_str(json).unwrap();
        assert_eq!(pp, Photopoint::new(2458658.7, 2, 17.3, 0.05, 0.9));
    }

    #[test]
    fn quality_defaults_to_zero() {
        let json = r#"{"time": 1.0, "band": 1, "mag": 17.0, "mag_err": 0.1}"#;
        let pp: Photopoint<f32> = serde_json::from_str(json).unwrap();
        assert_eq!(pp.quality, 0.0);
    }

    #[test]
    fn unusable_photopoints() {
        assert!(Photopoint::new(1.0_f64, 1, 17.0, 0.1, 1.0).is_usable());
        assert!(!Photopoint::new(1.0_f64, 1, 17.0, 0.0, 1.0).is_usable());
        assert!(!Photopoint::new(1.0_f64, 1, f64::NAN, 0.1, 1.0).is_usable());
        assert!(!Photopoint::new(f64::INFINITY, 1, 17.0, 0.1, 1.0).is_usable());
    }

    #[test]
    fn deserialize_upper_limit() {
        let json = r#"{"jd": 2458650.5, "fid": 1, "diffmaglim": 20.1}"#;
        let ul: UpperLimit<f64> = serde_json::from_str(json).unwrap();
        assert_eq!(ul, UpperLimit::new(2458650.5, 1, 20.1));
    }
}
