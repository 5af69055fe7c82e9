use crate::data::{Photopoint, UpperLimit};
use crate::error::LightCurveError;
use crate::float_trait::Float;

use itertools::Itertools;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Detections and non-detections of a single source
///
/// Points are not required to be sorted. The analyzer never mutates a light curve, it builds its
/// own per-band series from it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float")]
#[schemars(bound = "T: Float")]
pub struct LightCurve<T> {
    pub photopoints: Vec<Photopoint<T>>,
    #[serde(default)]
    pub upper_limits: Vec<UpperLimit<T>>,
}

impl<T> LightCurve<T>
where
    T: Float,
{
    pub fn new(photopoints: Vec<Photopoint<T>>, upper_limits: Vec<UpperLimit<T>>) -> Self {
        Self {
            photopoints,
            upper_limits,
        }
    }

    pub fn from_json(s: &str) -> Result<Self, LightCurveError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn is_empty(&self) -> bool {
        self.photopoints.is_empty()
    }

    /// One photopoint per `(time, band)`, see [deduplicate]
    pub fn deduplicated(&self) -> Vec<Photopoint<T>> {
        deduplicate(&self.photopoints)
    }
}

impl<T> FromIterator<Photopoint<T>> for LightCurve<T> {
    fn from_iter<I: IntoIterator<Item = Photopoint<T>>>(iter: I) -> Self {
        Self {
            photopoints: iter.into_iter().collect(),
            upper_limits: vec![],
        }
    }
}

fn cmp_band_time<T: Float>(a: &Photopoint<T>, b: &Photopoint<T>) -> Ordering {
    a.band
        .cmp(&b.band)
        .then_with(|| a.time.partial_cmp(&b.time).unwrap_or(Ordering::Equal))
}

/// Keep the highest-quality photopoint for every `(time, band)` pair
///
/// Duplicates come from the same exposure being processed more than once. A later duplicate
/// replaces the kept one only if its quality is strictly higher. Output is ordered by band and
/// then by time, so the function is idempotent.
pub fn deduplicate<T>(photopoints: &[Photopoint<T>]) -> Vec<Photopoint<T>>
where
    T: Float,
{
    let mut sorted = photopoints.to_vec();
    // Stable sort keeps the first-seen duplicate in front
    sorted.sort_by(cmp_band_time);
    sorted
        .into_iter()
        .chunk_by(|pp| (pp.band, pp.time))
        .into_iter()
        .filter_map(|(_, duplicates)| {
            duplicates.reduce(|kept, pp| if pp.quality > kept.quality { pp } else { kept })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light_curve() -> LightCurve<f64> {
        vec![
            Photopoint::new(3.0, 1, 17.0, 0.1, 0.5),
            Photopoint::new(1.0, 1, 18.0, 0.1, 0.7),
            Photopoint::new(3.0, 1, 16.0, 0.1, 0.9),
            Photopoint::new(3.0, 2, 15.0, 0.1, 0.1),
            Photopoint::new(1.0, 1, 19.0, 0.1, 0.7),
            Photopoint::new(3.0, 1, 14.0, 0.1, 0.9),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn keeps_highest_quality_first_seen() {
        let actual = light_curve().deduplicated();
        let desired = vec![
            Photopoint::new(1.0, 1, 18.0, 0.1, 0.7),
            Photopoint::new(3.0, 1, 16.0, 0.1, 0.9),
            Photopoint::new(3.0, 2, 15.0, 0.1, 0.1),
        ];
        assert_eq!(actual, desired);
    }

    #[test]
    fn idempotent() {
        let once = light_curve().deduplicated();
        let twice = deduplicate(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn never_discards_better_duplicate() {
        let lc = light_curve();
        let kept = lc.deduplicated();
        for pp in &lc.photopoints {
            let representative = kept
                .iter()
                .find(|k| k.band == pp.band && k.time == pp.time)
                .unwrap();
            assert!(representative.quality >= pp.quality);
        }
    }

    #[test]
    fn empty() {
        assert!(LightCurve::<f32>::default().deduplicated().is_empty());
    }

    #[test]
    fn from_json() {
        let json = r#"{
            "photopoints": [
                {"jd": 2458658.7, "fid": 1, "magpsf": 17.3, "sigmapsf": 0.05, "rb": 0.9}
            ],
            "upper_limits": [{"jd": 2458650.5, "fid": 1, "diffmaglim": 20.1}]
        }"#;
        let lc = LightCurve::<f64>::from_json(json).unwrap();
        assert_eq!(lc.photopoints.len(), 1);
        assert_eq!(lc.upper_limits.len(), 1);
    }

    #[test]
    fn json_schema() {
        let schema = serde_json::to_value(schemars::schema_for!(LightCurve<f64>)).unwrap();
        assert!(schema["properties"]["photopoints"].is_object());
        let photopoint = &schema["definitions"]["Photopoint_for_double"];
        assert_eq!(photopoint["properties"]["quality"]["default"], 0.0);
    }

    #[test]
    fn from_json_rejects_non_numeric_magnitude() {
        let json = r#"{"photopoints": [{"jd": 1.0, "fid": 1, "magpsf": "bright", "sigmapsf": 0.1}]}"#;
        assert!(LightCurve::<f64>::from_json(json).is_err());
    }
}
