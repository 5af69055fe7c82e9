use crate::bayesian_blocks::BlockSegmentation;
use crate::data::{Band, BandSeries};
use crate::float_trait::Float;
use crate::series::{Estimators, is_last_below_preceding_mean};
use crate::trend::TrendFit;

use itertools::{Itertools, multiunzip};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Color from two observations in different bands taken close in time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPair<T> {
    /// Midpoint of the two observation times
    pub time: T,
    /// Half of the time separation
    pub time_err: T,
    pub color: T,
    pub color_err: T,
}

/// All pairs of observations of two bands separated by at most `max_time_diff`
///
/// Every valid combination is kept, so a single observation may take part in several pairs.
/// Pairs are ordered by their midpoint time.
pub fn color_pairs<T>(a: &BandSeries<T>, b: &BandSeries<T>, max_time_diff: T) -> Vec<ColorPair<T>>
where
    T: Float,
{
    if a.band == b.band {
        debug!("band {} cannot form a color with itself", a.band);
        return vec![];
    }
    let a_points = itertools::izip!(&a.t, &a.m, &a.err);
    let b_points = itertools::izip!(&b.t, &b.m, &b.err).collect_vec();
    a_points
        .cartesian_product(b_points)
        .filter(|(point_a, point_b)| (*point_a.0 - *point_b.0).abs() <= max_time_diff)
        .map(|((&t_a, &m_a, &err_a), (&t_b, &m_b, &err_b))| ColorPair {
            time: T::half() * (t_a + t_b),
            time_err: T::half() * (t_a - t_b).abs(),
            color: m_a - m_b,
            color_err: err_a.hypot(err_b),
        })
        .sorted_by(|x, y| x.time.partial_cmp(&y.time).unwrap_or(Ordering::Equal))
        .collect()
}

/// Color history of a band pair and its trends
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float")]
pub struct ColorResult<T> {
    /// `<first band name>-<second band name>`
    pub label: String,
    pub bands: [Band; 2],
    pub time: Vec<T>,
    pub time_err: Vec<T>,
    pub color: Vec<T>,
    pub color_err: Vec<T>,
    /// Difference of the mean magnitudes of the bands over all their detections
    pub color_ave: T,
    pub bayesian_blocks: BlockSegmentation<T>,
    /// The last color is bluer than the mean of the preceding ones beyond its error
    pub is_bluer: bool,
    pub trend: TrendFit<T>,
}

impl<T> ColorResult<T>
where
    T: Float,
{
    pub fn label_for(first_band_name: &str, second_band_name: &str) -> String {
        format!("{first_band_name}-{second_band_name}")
    }

    /// `None` if the bands were never observed close enough in time
    pub fn estimate(
        a: &BandSeries<T>,
        b: &BandSeries<T>,
        band_names: [&str; 2],
        max_time_diff: T,
        estimators: &Estimators,
        now: T,
    ) -> Option<Self> {
        let label = Self::label_for(band_names[0], band_names[1]);
        info!("color {label}");
        let pairs = color_pairs(a, b, max_time_diff);
        if pairs.is_empty() {
            debug!("no observation pairs for color {label}");
            return None;
        }
        let (time, time_err, color, color_err): (Vec<_>, Vec<_>, Vec<_>, Vec<_>) = multiunzip(
            pairs
                .iter()
                .map(|pair| (pair.time, pair.time_err, pair.color, pair.color_err)),
        );
        let color_ave = match (a.mean_mag(), b.mean_mag()) {
            (Some(mean_a), Some(mean_b)) => mean_a - mean_b,
            _ => T::nan(),
        };
        Some(Self {
            label,
            bands: [a.band, b.band],
            bayesian_blocks: estimators.blocks.segment(&time, &color, &color_err),
            is_bluer: is_last_below_preceding_mean(&color, &color_err),
            trend: TrendFit::estimate(&estimators.polynomial, &time, &color, now),
            time,
            time_err,
            color,
            color_err,
            color_ave,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Photopoint;

    use approx::assert_relative_eq;
    use light_curve_common::all_close;

    fn series(band: u8, points: &[(f64, f64)]) -> BandSeries<f64> {
        let photopoints: Vec<_> = points
            .iter()
            .map(|&(t, m)| Photopoint::new(t, band, m, 0.3, 1.0))
            .collect();
        BandSeries::new(Band(band), &photopoints)
    }

    #[test]
    fn too_far_apart() {
        let g = series(1, &[(0.0, 17.0)]);
        let r = series(2, &[(2.0, 16.0)]);
        assert!(color_pairs(&g, &r, 1.0).is_empty());
        assert!(
            ColorResult::estimate(&g, &r, ["g", "r"], 1.0, &Estimators::default(), 2.0).is_none()
        );
    }

    #[test]
    fn same_band_is_not_a_color() {
        let g = series(1, &[(0.0, 17.0)]);
        assert!(color_pairs(&g, &g, 1.0).is_empty());
    }

    #[test]
    fn all_combinations_are_kept() {
        let g = series(1, &[(0.0, 17.0), (0.5, 17.2)]);
        let r = series(2, &[(0.2, 16.5), (5.0, 16.0)]);
        let pairs = color_pairs(&g, &r, 1.0);
        assert_eq!(pairs.len(), 2);
        assert_relative_eq!(pairs[0].time, 0.1);
        assert_relative_eq!(pairs[0].time_err, 0.1);
        assert_relative_eq!(pairs[0].color, 0.5);
        assert_relative_eq!(pairs[0].color_err, 0.18_f64.sqrt());
        assert_relative_eq!(pairs[1].time, 0.35);
        assert_relative_eq!(pairs[1].color, 0.7, epsilon = 1e-12);
    }

    #[test]
    fn separation_equal_to_maximum_is_valid() {
        let g = series(1, &[(0.0, 17.0)]);
        let r = series(2, &[(1.0, 16.0)]);
        assert_eq!(color_pairs(&g, &r, 1.0).len(), 1);
    }

    #[test]
    fn pairs_are_time_ordered() {
        let g = series(1, &[(0.0, 17.0), (10.0, 17.0)]);
        let r = series(2, &[(0.5, 16.0), (9.6, 16.0), (10.5, 16.0)]);
        let times: Vec<_> = color_pairs(&g, &r, 1.0)
            .iter()
            .map(|pair| pair.time)
            .collect();
        all_close(&times, &[0.25, 9.8, 10.25], 1e-12);
    }

    #[test]
    fn becoming_bluer() {
        let t: Vec<_> = (0..6).map(|i| 2.0 * i as f64).collect();
        let g = series(
            1,
            &t.iter()
                .enumerate()
                .map(|(i, &t)| (t, 17.0 - 0.4 * i as f64))
                .collect::<Vec<_>>(),
        );
        let r = series(
            2,
            &t.iter().map(|&t| (t + 0.1, 16.5)).collect::<Vec<_>>(),
        );
        let result =
            ColorResult::estimate(&g, &r, ["g", "r"], 1.0, &Estimators::default(), 10.05).unwrap();
        assert_eq!(result.label, "g-r");
        assert_eq!(result.bands, [Band(1), Band(2)]);
        assert_eq!(result.color.len(), 6);
        assert_relative_eq!(result.color_ave, 16.0 - 16.5, epsilon = 1e-12);
        assert!(result.is_bluer);
        assert!(result.trend.trend_1d);
        assert!(result.trend.trend_1w);
    }
}
