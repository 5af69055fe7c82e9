use crate::array_stats::mean;
use crate::data::{Band, Photopoint, UpperLimit};
use crate::float_trait::Float;

use std::cmp::Ordering;
use unzip3::Unzip3;

/// Time-ordered magnitudes of a single band
#[derive(Clone, Debug, PartialEq)]
pub struct BandSeries<T> {
    pub band: Band,
    pub t: Vec<T>,
    pub m: Vec<T>,
    pub err: Vec<T>,
    pub upper_limit_t: Vec<T>,
    pub upper_limit_m: Vec<T>,
}

impl<T> BandSeries<T>
where
    T: Float,
{
    /// Construct from photopoints of the `band`, points of other bands are ignored
    pub fn new<'a>(band: Band, photopoints: impl IntoIterator<Item = &'a Photopoint<T>>) -> Self {
        let mut points: Vec<_> = photopoints
            .into_iter()
            .filter(|pp| pp.band == band)
            .collect();
        points.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(Ordering::Equal));
        let (t, m, err): (Vec<_>, Vec<_>, Vec<_>) = points
            .into_iter()
            .map(|pp| (pp.time, pp.mag, pp.mag_err))
            .unzip3();
        Self {
            band,
            t,
            m,
            err,
            upper_limit_t: vec![],
            upper_limit_m: vec![],
        }
    }

    /// Attach non-detections of the same band
    pub fn with_upper_limits<'a>(
        mut self,
        upper_limits: impl IntoIterator<Item = &'a UpperLimit<T>>,
    ) -> Self {
        let mut limits: Vec<_> = upper_limits
            .into_iter()
            .filter(|ul| ul.band == self.band)
            .map(|ul| (ul.time, ul.limiting_mag))
            .collect();
        limits.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        let (t, m): (Vec<_>, Vec<_>) = limits.into_iter().unzip();
        self.upper_limit_t = t;
        self.upper_limit_m = m;
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.t.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn mean_mag(&self) -> Option<T> {
        mean(&self.m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_by_time() {
        let points = [
            Photopoint::new(2.0_f64, 1, 17.0, 0.2, 1.0),
            Photopoint::new(0.0, 1, 18.0, 0.1, 1.0),
            Photopoint::new(1.0, 2, 10.0, 0.1, 1.0),
            Photopoint::new(1.0, 1, 17.5, 0.3, 1.0),
        ];
        let series = BandSeries::new(Band(1), &points);
        assert_eq!(series.t, [0.0, 1.0, 2.0]);
        assert_eq!(series.m, [18.0, 17.5, 17.0]);
        assert_eq!(series.err, [0.1, 0.3, 0.2]);
        assert_eq!(series.mean_mag(), Some(17.5));
    }

    #[test]
    fn upper_limits_of_own_band() {
        let limits = [
            UpperLimit::new(5.0_f32, 1, 20.0),
            UpperLimit::new(3.0, 2, 19.0),
            UpperLimit::new(4.0, 1, 20.5),
        ];
        let series = BandSeries::new(Band(1), &[]).with_upper_limits(&limits);
        assert!(series.is_empty());
        assert_eq!(series.upper_limit_t, [4.0, 5.0]);
        assert_eq!(series.upper_limit_m, [20.5, 20.0]);
    }
}
