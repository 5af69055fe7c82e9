use crate::data::{Band, BandSeries, LightCurve, deduplicate};
use crate::float_trait::Float;

use itertools::Itertools;
use log::warn;
use std::collections::BTreeMap;

/// Light curve split into per-band series, ordered by band identifier
///
/// Built from scratch for every analysis run, photopoints are sanitized and deduplicated first.
#[derive(Clone, Debug)]
pub struct MultiBandSeries<T> {
    mapping: BTreeMap<Band, BandSeries<T>>,
}

impl<T> MultiBandSeries<T>
where
    T: Float,
{
    pub fn from_light_curve(light_curve: &LightCurve<T>) -> Self {
        let (usable, unusable): (Vec<_>, Vec<_>) = light_curve
            .photopoints
            .iter()
            .copied()
            .partition(|pp| pp.is_usable());
        if !unusable.is_empty() {
            warn!(
                "dropping {} photopoint(s) with non-finite values or non-positive errors",
                unusable.len()
            );
        }
        let photopoints = deduplicate(&usable);

        let mapping = photopoints
            .iter()
            .map(|pp| pp.band)
            .dedup()
            .map(|band| {
                let series = BandSeries::new(band, &photopoints)
                    .with_upper_limits(&light_curve.upper_limits);
                (band, series)
            })
            .collect();
        Self { mapping }
    }

    pub fn bands(&self) -> impl Iterator<Item = Band> + '_ {
        self.mapping.keys().copied()
    }

    pub fn get(&self, band: Band) -> Option<&BandSeries<T>> {
        self.mapping.get(&band)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BandSeries<T>> {
        self.mapping.values()
    }

    /// Every unordered pair of distinct bands, lower identifier first
    pub fn pairs(&self) -> impl Iterator<Item = (&BandSeries<T>, &BandSeries<T>)> {
        self.mapping.values().tuple_combinations()
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
