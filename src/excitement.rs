use crate::bayesian_blocks::BlockSegmentation;
use crate::fit::IterativePolynomialFit;
use crate::float_trait::Float;
use crate::series::{ColorResult, PhotometryResult, SeriesResult};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Boolean signals of a single series
///
/// `None` means the signal is unavailable: no polynomial fit for the trends, no change point or
/// too short a series for the blocks. Unavailable signals count neither to the achieved nor to the
/// possible score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Signals {
    /// Last value is brighter (bluer) than the preceding mean
    pub current: bool,
    pub trend_1w: Option<bool>,
    pub trend_1d: Option<bool>,
    /// Last Bayesian block is brighter (bluer) than the previous one
    pub last_block: Option<bool>,
}

impl Signals {
    fn iter(&self) -> impl Iterator<Item = bool> {
        std::iter::once(Some(self.current))
            .chain([self.trend_1w, self.trend_1d, self.last_block])
            .flatten()
    }

    pub fn achieved(&self) -> usize {
        self.iter().filter(|&signal| signal).count()
    }

    pub fn possible(&self) -> usize {
        self.iter().count()
    }
}

/// Last block is brighter (bluer) than the previous one
///
/// Series shorter than a trend fit cannot have a block signal: with a closed last block two points
/// would always be two blocks of a single point each.
fn last_block_signal<T: Float>(blocks: &BlockSegmentation<T>, series_len: usize) -> Option<bool> {
    if series_len < IterativePolynomialFit::MIN_LENGTH {
        return None;
    }
    blocks
        .last_change()
        .map(|(previous, last)| last < previous)
}

/// Series which contribute to the excitement score
pub trait ExcitementSignals {
    fn signals(&self) -> Signals;
}

impl<T> ExcitementSignals for PhotometryResult<T>
where
    T: Float,
{
    fn signals(&self) -> Signals {
        let has_fit = self.trend.has_fit();
        Signals {
            current: self.is_brighter,
            trend_1w: has_fit.then_some(self.trend.trend_1w),
            trend_1d: has_fit.then_some(self.trend.trend_1d),
            last_block: last_block_signal(&self.bayesian_blocks, self.mag.len()),
        }
    }
}

impl<T> ExcitementSignals for ColorResult<T>
where
    T: Float,
{
    fn signals(&self) -> Signals {
        let has_fit = self.trend.has_fit();
        Signals {
            current: self.is_bluer,
            trend_1w: has_fit.then_some(self.trend.trend_1w),
            trend_1d: has_fit.then_some(self.trend.trend_1d),
            last_block: last_block_signal(&self.bayesian_blocks, self.color.len()),
        }
    }
}

impl<T> ExcitementSignals for SeriesResult<T>
where
    T: Float,
{
    fn signals(&self) -> Signals {
        match self {
            Self::Mag(result) => result.signals(),
            Self::Color(result) => result.signals(),
        }
    }
}

/// Ratio of the observed interesting signals to the possible ones
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExcitementScore {
    pub achieved: usize,
    pub possible: usize,
}

impl ExcitementScore {
    pub fn add(&mut self, signals: &Signals) {
        self.achieved += signals.achieved();
        self.possible += signals.possible();
    }

    /// Score in `[0, 1]`, `None` when no signal is available at all
    pub fn value<T: Float>(&self) -> Option<T> {
        (self.possible > 0).then(|| T::from_len(self.achieved) / T::from_len(self.possible))
    }
}

impl FromIterator<Signals> for ExcitementScore {
    fn from_iter<I: IntoIterator<Item = Signals>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut score, signals| {
            score.add(&signals);
            score
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bayesian_blocks::BayesianBlock;

    #[test]
    fn unavailable_signals_are_not_counted() {
        let signals = Signals {
            current: true,
            trend_1w: None,
            trend_1d: None,
            last_block: None,
        };
        assert_eq!(signals.achieved(), 1);
        assert_eq!(signals.possible(), 1);
    }

    #[test]
    fn all_signals() {
        let signals = Signals {
            current: false,
            trend_1w: Some(true),
            trend_1d: Some(false),
            last_block: Some(true),
        };
        assert_eq!(signals.achieved(), 2);
        assert_eq!(signals.possible(), 4);
    }

    #[test]
    fn short_series_has_no_block_signal() {
        let blocks = BlockSegmentation {
            blocks: [18.0_f64, 17.0]
                .into_iter()
                .enumerate()
                .map(|(i, value)| BayesianBlock {
                    center: i as f64,
                    half_width: 0.5,
                    value,
                    error: 0.05,
                })
                .collect(),
        };
        assert_eq!(last_block_signal(&blocks, 2), None);
        assert_eq!(last_block_signal(&blocks, 3), Some(true));
        assert_eq!(last_block_signal(&BlockSegmentation::<f64>::default(), 10), None);
    }

    #[test]
    fn score_value() {
        let mut score = ExcitementScore::default();
        assert_eq!(score.value::<f64>(), None);
        score.add(&Signals {
            current: true,
            trend_1w: Some(true),
            trend_1d: Some(false),
            last_block: None,
        });
        score.add(&Signals::default());
        assert_eq!(score, ExcitementScore { achieved: 2, possible: 4 });
        assert_eq!(score.value::<f32>(), Some(0.5));
    }

    #[test]
    fn collect_signals() {
        let score: ExcitementScore = [
            Signals {
                current: true,
                ..Default::default()
            },
            Signals {
                current: false,
                trend_1w: Some(true),
                trend_1d: Some(true),
                last_block: Some(false),
            },
        ]
        .into_iter()
        .collect();
        assert_eq!(score, ExcitementScore { achieved: 3, possible: 5 });
    }
}
