use crate::array_stats::{argmax, inverse_variance_mean, weighted_mean};
use crate::float_trait::Float;

use itertools::Itertools;
use log::debug;
use macro_const::macro_const;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

macro_const! {
    const DOC: &str = r"
Bayesian blocks segmentation of a series with Gaussian point measurements

Optimal partitioning (Scargle et al. 2013) of the time axis into blocks of constant value. The
fitness of a block is
$$
F = \frac{b^2}{4 a},\quad a = \frac12 \sum_i \sigma_i^{-2},\quad b = -\sum_i y_i \sigma_i^{-2},
$$
and every change point is penalised by the prior calibrated on the false alarm probability $p_0$:
$$
\mathrm{ncp\_prior} = 4 - \ln\left(73.53\, p_0\, N^{-0.478}\right).
$$
Every block reports its centre, half-width, inverse-variance weighted mean value and the error
of the mean.

- Depends on: **time**, **value**, **value error**
- Minimum number of observations: **1**
";
}

/// A single block of statistically consistent values
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float")]
pub struct BayesianBlock<T> {
    pub center: T,
    pub half_width: T,
    /// Weighted mean of the values inside the block
    pub value: T,
    pub error: T,
}

/// Blocks ordered by time
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float")]
pub struct BlockSegmentation<T> {
    pub blocks: Vec<BayesianBlock<T>>,
}

impl<T> BlockSegmentation<T>
where
    T: Float,
{
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// At least one change point was found
    pub fn is_segmented(&self) -> bool {
        self.blocks.len() > 1
    }

    /// Values of the previous and the last block, `None` without change points
    pub fn last_change(&self) -> Option<(T, T)> {
        match self.blocks.as_slice() {
            [.., previous, last] => Some((previous.value, last.value)),
            _ => None,
        }
    }
}

#[doc = DOC!()]
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BayesianBlocks {
    p0: f64,
}

impl BayesianBlocks {
    pub fn new(p0: f64) -> Self {
        assert!(
            p0.is_finite() && p0 > 0.0 && p0 < 1.0,
            "false alarm probability must be in (0, 1)"
        );
        Self { p0 }
    }

    #[inline]
    pub fn default_p0() -> f64 {
        0.05
    }

    pub fn p0(&self) -> f64 {
        self.p0
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    /// Penalty for a single change point for `n` observations
    pub fn ncp_prior<T: Float>(&self, n: usize) -> T {
        let n = T::from_len(n);
        T::four() - (T::from_f64_lossy(73.53 * self.p0) * n.powf(T::from_f64_lossy(-0.478))).ln()
    }

    /// Indices of the first point of every block for values `y` ordered by time
    fn change_points<T: Float>(&self, y: &[T], err: &[T]) -> Vec<usize> {
        let n = y.len();
        let ncp_prior = self.ncp_prior::<T>(n);
        let w: Vec<_> = err.iter().map(|&e| (e * e).recip()).collect();
        // Shifting all values changes the total fitness by a partition-independent constant,
        // centring them keeps b^2 small
        let shift = weighted_mean(y, &w).unwrap_or_else(T::zero);

        let mut best: Vec<T> = Vec::with_capacity(n);
        let mut last: Vec<usize> = Vec::with_capacity(n);
        let mut fitness = vec![T::zero(); n];
        for r in 0..n {
            // Accumulate sums over blocks [k, r] from right to left
            let (mut a, mut b) = (T::zero(), T::zero());
            for k in (0..=r).rev() {
                a += T::half() * w[k];
                b -= (y[k] - shift) * w[k];
                let previous = if k == 0 { T::zero() } else { best[k - 1] };
                fitness[k] = b * b / (T::four() * a) - ncp_prior + previous;
            }
            // fitness[..=r] is never empty
            let i_max = argmax(&fitness[..=r]).unwrap_or(0);
            last.push(i_max);
            best.push(fitness[i_max]);
        }

        let mut change_points = vec![];
        let mut index = n;
        while index > 0 {
            index = last[index - 1];
            change_points.push(index);
        }
        change_points.reverse();
        change_points
    }

    /// Segment the series `y(x)` with errors `err`
    ///
    /// Input is sorted by `x` and duplicated `x` values are dropped, keeping the first
    /// occurrence. Every remaining point belongs to exactly one block.
    pub fn segment<T>(&self, x: &[T], y: &[T], err: &[T]) -> BlockSegmentation<T>
    where
        T: Float,
    {
        assert_eq!(x.len(), y.len(), "x and y should have the same size");
        assert_eq!(y.len(), err.len(), "y and err should have the same size");

        let (x, y, err): (Vec<_>, Vec<_>, Vec<_>) = x
            .iter()
            .zip(y)
            .zip(err)
            .map(|((&x, &y), &err)| (x, y, err))
            .sorted_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal))
            .dedup_by(|a, b| a.0 == b.0)
            .multiunzip();
        let n = x.len();
        if n == 0 {
            return BlockSegmentation::default();
        }

        let starts = self.change_points(&y, &err);
        // Block edges are halfway between neighbouring points, outer edges are the first and the
        // last points themselves
        let edge = |i: usize| match i {
            0 => x[0],
            i if i == n => x[n - 1],
            i => T::half() * (x[i - 1] + x[i]),
        };
        let blocks: Vec<_> = starts
            .iter()
            .copied()
            .chain(std::iter::once(n))
            .tuple_windows()
            .filter_map(|(begin, end)| {
                let (value, error) = inverse_variance_mean(&y[begin..end], &err[begin..end])?;
                let (lower, upper) = (edge(begin), edge(end));
                Some(BayesianBlock {
                    center: T::half() * (lower + upper),
                    half_width: T::half() * (upper - lower),
                    value,
                    error,
                })
            })
            .collect();
        debug!("{} point(s) are segmented into {} block(s)", n, blocks.len());
        BlockSegmentation { blocks }
    }
}

impl Default for BayesianBlocks {
    fn default() -> Self {
        Self::new(Self::default_p0())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn ncp_prior() {
        // 4 - np.log(73.53 * 0.05 * 2**-0.478)
        let prior: f64 = BayesianBlocks::default().ncp_prior(2);
        assert_relative_eq!(prior, 3.0294, epsilon = 1e-3);
    }

    #[test]
    fn empty() {
        let segmentation = BayesianBlocks::default().segment::<f64>(&[], &[], &[]);
        assert!(segmentation.is_empty());
        assert!(segmentation.last_change().is_none());
    }

    #[test]
    fn single_point() {
        let segmentation = BayesianBlocks::default().segment(&[1.0_f64], &[17.0], &[0.1]);
        assert_eq!(segmentation.len(), 1);
        assert!(!segmentation.is_segmented());
        let block = &segmentation.blocks[0];
        assert_eq!(block.center, 1.0);
        assert_eq!(block.half_width, 0.0);
        assert_relative_eq!(block.value, 17.0, epsilon = 1e-12);
        assert_relative_eq!(block.error, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn constant_series_is_one_block() {
        let x: Vec<_> = (0..20).map(|i| i as f64).collect();
        let y: Vec<_> = (0..20)
            .map(|i| 17.0 + if i % 2 == 0 { 0.05 } else { -0.05 })
            .collect();
        let err = vec![0.1; 20];
        let segmentation = BayesianBlocks::default().segment(&x, &y, &err);
        assert_eq!(segmentation.len(), 1);
        let block = &segmentation.blocks[0];
        assert_relative_eq!(block.center, 9.5);
        assert_relative_eq!(block.half_width, 9.5);
        assert_relative_eq!(block.value, 17.0, epsilon = 1e-12);
        assert_relative_eq!(block.error, 0.1 / 20.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn step_is_found() {
        let x: Vec<_> = (0..20).map(|i| i as f64).collect();
        let y: Vec<_> = (0..20).map(|i| if i < 12 { 18.0 } else { 16.0 }).collect();
        let err = vec![0.1; 20];
        let segmentation = BayesianBlocks::default().segment(&x, &y, &err);
        assert_eq!(segmentation.len(), 2);
        assert_relative_eq!(segmentation.blocks[0].center, 5.75);
        assert_relative_eq!(segmentation.blocks[1].center, 15.25);
        let (previous, last) = segmentation.last_change().unwrap();
        assert_relative_eq!(previous, 18.0, epsilon = 1e-12);
        assert_relative_eq!(last, 16.0, epsilon = 1e-12);
    }

    #[test]
    fn last_point_belongs_to_last_block() {
        let x = [0.0_f64, 1.0, 2.0, 3.0];
        let y = [18.0, 18.0, 18.0, 15.0];
        let err = [0.01; 4];
        let segmentation = BayesianBlocks::default().segment(&x, &y, &err);
        assert_eq!(segmentation.len(), 2);
        assert_relative_eq!(segmentation.blocks[1].value, 15.0, epsilon = 1e-12);
        assert_relative_eq!(segmentation.blocks[1].center, 2.75);
    }

    #[test]
    fn unsorted_input_with_duplicated_times() {
        let x = [2.0_f32, 0.0, 1.0, 0.0];
        let y = [17.0, 17.0, 17.0, 25.0];
        let err = [0.1; 4];
        let segmentation = BayesianBlocks::default().segment(&x, &y, &err);
        assert_eq!(segmentation.len(), 1);
        assert_relative_eq!(segmentation.blocks[0].value, 17.0, epsilon = 1e-4);
    }

    #[test]
    fn doc_static_method() {
        assert!(BayesianBlocks::doc().contains("Depends on: "));
    }
}
