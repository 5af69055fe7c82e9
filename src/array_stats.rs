//! Simple slice statistics used by the fitting and segmentation routines

use crate::float_trait::Float;

/// Find the index of the maximum element, the first one wins ties
pub fn argmax<T>(arr: &[T]) -> Option<usize>
where
    T: Float,
{
    let (&first, rest) = arr.split_first()?;
    let (idx, _) = rest
        .iter()
        .enumerate()
        .fold((0, first), |(max_idx, max_val), (idx, &val)| {
            if val > max_val {
                (idx + 1, val)
            } else {
                (max_idx, max_val)
            }
        });
    Some(idx)
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean<T>(values: &[T]) -> Option<T>
where
    T: Float,
{
    if values.is_empty() {
        return None;
    }
    Some(values.iter().copied().sum::<T>() / T::from_len(values.len()))
}

/// Compute the weighted mean
pub fn weighted_mean<T>(values: &[T], weights: &[T]) -> Option<T>
where
    T: Float,
{
    if values.is_empty() || values.len() != weights.len() {
        return None;
    }

    let (sum, weight_sum) = values
        .iter()
        .zip(weights)
        .fold((T::zero(), T::zero()), |(sum, weight_sum), (&v, &w)| {
            (sum + v * w, weight_sum + w)
        });

    if weight_sum.is_zero() {
        None
    } else {
        Some(sum / weight_sum)
    }
}

/// Inverse-variance weighted mean and its standard error
pub fn inverse_variance_mean<T>(values: &[T], errors: &[T]) -> Option<(T, T)>
where
    T: Float,
{
    let weights: Vec<_> = errors.iter().map(|&e| (e * e).recip()).collect();
    let value = weighted_mean(values, &weights)?;
    let error = weights.iter().copied().sum::<T>().sqrt().recip();
    Some((value, error))
}
