use conv::prelude::*;
use ndarray::NdFloat;
use num_traits::{FloatConst, FromPrimitive};
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::iter::Sum;

/// Floating point trait for light curve values, implemented for [`f32`] and [`f64`]
///
/// `f32` is only suitable for times counted from a nearby epoch, Julian dates require `f64`.
pub trait Float:
    'static
    + NdFloat
    + FloatConst
    + FromPrimitive
    + ApproxFrom<usize>
    + Sum
    + Default
    + JsonSchema
    + Serialize
    + DeserializeOwned
{
    fn half() -> Self;

    fn two() -> Self;

    fn four() -> Self;

    /// Convert from [`f64`], rounding to the nearest representable value
    fn from_f64_lossy(x: f64) -> Self;

    /// Length of a sample as a float
    fn from_len(n: usize) -> Self {
        n.approx_as::<Self>().unwrap_or_else(|_| Self::infinity())
    }
}

macro_rules! float_impl {
    ($t: ty) => {
        impl Float for $t {
            #[inline]
            fn half() -> Self {
                0.5
            }

            #[inline]
            fn two() -> Self {
                2.0
            }

            #[inline]
            fn four() -> Self {
                4.0
            }

            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64_lossy(x: f64) -> Self {
                x as $t
            }
        }
    };
}

float_impl!(f32);
float_impl!(f64);
