use crate::error::FitError;
use crate::float_trait::Float;

use ndarray::{Array1, ArrayView1, ArrayView2, s};

/// Solution of an over-determined linear system in the least-squares sense
#[derive(Clone, Debug)]
pub struct LeastSquaresSolution<T> {
    pub coefficients: Array1<T>,
    /// Residual sum of squares
    pub rss: T,
}

/// Solve `a * x = b` minimising `|a * x - b|^2` with Householder QR decomposition
///
/// At least one residual degree of freedom is required. A diagonal element of `R` smaller than
/// `n * eps * max|R_ii|` marks the matrix as rank deficient.
pub fn solve_least_squares<T>(
    a: ArrayView2<T>,
    b: ArrayView1<T>,
    degree: usize,
) -> Result<LeastSquaresSolution<T>, FitError>
where
    T: Float,
{
    let (n, p) = a.dim();
    assert_eq!(n, b.len(), "a and b should have the same number of rows");
    if n <= p {
        return Err(FitError::ZeroDegreesOfFreedom { degree });
    }

    let mut r = a.to_owned();
    let mut qtb = b.to_owned();
    for k in 0..p {
        let norm = r
            .slice(s![k.., k])
            .fold(T::zero(), |acc, &x| acc + x * x)
            .sqrt();
        if norm.is_zero() {
            return Err(FitError::SingularDesignMatrix { degree });
        }
        let alpha = if r[[k, k]] > T::zero() { -norm } else { norm };
        let mut v = r.slice(s![k.., k]).to_owned();
        v[0] -= alpha;
        let v_norm2 = v.dot(&v);
        for j in k..p {
            let f = T::two() * v.dot(&r.slice(s![k.., j])) / v_norm2;
            r.slice_mut(s![k.., j]).scaled_add(-f, &v);
        }
        let f = T::two() * v.dot(&qtb.slice(s![k..])) / v_norm2;
        qtb.slice_mut(s![k..]).scaled_add(-f, &v);
    }

    let max_diag = (0..p).fold(T::zero(), |acc, k| acc.max(r[[k, k]].abs()));
    let tolerance = max_diag * T::epsilon() * T::from_len(n);
    if (0..p).any(|k| r[[k, k]].abs() <= tolerance) {
        return Err(FitError::SingularDesignMatrix { degree });
    }

    let mut coefficients = Array1::zeros(p);
    for k in (0..p).rev() {
        let tail = r.slice(s![k, k + 1..]).dot(&coefficients.slice(s![k + 1..]));
        coefficients[k] = (qtb[k] - tail) / r[[k, k]];
    }

    let rss = (&a.dot(&coefficients) - &b).fold(T::zero(), |acc, &x| acc + x * x);
    Ok(LeastSquaresSolution { coefficients, rss })
}
