//! Categorical sampling over non-negative weights.

use rand::Rng;

/// Draws one index with probability `weights[i] / Σ weights`.
///
/// The weights need not be normalized. A single uniform threshold in
/// `[0, Σw)` is drawn and the cumulative sum is scanned, so exactly one
/// outcome is produced per call. Weights are divided by the largest finite
/// weight first, so very large or very small magnitudes do not overflow
/// or underflow the running sum.
///
/// NaN and negative weights count as zero. Weights of `+inf` (a `powf`
/// overflow) dominate every finite weight: the draw is uniform among the
/// infinite candidates. When every weight is zero (all underflowed, or the
/// pheromone trail fully evaporated), the draw falls back to a uniform
/// choice over all indices, so the result is always a valid index.
///
/// Returns `None` only for an empty slice.
///
/// # Examples
///
/// ```
/// use u_antcolony::aco::sample_index;
/// use u_antcolony::random::create_rng;
///
/// let mut rng = create_rng(42);
/// assert_eq!(sample_index(&[0.0, 3.0, 0.0], &mut rng), Some(1));
/// assert_eq!(sample_index(&[1.0, f64::INFINITY], &mut rng), Some(1));
/// assert_eq!(sample_index(&[], &mut rng), None);
/// ```
pub fn sample_index<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }

    let infinite = weights.iter().filter(|&&w| w == f64::INFINITY).count();
    if infinite > 0 {
        let pick = rng.random_range(0..infinite);
        return weights
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w == f64::INFINITY)
            .nth(pick)
            .map(|(i, _)| i);
    }

    let max = weights.iter().copied().map(usable).fold(0.0, f64::max);
    if max <= 0.0 {
        tracing::trace!(candidates = weights.len(), "zero total weight, sampling uniformly");
        return Some(rng.random_range(0..weights.len()));
    }

    // scaled weights lie in [0, 1] and the largest is exactly 1
    let total: f64 = weights.iter().map(|&w| usable(w) / max).sum();
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last_positive = 0;
    for (i, &w) in weights.iter().enumerate() {
        let w = usable(w) / max;
        if w > 0.0 {
            cumulative += w;
            last_positive = i;
            if cumulative > threshold {
                return Some(i);
            }
        }
    }

    // rounding can leave the threshold just above the final sum
    Some(last_positive)
}

/// Finite positive weights pass through; NaN, negative and `+inf` map to zero.
/// Infinite weights are handled before scaling.
#[inline]
fn usable(w: f64) -> f64 {
    if w.is_finite() && w > 0.0 {
        w
    } else {
        0.0
    }
}
