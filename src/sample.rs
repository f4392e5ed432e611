//! Categorical draws over explicit weight vectors.
//!
//! All draws reduce to one uniform variate walked against the cumulative
//! weights. Weights do not need to sum to 1: instead of allocating a
//! normalized copy, the uniform draw is scaled by the total mass, which is
//! equivalent and keeps the hot path allocation-free. Floating-point drift
//! in the running sum is absorbed by the final bucket, so a draw can never
//! run off the end of the distribution.
//!
//! Notes:
//! - Every randomized function has a `*_with_rng` variant for deterministic
//!   testing/benchmarking. The plain variants call `rand::rng()` and are not
//!   deterministic across processes by design.
//! - Malformed input (empty distributions, mismatched lengths, negative or
//!   non-finite weights, zero total mass) is rejected with [`SampleError`]
//!   rather than silently producing a skewed draw.

use rand::prelude::*;

use crate::counter::Counter;

/// Errors for draws over malformed weight vectors.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    /// The distribution has no entries.
    Empty,
    /// `weights` and `values` have different lengths.
    LengthMismatch {
        /// Number of weights supplied.
        weights: usize,
        /// Number of values supplied.
        values: usize,
    },
    /// A weight is NaN or infinite.
    NonFiniteWeight(f64),
    /// A weight is negative.
    NegativeWeight(f64),
    /// All weights are zero, leaving nothing to draw from.
    ZeroMass,
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "distribution must be non-empty"),
            Self::LengthMismatch { weights, values } => write!(
                f,
                "weights and values must have equal length (got {weights} weights, {values} values)"
            ),
            Self::NonFiniteWeight(w) => write!(f, "weight must be finite (got {w})"),
            Self::NegativeWeight(w) => write!(f, "weight must be >= 0 (got {w})"),
            Self::ZeroMass => write!(f, "weights must not all be zero"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Check a weight vector and return its total mass.
fn total_mass(weights: &[f64]) -> Result<f64, SampleError> {
    if weights.is_empty() {
        return Err(SampleError::Empty);
    }
    let mut total = 0.0;
    for &w in weights {
        if !w.is_finite() {
            return Err(SampleError::NonFiniteWeight(w));
        }
        if w < 0.0 {
            return Err(SampleError::NegativeWeight(w));
        }
        total += w;
    }
    if total == 0.0 {
        return Err(SampleError::ZeroMass);
    }
    Ok(total)
}

fn check_paired<T>(weights: &[f64], values: &[T]) -> Result<f64, SampleError> {
    if weights.len() != values.len() {
        return Err(SampleError::LengthMismatch {
            weights: weights.len(),
            values: values.len(),
        });
    }
    total_mass(weights)
}

/// Scale `weights` so they sum to 1, preserving ratios.
///
/// A vector summing to 0 (including the empty vector) is returned unchanged;
/// callers that need a hard failure instead should draw through [`sample`],
/// which rejects zero mass.
pub fn normalize(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        return weights.to_vec();
    }
    weights.iter().map(|w| w / total).collect()
}

/// Draw one of `values` with probability proportional to its paired weight.
pub fn sample<'a, T>(weights: &[f64], values: &'a [T]) -> Result<&'a T, SampleError> {
    let mut rng = rand::rng();
    sample_with_rng(weights, values, &mut rng)
}

/// [`sample`] with a caller-supplied RNG.
pub fn sample_with_rng<'a, T, R: Rng + ?Sized>(
    weights: &[f64],
    values: &'a [T],
    rng: &mut R,
) -> Result<&'a T, SampleError> {
    let total = check_paired(weights, values)?;

    let choice = rng.random::<f64>() * total;
    let mut acc = 0.0;
    // The last bucket absorbs any residual mass left by summation drift.
    let mut idx = weights.len() - 1;
    for (i, &w) in weights.iter().enumerate() {
        acc += w;
        if choice < acc {
            idx = i;
            break;
        }
    }
    Ok(&values[idx])
}

/// Draw `n` values in one pass.
///
/// Sorts `n` uniform variates and walks the cumulative weights once, which is
/// O(n log n + |weights|) instead of `n` independent O(|weights|) walks. The
/// returned samples are grouped by bucket rather than in draw order; shuffle
/// if independent ordering matters.
pub fn sample_n<'a, T>(
    weights: &[f64],
    values: &'a [T],
    n: usize,
) -> Result<Vec<&'a T>, SampleError> {
    let mut rng = rand::rng();
    sample_n_with_rng(weights, values, n, &mut rng)
}

/// [`sample_n`] with a caller-supplied RNG.
pub fn sample_n_with_rng<'a, T, R: Rng + ?Sized>(
    weights: &[f64],
    values: &'a [T],
    n: usize,
    rng: &mut R,
) -> Result<Vec<&'a T>, SampleError> {
    let total = check_paired(weights, values)?;

    let mut draws: Vec<f64> = (0..n).map(|_| rng.random::<f64>() * total).collect();
    draws.sort_by(f64::total_cmp);

    let mut samples = Vec::with_capacity(n);
    let mut bucket = 0usize;
    let mut acc = weights[0];
    for draw in draws {
        // Advance until the draw lands in the current bucket; the final
        // bucket takes whatever drift leaves over.
        while draw >= acc && bucket + 1 < weights.len() {
            bucket += 1;
            acc += weights[bucket];
        }
        samples.push(&values[bucket]);
    }
    Ok(samples)
}

/// Draw a key from a counter, with probability proportional to its value.
///
/// Keys are paired with their weights in ascending key order, the ordering
/// the counter itself does not define.
pub fn sample_from_counter<K>(counter: &Counter<K>) -> Result<&K, SampleError>
where
    K: Ord + std::hash::Hash,
{
    let mut rng = rand::rng();
    sample_from_counter_with_rng(counter, &mut rng)
}

/// [`sample_from_counter`] with a caller-supplied RNG.
pub fn sample_from_counter_with_rng<'a, K, R>(
    counter: &'a Counter<K>,
    rng: &mut R,
) -> Result<&'a K, SampleError>
where
    K: Ord + std::hash::Hash,
    R: Rng + ?Sized,
{
    let mut pairs: Vec<(&K, f64)> = counter.iter().collect();
    pairs.sort_by(|(a, _), (b, _)| a.cmp(b));
    let weights: Vec<f64> = pairs.iter().map(|(_, w)| *w).collect();
    let keys: Vec<&K> = pairs.iter().map(|(k, _)| *k).collect();

    sample_with_rng(&weights, &keys, rng).map(|key| *key)
}

/// Total weight of every entry whose paired value equals `value`.
///
/// Duplicate values accumulate, so a distribution listing the same outcome
/// twice reports the sum of both weights. Weights are taken as given and are
/// not normalized here.
pub fn probability_of<T: PartialEq>(
    value: &T,
    weights: &[f64],
    values: &[T],
) -> Result<f64, SampleError> {
    if weights.len() != values.len() {
        return Err(SampleError::LengthMismatch {
            weights: weights.len(),
            values: values.len(),
        });
    }
    Ok(weights
        .iter()
        .zip(values)
        .filter(|(_, v)| *v == value)
        .map(|(w, _)| w)
        .sum())
}

/// True with probability `p`.
///
/// The draw is uniform over [0, 1), so `p <= 0.0` is never true and
/// `p >= 1.0` always is; values outside [0, 1] behave as if clamped.
pub fn flip_coin(p: f64) -> bool {
    let mut rng = rand::rng();
    flip_coin_with_rng(p, &mut rng)
}

/// [`flip_coin`] with a caller-supplied RNG.
pub fn flip_coin_with_rng<R: Rng + ?Sized>(p: f64, rng: &mut R) -> bool {
    rng.random::<f64>() < p
}

/// Draw an outcome from a slice of `(weight, outcome)` pairs.
///
/// The pair layout mirrors how transition tables are often stored; for
/// drawing from a counter use [`sample_from_counter`] instead.
pub fn choose_from_pairs<T>(pairs: &[(f64, T)]) -> Result<&T, SampleError> {
    let mut rng = rand::rng();
    choose_from_pairs_with_rng(pairs, &mut rng)
}

/// [`choose_from_pairs`] with a caller-supplied RNG.
pub fn choose_from_pairs_with_rng<'a, T, R: Rng + ?Sized>(
    pairs: &'a [(f64, T)],
    rng: &mut R,
) -> Result<&'a T, SampleError> {
    if pairs.is_empty() {
        return Err(SampleError::Empty);
    }
    let mut total = 0.0;
    for &(w, _) in pairs {
        if !w.is_finite() {
            return Err(SampleError::NonFiniteWeight(w));
        }
        if w < 0.0 {
            return Err(SampleError::NegativeWeight(w));
        }
        total += w;
    }
    if total == 0.0 {
        return Err(SampleError::ZeroMass);
    }

    let choice = rng.random::<f64>() * total;
    let mut acc = 0.0;
    let mut idx = pairs.len() - 1;
    for (i, &(w, _)) in pairs.iter().enumerate() {
        acc += w;
        if choice < acc {
            idx = i;
            break;
        }
    }
    Ok(&pairs[idx].1)
}
