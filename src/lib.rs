//! `bunpu`: weighted counting and sampling primitives.
//!
//! This crate is a low-level "counting and drawing toolbox" that other crates
//! can depend on without pulling in domain-specific machinery.
//!
//! Exposed modules:
//! - `counter`: a numeric multiset defaulting absent keys to zero, with
//!   elementwise arithmetic, normalization, and max/sorted-key queries.
//! - `sample`: categorical draws over explicit weight vectors (single and
//!   batched), coin flips, distribution normalization.
//! - `series`: a forward-filling ordered map for observing values that
//!   change over time.

#![forbid(unsafe_code)]

pub mod counter;
pub mod sample;
pub mod series;

pub use counter::{Counter, CounterError};
pub use sample::{
    choose_from_pairs, choose_from_pairs_with_rng, flip_coin, flip_coin_with_rng, normalize,
    probability_of, sample, sample_from_counter, sample_from_counter_with_rng, sample_n,
    sample_n_with_rng, sample_with_rng, SampleError,
};
pub use series::{BeforeFirstEntry, ForwardFillSeries};
