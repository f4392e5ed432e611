//! Counting a biased walk, then drawing from the observed distribution.
//!
//! Builds a `Counter` of visit frequencies from coin-flip steps, normalizes
//! it, and draws from it, while a `ForwardFillSeries` records the walker's
//! position over time for point-in-time queries.

use bunpu::{flip_coin_with_rng, sample_from_counter_with_rng, Counter, ForwardFillSeries};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    // A lazy walker: steps right with probability 0.7, left otherwise.
    let mut position = 0i64;
    let mut visits: Counter<i64> = Counter::new();
    let mut trace: ForwardFillSeries<u64, i64> = ForwardFillSeries::with_default(0);

    for step in 0..1_000u64 {
        position += if flip_coin_with_rng(0.7, &mut rng) { 1 } else { -1 };
        visits.add(position, 1.0);
        // Record only every tenth step; forward-fill covers the gaps.
        if step % 10 == 0 {
            trace.set(step, position);
        }
    }

    println!("distinct positions visited: {}", visits.len());
    println!("most visited position:      {:?}", visits.arg_max());
    println!("position at step 55:        {:?}", trace.get(&55)?);

    let frequencies = visits.normalized();
    println!("top positions by frequency:");
    for position in frequencies.sorted_keys().into_iter().take(5) {
        println!("  {position:4}  p={:.4}", frequencies.get(position));
    }

    // Redraw positions proportionally to how often the walk visited them.
    let mut redraws: Counter<i64> = Counter::new();
    for _ in 0..1_000 {
        let &p = sample_from_counter_with_rng(&visits, &mut rng)?;
        redraws.add(p, 1.0);
    }
    println!("most redrawn position:      {:?}", redraws.arg_max());

    Ok(())
}
