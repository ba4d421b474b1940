use shared::domain::AlgorithmKind;

use super::SortContext;
use crate::error::EngineError;

/// Largest frequency table counting sort will allocate.
pub(crate) const MAX_COUNTING_RANGE: u64 = 1_000_000;

const RADIX: i64 = 10;
const BUCKET_COUNT: usize = 10;
const BUCKET_WIDTH: i64 = 20;

pub(super) fn validate_input(algorithm: AlgorithmKind, values: &[i64]) -> Result<(), EngineError> {
    if !algorithm.requires_non_negative() {
        return Ok(());
    }

    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| **v < 0) {
        return Err(EngineError::NegativeValue {
            algorithm,
            index,
            value,
        });
    }

    if algorithm == AlgorithmKind::Counting {
        if let Some(&max) = values.iter().max() {
            let range = max as u64 + 1;
            if range > MAX_COUNTING_RANGE {
                return Err(EngineError::RangeTooLarge {
                    algorithm,
                    range,
                    max: MAX_COUNTING_RANGE,
                });
            }
        }
    }

    Ok(())
}

/// Frequency-table sort. The counting pass visits each element once; no two
/// values are compared.
pub(super) async fn counting(ctx: &mut SortContext<'_>) {
    let Some(max) = ctx.values().iter().copied().max() else {
        return;
    };

    let mut counts = vec![0usize; max as usize + 1];
    for i in 0..ctx.len() {
        counts[ctx.value(i) as usize] += 1;
        ctx.visit(i).await;
    }

    let mut index = 0;
    for (value, count) in counts.into_iter().enumerate() {
        for _ in 0..count {
            ctx.set(index, value as i64);
            ctx.settle(index);
            ctx.refresh().await;
            index += 1;
        }
    }
}

/// LSD base-10 radix sort built from stable per-digit counting rounds.
pub(super) async fn radix(ctx: &mut SortContext<'_>) {
    let Some(max) = ctx.values().iter().copied().max() else {
        return;
    };

    let mut place: i64 = 1;
    while max / place > 0 {
        radix_round(ctx, place).await;
        match place.checked_mul(RADIX) {
            Some(next) => place = next,
            None => break,
        }
    }
    ctx.settle_all();
}

async fn radix_round(ctx: &mut SortContext<'_>, place: i64) {
    let digit = |value: i64| ((value / place) % RADIX) as usize;
    let n = ctx.len();

    let mut counts = [0usize; RADIX as usize];
    for i in 0..n {
        counts[digit(ctx.value(i))] += 1;
        ctx.visit(i).await;
    }
    for d in 1..counts.len() {
        counts[d] += counts[d - 1];
    }

    // Walking backwards keeps equal digits in their previous relative order.
    let mut output = vec![0i64; n];
    for &value in ctx.values().iter().rev() {
        let d = digit(value);
        counts[d] -= 1;
        output[counts[d]] = value;
    }

    for (i, value) in output.into_iter().enumerate() {
        ctx.set(i, value);
        ctx.settle(i);
        ctx.refresh().await;
    }
}

/// Ten fixed-width buckets of `value / 20`; values past the last boundary
/// share the last bucket.
pub(super) async fn bucket(ctx: &mut SortContext<'_>) {
    let n = ctx.len();
    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); BUCKET_COUNT];
    for i in 0..n {
        let value = ctx.value(i);
        let slot = ((value / BUCKET_WIDTH) as usize).min(BUCKET_COUNT - 1);
        buckets[slot].push(value);
        ctx.visit(i).await;
    }

    let mut index = 0;
    for mut bucket in buckets {
        bucket.sort();
        for value in bucket {
            ctx.set(index, value);
            index += 1;
        }
    }

    for i in 0..n {
        ctx.settle(i);
        ctx.refresh().await;
    }
}
