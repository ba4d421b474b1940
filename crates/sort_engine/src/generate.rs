use rand::Rng;

use crate::{
    config::{validate_size, VALUE_MAX, VALUE_MIN},
    error::EngineError,
};

/// Fills a fresh sequence with uniform values in `[VALUE_MIN, VALUE_MAX]`.
pub fn generate_values<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Vec<i64>, EngineError> {
    validate_size(size)?;
    Ok((0..size)
        .map(|_| rng.gen_range(VALUE_MIN..=VALUE_MAX))
        .collect())
}
