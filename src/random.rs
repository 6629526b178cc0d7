//! Random draws behind a trait so layouts can be replayed from a seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random numbers consumed by the layout code.
pub trait RandomSource {
    /// Uniform draw in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform draw in `[min, max)`. Returns `min` when the range is empty.
    fn range(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        let v = min + (max - min) * self.next_f64();
        // rounding can land on `max` for draws just under 1.0
        if v >= max {
            below(max)
        } else {
            v
        }
    }

    /// Uniform index in `[0, upper)`. `upper` must be non-zero.
    fn index(&mut self, upper: usize) -> usize {
        debug_assert!(upper > 0, "index() needs a non-empty range");
        let idx = (self.next_f64() * upper as f64).floor() as usize;
        idx.min(upper.saturating_sub(1))
    }
}

/// Largest float strictly less than `x`, for finite `x`.
fn below(x: f64) -> f64 {
    if x == 0.0 {
        -f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }

    fn range(&mut self, min: f64, max: f64) -> f64 {
        (**self).range(min, max)
    }

    fn index(&mut self, upper: usize) -> usize {
        (**self).index(upper)
    }
}

/// Browser `Math.random`. Only callable on wasm targets.
#[derive(Clone, Copy, Debug, Default)]
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Seedable generator for reproducible layouts.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    inner: SmallRng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.inner.random::<f64>()
    }

    fn range(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        self.inner.random_range(min..max)
    }

    fn index(&mut self, upper: usize) -> usize {
        self.inner.random_range(0..upper)
    }
}

/// Replays a fixed list of unit draws, cycling when exhausted.
#[cfg(test)]
#[derive(Clone, Debug)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

#[cfg(test)]
impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 0.999_999)
    }
}
