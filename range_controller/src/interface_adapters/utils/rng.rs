use crate::domain::ports::{Clock, RandomSeeder, RandomSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

fn now_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_nanos(&self) -> u64 {
        now_nanos()
    }
}

/// `StdRng`-backed random source. Not cryptographically meaningful.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.rng.random_range(0..bound)
    }
}

/// Reseeds from the clock on every call, once per firing cycle.
#[derive(Debug, Clone, Default)]
pub struct ClockSeeder<C> {
    clock: C,
}

impl<C: Clock> ClockSeeder<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> RandomSeeder for ClockSeeder<C> {
    type Source = SeededRandom;

    fn reseed(&self) -> SeededRandom {
        SeededRandom::from_seed(self.clock.now_epoch_nanos())
    }
}
