use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::errors::RegisterError;
use crate::domain::ports::{Clock, RandomSeeder, RandomSource, RegisterStore};
use crate::use_cases::register_map::REGISTER_SPAN;

// Replays a fixed list of draws, reducing each into the requested bound.
// Once the script is used up every draw returns 0.
#[derive(Clone)]
pub(crate) struct ScriptedRandom {
    draws: VecDeque<u32>,
    pub(crate) bounds_seen: Vec<u32>,
}

impl ScriptedRandom {
    pub(crate) fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            bounds_seen: Vec::new(),
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.bounds_seen.push(bound);
        self.draws.pop_front().unwrap_or(0) % bound
    }
}

// Hands out the same script on every reseed and counts how often it was asked.
pub(crate) struct ScriptedSeeder {
    script: ScriptedRandom,
    pub(crate) reseeds: Arc<Mutex<usize>>,
}

impl ScriptedSeeder {
    pub(crate) fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: ScriptedRandom::new(draws),
            reseeds: Arc::new(Mutex::new(0)),
        }
    }
}

impl RandomSeeder for ScriptedSeeder {
    type Source = ScriptedRandom;

    fn reseed(&self) -> ScriptedRandom {
        *self.reseeds.lock().expect("reseed mutex poisoned") += 1;
        self.script.clone()
    }
}

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) u64);

impl Clock for FixedClock {
    fn now_epoch_nanos(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub read: bool,
    pub write: bool,
}

// In-memory register image that tests can seed and inspect directly.
#[derive(Clone)]
pub(crate) struct RecordingRegisters {
    words: Arc<Mutex<Vec<i16>>>,
    failures: FailureFlags,
}

impl RecordingRegisters {
    pub(crate) fn new() -> Self {
        Self {
            words: Arc::new(Mutex::new(vec![0; REGISTER_SPAN])),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn set(&self, address: usize, values: &[i16]) {
        let mut guard = self.words.lock().expect("registers mutex poisoned");
        guard[address..address + values.len()].copy_from_slice(values);
    }

    pub(crate) fn get(&self, address: usize, len: usize) -> Vec<i16> {
        let guard = self.words.lock().expect("registers mutex poisoned");
        guard[address..address + len].to_vec()
    }
}

impl RegisterStore for RecordingRegisters {
    fn read(&self, address: usize, words: &mut [i16]) -> Result<(), RegisterError> {
        if self.failures.read {
            return Err(RegisterError::Poisoned);
        }
        let guard = self.words.lock().expect("registers mutex poisoned");
        words.copy_from_slice(&guard[address..address + words.len()]);
        Ok(())
    }

    fn write(&self, address: usize, words: &[i16]) -> Result<(), RegisterError> {
        if self.failures.write {
            return Err(RegisterError::Poisoned);
        }
        let mut guard = self.words.lock().expect("registers mutex poisoned");
        guard[address..address + words.len()].copy_from_slice(words);
        Ok(())
    }
}
