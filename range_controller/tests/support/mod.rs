// Shared helpers for driving a whole game through the in-memory registers.
#![allow(dead_code)]

use range_controller::domain::tuning::FiringTuning;
use range_controller::domain::{Clock, RegisterStore};
use range_controller::frameworks::config::{RangeConfig, parse_range_config};
use range_controller::frameworks::runtime::seed_registers;
use range_controller::interface_adapters::registers::MemoryRegisters;
use range_controller::interface_adapters::utils::rng::ClockSeeder;
use range_controller::use_cases::register_map as regs;
use range_controller::use_cases::{CycleOutcome, FiringCycleUseCase, GameSetupUseCase, SetupOutcome};

// Deterministic seed source so a failing game can be replayed.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_epoch_nanos(&self) -> u64 {
        self.0
    }
}

pub fn range_config(raw: &str) -> RangeConfig {
    parse_range_config(raw).expect("test range config should parse")
}

// Registers seeded from the given range file and prepared by one setup invocation.
pub fn prepared_range(raw: &str) -> (MemoryRegisters, SetupOutcome) {
    let store = MemoryRegisters::default();
    seed_registers(&store, &range_config(raw)).expect("seed registers");
    let outcome = GameSetupUseCase {
        store: store.clone(),
        tuning: FiringTuning::default(),
    }
    .execute()
    .expect("setup should succeed");
    (store, outcome)
}

pub fn cycle_use_case(
    store: &MemoryRegisters,
    seed: u64,
) -> FiringCycleUseCase<MemoryRegisters, ClockSeeder<FixedClock>> {
    FiringCycleUseCase {
        store: store.clone(),
        seeder: ClockSeeder::new(FixedClock(seed)),
        tuning: FiringTuning::default(),
    }
}

// Runs cycles until the end window is raised or `limit` cycles have passed.
pub fn play_until_end(store: &MemoryRegisters, seed: u64, limit: usize) -> Vec<CycleOutcome> {
    let cycle = cycle_use_case(store, seed);
    let mut outcomes = Vec::new();
    for _ in 0..limit {
        outcomes.push(cycle.execute().expect("cycle should succeed"));
        if word(store, regs::END_WINDOW) == FiringTuning::default().end_window_id {
            break;
        }
    }
    outcomes
}

pub fn word(store: &MemoryRegisters, address: usize) -> i16 {
    store.read_word(address).expect("register in range")
}

pub fn words(store: &MemoryRegisters, address: usize, len: usize) -> Vec<i16> {
    let mut buffer = vec![0i16; len];
    store.read(address, &mut buffer).expect("registers in range");
    buffer
}
