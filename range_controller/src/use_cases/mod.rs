// Use cases layer: game setup and the per-cycle firing workflow.

pub mod cycle;
pub mod register_map;
pub mod setup;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use cycle::{FiringCycleUseCase, tick};
pub use setup::{GameSetupUseCase, prepare_game};
pub use types::{CycleOutcome, CycleState, SetupInput, SetupOutcome};
