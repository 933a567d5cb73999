use crate::domain::systems::delay::{self, DelayGate};
use crate::domain::systems::{firing, mode};
use crate::domain::tuning::FiringTuning;
use crate::domain::{
    MACHINE_COUNT, RandomSeeder, RandomSource, RangeState, RegisterError, RegisterStore,
};
use crate::use_cases::register_map as regs;
use crate::use_cases::types::{CycleOutcome, CycleState};
use tracing::{debug, info};

/// One scan cycle of the firing scheduler.
///
/// Clears the previous selection past the cooldown midpoint, runs the delay gate and,
/// on a fire-permitted cycle, either ends the game or fires a randomly chosen mode.
pub fn tick<R: RandomSource>(
    state: &mut CycleState,
    rng: &mut R,
    tuning: &FiringTuning,
) -> CycleOutcome {
    let selection_cleared = delay::clears_selection(&state.delay);
    if selection_cleared {
        state.selection = [false; MACHINE_COUNT];
    }

    let gate = delay::advance(&mut state.delay);
    let mut outcome = CycleOutcome::gated(gate, selection_cleared);
    if gate != DelayGate::Fire {
        return outcome;
    }

    if firing::check_end_game(&mut state.range) {
        state.selection = [false; MACHINE_COUNT];
        outcome.game_ended = true;
        return outcome;
    }

    outcome.mode = mode::select_mode(&state.range.quota, rng, tuning);
    if let Some(mode) = outcome.mode {
        outcome.fired = firing::apply_fire(mode, &mut state.range, &mut state.selection, rng);
        state.fired_count += outcome.fired.len() as i32;
    }
    outcome
}

// Firing cycle use case with injected register store and random seeding.
pub struct FiringCycleUseCase<S, G> {
    pub store: S,
    pub seeder: G,
    pub tuning: FiringTuning,
}

impl<S, G> FiringCycleUseCase<S, G>
where
    S: RegisterStore,
    G: RandomSeeder,
{
    /// Runs one cycle with a source reseeded for this invocation only.
    pub fn execute(&self) -> Result<CycleOutcome, RegisterError> {
        let mut rng = self.seeder.reseed();
        self.execute_with(&mut rng)
    }

    pub fn execute_with<R: RandomSource>(&self, rng: &mut R) -> Result<CycleOutcome, RegisterError> {
        let mut state = self.load()?;
        let outcome = tick(&mut state, rng, &self.tuning);
        self.commit(&state, &outcome)?;

        if outcome.game_ended {
            info!(
                fired_count = state.fired_count,
                end_window = self.tuning.end_window_id,
                "game over"
            );
        } else {
            debug!(gate = ?outcome.gate, remaining_delay = state.delay.remaining, "cycle complete");
        }
        Ok(outcome)
    }

    fn load(&self) -> Result<CycleState, RegisterError> {
        let range = RangeState {
            machines: regs::read_machines(&self.store)?,
            allocation: regs::read_allocation(&self.store)?,
            quota: regs::read_quota(&self.store, regs::MAX_SHOOTABLE_AMMO)?,
        };

        Ok(CycleState {
            range,
            delay: delay::normalize(regs::read_delay(&self.store)?),
            selection: regs::read_selection(&self.store)?,
            fired_count: i32::from(self.store.read_word(regs::FIRED_COUNT)?),
        })
    }

    fn commit(&self, state: &CycleState, outcome: &CycleOutcome) -> Result<(), RegisterError> {
        regs::write_capacity(&self.store, &state.range.machines)?;
        regs::write_allocation(&self.store, &state.range.allocation)?;
        regs::write_quota(&self.store, &state.range.quota)?;
        self.store
            .write_word(regs::FIRED_COUNT, regs::to_word(state.fired_count))?;
        regs::write_selection(&self.store, &state.selection)?;
        self.store
            .write_word(regs::REMAINING_DELAY, regs::to_word(state.delay.remaining))?;

        if outcome.game_ended {
            self.store.write_word(regs::END_GAME_CLEAR, 0)?;
            self.store
                .write_word(regs::END_WINDOW, self.tuning.end_window_id)?;
        }
        Ok(())
    }
}
