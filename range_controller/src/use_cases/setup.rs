use crate::domain::systems::allocation::{check_fire_feasibility, distribute};
use crate::domain::tuning::FiringTuning;
use crate::domain::{ErrorCode, FireQuota, RegisterError, RegisterStore};
use crate::use_cases::register_map as regs;
use crate::use_cases::types::{SetupInput, SetupOutcome};
use tracing::{info, warn};

/// Allocates the requested ammo, validates the double/triple quota against the
/// resulting allocation and floors the delay.
pub fn prepare_game(input: &SetupInput, tuning: &FiringTuning) -> SetupOutcome {
    let distribution = distribute(&input.machines, input.request.max_shootable_ammo);
    let quota = FireQuota {
        max_shootable_ammo: distribution.max_shootable_ammo,
        double_fire: input.request.double_fire.max(0),
        triple_fire: input.request.triple_fire.max(0),
    };

    // Always checked against the clamped total; only reported when nothing worse was.
    let feasible = check_fire_feasibility(
        &distribution.allocation,
        quota.double_fire,
        quota.triple_fire,
        quota.max_shootable_ammo,
    );
    let mut error = distribution.error;
    if !feasible {
        warn!(
            max_shootable_ammo = quota.max_shootable_ammo,
            double_fire = quota.double_fire,
            triple_fire = quota.triple_fire,
            "double/triple fires not achievable with this allocation"
        );
        if error == ErrorCode::None {
            error = ErrorCode::InfeasibleFireQuota;
        }
    }

    SetupOutcome {
        allocation: distribution.allocation,
        quota,
        delay: input.delay.max(tuning.min_delay),
        error,
        feasible,
    }
}

// Game setup use case with an injected register store.
pub struct GameSetupUseCase<S> {
    pub store: S,
    pub tuning: FiringTuning,
}

impl<S> GameSetupUseCase<S>
where
    S: RegisterStore,
{
    pub fn execute(&self) -> Result<SetupOutcome, RegisterError> {
        let input = SetupInput {
            machines: regs::read_machines(&self.store)?,
            request: regs::read_quota(&self.store, regs::SETUP_MAX_SHOOTABLE_AMMO)?,
            delay: i32::from(self.store.read_word(regs::SETUP_DELAY)?),
        };

        let outcome = prepare_game(&input, &self.tuning);

        regs::write_capacity(&self.store, &input.machines)?;
        regs::write_allocation(&self.store, &outcome.allocation)?;
        regs::write_quota(&self.store, &outcome.quota)?;
        let delay = regs::to_word(outcome.delay);
        self.store.write_word(regs::CONFIGURED_DELAY, delay)?;
        self.store.write_word(regs::FIRED_COUNT, 0)?;
        self.store.write_word(regs::ERROR_CODE, outcome.error.code())?;
        // First fire of the game waits one full delay period.
        self.store.write_word(regs::REMAINING_DELAY, delay)?;

        info!(
            allocation = ?outcome.allocation,
            max_shootable_ammo = outcome.quota.max_shootable_ammo,
            double_fire = outcome.quota.double_fire,
            triple_fire = outcome.quota.triple_fire,
            delay = outcome.delay,
            error = ?outcome.error,
            "game prepared"
        );
        Ok(outcome)
    }
}
