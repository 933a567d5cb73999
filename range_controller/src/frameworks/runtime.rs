// Framework bootstrap for the simulated scan-loop host.

use crate::domain::systems::delay::DelayGate;
use crate::domain::tuning::FiringTuning;
use crate::domain::{ConfigError, RandomSeeder, RegisterError, RegisterStore};
use crate::frameworks::config::{self, RangeConfig};
use crate::interface_adapters::protocol::{CycleReport, RangeEvent, RangeSnapshot, SetupReport};
use crate::interface_adapters::registers::MemoryRegisters;
use crate::interface_adapters::utils::rng::{ClockSeeder, SystemClock};
use crate::use_cases::register_map as regs;
use crate::use_cases::{FiringCycleUseCase, GameSetupUseCase};

use std::time::Duration;
use thiserror::Error;
use tokio::time::MissedTickBehavior;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("register access failed: {0}")]
    Register(#[from] RegisterError),
}

#[derive(Debug, Clone, Copy)]
pub struct ScanSettings {
    pub interval: Duration,
    // 0 disables the limit.
    pub max_cycles: u64,
}

impl ScanSettings {
    pub fn from_env() -> Self {
        Self {
            interval: config::scan_interval(),
            max_cycles: config::max_scan_cycles(),
        }
    }
}

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Writes the operator inputs of the range file into the host registers.
pub fn seed_registers<S: RegisterStore>(
    store: &S,
    config: &RangeConfig,
) -> Result<(), RegisterError> {
    let machines = config.machines();
    store.write(regs::ENABLEMENT, &machines.enabled.map(i16::from))?;
    store.write(regs::CAPACITY, &machines.capacity.map(regs::to_word))?;
    store.write(
        regs::SETUP_MAX_SHOOTABLE_AMMO,
        &[
            config.game.max_shootable_ammo,
            config.game.double_fire,
            config.game.triple_fire,
            config.game.delay,
        ],
    )
}

fn emit(event: &RangeEvent) {
    match serde_json::to_string(event) {
        Ok(payload) => match event {
            RangeEvent::Cycle(_) => tracing::debug!(%payload, "range event"),
            _ => tracing::info!(%payload, "range event"),
        },
        Err(e) => tracing::error!(error = %e, "failed to serialize range event"),
    }
}

/// Runs setup once, then one firing cycle per scan tick until the end window is
/// raised, the cycle limit is hit, or Ctrl-C arrives.
pub async fn run<S, G>(
    store: S,
    seeder: G,
    settings: ScanSettings,
) -> Result<RangeSnapshot, RuntimeError>
where
    S: RegisterStore + Clone,
    G: RandomSeeder,
{
    let tuning = FiringTuning::default();

    let setup = GameSetupUseCase {
        store: store.clone(),
        tuning,
    }
    .execute()?;
    emit(&RangeEvent::Setup(SetupReport::from(&setup)));

    let cycle = FiringCycleUseCase {
        store: store.clone(),
        seeder,
        tuning,
    };

    let mut ticker = tokio::time::interval(settings.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);
    let mut listening = true;
    let mut cycles: u64 = 0;

    loop {
        if settings.max_cycles != 0 && cycles >= settings.max_cycles {
            tracing::warn!(cycles, "scan cycle limit reached before game end");
            break;
        }

        tokio::select! {
            _ = ticker.tick() => {}
            result = &mut shutdown, if listening => match result {
                Ok(()) => {
                    tracing::info!(cycles, "shutdown requested");
                    break;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "ctrl-c handler unavailable");
                    listening = false;
                    continue;
                }
            },
        }

        cycles += 1;
        let outcome = cycle.execute()?;
        if outcome.gate != DelayGate::Cooling {
            emit(&RangeEvent::Cycle(CycleReport::new(cycles, &outcome)));
        }

        if store.read_word(regs::END_WINDOW)? == tuning.end_window_id {
            tracing::info!(cycles, "end-of-game window raised");
            break;
        }
    }

    let snapshot = RangeSnapshot::capture(&store)?;
    emit(&RangeEvent::Snapshot(snapshot.clone()));
    Ok(snapshot)
}

pub async fn run_with_config() -> Result<RangeSnapshot, RuntimeError> {
    init_runtime();

    let path = config::range_config_path();
    let range = config::load_range_config(&path).inspect_err(|e| {
        tracing::error!(%path, error = %e, "failed to load range config");
    })?;
    let settings = ScanSettings::from_env();
    tracing::debug!(
        %path,
        machines = range.machines.len(),
        scan_interval_ms = settings.interval.as_millis(),
        max_cycles = settings.max_cycles,
        "range configured"
    );

    let store = MemoryRegisters::default();
    seed_registers(&store, &range)?;

    run(store, ClockSeeder::new(SystemClock), settings).await
}
