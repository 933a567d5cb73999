/// Gameplay tuning for the firing scheduler and game setup.
///
/// Keep this separate from runtime configuration (scan interval, config paths, etc.).
use crate::domain::state::FireMode;

#[derive(Debug, Clone, Copy)]
pub struct FiringTuning {
    /// Smallest configured delay setup will accept; lower inputs are raised to it.
    pub min_delay: i32,

    /// Redraws allowed when a draw lands in a mode band whose precondition fails.
    pub mode_retry_limit: u32,

    /// Mode used once the redraw budget is spent.
    pub fallback_mode: FireMode,

    /// Window identifier raised on the end-of-game register.
    pub end_window_id: i16,
}

impl Default for FiringTuning {
    fn default() -> Self {
        Self {
            min_delay: 4,
            mode_retry_limit: 100,
            fallback_mode: FireMode::Single,
            end_window_id: 12,
        }
    }
}
