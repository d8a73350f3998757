//! Batch trial execution and aggregation.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::config::SimConfig;
use crate::data::Herb;
use crate::error::SimError;
use crate::patches::PatchLocation;
use crate::probability::PatchRates;
use crate::seed::derive_trial_seed;
use crate::state::PatchState;

/// Runs a configured number of independent trials for one (herb, patch)
/// cell. Each trial owns a freshly derived RNG stream; the runner itself is
/// immutable and copyable.
#[derive(Debug, Clone, Copy)]
pub struct TrialRunner {
    herb: Herb,
    patch: PatchLocation,
    trials: u32,
    seed: u64,
}

impl TrialRunner {
    #[must_use]
    pub const fn new(herb: Herb, patch: PatchLocation, trials: u32, seed: u64) -> Self {
        Self {
            herb,
            patch,
            trials,
            seed,
        }
    }

    /// Run the full batch without progress reporting.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidConfiguration` for invalid configs or a
    /// zero trial count.
    pub fn run(&self, config: &SimConfig) -> Result<AggregateResult, SimError> {
        self.run_with_progress(config, |_| {})
    }

    /// Run the full batch, invoking `on_trial` after each completed trial.
    /// The callback observes the finished trial state and must not (and
    /// cannot) alter simulation state; stopping iteration early from the
    /// caller's side would leave any partial aggregate valid.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidConfiguration` for invalid configs or a
    /// zero trial count.
    pub fn run_with_progress<F>(
        &self,
        config: &SimConfig,
        mut on_trial: F,
    ) -> Result<AggregateResult, SimError>
    where
        F: FnMut(&PatchState),
    {
        config.validate()?;
        if self.trials == 0 {
            return Err(SimError::InvalidConfiguration {
                field: "trials",
                message: "at least one trial is required".to_string(),
            });
        }

        let rates = PatchRates::derive(config, self.patch, self.herb);
        let mut result = AggregateResult::default();
        for trial in 0..self.trials {
            let stream_seed = derive_trial_seed(self.seed, self.herb, self.patch, trial);
            let mut rng = ChaCha8Rng::seed_from_u64(stream_seed);

            let mut state = PatchState::new(self.herb, rates);
            state.grow(&mut rng);
            state.harvest(&mut rng)?;

            result.record_trial(&state);
            on_trial(&state);
        }
        Ok(result)
    }
}

/// Running-sum accumulator for one (herb, patch) cell. Mutated once per
/// completed trial, then read through the derived-rate accessors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AggregateResult {
    trials: u32,
    herbs_harvested: u64,
    xp_gained: f64,
    survived: u32,
    resurrected: u32,
}

impl AggregateResult {
    /// Fold one finished trial into the running sums.
    pub fn record_trial(&mut self, state: &PatchState) {
        self.trials += 1;
        self.herbs_harvested += u64::from(state.herbs_harvested());
        self.xp_gained += state.xp_gained();
        if state.survived() {
            self.survived += 1;
        }
        if state.resurrected() {
            self.resurrected += 1;
        }
    }

    /// Number of trials recorded so far.
    #[must_use]
    pub const fn trials(&self) -> u32 {
        self.trials
    }

    /// Mean herbs harvested per trial.
    ///
    /// # Errors
    ///
    /// Returns `SimError::DivisionByZero` with zero recorded trials.
    pub fn mean_herbs(&self) -> Result<f64, SimError> {
        #[allow(clippy::cast_precision_loss)]
        let total = self.herbs_harvested as f64;
        self.per_trial(total)
    }

    /// Mean XP gained per trial.
    ///
    /// # Errors
    ///
    /// Returns `SimError::DivisionByZero` with zero recorded trials.
    pub fn mean_xp(&self) -> Result<f64, SimError> {
        self.per_trial(self.xp_gained)
    }

    /// Fraction of trials whose plant reached adulthood.
    ///
    /// # Errors
    ///
    /// Returns `SimError::DivisionByZero` with zero recorded trials.
    pub fn survival_rate(&self) -> Result<f64, SimError> {
        self.per_trial(f64::from(self.survived))
    }

    /// Fraction of trials saved by a Resurrect Crops cast.
    ///
    /// # Errors
    ///
    /// Returns `SimError::DivisionByZero` with zero recorded trials.
    pub fn resurrection_rate(&self) -> Result<f64, SimError> {
        self.per_trial(f64::from(self.resurrected))
    }

    fn per_trial(&self, total: f64) -> Result<f64, SimError> {
        if self.trials == 0 {
            return Err(SimError::DivisionByZero);
        }
        Ok(total / f64::from(self.trials))
    }
}
