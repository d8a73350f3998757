//! Single-trial patch state machine.
//!
//! One `PatchState` owns the full life cycle of one planted herb: growth
//! cycles with disease rolls, an optional one-shot resurrection, and the
//! harvest loop that drains the life counter. The struct is created at trial
//! start, mutated only by its own transitions, and folded into an aggregate
//! afterwards.

use rand::Rng;

use crate::data::Herb;
use crate::error::SimError;
use crate::probability::PatchRates;

/// Growth stages run 0..=4; stage 4 is fully grown. Four transitions get a
/// seedling to adulthood (fence post problem).
pub const FINAL_GROWTH_STAGE: u8 = 4;

/// Mutable state of one trial.
#[derive(Debug, Clone, Copy)]
pub struct PatchState {
    herb: Herb,
    rates: PatchRates,
    // Internal plant state
    lives: u32,
    growth_stage: u8,
    diseased: bool,
    dead: bool,
    resurrected: bool,
    // Player outcomes
    herbs_harvested: u32,
    xp_gained: f64,
}

impl PatchState {
    /// Start a fresh trial for one planted herb.
    #[must_use]
    pub const fn new(herb: Herb, rates: PatchRates) -> Self {
        Self {
            herb,
            rates,
            lives: rates.initial_lives,
            growth_stage: 0,
            diseased: false,
            dead: false,
            resurrected: false,
            herbs_harvested: 0,
            xp_gained: 0.0,
        }
    }

    /// Progress growth until the plant is fully grown or dead.
    pub fn grow<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        while self.growth_stage < FINAL_GROWTH_STAGE && !self.dead {
            self.grow_cycle(rng);
        }
    }

    /// One growth cycle. A plant that begins the cycle diseased dies without
    /// advancing; disease contracted this cycle still lets the stage advance
    /// and kills on the next attempt instead.
    fn grow_cycle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        if self.diseased {
            if !self.resurrected
                && self.rates.resurrect_chance > 0.0
                && rng.gen_bool(self.rates.resurrect_chance)
            {
                // Revived, but the cycle is spent: no stage advance, and the
                // plant faces the disease roll again next cycle. One cast per
                // plant.
                self.diseased = false;
                self.resurrected = true;
            } else {
                self.dead = true;
            }
            return;
        }

        if rng.gen_bool(self.rates.disease_per_cycle) {
            self.diseased = true;
        }
        self.growth_stage += 1;
    }

    /// Harvest until the life counter is exhausted. A dead plant yields
    /// nothing and is not an error; a live plant that has not finished
    /// growing is a caller-contract violation.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidState` when the plant is alive but not
    /// fully grown.
    pub fn harvest<R>(&mut self, rng: &mut R) -> Result<(), SimError>
    where
        R: Rng + ?Sized,
    {
        if self.dead {
            return Ok(());
        }
        if self.growth_stage < FINAL_GROWTH_STAGE {
            return Err(SimError::InvalidState {
                stage: self.growth_stage,
            });
        }

        // Compost XP lands when the harvest begins
        self.xp_gained += self.rates.compost_xp * self.rates.xp_multiplier;

        while self.lives > 0 {
            self.herbs_harvested += 1;
            self.xp_gained += self.herb.harvest_xp() * self.rates.xp_multiplier;
            if !rng.gen_bool(self.rates.chance_to_save) {
                self.lives -= 1;
            }
        }

        // Plant XP is only granted on the final pick, which is why dead
        // plants walk away with zero XP.
        self.xp_gained += self.herb.plant_xp() * self.rates.xp_multiplier;
        Ok(())
    }

    /// Herbs picked this trial.
    #[must_use]
    pub const fn herbs_harvested(&self) -> u32 {
        self.herbs_harvested
    }

    /// XP gained this trial, multipliers applied.
    #[must_use]
    pub const fn xp_gained(&self) -> f64 {
        self.xp_gained
    }

    /// Whether the plant reached adulthood alive.
    #[must_use]
    pub const fn survived(&self) -> bool {
        !self.dead
    }

    /// Whether a Resurrect Crops cast saved this plant.
    #[must_use]
    pub const fn resurrected(&self) -> bool {
        self.resurrected
    }

    /// Current growth stage, 0..=4.
    #[must_use]
    pub const fn growth_stage(&self) -> u8 {
        self.growth_stage
    }

    /// Harvest lives remaining.
    #[must_use]
    pub const fn lives(&self) -> u32 {
        self.lives
    }
}
