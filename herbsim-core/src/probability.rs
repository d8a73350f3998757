//! Per-plot probability derivation.
//!
//! Everything here is a pure function of the run configuration, the patch
//! location and the herb. The chance-to-save formula reproduces the
//! closed-form calculator bit for bit: each `floor` is a discrete step, and
//! collapsing them algebraically changes the output.

use crate::config::{RESURRECT_CROPS_MAGIC_LEVEL, SimConfig};
use crate::data::{CHANCE_TO_SAVE_AT_99, Herb};
use crate::patches::PatchLocation;

const DISEASE_DENOMINATOR: f64 = 128.0;
const SAVE_DENOMINATOR: f64 = 256.0;
const MAX_SKILL_LEVEL: f64 = 99.0;

/// The derived probabilities driving one trial. Computed once per
/// (herb, patch) cell and shared read-only by every trial in the batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatchRates {
    /// Chance the plant contracts disease during one growth cycle. Always a
    /// multiple of 1/128; exactly zero for disease-free patches.
    pub disease_per_cycle: f64,
    /// Harvest lives the plant starts with, 3..=6 by compost tier.
    pub initial_lives: u32,
    /// Chance a picked herb does not consume a harvest life.
    pub chance_to_save: f64,
    /// One-off XP for spreading compost, before the XP multiplier.
    pub compost_xp: f64,
    /// Multiplier applied to every XP award on this patch.
    pub xp_multiplier: f64,
    /// Chance a Resurrect Crops cast revives a dying plant. Zero when the
    /// spell is disabled or the magic level is too low.
    pub resurrect_chance: f64,
}

impl PatchRates {
    /// Derive the full rate set for one (config, patch, herb) combination.
    #[must_use]
    pub fn derive(config: &SimConfig, patch: PatchLocation, herb: Herb) -> Self {
        Self {
            disease_per_cycle: disease_chance_per_cycle(config, patch),
            initial_lives: config.compost.initial_lives(),
            chance_to_save: chance_to_save(config, patch, herb),
            compost_xp: config.compost.xp(),
            xp_multiplier: 1.0 + patch.xp_bonus(config),
            resurrect_chance: resurrect_chance(config),
        }
    }
}

/// Chance the plant contracts disease during a single growth cycle.
///
/// Disease chance is always a proper fraction of 128, so the numerator is
/// computed first, floored, clamped to at least 1, and divided last. The
/// disease-free locations short-circuit before the numeric path.
#[must_use]
pub fn disease_chance_per_cycle(config: &SimConfig, patch: PatchLocation) -> f64 {
    if patch.is_disease_free(config) {
        return 0.0;
    }

    let base_numerator = config.compost.disease_numerator();
    let modifier = config.iasor_disease_modifier();

    // Round down to a whole numerator, but never to zero
    let numerator = f64::max(f64::floor(base_numerator * modifier), 1.0);
    numerator / DISEASE_DENOMINATOR
}

/// Chance to save a harvest life when picking one herb.
///
/// Linear interpolation between the herb's level-1 chance and the universal
/// level-99 chance, floored; scaled by the stacked item, diary and attas
/// multipliers, plus one, floored again; divided by 256. Both floors are in
/// the reference calculator and are load-bearing.
#[must_use]
pub fn chance_to_save(config: &SimConfig, patch: PatchLocation, herb: Herb) -> f64 {
    let level = f64::from(config.farming_level);
    let chance1 = herb.chance_to_save_at_1();
    let chance99 = CHANCE_TO_SAVE_AT_99;

    let interpolated = f64::floor(
        chance1 * (MAX_SKILL_LEVEL - level) / (MAX_SKILL_LEVEL - 1.0)
            + chance99 * (level - 1.0) / (MAX_SKILL_LEVEL - 1.0),
    );

    f64::floor(
        interpolated
            * (1.0 + config.item_save_bonus())
            * (1.0 + patch.diary_save_bonus(config))
            * (1.0 + config.attas_save_bonus())
            + 1.0,
    ) / SAVE_DENOMINATOR
}

/// Chance a Resurrect Crops cast succeeds: 50% at Magic 78 rising linearly
/// to 75% at Magic 99. Zero when the spell is off or unavailable.
#[must_use]
pub fn resurrect_chance(config: &SimConfig) -> f64 {
    if !config.resurrect_crops || config.magic_level < RESURRECT_CROPS_MAGIC_LEVEL {
        return 0.0;
    }
    let span = MAX_SKILL_LEVEL - f64::from(RESURRECT_CROPS_MAGIC_LEVEL);
    let progress = f64::from(config.magic_level - RESURRECT_CROPS_MAGIC_LEVEL) / span;
    0.50 + 0.25 * progress
}
