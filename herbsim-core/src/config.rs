//! Run configuration for a simulation batch.
//!
//! The configuration is constructed once from an external JSON record and is
//! read-only for the lifetime of a run. Unknown enum strings are rejected by
//! serde at deserialization time; numeric bounds are enforced by
//! [`SimConfig::validate`] before any trial executes.

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::patches::PatchLocation;

/// Compost applied to every patch in the run. Governs the base disease
/// numerator, the initial harvest lives, and a one-off XP grant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compost {
    #[default]
    None,
    Normal,
    Supercompost,
    Ultracompost,
}

impl Compost {
    /// Base disease chance per growth cycle, expressed as a numerator over
    /// 128. Modifiers are applied to the numerator before the division so
    /// the result stays a proper multiple of 1/128.
    #[must_use]
    pub const fn disease_numerator(self) -> f64 {
        match self {
            Self::None => 27.0,
            Self::Normal => 14.0,
            Self::Supercompost => 6.0,
            Self::Ultracompost => 3.0,
        }
    }

    /// Harvest lives a plant starts with.
    #[must_use]
    pub const fn initial_lives(self) -> u32 {
        match self {
            Self::None => 3,
            Self::Normal => 4,
            Self::Supercompost => 5,
            Self::Ultracompost => 6,
        }
    }

    /// XP granted once per trial for spreading the compost. Only collected
    /// when the harvest begins, so dead plants forfeit it.
    #[must_use]
    pub const fn xp(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Normal => 18.0,
            Self::Supercompost => 26.0,
            Self::Ultracompost => 36.0,
        }
    }
}

/// Achievement diary progress on one diary track. Ordered so that threshold
/// checks read as `tier >= DiaryTier::Hard`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DiaryTier {
    #[default]
    None,
    Easy,
    Medium,
    Hard,
    Elite,
}

/// The anima plant alive at the Farming Guild. Iasor lowers disease chance,
/// Attas raises the chance to save a harvest life, Kronos affects neither of
/// the quantities modeled here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimaPlant {
    #[default]
    None,
    Attas,
    Iasor,
    Kronos,
}

const MIN_SKILL_LEVEL: u32 = 1;
const MAX_SKILL_LEVEL: u32 = 99;

/// Magic level required to cast Resurrect Crops.
pub const RESURRECT_CROPS_MAGIC_LEVEL: u32 = 78;

/// Immutable description of one simulation run: the player's stats, gear and
/// progress flags, plus the set of patches to evaluate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Player farming level, 1..=99. Herbs above this level are skipped.
    pub farming_level: u32,
    /// Player magic level, 1..=99. Only consulted for Resurrect Crops.
    #[serde(default = "SimConfig::default_magic_level")]
    pub magic_level: u32,
    #[serde(default)]
    pub compost: Compost,
    /// Magic secateurs equipped (+10% chance to save).
    #[serde(default)]
    pub magic_secateurs: bool,
    /// Farming cape equipped (+5% chance to save).
    #[serde(default)]
    pub farming_cape: bool,
    /// Cast Resurrect Crops on plants that would die of disease.
    #[serde(default)]
    pub resurrect_crops: bool,
    #[serde(default)]
    pub anima_plant: AnimaPlant,
    #[serde(default)]
    pub falador_diary: DiaryTier,
    #[serde(default)]
    pub kandarin_diary: DiaryTier,
    #[serde(default)]
    pub kourend_diary: DiaryTier,
    /// At least 50% Hosidius favor makes the Hosidius patch disease-free.
    #[serde(default)]
    pub hosidius_fifty_favor: bool,
    /// The patches being farmed; one report column per entry.
    pub patches: Vec<PatchLocation>,
}

impl SimConfig {
    #[must_use]
    const fn default_magic_level() -> u32 {
        MIN_SKILL_LEVEL
    }

    /// Parse a configuration from its JSON record. Unknown enum strings are
    /// rejected here, before any trial can run.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a configuration.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validate numeric bounds before sanitization or use.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidConfiguration` when a level field is
    /// outside 1..=99.
    pub fn validate(&self) -> Result<(), SimError> {
        Self::validate_level("farming_level", self.farming_level)?;
        Self::validate_level("magic_level", self.magic_level)?;
        Ok(())
    }

    fn validate_level(field: &'static str, value: u32) -> Result<(), SimError> {
        if !(MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(&value) {
            return Err(SimError::InvalidConfiguration {
                field,
                message: format!("must be within {MIN_SKILL_LEVEL}..={MAX_SKILL_LEVEL} (got {value})"),
            });
        }
        Ok(())
    }

    /// Chance-to-save bonus from equipped items. The two bonuses stack
    /// additively.
    #[must_use]
    pub fn item_save_bonus(&self) -> f64 {
        let mut bonus = 0.0;
        if self.magic_secateurs {
            bonus += 0.10;
        }
        if self.farming_cape {
            bonus += 0.05;
        }
        bonus
    }

    /// Chance-to-save bonus from the active anima plant.
    #[must_use]
    pub fn attas_save_bonus(&self) -> f64 {
        match self.anima_plant {
            AnimaPlant::Attas => 0.05,
            AnimaPlant::None | AnimaPlant::Iasor | AnimaPlant::Kronos => 0.0,
        }
    }

    /// Disease-numerator multiplier from the active anima plant.
    #[must_use]
    pub fn iasor_disease_modifier(&self) -> f64 {
        match self.anima_plant {
            AnimaPlant::Iasor => 0.2,
            AnimaPlant::None | AnimaPlant::Attas | AnimaPlant::Kronos => 1.0,
        }
    }
}
