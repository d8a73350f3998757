//! Herbsim Core Engine
//!
//! Headless Monte Carlo simulation of herb patch yield. This crate models a
//! single patch's life cycle (growth, disease, death or harvest) and reduces
//! many independent trials into aggregate yield, XP and survival statistics,
//! as a cross-check against the closed-form herb calculator. No I/O and no
//! display responsibility lives here; the CLI crate owns both.

pub mod config;
pub mod data;
pub mod error;
pub mod patches;
pub mod probability;
pub mod runner;
pub mod seed;
pub mod state;

// Re-export commonly used types
pub use config::{AnimaPlant, Compost, DiaryTier, RESURRECT_CROPS_MAGIC_LEVEL, SimConfig};
pub use data::{CHANCE_TO_SAVE_AT_99, Herb};
pub use error::SimError;
pub use patches::PatchLocation;
pub use probability::{PatchRates, chance_to_save, disease_chance_per_cycle, resurrect_chance};
pub use runner::{AggregateResult, TrialRunner};
pub use seed::derive_trial_seed;
pub use state::{FINAL_GROWTH_STAGE, PatchState};
