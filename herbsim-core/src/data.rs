//! Static herb catalog.
//!
//! Per-herb constants mirror the closed-form calculator's data table so that
//! simulated rates can be compared against it directly.

use serde::{Deserialize, Serialize};

/// Base chance to save a harvest life at farming level 99. Shared by every
/// herb; only the level-1 value varies per species.
pub const CHANCE_TO_SAVE_AT_99: f64 = 80.0;

/// The herbs a player can grow in an herb patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Herb {
    Guam,
    Marrentill,
    Tarromin,
    Harralander,
    Ranarr,
    Toadflax,
    Irit,
    Avantoe,
    Kwuarm,
    Snapdragon,
    Cadantine,
    Lantadyme,
    DwarfWeed,
    Torstol,
}

/// Catalog order, lowest required level first. Matrix iteration and report
/// rows follow this order.
pub const HERB_ORDER: [Herb; 14] = [
    Herb::Guam,
    Herb::Marrentill,
    Herb::Tarromin,
    Herb::Harralander,
    Herb::Ranarr,
    Herb::Toadflax,
    Herb::Irit,
    Herb::Avantoe,
    Herb::Kwuarm,
    Herb::Snapdragon,
    Herb::Cadantine,
    Herb::Lantadyme,
    Herb::DwarfWeed,
    Herb::Torstol,
];

impl Herb {
    /// Every growable herb, in catalog order.
    pub const ALL: &'static [Self] = &HERB_ORDER;

    /// Stable identifier used for seeds and serialized reports.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Guam => "guam",
            Self::Marrentill => "marrentill",
            Self::Tarromin => "tarromin",
            Self::Harralander => "harralander",
            Self::Ranarr => "ranarr",
            Self::Toadflax => "toadflax",
            Self::Irit => "irit",
            Self::Avantoe => "avantoe",
            Self::Kwuarm => "kwuarm",
            Self::Snapdragon => "snapdragon",
            Self::Cadantine => "cadantine",
            Self::Lantadyme => "lantadyme",
            Self::DwarfWeed => "dwarf_weed",
            Self::Torstol => "torstol",
        }
    }

    /// Display name for report tables.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Guam => "Guam",
            Self::Marrentill => "Marrentill",
            Self::Tarromin => "Tarromin",
            Self::Harralander => "Harralander",
            Self::Ranarr => "Ranarr",
            Self::Toadflax => "Toadflax",
            Self::Irit => "Irit",
            Self::Avantoe => "Avantoe",
            Self::Kwuarm => "Kwuarm",
            Self::Snapdragon => "Snapdragon",
            Self::Cadantine => "Cadantine",
            Self::Lantadyme => "Lantadyme",
            Self::DwarfWeed => "Dwarf Weed",
            Self::Torstol => "Torstol",
        }
    }

    /// Farming level required to plant this herb.
    #[must_use]
    pub const fn required_level(self) -> u32 {
        match self {
            Self::Guam => 9,
            Self::Marrentill => 14,
            Self::Tarromin => 19,
            Self::Harralander => 26,
            Self::Ranarr => 32,
            Self::Toadflax => 38,
            Self::Irit => 44,
            Self::Avantoe => 50,
            Self::Kwuarm => 56,
            Self::Snapdragon => 62,
            Self::Cadantine => 67,
            Self::Lantadyme => 73,
            Self::DwarfWeed => 79,
            Self::Torstol => 85,
        }
    }

    /// Chance to save a harvest life at farming level 1. Note the scale:
    /// these are effectively out of 98, not out of 1.0; the final division
    /// happens in the chance-to-save derivation.
    #[must_use]
    pub const fn chance_to_save_at_1(self) -> f64 {
        match self {
            Self::Guam => 25.0,
            Self::Marrentill => 28.0,
            Self::Tarromin => 31.0,
            Self::Harralander => 36.0,
            Self::Ranarr => 39.0,
            Self::Toadflax => 43.0,
            Self::Irit => 46.0,
            Self::Avantoe => 50.0,
            Self::Kwuarm => 54.0,
            Self::Snapdragon => 57.0,
            Self::Cadantine => 60.0,
            Self::Lantadyme => 64.0,
            Self::DwarfWeed => 67.0,
            Self::Torstol => 71.0,
        }
    }

    /// Farming XP granted for planting one seed. Only awarded on the final
    /// harvest, so dead plants never collect it.
    #[must_use]
    pub const fn plant_xp(self) -> f64 {
        match self {
            Self::Guam => 11.0,
            Self::Marrentill => 13.5,
            Self::Tarromin => 16.0,
            Self::Harralander => 21.5,
            Self::Ranarr => 27.0,
            Self::Toadflax => 34.0,
            Self::Irit => 43.0,
            Self::Avantoe => 54.5,
            Self::Kwuarm => 69.0,
            Self::Snapdragon => 87.5,
            Self::Cadantine => 106.5,
            Self::Lantadyme => 134.5,
            Self::DwarfWeed => 170.5,
            Self::Torstol => 199.5,
        }
    }

    /// Farming XP granted for picking one herb.
    #[must_use]
    pub const fn harvest_xp(self) -> f64 {
        match self {
            Self::Guam => 12.5,
            Self::Marrentill => 15.0,
            Self::Tarromin => 18.0,
            Self::Harralander => 24.0,
            Self::Ranarr => 30.5,
            Self::Toadflax => 38.5,
            Self::Irit => 48.5,
            Self::Avantoe => 61.5,
            Self::Kwuarm => 78.0,
            Self::Snapdragon => 98.5,
            Self::Cadantine => 120.0,
            Self::Lantadyme => 151.5,
            Self::DwarfWeed => 192.0,
            Self::Torstol => 224.5,
        }
    }
}
