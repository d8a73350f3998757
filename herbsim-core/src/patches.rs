//! Herb patch locations and their location-specific buffs.
//!
//! The disease-free set and the diary bonus tables are explicit enumerated
//! exception lists accumulated from community research. New locations get a
//! match arm, not an inferred rule; everything unlisted falls through to the
//! no-bonus default.

use serde::{Deserialize, Serialize};

use crate::config::{DiaryTier, SimConfig};

/// An herb patch location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchLocation {
    Ardougne,
    Catherby,
    Falador,
    FarmingGuild,
    Harmony,
    Hosidius,
    PortPhasmatys,
    TrollStronghold,
    Weiss,
}

/// Column order for reports when a config does not pin its own patch list.
pub const PATCH_ORDER: [PatchLocation; 9] = [
    PatchLocation::Ardougne,
    PatchLocation::Catherby,
    PatchLocation::Falador,
    PatchLocation::FarmingGuild,
    PatchLocation::Harmony,
    PatchLocation::Hosidius,
    PatchLocation::PortPhasmatys,
    PatchLocation::TrollStronghold,
    PatchLocation::Weiss,
];

impl PatchLocation {
    /// Every patch location, in report-column order.
    pub const ALL: &'static [Self] = &PATCH_ORDER;

    /// Stable identifier used for seeds and serialized reports.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ardougne => "ardougne",
            Self::Catherby => "catherby",
            Self::Falador => "falador",
            Self::FarmingGuild => "farming_guild",
            Self::Harmony => "harmony",
            Self::Hosidius => "hosidius",
            Self::PortPhasmatys => "port_phasmatys",
            Self::TrollStronghold => "troll_stronghold",
            Self::Weiss => "weiss",
        }
    }

    /// Display name for report tables.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ardougne => "Ardougne",
            Self::Catherby => "Catherby",
            Self::Falador => "Falador",
            Self::FarmingGuild => "Farming Guild",
            Self::Harmony => "Harmony",
            Self::Hosidius => "Hosidius",
            Self::PortPhasmatys => "Port Phasmatys",
            Self::TrollStronghold => "Troll Stronghold",
            Self::Weiss => "Weiss",
        }
    }

    /// Whether this patch can never catch disease. Troll Stronghold and
    /// Weiss always qualify; Hosidius qualifies at 50% favor.
    #[must_use]
    pub fn is_disease_free(self, config: &SimConfig) -> bool {
        match self {
            Self::TrollStronghold | Self::Weiss => true,
            Self::Hosidius => config.hosidius_fifty_favor,
            _ => false,
        }
    }

    /// Chance-to-save bonus local to this patch, before item and anima
    /// bonuses stack on top.
    #[must_use]
    pub fn diary_save_bonus(self, config: &SimConfig) -> f64 {
        match self {
            // Catherby scales with the Kandarin diary tier
            Self::Catherby => match config.kandarin_diary {
                DiaryTier::Medium => 0.05,
                DiaryTier::Hard => 0.10,
                DiaryTier::Elite => 0.15,
                DiaryTier::None | DiaryTier::Easy => 0.0,
            },
            // Both Hosidius patches take +5% from Kourend hard
            Self::FarmingGuild | Self::Hosidius if config.kourend_diary >= DiaryTier::Hard => 0.05,
            _ => 0.0,
        }
    }

    /// XP bonus applied to every action performed on this patch.
    #[must_use]
    pub fn xp_bonus(self, config: &SimConfig) -> f64 {
        match self {
            Self::Falador if config.falador_diary >= DiaryTier::Medium => 0.10,
            _ => 0.0,
        }
    }

    /// Patch name annotated with its active modifiers, for report headers.
    #[must_use]
    pub fn description(self, config: &SimConfig) -> String {
        let mut modifiers = Vec::new();
        if self.is_disease_free(config) {
            modifiers.push("disease-free".to_string());
        }
        let save_bonus = self.diary_save_bonus(config);
        if save_bonus > 0.0 {
            modifiers.push(format!("{:+.0}% yield", save_bonus * 100.0));
        }
        let xp_bonus = self.xp_bonus(config);
        if xp_bonus > 0.0 {
            modifiers.push(format!("{:+.0}% XP", xp_bonus * 100.0));
        }

        if modifiers.is_empty() {
            self.name().to_string()
        } else {
            format!("{} ({})", self.name(), modifiers.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnimaPlant, Compost};

    fn config_with(mutator: impl FnOnce(&mut SimConfig)) -> SimConfig {
        let mut config = SimConfig {
            farming_level: 50,
            magic_level: 1,
            compost: Compost::None,
            magic_secateurs: false,
            farming_cape: false,
            resurrect_crops: false,
            anima_plant: AnimaPlant::None,
            falador_diary: DiaryTier::None,
            kandarin_diary: DiaryTier::None,
            kourend_diary: DiaryTier::None,
            hosidius_fifty_favor: false,
            patches: vec![],
        };
        mutator(&mut config);
        config
    }

    #[test]
    fn troll_stronghold_and_weiss_are_always_disease_free() {
        let config = config_with(|_| {});
        assert!(PatchLocation::TrollStronghold.is_disease_free(&config));
        assert!(PatchLocation::Weiss.is_disease_free(&config));
        assert!(!PatchLocation::Ardougne.is_disease_free(&config));
    }

    #[test]
    fn hosidius_needs_favor_to_be_disease_free() {
        let without = config_with(|_| {});
        assert!(!PatchLocation::Hosidius.is_disease_free(&without));
        let with = config_with(|c| c.hosidius_fifty_favor = true);
        assert!(PatchLocation::Hosidius.is_disease_free(&with));
    }

    #[test]
    fn catherby_bonus_scales_with_kandarin_tier() {
        for (tier, expected) in [
            (DiaryTier::None, 0.0),
            (DiaryTier::Easy, 0.0),
            (DiaryTier::Medium, 0.05),
            (DiaryTier::Hard, 0.10),
            (DiaryTier::Elite, 0.15),
        ] {
            let config = config_with(|c| c.kandarin_diary = tier);
            assert!(
                (PatchLocation::Catherby.diary_save_bonus(&config) - expected).abs()
                    < f64::EPSILON,
                "tier {tier:?}"
            );
        }
    }

    #[test]
    fn kourend_hard_buffs_both_hosidius_patches() {
        let config = config_with(|c| c.kourend_diary = DiaryTier::Hard);
        assert!((PatchLocation::Hosidius.diary_save_bonus(&config) - 0.05).abs() < f64::EPSILON);
        assert!(
            (PatchLocation::FarmingGuild.diary_save_bonus(&config) - 0.05).abs() < f64::EPSILON
        );
        // Medium is not enough
        let medium = config_with(|c| c.kourend_diary = DiaryTier::Medium);
        assert!((PatchLocation::Hosidius.diary_save_bonus(&medium) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unlisted_patches_get_no_save_bonus() {
        let config = config_with(|c| {
            c.kandarin_diary = DiaryTier::Elite;
            c.kourend_diary = DiaryTier::Elite;
        });
        for patch in [
            PatchLocation::Ardougne,
            PatchLocation::Falador,
            PatchLocation::Harmony,
            PatchLocation::PortPhasmatys,
            PatchLocation::TrollStronghold,
            PatchLocation::Weiss,
        ] {
            assert!((patch.diary_save_bonus(&config) - 0.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn falador_medium_grants_the_only_xp_bonus() {
        let config = config_with(|c| c.falador_diary = DiaryTier::Medium);
        assert!((PatchLocation::Falador.xp_bonus(&config) - 0.10).abs() < f64::EPSILON);
        assert!((PatchLocation::Ardougne.xp_bonus(&config) - 0.0).abs() < f64::EPSILON);
        let easy = config_with(|c| c.falador_diary = DiaryTier::Easy);
        assert!((PatchLocation::Falador.xp_bonus(&easy) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn description_lists_active_modifiers() {
        let config = config_with(|c| {
            c.hosidius_fifty_favor = true;
            c.kourend_diary = DiaryTier::Hard;
        });
        let description = PatchLocation::Hosidius.description(&config);
        assert!(description.contains("disease-free"));
        assert!(description.contains("+5% yield"));

        let plain = PatchLocation::Ardougne.description(&config);
        assert_eq!(plain, "Ardougne");
    }
}
