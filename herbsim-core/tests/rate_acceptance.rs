//! Statistical acceptance checks: observed aggregate rates must track the
//! closed-form expectations within sampling tolerance.

use herbsim_core::{
    AnimaPlant, Compost, DiaryTier, Herb, PatchLocation, SimConfig, TrialRunner, chance_to_save,
};

const SAMPLE_SIZE: u32 = 5000;
const RATE_TOLERANCE: f64 = 0.03;
const YIELD_TOLERANCE: f64 = 0.08;

fn base_config() -> SimConfig {
    SimConfig {
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
        patches: vec![PatchLocation::Ardougne],
    }
}

#[test]
fn survival_rate_tracks_the_three_cycle_disease_window() {
    // Disease contracted on the final cycle no longer kills, so survival is
    // (1 - d)^3. With no compost d = 27/128.
    let config = base_config();
    let d: f64 = 27.0 / 128.0;
    let expected = (1.0 - d).powi(3);

    let runner = TrialRunner::new(Herb::Guam, PatchLocation::Ardougne, SAMPLE_SIZE, 4242);
    let result = runner.run(&config).unwrap();
    let observed = result.survival_rate().unwrap();
    assert!(
        (observed - expected).abs() <= RATE_TOLERANCE,
        "survival rate drifted: observed {observed:.4}, expected {expected:.4}"
    );
}

#[test]
fn ultracompost_survival_tracks_the_smaller_numerator() {
    let mut config = base_config();
    config.compost = Compost::Ultracompost;
    let d: f64 = 3.0 / 128.0;
    let expected = (1.0 - d).powi(3);

    let runner = TrialRunner::new(Herb::Ranarr, PatchLocation::Catherby, SAMPLE_SIZE, 99);
    let result = runner.run(&config).unwrap();
    let observed = result.survival_rate().unwrap();
    assert!(
        (observed - expected).abs() <= RATE_TOLERANCE,
        "survival rate drifted: observed {observed:.4}, expected {expected:.4}"
    );
}

#[test]
fn mean_yield_matches_the_negative_binomial_expectation() {
    // Each pick keeps its life with probability c, so a surviving plant
    // yields lives / (1 - c) herbs in expectation. Use a disease-free patch
    // to keep every trial in the harvest loop.
    let config = base_config();
    let c = chance_to_save(&config, PatchLocation::Weiss, Herb::Guam);
    let lives = f64::from(config.compost.initial_lives());
    let expected = lives / (1.0 - c);

    let runner = TrialRunner::new(Herb::Guam, PatchLocation::Weiss, SAMPLE_SIZE, 7);
    let result = runner.run(&config).unwrap();
    let observed = result.mean_herbs().unwrap();
    assert!(
        (observed - expected).abs() <= YIELD_TOLERANCE,
        "mean yield drifted: observed {observed:.4}, expected {expected:.4}"
    );
}

#[test]
fn mean_xp_matches_yield_times_award_table() {
    let mut config = base_config();
    config.compost = Compost::Supercompost;
    let runner = TrialRunner::new(Herb::Guam, PatchLocation::Weiss, SAMPLE_SIZE, 21);
    let result = runner.run(&config).unwrap();

    // Every trial survives on a disease-free patch, so per-trial XP is
    // compost + plant + harvest * herbs; means must agree exactly.
    let expected = Compost::Supercompost.xp()
        + Herb::Guam.plant_xp()
        + Herb::Guam.harvest_xp() * result.mean_herbs().unwrap();
    let observed = result.mean_xp().unwrap();
    assert!(
        (observed - expected).abs() < 1e-6,
        "mean XP drifted: observed {observed:.4}, expected {expected:.4}"
    );
}

#[test]
fn resurrection_lifts_survival_on_disease_prone_patches() {
    let mut config = base_config();
    let runner = TrialRunner::new(Herb::Guam, PatchLocation::Ardougne, SAMPLE_SIZE, 1234);
    let without = runner.run(&config).unwrap();

    config.resurrect_crops = true;
    config.magic_level = 99;
    let with = runner.run(&config).unwrap();

    assert!(with.survival_rate().unwrap() > without.survival_rate().unwrap());
    assert!(with.resurrection_rate().unwrap() > 0.0);
    assert!((without.resurrection_rate().unwrap() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn falador_xp_bonus_scales_mean_xp_by_ten_percent() {
    let mut config = base_config();
    config.hosidius_fifty_favor = false;
    let runner = TrialRunner::new(Herb::Guam, PatchLocation::Falador, SAMPLE_SIZE, 55);
    let plain = runner.run(&config).unwrap();

    config.falador_diary = DiaryTier::Medium;
    let boosted = runner.run(&config).unwrap();

    // Identical seeds walk identical trial paths; only the multiplier moves.
    let ratio = boosted.mean_xp().unwrap() / plain.mean_xp().unwrap();
    assert!(
        (ratio - 1.10).abs() < 1e-9,
        "XP bonus ratio drifted: {ratio:.6}"
    );
}
