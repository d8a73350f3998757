//! Stderr progress ticker for long batches.
//!
//! Display-only: the meter is driven from the trial runner's progress
//! callback and never feeds anything back into the simulation.

use std::io::{Write, stderr};

/// Counts completed trials and repaints a single stderr line whenever the
/// percentage moves.
pub struct ProgressMeter {
    total: u64,
    done: u64,
    last_percent: u64,
    quiet: bool,
}

impl ProgressMeter {
    #[must_use]
    pub const fn new(total: u64, quiet: bool) -> Self {
        Self {
            total,
            done: 0,
            last_percent: u64::MAX,
            quiet,
        }
    }

    /// Record one completed trial.
    pub fn tick(&mut self) {
        self.done += 1;
        if self.quiet || self.total == 0 {
            return;
        }
        let percent = self.done * 100 / self.total;
        if percent != self.last_percent {
            self.last_percent = percent;
            eprint!("\r{percent:>3}% of {} trials", self.total);
            let _ = stderr().flush();
        }
    }

    /// Clear the progress line once the batch completes.
    pub fn finish(&self) {
        if !self.quiet && self.total > 0 {
            eprint!("\r{:width$}\r", "", width = 24);
            let _ = stderr().flush();
        }
    }

    /// Trials recorded so far.
    #[must_use]
    pub const fn done(&self) -> u64 {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_meter_still_counts() {
        let mut meter = ProgressMeter::new(10, true);
        for _ in 0..10 {
            meter.tick();
        }
        assert_eq!(meter.done(), 10);
        meter.finish();
    }

    #[test]
    fn zero_total_never_divides() {
        let mut meter = ProgressMeter::new(0, false);
        meter.tick();
        assert_eq!(meter.done(), 1);
    }
}
