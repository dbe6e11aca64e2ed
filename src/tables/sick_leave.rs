//! Sick-leave incidence statistics by sex and age band
//!
//! When a person supplies no explicit sickness periods, the accumulator falls
//! back to the published average annual sick-day counts per age band. The
//! with/without comparison selects a [`SickLeaveBasis`] per engine instead of
//! zeroing a shared table, so concurrent calculations never observe each
//! other's state.

use serde::{Deserialize, Serialize};

use crate::person::Gender;

/// Which sick-leave statistics a calculation uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SickLeaveBasis {
    /// Published incidence statistics (or explicit periods when present).
    #[default]
    Standard,
    /// No sick-leave effect at all, for with/without comparisons.
    Disabled,
}

/// Age bands used by the incidence statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    From20To30,
    From31To40,
    From41To50,
    From51To60,
    Over60,
}

impl AgeBand {
    /// Band for an age in years. Ages below the first band map into it.
    pub fn for_age(age: u8) -> Self {
        match age {
            0..=30 => AgeBand::From20To30,
            31..=40 => AgeBand::From31To40,
            41..=50 => AgeBand::From41To50,
            51..=60 => AgeBand::From51To60,
            _ => AgeBand::Over60,
        }
    }

    fn index(self) -> usize {
        match self {
            AgeBand::From20To30 => 0,
            AgeBand::From31To40 => 1,
            AgeBand::From41To50 => 2,
            AgeBand::From51To60 => 3,
            AgeBand::Over60 => 4,
        }
    }
}

/// Average annual sick days by sex and age band.
#[derive(Debug, Clone)]
pub struct SickLeaveStats {
    /// One (female_days, male_days) pair per age band, in band order.
    days: [(f64, f64); 5],
}

impl SickLeaveStats {
    /// Published incidence statistics.
    pub fn default_published() -> Self {
        Self {
            days: [
                (11.2, 7.8),
                (14.8, 9.5),
                (13.9, 12.1),
                (18.6, 16.4),
                (21.3, 19.2),
            ],
        }
    }

    /// Create from loaded CSV data, one row per band in band order.
    pub fn from_loaded(days: &[(f64, f64)]) -> Self {
        let mut table = [(0.0, 0.0); 5];
        for (slot, row) in table.iter_mut().zip(days.iter()) {
            *slot = *row;
        }
        Self { days: table }
    }

    /// Average annual sick days for a sex and age band.
    pub fn average_days(&self, gender: Gender, band: AgeBand) -> f64 {
        let (female, male) = self.days[band.index()];
        match gender {
            Gender::Female => female,
            Gender::Male => male,
        }
    }
}

impl Default for SickLeaveStats {
    fn default() -> Self {
        Self::default_published()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_age_band_boundaries() {
        assert_eq!(AgeBand::for_age(18), AgeBand::From20To30);
        assert_eq!(AgeBand::for_age(30), AgeBand::From20To30);
        assert_eq!(AgeBand::for_age(31), AgeBand::From31To40);
        assert_eq!(AgeBand::for_age(50), AgeBand::From41To50);
        assert_eq!(AgeBand::for_age(60), AgeBand::From51To60);
        assert_eq!(AgeBand::for_age(61), AgeBand::Over60);
    }

    #[test]
    fn test_average_days_lookup() {
        let stats = SickLeaveStats::default_published();

        assert_relative_eq!(stats.average_days(Gender::Male, AgeBand::From20To30), 7.8);
        assert_relative_eq!(stats.average_days(Gender::Female, AgeBand::Over60), 21.3);
    }

    #[test]
    fn test_from_loaded_partial_rows() {
        let stats = SickLeaveStats::from_loaded(&[(10.0, 8.0)]);

        assert_relative_eq!(stats.average_days(Gender::Female, AgeBand::From20To30), 10.0);
        assert_relative_eq!(stats.average_days(Gender::Male, AgeBand::Over60), 0.0);
    }
}
