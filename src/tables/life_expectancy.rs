//! Further-life-expectancy table used for annuitization
//!
//! Stores the published unisex-by-sex average further life expectancy in
//! months at exact retirement ages 60-67. Lookups clamp the requested age to
//! that range and interpolate linearly for fractional ages; when both
//! neighbouring entries are missing the table answers with the 192-month
//! fallback.

use crate::person::Gender;

/// Fallback life expectancy when no table entry covers the requested age.
pub const DEFAULT_LIFE_EXPECTANCY_MONTHS: f64 = 192.0;

/// Youngest retirement age covered by the table.
pub const MIN_RETIREMENT_AGE: u8 = 60;

/// Oldest retirement age covered by the table.
pub const MAX_RETIREMENT_AGE: u8 = 67;

/// Life expectancy in months by sex and exact retirement age.
#[derive(Debug, Clone)]
pub struct LifeExpectancyTable {
    /// Rows of (age, female_months, male_months).
    months: Vec<(u8, f64, f64)>,
}

impl LifeExpectancyTable {
    /// Published further-life-expectancy table.
    pub fn default_published() -> Self {
        Self {
            months: vec![
                (60, 264.2, 221.5),
                (61, 255.5, 213.0),
                (62, 246.7, 204.7),
                (63, 238.0, 196.5),
                (64, 229.3, 188.4),
                (65, 220.7, 180.5),
                (66, 212.2, 172.7),
                (67, 203.8, 165.1),
            ],
        }
    }

    /// Create from loaded CSV data.
    pub fn from_loaded(months: &[(u8, f64, f64)]) -> Self {
        Self {
            months: months.to_vec(),
        }
    }

    /// Exact-age entry for one sex, if present.
    fn entry(&self, age: u8, gender: Gender) -> Option<f64> {
        self.months
            .iter()
            .find(|(a, _, _)| *a == age)
            .map(|(_, female, male)| match gender {
                Gender::Female => *female,
                Gender::Male => *male,
            })
    }

    /// Life expectancy in months at a (possibly fractional) retirement age.
    ///
    /// The age is clamped to [60, 67]. Fractional ages interpolate linearly
    /// between the floor and ceiling entries; a single missing neighbour
    /// degrades to the one that is present, and when both are absent the
    /// 192-month fallback applies.
    pub fn months_at(&self, age_years: f64, gender: Gender) -> f64 {
        let clamped = age_years
            .max(MIN_RETIREMENT_AGE as f64)
            .min(MAX_RETIREMENT_AGE as f64);

        let lo = clamped.floor() as u8;
        let hi = clamped.ceil() as u8;
        let frac = clamped - lo as f64;

        match (self.entry(lo, gender), self.entry(hi, gender)) {
            (Some(lo_months), Some(hi_months)) => {
                if lo == hi {
                    lo_months
                } else {
                    lo_months + (hi_months - lo_months) * frac
                }
            }
            (Some(lo_months), None) => lo_months,
            (None, Some(hi_months)) => hi_months,
            (None, None) => {
                log::debug!(
                    "no life expectancy entry around age {:.1}, using {} month fallback",
                    clamped,
                    DEFAULT_LIFE_EXPECTANCY_MONTHS
                );
                DEFAULT_LIFE_EXPECTANCY_MONTHS
            }
        }
    }
}

impl Default for LifeExpectancyTable {
    fn default() -> Self {
        Self::default_published()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_age_lookup() {
        let table = LifeExpectancyTable::default_published();

        assert_relative_eq!(table.months_at(60.0, Gender::Female), 264.2);
        assert_relative_eq!(table.months_at(67.0, Gender::Male), 165.1);
    }

    #[test]
    fn test_fractional_age_interpolates() {
        let table = LifeExpectancyTable::default_published();

        // Halfway between the 63 and 64 male entries
        let expected = 196.5 + (188.4 - 196.5) * 0.5;
        assert_relative_eq!(table.months_at(63.5, Gender::Male), expected);

        let expected_f = 238.0 + (229.3 - 238.0) * 0.5;
        assert_relative_eq!(table.months_at(63.5, Gender::Female), expected_f);
    }

    #[test]
    fn test_age_clamping() {
        let table = LifeExpectancyTable::default_published();

        // Below and above the covered range clamp to the edges
        assert_relative_eq!(
            table.months_at(45.0, Gender::Male),
            table.months_at(60.0, Gender::Male)
        );
        assert_relative_eq!(
            table.months_at(80.0, Gender::Female),
            table.months_at(67.0, Gender::Female)
        );
    }

    #[test]
    fn test_sparse_table_falls_back() {
        // Table missing everything between 60 and 67
        let table = LifeExpectancyTable::from_loaded(&[(60, 264.2, 221.5)]);

        assert_relative_eq!(table.months_at(60.0, Gender::Male), 221.5);
        assert_relative_eq!(table.months_at(64.5, Gender::Male), DEFAULT_LIFE_EXPECTANCY_MONTHS);
    }

    #[test]
    fn test_empty_table_uses_default() {
        let table = LifeExpectancyTable::from_loaded(&[]);
        assert_relative_eq!(table.months_at(65.0, Gender::Female), DEFAULT_LIFE_EXPECTANCY_MONTHS);
    }

    #[test]
    fn test_months_decrease_with_age() {
        let table = LifeExpectancyTable::default_published();

        for gender in [Gender::Female, Gender::Male] {
            for age in 60..67u8 {
                assert!(
                    table.months_at(age as f64 + 1.0, gender) < table.months_at(age as f64, gender),
                    "life expectancy should shrink with age"
                );
            }
        }
    }
}
