//! Initial-capital multipliers for pre-1999 contribution service
//!
//! Service completed before the 1999 reform is converted into an opening
//! capital amount: an estimated 1998 salary base multiplied by a sex-specific
//! factor that grows with the number of pre-reform contribution years (1-20).

use crate::person::Gender;

/// Longest pre-reform contribution period the table covers.
pub const MAX_CONTRIBUTION_PERIOD_YEARS: u8 = 20;

/// Initial-capital multipliers by sex and pre-1999 contribution years.
#[derive(Debug, Clone)]
pub struct InitialCapitalTable {
    /// Rows of (contribution_years, female_multiplier, male_multiplier).
    multipliers: Vec<(u8, f64, f64)>,
}

impl InitialCapitalTable {
    /// Published multiplier table.
    pub fn default_published() -> Self {
        Self {
            multipliers: vec![
                (1, 0.52, 0.48),
                (2, 0.98, 0.92),
                (3, 1.42, 1.34),
                (4, 1.85, 1.75),
                (5, 2.27, 2.15),
                (6, 2.69, 2.55),
                (7, 3.12, 2.96),
                (8, 3.56, 3.38),
                (9, 4.01, 3.81),
                (10, 4.48, 4.26),
                (11, 4.97, 4.72),
                (12, 5.47, 5.20),
                (13, 5.99, 5.70),
                (14, 6.53, 6.21),
                (15, 7.09, 6.75),
                (16, 7.67, 7.30),
                (17, 8.27, 7.88),
                (18, 8.89, 8.47),
                (19, 9.53, 9.09),
                (20, 10.19, 9.72),
            ],
        }
    }

    /// Create from loaded CSV data.
    pub fn from_loaded(multipliers: &[(u8, f64, f64)]) -> Self {
        Self {
            multipliers: multipliers.to_vec(),
        }
    }

    /// Multiplier for a given sex and number of pre-1999 contribution years.
    ///
    /// Zero years yields a zero multiplier; counts beyond the table clamp to
    /// the last row.
    pub fn multiplier(&self, contribution_years: u8, gender: Gender) -> f64 {
        if contribution_years == 0 {
            return 0.0;
        }
        let years = contribution_years.min(MAX_CONTRIBUTION_PERIOD_YEARS);

        let pick = |female: f64, male: f64| match gender {
            Gender::Female => female,
            Gender::Male => male,
        };

        for (y, female, male) in &self.multipliers {
            if *y == years {
                return pick(*female, *male);
            }
        }

        // Sparse custom tables fall back to the last row
        self.multipliers
            .last()
            .map(|(_, female, male)| pick(*female, *male))
            .unwrap_or(0.0)
    }
}

impl Default for InitialCapitalTable {
    fn default() -> Self {
        Self::default_published()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_multiplier_lookup() {
        let table = InitialCapitalTable::default_published();

        assert_relative_eq!(table.multiplier(1, Gender::Female), 0.52);
        assert_relative_eq!(table.multiplier(1, Gender::Male), 0.48);
        assert_relative_eq!(table.multiplier(20, Gender::Female), 10.19);
        assert_relative_eq!(table.multiplier(20, Gender::Male), 9.72);
    }

    #[test]
    fn test_zero_years_has_no_capital() {
        let table = InitialCapitalTable::default_published();
        assert_relative_eq!(table.multiplier(0, Gender::Male), 0.0);
    }

    #[test]
    fn test_excess_years_clamp_to_table_edge() {
        let table = InitialCapitalTable::default_published();
        assert_relative_eq!(
            table.multiplier(35, Gender::Female),
            table.multiplier(20, Gender::Female)
        );
    }

    #[test]
    fn test_multipliers_grow_with_service() {
        let table = InitialCapitalTable::default_published();
        for years in 1..20u8 {
            assert!(
                table.multiplier(years + 1, Gender::Male) > table.multiplier(years, Gender::Male)
            );
        }
    }

    #[test]
    fn test_empty_table() {
        let table = InitialCapitalTable::from_loaded(&[]);
        assert_relative_eq!(table.multiplier(10, Gender::Male), 0.0);
    }
}
