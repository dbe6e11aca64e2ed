//! Capital composition: pre-reform initial capital and account balances

use super::{INITIAL_CAPITAL_SALARY_SHARE, MIN_INITIAL_CAPITAL_BASE};
use crate::person::PersonData;
use crate::tables::{InitialCapitalTable, ValorizationTable};

/// Average annual salary used as the initial-capital base.
///
/// Known historical salaries win; without any, the current annual base
/// stands in.
fn average_annual_salary(person: &PersonData) -> f64 {
    let amounts: Vec<f64> = person
        .historical_salaries
        .iter()
        .filter(|entry| entry.amount > 0.0)
        .map(|entry| entry.amount)
        .collect();

    if amounts.is_empty() {
        person.annual_base_salary()
    } else {
        amounts.iter().sum::<f64>() / amounts.len() as f64
    }
}

/// Opening capital for contribution service completed before the 1999 reform.
pub fn initial_capital(person: &PersonData, table: &InitialCapitalTable) -> f64 {
    let years = match person.contribution_period_years {
        Some(years) if years > 0 => years,
        _ => return 0.0,
    };

    let base = (average_annual_salary(person) * INITIAL_CAPITAL_SALARY_SHARE)
        .max(MIN_INITIAL_CAPITAL_BASE);
    base * table.multiplier(years, person.gender)
}

/// Combined main-account and sub-account balance carried into the projection.
///
/// The valorization-inclusion flags gross the main balance up by the latest
/// annual index and the sub balance by the average of the four most recent
/// quarterly indices.
pub fn account_capital(person: &PersonData, valorization: &ValorizationTable) -> f64 {
    let mut main = person.main_account.unwrap_or(0.0).max(0.0);
    if person.valorize_main_account {
        if let Some(rate) = valorization.latest_annual_rate() {
            main *= 1.0 + rate / 100.0;
        }
    }

    let mut sub = person.sub_account.unwrap_or(0.0).max(0.0);
    if person.valorize_sub_account {
        if let Some(rate) = valorization.recent_quarterly_average(4) {
            sub *= 1.0 + rate / 100.0;
        }
    }

    main + sub
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::{Gender, HistoricalSalary};
    use approx::assert_relative_eq;

    #[test]
    fn test_no_pre_reform_service_means_no_capital() {
        let person = PersonData::new(30, Gender::Male, 6000.0, 2016, 2056);
        let table = InitialCapitalTable::default_published();

        assert_relative_eq!(initial_capital(&person, &table), 0.0);

        let mut zero_years = person;
        zero_years.contribution_period_years = Some(0);
        assert_relative_eq!(initial_capital(&zero_years, &table), 0.0);
    }

    #[test]
    fn test_capital_from_current_salary() {
        let mut person = PersonData::new(50, Gender::Female, 6000.0, 1994, 2041);
        person.contribution_period_years = Some(5);
        let table = InitialCapitalTable::default_published();

        // 72000 annual, base 21600, female multiplier for 5 years
        assert_relative_eq!(
            initial_capital(&person, &table),
            72_000.0 * 0.3 * 2.27,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_capital_base_floor() {
        let mut person = PersonData::new(55, Gender::Male, 100.0, 1990, 2037);
        person.contribution_period_years = Some(10);
        let table = InitialCapitalTable::default_published();

        // 1200 annual * 0.3 = 360, floored to 1000
        assert_relative_eq!(
            initial_capital(&person, &table),
            1000.0 * 4.26,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_capital_uses_historical_average() {
        let mut person = PersonData::new(55, Gender::Male, 6000.0, 1990, 2037);
        person.contribution_period_years = Some(1);
        person.historical_salaries = vec![
            HistoricalSalary { year: 1997, amount: 20_000.0 },
            HistoricalSalary { year: 1998, amount: 40_000.0 },
        ];
        let table = InitialCapitalTable::default_published();

        assert_relative_eq!(
            initial_capital(&person, &table),
            30_000.0 * 0.3 * 0.48,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_account_balances_sum() {
        let mut person = PersonData::new(40, Gender::Male, 6000.0, 2005, 2052);
        person.main_account = Some(100_000.0);
        person.sub_account = Some(30_000.0);

        let valorization = ValorizationTable::default_published();
        assert_relative_eq!(account_capital(&person, &valorization), 130_000.0);
    }

    #[test]
    fn test_negative_balances_floor_to_zero() {
        let mut person = PersonData::new(40, Gender::Male, 6000.0, 2005, 2052);
        person.main_account = Some(-5_000.0);

        let valorization = ValorizationTable::default_published();
        assert_relative_eq!(account_capital(&person, &valorization), 0.0);
    }

    #[test]
    fn test_valorization_flags_gross_up() {
        let mut person = PersonData::new(40, Gender::Male, 6000.0, 2005, 2052);
        person.main_account = Some(100_000.0);
        person.sub_account = Some(30_000.0);
        person.valorize_main_account = true;
        person.valorize_sub_account = true;

        let valorization = ValorizationTable::default_published();
        let expected_main = 100_000.0 * 1.097;
        let expected_sub = 30_000.0 * (1.0 + (2.95 + 2.50 + 2.10 + 2.35) / 4.0 / 100.0);

        assert_relative_eq!(
            account_capital(&person, &valorization),
            expected_main + expected_sub,
            max_relative = 1e-12
        );
    }
}
