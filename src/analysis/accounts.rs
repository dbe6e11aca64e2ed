//! Year-by-year main-account and sub-account balance projection
//!
//! Deliberately a separate accumulation model from the contribution
//! schedule: balances compound at the macroeconomic growth rates while each
//! working year books the statutory account shares of the wage.

use serde::{Deserialize, Serialize};

use crate::engine::{resolve_annual_wage, PensionEngine, MAIN_ACCOUNT_SHARE, SUB_ACCOUNT_SHARE};
use crate::error::EngineError;
use crate::person::PersonData;

/// One projected year of account balances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountYearRow {
    /// Calendar year
    pub year: i32,

    /// Person's age in that year
    pub age: u8,

    /// Main pension account balance at year end
    pub account_balance: f64,

    /// Sub-account balance at year end
    pub subaccount_balance: f64,

    /// Main plus sub balance
    pub total_balance: f64,

    /// Account contributions booked during the year
    pub annual_contribution: f64,
}

/// Project main-account and sub-account balances to retirement.
///
/// Rows cover the valuation year up to the retirement year (capped by the
/// person's forecast horizon); the retirement-year row books no
/// contribution. Prior balances compound by the wage-growth rate, the
/// sub-account by real GDP growth when the scenario carries it.
pub fn project_account_balances(
    engine: &PensionEngine,
    person: &PersonData,
) -> Result<Vec<AccountYearRow>, EngineError> {
    engine.validate(person)?;

    let as_of_year = engine.config().as_of_year;
    let scenario = engine.scenario();

    let growth = person
        .salary_growth_override
        .unwrap_or(scenario.wage_growth)
        / 100.0;
    let sub_growth = scenario.real_gdp_growth.map(|g| g / 100.0).unwrap_or(growth);

    let mut end_year = person.retirement_year;
    if let Some(horizon) = person.forecast_horizon_years {
        end_year = end_year.min(as_of_year + horizon as i32);
    }

    let mut main = person.main_account.unwrap_or(0.0).max(0.0);
    let mut sub = person.sub_account.unwrap_or(0.0).max(0.0);
    let mut rows = Vec::with_capacity((end_year - as_of_year + 1).max(0) as usize);

    for year in as_of_year..=end_year {
        if year > as_of_year {
            main *= 1.0 + growth;
            sub *= 1.0 + sub_growth;
        }

        let annual_contribution = if year < person.retirement_year {
            let wage = resolve_annual_wage(year, person, scenario, as_of_year);
            let main_add = wage * MAIN_ACCOUNT_SHARE;
            let sub_add = wage * SUB_ACCOUNT_SHARE;
            main += main_add;
            sub += sub_add;
            main_add + sub_add
        } else {
            0.0
        };

        rows.push(AccountYearRow {
            year,
            age: (person.age as i32 + (year - as_of_year)).min(u8::MAX as i32) as u8,
            account_balance: main,
            subaccount_balance: sub,
            total_balance: main + sub,
            annual_contribution,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CalculationConfig;
    use crate::person::Gender;
    use crate::scenario::Fus20Parameters;
    use crate::tables::ReferenceTables;
    use approx::assert_relative_eq;

    fn engine_with(scenario: Fus20Parameters) -> PensionEngine {
        PensionEngine::new(
            ReferenceTables::default_published(),
            scenario,
            CalculationConfig::new(2026),
        )
    }

    fn engine() -> PensionEngine {
        engine_with(Fus20Parameters::intermediate())
    }

    fn person() -> PersonData {
        PersonData::new(30, Gender::Female, 6000.0, 2016, 2056)
    }

    #[test]
    fn test_rows_span_valuation_to_retirement() {
        let rows = project_account_balances(&engine(), &person()).unwrap();

        assert_eq!(rows.len(), 31);
        assert_eq!(rows.first().unwrap().year, 2026);
        assert_eq!(rows.first().unwrap().age, 30);
        assert_eq!(rows.last().unwrap().year, 2056);
        assert_eq!(rows.last().unwrap().age, 60);
        assert_relative_eq!(rows.last().unwrap().annual_contribution, 0.0);
    }

    #[test]
    fn test_first_year_books_the_statutory_shares() {
        let rows = project_account_balances(&engine(), &person()).unwrap();

        let wage = 6000.0 * 12.0;
        assert_relative_eq!(rows[0].account_balance, wage * 0.1222, max_relative = 1e-12);
        assert_relative_eq!(rows[0].subaccount_balance, wage * 0.0730, max_relative = 1e-12);
        assert_relative_eq!(
            rows[0].annual_contribution,
            wage * (0.1222 + 0.0730),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_balances_grow_year_over_year() {
        let rows = project_account_balances(&engine(), &person()).unwrap();

        for pair in rows.windows(2) {
            assert!(pair[1].total_balance > pair[0].total_balance);
        }
    }

    #[test]
    fn test_horizon_caps_the_projection() {
        let mut person = person();
        person.forecast_horizon_years = Some(10);

        let rows = project_account_balances(&engine(), &person).unwrap();

        assert_eq!(rows.len(), 11);
        assert_eq!(rows.last().unwrap().year, 2036);
        // Still inside the working period, so the last row contributes
        assert!(rows.last().unwrap().annual_contribution > 0.0);
    }

    #[test]
    fn test_existing_balances_compound() {
        let mut person = person();
        person.main_account = Some(100_000.0);

        let rows = project_account_balances(&engine(), &person).unwrap();

        let wage = 6000.0 * 12.0;
        assert_relative_eq!(
            rows[0].account_balance,
            100_000.0 + wage * 0.1222,
            max_relative = 1e-12
        );
        let expected_second = rows[0].account_balance * 1.035
            + resolve_annual_wage(2027, &person, engine().scenario(), 2026) * 0.1222;
        assert_relative_eq!(rows[1].account_balance, expected_second, max_relative = 1e-12);
    }

    #[test]
    fn test_sub_account_uses_gdp_growth_when_set() {
        let mut scenario = Fus20Parameters::intermediate();
        scenario.real_gdp_growth = Some(0.0);

        let mut person = person();
        person.sub_account = Some(10_000.0);
        person.monthly_salary = 0.0;

        let rows = project_account_balances(&engine_with(scenario), &person).unwrap();

        // Zero GDP growth and zero wage keep the sub-account flat
        assert_relative_eq!(rows[0].subaccount_balance, 10_000.0);
        assert_relative_eq!(rows[5].subaccount_balance, 10_000.0);
    }
}
