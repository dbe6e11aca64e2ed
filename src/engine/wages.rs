//! Annual wage resolution for one calendar year
//!
//! A supplied historical salary always wins for its year. Otherwise the wage
//! is the current annual base, compounded by the wage-growth rate for years
//! after the valuation year and left flat for the valuation year and earlier.

use crate::person::PersonData;
use crate::scenario::Fus20Parameters;

/// Wage growth in percent for a person under a scenario.
pub(crate) fn wage_growth_rate(person: &PersonData, scenario: &Fus20Parameters) -> f64 {
    person.salary_growth_override.unwrap_or(scenario.wage_growth)
}

/// Gross annual wage for one calendar year.
pub fn resolve_annual_wage(
    year: i32,
    person: &PersonData,
    scenario: &Fus20Parameters,
    as_of_year: i32,
) -> f64 {
    if let Some(amount) = person.historical_salary(year) {
        return amount;
    }

    let base = person.annual_base_salary();
    if year > as_of_year {
        let growth = wage_growth_rate(person, scenario) / 100.0;
        base * (1.0 + growth).powi(year - as_of_year)
    } else {
        base
    }
}
