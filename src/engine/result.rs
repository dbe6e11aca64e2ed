//! Calculation result surface

use serde::{Deserialize, Serialize};

/// Complete output of one pension calculation.
///
/// Monetary and percentage fields are rounded to two decimals here and
/// nowhere else; intermediate arithmetic keeps full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PensionCalculationResult {
    /// Nominal monthly pension in PLN
    pub monthly_pension: f64,

    /// Accumulated capital before collection: valorized contributions plus
    /// initial capital, account balances and savings
    pub total_contributions: f64,

    /// Capital at retirement after the collection rate
    pub capital_at_retirement: f64,

    /// Pension as a percentage of the indexed final salary
    pub replacement_rate: f64,

    /// Years between the valuation year and retirement
    pub years_to_retirement: i32,

    /// Further life expectancy at retirement, in years
    pub life_expectancy_years: f64,

    /// Cumulative price growth over the horizon, in percent
    pub projected_inflation_pct: f64,

    /// Pension in valuation-year purchasing power
    pub real_pension: f64,

    /// Nominal pension, duplicated for the reporting surface
    pub nominal_pension: f64,

    /// Opening capital from pre-reform service
    pub initial_capital: f64,

    /// Capital after collection, equal to `capital_at_retirement`
    pub valorized_contributions: f64,

    /// Applied sick-leave contribution reduction, in percent
    pub sick_leave_impact_pct: f64,
}

/// Round to two decimals at the result boundary.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
