//! Annuitization of accumulated capital into a monthly pension

use crate::error::EngineError;

/// Capital after collection and the monthly pension it funds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnuitizedPension {
    /// Capital scaled by the contribution-collection rate
    pub valorized_capital: f64,

    /// Nominal monthly pension
    pub monthly_pension: f64,
}

/// Convert accumulated capital into a monthly pension.
///
/// The collection rate is a percentage of due contributions actually
/// collected; the capital is scaled by it before division by the further
/// life expectancy in months.
pub fn annuitize(
    total_capital: f64,
    collection_rate: f64,
    life_expectancy_months: f64,
) -> Result<AnnuitizedPension, EngineError> {
    if life_expectancy_months <= 0.0 {
        return Err(EngineError::NonPositiveLifeExpectancy {
            months: life_expectancy_months,
        });
    }

    let valorized_capital = (total_capital * collection_rate / 100.0).max(0.0);
    let monthly_pension = (valorized_capital / life_expectancy_months).max(0.0);

    Ok(AnnuitizedPension {
        valorized_capital,
        monthly_pension,
    })
}

/// Pension as a percentage of the indexed final salary.
pub fn replacement_rate(monthly_pension: f64, indexed_monthly_salary: f64) -> f64 {
    if indexed_monthly_salary <= 0.0 {
        return 0.0;
    }
    monthly_pension / indexed_monthly_salary * 100.0
}

/// Deflate a nominal amount over a number of years of inflation.
pub fn deflate(nominal: f64, inflation_pct: f64, years: i32) -> f64 {
    nominal / (1.0 + inflation_pct / 100.0).powi(years)
}

/// Cumulative price growth in percent over a number of years.
pub fn cumulative_inflation_pct(inflation_pct: f64, years: i32) -> f64 {
    ((1.0 + inflation_pct / 100.0).powi(years) - 1.0) * 100.0
}
