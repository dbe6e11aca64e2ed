//! Pension projection engine: wage resolution, contribution accumulation,
//! capital composition and annuitization

mod wages;
mod contributions;
mod capital;
mod annuity;
mod calculator;
mod result;

pub use wages::resolve_annual_wage;
pub use contributions::{contribution_schedule, sick_leave_reduction, ContributionYear};
pub use capital::{account_capital, initial_capital};
pub use annuity::{annuitize, cumulative_inflation_pct, deflate, replacement_rate, AnnuitizedPension};
pub use calculator::{CalculationConfig, PensionEngine};
pub use result::PensionCalculationResult;

/// Pension contribution rate on gross wages.
pub const CONTRIBUTION_RATE: f64 = 0.1952;

/// Share of gross wages booked to the main pension account.
pub const MAIN_ACCOUNT_SHARE: f64 = 0.1222;

/// Share of gross wages booked to the sub-account.
pub const SUB_ACCOUNT_SHARE: f64 = 0.0730;

/// Working days per calendar year assumed by the sick-leave model.
pub const WORKING_DAYS_PER_YEAR: f64 = 250.0;

/// Fraction of the wage paid during sick leave.
pub const SICK_PAY_FRACTION: f64 = 0.80;

/// Hard cap on the sick-leave contribution reduction.
pub const MAX_SICK_LEAVE_REDUCTION: f64 = 0.10;

/// Wage growth in percent used when neither the person nor the scenario
/// carries a rate.
pub const DEFAULT_WAGE_GROWTH: f64 = 3.5;

/// Share of the average annual salary forming the initial-capital base.
pub const INITIAL_CAPITAL_SALARY_SHARE: f64 = 0.3;

/// Floor of the initial-capital base in PLN.
pub const MIN_INITIAL_CAPITAL_BASE: f64 = 1000.0;

/// Youngest supported input age.
pub const MIN_PERSON_AGE: u8 = 18;

/// Oldest supported input age.
pub const MAX_PERSON_AGE: u8 = 100;
