//! Sick-leave adjustment and year-by-year contribution accumulation
//!
//! Contributions recorded in years up to [`LAST_VALORIZED_YEAR`] are grossed
//! up by the published annual index for that year (or the person's flat
//! override); later years stay nominal until the authority publishes an
//! index for them.

use serde::{Deserialize, Serialize};

use super::wages::resolve_annual_wage;
use super::{
    CONTRIBUTION_RATE, MAX_SICK_LEAVE_REDUCTION, SICK_PAY_FRACTION, WORKING_DAYS_PER_YEAR,
};
use crate::person::{PersonData, SicknessKind};
use crate::tables::{AgeBand, ReferenceTables, SickLeaveBasis, SickLeaveStats, LAST_VALORIZED_YEAR};
use crate::scenario::Fus20Parameters;

/// One working year of the contribution schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionYear {
    /// Calendar year
    pub year: i32,

    /// Gross annual wage before the sick-leave adjustment
    pub annual_wage: f64,

    /// Wage after the sick-leave reduction
    pub adjusted_wage: f64,

    /// Contribution booked for the year
    pub contribution: f64,

    /// Contribution after historical valorization
    pub valorized_contribution: f64,

    /// Running total of valorized contributions
    pub cumulative: f64,
}

/// Contribution reduction in [0, 0.10] caused by sick leave.
///
/// Explicit sickness periods (past, or dated up to the valuation year) win
/// over the statistical fallback; the statistical path scales the average
/// annual sick days by the pay lost during leave.
pub fn sick_leave_reduction(
    person: &PersonData,
    stats: &SickLeaveStats,
    basis: SickLeaveBasis,
    as_of_year: i32,
) -> f64 {
    if basis == SickLeaveBasis::Disabled || !person.include_sick_leave {
        return 0.0;
    }

    if !person.sickness_periods.is_empty() {
        let days: f64 = person
            .sickness_periods
            .iter()
            .filter(|p| p.kind == SicknessKind::Past || p.year <= as_of_year)
            .map(|p| p.days as f64)
            .sum();

        let working_years = person.working_years();
        if working_years <= 0 {
            return 0.0;
        }

        return (days / (WORKING_DAYS_PER_YEAR * working_years as f64))
            .min(MAX_SICK_LEAVE_REDUCTION);
    }

    let band = AgeBand::for_age(person.age);
    let average_days = stats.average_days(person.gender, band);
    (average_days / WORKING_DAYS_PER_YEAR * (1.0 - SICK_PAY_FRACTION))
        .min(MAX_SICK_LEAVE_REDUCTION)
}

/// Valorization factor for one contribution year.
fn valorization_factor(year: i32, person: &PersonData, tables: &ReferenceTables) -> f64 {
    if year > LAST_VALORIZED_YEAR {
        return 1.0;
    }
    if let Some(rate) = person.valorization_override {
        return 1.0 + rate / 100.0;
    }
    match tables.valorization.annual_rate(year) {
        Some(rate) => 1.0 + rate / 100.0,
        None => {
            log::debug!(
                "no valorization index published for {}, contribution stays nominal",
                year
            );
            1.0
        }
    }
}

/// Build the full per-year contribution schedule for a working period.
pub fn contribution_schedule(
    person: &PersonData,
    scenario: &Fus20Parameters,
    tables: &ReferenceTables,
    reduction: f64,
    as_of_year: i32,
) -> Vec<ContributionYear> {
    let mut rows = Vec::with_capacity(person.working_years().max(0) as usize);
    let mut cumulative = 0.0;

    for year in person.work_start_year..person.retirement_year {
        let annual_wage = resolve_annual_wage(year, person, scenario, as_of_year);
        let adjusted_wage = annual_wage * (1.0 - reduction);
        let contribution = adjusted_wage * CONTRIBUTION_RATE;
        let valorized_contribution = contribution * valorization_factor(year, person, tables);
        cumulative += valorized_contribution;

        rows.push(ContributionYear {
            year,
            annual_wage,
            adjusted_wage,
            contribution,
            valorized_contribution,
            cumulative,
        });
    }

    rows
}
