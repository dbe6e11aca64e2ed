//! Engine orchestrator: validation, pipeline, result assembly

use super::annuity::{annuitize, cumulative_inflation_pct, deflate, replacement_rate};
use super::capital::{account_capital, initial_capital};
use super::contributions::{contribution_schedule, sick_leave_reduction, ContributionYear};
use super::result::{round2, PensionCalculationResult};
use super::wages::wage_growth_rate;
use super::{MAX_PERSON_AGE, MIN_PERSON_AGE};
use crate::error::EngineError;
use crate::person::PersonData;
use crate::scenario::Fus20Parameters;
use crate::tables::{ReferenceTables, SickLeaveBasis};

/// Configuration for a calculation run
#[derive(Debug, Clone, Copy)]
pub struct CalculationConfig {
    /// Valuation year all relative quantities are measured from
    pub as_of_year: i32,

    /// Which sick-leave statistics the run uses
    pub sick_leave_basis: SickLeaveBasis,
}

impl CalculationConfig {
    /// Config for a valuation year with the standard sick-leave basis.
    pub fn new(as_of_year: i32) -> Self {
        Self {
            as_of_year,
            sick_leave_basis: SickLeaveBasis::Standard,
        }
    }

    /// Same config with a different sick-leave basis.
    pub fn with_sick_leave_basis(mut self, basis: SickLeaveBasis) -> Self {
        self.sick_leave_basis = basis;
        self
    }
}

/// Main calculation engine
///
/// Holds no mutable state; one instance can serve many persons and many
/// threads.
#[derive(Debug, Clone)]
pub struct PensionEngine {
    tables: ReferenceTables,
    scenario: Fus20Parameters,
    config: CalculationConfig,
}

impl PensionEngine {
    /// Create a new engine with given tables, parameters and config
    pub fn new(tables: ReferenceTables, scenario: Fus20Parameters, config: CalculationConfig) -> Self {
        Self {
            tables,
            scenario,
            config,
        }
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn scenario(&self) -> &Fus20Parameters {
        &self.scenario
    }

    pub fn config(&self) -> &CalculationConfig {
        &self.config
    }

    /// Same engine with a different sick-leave basis.
    pub fn with_sick_leave_basis(&self, basis: SickLeaveBasis) -> Self {
        Self {
            tables: self.tables.clone(),
            scenario: self.scenario.clone(),
            config: self.config.with_sick_leave_basis(basis),
        }
    }

    pub(crate) fn validate(&self, person: &PersonData) -> Result<(), EngineError> {
        if !(MIN_PERSON_AGE..=MAX_PERSON_AGE).contains(&person.age) {
            return Err(EngineError::AgeOutOfRange {
                age: person.age,
                min: MIN_PERSON_AGE,
                max: MAX_PERSON_AGE,
            });
        }

        self.scenario.validate()?;

        if person.years_to_retirement(self.config.as_of_year) < 0 {
            return Err(EngineError::RetirementInPast {
                retirement_year: person.retirement_year,
                as_of_year: self.config.as_of_year,
            });
        }

        if person.working_years() <= 0 {
            return Err(EngineError::EmptyWorkingPeriod {
                work_start_year: person.work_start_year,
                retirement_year: person.retirement_year,
            });
        }

        Ok(())
    }

    /// Per-year contribution schedule for a person.
    pub fn contribution_schedule(
        &self,
        person: &PersonData,
    ) -> Result<Vec<ContributionYear>, EngineError> {
        self.validate(person)?;
        let reduction = sick_leave_reduction(
            person,
            &self.tables.sick_leave,
            self.config.sick_leave_basis,
            self.config.as_of_year,
        );
        Ok(contribution_schedule(
            person,
            &self.scenario,
            &self.tables,
            reduction,
            self.config.as_of_year,
        ))
    }

    /// Run the full calculation for one person.
    pub fn calculate(&self, person: &PersonData) -> Result<PensionCalculationResult, EngineError> {
        self.validate(person)?;

        let as_of_year = self.config.as_of_year;
        let years_to_retirement = person.years_to_retirement(as_of_year);

        let reduction = sick_leave_reduction(
            person,
            &self.tables.sick_leave,
            self.config.sick_leave_basis,
            as_of_year,
        );

        let schedule = contribution_schedule(
            person,
            &self.scenario,
            &self.tables,
            reduction,
            as_of_year,
        );
        let contributions_sum = schedule.last().map(|row| row.cumulative).unwrap_or(0.0);

        let opening_capital = initial_capital(person, &self.tables.initial_capital);
        let accounts = account_capital(person, &self.tables.valorization);
        let savings = person.current_savings.unwrap_or(0.0).max(0.0);
        let total_capital = contributions_sum + opening_capital + accounts + savings;

        let retirement_age = person.retirement_age(as_of_year);
        let life_expectancy_months = self
            .tables
            .life_expectancy
            .months_at(retirement_age, person.gender);

        log::trace!(
            "accumulated {:.2} PLN over {} working years, annuitizing over {:.1} months",
            total_capital,
            schedule.len(),
            life_expectancy_months
        );

        let annuity = annuitize(
            total_capital,
            self.scenario.contribution_collection,
            life_expectancy_months,
        )?;

        let growth = wage_growth_rate(person, &self.scenario);
        let indexed_salary =
            person.monthly_salary.max(0.0) * (1.0 + growth / 100.0).powi(years_to_retirement);
        let replacement = replacement_rate(annuity.monthly_pension, indexed_salary);

        let inflation = person
            .inflation_override
            .unwrap_or_else(|| self.scenario.effective_inflation());
        let real_pension = deflate(annuity.monthly_pension, inflation, years_to_retirement);
        let projected_inflation = cumulative_inflation_pct(inflation, years_to_retirement);

        Ok(PensionCalculationResult {
            monthly_pension: round2(annuity.monthly_pension),
            total_contributions: round2(total_capital),
            capital_at_retirement: round2(annuity.valorized_capital),
            replacement_rate: round2(replacement),
            years_to_retirement,
            life_expectancy_years: round2(life_expectancy_months / 12.0),
            projected_inflation_pct: round2(projected_inflation),
            real_pension: round2(real_pension),
            nominal_pension: round2(annuity.monthly_pension),
            initial_capital: round2(opening_capital),
            valorized_contributions: round2(annuity.valorized_capital),
            sick_leave_impact_pct: round2(reduction * 100.0),
        })
    }
}
