//! Gap between the expected and the projected pension

use serde::{Deserialize, Serialize};

use crate::engine::PensionEngine;
use crate::error::EngineError;
use crate::person::PersonData;

/// How far the projected pension falls short of the person's expectation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectationGapAnalysis {
    /// Monthly pension the person hopes for
    pub expected_pension: f64,

    /// Monthly pension the projection yields
    pub predicted_pension: f64,

    /// Shortfall per month; negative when the projection already exceeds the
    /// expectation
    pub gap: f64,

    /// Estimated extra working years needed to close the gap. `None` when the
    /// final working year contributes nothing to estimate from.
    pub additional_years_needed: Option<u32>,
}

/// Estimate how many extra working years would close a pension gap.
///
/// The estimate is a first-order approximation: it assumes every extra year
/// contributes like the final working year and ignores the valorization and
/// life-expectancy shifts a real postponement would bring. Use
/// [`retirement_delay`](crate::analysis::retirement_delay) for the exact
/// effect of a concrete delay.
pub fn expectation_gap(
    engine: &PensionEngine,
    person: &PersonData,
    expected_pension: f64,
) -> Result<ExpectationGapAnalysis, EngineError> {
    let result = engine.calculate(person)?;
    let gap = expected_pension - result.monthly_pension;

    let additional_years_needed = if gap <= 0.0 {
        Some(0)
    } else {
        let schedule = engine.contribution_schedule(person)?;
        let final_contribution = schedule.last().map(|row| row.contribution).unwrap_or(0.0);

        if final_contribution > 0.0 {
            let months = result.life_expectancy_years * 12.0;
            Some((gap * months / final_contribution).ceil() as u32)
        } else {
            None
        }
    };

    Ok(ExpectationGapAnalysis {
        expected_pension,
        predicted_pension: result.monthly_pension,
        gap,
        additional_years_needed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CalculationConfig;
    use crate::person::Gender;
    use crate::scenario::Fus20Parameters;
    use crate::tables::ReferenceTables;

    fn engine() -> PensionEngine {
        PensionEngine::new(
            ReferenceTables::default_published(),
            Fus20Parameters::intermediate(),
            CalculationConfig::new(2026),
        )
    }

    fn person() -> PersonData {
        PersonData::new(35, Gender::Male, 7000.0, 2012, 2056)
    }

    #[test]
    fn test_met_expectation_needs_no_extra_years() {
        let analysis = expectation_gap(&engine(), &person(), 1.0).unwrap();

        assert!(analysis.gap < 0.0);
        assert_eq!(analysis.additional_years_needed, Some(0));
    }

    #[test]
    fn test_unmet_expectation_needs_extra_years() {
        let engine = engine();
        let person = person();
        let predicted = engine.calculate(&person).unwrap().monthly_pension;

        let analysis = expectation_gap(&engine, &person, predicted + 1000.0).unwrap();

        assert!(analysis.gap > 0.0);
        let years = analysis.additional_years_needed.unwrap();
        assert!(years > 0);

        // A bigger gap needs at least as many years
        let bigger = expectation_gap(&engine, &person, predicted + 2000.0).unwrap();
        assert!(bigger.additional_years_needed.unwrap() >= years);
    }

    #[test]
    fn test_no_final_contribution_gives_no_estimate() {
        let person = PersonData::new(35, Gender::Male, 0.0, 2012, 2056);

        let analysis = expectation_gap(&engine(), &person, 2000.0).unwrap();

        assert!(analysis.gap > 0.0);
        assert_eq!(analysis.additional_years_needed, None);
    }
}
