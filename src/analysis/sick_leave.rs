//! With/without sick-leave pension comparison

use serde::{Deserialize, Serialize};

use crate::engine::PensionEngine;
use crate::error::EngineError;
use crate::person::PersonData;
use crate::tables::SickLeaveBasis;

/// Pension with and without the sick-leave effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SickLeaveComparison {
    /// Monthly pension under the engine's configured sick-leave basis
    pub with_sick_leave: f64,

    /// Monthly pension with sick leave disabled
    pub without_sick_leave: f64,

    /// Pension lost to sick leave per month
    pub difference: f64,

    /// Loss in percent of the undisturbed pension
    pub impact_pct: f64,
}

/// Compare a person's pension with and without sick leave.
///
/// The disabled run uses an engine with [`SickLeaveBasis::Disabled`]; the
/// shared tables are never touched, so concurrent comparisons cannot observe
/// each other.
pub fn sick_leave_comparison(
    engine: &PensionEngine,
    person: &PersonData,
) -> Result<SickLeaveComparison, EngineError> {
    let with = engine.calculate(person)?;
    let without = engine
        .with_sick_leave_basis(SickLeaveBasis::Disabled)
        .calculate(person)?;

    let difference = without.monthly_pension - with.monthly_pension;
    let impact_pct = if without.monthly_pension > 0.0 {
        difference / without.monthly_pension * 100.0
    } else {
        0.0
    };

    Ok(SickLeaveComparison {
        with_sick_leave: with.monthly_pension,
        without_sick_leave: without.monthly_pension,
        difference,
        impact_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CalculationConfig;
    use crate::person::Gender;
    use crate::scenario::Fus20Parameters;
    use crate::tables::ReferenceTables;
    use approx::assert_relative_eq;

    fn engine() -> PensionEngine {
        PensionEngine::new(
            ReferenceTables::default_published(),
            Fus20Parameters::intermediate(),
            CalculationConfig::new(2026),
        )
    }

    #[test]
    fn test_comparison_shows_a_loss() {
        let mut person = PersonData::new(30, Gender::Female, 6000.0, 2016, 2056);
        person.include_sick_leave = true;

        let comparison = sick_leave_comparison(&engine(), &person).unwrap();

        assert!(comparison.with_sick_leave < comparison.without_sick_leave);
        assert!(comparison.difference > 0.0);
        assert!(comparison.impact_pct > 0.0 && comparison.impact_pct < 100.0);
    }

    #[test]
    fn test_no_sick_leave_means_no_impact() {
        let person = PersonData::new(30, Gender::Female, 6000.0, 2016, 2056);

        let comparison = sick_leave_comparison(&engine(), &person).unwrap();

        assert_relative_eq!(comparison.with_sick_leave, comparison.without_sick_leave);
        assert_relative_eq!(comparison.impact_pct, 0.0);
    }

    #[test]
    fn test_engine_basis_is_untouched() {
        let engine = engine();
        let mut person = PersonData::new(30, Gender::Female, 6000.0, 2016, 2056);
        person.include_sick_leave = true;

        let before = engine.calculate(&person).unwrap();
        let _ = sick_leave_comparison(&engine, &person).unwrap();
        let after = engine.calculate(&person).unwrap();

        assert_eq!(before, after);
    }
}
