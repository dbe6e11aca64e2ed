//! FUS20 scenario parameters and a runner for efficient batch projections
//!
//! Pre-loads reference tables once, then allows running many calculations
//! with different parameter sets without re-reading CSV files.

use serde::{Deserialize, Serialize};

use crate::engine::{
    CalculationConfig, PensionCalculationResult, PensionEngine, DEFAULT_WAGE_GROWTH,
};
use crate::error::EngineError;
use crate::person::PersonData;
use crate::tables::ReferenceTables;

/// The three macroeconomic variants of the FUS20 forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioVariant {
    Intermediate,
    Pessimistic,
    Optimistic,
}

impl ScenarioVariant {
    /// All variants in their published order.
    pub fn all() -> [ScenarioVariant; 3] {
        [
            ScenarioVariant::Intermediate,
            ScenarioVariant::Pessimistic,
            ScenarioVariant::Optimistic,
        ]
    }

    /// Parameter preset for this variant.
    pub fn parameters(self) -> Fus20Parameters {
        match self {
            ScenarioVariant::Intermediate => Fus20Parameters::intermediate(),
            ScenarioVariant::Pessimistic => Fus20Parameters::pessimistic(),
            ScenarioVariant::Optimistic => Fus20Parameters::optimistic(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioVariant::Intermediate => "intermediate",
            ScenarioVariant::Pessimistic => "pessimistic",
            ScenarioVariant::Optimistic => "optimistic",
        }
    }
}

/// Macroeconomic parameters of one FUS20 forecast variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fus20Parameters {
    /// Variant these parameters belong to
    pub scenario: ScenarioVariant,

    /// Assumed unemployment rate in percent
    pub unemployment_rate: f64,

    /// Assumed annual wage growth in percent
    pub wage_growth: f64,

    /// Assumed annual inflation in percent
    pub inflation: f64,

    /// Share of due contributions actually collected, in percent (0-100)
    pub contribution_collection: f64,

    /// General price inflation in percent, overriding `inflation` when set
    #[serde(default)]
    pub general_inflation: Option<f64>,

    /// Pensioner-basket inflation in percent, carried for reporting
    #[serde(default)]
    pub pensioner_inflation: Option<f64>,

    /// Real GDP growth in percent, used by the sub-account projection
    #[serde(default)]
    pub real_gdp_growth: Option<f64>,
}

impl Fus20Parameters {
    /// Intermediate (baseline) forecast variant.
    pub fn intermediate() -> Self {
        Self {
            scenario: ScenarioVariant::Intermediate,
            unemployment_rate: 5.2,
            wage_growth: DEFAULT_WAGE_GROWTH,
            inflation: 2.5,
            contribution_collection: 95.0,
            general_inflation: None,
            pensioner_inflation: None,
            real_gdp_growth: None,
        }
    }

    /// Pessimistic forecast variant.
    pub fn pessimistic() -> Self {
        Self {
            scenario: ScenarioVariant::Pessimistic,
            unemployment_rate: 7.5,
            wage_growth: 2.8,
            inflation: 4.0,
            contribution_collection: 92.0,
            general_inflation: None,
            pensioner_inflation: None,
            real_gdp_growth: None,
        }
    }

    /// Optimistic forecast variant.
    pub fn optimistic() -> Self {
        Self {
            scenario: ScenarioVariant::Optimistic,
            unemployment_rate: 3.8,
            wage_growth: 4.2,
            inflation: 2.0,
            contribution_collection: 98.0,
            general_inflation: None,
            pensioner_inflation: None,
            real_gdp_growth: None,
        }
    }

    /// Inflation rate in percent used for deflating nominal amounts.
    pub fn effective_inflation(&self) -> f64 {
        self.general_inflation.unwrap_or(self.inflation)
    }

    /// Reject parameter sets the engine cannot price.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(0.0..=100.0).contains(&self.contribution_collection) {
            return Err(EngineError::CollectionRateOutOfRange {
                rate: self.contribution_collection,
            });
        }
        Ok(())
    }
}

impl Default for Fus20Parameters {
    fn default() -> Self {
        Self::intermediate()
    }
}

/// Pre-loaded scenario runner for efficient batch calculations
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let config = CalculationConfig::new(2026);
///
/// for (variant, result) in runner.run_variants(&person, config) {
///     println!("{}: {:?}", variant.as_str(), result);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Pre-loaded base reference tables
    base_tables: ReferenceTables,
}

impl ScenarioRunner {
    /// Create runner with default in-memory tables
    pub fn new() -> Self {
        Self {
            base_tables: ReferenceTables::default_published(),
        }
    }

    /// Create runner by loading tables from CSV files
    pub fn from_csv() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            base_tables: ReferenceTables::from_csv()?,
        })
    }

    /// Create runner from a specific tables directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            base_tables: ReferenceTables::from_csv_path(path)?,
        })
    }

    /// Create runner with pre-built tables
    pub fn with_tables(tables: ReferenceTables) -> Self {
        Self {
            base_tables: tables,
        }
    }

    /// Run a single calculation with the given parameters and config
    /// Clones the base tables internally (cheap, a few small Vecs)
    pub fn run(
        &self,
        person: &PersonData,
        scenario: &Fus20Parameters,
        config: CalculationConfig,
    ) -> Result<PensionCalculationResult, EngineError> {
        let engine = PensionEngine::new(self.base_tables.clone(), scenario.clone(), config);
        engine.calculate(person)
    }

    /// Run calculations for multiple persons with the same parameters
    pub fn run_batch(
        &self,
        persons: &[PersonData],
        scenario: &Fus20Parameters,
        config: CalculationConfig,
    ) -> Vec<Result<PensionCalculationResult, EngineError>> {
        let engine = PensionEngine::new(self.base_tables.clone(), scenario.clone(), config);
        persons.iter().map(|p| engine.calculate(p)).collect()
    }

    /// Run all three FUS20 variants for a single person
    pub fn run_variants(
        &self,
        person: &PersonData,
        config: CalculationConfig,
    ) -> Vec<(ScenarioVariant, Result<PensionCalculationResult, EngineError>)> {
        ScenarioVariant::all()
            .into_iter()
            .map(|variant| {
                let engine =
                    PensionEngine::new(self.base_tables.clone(), variant.parameters(), config);
                (variant, engine.calculate(person))
            })
            .collect()
    }

    /// Get reference to base tables for inspection
    pub fn tables(&self) -> &ReferenceTables {
        &self.base_tables
    }

    /// Get mutable reference to base tables for customization
    pub fn tables_mut(&mut self) -> &mut ReferenceTables {
        &mut self.base_tables
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Gender;

    fn test_person() -> PersonData {
        PersonData::new(35, Gender::Male, 7000.0, 2012, 2056)
    }

    #[test]
    fn test_intermediate_preset() {
        let params = Fus20Parameters::intermediate();

        assert_eq!(params.unemployment_rate, 5.2);
        assert_eq!(params.wage_growth, 3.5);
        assert_eq!(params.inflation, 2.5);
        assert_eq!(params.contribution_collection, 95.0);
    }

    #[test]
    fn test_validate_rejects_bad_collection_rate() {
        let mut params = Fus20Parameters::intermediate();
        params.contribution_collection = 120.0;

        assert!(matches!(
            params.validate(),
            Err(EngineError::CollectionRateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_effective_inflation_prefers_general() {
        let mut params = Fus20Parameters::intermediate();
        assert_eq!(params.effective_inflation(), 2.5);

        params.general_inflation = Some(3.1);
        assert_eq!(params.effective_inflation(), 3.1);
    }

    #[test]
    fn test_runner_variants() {
        let runner = ScenarioRunner::new();
        let person = test_person();
        let config = CalculationConfig::new(2026);

        let results = runner.run_variants(&person, config);
        assert_eq!(results.len(), 3);

        for (_, result) in &results {
            let result = result.as_ref().unwrap();
            assert!(result.monthly_pension > 0.0);
        }

        // A better economy pays a better pension
        let intermediate = results[0].1.as_ref().unwrap().monthly_pension;
        let pessimistic = results[1].1.as_ref().unwrap().monthly_pension;
        let optimistic = results[2].1.as_ref().unwrap().monthly_pension;
        assert!(optimistic > intermediate);
        assert!(intermediate > pessimistic);
    }

    #[test]
    fn test_runner_batch() {
        let runner = ScenarioRunner::new();
        let persons = vec![
            test_person(),
            PersonData::new(50, Gender::Female, 5200.0, 1995, 2041),
        ];
        let config = CalculationConfig::new(2026);

        let results = runner.run_batch(&persons, &Fus20Parameters::intermediate(), config);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.is_ok()));
    }
}
