//! Reference tables published by the pension authority

mod valorization;
mod life_expectancy;
mod initial_capital;
mod sick_leave;
pub mod loader;

pub use valorization::{ValorizationTable, LAST_VALORIZED_YEAR};
pub use life_expectancy::{
    LifeExpectancyTable, DEFAULT_LIFE_EXPECTANCY_MONTHS, MAX_RETIREMENT_AGE, MIN_RETIREMENT_AGE,
};
pub use initial_capital::{InitialCapitalTable, MAX_CONTRIBUTION_PERIOD_YEARS};
pub use sick_leave::{AgeBand, SickLeaveBasis, SickLeaveStats};
pub use loader::LoadedTables;

use std::path::Path;

/// Container for all reference tables a calculation needs.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub valorization: ValorizationTable,
    pub life_expectancy: LifeExpectancyTable,
    pub initial_capital: InitialCapitalTable,
    pub sick_leave: SickLeaveStats,
}

impl ReferenceTables {
    /// Create tables with the published reference values.
    pub fn default_published() -> Self {
        Self {
            valorization: ValorizationTable::default_published(),
            life_expectancy: LifeExpectancyTable::default_published(),
            initial_capital: InitialCapitalTable::default_published(),
            sick_leave: SickLeaveStats::default_published(),
        }
    }

    /// Load tables from CSV files in the default location (data/tables/)
    pub fn from_csv() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_csv_path(Path::new(loader::DEFAULT_TABLES_PATH))
    }

    /// Load tables from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let loaded = LoadedTables::load_from(path)?;

        Ok(Self {
            valorization: ValorizationTable::from_loaded(
                &loaded.annual_valorization,
                &loaded.quarterly_valorization,
            ),
            life_expectancy: LifeExpectancyTable::from_loaded(&loaded.life_expectancy),
            initial_capital: InitialCapitalTable::from_loaded(&loaded.initial_capital),
            sick_leave: SickLeaveStats::from_loaded(&loaded.sick_leave),
        })
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::default_published()
    }
}
