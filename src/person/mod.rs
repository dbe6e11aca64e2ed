//! Person inputs and cohort loading

mod data;
pub mod loader;

pub use data::{Gender, HistoricalSalary, PersonData, SicknessKind, SicknessPeriod};
pub use loader::{load_cohort, load_cohort_from_reader};
