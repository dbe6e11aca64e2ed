//! Pension Engine - FUS20 state-pension projection for individual insured persons
//!
//! This library provides:
//! - Year-by-year contribution accumulation with wage indexation and
//!   historical valorization
//! - Capital composition from pre-reform initial capital, account balances
//!   and savings
//! - Life-expectancy annuitization with replacement-rate and real-value
//!   reporting
//! - Derived analyses: retirement delay, sick-leave comparison, expectation
//!   gap, account-balance projection
//! - Multi-variant scenario framework for the three FUS20 forecast variants

pub mod person;
pub mod tables;
pub mod engine;
pub mod analysis;
pub mod scenario;
pub mod error;

// Re-export commonly used types
pub use person::{Gender, PersonData};
pub use tables::ReferenceTables;
pub use engine::{CalculationConfig, PensionCalculationResult, PensionEngine};
pub use scenario::{Fus20Parameters, ScenarioRunner, ScenarioVariant};
pub use error::EngineError;
