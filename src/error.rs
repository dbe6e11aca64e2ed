//! Engine error taxonomy
//!
//! Every variant is fatal to the single calculation that raised it and is
//! propagated to the caller; the engine never retries and never returns a
//! partial result. Missing reference-table entries are not errors: they fall
//! back to the projection policy and are reported as `debug!` events.

use thiserror::Error;

/// Errors raised by the pension engine for invalid inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Retirement year precedes the as-of year of the calculation.
    #[error("retirement year {retirement_year} is before the as-of year {as_of_year}")]
    RetirementInPast {
        retirement_year: i32,
        as_of_year: i32,
    },

    /// The working period spans zero or fewer years.
    #[error("working period from {work_start_year} to {retirement_year} spans no full year")]
    EmptyWorkingPeriod {
        work_start_year: i32,
        retirement_year: i32,
    },

    /// Life expectancy resolved to a non-positive number of months.
    #[error("life expectancy of {months} months is not positive")]
    NonPositiveLifeExpectancy { months: f64 },

    /// Age outside the supported input range.
    #[error("age {age} is outside the supported range {min}..={max}")]
    AgeOutOfRange { age: u8, min: u8, max: u8 },

    /// Contribution collection rate outside the percentage range.
    #[error("contribution collection rate {rate} is outside 0..=100")]
    CollectionRateOutOfRange { rate: f64 },
}
