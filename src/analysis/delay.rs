//! Effect of postponing retirement by a number of years

use serde::{Deserialize, Serialize};

use crate::engine::PensionEngine;
use crate::error::EngineError;
use crate::person::PersonData;

/// Comparison of retiring on time against retiring later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementDelayAnalysis {
    /// Years the retirement was postponed by
    pub delay_years: u32,

    /// Monthly pension at the original retirement year
    pub original_pension: f64,

    /// Monthly pension at the postponed retirement year
    pub delayed_pension: f64,

    /// Pension increase in percent of the original
    pub increase_pct: f64,

    /// Extra capital accumulated during the postponement
    pub additional_contributions: f64,
}

/// Compare a person's pension with and without postponing retirement.
///
/// Runs two independent calculations; the delayed run extends the working
/// period, which both adds contributions and shortens the annuitization
/// horizon.
pub fn retirement_delay(
    engine: &PensionEngine,
    person: &PersonData,
    delay_years: u32,
) -> Result<RetirementDelayAnalysis, EngineError> {
    let original = engine.calculate(person)?;

    let mut delayed_person = person.clone();
    delayed_person.retirement_year += delay_years as i32;
    let delayed = engine.calculate(&delayed_person)?;

    let increase_pct = if original.monthly_pension > 0.0 {
        (delayed.monthly_pension - original.monthly_pension) / original.monthly_pension * 100.0
    } else {
        0.0
    };

    Ok(RetirementDelayAnalysis {
        delay_years,
        original_pension: original.monthly_pension,
        delayed_pension: delayed.monthly_pension,
        increase_pct,
        additional_contributions: delayed.total_contributions - original.total_contributions,
    })
}
