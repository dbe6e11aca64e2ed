//! Run pension projections for a whole cohort from a CSV file
//!
//! Outputs one result row per person for comparison across the cohort

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use pension_engine::person::loader::load_cohort;
use pension_engine::{CalculationConfig, PensionEngine, ReferenceTables, ScenarioVariant};
use chrono::Datelike;
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_cohort", about = "Project pensions for a cohort CSV")]
struct Args {
    /// Cohort CSV file
    #[arg(long, default_value = "data/cohort.csv")]
    cohort: PathBuf,

    /// FUS20 forecast variant: intermediate, pessimistic or optimistic
    #[arg(long, default_value = "intermediate")]
    scenario: String,

    /// Valuation year (defaults to the current calendar year)
    #[arg(long)]
    as_of_year: Option<i32>,

    /// Output CSV file
    #[arg(long, default_value = "cohort_results.csv")]
    output: PathBuf,
}

fn parse_variant(name: &str) -> anyhow::Result<ScenarioVariant> {
    match name.to_ascii_lowercase().as_str() {
        "intermediate" => Ok(ScenarioVariant::Intermediate),
        "pessimistic" => Ok(ScenarioVariant::Pessimistic),
        "optimistic" => Ok(ScenarioVariant::Optimistic),
        other => bail!("unknown scenario variant: {}", other),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let variant = parse_variant(&args.scenario)?;
    let as_of_year = args.as_of_year.unwrap_or_else(|| chrono::Utc::now().year());

    let start = Instant::now();
    println!("Loading cohort from {}...", args.cohort.display());

    let persons = load_cohort(&args.cohort)
        .map_err(|e| anyhow!("failed to load cohort: {}", e))?;
    println!("Loaded {} persons in {:?}", persons.len(), start.elapsed());

    let engine = PensionEngine::new(
        ReferenceTables::default_published(),
        variant.parameters(),
        CalculationConfig::new(as_of_year),
    );

    println!("Running projections ({} variant)...", variant.as_str());
    let proj_start = Instant::now();

    let results: Vec<_> = persons
        .par_iter()
        .map(|person| engine.calculate(person))
        .collect();

    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;

    writeln!(
        file,
        "Row,Age,Gender,MonthlySalary,MonthlyPension,RealPension,ReplacementRate,TotalCapital,InitialCapital,YearsToRetirement,SickLeaveImpactPct"
    )?;

    let mut failures = 0usize;
    for (i, (person, outcome)) in persons.iter().zip(&results).enumerate() {
        match outcome {
            Ok(r) => writeln!(
                file,
                "{},{},{:?},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{},{:.2}",
                i + 1,
                person.age,
                person.gender,
                person.monthly_salary,
                r.monthly_pension,
                r.real_pension,
                r.replacement_rate,
                r.total_contributions,
                r.initial_capital,
                r.years_to_retirement,
                r.sick_leave_impact_pct,
            )?,
            Err(e) => {
                failures += 1;
                log::warn!("person {} skipped: {}", i + 1, e);
            }
        }
    }

    println!("Output written to {}", args.output.display());

    let ok: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
    if !ok.is_empty() {
        let total: f64 = ok.iter().map(|r| r.monthly_pension).sum();
        let min = ok.iter().map(|r| r.monthly_pension).fold(f64::INFINITY, f64::min);
        let max = ok.iter().map(|r| r.monthly_pension).fold(f64::NEG_INFINITY, f64::max);
        println!("\nCohort Summary:");
        println!("  Persons projected: {}", ok.len());
        println!("  Average pension: {:.2} PLN/month", total / ok.len() as f64);
        println!("  Range: {:.2} - {:.2} PLN/month", min, max);
    }
    if failures > 0 {
        println!("  Skipped {} persons (see warnings)", failures);
    }

    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
