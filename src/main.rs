//! Pension Engine CLI
//!
//! Command-line interface for running a demo pension projection

use chrono::Datelike;
use pension_engine::analysis::project_account_balances;
use pension_engine::{
    CalculationConfig, Fus20Parameters, PensionEngine, PersonData, ReferenceTables, ScenarioRunner,
};
use pension_engine::person::Gender;
use std::fs::File;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Pension Engine v0.1.0");
    println!("=====================\n");

    let as_of_year = chrono::Utc::now().year();

    // Demo person: mid-career, some pre-reform service and account balances
    let mut person = PersonData::new(45, Gender::Female, 7200.0, 1998, 2041);
    person.contribution_period_years = Some(1);
    person.current_savings = Some(15_000.0);
    person.main_account = Some(86_000.0);
    person.sub_account = Some(21_500.0);
    person.include_sick_leave = true;

    println!("Person:");
    println!("  Age: {}", person.age);
    println!("  Gender: {:?}", person.gender);
    println!("  Monthly salary: {:.2} PLN", person.monthly_salary);
    println!("  Working period: {}-{}", person.work_start_year, person.retirement_year);
    println!("  As-of year: {}", as_of_year);
    println!();

    let engine = PensionEngine::new(
        ReferenceTables::default_published(),
        Fus20Parameters::intermediate(),
        CalculationConfig::new(as_of_year),
    );

    // Per-year contribution schedule
    let schedule = engine.contribution_schedule(&person)?;
    println!("Contribution schedule ({} years):", schedule.len());
    println!(
        "{:>6} {:>14} {:>14} {:>12} {:>12} {:>14}",
        "Year", "Wage", "AdjWage", "Contrib", "Valorized", "Cumulative"
    );
    println!("{}", "-".repeat(78));
    for row in schedule.iter().take(15) {
        println!(
            "{:>6} {:>14.2} {:>14.2} {:>12.2} {:>12.2} {:>14.2}",
            row.year,
            row.annual_wage,
            row.adjusted_wage,
            row.contribution,
            row.valorized_contribution,
            row.cumulative,
        );
    }
    if schedule.len() > 15 {
        println!("... ({} more years)", schedule.len() - 15);
    }

    // Full calculation
    let result = engine.calculate(&person)?;
    println!("\nResult:");
    println!("  Monthly pension: {:.2} PLN", result.monthly_pension);
    println!("  Real pension: {:.2} PLN", result.real_pension);
    println!("  Replacement rate: {:.2}%", result.replacement_rate);
    println!("  Total capital: {:.2} PLN", result.total_contributions);
    println!("  Capital at retirement: {:.2} PLN", result.capital_at_retirement);
    println!("  Initial capital: {:.2} PLN", result.initial_capital);
    println!("  Years to retirement: {}", result.years_to_retirement);
    println!("  Life expectancy: {:.2} years", result.life_expectancy_years);
    println!("  Sick-leave impact: {:.2}%", result.sick_leave_impact_pct);

    // Account projection to CSV
    let rows = project_account_balances(&engine, &person)?;
    let csv_path = "account_projection.csv";
    let mut file = File::create(csv_path)?;
    writeln!(file, "Year,Age,MainAccount,SubAccount,Total,AnnualContribution")?;
    for row in &rows {
        writeln!(
            file,
            "{},{},{:.2},{:.2},{:.2},{:.2}",
            row.year,
            row.age,
            row.account_balance,
            row.subaccount_balance,
            row.total_balance,
            row.annual_contribution,
        )?;
    }
    println!("\nAccount projection written to: {}", csv_path);

    // Result to JSON
    let json_path = "pension_result.json";
    let mut file = File::create(json_path)?;
    writeln!(file, "{}", serde_json::to_string_pretty(&result)?)?;
    println!("Result written to: {}", json_path);

    // All three FUS20 variants for comparison
    let runner = ScenarioRunner::new();
    println!("\nScenario comparison:");
    for (variant, outcome) in runner.run_variants(&person, CalculationConfig::new(as_of_year)) {
        match outcome {
            Ok(r) => println!(
                "  {:>12}: {:.2} PLN/month ({:.2}% replacement)",
                variant.as_str(),
                r.monthly_pension,
                r.replacement_rate
            ),
            Err(e) => println!("  {:>12}: failed: {}", variant.as_str(), e),
        }
    }

    Ok(())
}
