//! CSV-based reference-table loader
//!
//! Loads the valorization, life-expectancy, initial-capital and sick-leave
//! tables from CSV files in data/tables/. Every loader has a reader-based
//! variant so tables can also come from string buffers or network streams.

use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default path to the reference-table directory.
pub const DEFAULT_TABLES_PATH: &str = "data/tables";

/// Load annual valorization indices from CSV: year,percent
pub fn load_annual_valorization(path: &Path) -> Result<Vec<(i32, f64)>, Box<dyn Error>> {
    let file = File::open(path.join("valorization_annual.csv"))?;
    load_annual_valorization_from_reader(file)
}

pub fn load_annual_valorization_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<(i32, f64)>, Box<dyn Error>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rates = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let year: i32 = record[0].parse()?;
        let rate: f64 = record[1].parse()?;
        rates.push((year, rate));
    }

    Ok(rates)
}

/// Load quarterly valorization indices from CSV: year,quarter,percent
pub fn load_quarterly_valorization(path: &Path) -> Result<Vec<(i32, u8, f64)>, Box<dyn Error>> {
    let file = File::open(path.join("valorization_quarterly.csv"))?;
    load_quarterly_valorization_from_reader(file)
}

pub fn load_quarterly_valorization_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<(i32, u8, f64)>, Box<dyn Error>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rates = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let year: i32 = record[0].parse()?;
        let quarter: u8 = record[1].parse()?;
        if !(1..=4).contains(&quarter) {
            return Err(format!("quarter out of range: {}", quarter).into());
        }
        let rate: f64 = record[2].parse()?;
        rates.push((year, quarter, rate));
    }

    Ok(rates)
}

/// Load life expectancy from CSV: age,female_months,male_months
pub fn load_life_expectancy(path: &Path) -> Result<Vec<(u8, f64, f64)>, Box<dyn Error>> {
    let file = File::open(path.join("life_expectancy.csv"))?;
    load_life_expectancy_from_reader(file)
}

pub fn load_life_expectancy_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<(u8, f64, f64)>, Box<dyn Error>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut months = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let age: u8 = record[0].parse()?;
        let female: f64 = record[1].parse()?;
        let male: f64 = record[2].parse()?;
        months.push((age, female, male));
    }

    Ok(months)
}

/// Load initial-capital multipliers from CSV: years,female,male
pub fn load_initial_capital(path: &Path) -> Result<Vec<(u8, f64, f64)>, Box<dyn Error>> {
    let file = File::open(path.join("initial_capital.csv"))?;
    load_initial_capital_from_reader(file)
}

pub fn load_initial_capital_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<(u8, f64, f64)>, Box<dyn Error>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut multipliers = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let years: u8 = record[0].parse()?;
        let female: f64 = record[1].parse()?;
        let male: f64 = record[2].parse()?;
        multipliers.push((years, female, male));
    }

    Ok(multipliers)
}

/// Load sick-leave statistics from CSV: band,female_days,male_days
///
/// Rows must appear in band order (20-30, 31-40, 41-50, 51-60, 60+); the
/// band label column is informational only.
pub fn load_sick_leave(path: &Path) -> Result<Vec<(f64, f64)>, Box<dyn Error>> {
    let file = File::open(path.join("sick_leave.csv"))?;
    load_sick_leave_from_reader(file)
}

pub fn load_sick_leave_from_reader<R: Read>(reader: R) -> Result<Vec<(f64, f64)>, Box<dyn Error>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut days = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let female: f64 = record[1].parse()?;
        let male: f64 = record[2].parse()?;
        days.push((female, male));
    }

    Ok(days)
}

/// All reference tables loaded from one directory.
pub struct LoadedTables {
    pub annual_valorization: Vec<(i32, f64)>,
    pub quarterly_valorization: Vec<(i32, u8, f64)>,
    pub life_expectancy: Vec<(u8, f64, f64)>,
    pub initial_capital: Vec<(u8, f64, f64)>,
    pub sick_leave: Vec<(f64, f64)>,
}

impl LoadedTables {
    /// Load all tables from the default path.
    pub fn load_default() -> Result<Self, Box<dyn Error>> {
        Self::load_from(Path::new(DEFAULT_TABLES_PATH))
    }

    /// Load all tables from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            annual_valorization: load_annual_valorization(path)?,
            quarterly_valorization: load_quarterly_valorization(path)?,
            life_expectancy: load_life_expectancy(path)?,
            initial_capital: load_initial_capital(path)?,
            sick_leave: load_sick_leave(path)?,
        })
    }
}
