//! Load person cohorts from CSV

use super::{Gender, PersonData};
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the cohort file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Age")]
    age: u8,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "MonthlySalary")]
    monthly_salary: f64,
    #[serde(rename = "WorkStartYear")]
    work_start_year: i32,
    #[serde(rename = "RetirementYear")]
    retirement_year: i32,
    #[serde(rename = "CurrentSavings")]
    current_savings: Option<f64>,
    #[serde(rename = "ContributionYears")]
    contribution_period_years: Option<u8>,
    #[serde(rename = "IncludeSickLeave")]
    include_sick_leave: String,
    #[serde(rename = "ProfessionalGroup")]
    professional_group: Option<String>,
    #[serde(rename = "MainAccount")]
    main_account: Option<f64>,
    #[serde(rename = "SubAccount")]
    sub_account: Option<f64>,
}

impl CsvRow {
    fn to_person(self) -> Result<PersonData, Box<dyn Error>> {
        let gender = match self.gender.as_str() {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            other => return Err(format!("Unknown Gender: {}", other).into()),
        };

        let include_sick_leave = match self.include_sick_leave.as_str() {
            "Y" => true,
            "N" | "" => false,
            other => return Err(format!("Unknown IncludeSickLeave: {}", other).into()),
        };

        let mut person = PersonData::new(
            self.age,
            gender,
            self.monthly_salary,
            self.work_start_year,
            self.retirement_year,
        );
        person.current_savings = self.current_savings;
        person.contribution_period_years = self.contribution_period_years;
        person.include_sick_leave = include_sick_leave;
        person.professional_group = self.professional_group.filter(|g| !g.is_empty());
        person.main_account = self.main_account;
        person.sub_account = self.sub_account;

        Ok(person)
    }
}

/// Load all persons from a cohort CSV file
pub fn load_cohort<P: AsRef<Path>>(path: P) -> Result<Vec<PersonData>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut persons = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        persons.push(row.to_person()?);
    }

    Ok(persons)
}

/// Load persons from any reader (e.g., string buffer, network stream)
pub fn load_cohort_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<PersonData>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut persons = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        persons.push(row.to_person()?);
    }

    Ok(persons)
}
