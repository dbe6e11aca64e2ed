//! Person data structures describing one insured individual

use serde::{Deserialize, Serialize};

/// Sex of the insured person, as used by the sex-keyed reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Whether a sickness period lies in the past or is anticipated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SicknessKind {
    Past,
    Future,
}

/// One recorded or anticipated sickness period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SicknessPeriod {
    /// Calendar year the period falls in
    pub year: i32,

    /// Sick days taken in that year
    pub days: u32,

    /// Past (already taken) or future (anticipated)
    pub kind: SicknessKind,

    /// County where the sickness was registered, for regional reporting
    #[serde(default)]
    pub county: Option<String>,
}

/// One known annual salary for a past calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSalary {
    /// Calendar year
    pub year: i32,

    /// Gross annual salary for that year, in PLN
    pub amount: f64,
}

/// All inputs describing one insured person.
///
/// Constructed once per calculation and never mutated by the engine, so a
/// single instance can be shared across threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonData {
    /// Current age in years (18-100)
    pub age: u8,

    /// Sex, used by the life-expectancy and initial-capital tables
    pub gender: Gender,

    /// Current gross monthly salary in PLN; negative values count as zero
    pub monthly_salary: f64,

    /// First calendar year with pension contributions
    pub work_start_year: i32,

    /// Calendar year retirement begins (exclusive end of the working period)
    pub retirement_year: i32,

    /// Existing account balance carried into the projection
    #[serde(default)]
    pub current_savings: Option<f64>,

    /// Contribution years completed before the 1999 reform (1-20)
    #[serde(default)]
    pub contribution_period_years: Option<u8>,

    /// Whether sick-leave reductions apply to this person
    #[serde(default)]
    pub include_sick_leave: bool,

    /// Professional group label, carried for the reporting layers
    #[serde(default)]
    pub professional_group: Option<String>,

    /// Known annual salaries for past years; these win over the back-computed
    /// wage for their year
    #[serde(default)]
    pub historical_salaries: Vec<HistoricalSalary>,

    /// Explicit sickness periods; when any are present they replace the
    /// statistical sick-leave fallback
    #[serde(default)]
    pub sickness_periods: Vec<SicknessPeriod>,

    /// Per-person wage growth in percent, overriding the scenario rate
    #[serde(default)]
    pub salary_growth_override: Option<f64>,

    /// Flat annual valorization rate in percent, replacing the table lookup
    /// for historical years
    #[serde(default)]
    pub valorization_override: Option<f64>,

    /// Per-person inflation in percent, overriding the scenario rate
    #[serde(default)]
    pub inflation_override: Option<f64>,

    /// Cap on how many years the account projection runs
    #[serde(default)]
    pub forecast_horizon_years: Option<u32>,

    /// Main pension account balance in PLN
    #[serde(default)]
    pub main_account: Option<f64>,

    /// Sub-account balance in PLN
    #[serde(default)]
    pub sub_account: Option<f64>,

    /// Gross up the main account by the latest annual valorization index
    #[serde(default)]
    pub valorize_main_account: bool,

    /// Gross up the sub-account by the recent quarterly average index
    #[serde(default)]
    pub valorize_sub_account: bool,
}

impl PersonData {
    /// Create a person with the required fields; everything optional starts
    /// empty.
    pub fn new(
        age: u8,
        gender: Gender,
        monthly_salary: f64,
        work_start_year: i32,
        retirement_year: i32,
    ) -> Self {
        Self {
            age,
            gender,
            monthly_salary,
            work_start_year,
            retirement_year,
            current_savings: None,
            contribution_period_years: None,
            include_sick_leave: false,
            professional_group: None,
            historical_salaries: Vec::new(),
            sickness_periods: Vec::new(),
            salary_growth_override: None,
            valorization_override: None,
            inflation_override: None,
            forecast_horizon_years: None,
            main_account: None,
            sub_account: None,
            valorize_main_account: false,
            valorize_sub_account: false,
        }
    }

    /// Length of the working period in years.
    pub fn working_years(&self) -> i32 {
        self.retirement_year - self.work_start_year
    }

    /// Years from the valuation year to retirement (negative when retirement
    /// already passed).
    pub fn years_to_retirement(&self, as_of_year: i32) -> i32 {
        self.retirement_year - as_of_year
    }

    /// Age at retirement, assuming the current age is exact in the valuation
    /// year.
    pub fn retirement_age(&self, as_of_year: i32) -> f64 {
        self.age as f64 + self.years_to_retirement(as_of_year) as f64
    }

    /// Known annual salary for a year, if one was supplied with a positive
    /// amount.
    pub fn historical_salary(&self, year: i32) -> Option<f64> {
        self.historical_salaries
            .iter()
            .find(|entry| entry.year == year && entry.amount > 0.0)
            .map(|entry| entry.amount)
    }

    /// Current annual salary base, with negative monthly values floored to
    /// zero.
    pub fn annual_base_salary(&self) -> f64 {
        self.monthly_salary.max(0.0) * 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_person() -> PersonData {
        PersonData::new(30, Gender::Female, 6000.0, 2016, 2056)
    }

    #[test]
    fn test_timing_helpers() {
        let person = sample_person();

        assert_eq!(person.working_years(), 40);
        assert_eq!(person.years_to_retirement(2026), 30);
        assert_relative_eq!(person.retirement_age(2026), 60.0);
    }

    #[test]
    fn test_negative_salary_floors_to_zero() {
        let mut person = sample_person();
        person.monthly_salary = -500.0;

        assert_relative_eq!(person.annual_base_salary(), 0.0);
    }

    #[test]
    fn test_historical_salary_lookup() {
        let mut person = sample_person();
        person.historical_salaries = vec![
            HistoricalSalary { year: 2020, amount: 60_000.0 },
            HistoricalSalary { year: 2021, amount: 0.0 },
        ];

        assert_relative_eq!(person.historical_salary(2020).unwrap(), 60_000.0);
        // Zero amounts do not count as known salaries
        assert_eq!(person.historical_salary(2021), None);
        assert_eq!(person.historical_salary(2019), None);
    }

    #[test]
    fn test_json_round_trip_with_defaults() {
        let json = r#"{
            "age": 45,
            "gender": "Male",
            "monthly_salary": 8000.0,
            "work_start_year": 2000,
            "retirement_year": 2046
        }"#;
        let person: PersonData = serde_json::from_str(json).unwrap();

        assert_eq!(person.age, 45);
        assert!(!person.include_sick_leave);
        assert!(person.historical_salaries.is_empty());
        assert_eq!(person.main_account, None);
    }
}
