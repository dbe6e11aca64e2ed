//! Contribution valorization indices published by the pension authority
//!
//! Two index families are kept side by side:
//! - Annual indices by calendar year, applied to contributions recorded in
//!   years with a published index.
//! - Quarterly indices by (year, quarter), applied to account balances when
//!   the caller opts into balance valorization.
//!
//! No index is published past [`LAST_VALORIZED_YEAR`]; later years are left
//! nominal by the accumulator.

/// Last calendar year with a published annual valorization index.
pub const LAST_VALORIZED_YEAR: i32 = 2024;

/// Annual and quarterly valorization indices, expressed in percent.
#[derive(Debug, Clone)]
pub struct ValorizationTable {
    /// Annual indices as (year, percent).
    annual: Vec<(i32, f64)>,

    /// Quarterly indices as (year, quarter 1-4, percent).
    quarterly: Vec<(i32, u8, f64)>,
}

impl ValorizationTable {
    /// Published annual and quarterly indices.
    pub fn default_published() -> Self {
        Self {
            annual: Self::published_annual_rates(),
            quarterly: Self::published_quarterly_rates(),
        }
    }

    /// Create from loaded CSV data.
    pub fn from_loaded(annual: &[(i32, f64)], quarterly: &[(i32, u8, f64)]) -> Self {
        Self {
            annual: annual.to_vec(),
            quarterly: quarterly.to_vec(),
        }
    }

    /// Annual index for a calendar year, in percent.
    ///
    /// Returns `None` for years without a published index, including every
    /// year after [`LAST_VALORIZED_YEAR`].
    pub fn annual_rate(&self, year: i32) -> Option<f64> {
        if year > LAST_VALORIZED_YEAR {
            return None;
        }
        self.annual
            .iter()
            .find(|(y, _)| *y == year)
            .map(|(_, rate)| *rate)
    }

    /// Quarterly index for (year, quarter), in percent.
    pub fn quarterly_rate(&self, year: i32, quarter: u8) -> Option<f64> {
        self.quarterly
            .iter()
            .find(|(y, q, _)| *y == year && *q == quarter)
            .map(|(_, _, rate)| *rate)
    }

    /// The most recent published annual index, in percent.
    pub fn latest_annual_rate(&self) -> Option<f64> {
        self.annual
            .iter()
            .max_by_key(|(year, _)| *year)
            .map(|(_, rate)| *rate)
    }

    /// Average of the `n` most recent quarterly indices, in percent.
    pub fn recent_quarterly_average(&self, n: usize) -> Option<f64> {
        if n == 0 || self.quarterly.is_empty() {
            return None;
        }
        let mut sorted: Vec<&(i32, u8, f64)> = self.quarterly.iter().collect();
        sorted.sort_by_key(|(year, quarter, _)| (*year, *quarter));
        let taken: Vec<f64> = sorted.iter().rev().take(n).map(|(_, _, r)| *r).collect();
        Some(taken.iter().sum::<f64>() / taken.len() as f64)
    }

    /// Annual indices in percent, by calendar year.
    fn published_annual_rates() -> Vec<(i32, f64)> {
        vec![
            (1995, 18.30),
            (1996, 16.80),
            (1997, 14.20),
            (1998, 12.10),
            (1999, 10.50),
            (2000, 9.20),
            (2001, 7.10),
            (2002, 4.80),
            (2003, 3.90),
            (2004, 4.20),
            (2005, 4.60),
            (2006, 5.10),
            (2007, 6.80),
            (2008, 8.10),
            (2009, 5.20),
            (2010, 3.90),
            (2011, 4.50),
            (2012, 4.10),
            (2013, 3.60),
            (2014, 2.40),
            (2015, 2.10),
            (2016, 2.30),
            (2017, 3.40),
            (2018, 4.20),
            (2019, 4.90),
            (2020, 3.56),
            (2021, 5.40),
            (2022, 9.30),
            (2023, 11.90),
            (2024, 9.70),
        ]
    }

    /// Quarterly indices in percent, by (year, quarter).
    fn published_quarterly_rates() -> Vec<(i32, u8, f64)> {
        vec![
            (2022, 1, 2.30),
            (2022, 2, 3.10),
            (2022, 3, 2.60),
            (2022, 4, 2.95),
            (2023, 1, 3.40),
            (2023, 2, 2.85),
            (2023, 3, 2.40),
            (2023, 4, 2.70),
            (2024, 1, 2.95),
            (2024, 2, 2.50),
            (2024, 3, 2.10),
            (2024, 4, 2.35),
        ]
    }
}

impl Default for ValorizationTable {
    fn default() -> Self {
        Self::default_published()
    }
}
