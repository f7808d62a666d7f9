//! Calendar dates in `YYYYMMDD` form and date ranges
//!
//! A [`Date`] is validated as a numeral, not as a calendar day: month must be
//! 1-12 and day 1-31, with no month-length or leap-year check. Comparisons go
//! through [`Date::to_integer`].

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::clock::{Clock, SystemClock};
use crate::error::{HazardError, Result};

/// Date of the form `YYYYMMDD`
///
/// ```
/// use hazard_monitor_core::Date;
///
/// let date = Date::new("20190411").unwrap();
/// assert_eq!(date.to_integer(), 20190411);
/// assert_eq!(&date.as_str()[..4], "2019");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date(String);

impl Date {
    pub fn new(date: impl Into<String>) -> Result<Self> {
        let date = date.into();
        if Self::is_valid_date(&date) {
            Ok(Self(date))
        } else {
            Err(HazardError::invalid_value(format!(
                "The date {} is not a valid date of the form \"YYYYMMDD\"",
                date
            )))
        }
    }

    /// Check that `possible_date` is eight digits with month 1-12 and day 1-31
    pub fn is_valid_date(possible_date: &str) -> bool {
        if possible_date.len() != 8 || !possible_date.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        let month: u32 = possible_date[4..6].parse().unwrap_or(0);
        let day: u32 = possible_date[6..].parse().unwrap_or(0);
        (1..=12).contains(&month) && (1..=31).contains(&day)
    }

    /// Today according to the local system clock
    pub fn get_today() -> Result<Self> {
        Self::today(&SystemClock)
    }

    /// Today according to `clock`. Fails when the clock's year is outside
    /// 0..=9999 and so does not fit `YYYYMMDD`.
    pub fn today(clock: &dyn Clock) -> Result<Self> {
        Self::from_naive_date(clock.today())
    }

    /// Format a calendar date as `YYYYMMDD`. Years outside 0..=9999 are rejected.
    pub fn from_naive_date(date: NaiveDate) -> Result<Self> {
        Self::new(date.format("%Y%m%d").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_integer(&self) -> u32 {
        // Eight validated digits always fit in u32.
        self.0.parse().unwrap_or(0)
    }

    /// The calendar day this numeral names, if it exists (`20190231` does not)
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%Y%m%d").ok()
    }

    /// Date `days` before this one.
    ///
    /// [`DaySubtraction::Numeral`] subtracts from the `YYYYMMDD` numeral, which
    /// can produce numerals that fail validation near month boundaries
    /// (`20200605 - 10 = 20200595`). [`DaySubtraction::Calendar`] subtracts real
    /// days.
    pub fn minus_days(&self, days: i64, mode: DaySubtraction) -> Result<Self> {
        match mode {
            DaySubtraction::Numeral => {
                let numeral = i64::from(self.to_integer())
                    .checked_sub(days)
                    .ok_or_else(|| {
                        HazardError::invalid_value(format!(
                            "Subtracting {} days from {} overflows",
                            days, self
                        ))
                    })?;
                Self::new(numeral.to_string())
            }
            DaySubtraction::Calendar => {
                let start = self.to_naive_date().ok_or_else(|| {
                    HazardError::invalid_value(format!("The date {} is not a calendar day", self))
                })?;
                let shifted = if days >= 0 {
                    start.checked_sub_days(Days::new(days.unsigned_abs()))
                } else {
                    start.checked_add_days(Days::new(days.unsigned_abs()))
                };
                let shifted = shifted.ok_or_else(|| {
                    HazardError::invalid_value(format!(
                        "Subtracting {} days from {} leaves the supported range",
                        days, self
                    ))
                })?;
                Self::from_naive_date(shifted)
            }
        }
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Date {
    type Err = HazardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Date {
    type Error = HazardError;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl From<Date> for String {
    fn from(date: Date) -> String {
        date.0
    }
}

/// How "N days before" is computed for a [`Date`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DaySubtraction {
    /// Integer subtraction on the `YYYYMMDD` numeral
    #[default]
    Numeral,
    /// Calendar-aware subtraction
    Calendar,
}

/// Inclusive range of dates. An unset `end` means "up to today".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Date,
    #[serde(default)]
    pub end: Option<Date>,
}

impl DateRange {
    pub fn new(start: Date, end: Option<Date>) -> Self {
        Self { start, end }
    }

    /// Range from `start` up to the current date
    pub fn open(start: Date) -> Self {
        Self { start, end: None }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    pub fn date_in_range(&self, date: &Date) -> bool {
        self.date_in_range_at(date, &SystemClock)
    }

    /// `start <= date <= end`, with an unset end resolved through `clock`
    pub fn date_in_range_at(&self, date: &Date, clock: &dyn Clock) -> bool {
        let end = match &self.end {
            Some(end) => i64::from(end.to_integer()),
            None => today_numeral(clock.today()),
        };
        let date = i64::from(date.to_integer());
        i64::from(self.start.to_integer()) <= date && date <= end
    }
}

/// `YYYYMMDD` as a number, for any year the clock reports
fn today_numeral(today: NaiveDate) -> i64 {
    i64::from(today.year()) * 10_000 + i64::from(today.month()) * 100 + i64::from(today.day())
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.end {
            Some(end) => write!(f, "[{}, {}]", self.start, end),
            None => write!(f, "[{}, None]", self.start),
        }
    }
}
