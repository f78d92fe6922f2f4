//! Calendar helpers: today, YYYY-MM-DD parsing and month windows.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    // chrono accepts "2025-9-1"; only the zero-padded form is valid here
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn parse_required_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// One calendar month, the reporting window for timelines and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    /// Parse "YYYY-MM".
    pub fn parse(s: &str) -> AppResult<Self> {
        let err = || AppError::InvalidMonth(s.to_string());
        let (y, m) = s.split_once('-').ok_or_else(err)?;
        if y.len() != 4 || m.len() != 2 {
            return Err(err());
        }
        let year: i32 = y.parse().map_err(|_| err())?;
        let month: u32 = m.parse().map_err(|_| err())?;
        if !(1..=12).contains(&month) {
            return Err(err());
        }
        Ok(Self { year, month })
    }

    pub fn current() -> Self {
        let t = today();
        Self {
            year: t.year(),
            month: t.month(),
        }
    }

    /// Typed containment check, so adjacent months never leak in even when
    /// their dates are string-adjacent.
    pub fn contains(&self, d: NaiveDate) -> bool {
        d.year() == self.year && d.month() == self.month
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        let mut out = Vec::new();
        let mut d = NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap();
        while d.month() == self.month {
            out.push(d);
            d = d.succ_opt().unwrap();
        }
        out
    }

    /// Human label, e.g. "September 2025".
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap()
            .format("%B %Y")
            .to_string()
    }
}

/// Resolve an optional --month argument, defaulting to the current month.
pub fn resolve_month(arg: &Option<String>) -> AppResult<Month> {
    match arg {
        Some(s) => Month::parse(s),
        None => Ok(Month::current()),
    }
}
