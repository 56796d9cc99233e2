//! format.rs - The closed set of date formats recognized by date extraction.
//!
//! The format selector is a two-variant enum rather than a free-form string,
//! so a typo'd format token is a `ScanError` at the parse boundary instead of
//! a silently wrong grammar deeper in.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ScanError;
use crate::grammars;

/// A recognized date layout. Exactly two are supported; anything else is a
/// configuration error on the caller's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateFormat {
    /// `MM/DD/YYYY`, with 1-2 digit month and day (e.g. `1/1/2023`, `01/15/2023`).
    #[default]
    #[serde(rename = "MM/DD/YYYY")]
    MonthDayYear,
    /// `YYYY-MM-DD`, with 1-2 digit month and day (e.g. `2023-1-1`, `2023-05-25`).
    #[serde(rename = "YYYY-MM-DD")]
    YearMonthDay,
}

impl DateFormat {
    /// The canonical token for this format, as accepted by [`FromStr`].
    pub const fn token(&self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "MM/DD/YYYY",
            DateFormat::YearMonthDay => "YYYY-MM-DD",
        }
    }

    /// The scanning grammar for this format.
    pub(crate) fn grammar(&self) -> &'static Regex {
        match self {
            DateFormat::MonthDayYear => &grammars::DATE_MDY,
            DateFormat::YearMonthDay => &grammars::DATE_YMD,
        }
    }
}

impl FromStr for DateFormat {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MM/DD/YYYY" => Ok(DateFormat::MonthDayYear),
            "YYYY-MM-DD" => Ok(DateFormat::YearMonthDay),
            other => Err(ScanError::UnsupportedDateFormat(other.to_string())),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
