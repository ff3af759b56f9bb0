//! Swedish personal identity numbers (personnummer).
//!
//! ## Grammar
//!
//! ```text
//! [CC]YYMMDD[-+]NNNC
//! ```
//!
//! - `CC` optional century; when absent it is inferred from today's date
//!   and the separator (`+` means the holder is at least 100 years old)
//! - `DD` is the day of month, or day + 60 for a coordination number
//! - `NNN` is a serial other than `000`, or an interim letter
//!   (`TRSUWXJKLMN`) followed by two digits
//! - `C` is the Luhn check digit over `YYMMDDNNN`, with any interim
//!   letter counted as `1`
//!
//! Whitespace anywhere in the input is ignored.

use chrono::{Datelike, NaiveDate};
use serde::ser::SerializeStruct;
use tracing::debug;

use crate::calendar::{is_valid_date, years_between};
use crate::checksum::check_digit;
use crate::clock::{Clock, SystemClock};
use crate::error::{IdError, PersonalIdRejection};
use crate::format::{FormatConfig, OutputStyle, Separator};
use crate::options::ParseOptions;

/// Letters that may replace the first serial digit of an interim number.
pub const INTERIM_LETTERS: [char; 11] = ['T', 'R', 'S', 'U', 'W', 'X', 'J', 'K', 'L', 'M', 'N'];

/// Offset added to the day of month in a coordination number.
pub const COORDINATION_DAY_OFFSET: u8 = 60;

const MIN_LEN: usize = 10;
const MAX_LEN: usize = 13;

/// A validated personal identity number.
///
/// Immutable once parsed; every instance satisfies the checksum and has
/// exactly one calendar reading (ordinary or coordination).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonalId {
    century: u8,
    year: u8,
    month: u8,
    day: u8,
    separator: Separator,
    serial: String,
    check_digit: u8,
    birth_date: NaiveDate,
    coordination: bool,
}

/// Raw pieces of an input that matched the grammar.
struct Captures<'a> {
    century: Option<&'a str>,
    year: &'a str,
    month: &'a str,
    day: &'a str,
    separator: Option<Separator>,
    serial: &'a str,
    check_digit: u8,
}

impl PersonalId {
    /// Parses a personal identity number, inferring the century from the
    /// system date.
    pub fn parse(input: &str, options: &ParseOptions) -> Result<Self, IdError> {
        Self::parse_with_clock(input, options, &SystemClock)
    }

    /// Parses a personal identity number against an explicit reference date.
    pub fn parse_with_clock(
        input: &str,
        options: &ParseOptions,
        clock: &impl Clock,
    ) -> Result<Self, IdError> {
        let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        if !(MIN_LEN..=MAX_LEN).contains(&compact.len()) {
            return Err(reject(PersonalIdRejection::Length, compact.len()));
        }

        let caps = match_grammar(&compact)
            .ok_or_else(|| reject(PersonalIdRejection::Pattern, compact.len()))?;

        let year = two_digits(caps.year);
        let month = two_digits(caps.month);
        let day = two_digits(caps.day);

        if month >= 20 {
            return Err(reject(PersonalIdRejection::OrganisationMonth, compact.len()));
        }

        let today_year = clock.today().year();
        let (full_year, separator) = match caps.century {
            Some(century) => {
                let full_year = i32::from(two_digits(century)) * 100 + i32::from(year);
                let separator = if today_year - full_year < 100 {
                    Separator::Dash
                } else {
                    Separator::Plus
                };
                (full_year, separator)
            }
            None => {
                let separator = caps.separator.unwrap_or_default();
                let base_year = match separator {
                    Separator::Dash => today_year,
                    Separator::Plus => today_year - 100,
                };
                let full_year = base_year - (base_year - i32::from(year)).rem_euclid(100);
                (full_year, separator)
            }
        };
        let century = u8::try_from(full_year.div_euclid(100))
            .map_err(|_| reject(PersonalIdRejection::Date, compact.len()))?;

        let ordinary = is_valid_date(full_year, u32::from(month), i32::from(day));
        let coordination = !ordinary
            && is_valid_date(
                full_year,
                u32::from(month),
                i32::from(day) - i32::from(COORDINATION_DAY_OFFSET),
            );
        if !ordinary && !coordination {
            return Err(reject(PersonalIdRejection::Date, compact.len()));
        }

        let checksum_input = format!(
            "{}{}{}{}",
            caps.year,
            caps.month,
            caps.day,
            serial_for_checksum(caps.serial)
        );
        if check_digit(&checksum_input) != caps.check_digit {
            return Err(reject(PersonalIdRejection::Checksum, compact.len()));
        }

        if coordination && !options.allow_coordination_number {
            return Err(reject(PersonalIdRejection::CoordinationNotAllowed, compact.len()));
        }

        if interim_letter(caps.serial).is_some() && !options.allow_interim_number {
            return Err(reject(PersonalIdRejection::InterimNotAllowed, compact.len()));
        }

        let calendar_day = if coordination {
            day - COORDINATION_DAY_OFFSET
        } else {
            day
        };
        let birth_date =
            NaiveDate::from_ymd_opt(full_year, u32::from(month), u32::from(calendar_day))
                .ok_or_else(|| reject(PersonalIdRejection::Date, compact.len()))?;

        Ok(Self {
            century,
            year,
            month,
            day,
            separator,
            serial: caps.serial.to_string(),
            check_digit: caps.check_digit,
            birth_date,
            coordination,
        })
    }

    /// Returns true if the input parses under the given options.
    pub fn is_valid(input: &str, options: &ParseOptions) -> bool {
        Self::parse(input, options).is_ok()
    }

    /// Two-digit century, e.g. `19`.
    pub fn century(&self) -> u8 {
        self.century
    }

    /// Two-digit year within the century.
    pub fn year(&self) -> u8 {
        self.year
    }

    /// Four-digit year of birth.
    pub fn full_year(&self) -> i32 {
        i32::from(self.century) * 100 + i32::from(self.year)
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day field as written: 61-91 for coordination numbers.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Separator computed at parse time.
    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// The three serial characters as written, interim letter included.
    pub fn serial(&self) -> &str {
        &self.serial
    }

    pub fn check_digit(&self) -> u8 {
        self.check_digit
    }

    /// Date of birth; the coordination offset is already removed.
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Whole years between the birth date and the clock's today.
    pub fn age(&self, clock: &impl Clock) -> i32 {
        years_between(clock.today(), self.birth_date)
    }

    pub fn is_coordination_number(&self) -> bool {
        self.coordination
    }

    /// The interim letter, if this is an interim number.
    pub fn interim_letter(&self) -> Option<char> {
        interim_letter(&self.serial)
    }

    pub fn is_interim_number(&self) -> bool {
        self.interim_letter().is_some()
    }

    /// Odd last serial digit means male.
    pub fn is_male(&self) -> bool {
        self.serial
            .bytes()
            .last()
            .map(|b| (b.wrapping_sub(b'0')) % 2 == 1)
            .unwrap_or(false)
    }

    pub fn is_female(&self) -> bool {
        !self.is_male()
    }

    /// Renders the number in the requested layout.
    pub fn format(&self, config: &FormatConfig) -> String {
        let sep = config.separator.unwrap_or(self.separator);
        let date = format!("{:02}{:02}{:02}", self.year, self.month, self.day);
        let suffix = format!("{}{}", self.serial, self.check_digit);

        match config.style {
            OutputStyle::Long => format!("{:02}{date}{suffix}", self.century),
            OutputStyle::Short => format!("{date}{suffix}"),
            OutputStyle::Separated => format!("{date}{sep}{suffix}"),
            OutputStyle::SeparatedLong => format!("{:02}{date}{sep}{suffix}", self.century),
        }
    }
}

impl std::fmt::Display for PersonalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(&FormatConfig::default()))
    }
}

impl std::str::FromStr for PersonalId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &ParseOptions::default())
    }
}

impl serde::Serialize for PersonalId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("PersonalId", 10)?;
        state.serialize_field("century", &format!("{:02}", self.century))?;
        state.serialize_field("year", &format!("{:02}", self.year))?;
        state.serialize_field("month", &format!("{:02}", self.month))?;
        state.serialize_field("day", &format!("{:02}", self.day))?;
        state.serialize_field("separator", &self.separator)?;
        state.serialize_field("serial", &self.serial)?;
        state.serialize_field("checkDigit", &self.check_digit.to_string())?;
        state.serialize_field("birthDate", &self.birth_date)?;
        state.serialize_field("coordinationNumber", &self.coordination)?;
        state.serialize_field("interimNumber", &self.is_interim_number())?;
        state.end()
    }
}

fn reject(reason: PersonalIdRejection, len: usize) -> IdError {
    debug!(reason = reason.as_str(), len, "rejected personal identity number");
    IdError::personal(reason)
}

fn match_grammar(s: &str) -> Option<Captures<'_>> {
    if !s.is_ascii() {
        return None;
    }
    match_layout(s, true).or_else(|| match_layout(s, false))
}

fn match_layout(s: &str, with_century: bool) -> Option<Captures<'_>> {
    let date_len = if with_century { 8 } else { 6 };
    if s.len() < date_len {
        return None;
    }
    let (date, rest) = s.split_at(date_len);
    if !is_digits(date) {
        return None;
    }

    let (separator, rest) = match rest.chars().next().and_then(Separator::from_char) {
        Some(sep) => (Some(sep), &rest[1..]),
        None => (None, rest),
    };
    if rest.len() != 4 {
        return None;
    }
    let (serial, check) = rest.split_at(3);
    if !is_valid_serial(serial) || !is_digits(check) {
        return None;
    }

    let (century, ymd) = if with_century {
        (Some(&date[..2]), &date[2..])
    } else {
        (None, date)
    };

    Some(Captures {
        century,
        year: &ymd[0..2],
        month: &ymd[2..4],
        day: &ymd[4..6],
        separator,
        serial,
        check_digit: check.as_bytes()[0] - b'0',
    })
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_valid_serial(serial: &str) -> bool {
    let mut chars = serial.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => is_digits(serial) && serial != "000",
        Some(c) if INTERIM_LETTERS.contains(&c) => is_digits(chars.as_str()),
        _ => false,
    }
}

fn interim_letter(serial: &str) -> Option<char> {
    serial.chars().find(|c| INTERIM_LETTERS.contains(c))
}

fn serial_for_checksum(serial: &str) -> String {
    serial
        .chars()
        .map(|c| if INTERIM_LETTERS.contains(&c) { '1' } else { c })
        .collect()
}

/// Value of a two-character ASCII digit slice.
fn two_digits(s: &str) -> u8 {
    s.bytes().fold(0u8, |acc, b| acc * 10 + (b - b'0'))
}
