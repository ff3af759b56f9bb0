//! Swedish organisation numbers (organisationsnummer).
//!
//! Ten digits `GGMMDDNNNC`: a group whose first digit names the legal
//! form, a pseudo-date whose month field is always 20 or more, a serial
//! and a Luhn check digit over the first nine. A twelve-digit form with
//! the literal prefix `16` is also accepted.

use serde::ser::SerializeStruct;
use tracing::debug;

use crate::checksum;
use crate::error::{IdError, OrgIdRejection};
use crate::format::{FormatConfig, OutputStyle, Separator};
use crate::legal_form::LegalForm;

/// Prefix of the twelve-digit layout.
pub const LONG_PREFIX: &str = "16";

/// Smallest pseudo-month; anything lower is a personal identity number.
pub const MIN_PSEUDO_MONTH: u8 = 20;

/// A validated organisation number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrgId {
    raw: String,
}

impl OrgId {
    /// Parses an organisation number.
    ///
    /// Whitespace and `+`/`-` characters are removed first.
    pub fn parse(input: &str) -> Result<Self, IdError> {
        let normalized: String = input
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '+' && *c != '-')
            .collect();

        let digits = match normalized.strip_prefix(LONG_PREFIX) {
            Some(core) if normalized.len() == 12 => core,
            _ => normalized.as_str(),
        };

        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(reject(OrgIdRejection::NonDigit));
        }
        if digits.len() != 10 {
            return Err(reject(OrgIdRejection::Length));
        }

        let pseudo_month = number(&digits[2..4]);
        if pseudo_month < MIN_PSEUDO_MONTH {
            return Err(reject(OrgIdRejection::PseudoMonth));
        }

        if !checksum::is_valid(digits) {
            return Err(reject(OrgIdRejection::Checksum));
        }

        Ok(Self {
            raw: digits.to_string(),
        })
    }

    /// Returns true if the input parses.
    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    /// The canonical ten-digit form.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// First digit, the legal-form key.
    pub fn group_digit(&self) -> u8 {
        number(&self.raw[..1])
    }

    /// First two digits.
    pub fn group(&self) -> &str {
        &self.raw[..2]
    }

    pub fn pseudo_month(&self) -> u8 {
        number(&self.raw[2..4])
    }

    pub fn pseudo_day(&self) -> u8 {
        number(&self.raw[4..6])
    }

    pub fn serial(&self) -> &str {
        &self.raw[6..9]
    }

    pub fn check_digit(&self) -> u8 {
        number(&self.raw[9..])
    }

    /// The legal form named by the group digit.
    pub fn legal_form(&self) -> LegalForm {
        LegalForm::for_group(self.group_digit())
    }

    /// Renders the number in the requested layout.
    pub fn format(&self, config: &FormatConfig) -> String {
        let sep = config.separator.unwrap_or(Separator::Dash);
        let (head, tail) = self.raw.split_at(6);

        match config.style {
            OutputStyle::Long => format!("{LONG_PREFIX}{}", self.raw),
            OutputStyle::Short => self.raw.clone(),
            OutputStyle::Separated => format!("{head}{sep}{tail}"),
            OutputStyle::SeparatedLong => format!("{LONG_PREFIX}{head}{sep}{tail}"),
        }
    }
}

impl std::fmt::Display for OrgId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(&FormatConfig::default()))
    }
}

impl std::str::FromStr for OrgId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for OrgId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("OrgId", 7)?;
        state.serialize_field("groupDigit", &self.raw[..1])?;
        state.serialize_field("group", self.group())?;
        state.serialize_field("pseudoMonth", &self.raw[2..4])?;
        state.serialize_field("pseudoDay", &self.raw[4..6])?;
        state.serialize_field("serial", self.serial())?;
        state.serialize_field("checkDigit", &self.raw[9..])?;
        state.serialize_field("raw", &self.raw)?;
        state.end()
    }
}

fn reject(reason: OrgIdRejection) -> IdError {
    debug!(reason = reason.as_str(), "rejected organisation number");
    IdError::organisation(reason)
}

/// Value of a short ASCII digit slice.
fn number(s: &str) -> u8 {
    s.bytes().fold(0u8, |acc, b| acc * 10 + (b - b'0'))
}
