//! # swid-id
//!
//! Parsing, validation and formatting of Swedish personal identity numbers
//! (personnummer) and organisation numbers (organisationsnummer).
//!
//! ## Design Principles
//!
//! - Parsed records are immutable and always valid; there are no partial results
//! - Every layout produced by formatting parses back to the same record
//! - The two families are typed separately; [`IdentifierVariant`] tags either
//! - "Today" is an explicit [`Clock`]; only the convenience functions read the
//!   system date
//!
//! ## Formats
//!
//! | family       | long           | separated       |
//! |--------------|----------------|-----------------|
//! | personal     | `194608239986` | `460823-9986`   |
//! | organisation | `165567037485` | `556703-7485`   |
//!
//! Personal identity numbers of holders aged 100 or more use `+` as the
//! separator in the short layouts. Organisation numbers have a
//! pseudo-month of 20 or more, which keeps the families disjoint.
//!
//! ## Example
//!
//! ```
//! use swid_id::{classify, format, FormatConfig, OutputStyle, IdentifierKind};
//!
//! let id = classify("556703-7485").unwrap();
//! assert_eq!(id.kind(), IdentifierKind::Organisation);
//! assert_eq!(format(&id, &FormatConfig::style(OutputStyle::Long)), "165567037485");
//! ```

mod calendar;
mod checksum;
mod clock;
mod error;
mod format;
mod identifier;
mod legal_form;
mod options;
mod org;
mod personal;

use chrono::NaiveDate;

pub use calendar::{days_in_month, is_leap_year, is_valid_date, years_between};
pub use checksum::check_digit;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{IdError, OrgIdRejection, PersonalIdRejection};
pub use format::{FormatConfig, OutputStyle, Separator};
pub use identifier::{IdentifierKind, IdentifierVariant};
pub use legal_form::{LegalForm, LegalFormCode, ENSKILD_FIRMA, ORGANISATION_TYPES};
pub use options::{ParseOptions, Settings};
pub use org::OrgId;
pub use personal::{PersonalId, INTERIM_LETTERS};

/// Classifies and parses `input` with default options and the system date.
pub fn classify(input: &str) -> Result<IdentifierVariant, IdError> {
    classify_with(input, &ParseOptions::default(), &SystemClock)
}

/// Classifies and parses `input` with explicit options and clock.
pub fn classify_with(
    input: &str,
    options: &ParseOptions,
    clock: &impl Clock,
) -> Result<IdentifierVariant, IdError> {
    IdentifierVariant::classify(input, options, clock)
}

/// Returns true if `input` is a valid identifier of either family.
pub fn is_valid(input: &str, options: &ParseOptions) -> bool {
    is_valid_with(input, options, &SystemClock)
}

/// Returns true if `input` is a valid identifier of either family as of the
/// clock's date.
pub fn is_valid_with(input: &str, options: &ParseOptions, clock: &impl Clock) -> bool {
    classify_with(input, options, clock).is_ok()
}

/// Renders a parsed identifier.
pub fn format(id: &IdentifierVariant, config: &FormatConfig) -> String {
    id.format(config)
}

/// Parses a personal identity number using the system date.
pub fn parse_personal(input: &str, options: &ParseOptions) -> Result<PersonalId, IdError> {
    PersonalId::parse(input, options)
}

/// Returns true if `input` is a valid personal identity number.
pub fn is_valid_personal(input: &str, options: &ParseOptions) -> bool {
    PersonalId::is_valid(input, options)
}

/// Parses an organisation number.
pub fn parse_organisation(input: &str) -> Result<OrgId, IdError> {
    OrgId::parse(input)
}

/// Returns true if `input` is a valid organisation number.
pub fn is_valid_organisation(input: &str) -> bool {
    OrgId::is_valid(input)
}

/// Legal form of a parsed identifier.
pub fn legal_form_of(id: &IdentifierVariant) -> LegalForm {
    id.legal_form()
}

/// Legal form of a raw identifier string, classifying it first.
pub fn legal_form_of_str(input: &str) -> Result<LegalForm, IdError> {
    classify(input).map(|id| id.legal_form())
}

/// Same as [`legal_form_of`].
pub fn organisation_type(id: &IdentifierVariant) -> LegalForm {
    legal_form_of(id)
}

/// Age in whole years as of today's system date.
pub fn age(id: &IdentifierVariant) -> Result<i32, IdError> {
    id.age(&SystemClock)
}

/// Age in whole years as of the clock's date.
pub fn age_with_clock(id: &IdentifierVariant, clock: &impl Clock) -> Result<i32, IdError> {
    id.age(clock)
}

pub fn birth_date(id: &IdentifierVariant) -> Result<NaiveDate, IdError> {
    id.birth_date()
}

pub fn is_male(id: &IdentifierVariant) -> Result<bool, IdError> {
    id.is_male()
}

pub fn is_female(id: &IdentifierVariant) -> Result<bool, IdError> {
    id.is_female()
}

pub fn is_coordination_number(id: &IdentifierVariant) -> Result<bool, IdError> {
    id.is_coordination_number()
}

pub fn is_interim_number(id: &IdentifierVariant) -> Result<bool, IdError> {
    id.is_interim_number()
}
