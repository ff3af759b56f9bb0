//! Classification of an arbitrary string into one identifier family.
//!
//! Personal identity numbers have a month field below 20 and organisation
//! numbers a pseudo-month of 20 or more, so at most one family can accept
//! any given input and the order of the attempts does not change the
//! outcome.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, trace};

use crate::clock::Clock;
use crate::error::IdError;
use crate::format::FormatConfig;
use crate::legal_form::{LegalForm, ENSKILD_FIRMA};
use crate::options::ParseOptions;
use crate::org::OrgId;
use crate::personal::PersonalId;

/// Discriminant of an [`IdentifierVariant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    Personal,
    Organisation,
}

impl IdentifierKind {
    /// Human-readable family name used in error messages.
    pub const fn description(self) -> &'static str {
        match self {
            IdentifierKind::Personal => "personal identity",
            IdentifierKind::Organisation => "organisation",
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// A parsed Swedish identifier of either family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum IdentifierVariant {
    Personal(PersonalId),
    Organisation(OrgId),
}

impl IdentifierVariant {
    /// Classifies `input`, trying the organisation grammar first.
    ///
    /// On total failure both per-family errors are kept inside
    /// [`IdError::InvalidIdentifier`].
    pub fn classify(
        input: &str,
        options: &ParseOptions,
        clock: &impl Clock,
    ) -> Result<Self, IdError> {
        let organisation = match OrgId::parse(input) {
            Ok(org) => {
                trace!(kind = "organisation", "classified identifier");
                return Ok(IdentifierVariant::Organisation(org));
            }
            Err(err) => err,
        };

        let personal = match PersonalId::parse_with_clock(input, options, clock) {
            Ok(pnr) => {
                trace!(kind = "personal", "classified identifier");
                return Ok(IdentifierVariant::Personal(pnr));
            }
            Err(err) => err,
        };

        debug!(
            personal = %personal,
            organisation = %organisation,
            "input matched neither identifier family"
        );
        Err(IdError::InvalidIdentifier {
            personal: Box::new(personal),
            organisation: Box::new(organisation),
        })
    }

    pub fn kind(&self) -> IdentifierKind {
        match self {
            IdentifierVariant::Personal(_) => IdentifierKind::Personal,
            IdentifierVariant::Organisation(_) => IdentifierKind::Organisation,
        }
    }

    pub fn as_personal(&self) -> Option<&PersonalId> {
        match self {
            IdentifierVariant::Personal(pnr) => Some(pnr),
            IdentifierVariant::Organisation(_) => None,
        }
    }

    pub fn as_organisation(&self) -> Option<&OrgId> {
        match self {
            IdentifierVariant::Organisation(org) => Some(org),
            IdentifierVariant::Personal(_) => None,
        }
    }

    /// The personal record, or a type mismatch naming `operation`.
    pub fn require_personal(&self, operation: &'static str) -> Result<&PersonalId, IdError> {
        self.as_personal().ok_or(IdError::TypeMismatch {
            operation,
            expected: IdentifierKind::Personal.description(),
            actual: self.kind().description(),
        })
    }

    /// The organisation record, or a type mismatch naming `operation`.
    pub fn require_organisation(&self, operation: &'static str) -> Result<&OrgId, IdError> {
        self.as_organisation().ok_or(IdError::TypeMismatch {
            operation,
            expected: IdentifierKind::Organisation.description(),
            actual: self.kind().description(),
        })
    }

    /// Renders the identifier in the requested layout.
    pub fn format(&self, config: &FormatConfig) -> String {
        match self {
            IdentifierVariant::Personal(pnr) => pnr.format(config),
            IdentifierVariant::Organisation(org) => org.format(config),
        }
    }

    /// Legal form: sole proprietorship for people, the group table for
    /// organisations.
    pub fn legal_form(&self) -> LegalForm {
        match self {
            IdentifierVariant::Personal(_) => ENSKILD_FIRMA,
            IdentifierVariant::Organisation(org) => org.legal_form(),
        }
    }

    pub fn age(&self, clock: &impl Clock) -> Result<i32, IdError> {
        Ok(self.require_personal("age")?.age(clock))
    }

    pub fn birth_date(&self) -> Result<NaiveDate, IdError> {
        Ok(self.require_personal("birth_date")?.birth_date())
    }

    pub fn is_male(&self) -> Result<bool, IdError> {
        Ok(self.require_personal("is_male")?.is_male())
    }

    pub fn is_female(&self) -> Result<bool, IdError> {
        Ok(self.require_personal("is_female")?.is_female())
    }

    pub fn is_coordination_number(&self) -> Result<bool, IdError> {
        Ok(self
            .require_personal("is_coordination_number")?
            .is_coordination_number())
    }

    pub fn is_interim_number(&self) -> Result<bool, IdError> {
        Ok(self.require_personal("is_interim_number")?.is_interim_number())
    }
}

impl From<PersonalId> for IdentifierVariant {
    fn from(pnr: PersonalId) -> Self {
        IdentifierVariant::Personal(pnr)
    }
}

impl From<OrgId> for IdentifierVariant {
    fn from(org: OrgId) -> Self {
        IdentifierVariant::Organisation(org)
    }
}

impl std::fmt::Display for IdentifierVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentifierVariant::Personal(pnr) => std::fmt::Display::fmt(pnr, f),
            IdentifierVariant::Organisation(org) => std::fmt::Display::fmt(org, f),
        }
    }
}

impl std::str::FromStr for IdentifierVariant {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::classify(s, &ParseOptions::default(), &crate::clock::SystemClock)
    }
}
