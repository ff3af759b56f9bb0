//! Error types for identifier parsing and validation.

use thiserror::Error;

/// Why a personal identity number was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonalIdRejection {
    /// Length after whitespace removal is outside 10..=13.
    Length,
    /// The input does not match the personal identity number grammar.
    Pattern,
    /// The month field is 20 or above, which belongs to organisation numbers.
    OrganisationMonth,
    /// Neither the ordinary nor the coordination reading is a calendar date.
    Date,
    /// The check digit does not match.
    Checksum,
    /// A coordination number was supplied but the options disallow them.
    CoordinationNotAllowed,
    /// An interim number was supplied but the options disallow them.
    InterimNotAllowed,
}

impl PersonalIdRejection {
    /// Short machine-friendly label, used as a structured log field.
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonalIdRejection::Length => "length",
            PersonalIdRejection::Pattern => "pattern",
            PersonalIdRejection::OrganisationMonth => "organisation_month",
            PersonalIdRejection::Date => "date",
            PersonalIdRejection::Checksum => "checksum",
            PersonalIdRejection::CoordinationNotAllowed => "coordination_not_allowed",
            PersonalIdRejection::InterimNotAllowed => "interim_not_allowed",
        }
    }
}

impl std::fmt::Display for PersonalIdRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an organisation number was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrgIdRejection {
    /// Not exactly 10 characters once normalised.
    Length,
    /// A character other than an ASCII digit remained after normalisation.
    NonDigit,
    /// Digits 3-4 are below 20, so this is not an organisation number.
    PseudoMonth,
    /// The check digit does not match.
    Checksum,
}

impl OrgIdRejection {
    /// Short machine-friendly label, used as a structured log field.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrgIdRejection::Length => "length",
            OrgIdRejection::NonDigit => "non_digit",
            OrgIdRejection::PseudoMonth => "pseudo_month",
            OrgIdRejection::Checksum => "checksum",
        }
    }
}

impl std::fmt::Display for OrgIdRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when parsing identifiers or reading their fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input is not a valid Swedish personal identity number.
    #[error("invalid Swedish personal identity number ({reason})")]
    InvalidPersonalId { reason: PersonalIdRejection },

    /// The input is not a valid Swedish organisation number.
    #[error("invalid Swedish organisation number ({reason})")]
    InvalidOrgId { reason: OrgIdRejection },

    /// The input matched neither identifier family.
    ///
    /// Both per-family errors are kept for callers that want them; the
    /// rendered message stays generic.
    #[error("invalid Swedish identity number")]
    InvalidIdentifier {
        personal: Box<IdError>,
        organisation: Box<IdError>,
    },

    /// An accessor was applied to the wrong identifier family.
    #[error("{operation} only applies to {expected} numbers, got {actual} number")]
    TypeMismatch {
        operation: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

impl IdError {
    pub(crate) fn personal(reason: PersonalIdRejection) -> Self {
        IdError::InvalidPersonalId { reason }
    }

    pub(crate) fn organisation(reason: OrgIdRejection) -> Self {
        IdError::InvalidOrgId { reason }
    }

    /// Returns true if this error came from the personal identity number parser.
    pub fn is_personal_error(&self) -> bool {
        matches!(self, IdError::InvalidPersonalId { .. })
    }

    /// Returns true if this error came from the organisation number parser.
    pub fn is_organisation_error(&self) -> bool {
        matches!(self, IdError::InvalidOrgId { .. })
    }

    /// Returns true if this is the dispatcher's "matched nothing" error.
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, IdError::InvalidIdentifier { .. })
    }

    /// Returns true if an accessor was applied to the wrong identifier family.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, IdError::TypeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unified_error_message_is_generic() {
        let err = IdError::InvalidIdentifier {
            personal: Box::new(IdError::personal(PersonalIdRejection::Checksum)),
            organisation: Box::new(IdError::organisation(OrgIdRejection::PseudoMonth)),
        };
        assert_eq!(err.to_string(), "invalid Swedish identity number");
        assert!(err.is_invalid_identifier());
        assert!(!err.is_personal_error());
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = IdError::TypeMismatch {
            operation: "age",
            expected: "personal identity",
            actual: "organisation",
        };
        assert_eq!(
            err.to_string(),
            "age only applies to personal identity numbers, got organisation number"
        );
        assert!(err.is_type_mismatch());
    }

    #[test]
    fn test_reason_in_message() {
        let err = IdError::organisation(OrgIdRejection::Checksum);
        assert!(err.is_organisation_error());
        assert_eq!(
            err.to_string(),
            "invalid Swedish organisation number (checksum)"
        );
    }
}
