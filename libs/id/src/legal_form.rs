//! Legal form (bolagsform) lookup by group digit.
//!
//! The first digit of an organisation number names the group of legal
//! forms the organisation belongs to. Digits 0 and 4 are unassigned.

use std::borrow::Cow;

use serde::Serialize;

/// Machine-readable legal form code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegalFormCode {
    Dodsbo,
    StatRegionerKommuner,
    UtlandskaForetag,
    Aktiebolag,
    Samfallighet,
    EkonomiskaForeningar,
    IdeellaForeningarStiftelser,
    HandelsbolagKommanditbolag,
    /// Sole proprietorship: any personal identity number.
    EnskildFirma,
    /// A group digit with no assigned legal form.
    Unknown,
}

impl LegalFormCode {
    /// Returns the code in `SCREAMING_SNAKE_CASE`.
    pub const fn as_str(self) -> &'static str {
        match self {
            LegalFormCode::Dodsbo => "DODSBO",
            LegalFormCode::StatRegionerKommuner => "STAT_REGIONER_KOMMUNER",
            LegalFormCode::UtlandskaForetag => "UTLANDSKA_FORETAG",
            LegalFormCode::Aktiebolag => "AKTIEBOLAG",
            LegalFormCode::Samfallighet => "SAMFALLIGHET",
            LegalFormCode::EkonomiskaForeningar => "EKONOMISKA_FORENINGAR",
            LegalFormCode::IdeellaForeningarStiftelser => "IDEELLA_FORENINGAR_STIFTELSER",
            LegalFormCode::HandelsbolagKommanditbolag => "HANDELSBOLAG_KOMMANDITBOLAG",
            LegalFormCode::EnskildFirma => "ENSKILD_FIRMA",
            LegalFormCode::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for LegalFormCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A legal form: code plus human-readable (Swedish) name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LegalForm {
    pub code: LegalFormCode,
    pub name: Cow<'static, str>,
}

impl LegalForm {
    const fn known(code: LegalFormCode, name: &'static str) -> Self {
        Self {
            code,
            name: Cow::Borrowed(name),
        }
    }

    /// Looks up the legal form for an organisation group digit.
    ///
    /// Unassigned digits yield an [`LegalFormCode::Unknown`] form naming
    /// the digit rather than an error.
    pub fn for_group(digit: u8) -> Self {
        ORGANISATION_TYPES
            .iter()
            .find(|(group, _)| *group == digit)
            .map(|(_, form)| form.clone())
            .unwrap_or_else(|| Self {
                code: LegalFormCode::Unknown,
                name: Cow::Owned(format!("Unknown group ({digit})")),
            })
    }
}

impl std::fmt::Display for LegalForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Sole proprietorship, the legal form of any personal identity number.
pub const ENSKILD_FIRMA: LegalForm = LegalForm::known(LegalFormCode::EnskildFirma, "Enskild firma");

/// Group digit to legal form.
pub static ORGANISATION_TYPES: [(u8, LegalForm); 8] = [
    (1, LegalForm::known(LegalFormCode::Dodsbo, "Dödsbon")),
    (
        2,
        LegalForm::known(
            LegalFormCode::StatRegionerKommuner,
            "Stat, regioner, kommuner, församlingar",
        ),
    ),
    (
        3,
        LegalForm::known(
            LegalFormCode::UtlandskaForetag,
            "Utländska företag som bedriver näringsverksamhet eller äger fastigheter i Sverige",
        ),
    ),
    (5, LegalForm::known(LegalFormCode::Aktiebolag, "Aktiebolag")),
    (6, LegalForm::known(LegalFormCode::Samfallighet, "Samfällighet")),
    (
        7,
        LegalForm::known(
            LegalFormCode::EkonomiskaForeningar,
            "Ekonomiska föreningar, bostadsrättsföreningar och samfällighetsföreningar",
        ),
    ),
    (
        8,
        LegalForm::known(
            LegalFormCode::IdeellaForeningarStiftelser,
            "Ideella föreningar och stiftelser",
        ),
    ),
    (
        9,
        LegalForm::known(
            LegalFormCode::HandelsbolagKommanditbolag,
            "Handelsbolag och kommanditbolag",
        ),
    ),
];
