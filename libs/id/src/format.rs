//! Output layouts shared by both identifier families.

use serde::{Deserialize, Serialize};

/// The character between the date part and the serial.
///
/// For personal identity numbers `+` marks a holder aged 100 or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Separator {
    #[default]
    #[serde(rename = "-")]
    Dash,
    #[serde(rename = "+")]
    Plus,
}

impl Separator {
    /// Returns the separator as a character.
    pub const fn as_char(self) -> char {
        match self {
            Separator::Dash => '-',
            Separator::Plus => '+',
        }
    }

    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Separator::Dash),
            '+' => Some(Separator::Plus),
            _ => None,
        }
    }
}

impl std::fmt::Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::str::FromStr for Separator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next().and_then(Separator::from_char), chars.next()) {
            (Some(sep), None) => Ok(sep),
            _ => Err(format!("unknown separator '{s}', expected '-' or '+'")),
        }
    }
}

/// String layout for a formatted identifier.
///
/// | style            | personal                  | organisation      |
/// |------------------|---------------------------|-------------------|
/// | `Long`           | `YYYYMMDDNNNC`            | `16NNNNNNNNNN`    |
/// | `Short`          | `YYMMDDNNNC`              | `NNNNNNNNNN`      |
/// | `Separated`      | `YYMMDD-NNNC`             | `NNNNNN-NNNN`     |
/// | `SeparatedLong`  | `YYYYMMDD-NNNC`           | `16NNNNNN-NNNN`   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputStyle {
    Long,
    Short,
    #[default]
    Separated,
    SeparatedLong,
}

impl OutputStyle {
    /// Returns the canonical name of the style.
    pub const fn as_str(self) -> &'static str {
        match self {
            OutputStyle::Long => "long",
            OutputStyle::Short => "short",
            OutputStyle::Separated => "separated",
            OutputStyle::SeparatedLong => "separatedLong",
        }
    }
}

impl std::fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "long" => Ok(OutputStyle::Long),
            "short" => Ok(OutputStyle::Short),
            "separated" => Ok(OutputStyle::Separated),
            "separatedlong" => Ok(OutputStyle::SeparatedLong),
            _ => Err(format!("unknown output style '{s}'")),
        }
    }
}

/// How to render an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Layout to produce.
    pub style: OutputStyle,

    /// Overrides the separator. When unset, personal identity numbers use
    /// the separator computed at parse time and organisation numbers use `-`.
    pub separator: Option<Separator>,
}

impl FormatConfig {
    /// A config with the given style and the default separator.
    pub const fn style(style: OutputStyle) -> Self {
        Self {
            style,
            separator: None,
        }
    }

    /// Returns a copy with the separator overridden.
    #[must_use]
    pub const fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = Some(separator);
        self
    }
}
