//! Parse options and environment-driven settings.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::format::{FormatConfig, OutputStyle, Separator};

/// Options controlling which personal identity number variants are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Accept coordination numbers (day of month plus 60).
    pub allow_coordination_number: bool,

    /// Accept interim numbers (a letter as the first serial character).
    pub allow_interim_number: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_coordination_number: true,
            allow_interim_number: false,
        }
    }
}

impl ParseOptions {
    /// Returns a copy with coordination numbers allowed or rejected.
    #[must_use]
    pub const fn coordination_numbers(mut self, allow: bool) -> Self {
        self.allow_coordination_number = allow;
        self
    }

    /// Returns a copy with interim numbers allowed or rejected.
    #[must_use]
    pub const fn interim_numbers(mut self, allow: bool) -> Self {
        self.allow_interim_number = allow;
        self
    }
}

/// Environment variable for [`ParseOptions::allow_coordination_number`].
pub const ENV_ALLOW_COORDINATION: &str = "SWID_ALLOW_COORDINATION_NUMBER";
/// Environment variable for [`ParseOptions::allow_interim_number`].
pub const ENV_ALLOW_INTERIM: &str = "SWID_ALLOW_INTERIM_NUMBER";
/// Environment variable for [`FormatConfig::style`].
pub const ENV_FORMAT_STYLE: &str = "SWID_FORMAT_STYLE";
/// Environment variable for [`FormatConfig::separator`].
pub const ENV_FORMAT_SEPARATOR: &str = "SWID_FORMAT_SEPARATOR";

/// Parse and format defaults for a host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub parse: ParseOptions,
    pub format: FormatConfig,
}

impl Settings {
    /// Load settings from environment variables.
    ///
    /// Unset variables keep their defaults. Unparseable values are logged
    /// and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let allow_coordination_number = read(&lookup, ENV_ALLOW_COORDINATION, parse_bool)
            .unwrap_or(defaults.parse.allow_coordination_number);

        let allow_interim_number = read(&lookup, ENV_ALLOW_INTERIM, parse_bool)
            .unwrap_or(defaults.parse.allow_interim_number);

        let style = read(&lookup, ENV_FORMAT_STYLE, |s| s.parse::<OutputStyle>().ok())
            .unwrap_or(defaults.format.style);

        let separator = read(&lookup, ENV_FORMAT_SEPARATOR, |s| s.parse::<Separator>().ok())
            .or(defaults.format.separator);

        Self {
            parse: ParseOptions {
                allow_coordination_number,
                allow_interim_number,
            },
            format: FormatConfig { style, separator },
        }
    }
}

fn read<F, T>(lookup: &F, key: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    let parsed = parse(&raw);
    if parsed.is_none() {
        warn!(key, value = %raw, "ignoring unparseable setting");
    }
    parsed
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
