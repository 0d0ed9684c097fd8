//! Vim input modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A logical vim input context a key binding can be active in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Normal,
    Visual,
    Insert,
    Command,
    Operator,
    Lang,
}

impl Mode {
    /// All modes, in declaration order.
    pub const ALL: [Mode; 6] = [
        Mode::Normal,
        Mode::Visual,
        Mode::Insert,
        Mode::Command,
        Mode::Operator,
        Mode::Lang,
    ];

    /// Parse from a single-letter shorthand (the single-mode map command
    /// prefixes: n/v/i/c/o/l).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'n' => Some(Self::Normal),
            'v' => Some(Self::Visual),
            'i' => Some(Self::Insert),
            'c' => Some(Self::Command),
            'o' => Some(Self::Operator),
            'l' => Some(Self::Lang),
            _ => None,
        }
    }

    /// Parse from a mode name, vim alias, or shorthand letter.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "normal" | "n" => Some(Self::Normal),
            "visual" | "v" => Some(Self::Visual),
            "insert" | "i" => Some(Self::Insert),
            "command" | "command-line" | "cmdline" | "c" => Some(Self::Command),
            "operator" | "operator-pending" | "o" => Some(Self::Operator),
            "lang" | "lang-arg" | "l" => Some(Self::Lang),
            _ => None,
        }
    }

    /// Display name, matching the serialized form.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Visual => "visual",
            Self::Insert => "insert",
            Self::Command => "command",
            Self::Operator => "operator",
            Self::Lang => "lang",
        }
    }

    /// Shorthand character.
    pub fn shorthand(&self) -> char {
        match self {
            Self::Normal => 'n',
            Self::Visual => 'v',
            Self::Insert => 'i',
            Self::Command => 'c',
            Self::Operator => 'o',
            Self::Lang => 'l',
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error for a mode name outside the recognized enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized mode: {0:?}")]
pub struct InvalidMode(pub String);

impl FromStr for Mode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| InvalidMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_roundtrip() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_char(mode.shorthand()), Some(mode));
        }
    }

    #[test]
    fn name_roundtrip() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_name(mode.display_name()), Some(mode));
        }
    }

    #[test]
    fn parse_aliases() {
        assert_eq!(Mode::from_name("operator-pending"), Some(Mode::Operator));
        assert_eq!(Mode::from_name("cmdline"), Some(Mode::Command));
        assert_eq!(Mode::from_name("lang-arg"), Some(Mode::Lang));
        assert_eq!(Mode::from_name("  Visual "), Some(Mode::Visual));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(Mode::from_name("gibberish"), None);
        assert_eq!(
            "gibberish".parse::<Mode>(),
            Err(InvalidMode("gibberish".to_string()))
        );
    }

    #[test]
    fn serde_lowercase_names() {
        let json = serde_json::to_string(&Mode::Operator).unwrap();
        assert_eq!(json, "\"operator\"");
        let back: Mode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Mode::Operator);
    }
}
