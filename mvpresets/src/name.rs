//! Noms de presets.
//!
//! Le nom d'un preset sert directement de nom de fichier : seuls les
//! caractères `[A-Za-z0-9_-]` sont acceptés, ce qui exclut les séparateurs
//! de chemin, `.`/`..` et les noms vides.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Nom de preset validé
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PresetName(String);

impl PresetName {
    pub const MAX_LEN: usize = 128;

    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if Self::is_valid(&name) {
            Ok(Self(name))
        } else {
            Err(Error::InvalidName(name))
        }
    }

    pub fn is_valid(name: &str) -> bool {
        !name.is_empty()
            && name.len() <= Self::MAX_LEN
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PresetName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for PresetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_names() {
        for name in ["a", "studio-1", "Control_Room", "2024"] {
            assert!(PresetName::new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_path_like_names() {
        for name in ["", "..", "../etc/passwd", "a/b", "a\\b", "name.csv", "with space", "é"] {
            let err = PresetName::new(name).unwrap_err();
            assert!(matches!(err, Error::InvalidName(_)), "{name:?} should be rejected");
        }
    }

    #[test]
    fn rejects_overlong_names() {
        let name = "x".repeat(PresetName::MAX_LEN + 1);
        assert!(PresetName::new(name).is_err());
        assert!(PresetName::new("x".repeat(PresetName::MAX_LEN)).is_ok());
    }

    #[test]
    fn parses_from_str() {
        let name: PresetName = "lobby".parse().unwrap();
        assert_eq!(name.as_str(), "lobby");
        assert_eq!(name.to_string(), "lobby");
    }
}
