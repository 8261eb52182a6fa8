//! Supported snippet languages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ModelError;

/// Language of a snippet
///
/// Stored and serialized by its short code (`py`, `sql`, `rs`). New
/// languages are added as new variants only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "py")]
    Python,
    #[serde(rename = "sql")]
    Sql,
    #[serde(rename = "rs")]
    Rust,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::Python, Self::Sql, Self::Rust];

    /// Short code used in storage and on the command line
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Python => "py",
            Self::Sql => "sql",
            Self::Rust => "rs",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::Sql => "SQL",
            Self::Rust => "Rust",
        }
    }

    /// File extension, used to pick a syntax for highlighting
    #[must_use]
    pub const fn extension(self) -> &'static str {
        self.code()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "py" | "python" => Ok(Self::Python),
            "sql" => Ok(Self::Sql),
            "rs" | "rust" => Ok(Self::Rust),
            _ => Err(ModelError::UnknownLanguage(s.to_string())),
        }
    }
}
