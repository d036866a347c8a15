use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Grammar dialect of an EO+ document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Flavor {
    /// The official quest engine
    Official,
    /// The EOSERV server emulator
    #[default]
    Eoserv,
}

impl Flavor {
    pub const ALL: [Flavor; 2] = [Flavor::Official, Flavor::Eoserv];

    pub fn as_str(self) -> &'static str {
        match self {
            Flavor::Official => "official",
            Flavor::Eoserv => "eoserv",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown flavor name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown EO+ flavor '{name}' (expected 'official' or 'eoserv')")]
pub struct FlavorError {
    pub name: String,
}

impl FromStr for Flavor {
    type Err = FlavorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flavor::ALL
            .into_iter()
            .find(|flavor| flavor.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FlavorError { name: s.to_string() })
    }
}
