//! Analyzer configuration
//!
//! Mirrors the editor-settings shape (`language`, `diagnostics`, `trace`).
//! With the `serde` feature the structs deserialize from that JSON with
//! camelCase keys; missing sections fall back to their defaults.

use crate::base::Flavor;

/// Top-level settings for one analysis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Settings {
    pub trace: TraceSettings,
    pub language: LanguageSettings,
    pub diagnostics: DiagnosticsSettings,
}

impl Settings {
    pub fn with_flavor(flavor: Flavor) -> Self {
        Self {
            language: LanguageSettings { flavor },
            ..Self::default()
        }
    }

    pub fn flavor(&self) -> Flavor {
        self.language.flavor
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct LanguageSettings {
    pub flavor: Flavor,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct DiagnosticsSettings {
    /// Non-lowercase keyword spellings that are accepted without a warning
    pub alternate_keyword_casings: Vec<String>,
}

impl DiagnosticsSettings {
    pub fn allows_keyword_casing(&self, text: &str) -> bool {
        self.alternate_keyword_casings.iter().any(|casing| casing == text)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct TraceSettings {
    pub server: TraceLevel,
}

/// How much the host should log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TraceLevel {
    #[default]
    Off,
    Messages,
    Verbose,
}

impl TraceLevel {
    /// Most detailed `tracing` level a subscriber should enable
    pub fn max_level(self) -> Option<tracing::Level> {
        match self {
            TraceLevel::Off => None,
            TraceLevel::Messages => Some(tracing::Level::DEBUG),
            TraceLevel::Verbose => Some(tracing::Level::TRACE),
        }
    }
}
