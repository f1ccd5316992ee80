//! Date picker settings built from defaults and caller overrides
//!
//! [`Settings`] is an immutable value: build it once with
//! [`Settings::from_overrides`] and pass it by reference to whatever needs it.

use crate::presets::{Preset, PresetTable};
use crate::ParseOptions;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Resolved settings for a date picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// BCP 47 language tag used for labels
    pub locale: String,
    pub ok_text: String,
    pub discard_text: String,
    pub ok_class: Vec<String>,
    pub discard_class: Vec<String>,
    pub presets: PresetTable,
    /// Options for parsing typed input
    pub parse: ParseOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            ok_text: "Ok".to_string(),
            discard_text: "Cancel".to_string(),
            ok_class: vec!["ok-button".to_string()],
            discard_class: vec!["discardClass".to_string()],
            presets: PresetTable::default(),
            parse: ParseOptions::default(),
        }
    }
}

/// Caller supplied settings; anything left out keeps its default
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SettingsOverrides {
    pub locale: Option<String>,
    pub ok_text: Option<String>,
    pub discard_text: Option<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub ok_class: Option<Vec<String>>,
    #[serde(deserialize_with = "one_or_many")]
    pub discard_class: Option<Vec<String>>,
    pub presets: Option<PresetOverrides>,
    pub parse: Option<ParseOptions>,
}

/// Per calendar type preset replacements
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PresetOverrides {
    pub single: Option<Vec<Preset>>,
    pub multi: Option<Vec<Preset>>,
    pub range: Option<Vec<Preset>>,
}

impl Settings {
    /// Defaults with `overrides` applied on top
    pub fn from_overrides(overrides: SettingsOverrides) -> Self {
        Self::default().with_overrides(overrides)
    }

    /// Apply `overrides` as a shallow layer over `self`.
    ///
    /// Empty strings and empty class lists count as not set. A preset group
    /// that is present replaces the whole group.
    pub fn with_overrides(self, overrides: SettingsOverrides) -> Self {
        let presets = match overrides.presets {
            Some(p) => PresetTable {
                single: p.single.unwrap_or(self.presets.single),
                multi: p.multi.unwrap_or(self.presets.multi),
                range: p.range.unwrap_or(self.presets.range),
            },
            None => self.presets,
        };

        let settings = Self {
            locale: non_empty(overrides.locale).unwrap_or(self.locale),
            ok_text: non_empty(overrides.ok_text).unwrap_or(self.ok_text),
            discard_text: non_empty(overrides.discard_text).unwrap_or(self.discard_text),
            ok_class: non_empty_list(overrides.ok_class).unwrap_or(self.ok_class),
            discard_class: non_empty_list(overrides.discard_class).unwrap_or(self.discard_class),
            presets,
            parse: overrides.parse.unwrap_or(self.parse),
        };
        debug!(locale = %settings.locale, "settings resolved");
        settings
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn non_empty_list(value: Option<Vec<String>>) -> Option<Vec<String>> {
    value.filter(|v| !v.is_empty())
}

/// Accept either `"class"` or `["a", "b"]`
fn one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(Option::<OneOrMany>::deserialize(deserializer)?.map(|v| match v {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
    }))
}
