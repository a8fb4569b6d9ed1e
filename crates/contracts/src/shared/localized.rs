use serde::{Deserialize, Deserializer, Serialize};

/// The two content languages of the catalog. The active language only
/// affects which side of a [`LocalizedText`] the viewer shows; persisted
/// content always carries both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Uk,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Uk, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Uk => "uk",
            Language::En => "en",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::Uk => "Українська",
            Language::En => "English",
        }
    }
}

/// One string per supported language. Both keys are always present,
/// possibly as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub uk: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(uk: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            uk: uk.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Uk => &self.uk,
            Language::En => &self.en,
        }
    }

    pub fn set(&mut self, language: Language, text: impl Into<String>) {
        match language {
            Language::Uk => self.uk = text.into(),
            Language::En => self.en = text.into(),
        }
    }

    /// True when neither language carries non-whitespace content.
    pub fn is_blank(&self) -> bool {
        self.uk.trim().is_empty() && self.en.trim().is_empty()
    }
}

/// Pre-localization snapshots stored values as plain strings. Those are
/// upgraded on read: the legacy string becomes the Ukrainian side and the
/// English side starts empty. Serialization always emits the record shape.
impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Record {
                #[serde(default)]
                uk: String,
                #[serde(default)]
                en: String,
            },
            Legacy(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Record { uk, en } => LocalizedText { uk, en },
            Repr::Legacy(uk) => LocalizedText {
                uk,
                en: String::new(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_shape_round_trips() {
        let text = LocalizedText::new("Кухоль", "Mug");
        let json = serde_json::to_string(&text).unwrap();
        assert_eq!(json, r#"{"uk":"Кухоль","en":"Mug"}"#);
        let back: LocalizedText = serde_json::from_str(&json).unwrap();
        assert_eq!(back, text);
    }

    #[test]
    fn legacy_plain_string_upgrades() {
        let back: LocalizedText = serde_json::from_str(r#""Старий опис""#).unwrap();
        assert_eq!(back.uk, "Старий опис");
        assert_eq!(back.en, "");
    }

    #[test]
    fn language_wire_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Uk).unwrap(), r#""uk""#);
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), r#""en""#);
    }

    #[test]
    fn blank_detection_ignores_whitespace() {
        assert!(LocalizedText::new("  ", "").is_blank());
        assert!(!LocalizedText::new("", "Mug").is_blank());
    }
}
