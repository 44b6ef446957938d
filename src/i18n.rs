//! Language selection and bilingual text.
//!
//! Every piece of catalog text exists in English and Hindi. Handlers take a
//! `lang` query parameter and pick one side with [`Bilingual::pick`].

use serde::{Deserialize, Serialize};

/// Display language. English is the default for missing or unknown values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    /// Parse a language code. Unknown codes fall back to English.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "hi" | "hindi" => Self::Hi,
            _ => Self::En,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// `?lang=` query extractor shared by content handlers.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LangQuery {
    #[serde(default)]
    pub lang: Language,
}

/// A value available in both site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bilingual<T> {
    pub en: T,
    pub hi: T,
}

impl<T> Bilingual<T> {
    pub const fn new(en: T, hi: T) -> Self {
        Self { en, hi }
    }

    pub fn pick(&self, lang: Language) -> &T {
        match lang {
            Language::En => &self.en,
            Language::Hi => &self.hi,
        }
    }
}

/// Static bilingual text.
pub type Text = Bilingual<&'static str>;

/// Static bilingual list of lines.
pub type Lines = Bilingual<&'static [&'static str]>;

impl Text {
    #[must_use]
    pub fn get(&self, lang: Language) -> String {
        (*self.pick(lang)).to_owned()
    }
}

impl Lines {
    #[must_use]
    pub fn get(&self, lang: Language) -> Vec<String> {
        self.pick(lang).iter().map(|line| (*line).to_owned()).collect()
    }
}

#[cfg(test)]
#[path = "i18n_test.rs"]
mod tests;
