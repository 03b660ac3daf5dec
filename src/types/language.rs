//! Language identifiers used by the Camb.ai API.
//!
//! Two shapes exist: job-style endpoints (`/tts`, dubbing) take a numeric
//! [`LanguageId`], streaming endpoints take a locale code ([`StreamLanguage`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric language id as listed by `/source-languages` and `/target-languages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageId(pub u32);

impl LanguageId {
    pub const EN_US: LanguageId = LanguageId(1);
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the language listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub id: LanguageId,
    pub language: String,
    pub short_name: String,
}

/// Locale accepted by the streaming TTS endpoint.
///
/// Unknown locales are kept verbatim in [`StreamLanguage::Other`] and
/// normalized best-effort by [`StreamLanguage::code`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StreamLanguage {
    EnUs,
    EnGb,
    EsEs,
    FrFr,
    DeDe,
    ItIt,
    PtBr,
    NlNl,
    JaJp,
    KoKr,
    ZhCn,
    HiIn,
    ArSa,
    RuRu,
    Other(String),
}

impl StreamLanguage {
    /// Every named variant, in declaration order.
    pub const KNOWN: [StreamLanguage; 14] = [
        StreamLanguage::EnUs,
        StreamLanguage::EnGb,
        StreamLanguage::EsEs,
        StreamLanguage::FrFr,
        StreamLanguage::DeDe,
        StreamLanguage::ItIt,
        StreamLanguage::PtBr,
        StreamLanguage::NlNl,
        StreamLanguage::JaJp,
        StreamLanguage::KoKr,
        StreamLanguage::ZhCn,
        StreamLanguage::HiIn,
        StreamLanguage::ArSa,
        StreamLanguage::RuRu,
    ];

    /// Lowercase hyphenated locale code, e.g. `en-us`.
    ///
    /// Named variants map to fixed codes. For [`StreamLanguage::Other`] the raw
    /// value is lowercased and `_` becomes `-`; that is a guess, not a lookup.
    pub fn code(&self) -> String {
        match self {
            Self::Other(raw) => raw.to_lowercase().replace('_', "-"),
            known => known.fixed_code().unwrap_or_default().to_string(),
        }
    }

    fn fixed_code(&self) -> Option<&'static str> {
        Some(match self {
            Self::EnUs => "en-us",
            Self::EnGb => "en-gb",
            Self::EsEs => "es-es",
            Self::FrFr => "fr-fr",
            Self::DeDe => "de-de",
            Self::ItIt => "it-it",
            Self::PtBr => "pt-br",
            Self::NlNl => "nl-nl",
            Self::JaJp => "ja-jp",
            Self::KoKr => "ko-kr",
            Self::ZhCn => "zh-cn",
            Self::HiIn => "hi-in",
            Self::ArSa => "ar-sa",
            Self::RuRu => "ru-ru",
            Self::Other(_) => return None,
        })
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for StreamLanguage {
    /// Accepts `en-us`, `en_US`, `EN-US` and similar spellings of known locales.
    fn from(raw: &str) -> Self {
        let canonical = raw.trim().to_lowercase().replace('_', "-");
        Self::KNOWN
            .into_iter()
            .find(|lang| lang.fixed_code() == Some(canonical.as_str()))
            .unwrap_or_else(|| Self::Other(raw.to_string()))
    }
}

impl From<String> for StreamLanguage {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<StreamLanguage> for String {
    fn from(lang: StreamLanguage) -> Self {
        lang.code()
    }
}

impl FromStr for StreamLanguage {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for StreamLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_languages_have_fixed_codes() {
        for lang in StreamLanguage::KNOWN {
            let code = lang.code();
            assert_eq!(code, code.to_lowercase());
            assert!(!code.contains('_'));
            assert_eq!(StreamLanguage::from(code.as_str()), lang);
        }
        assert_eq!(StreamLanguage::EnUs.code(), "en-us");
        assert_eq!(StreamLanguage::ZhCn.code(), "zh-cn");
    }

    #[test]
    fn vendor_spellings_parse_to_known_variants() {
        assert_eq!(StreamLanguage::from("en_US"), StreamLanguage::EnUs);
        assert_eq!(StreamLanguage::from("EN-US"), StreamLanguage::EnUs);
        assert_eq!(StreamLanguage::from("en_US").code(), "en-us");
    }

    #[test]
    fn unknown_languages_fall_back_to_lowercase_hyphenated() {
        for raw in ["sv_SE", "TR_tr", "pl-PL", "xx"] {
            let lang = StreamLanguage::Other(raw.to_string());
            assert_eq!(lang.code(), raw.to_lowercase().replace('_', "-"));
        }
        assert_eq!(StreamLanguage::from("sv_SE").code(), "sv-se");
        assert!(!StreamLanguage::from("sv_SE").is_known());
    }

    #[test]
    fn serde_uses_locale_codes() {
        assert_eq!(serde_json::to_string(&StreamLanguage::FrFr).unwrap(), "\"fr-fr\"");
        let lang: StreamLanguage = serde_json::from_str("\"de_DE\"").unwrap();
        assert_eq!(lang, StreamLanguage::DeDe);
    }

    #[test]
    fn language_info_decodes() {
        let info: LanguageInfo =
            serde_json::from_str(r#"{"id": 1, "language": "English (United States)", "short_name": "en-us"}"#)
                .unwrap();
        assert_eq!(info.id, LanguageId::EN_US);
        assert_eq!(info.short_name, "en-us");
    }
}
