//! Supported site locales.
//!
//! The set of locales is closed: a path segment or header value that does not
//! map onto one of these variants is never treated as a locale.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    Vi,
    En,
    Zh,
    Ko,
    Ja,
}

impl Locale {
    /// All locales in priority order. Static generation walks this order.
    pub const ALL: [Locale; 5] = [Locale::Vi, Locale::En, Locale::Zh, Locale::Ko, Locale::Ja];

    /// The designated default locale (Vietnamese, for a Saigon business).
    pub const DEFAULT: Locale = Locale::Vi;

    /// Match an exact lowercase locale code.
    pub fn from_code(code: &str) -> Option<Locale> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::Vi => "vi",
            Locale::En => "en",
            Locale::Zh => "zh",
            Locale::Ko => "ko",
            Locale::Ja => "ja",
        }
    }

    /// English name of the language.
    pub fn name(self) -> &'static str {
        match self {
            Locale::Vi => "Vietnamese",
            Locale::En => "English",
            Locale::Zh => "Chinese",
            Locale::Ko => "Korean",
            Locale::Ja => "Japanese",
        }
    }

    /// Name of the language in the language itself, as shown in the switcher.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::Vi => "Tiếng Việt",
            Locale::En => "English",
            Locale::Zh => "中文",
            Locale::Ko => "한국어",
            Locale::Ja => "日本語",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Locale::Vi => "🇻🇳",
            Locale::En => "🇺🇸",
            Locale::Zh => "🇨🇳",
            Locale::Ko => "🇰🇷",
            Locale::Ja => "🇯🇵",
        }
    }

    /// Open Graph locale tag (`language_TERRITORY`).
    pub fn og_locale(self) -> &'static str {
        match self {
            Locale::Vi => "vi_VN",
            Locale::En => "en_US",
            Locale::Zh => "zh_CN",
            Locale::Ko => "ko_KR",
            Locale::Ja => "ja_JP",
        }
    }

    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported locale: '{0}'")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| UnsupportedLocale(s.to_string()))
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_exact_match() {
        assert_eq!(Locale::from_code("vi"), Some(Locale::Vi));
        assert_eq!(Locale::from_code("ko"), Some(Locale::Ko));
        assert_eq!(Locale::from_code("ja"), Some(Locale::Ja));
    }

    #[test]
    fn test_from_code_rejects_variants() {
        assert_eq!(Locale::from_code("KO"), None);
        assert_eq!(Locale::from_code("ko-KR"), None);
        assert_eq!(Locale::from_code("xx"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_exactly_one_default() {
        let defaults: Vec<_> = Locale::ALL.iter().filter(|l| l.is_default()).collect();
        assert_eq!(defaults, vec![&Locale::Vi]);
        assert!(Locale::ALL.contains(&Locale::DEFAULT));
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<_> = Locale::ALL.iter().map(|l| l.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), Locale::ALL.len());
    }

    #[test]
    fn test_from_str_error_message() {
        let err = "fr".parse::<Locale>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported locale: 'fr'");
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&Locale::Zh).unwrap();
        assert_eq!(json, "\"zh\"");
    }
}
