//! Game settings and preferences
//!
//! Persisted separately from the best score in LocalStorage. Locale is
//! re-detected on every load rather than persisted, matching the browser's
//! language setting.

use serde::{Deserialize, Serialize};

use crate::platform::storage;

/// UI language: Arabic when the browser asks for it, English otherwise.
/// The actual string tables live in the host page, not in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    /// Two-way choice from a BCP 47 language tag
    pub fn from_tag(tag: &str) -> Self {
        if tag.starts_with("ar") {
            Locale::Ar
        } else {
            Locale::En
        }
    }

    /// Detect from the browser's preferred language
    #[cfg(target_arch = "wasm32")]
    pub fn detect() -> Self {
        let tag = web_sys::window()
            .map(|w| w.navigator())
            .and_then(|n| n.language())
            .unwrap_or_default();
        Self::from_tag(&tag)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn detect() -> Self {
        Locale::En
    }

    /// Language tag for the document `lang` attribute
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Text direction for the document `dir` attribute
    pub fn dir(self) -> &'static str {
        match self {
            Locale::En => "ltr",
            Locale::Ar => "rtl",
        }
    }
}

/// Player preferences
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Suppress all sound effects
    pub muted: bool,
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "coin_dash_settings";

    /// Load settings, falling back to defaults when absent or corrupt
    pub fn load() -> Self {
        if let Some(json) = storage::get(Self::STORAGE_KEY) {
            if let Ok(settings) = serde_json::from_str(&json) {
                return settings;
            }
            log::warn!("Ignoring unreadable settings, using defaults");
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            storage::set(Self::STORAGE_KEY, &json);
        }
    }

    /// Flip the mute flag and persist it
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.save();
        self.muted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("ar"), Locale::Ar);
        assert_eq!(Locale::from_tag("ar-EG"), Locale::Ar);
        assert_eq!(Locale::from_tag("en-US"), Locale::En);
        // Anything that isn't Arabic falls back to English
        assert_eq!(Locale::from_tag("es-MX"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn test_locale_attributes() {
        assert_eq!(Locale::Ar.dir(), "rtl");
        assert_eq!(Locale::En.dir(), "ltr");
        assert_eq!(Locale::Ar.tag(), "ar");
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = Settings { muted: true };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert!(back.muted);
    }

    #[test]
    fn test_toggle_mute() {
        let mut settings = Settings::default();
        assert!(settings.toggle_mute());
        assert!(!settings.toggle_mute());
    }
}
