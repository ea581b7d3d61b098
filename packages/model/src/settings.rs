//! Page-level settings and editor preferences.

use serde::{Deserialize, Serialize};

token_enum! {
    pub enum FontFamily {
        Sans => "sans",
        Serif => "serif",
        Mono => "mono",
        Display => "display",
    }
    fallback = Sans;
}

impl FontFamily {
    /// Web font family name for this choice
    pub fn web_font(self) -> &'static str {
        match self {
            FontFamily::Sans => "Inter",
            FontFamily::Serif => "Merriweather",
            FontFamily::Mono => "Roboto Mono",
            FontFamily::Display => "Playfair Display",
        }
    }

    /// Generic CSS fallback family
    pub fn generic(self) -> &'static str {
        match self {
            FontFamily::Sans | FontFamily::Display => "sans-serif",
            FontFamily::Serif => "serif",
            FontFamily::Mono => "monospace",
        }
    }
}

token_enum! {
    /// Editor UI language
    pub enum Language {
        En => "en",
        Pt => "pt",
        Es => "es",
        Fr => "fr",
    }
    fallback = En;
}

/// Site metadata, typography and palette. Consumed by both generators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalSettings {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_image: String,
    pub robots: String,
    pub author: String,
    pub font_family: FontFamily,
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub accent_color: String,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            title: "My Awesome Site".into(),
            description: "Created with Website Builder".into(),
            keywords: String::new(),
            og_image: String::new(),
            robots: String::new(),
            author: String::new(),
            font_family: FontFamily::Sans,
            primary_color: "#4F46E5".into(),
            secondary_color: "#E5E7EB".into(),
            background_color: "#F9FAFB".into(),
            text_color: "#111827".into(),
            accent_color: "#FBBF24".into(),
        }
    }
}

impl GlobalSettings {
    /// Palette as `(custom property, value)` pairs, in declaration order
    pub fn palette(&self) -> [(&'static str, &str); 5] {
        [
            ("--color-primary", self.primary_color.as_str()),
            ("--color-secondary", self.secondary_color.as_str()),
            ("--color-bg", self.background_color.as_str()),
            ("--color-text", self.text_color.as_str()),
            ("--color-accent", self.accent_color.as_str()),
        ]
    }
}

/// Editor-only preferences. Never affect generated output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppPreferences {
    pub dark_mode: bool,
    pub show_grid_lines: bool,
    pub language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_names() {
        let settings = GlobalSettings::default();
        let names: Vec<&str> = settings.palette().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "--color-primary",
                "--color-secondary",
                "--color-bg",
                "--color-text",
                "--color-accent",
            ]
        );
    }

    #[test]
    fn test_parse_settings() {
        let json = r##"{
            "title": "Launch",
            "fontFamily": "serif",
            "primaryColor": "#000000"
        }"##;

        let settings: GlobalSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.title, "Launch");
        assert_eq!(settings.font_family, FontFamily::Serif);
        assert_eq!(settings.primary_color, "#000000");
        // Unspecified fields keep their defaults
        assert_eq!(settings.text_color, "#111827");
    }
}
