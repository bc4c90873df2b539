//! Configuration tree.
//!
//! Every section defaults individually so a partial config file still
//! loads; absent optional values degrade at render time rather than
//! erroring here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration for a landing page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: Site,
    pub product: Product,
    pub story: Story,
    pub features: Vec<Feature>,
    pub cta: Cta,
    /// Platform name -> link entry. Iteration order is alphabetical.
    pub social: BTreeMap<String, SocialEntry>,
    pub visuals: Visuals,
    pub meta: MetaTags,
    pub advanced: Advanced,
}

/// Site-wide metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    pub title: String,
    pub description: String,
    pub tagline: String,
    pub url: String,
    pub author: String,
    pub year: String,
}

/// Product copy at several lengths.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub name: String,
    pub short_description: String,
    pub full_description: String,
    pub detailed_description: String,
}

/// Story / about section copy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Story {
    pub headline: String,
    pub tagline: String,
    pub description: String,
}

/// One feature card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    /// Optional icon-kit glyph class. Empty or absent falls back to a
    /// numbered badge.
    pub icon: Option<String>,
    pub title: String,
    pub description: String,
    pub highlight: String,
}

/// Call-to-action section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Cta {
    pub enabled: bool,
    pub headline: String,
    pub subheading: String,
    pub buttons: Vec<CtaButton>,
}

impl Default for Cta {
    fn default() -> Self {
        Self {
            enabled: true,
            headline: String::new(),
            subheading: String::new(),
            buttons: Vec::new(),
        }
    }
}

/// One call-to-action button.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaButton {
    pub text: String,
    pub url: String,
    /// `"primary"` selects the primary button class; any other value
    /// (or none) renders as secondary.
    pub style: Option<String>,
}

/// One social platform link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialEntry {
    pub enabled: bool,
    pub url: String,
}

/// Visual customization: logo and color palette.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Visuals {
    pub logo: Logo,
    pub colors: Palette,
}

/// Logo image reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Logo {
    pub file: String,
    pub alt: Option<String>,
}

/// Color palette written to CSS custom properties. Values pass through
/// unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub dark: String,
    pub darker: String,
    pub text: String,
    /// Optional dark-on-light text color; applied only when present.
    pub text_dark: Option<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#4A90E2".to_string(),
            secondary: "#2ECC71".to_string(),
            accent: "#F39C12".to_string(),
            dark: "#2C3E50".to_string(),
            darker: "#1A252F".to_string(),
            text: "#ECF0F1".to_string(),
            text_dark: None,
        }
    }
}

/// Social-share metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaTags {
    pub og_image: String,
    pub og_type: String,
    pub theme_color: String,
    pub keywords: Vec<String>,
}

impl Default for MetaTags {
    fn default() -> Self {
        Self {
            og_image: String::new(),
            og_type: "website".to_string(),
            theme_color: String::new(),
            keywords: Vec::new(),
        }
    }
}

/// Advanced toggles and third-party identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Advanced {
    pub enable_scroll_animations: bool,
    /// Recognized but intentionally unused; analytics wiring is out of
    /// scope.
    pub google_analytics_id: Option<String>,
    /// Icon-kit identifier. Empty and known placeholder values disable
    /// glyph rendering.
    pub font_awesome_kit: Option<String>,
    pub favicon_path: Option<String>,
}

impl Default for Advanced {
    fn default() -> Self {
        Self {
            enable_scroll_animations: true,
            google_analytics_id: None,
            font_awesome_kit: None,
            favicon_path: None,
        }
    }
}
