//! Icon-kit usability and the static social platform table.

/// Kit identifiers that ship as placeholders in starter configs. A kit id
/// matching one of these renders fallbacks, the same as no kit at all.
const KIT_PLACEHOLDERS: &[&str] = &["insert-your-kit-id-here", "1234567890"];

/// Marker substring identifying an icon-kit glyph class.
pub const GLYPH_CLASS_MARKER: &str = "fa-";

/// Whether a configured icon-kit id can actually serve glyphs.
///
/// Shared by the feature, social-link, and script-injection passes so the
/// three always agree on icon vs. fallback presentation.
pub fn icon_kit_usable(kit: Option<&str>) -> bool {
    match kit {
        Some(id) => !id.is_empty() && !KIT_PLACEHOLDERS.contains(&id),
        None => false,
    }
}

/// Script URL for a kit id.
pub fn kit_script_url(kit: &str) -> String {
    format!("https://kit.fontawesome.com/{kit}.js")
}

/// Glyph class and human-readable label for one social platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformStyle {
    pub glyph: &'static str,
    pub label: &'static str,
}

/// Presentation for every platform the configuration's social mapping may
/// enumerate. A key outside this table is a configuration error.
pub fn platform_style(platform: &str) -> Option<PlatformStyle> {
    let style = match platform {
        "bluesky" => PlatformStyle {
            glyph: "fa-brands fa-bluesky",
            label: "Bluesky",
        },
        "discord" => PlatformStyle {
            glyph: "fa-brands fa-discord",
            label: "Discord",
        },
        "github" => PlatformStyle {
            glyph: "fa-brands fa-github",
            label: "GitHub",
        },
        "youtube" => PlatformStyle {
            glyph: "fa-brands fa-youtube",
            label: "YouTube",
        },
        "twitter" => PlatformStyle {
            glyph: "fa-brands fa-twitter",
            label: "Twitter",
        },
        "instagram" => PlatformStyle {
            glyph: "fa-brands fa-instagram",
            label: "Instagram",
        },
        _ => return None,
    };
    Some(style)
}
