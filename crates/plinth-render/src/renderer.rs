//! The six-pass renderer.
//!
//! Each pass is independently guarded by its own container/value checks;
//! a missing hook or configuration leaf skips work for that pass only and
//! never fails the render.

use plinth_config::{Config, Resolver};
use plinth_dom::Document;

use crate::icons::{icon_kit_usable, kit_script_url, platform_style, GLYPH_CLASS_MARKER};

/// Render entry point for a page whose configuration may be absent.
///
/// A missing configuration is the only fatal condition: it is logged and
/// every pass is skipped, leaving the document untouched.
pub fn render_page(config: Option<&Config>, doc: &mut Document) {
    match config {
        Some(config) => Renderer::new(config).initialize(doc),
        None => {
            tracing::error!("Configuration is missing; all render passes skipped");
        }
    }
}

/// Projects a configuration onto a document, once, idempotently.
pub struct Renderer<'a> {
    config: &'a Config,
    resolver: Resolver,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            resolver: Resolver::new(config),
        }
    }

    /// Run the six passes in their fixed order.
    pub fn initialize(&self, doc: &mut Document) {
        self.apply_bindings(doc);
        self.apply_colors(doc);
        self.generate_features(doc);
        self.generate_cta(doc);
        self.generate_social_links(doc);
        self.apply_logo(doc);
        self.load_icon_kit(doc);

        tracing::info!("Configuration applied for: {}", self.config.site.title);
    }

    fn kit(&self) -> Option<&str> {
        self.config.advanced.font_awesome_kit.as_deref()
    }

    /// Pass 1: substitute text/attributes on every element carrying a
    /// `data-config` binding marker. Unresolvable paths leave the element
    /// untouched.
    fn apply_bindings(&self, doc: &mut Document) {
        for el in doc.elements_with_attribute("data-config") {
            let Some(path) = doc.attribute(el, "data-config").map(str::to_owned) else {
                continue;
            };

            // The icon-kit id is consumed by the script-injection pass.
            if path.contains("font_awesome") {
                continue;
            }

            let Some(value) = self.resolver.resolve(&path) else {
                continue;
            };

            let tag = doc.tag(el).unwrap_or("").to_owned();
            match tag.as_str() {
                "meta" => doc.set_attribute(el, "content", &value),
                "title" => doc.set_text_content(el, &value),
                "link" if path.contains("favicon") => doc.set_attribute(el, "href", &value),
                _ => {
                    // Configuration is trusted; values carrying markup are
                    // injected as-is.
                    if value.contains('<') {
                        doc.set_inner_html(el, &value);
                    } else {
                        doc.set_text_content(el, &value);
                    }
                }
            }
        }
    }

    /// Pass 2: copy the palette onto root-scoped custom properties.
    /// Values pass through without syntax validation.
    fn apply_colors(&self, doc: &mut Document) {
        let colors = &self.config.visuals.colors;

        doc.set_root_property("--color-primary", &colors.primary);
        doc.set_root_property("--color-secondary", &colors.secondary);
        doc.set_root_property("--color-accent", &colors.accent);
        doc.set_root_property("--color-dark", &colors.dark);
        doc.set_root_property("--color-darker", &colors.darker);
        doc.set_root_property("--color-text", &colors.text);

        if let Some(text_dark) = &colors.text_dark {
            doc.set_root_property("--color-text-dark", text_dark);
        }
    }

    /// Pass 3: clear and rebuild the feature cards.
    fn generate_features(&self, doc: &mut Document) {
        let Some(container) = doc.element_by_id("features-container") else {
            return;
        };

        let glyphs_available = icon_kit_usable(self.kit());
        doc.clear_children(container);

        for (index, feature) in self.config.features.iter().enumerate() {
            let card = doc.create_element("div");
            doc.set_attribute(card, "class", "feature");

            let icon_class = feature.icon.as_deref().unwrap_or("");
            let icon = doc.create_element("div");
            if glyphs_available && icon_class.contains(GLYPH_CLASS_MARKER) {
                doc.set_attribute(icon, "class", "feature-icon");
                let glyph = doc.create_element("i");
                doc.set_attribute(glyph, "class", icon_class);
                doc.append_child(icon, glyph);
            } else {
                doc.set_attribute(icon, "class", "feature-icon feature-icon-number");
                doc.set_text_content(icon, &(index + 1).to_string());
            }
            doc.append_child(card, icon);

            let title = doc.create_element("h3");
            doc.set_text_content(title, &feature.title);
            doc.append_child(card, title);

            let description = doc.create_element("p");
            doc.set_text_content(description, &feature.description);
            doc.append_child(card, description);

            let highlight = doc.create_element("p");
            doc.set_attribute(highlight, "class", "feature-highlight");
            doc.set_text_content(highlight, &feature.highlight);
            doc.append_child(card, highlight);

            doc.append_child(container, card);
        }
    }

    /// Pass 4: render the call-to-action section, or hide it in place so
    /// it could be re-shown by a later design.
    fn generate_cta(&self, doc: &mut Document) {
        let Some(container) = doc.element_by_id("cta-section") else {
            return;
        };

        let cta = &self.config.cta;
        if !cta.enabled {
            doc.set_style(container, "display", "none");
            return;
        }

        doc.remove_class(container, "hidden");
        doc.clear_children(container);

        let headline = doc.create_element("h2");
        doc.set_text_content(headline, &cta.headline);
        doc.append_child(container, headline);

        let subheading = doc.create_element("p");
        doc.set_text_content(subheading, &cta.subheading);
        doc.append_child(container, subheading);

        let row = doc.create_element("div");
        doc.set_attribute(row, "class", "cta-buttons");
        for button in &cta.buttons {
            // Anything other than an explicit "primary" renders secondary.
            let class = if button.style.as_deref() == Some("primary") {
                "btn btn-primary"
            } else {
                "btn btn-secondary"
            };

            let link = doc.create_element("a");
            doc.set_attribute(link, "href", &button.url);
            doc.set_attribute(link, "class", class);
            doc.set_text_content(link, &button.text);
            doc.append_child(row, link);
        }
        doc.append_child(container, row);
    }

    /// Pass 5: clear and rebuild the social links from enabled platforms.
    fn generate_social_links(&self, doc: &mut Document) {
        let Some(container) = doc.element_by_id("social-links") else {
            return;
        };

        let glyphs_available = icon_kit_usable(self.kit());
        doc.clear_children(container);

        for (platform, entry) in &self.config.social {
            if !entry.enabled {
                continue;
            }

            let Some(style) = platform_style(platform) else {
                tracing::warn!("Unknown social platform '{platform}' in configuration; skipped");
                continue;
            };

            let link = doc.create_element("a");
            doc.set_attribute(link, "href", &entry.url);
            doc.set_attribute(link, "target", "_blank");
            doc.set_attribute(link, "rel", "noopener noreferrer");

            if glyphs_available {
                doc.set_attribute(link, "class", "social-link-icon");
                let glyph = doc.create_element("i");
                doc.set_attribute(glyph, "class", style.glyph);
                doc.append_child(link, glyph);
            } else {
                doc.set_attribute(link, "class", "social-link-text");
                doc.set_text_content(link, style.label);
            }

            doc.append_child(container, link);
        }
    }

    /// Point the hero logo at the configured image.
    fn apply_logo(&self, doc: &mut Document) {
        let Some(logo) = doc.element_by_id("hero-logo") else {
            return;
        };

        let config = &self.config.visuals.logo;
        doc.set_attribute(logo, "src", &config.file);
        doc.set_attribute(logo, "alt", config.alt.as_deref().unwrap_or("Logo"));
    }

    /// Pass 6: ensure exactly one icon-kit script tag when the kit id is
    /// usable. A stale tag is updated in place, never duplicated.
    fn load_icon_kit(&self, doc: &mut Document) {
        let Some(kit) = self.kit() else {
            return;
        };
        if !icon_kit_usable(Some(kit)) {
            return;
        }

        let url = kit_script_url(kit);
        match doc.scripts_with_src_containing("fontawesome.com").first() {
            Some(&script) => {
                if doc.attribute(script, "src") != Some(url.as_str()) {
                    doc.set_attribute(script, "src", &url);
                }
            }
            None => {
                let script = doc.create_element("script");
                doc.set_attribute(script, "src", &url);
                doc.set_attribute(script, "crossorigin", "anonymous");
                let head = doc.head();
                doc.append_child(head, script);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plinth_config::Config;
    use pretty_assertions::assert_eq;

    /// A document exposing the standard hooks and a few binding markers.
    fn page() -> Document {
        let mut doc = Document::new();
        let head = doc.head();

        let title = doc.create_element("title");
        doc.set_attribute(title, "data-config", "site.title");
        doc.set_text_content(title, "Placeholder Title");
        doc.append_child(head, title);

        let description = doc.create_element("meta");
        doc.set_attribute(description, "name", "description");
        doc.set_attribute(description, "data-config", "site.description");
        doc.append_child(head, description);

        let favicon = doc.create_element("link");
        doc.set_attribute(favicon, "rel", "icon");
        doc.set_attribute(favicon, "data-config", "advanced.favicon_path");
        doc.append_child(head, favicon);

        let body = doc.body();

        let name = doc.create_element("h1");
        doc.set_attribute(name, "data-config", "product.name");
        doc.append_child(body, name);

        let stale = doc.create_element("span");
        doc.set_attribute(stale, "data-config", "missing.path");
        doc.set_text_content(stale, "prior text");
        doc.append_child(body, stale);

        let rich = doc.create_element("p");
        doc.set_attribute(rich, "data-config", "product.full_description");
        doc.append_child(body, rich);

        let logo = doc.create_element("img");
        doc.set_attribute(logo, "id", "hero-logo");
        doc.append_child(body, logo);

        let features = doc.create_element("div");
        doc.set_attribute(features, "id", "features-container");
        doc.append_child(body, features);

        let cta = doc.create_element("section");
        doc.set_attribute(cta, "id", "cta-section");
        doc.set_attribute(cta, "class", "cta-section hidden");
        let placeholder = doc.create_element("p");
        doc.set_text_content(placeholder, "coming soon");
        doc.append_child(cta, placeholder);
        doc.append_child(body, cta);

        let social = doc.create_element("div");
        doc.set_attribute(social, "id", "social-links");
        doc.append_child(body, social);

        doc
    }

    fn config() -> Config {
        Config::from_toml(
            r##"
[site]
title = "Starfall - Chase the Sky"
description = "A cozy exploration game"

[product]
name = "Starfall"
full_description = "An <strong>ambitious</strong> exploration game"

[[features]]
title = "Open World"
description = "Roam freely"
highlight = "No loading screens"

[[features]]
icon = "fa-solid fa-rocket"
title = "Fast Travel"
description = "Blink across the map"
highlight = "Instant"

[cta]
enabled = true
headline = "Stay Updated"
subheading = "Coming soon!"

[[cta.buttons]]
text = "Wishlist"
url = "https://store.example/wishlist"
style = "primary"

[[cta.buttons]]
text = "Join Discord"
url = "https://discord.example"

[social.github]
enabled = true
url = "https://github.com/starfall"

[social.discord]
enabled = false
url = "https://discord.example"

[visuals.logo]
file = "assets/logo.svg"

[visuals.colors]
primary = "#111111"
secondary = "#222222"
accent = "#333333"
dark = "#444444"
darker = "#555555"
text = "#666666"

[advanced]
favicon_path = "favicon.ico"
"##,
        )
        .unwrap()
    }

    #[test]
    fn missing_config_mutates_nothing() {
        let mut doc = page();
        let before = doc.to_html();

        render_page(None, &mut doc);

        assert_eq!(doc.to_html(), before);
    }

    #[test]
    fn bindings_respect_element_roles() {
        let mut doc = page();
        let config = config();
        Renderer::new(&config).initialize(&mut doc);

        let title = doc.elements_by_tag("title")[0];
        assert_eq!(doc.text_content(title), "Starfall - Chase the Sky");

        let meta = doc.elements_by_tag("meta")[0];
        assert_eq!(doc.attribute(meta, "content"), Some("A cozy exploration game"));

        let favicon = doc.elements_by_tag("link")[0];
        assert_eq!(doc.attribute(favicon, "href"), Some("favicon.ico"));
    }

    #[test]
    fn unresolved_binding_keeps_prior_content() {
        let mut doc = page();
        let config = config();
        Renderer::new(&config).initialize(&mut doc);

        let stale = doc
            .elements_with_attribute("data-config")
            .into_iter()
            .find(|&el| doc.attribute(el, "data-config") == Some("missing.path"))
            .unwrap();
        assert_eq!(doc.text_content(stale), "prior text");
    }

    #[test]
    fn markup_values_are_injected_as_markup() {
        let mut doc = page();
        let config = config();
        Renderer::new(&config).initialize(&mut doc);

        let rich = doc
            .elements_with_attribute("data-config")
            .into_iter()
            .find(|&el| doc.attribute(el, "data-config") == Some("product.full_description"))
            .unwrap();
        assert_eq!(
            doc.serialize_node(rich),
            r#"<p data-config="product.full_description">An <strong>ambitious</strong> exploration game</p>"#
        );
    }

    #[test]
    fn colors_land_on_root_properties() {
        let mut doc = page();
        let config = config();
        Renderer::new(&config).initialize(&mut doc);

        assert_eq!(doc.root_property("--color-primary"), Some("#111111"));
        assert_eq!(doc.root_property("--color-text"), Some("#666666"));
        // text_dark is absent from this palette.
        assert_eq!(doc.root_property("--color-text-dark"), None);
    }

    #[test]
    fn optional_text_dark_is_applied_when_present() {
        let mut doc = page();
        let mut config = config();
        config.visuals.colors.text_dark = Some("#777777".to_string());
        Renderer::new(&config).initialize(&mut doc);

        assert_eq!(doc.root_property("--color-text-dark"), Some("#777777"));
    }

    #[test]
    fn features_fall_back_to_numbered_badges_without_a_kit() {
        let mut doc = page();
        let config = config();
        Renderer::new(&config).initialize(&mut doc);

        let container = doc.element_by_id("features-container").unwrap();
        let cards = doc.children(container).to_vec();
        assert_eq!(cards.len(), 2);

        // Both cards use numbers: no kit is configured, so even the card
        // with a glyph class falls back.
        let html = doc.serialize_node(container);
        assert!(html.contains(r#"class="feature-icon feature-icon-number">1"#));
        assert!(html.contains(r#"class="feature-icon feature-icon-number">2"#));
        assert!(!html.contains("<i"));
    }

    #[test]
    fn features_render_glyphs_with_a_usable_kit() {
        let mut doc = page();
        let mut config = config();
        config.advanced.font_awesome_kit = Some("abc123".to_string());
        Renderer::new(&config).initialize(&mut doc);

        let container = doc.element_by_id("features-container").unwrap();
        let html = doc.serialize_node(container);

        // First feature has no icon class: numbered badge.
        assert!(html.contains(r#"class="feature-icon feature-icon-number">1"#));
        // Second feature declares a glyph class.
        assert!(html.contains(r#"<i class="fa-solid fa-rocket"></i>"#));
    }

    #[test]
    fn feature_generation_is_idempotent() {
        let mut doc = page();
        let config = config();
        let renderer = Renderer::new(&config);

        renderer.initialize(&mut doc);
        let container = doc.element_by_id("features-container").unwrap();
        let first = doc.serialize_node(container);

        renderer.initialize(&mut doc);
        let second = doc.serialize_node(container);

        assert_eq!(first, second);
    }

    #[test]
    fn disabled_cta_is_hidden_with_content_undisturbed() {
        let mut doc = page();
        let mut config = config();
        config.cta.enabled = false;
        Renderer::new(&config).initialize(&mut doc);

        let cta = doc.element_by_id("cta-section").unwrap();
        assert_eq!(doc.style(cta, "display"), Some("none"));
        assert_eq!(doc.text_content(cta), "coming soon");
        assert!(doc.has_class(cta, "hidden"));
    }

    #[test]
    fn enabled_cta_renders_buttons_in_order() {
        let mut doc = page();
        let config = config();
        Renderer::new(&config).initialize(&mut doc);

        let cta = doc.element_by_id("cta-section").unwrap();
        assert!(!doc.has_class(cta, "hidden"));

        let html = doc.serialize_node(cta);
        assert!(html.contains("<h2>Stay Updated</h2>"));
        assert!(html.contains("<p>Coming soon!</p>"));

        let primary = html.find("btn btn-primary").unwrap();
        let secondary = html.find("btn btn-secondary").unwrap();
        assert!(primary < secondary, "button order must follow config order");
        // The second button has no style tag and falls back to secondary.
        assert!(html.contains(r#"class="btn btn-secondary">Join Discord"#));
    }

    #[test]
    fn social_links_render_enabled_platforms_only() {
        let mut doc = page();
        let config = config();
        Renderer::new(&config).initialize(&mut doc);

        let container = doc.element_by_id("social-links").unwrap();
        let links = doc.children(container).to_vec();
        assert_eq!(links.len(), 1);

        let link = links[0];
        assert_eq!(doc.attribute(link, "href"), Some("https://github.com/starfall"));
        assert_eq!(doc.attribute(link, "target"), Some("_blank"));
        assert_eq!(doc.attribute(link, "rel"), Some("noopener noreferrer"));
        assert_eq!(doc.text_content(link), "GitHub");
        assert!(doc.has_class(link, "social-link-text"));
    }

    #[test]
    fn unknown_social_platform_is_skipped() {
        let mut doc = page();
        let mut config = config();
        config.social.insert(
            "myspace".to_string(),
            plinth_config::SocialEntry {
                enabled: true,
                url: "https://myspace.example".to_string(),
            },
        );
        Renderer::new(&config).initialize(&mut doc);

        let container = doc.element_by_id("social-links").unwrap();
        assert_eq!(doc.children(container).len(), 1);
    }

    #[test]
    fn social_links_use_glyphs_with_a_usable_kit() {
        let mut doc = page();
        let mut config = config();
        config.advanced.font_awesome_kit = Some("abc123".to_string());
        Renderer::new(&config).initialize(&mut doc);

        let container = doc.element_by_id("social-links").unwrap();
        let html = doc.serialize_node(container);
        assert!(html.contains(r#"class="social-link-icon""#));
        assert!(html.contains(r#"<i class="fa-brands fa-github"></i>"#));
    }

    #[test]
    fn logo_receives_src_and_alt_fallback() {
        let mut doc = page();
        let config = config();
        Renderer::new(&config).initialize(&mut doc);

        let logo = doc.element_by_id("hero-logo").unwrap();
        assert_eq!(doc.attribute(logo, "src"), Some("assets/logo.svg"));
        assert_eq!(doc.attribute(logo, "alt"), Some("Logo"));
    }

    #[test]
    fn icon_kit_injection_is_idempotent() {
        let mut doc = page();
        let mut config = config();
        config.advanced.font_awesome_kit = Some("abc123".to_string());
        let renderer = Renderer::new(&config);

        renderer.initialize(&mut doc);
        renderer.initialize(&mut doc);

        let scripts = doc.scripts_with_src_containing("fontawesome.com");
        assert_eq!(scripts.len(), 1);
        assert_eq!(
            doc.attribute(scripts[0], "src"),
            Some("https://kit.fontawesome.com/abc123.js")
        );
        assert_eq!(doc.attribute(scripts[0], "crossorigin"), Some("anonymous"));
    }

    #[test]
    fn stale_kit_script_is_updated_in_place() {
        let mut doc = page();
        let mut config = config();
        config.advanced.font_awesome_kit = Some("abc123".to_string());
        Renderer::new(&config).initialize(&mut doc);

        config.advanced.font_awesome_kit = Some("def456".to_string());
        Renderer::new(&config).initialize(&mut doc);

        let scripts = doc.scripts_with_src_containing("fontawesome.com");
        assert_eq!(scripts.len(), 1);
        assert_eq!(
            doc.attribute(scripts[0], "src"),
            Some("https://kit.fontawesome.com/def456.js")
        );
    }

    #[test]
    fn placeholder_kit_injects_no_script() {
        let mut doc = page();
        let mut config = config();
        config.advanced.font_awesome_kit = Some("insert-your-kit-id-here".to_string());
        Renderer::new(&config).initialize(&mut doc);

        assert!(doc.scripts_with_src_containing("fontawesome.com").is_empty());
    }

    #[test]
    fn passes_survive_missing_hooks() {
        // A bare document exposes none of the optional hooks; every pass
        // must skip quietly.
        let mut doc = Document::new();
        let config = config();
        Renderer::new(&config).initialize(&mut doc);

        assert_eq!(doc.root_property("--color-primary"), Some("#111111"));
    }
}
