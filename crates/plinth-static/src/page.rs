//! The fixed landing-page document.
//!
//! The skeleton exposes the hooks the renderer and scroll enhancer look
//! for (`#features-container`, `#cta-section`, `#social-links`,
//! `#hero-logo`, `.scroll-indicator`, `#game-info`) and tags copy and
//! metadata elements with `data-config` binding markers. Everything else
//! about the markup is inert.

use plinth_dom::{Document, NodeId};

/// Build the landing-page skeleton.
pub fn landing_document() -> Document {
    let mut doc = Document::new();
    build_head(&mut doc);
    build_body(&mut doc);
    doc
}

fn build_head(doc: &mut Document) {
    let head = doc.head();

    let charset = doc.create_element("meta");
    doc.set_attribute(charset, "charset", "utf-8");
    doc.append_child(head, charset);

    let viewport = doc.create_element("meta");
    doc.set_attribute(viewport, "name", "viewport");
    doc.set_attribute(viewport, "content", "width=device-width, initial-scale=1");
    doc.append_child(head, viewport);

    let title = doc.create_element("title");
    doc.set_attribute(title, "data-config", "site.title");
    doc.set_text_content(title, "Landing Page");
    doc.append_child(head, title);

    bound_meta(doc, head, "name", "description", "site.description");
    bound_meta(doc, head, "property", "og:title", "site.title");
    bound_meta(doc, head, "property", "og:description", "site.description");
    bound_meta(doc, head, "property", "og:image", "meta.og_image");
    bound_meta(doc, head, "property", "og:type", "meta.og_type");
    bound_meta(doc, head, "name", "theme-color", "meta.theme_color");

    let favicon = doc.create_element("link");
    doc.set_attribute(favicon, "rel", "icon");
    doc.set_attribute(favicon, "data-config", "advanced.favicon_path");
    doc.append_child(head, favicon);

    let stylesheet = doc.create_element("link");
    doc.set_attribute(stylesheet, "rel", "stylesheet");
    doc.set_attribute(stylesheet, "href", "assets/main.css");
    doc.append_child(head, stylesheet);
}

fn bound_meta(doc: &mut Document, head: NodeId, key: &str, name: &str, path: &str) {
    let meta = doc.create_element("meta");
    doc.set_attribute(meta, key, name);
    doc.set_attribute(meta, "data-config", path);
    doc.append_child(head, meta);
}

fn build_body(doc: &mut Document) {
    let body = doc.body();

    // Hero.
    let hero = doc.create_element("header");
    doc.set_attribute(hero, "class", "hero");

    let logo = doc.create_element("img");
    doc.set_attribute(logo, "id", "hero-logo");
    doc.set_attribute(logo, "class", "hero-logo");
    doc.set_attribute(logo, "alt", "Logo");
    doc.append_child(hero, logo);

    let name = doc.create_element("h1");
    doc.set_attribute(name, "data-config", "product.name");
    doc.append_child(hero, name);

    let tagline = doc.create_element("p");
    doc.set_attribute(tagline, "class", "tagline");
    doc.set_attribute(tagline, "data-config", "site.tagline");
    doc.append_child(hero, tagline);

    let hero_cta = doc.create_element("a");
    doc.set_attribute(hero_cta, "class", "btn btn-primary");
    doc.set_attribute(hero_cta, "href", "#game-info");
    doc.set_text_content(hero_cta, "Learn More");
    doc.append_child(hero, hero_cta);

    let indicator = doc.create_element("div");
    doc.set_attribute(indicator, "class", "scroll-indicator");
    doc.set_text_content(indicator, "\u{25BC}");
    doc.append_child(hero, indicator);

    doc.append_child(body, hero);

    let main = doc.create_element("main");

    // Info / story section, the scroll-indicator landmark.
    let info = doc.create_element("section");
    doc.set_attribute(info, "id", "game-info");
    doc.set_attribute(info, "class", "info");

    let story = doc.create_element("div");
    doc.set_attribute(story, "class", "info-block");
    let story_headline = doc.create_element("h2");
    doc.set_attribute(story_headline, "data-config", "story.headline");
    doc.append_child(story, story_headline);
    let story_tagline = doc.create_element("p");
    doc.set_attribute(story_tagline, "class", "info-tagline");
    doc.set_attribute(story_tagline, "data-config", "story.tagline");
    doc.append_child(story, story_tagline);
    let story_description = doc.create_element("p");
    doc.set_attribute(story_description, "data-config", "story.description");
    doc.append_child(story, story_description);
    doc.append_child(info, story);

    let about = doc.create_element("div");
    doc.set_attribute(about, "class", "info-block");
    let about_text = doc.create_element("p");
    doc.set_attribute(about_text, "data-config", "product.detailed_description");
    doc.append_child(about, about_text);
    doc.append_child(info, about);

    doc.append_child(main, info);

    // Features.
    let features = doc.create_element("section");
    doc.set_attribute(features, "class", "features");
    let features_heading = doc.create_element("h2");
    doc.set_text_content(features_heading, "Features");
    doc.append_child(features, features_heading);
    let container = doc.create_element("div");
    doc.set_attribute(container, "id", "features-container");
    doc.set_attribute(container, "class", "features-grid");
    doc.append_child(features, container);
    doc.append_child(main, features);

    // Call to action; hidden until the renderer reveals it.
    let cta = doc.create_element("section");
    doc.set_attribute(cta, "id", "cta-section");
    doc.set_attribute(cta, "class", "cta-section hidden");
    doc.append_child(main, cta);

    doc.append_child(body, main);

    // Footer.
    let footer = doc.create_element("footer");
    let social = doc.create_element("div");
    doc.set_attribute(social, "id", "social-links");
    doc.set_attribute(social, "class", "social-links");
    doc.append_child(footer, social);

    let credit = doc.create_element("p");
    doc.set_attribute(credit, "class", "footer-credit");
    let copyright = doc.create_element("span");
    doc.set_text_content(copyright, "\u{A9} ");
    doc.append_child(credit, copyright);
    let year = doc.create_element("span");
    doc.set_attribute(year, "data-config", "site.year");
    doc.append_child(credit, year);
    let spacer = doc.create_text(" ");
    doc.append_child(credit, spacer);
    let author = doc.create_element("span");
    doc.set_attribute(author, "data-config", "site.author");
    doc.append_child(credit, author);
    doc.append_child(footer, credit);

    doc.append_child(body, footer);
}
