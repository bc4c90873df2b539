//! Cosmetic interaction layer: smooth anchor scrolling, fade-in on view,
//! and the scroll-indicator affordance.
//!
//! Independent of the renderer: it attaches with or without a
//! configuration and registers explicit handlers on the DOM port. Hosts
//! drive the handlers by dispatching synthetic clicks and intersection
//! reports; there is no ordering requirement relative to the renderer.

use plinth_config::Config;
use plinth_dom::{Document, Events, NodeId, ScrollBehavior};

/// Classes of content blocks that fade in on first view.
const FADE_IN_CLASSES: &[&str] = &["feature", "info-block", "cta-section"];

/// Landmark the scroll indicator jumps to.
const INDICATOR_TARGET_ID: &str = "game-info";

const FADE_IN_THRESHOLD: f64 = 0.1;
const FADE_IN_ROOT_MARGIN_BOTTOM: f64 = -100.0;

/// Scroll behaviors wired against a document.
pub struct ScrollEnhancer {
    events: Events,
    animations_enabled: bool,
}

impl ScrollEnhancer {
    /// Attach smooth scrolling, the fade-in watcher (when enabled), and
    /// the scroll-indicator handler. Fade-in defaults to enabled when no
    /// configuration is available.
    pub fn attach(doc: &mut Document, config: Option<&Config>) -> Self {
        let animations_enabled = config
            .map(|c| c.advanced.enable_scroll_animations)
            .unwrap_or(true);

        let mut events = Events::new();

        Self::wire_smooth_scroll(doc, &mut events);
        if animations_enabled {
            Self::wire_fade_in(doc, &mut events);
        }
        Self::wire_scroll_indicator(doc, &mut events);

        let product = config
            .map(|c| c.product.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("Landing Page");
        tracing::info!("{product} landing page initialized");

        Self {
            events,
            animations_enabled,
        }
    }

    pub fn animations_enabled(&self) -> bool {
        self.animations_enabled
    }

    /// Dispatch a synthetic click. Returns whether default navigation was
    /// suppressed.
    pub fn dispatch_click(&self, doc: &mut Document, target: NodeId) -> bool {
        self.events.dispatch_click(doc, target)
    }

    /// Report a visibility ratio for an observed element.
    pub fn dispatch_intersection(&mut self, doc: &mut Document, target: NodeId, ratio: f64) {
        self.events.dispatch_intersection(doc, target, ratio);
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Same-page anchors suppress navigation and smooth-scroll to their
    /// target, silently no-oping when the target is missing.
    fn wire_smooth_scroll(doc: &Document, events: &mut Events) {
        for anchor in doc.anchors_with_fragment_href() {
            events.on_click(anchor, |doc, node, state| {
                state.prevent_default();

                let Some(href) = doc.attribute(node, "href").map(str::to_owned) else {
                    return;
                };
                let fragment = href.trim_start_matches('#');
                if let Some(target) = doc.element_by_id(fragment) {
                    doc.scroll_to(target, ScrollBehavior::Smooth);
                }
            });
        }
    }

    /// Content blocks start hidden and offset; the watcher reveals each
    /// one the first time it becomes sufficiently visible.
    fn wire_fade_in(doc: &mut Document, events: &mut Events) {
        let mut targets: Vec<NodeId> = Vec::new();
        for class in FADE_IN_CLASSES {
            for el in doc.elements_with_class(class) {
                if !targets.contains(&el) {
                    targets.push(el);
                }
            }
        }

        for &el in &targets {
            doc.set_style(el, "opacity", "0");
            doc.set_style(el, "transform", "translateY(30px)");
            doc.set_style(el, "transition", "opacity 0.6s ease, transform 0.6s ease");
        }

        events.observe_intersections(
            FADE_IN_THRESHOLD,
            FADE_IN_ROOT_MARGIN_BOTTOM,
            targets,
            |doc, node| {
                doc.set_style(node, "opacity", "1");
                doc.set_style(node, "transform", "translateY(0)");
            },
        );
    }

    fn wire_scroll_indicator(doc: &Document, events: &mut Events) {
        for indicator in doc.elements_with_class("scroll-indicator") {
            events.on_click(indicator, |doc, _node, _state| {
                if let Some(target) = doc.element_by_id(INDICATOR_TARGET_ID) {
                    doc.scroll_to(target, ScrollBehavior::Smooth);
                }
            });
        }
    }
}

impl std::fmt::Debug for ScrollEnhancer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollEnhancer")
            .field("animations_enabled", &self.animations_enabled)
            .field("events", &self.events)
            .finish()
    }
}
