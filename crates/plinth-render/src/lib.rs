//! Renderer for plinth landing pages.
//!
//! Projects a configuration tree onto a headless document in six ordered
//! passes (binding substitution, palette injection, feature cards, CTA,
//! social links, icon-kit script), plus an independent scroll enhancer
//! that registers smooth-scroll and fade-in behavior as explicit event
//! handlers.

pub mod icons;
pub mod renderer;
pub mod scroll;

pub use icons::{icon_kit_usable, kit_script_url, platform_style, PlatformStyle};
pub use renderer::{render_page, Renderer};
pub use scroll::ScrollEnhancer;
