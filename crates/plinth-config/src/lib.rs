//! Configuration model for plinth landing pages.
//!
//! The configuration is a fixed-shape tree constructed once per render and
//! treated as read-only afterwards. It can be loaded from TOML, JSON, or
//! YAML, and individual leaves can be resolved by dot-path for binding
//! markers embedded in the document.

pub mod loader;
pub mod model;
pub mod resolve;

pub use loader::ConfigError;
pub use model::{
    Advanced, Config, Cta, CtaButton, Feature, Logo, MetaTags, Palette, Product, Site,
    SocialEntry, Story, Visuals,
};
pub use resolve::Resolver;
