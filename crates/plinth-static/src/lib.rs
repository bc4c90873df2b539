//! Static site builder for plinth landing pages.
//!
//! Provides the fixed landing-page document skeleton, the base stylesheet
//! pipeline, and a builder that renders a configuration into `dist/`.

pub mod assets;
pub mod builder;
pub mod page;

pub use assets::AssetPipeline;
pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use page::landing_document;
