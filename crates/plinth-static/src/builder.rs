//! Static site builder.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use walkdir::WalkDir;

use plinth_config::{Config, ConfigError};
use plinth_render::render_page;

use crate::assets::AssetPipeline;
use crate::page::landing_document;

/// Configuration for building a landing page site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Path to the landing page configuration file
    pub config_path: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Directory of static assets (logo, favicon) to copy into the output
    pub assets_dir: Option<PathBuf>,

    /// Minify the generated stylesheet
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("landing.toml"),
            output_dir: PathBuf::from("dist"),
            assets_dir: None,
            minify: true,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of asset files copied
    pub assets_copied: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read input: {0}")]
    ReadError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static landing-page builder.
pub struct SiteBuilder {
    config: BuildConfig,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Build the site: render the configured page and write it with its
    /// assets to the output directory.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let site_config = Config::load(&self.config.config_path)?;

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        // Render the page. The scroll enhancer is not attached here: its
        // initial fade-in styles only make sense for a host that owns an
        // event loop, and serializing them would hide content for good.
        let mut doc = landing_document();
        render_page(Some(&site_config), &mut doc);

        let html = doc.to_html();
        fs::write(self.config.output_dir.join("index.html"), html)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        self.generate_assets()?;
        let assets_copied = self.copy_assets()?;

        let duration = start.elapsed();

        Ok(BuildResult {
            assets_copied,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Write the generated stylesheet.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or(css)
        } else {
            css
        };
        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Copy user assets (logo, favicon, images) into the output.
    fn copy_assets(&self) -> Result<usize, BuildError> {
        let Some(ref assets_dir) = self.config.assets_dir else {
            return Ok(0);
        };

        if !assets_dir.exists() {
            tracing::warn!("Assets directory not found: {}", assets_dir.display());
            return Ok(0);
        }

        let target_root = self.config.output_dir.join("assets");
        let mut copied = 0;

        for entry in WalkDir::new(assets_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(assets_dir).unwrap_or(path);
            let target = target_root.join(relative);

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
            }
            fs::copy(path, &target).map_err(|e| {
                BuildError::ReadError(format!("{}: {}", path.display(), e))
            })?;
            copied += 1;
        }

        tracing::info!("Copied {} asset files from {}", copied, assets_dir.display());
        Ok(copied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE_CONFIG: &str = r#"
[site]
title = "Starfall"
author = "Tiny Studio"
year = "2026"

[product]
name = "Starfall"

[[features]]
title = "Open World"
description = "Roam freely"
highlight = "No loading screens"

[cta]
enabled = true
headline = "Stay Updated"
subheading = "Wishlist now"

[[cta.buttons]]
text = "Wishlist"
url = "https://store.example"
style = "primary"

[social.github]
enabled = true
url = "https://github.com/starfall"
"#;

    #[test]
    fn builds_rendered_page() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("landing.toml");
        let out = temp.path().join("dist");

        fs::write(&config_path, SAMPLE_CONFIG).unwrap();

        let builder = SiteBuilder::new(BuildConfig {
            config_path,
            output_dir: out.clone(),
            ..Default::default()
        });
        builder.build().unwrap();

        let html = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.contains("<title data-config=\"site.title\">Starfall</title>"));
        assert!(html.contains("Open World"));
        assert!(html.contains("Stay Updated"));
        assert!(html.contains("https://github.com/starfall"));

        let css = fs::read_to_string(out.join("assets/main.css")).unwrap();
        assert!(css.contains("--color-primary"));
    }

    #[test]
    fn copies_configured_assets() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("landing.toml");
        let assets = temp.path().join("assets");
        let out = temp.path().join("dist");

        fs::write(&config_path, SAMPLE_CONFIG).unwrap();
        fs::create_dir_all(&assets).unwrap();
        fs::write(assets.join("logo.svg"), "<svg></svg>").unwrap();

        let builder = SiteBuilder::new(BuildConfig {
            config_path,
            output_dir: out.clone(),
            assets_dir: Some(assets),
            minify: false,
        });
        let result = builder.build().unwrap();

        assert_eq!(result.assets_copied, 1);
        assert!(out.join("assets/logo.svg").exists());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let temp = tempdir().unwrap();

        let builder = SiteBuilder::new(BuildConfig {
            config_path: temp.path().join("absent.toml"),
            output_dir: temp.path().join("dist"),
            ..Default::default()
        });

        assert!(matches!(builder.build(), Err(BuildError::Config(_))));
    }
}
