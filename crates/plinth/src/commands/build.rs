//! Site build command.

use std::path::PathBuf;

use anyhow::Result;
use plinth_static::{BuildConfig, SiteBuilder};

/// Run the build command.
pub fn run(
    config: PathBuf,
    output: PathBuf,
    assets: Option<PathBuf>,
    minify: bool,
) -> Result<()> {
    tracing::info!("Building landing page...");

    let build_config = BuildConfig {
        config_path: config,
        output_dir: output,
        assets_dir: assets,
        minify,
    };

    let result = SiteBuilder::new(build_config).build()?;

    tracing::info!(
        "Built site with {} assets in {}ms",
        result.assets_copied,
        result.duration_ms
    );
    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
