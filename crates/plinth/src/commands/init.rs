//! Initialize a landing page project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing plinth project...");

    let config_path = Path::new("landing.toml");
    if config_path.exists() && !yes {
        tracing::warn!("landing.toml already exists. Use --yes to overwrite.");
        return Ok(());
    }

    fs::write(config_path, STARTER_CONFIG).context("Failed to write landing.toml")?;
    tracing::info!("Created landing.toml");

    let assets_dir = Path::new("assets");
    if !assets_dir.exists() {
        fs::create_dir_all(assets_dir).context("Failed to create assets directory")?;
        tracing::info!("Created assets/ (drop your logo and favicon here)");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Edit landing.toml, then run 'plinth build'.");

    Ok(())
}

const STARTER_CONFIG: &str = r##"# Landing page configuration
# Edit this file to customize your page - all settings in one place.

[site]
title = "My Game - My Tagline"
description = "My Game Description"
tagline = "My Game Tagline"
url = "https://mygame.com"
author = "My Company"
year = "2026"

[product]
name = "My Game"
short_description = "My Game Short Description"
full_description = "My Game Description"
detailed_description = "My Game Detailed Description"

[story]
headline = "My Game Story Headline"
tagline = "My Game Story Tagline"
description = "My Game Story Description"

# Feature cards, rendered in order. Leave icon unset to use numbered
# circles, or set an icon-kit glyph class (e.g. "fa-solid fa-rocket").
[[features]]
title = "Feature 1"
description = "Feature 1 Description"
highlight = "Feature 1 Highlight"

[[features]]
title = "Feature 2"
description = "Feature 2 Description"
highlight = "Feature 2 Highlight"

[[features]]
title = "Feature 3"
description = "Feature 3 Description"
highlight = "Feature 3 Highlight"

[[features]]
title = "Feature 4"
description = "Feature 4 Description"
highlight = "Feature 4 Highlight"

[cta]
enabled = true
headline = "Stay Updated"
subheading = "Coming soon to Steam!"

[[cta.buttons]]
text = "Wishlist on Steam"
url = "#"
style = "primary"

[[cta.buttons]]
text = "Join our Discord"
url = "#"
style = "secondary"

# Set enabled = false to hide individual platforms.
[social.bluesky]
enabled = true
url = "#"

[social.discord]
enabled = true
url = "#"

[social.github]
enabled = true
url = "#"

[social.youtube]
enabled = true
url = "#"

[social.twitter]
enabled = true
url = "#"

[social.instagram]
enabled = true
url = "#"

[visuals.logo]
file = "assets/logo.svg"
alt = "Logo"

[visuals.colors]
primary = "#4A90E2"
secondary = "#2ECC71"
accent = "#F39C12"
dark = "#2C3E50"
darker = "#1A252F"
text = "#ECF0F1"
text_dark = "#2C3E50"

[meta]
og_image = "#"
og_type = "website"
theme_color = "#00fff9"
keywords = []

[advanced]
enable_scroll_animations = true
# font_awesome_kit = "abc123def456"
favicon_path = "favicon.ico"
"##;
