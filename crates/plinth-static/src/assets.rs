//! Base stylesheet generation and minification.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the base stylesheet. Color values come from the custom
    /// properties the renderer injects on the document root.
    pub fn generate_css() -> String {
        BASE_CSS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const BASE_CSS: &str = r#"/* plinth landing page theme */

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: var(--color-darker, #1A252F);
  color: var(--color-text, #ECF0F1);
  line-height: 1.6;
}

/* Hero */
.hero {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  padding: 2rem;
  background: linear-gradient(180deg, var(--color-dark, #2C3E50), var(--color-darker, #1A252F));
}

.hero-logo {
  max-width: 240px;
  margin-bottom: 1.5rem;
}

.hero h1 {
  font-size: 3rem;
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.tagline {
  font-size: 1.25rem;
  color: var(--color-accent, #F39C12);
  margin-bottom: 2rem;
}

.scroll-indicator {
  position: absolute;
  bottom: 2rem;
  cursor: pointer;
  color: var(--color-primary, #4A90E2);
  animation: bounce 2s infinite;
}

@keyframes bounce {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(8px); }
}

/* Info blocks */
.info {
  max-width: 800px;
  margin: 0 auto;
  padding: 4rem 2rem;
}

.info-block {
  margin-bottom: 3rem;
}

.info-block h2 {
  font-size: 2rem;
  color: var(--color-primary, #4A90E2);
  margin-bottom: 0.75rem;
}

.info-tagline {
  color: var(--color-secondary, #2ECC71);
  font-weight: 600;
  margin-bottom: 0.5rem;
}

/* Features */
.features {
  max-width: 1000px;
  margin: 0 auto;
  padding: 4rem 2rem;
}

.features h2 {
  text-align: center;
  font-size: 2rem;
  margin-bottom: 2rem;
}

.features-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1.5rem;
}

.feature {
  background: var(--color-dark, #2C3E50);
  border-radius: 0.5rem;
  padding: 2rem 1.5rem;
  text-align: center;
}

.feature-icon {
  font-size: 2rem;
  color: var(--color-accent, #F39C12);
  margin-bottom: 1rem;
}

.feature-icon-number {
  width: 3rem;
  height: 3rem;
  margin: 0 auto 1rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: var(--color-primary, #4A90E2);
  color: var(--color-text, #ECF0F1);
  font-weight: 700;
}

.feature h3 {
  margin-bottom: 0.5rem;
}

.feature-highlight {
  color: var(--color-secondary, #2ECC71);
  font-weight: 600;
  margin-top: 0.75rem;
}

/* Call to action */
.cta-section {
  text-align: center;
  padding: 4rem 2rem;
  background: var(--color-dark, #2C3E50);
}

.cta-section.hidden {
  display: none;
}

.cta-section h2 {
  font-size: 2rem;
  margin-bottom: 0.5rem;
}

.cta-buttons {
  margin-top: 1.5rem;
  display: flex;
  gap: 1rem;
  justify-content: center;
  flex-wrap: wrap;
}

.btn {
  display: inline-block;
  padding: 0.75rem 1.75rem;
  border-radius: 0.375rem;
  text-decoration: none;
  font-weight: 600;
  transition: opacity 0.15s;
}

.btn:hover {
  opacity: 0.85;
}

.btn-primary {
  background: var(--color-primary, #4A90E2);
  color: var(--color-text, #ECF0F1);
}

.btn-secondary {
  background: transparent;
  color: var(--color-primary, #4A90E2);
  border: 2px solid var(--color-primary, #4A90E2);
}

/* Footer */
footer {
  text-align: center;
  padding: 3rem 2rem;
}

.social-links {
  display: flex;
  gap: 1.25rem;
  justify-content: center;
  margin-bottom: 1.5rem;
}

.social-link-icon,
.social-link-text {
  color: var(--color-text, #ECF0F1);
  text-decoration: none;
}

.social-link-icon:hover,
.social-link-text:hover {
  color: var(--color-accent, #F39C12);
}

.footer-credit {
  color: var(--color-text, #ECF0F1);
  opacity: 0.7;
  font-size: 0.875rem;
}
"#;
