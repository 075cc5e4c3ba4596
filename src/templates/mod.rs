//! Built-in chill theme templates using Tera template engine
//!
//! All templates of the chill theme are embedded directly in the binary,
//! along with its stylesheet. Helper functions are registered on the Tera
//! instance so templates can build links, headings and meta tags through
//! the same primitives the rest of the crate uses.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera, Value};

use crate::config::SiteConfig;
use crate::content::FeatureRecord;
use crate::helpers;

/// The theme stylesheet, written to `css/home.css` on generation
pub const HOME_CSS: &str = include_str!("chill/assets/home.css");

/// Template renderer with the embedded chill theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer bound to a site configuration
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let mut tera = Tera::default();

        // Disable autoescaping: feature descriptions are trusted HTML
        // fragments and must come through unchanged
        tera.autoescape_on(vec![]);

        // Register all templates
        tera.add_raw_templates(vec![
            ("layout.html", include_str!("chill/layout.html")),
            ("home.html", include_str!("chill/home.html")),
            // Partials
            (
                "partials/head.html",
                include_str!("chill/partials/head.html"),
            ),
            (
                "partials/hero.html",
                include_str!("chill/partials/hero.html"),
            ),
            (
                "partials/features.html",
                include_str!("chill/partials/features.html"),
            ),
            (
                "partials/footer.html",
                include_str!("chill/partials/footer.html"),
            ),
        ])?;

        register_functions(&mut tera, config);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render just the feature section
    ///
    /// The section is a standalone partial so it can be reused and tested
    /// in isolation from the page layout.
    pub fn render_features(&self, features: &[FeatureData]) -> Result<String> {
        let mut context = Context::new();
        context.insert("features", features);
        self.render("partials/features.html", &context)
    }
}

/// Register template-callable helper functions, bound to the site config
fn register_functions(tera: &mut Tera, config: &SiteConfig) {
    let cfg = config.clone();
    tera.register_function("css", move |args: &HashMap<String, Value>| {
        let path = string_arg(args, "path")?;
        Ok(Value::String(helpers::css(&cfg, &path)))
    });

    let cfg = config.clone();
    tera.register_function("link_to", move |args: &HashMap<String, Value>| {
        let path = string_arg(args, "path")?;
        let text = string_arg(args, "text")?;
        let class = opt_string_arg(args, "class");
        Ok(Value::String(helpers::link_to(
            &cfg,
            &path,
            &text,
            class.as_deref(),
        )))
    });

    let cfg = config.clone();
    tera.register_function("image_tag", move |args: &HashMap<String, Value>| {
        let path = string_arg(args, "path")?;
        let alt = opt_string_arg(args, "alt");
        let class = opt_string_arg(args, "class");
        Ok(Value::String(helpers::image_tag(
            &cfg,
            &path,
            alt.as_deref(),
            class.as_deref(),
        )))
    });

    tera.register_function("heading", |args: &HashMap<String, Value>| {
        let level = args.get("level").and_then(|v| v.as_u64()).unwrap_or(2) as u8;
        let text = string_arg(args, "text")?;
        let class = opt_string_arg(args, "class");
        Ok(Value::String(helpers::heading(
            level,
            &text,
            class.as_deref(),
        )))
    });

    tera.register_function("open_graph", |args: &HashMap<String, Value>| {
        let title = string_arg(args, "title")?;
        let description = opt_string_arg(args, "description").unwrap_or_default();
        let url = string_arg(args, "url")?;
        let site_name = string_arg(args, "site_name")?;
        Ok(Value::String(helpers::open_graph(
            &title,
            &description,
            &url,
            &site_name,
        )))
    });

    tera.register_function("meta_generator", |_args: &HashMap<String, Value>| {
        Ok(Value::String(helpers::meta_generator()))
    });
}

fn string_arg(args: &HashMap<String, Value>, name: &str) -> tera::Result<String> {
    args.get(name)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| tera::Error::msg(format!("missing string argument `{}`", name)))
}

fn opt_string_arg(args: &HashMap<String, Value>, name: &str) -> Option<String> {
    args.get(name).and_then(|v| v.as_str()).map(str::to_string)
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub root: String,
    pub blog_dir: String,
    pub meta_generator: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureData {
    pub title: String,
    pub description: String,
}

impl From<&FeatureRecord> for FeatureData {
    fn from(record: &FeatureRecord) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::feature_list;

    fn renderer() -> TemplateRenderer {
        TemplateRenderer::new(&SiteConfig::default()).unwrap()
    }

    fn feature_data() -> Vec<FeatureData> {
        feature_list().iter().map(FeatureData::from).collect()
    }

    #[test]
    fn test_feature_section_renders_cards_in_order() {
        let html = renderer().render_features(&feature_data()).unwrap();

        assert_eq!(html.matches("<h3").count(), 3);
        let first = html.find("关于本站").unwrap();
        let second = html.find("关于我").unwrap();
        let third = html.find("联系我").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_feature_section_empty_input() {
        let html = renderer().render_features(&[]).unwrap();

        assert!(html.contains(r#"<section class="features">"#));
        assert_eq!(html.matches("feature-card").count(), 0);
        assert_eq!(html.matches("<h3").count(), 0);
    }

    #[test]
    fn test_feature_section_is_deterministic() {
        let renderer = renderer();
        let features = feature_data();
        let first = renderer.render_features(&features).unwrap();
        let second = renderer.render_features(&features).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_description_links_preserved_verbatim() {
        let html = renderer().render_features(&feature_data()).unwrap();

        assert!(html.contains(r#"<a href="mailto:rainchill2022@foxmail.com">发送邮件</a>"#));
        assert!(html.contains(r#"href="https://github.com/facebook/docusaurus""#));
    }

    #[test]
    fn test_heading_function_available_in_templates() {
        let html = renderer().render_features(&feature_data()).unwrap();
        assert!(html.contains(r#"<h3 class="feature-title">关于本站</h3>"#));
    }
}
