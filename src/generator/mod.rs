//! Generator module - renders the home page using the built-in chill theme

use anyhow::Result;
use std::fs;

use tera::Context;
use walkdir::WalkDir;

use crate::content::FeatureRecord;
use crate::helpers;
use crate::templates::{ConfigData, FeatureData, TemplateRenderer, HOME_CSS};
use crate::Site;

/// Static site generator using Tera templates
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let renderer = TemplateRenderer::new(&site.config)?;

        Ok(Self {
            site: site.clone(),
            renderer,
        })
    }

    /// Generate the entire site
    pub fn generate(&self, features: &[FeatureRecord]) -> Result<()> {
        // Ensure public directory exists
        fs::create_dir_all(&self.site.public_dir)?;

        // Write theme assets
        self.write_theme_assets()?;

        // Copy static assets (avatar image, etc.)
        self.copy_static_assets()?;

        // Render the home page at the root route
        self.generate_home_page(features)?;

        Ok(())
    }

    /// Render the composed home page and write it as the root route
    fn generate_home_page(&self, features: &[FeatureRecord]) -> Result<()> {
        let feature_data: Vec<FeatureData> = features.iter().map(FeatureData::from).collect();

        let mut context = self.create_base_context();
        context.insert("features", &feature_data);

        let html = self.renderer.render("home.html", &context)?;

        let output_path = self.site.public_dir.join("index.html");
        fs::write(&output_path, html)?;
        tracing::info!("Generated home page: {:?}", output_path);

        Ok(())
    }

    /// Create a base context with common variables
    fn create_base_context(&self) -> Context {
        let config = &self.site.config;

        let mut context = Context::new();
        context.insert("config", &self.build_config_data());
        context.insert("page_title", &format!("Hello from {}", config.title));
        context.insert("page_description", config.meta_description());
        context.insert("canonical_url", &helpers::full_url_for(config, "/"));
        context.insert("blog_path", &format!("/{}/", config.blog_dir));
        context.insert(
            "current_year",
            &chrono::Local::now().format("%Y").to_string(),
        );
        context
    }

    /// Build config data for templates
    fn build_config_data(&self) -> ConfigData {
        let config = &self.site.config;
        ConfigData {
            title: config.title.clone(),
            tagline: config.tagline.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            language: config.language.clone(),
            root: config.root.clone(),
            blog_dir: config.blog_dir.clone(),
            meta_generator: config.meta_generator,
        }
    }

    /// Write the embedded theme stylesheet
    fn write_theme_assets(&self) -> Result<()> {
        let css_dir = self.site.public_dir.join("css");
        fs::create_dir_all(&css_dir)?;
        fs::write(css_dir.join("home.css"), HOME_CSS)?;
        tracing::debug!("Wrote theme stylesheet");

        Ok(())
    }

    /// Copy static assets to the public directory, preserving relative paths
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.site.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if path.is_file() {
                let relative = path.strip_prefix(static_dir)?;
                let dest = self.site.public_dir.join(relative);

                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }

                fs::copy(path, &dest)?;
            }
        }

        Ok(())
    }
}
