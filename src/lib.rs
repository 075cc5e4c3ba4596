//! rainchill-rs: the RainChill personal homepage as a static site generator
//!
//! This crate renders a fixed home page (hero header plus a feature card
//! section) through embedded Tera templates and writes the result to a
//! public output directory.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main application handle
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Static assets directory
    pub static_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new Site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let static_dir = base_dir.join(&config.static_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            static_dir,
            public_dir,
        })
    }

    /// Initialize a new site
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
