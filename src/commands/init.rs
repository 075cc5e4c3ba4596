//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Site;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    // Create directory structure
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("static/img"))?;

    // Create default _config.yml
    let config_content = r#"# Site
title: RainChill
tagline: Life is short, code is long
description: ''
author: RainChill
language: zh-CN

# URL
url: http://example.com
root: /

# Directory
static_dir: static
public_dir: public
blog_dir: blog

# Metadata elements
meta_generator: true
"#;

    fs::write(target_dir.join("_config.yml"), config_content)?;

    // Placeholder avatar, replace with your own image
    let avatar = r##"<svg xmlns="http://www.w3.org/2000/svg" width="300" height="300" viewBox="0 0 300 300">
  <circle cx="150" cy="150" r="150" fill="#25c2a0"/>
  <text x="150" y="172" font-family="sans-serif" font-size="96" fill="#fff" text-anchor="middle">RC</text>
</svg>
"##;

    fs::write(target_dir.join("static/img/avatar.svg"), avatar)?;

    Ok(())
}

/// Run the init command with an existing Site instance
pub fn run(site: &Site) -> Result<()> {
    init_site(&site.base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_site_scaffolds_config_and_avatar() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        assert!(dir.path().join("_config.yml").exists());
        assert!(dir.path().join("static/img/avatar.svg").exists());

        // The scaffolded config must parse back with the shipped defaults
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.config.title, "RainChill");
        assert_eq!(site.config.blog_dir, "blog");
    }
}
