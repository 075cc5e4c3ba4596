//! List site content

use anyhow::Result;

use crate::content;
use crate::helpers::{strip_html, truncate, url_for};
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    match content_type {
        "feature" | "features" => {
            let features = content::feature_list();
            println!("Features ({}):", features.len());
            for feature in features {
                println!(
                    "  {} - {}",
                    feature.title,
                    truncate(&strip_html(&feature.description), 40, None)
                );
            }
        }
        "route" | "routes" => {
            println!("Routes:");
            println!("  {} -> index.html", url_for(&site.config, ""));
            println!(
                "  {} (blog, linked from the hero)",
                url_for(&site.config, &format!("{}/", site.config.blog_dir))
            );
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: feature, route", content_type);
        }
    }

    Ok(())
}
