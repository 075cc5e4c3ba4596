//! Generate static files

use anyhow::Result;

use crate::content;
use crate::generator::Generator;
use crate::Site;

/// Generate the static site
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let features = content::feature_list();
    tracing::info!("Loaded {} feature cards", features.len());

    let generator = Generator::new(site)?;
    generator.generate(features)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}
