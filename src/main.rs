//! CLI entry point for rainchill-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rainchill-rs")]
#[command(author = "RainChill")]
#[command(version = "0.1.0")]
#[command(about = "The RainChill personal homepage as a static site generator", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate,

    /// Clean the public folder
    Clean,

    /// List site information
    List {
        /// Type of content to list (feature, route)
        #[arg(default_value = "feature")]
        r#type: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "rainchill_rs=debug,info"
    } else {
        "rainchill_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            rainchill_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized empty site in {:?}", target_dir);
        }

        Commands::Generate => {
            let site = rainchill_rs::Site::new(&base_dir)?;
            tracing::info!("Generating static files...");
            rainchill_rs::commands::generate::run(&site)?;
            println!("Generated successfully!");
        }

        Commands::Clean => {
            let site = rainchill_rs::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let site = rainchill_rs::Site::new(&base_dir)?;
            rainchill_rs::commands::list::run(&site, &r#type)?;
        }

        Commands::Version => {
            println!("rainchill-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
