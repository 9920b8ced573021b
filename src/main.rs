//! CLI entry point for bloglet

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bloglet")]
#[command(version)]
#[command(about = "A small markdown blog engine", long_about = None)]
struct Cli {
    /// Set the blog directory (defaults to current directory)
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
    /// List blog content
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Show a post by permalink
    Show {
        /// Permalink of the post (filename without .md)
        permalink: String,
    },

    /// List posts carrying a tag
    Tag {
        /// Tag to filter by (exact match)
        tag: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "bloglet=debug,info"
    } else {
        "bloglet=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { r#type } => {
            let blog = bloglet::Blog::new(&base_dir)?;
            bloglet::commands::list::run(&blog, &r#type)?;
        }

        Commands::Show { permalink } => {
            let blog = bloglet::Blog::new(&base_dir)?;
            bloglet::commands::show::run(&blog, &permalink)?;
        }

        Commands::Tag { tag } => {
            let blog = bloglet::Blog::new(&base_dir)?;
            bloglet::commands::tag::run(&blog, &tag)?;
        }

        Commands::Version => {
            println!("bloglet version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
