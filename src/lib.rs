//! bloglet: a small markdown blog engine
//!
//! Loads markdown posts with front-matter from a content directory and
//! builds an immutable, date-descending index answering permalink and
//! tag lookups.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::loader::ContentLoader;
use content::PostIndex;

/// The blog application
#[derive(Clone)]
pub struct Blog {
    /// Blog configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Posts directory
    pub posts_dir: PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
        })
    }

    /// Load all posts and build the index.
    ///
    /// Runs once at startup; the returned index is read-only.
    pub fn build_index(&self) -> Result<PostIndex> {
        let loader = ContentLoader::new();
        let docs = loader.load(&self.posts_dir)?;
        Ok(PostIndex::build(docs))
    }
}
