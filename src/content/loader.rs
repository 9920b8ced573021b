//! Content loader - reads markdown documents from the posts directory

use anyhow::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{frontmatter, MarkdownRenderer, RawDocument};

/// Loads raw documents from a directory of markdown files
pub struct ContentLoader {
    renderer: MarkdownRenderer,
}

impl ContentLoader {
    /// Create a new content loader
    pub fn new() -> Self {
        Self {
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load every markdown file under `posts_dir`.
    ///
    /// Files that fail to parse are skipped with a warning; a missing
    /// directory yields an empty set.
    pub fn load(&self, posts_dir: &Path) -> Result<Vec<RawDocument>> {
        if !posts_dir.exists() {
            return Ok(Vec::new());
        }

        let mut docs = Vec::new();

        for entry in WalkDir::new(posts_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                match self.load_document(path) {
                    Ok(doc) => docs.push(doc),
                    Err(e) => {
                        tracing::warn!("Failed to load document {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(docs)
    }

    /// Load a single markdown file
    fn load_document(&self, path: &Path) -> Result<RawDocument> {
        let content = fs::read_to_string(path)?;
        let (metadata, body) = frontmatter::parse(&content)?;
        let html = self.renderer.render(body)?;

        let filename = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        Ok(RawDocument {
            filename,
            html,
            metadata,
        })
    }
}

impl Default for ContentLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_post(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_load_documents() {
        let dir = tempfile::tempdir().unwrap();
        write_post(
            dir.path(),
            "hello.md",
            "---\ntitle: Hello\ndate: 2020-01-01\ntags: go, rust\n---\n# Heading\n\nBody text.\n",
        );
        write_post(dir.path(), "notes.txt", "not a markdown file");

        let loader = ContentLoader::new();
        let docs = loader.load(dir.path()).unwrap();

        assert_eq!(docs.len(), 1);
        let doc = &docs[0];
        assert_eq!(doc.filename, "hello.md");
        assert!(doc.html.contains("<h1>Heading</h1>"));
        assert_eq!(
            doc.metadata.get("title").and_then(|v| v.as_str()),
            Some("Hello")
        );
        assert_eq!(
            doc.metadata.get("tags").and_then(|v| v.as_str()),
            Some("go, rust")
        );
    }

    #[test]
    fn test_document_without_frontmatter() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "plain.md", "Just a paragraph.\n");

        let loader = ContentLoader::new();
        let docs = loader.load(dir.path()).unwrap();

        assert_eq!(docs.len(), 1);
        assert!(docs[0].metadata.is_empty());
        assert!(docs[0].html.contains("<p>Just a paragraph.</p>"));
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let loader = ContentLoader::new();
        let docs = loader.load(Path::new("/nonexistent/posts")).unwrap();
        assert!(docs.is_empty());
    }
}
