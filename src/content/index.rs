//! The post index - built once at startup, read-only afterwards

use std::cmp::Ordering;
use std::collections::HashMap;

use super::{Post, RawDocument};

/// An immutable, date-descending collection of posts with permalink and
/// tag lookups
#[derive(Debug, Default)]
pub struct PostIndex {
    posts: Vec<Post>,
}

impl PostIndex {
    /// Build the index from raw documents.
    ///
    /// Posts are ordered by date descending. Posts sharing a date keep
    /// their input order, and posts with no parseable date sort after
    /// every dated post.
    pub fn build(docs: Vec<RawDocument>) -> Self {
        let mut posts: Vec<Post> = docs.into_iter().map(Post::from_raw).collect();

        // sort_by is stable, so equal dates keep input order
        posts.sort_by(|a, b| match (a.date, b.date) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        Self { posts }
    }

    /// All posts, newest first
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Look up a post by its permalink
    pub fn find_post(&self, permalink: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.permalink == permalink)
    }

    /// All posts carrying the tag, in index order.
    ///
    /// Tags are matched exactly; trimming happened at index time.
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| p.tags.iter().any(|t| t == tag))
            .collect()
    }

    /// Tag usage counts, most-used first (ties alphabetical)
    pub fn tag_counts(&self) -> Vec<(String, usize)> {
        let mut tags: HashMap<String, usize> = HashMap::new();
        for post in &self.posts {
            for tag in &post.tags {
                *tags.entry(tag.clone()).or_insert(0) += 1;
            }
        }

        let mut tags: Vec<_> = tags.into_iter().collect();
        tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        tags
    }
}
