//! List posts carrying a tag

use anyhow::Result;

use crate::helpers::date::format_date;
use crate::Blog;

/// Print all posts tagged with `tag`, newest first
pub fn run(blog: &Blog, tag: &str) -> Result<()> {
    let index = blog.build_index()?;
    let posts = index.find_by_tag(tag);

    println!("Posts tagged '{}' ({}):", tag, posts.len());
    for post in posts {
        let date = post
            .date
            .map(|d| format_date(&d, &blog.config.date_format))
            .unwrap_or_else(|| "(no date)".to_string());
        println!("  {} - {}", date, post.permalink);
    }

    Ok(())
}
