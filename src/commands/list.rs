//! List blog content

use anyhow::Result;

use crate::helpers::date::format_date;
use crate::Blog;

/// List blog content by type
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    let index = blog.build_index()?;

    match content_type {
        "post" | "posts" => {
            println!("Posts ({}):", index.len());
            for post in index.posts() {
                let date = post
                    .date
                    .map(|d| format_date(&d, &blog.config.date_format))
                    .unwrap_or_else(|| "(no date)".to_string());
                let title = post.title().unwrap_or(&post.permalink);
                println!("  {} - {} [{}]", date, title, post.permalink);
            }
        }
        "tag" | "tags" => {
            let tags = index.tag_counts();
            println!("Tags ({}):", tags.len());
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(())
}
