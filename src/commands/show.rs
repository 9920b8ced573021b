//! Show a single post by permalink

use anyhow::Result;

use crate::helpers::date::format_date;
use crate::Blog;

/// Print a post's metadata and rendered body
pub fn run(blog: &Blog, permalink: &str) -> Result<()> {
    let index = blog.build_index()?;

    let Some(post) = index.find_post(permalink) else {
        println!("No post found for permalink '{}'", permalink);
        return Ok(());
    };

    if let Some(title) = post.title() {
        println!("title: {}", title);
    }
    if let Some(date) = post.date {
        println!("date: {}", format_date(&date, &blog.config.date_format));
    }
    if !post.tags.is_empty() {
        println!("tags: {}", post.tags.join(", "));
    }
    for (key, value) in &post.extra {
        if key == "title" {
            continue;
        }
        if let Some(s) = value.as_str() {
            println!("{}: {}", key, s);
        }
    }
    println!();
    println!("{}", post.html);

    Ok(())
}
