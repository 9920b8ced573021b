//! Front-matter extraction

use thiserror::Error;

use super::Metadata;

/// Errors from malformed front-matter blocks.
///
/// Only JSON front-matter can fail hard; YAML that does not deserialize
/// degrades to an empty mapping with a warning.
#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("invalid JSON front-matter: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unterminated JSON front-matter")]
    UnterminatedJson,
}

/// Split a document into its front-matter mapping and body.
///
/// Supports YAML front-matter between `---` fences and JSON front-matter
/// (`;;;`-fenced or a leading object). A document without front-matter
/// yields an empty mapping and its full content as body.
pub fn parse(content: &str) -> Result<(Metadata, &str), FrontMatterError> {
    let content = content.trim_start();

    if content.starts_with("---") {
        return Ok(parse_yaml(content));
    }

    if content.starts_with(";;;") || content.starts_with('{') {
        return parse_json(content);
    }

    Ok((Metadata::new(), content))
}

fn parse_yaml(content: &str) -> (Metadata, &str) {
    let rest = &content[3..]; // skip opening ---
    let rest = rest.trim_start_matches(['\n', '\r']);

    let Some(end_pos) = rest.find("\n---") else {
        // no closing fence, treat as plain content
        return (Metadata::new(), content);
    };

    let yaml_content = &rest[..end_pos];
    let remaining = &rest[end_pos + 4..]; // skip \n---
    let remaining = remaining.trim_start_matches(['\n', '\r']);

    if yaml_content.trim().is_empty() {
        return (Metadata::new(), remaining);
    }

    match serde_yaml::from_str::<Metadata>(yaml_content) {
        Ok(metadata) => (metadata, remaining),
        Err(e) => {
            tracing::warn!("Failed to parse YAML front-matter, treating as content: {}", e);
            (Metadata::new(), content)
        }
    }
}

fn parse_json(content: &str) -> Result<(Metadata, &str), FrontMatterError> {
    // ;;;-fenced JSON
    if let Some(rest) = content.strip_prefix(";;;") {
        let end_pos = rest.find(";;;").ok_or(FrontMatterError::UnterminatedJson)?;
        let metadata: Metadata = serde_json::from_str(&rest[..end_pos])?;
        let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);
        return Ok((metadata, remaining));
    }

    // a leading JSON object; find the matching closing brace
    let mut depth = 0usize;
    for (i, c) in content.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let metadata: Metadata = serde_json::from_str(&content[..i + 1])?;
                    let remaining = content[i + 1..].trim_start_matches(['\n', '\r']);
                    return Ok((metadata, remaining));
                }
            }
            _ => {}
        }
    }

    Err(FrontMatterError::UnterminatedJson)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
date: 2020-01-01
tags: go, rust
---

This is the content.
"#;

        let (metadata, body) = parse(content).unwrap();
        assert_eq!(
            metadata.get("title").and_then(|v| v.as_str()),
            Some("Hello World")
        );
        assert_eq!(
            metadata.get("date").and_then(|v| v.as_str()),
            Some("2020-01-01")
        );
        assert_eq!(
            metadata.get("tags").and_then(|v| v.as_str()),
            Some("go, rust")
        );
        assert!(body.contains("This is the content."));
    }

    #[test]
    fn test_field_order_preserved() {
        let content = "---\nzebra: 1\nalpha: 2\nmango: 3\n---\nbody\n";
        let (metadata, _) = parse(content).unwrap();
        let keys: Vec<_> = metadata.keys().cloned().collect();
        assert_eq!(keys, vec!["zebra", "alpha", "mango"]);
    }

    #[test]
    fn test_no_frontmatter() {
        let (metadata, body) = parse("Just some markdown.\n").unwrap();
        assert!(metadata.is_empty());
        assert!(body.contains("Just some markdown."));
    }

    #[test]
    fn test_unclosed_fence_is_content() {
        let content = "---\ntitle: broken\n\nno closing fence";
        let (metadata, body) = parse(content).unwrap();
        assert!(metadata.is_empty());
        assert!(body.starts_with("---"));
    }

    #[test]
    fn test_parse_json_frontmatter() {
        let content = "{\"title\": \"Test Post\", \"tags\": \"a, b\"}\n\nBody here.\n";
        let (metadata, body) = parse(content).unwrap();
        assert_eq!(
            metadata.get("title").and_then(|v| v.as_str()),
            Some("Test Post")
        );
        assert!(body.contains("Body here."));
    }

    #[test]
    fn test_fenced_json_frontmatter() {
        let content = ";;;{\"title\": \"Fenced\"};;;\nBody.\n";
        let (metadata, body) = parse(content).unwrap();
        assert_eq!(
            metadata.get("title").and_then(|v| v.as_str()),
            Some("Fenced")
        );
        assert_eq!(body, "Body.\n");
    }

    #[test]
    fn test_unterminated_json_is_error() {
        assert!(parse(";;;{\"title\": \"oops\"}").is_err());
    }

    #[test]
    fn test_bad_yaml_degrades_to_content() {
        let content = "---\n: [ not yaml ::\n---\nbody\n";
        let (metadata, body) = parse(content).unwrap();
        assert!(metadata.is_empty());
        assert!(body.starts_with("---"));
    }
}
