use ammonia::Builder;
use html_escape::decode_html_entities;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::errors::{Error, Result};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

pub fn sanitize_text(text: &str) -> String {
    // Plain text only: strip every tag, then undo ammonia's entity escaping
    let stripped = Builder::default()
        .tags(std::collections::HashSet::new())
        .clean(text)
        .to_string();
    decode_html_entities(&stripped).into_owned()
}

/// Trim, strip markup and bound the length of user-entered content.
pub fn clean_content(content: &str, max: usize) -> Result<String> {
    let clean = sanitize_text(content.trim());
    let clean = clean.trim();
    if clean.is_empty() {
        return Err(Error::EmptyContent);
    }

    let len = clean.chars().count();
    if len > max {
        return Err(Error::ContentTooLong { len, max });
    }
    Ok(clean.to_string())
}
