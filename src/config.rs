pub const MAX_POST_LENGTH: usize = 5000;
pub const MAX_COMMENT_LENGTH: usize = 1000;

pub const POST_ID_PREFIX: &str = "post";
pub const COMMENT_ID_PREFIX: &str = "comment";
pub const CONNECTION_ID_PREFIX: &str = "conn";

pub const LOG_FILTER_ENV: &str = "SOCIAL_STORE_LOG";
pub const DEFAULT_LOG_FILTER: &str = "social_store=info";

pub fn max_post_length() -> usize {
    std::env::var("SOCIAL_STORE_MAX_POST_LENGTH")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(MAX_POST_LENGTH)
}

pub fn max_comment_length() -> usize {
    std::env::var("SOCIAL_STORE_MAX_COMMENT_LENGTH")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(MAX_COMMENT_LENGTH)
}

/// Path of a JSON snapshot to bootstrap from, if one is configured.
pub fn seed_path() -> Option<String> {
    std::env::var("SOCIAL_STORE_SEED")
        .ok()
        .filter(|v| !v.trim().is_empty())
}
