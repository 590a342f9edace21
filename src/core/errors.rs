use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while composing new records or bootstrapping a store.
/// Store mutations themselves never fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("No current user")]
    NoCurrentUser,

    #[error("Content is empty")]
    EmptyContent,

    #[error("Content too long: {len} characters (max {max})")]
    ContentTooLong { len: usize, max: usize },

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Invalid seed: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
