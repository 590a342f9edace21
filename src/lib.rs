//! In-memory social graph of a single viewer: users, posts, comments and
//! follow connections, with denormalized counters kept consistent by every
//! mutation.

pub mod comments;
pub mod config;
pub mod core;
pub mod dates;
pub mod follow;
pub mod logging;
pub mod models;
pub mod posts;
pub mod store;
pub mod users;

pub use crate::core::db::{demo_seed, load_seed};
pub use crate::core::errors::{Error, Result};
pub use crate::models::{Comment, Connection, ConnectionStatus, Outcome, Post, PostUpdate, User};
pub use crate::store::{SocialStore, Snapshot};
