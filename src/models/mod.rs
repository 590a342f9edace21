pub mod models;

pub use models::{Comment, Connection, ConnectionStatus, Outcome, Post, PostUpdate, User};
