//! Typed async client for the JSONPlaceholder mock REST API.
//!
//! Every endpoint returns an [`types::ApiResponse`] envelope carrying the decoded
//! body together with the HTTP status code and reason phrase.

mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, ClientBuilder, RequestOptions, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use self::errors::Error;
pub use self::query::{CommentQuery, PhotoQuery, Query, TodoQuery};
pub use reqwest::Method;
