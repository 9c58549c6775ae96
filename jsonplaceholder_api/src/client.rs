//! HTTP client for the JSONPlaceholder API.

use std::time::Duration;

use reqwest::{header::ACCEPT, Method};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    query::{CommentQuery, PhotoQuery, Query, TodoQuery},
    types::{
        Album, ApiResponse, Comment, CreatePost, Photo, Post, Todo, UpdatePost, UpdatedPost, User,
    },
    Error,
};

/// Root of the public JSONPlaceholder service.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Per-request timeout used unless the builder overrides it.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the JSONPlaceholder API.
///
/// Base URL and timeout are fixed at construction. The client holds no other
/// state, so a single instance (or its clones, which share one connection
/// pool) can serve concurrent callers.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    /// Base URL without a trailing slash. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
    timeout_ms: u64,
}

/// Builder for [`Client`].
#[derive(Clone, Debug)]
pub struct ClientBuilder {
    base_url: String,
    timeout_ms: u64,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientBuilder {
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Sets the timeout in milliseconds applied to every request.
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        if self.timeout_ms == 0 {
            return Err(Error::Validation(
                "Timeout must be greater than zero".to_string(),
            ));
        }
        let base_api_url = self.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_api_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", base_api_url, e);
            Error::request(e)
        })?;
        let http = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .timeout(Duration::from_millis(self.timeout_ms))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::request(e)
            })?;
        Ok(Client {
            http,
            base_api_url,
            timeout_ms: self.timeout_ms,
        })
    }
}

/// Optional parts of a request. Each one is attached only when set.
pub struct RequestOptions<'a, B: ?Sized = ()> {
    body: Option<&'a B>,
    query: Option<&'a (dyn Query + Sync)>,
}

impl<'a> RequestOptions<'a, ()> {
    pub fn new() -> Self {
        Self {
            body: None,
            query: None,
        }
    }
}

impl<'a> Default for RequestOptions<'a, ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, B: ?Sized> RequestOptions<'a, B> {
    /// Sends `body` as the JSON request body.
    pub fn with_body<C: ?Sized>(self, body: &'a C) -> RequestOptions<'a, C> {
        RequestOptions {
            body: Some(body),
            query: self.query,
        }
    }

    pub fn with_query(mut self, query: &'a (dyn Query + Sync)) -> Self {
        self.query = Some(query);
        self
    }
}

impl Client {
    /// Creates a client for the public service with the default timeout.
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::builder().base_url(base_url).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    fn get_url(&self, path: &str, query: Option<&(dyn Query + Sync)>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::request(e)
        })?;
        Ok(match query {
            Some(query) if !query.is_empty() => query.add_to_url(&url),
            _ => url,
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            tracing::error!("No response received within {}ms", self.timeout_ms);
            Error::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else {
            tracing::error!("Request failed: {}", err);
            Error::request(err)
        }
    }

    /// Performs one request against `path` (relative to the base URL) and
    /// wraps the decoded body in an [`ApiResponse`].
    ///
    /// Error-class statuses become [`Error::Api`], an expired timeout becomes
    /// [`Error::Timeout`], and every other failure [`Error::Request`].
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions<'_, B>,
    ) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.get_url(path, options.query)?;
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method.clone(), url)
            .header(ACCEPT, "application/json");
        if let Some(body) = options.body {
            request = request.json(body);
        }

        let resp = request.send().await.map_err(|e| self.transport_error(e))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| self.transport_error(e))?;
        tracing::debug!("{} {} -> {}", method, path, status);

        if status.is_client_error() || status.is_server_error() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::Api {
                status: status.as_u16(),
                message: format!("Request failed with status code {}", status.as_u16()),
                body: snippet,
            });
        }

        let data = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::request(e)
        })?;

        Ok(ApiResponse {
            data,
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        })
    }

    async fn get<T>(
        &self,
        path: &str,
        query: Option<&(dyn Query + Sync)>,
    ) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
    {
        let options = match query {
            Some(query) => RequestOptions::new().with_query(query),
            None => RequestOptions::new(),
        };
        self.request(Method::GET, path, options).await
    }

    /// Fetches all posts.
    pub async fn get_posts(&self) -> Result<ApiResponse<Vec<Post>>, Error> {
        self.get("/posts", None).await
    }

    /// Fetches a single post. Ids below 1 are rejected without a request.
    pub async fn get_post(&self, id: i64) -> Result<ApiResponse<Post>, Error> {
        if id <= 0 {
            tracing::warn!("Rejected post id {}", id);
            return Err(Error::Validation(
                "Invalid post ID: must be a positive integer".to_string(),
            ));
        }
        self.get(format!("/posts/{}", id).as_str(), None).await
    }

    /// Fetches the comments attached to a post.
    pub async fn get_post_comments(&self, post_id: i64) -> Result<ApiResponse<Vec<Comment>>, Error> {
        self.get(format!("/posts/{}/comments", post_id).as_str(), None)
            .await
    }

    /// Creates a post. Title and body must be non-empty; the upstream service
    /// answers with the echoed post and a fresh id but stores nothing.
    pub async fn create_post(&self, post: &CreatePost) -> Result<ApiResponse<Post>, Error> {
        if post.title.is_empty() || post.body.is_empty() {
            tracing::warn!("Rejected post with empty title or body");
            return Err(Error::Validation("Title and body are required".to_string()));
        }
        self.request(Method::POST, "/posts", RequestOptions::new().with_body(post))
            .await
    }

    /// Replaces a post.
    pub async fn update_post(
        &self,
        id: i64,
        post: &UpdatePost,
    ) -> Result<ApiResponse<UpdatedPost>, Error> {
        self.request(
            Method::PUT,
            format!("/posts/{}", id).as_str(),
            RequestOptions::new().with_body(post),
        )
        .await
    }

    /// Updates only the fields set in `post`.
    pub async fn patch_post(
        &self,
        id: i64,
        post: &UpdatePost,
    ) -> Result<ApiResponse<UpdatedPost>, Error> {
        self.request(
            Method::PATCH,
            format!("/posts/{}", id).as_str(),
            RequestOptions::new().with_body(post),
        )
        .await
    }

    /// Deletes a post. The upstream service answers `{}`.
    pub async fn delete_post(&self, id: i64) -> Result<ApiResponse<serde_json::Value>, Error> {
        self.request(
            Method::DELETE,
            format!("/posts/{}", id).as_str(),
            RequestOptions::new(),
        )
        .await
    }

    pub async fn get_comments(
        &self,
        query: Option<&CommentQuery>,
    ) -> Result<ApiResponse<Vec<Comment>>, Error> {
        self.get("/comments", query.map(|q| q as &(dyn Query + Sync)))
            .await
    }

    pub async fn get_comment(&self, id: i64) -> Result<ApiResponse<Comment>, Error> {
        self.get(format!("/comments/{}", id).as_str(), None).await
    }

    pub async fn get_albums(&self) -> Result<ApiResponse<Vec<Album>>, Error> {
        self.get("/albums", None).await
    }

    pub async fn get_album(&self, id: i64) -> Result<ApiResponse<Album>, Error> {
        self.get(format!("/albums/{}", id).as_str(), None).await
    }

    pub async fn get_album_photos(&self, album_id: i64) -> Result<ApiResponse<Vec<Photo>>, Error> {
        self.get(format!("/albums/{}/photos", album_id).as_str(), None)
            .await
    }

    pub async fn get_photos(
        &self,
        query: Option<&PhotoQuery>,
    ) -> Result<ApiResponse<Vec<Photo>>, Error> {
        self.get("/photos", query.map(|q| q as &(dyn Query + Sync)))
            .await
    }

    pub async fn get_photo(&self, id: i64) -> Result<ApiResponse<Photo>, Error> {
        self.get(format!("/photos/{}", id).as_str(), None).await
    }

    /// Fetches todos, optionally filtered by owner and completion state.
    pub async fn get_todos(&self, query: Option<&TodoQuery>) -> Result<ApiResponse<Vec<Todo>>, Error> {
        self.get("/todos", query.map(|q| q as &(dyn Query + Sync)))
            .await
    }

    pub async fn get_todo(&self, id: i64) -> Result<ApiResponse<Todo>, Error> {
        self.get(format!("/todos/{}", id).as_str(), None).await
    }

    pub async fn get_users(&self) -> Result<ApiResponse<Vec<User>>, Error> {
        self.get("/users", None).await
    }

    pub async fn get_user(&self, id: i64) -> Result<ApiResponse<User>, Error> {
        self.get(format!("/users/{}", id).as_str(), None).await
    }

    pub async fn get_user_posts(&self, user_id: i64) -> Result<ApiResponse<Vec<Post>>, Error> {
        self.get(format!("/users/{}/posts", user_id).as_str(), None)
            .await
    }

    pub async fn get_user_todos(&self, user_id: i64) -> Result<ApiResponse<Vec<Todo>>, Error> {
        self.get(format!("/users/{}/todos", user_id).as_str(), None)
            .await
    }

    pub async fn get_user_albums(&self, user_id: i64) -> Result<ApiResponse<Vec<Album>>, Error> {
        self.get(format!("/users/{}/albums", user_id).as_str(), None)
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
