use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

/// Body of `POST /posts`. The server assigns the id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    pub title: String,
    pub body: String,
    pub user_id: i64,
}

impl CreatePost {
    pub fn new(title: &str, body: &str, user_id: i64) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            user_id,
        }
    }
}

/// Body of `PUT` and `PATCH /posts/{id}`. Unset fields are left out of the request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl UpdatePost {
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

impl From<CreatePost> for UpdatePost {
    fn from(post: CreatePost) -> Self {
        Self {
            title: Some(post.title),
            body: Some(post.body),
            user_id: Some(post.user_id),
        }
    }
}

/// Response to `PUT` and `PATCH /posts/{id}`.
///
/// The upstream service echoes whatever it was sent, so a partial update may
/// come back with any field missing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdatedPost {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl UpdatedPost {
    /// Returns the full post when every field came back.
    pub fn into_post(self) -> Option<Post> {
        Some(Post {
            user_id: self.user_id?,
            id: self.id?,
            title: self.title?,
            body: self.body?,
        })
    }
}
