use url::Url;

use super::{common::append_pair, Query};

/// Filter for `GET /comments`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CommentQuery {
    pub post_id: Option<i64>,
}

impl Query for CommentQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(post_id) = self.post_id {
            append_pair(&mut url, "postId", post_id);
        }
        url
    }

    fn is_empty(&self) -> bool {
        self.post_id.is_none()
    }
}

impl CommentQuery {
    pub fn with_post_id(mut self, post_id: i64) -> Self {
        self.post_id = Some(post_id);
        self
    }
}
