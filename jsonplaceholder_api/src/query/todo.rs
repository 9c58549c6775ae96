use url::Url;

use super::{common::append_pair, Query};

/// Filter for `GET /todos`. Both filters may be combined.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TodoQuery {
    pub user_id: Option<i64>,
    pub completed: Option<bool>,
}

impl Query for TodoQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(user_id) = self.user_id {
            append_pair(&mut url, "userId", user_id);
        }
        if let Some(completed) = self.completed {
            append_pair(&mut url, "completed", completed);
        }
        url
    }

    fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.completed.is_none()
    }
}

impl TodoQuery {
    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}
