use url::Url;

use super::{common::append_pair, Query};

/// Filter for `GET /photos`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhotoQuery {
    pub album_id: Option<i64>,
}

impl Query for PhotoQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(album_id) = self.album_id {
            append_pair(&mut url, "albumId", album_id);
        }
        url
    }

    fn is_empty(&self) -> bool {
        self.album_id.is_none()
    }
}

impl PhotoQuery {
    pub fn with_album_id(mut self, album_id: i64) -> Self {
        self.album_id = Some(album_id);
        self
    }
}
