use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub album_id: i64,
    pub id: i64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}
