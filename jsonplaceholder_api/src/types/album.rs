use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
}
