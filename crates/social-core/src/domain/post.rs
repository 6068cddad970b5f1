use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity as exposed by the API.
///
/// Carries exactly the column set the endpoints select (`id, content, likes,
/// created`); the soft-delete flag stays inside the storage layer and never
/// appears in a response body. Field order matches the select list, which
/// fixes the key order of the serialized JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub content: String,
    pub likes: i32,
    pub created: DateTime<Utc>,
}
