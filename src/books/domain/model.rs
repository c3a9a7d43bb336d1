use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

// BookEntity is the persistent shape of a book. The identifier is the
// store-assigned `_id` and is absent until the document has been inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub isbn: String,
    pub title: String,
    pub author: String,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            id: None,
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}
