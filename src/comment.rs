use crate::params::{self, Params};
use serde_json::Value;

/// Fields for a new comment.
///
/// Defaults to a public top-level comment; set `parent_id` to reply to
/// another comment, `secret` to `1` for a private one.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: i64,
    pub content: String,
    /// Comment to reply to, omitted for a top-level comment
    pub parent_id: Option<i64>,
    /// `0` public, `1` secret
    pub secret: i64,
}

impl NewComment {
    pub fn new(post_id: i64, content: impl Into<String>) -> Self {
        NewComment {
            post_id,
            content: content.into(),
            parent_id: None,
            secret: 0,
        }
    }

    /// Endpoint-fixed fields in wire order
    pub(crate) fn params(&self) -> Params {
        let mut params = Params::new();
        params.insert("postId".to_string(), Value::from(self.post_id));
        params.insert("parentId".to_string(), params::opt_i64(self.parent_id));
        params.insert("content".to_string(), Value::from(self.content.as_str()));
        params.insert("secret".to_string(), Value::from(self.secret));
        params.insert("output".to_string(), Value::from("json"));
        params
    }
}

/// Fields for modifying an existing comment
#[derive(Debug, Clone)]
pub struct UpdateComment {
    pub post_id: i64,
    pub comment_id: i64,
    pub content: String,
    /// Comment being replied to, omitted for a top-level comment
    pub parent_id: Option<i64>,
    /// `0` public, `1` secret
    pub secret: i64,
}

impl UpdateComment {
    pub fn new(post_id: i64, comment_id: i64, content: impl Into<String>) -> Self {
        UpdateComment {
            post_id,
            comment_id,
            content: content.into(),
            parent_id: None,
            secret: 0,
        }
    }

    /// Endpoint-fixed fields in wire order
    pub(crate) fn params(&self) -> Params {
        let mut params = Params::new();
        params.insert("postId".to_string(), Value::from(self.post_id));
        params.insert("parentId".to_string(), params::opt_i64(self.parent_id));
        params.insert("commentId".to_string(), Value::from(self.comment_id));
        params.insert("content".to_string(), Value::from(self.content.as_str()));
        params.insert("secret".to_string(), Value::from(self.secret));
        params
    }
}
