use crate::params::{self, Params};
use crate::time;
use serde_json::Value;

/// Fields for a new post.
///
/// [`NewPost::new`] fills the platform defaults: public visibility,
/// uncategorized, comments closed, no slogan or tag. Set any field before
/// submitting; `None` fields are omitted from the request entirely.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    /// Category id, `0` for uncategorized
    pub category: i64,
    /// `0` private, `1` protected, `3` public
    pub visibility: i64,
    /// `0` closed, `1` open
    pub accept_comment: i64,
    /// Custom URL slug
    pub slogan: Option<String>,
    /// Comma-separated tag list
    pub tag: Option<String>,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        NewPost {
            title: title.into(),
            content: content.into(),
            category: 0,
            visibility: 3,
            accept_comment: 0,
            slogan: None,
            tag: None,
        }
    }

    /// Endpoint-fixed fields in wire order, `published` stamped now
    pub(crate) fn params(&self) -> Params {
        let mut params = Params::new();
        params.insert("title".to_string(), Value::from(self.title.as_str()));
        params.insert("content".to_string(), Value::from(self.content.as_str()));
        params.insert("visibility".to_string(), Value::from(self.visibility));
        params.insert("category".to_string(), Value::from(self.category));
        params.insert("published".to_string(), Value::from(time::unix_now()));
        params.insert("slogan".to_string(), params::opt_str(self.slogan.as_deref()));
        params.insert("tag".to_string(), params::opt_str(self.tag.as_deref()));
        params.insert("acceptComment".to_string(), Value::from(self.accept_comment));
        params.insert("output".to_string(), Value::from("json"));
        params
    }
}

/// Fields for modifying an existing post.
///
/// [`UpdatePost::new`] fills the platform defaults for this endpoint:
/// private visibility, uncategorized, comments open.
#[derive(Debug, Clone)]
pub struct UpdatePost {
    pub post_id: i64,
    pub title: String,
    pub content: String,
    /// Category id, `0` for uncategorized
    pub category: i64,
    /// `0` private, `1` protected, `3` public
    pub visibility: i64,
    /// `0` closed, `1` open
    pub accept_comment: i64,
    /// Custom URL slug
    pub slogan: Option<String>,
    /// Comma-separated tag list
    pub tag: Option<String>,
}

impl UpdatePost {
    pub fn new(post_id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        UpdatePost {
            post_id,
            title: title.into(),
            content: content.into(),
            category: 0,
            visibility: 0,
            accept_comment: 1,
            slogan: None,
            tag: None,
        }
    }

    /// Endpoint-fixed fields in wire order, `published` stamped now
    pub(crate) fn params(&self) -> Params {
        let mut params = Params::new();
        params.insert("postId".to_string(), Value::from(self.post_id));
        params.insert("title".to_string(), Value::from(self.title.as_str()));
        params.insert("content".to_string(), Value::from(self.content.as_str()));
        params.insert("visibility".to_string(), Value::from(self.visibility));
        params.insert("category".to_string(), Value::from(self.category));
        params.insert("published".to_string(), Value::from(time::unix_now()));
        params.insert("slogan".to_string(), params::opt_str(self.slogan.as_deref()));
        params.insert("tag".to_string(), params::opt_str(self.tag.as_deref()));
        params.insert("acceptComment".to_string(), Value::from(self.accept_comment));
        params
    }
}
