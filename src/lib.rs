//! # tistory - Tistory Blog API Client
//!
//! A Rust client for the [Tistory](https://www.tistory.com) blog platform
//! REST API. This library covers the OAuth2 authorization URL, blog
//! information, posts, comments, categories, and file attachments, and
//! shapes every response the same way: either the decoded JSON body, or
//! the full HTTP envelope.
//!
//! ## Features
//!
//! - One method per API endpoint, all returning a uniform [`ApiResult`]
//! - OAuth2 authorization-code URL construction
//! - Simple or raw response shaping, chosen once at construction
//! - Multipart file attachments
//! - Per-call extra parameters merged into any request
//!
//! ## Basic Usage
//!
//! ```no_run
//! use tistory::{Params, Tistory};
//!
//! fn main() -> tistory::Result<()> {
//!     let api = Tistory::new("myblog").with_access_token("access-token");
//!
//!     let info = api.read_blog_info(Params::new())?;
//!     println!("blog info: {}", info.body());
//!
//!     let posts = api.list_posts(1, Params::new())?;
//!     if let Some(count) = posts.get_string("tistory/item/count") {
//!         println!("{count} posts");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Writing a post
//!
//! ```no_run
//! use tistory::{json, NewPost, Params, Tistory};
//!
//! # fn main() -> tistory::Result<()> {
//! let api = Tistory::new("myblog").with_access_token("access-token");
//!
//! let mut post = NewPost::new("Hello", "<p>First post</p>");
//! post.tag = Some("rust,api".to_string());
//!
//! // Extra fields are merged last and override anything, including the
//! // defaults above and the shared base parameters.
//! let extra = Params::from([("category".to_string(), json!(5))]);
//! api.create_post(&post, extra)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Authorization
//!
//! The library builds the authorization URL but never fetches it; redirect
//! a user-agent there and exchange the resulting code for an access token
//! out of band.
//!
//! ```
//! use tistory::Tistory;
//!
//! let api = Tistory::new("myblog");
//! let url = api.authorize_url("client-id", "https://example.com/callback");
//! assert!(url.starts_with("https://www.tistory.com/oauth/authorize?"));
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod comment;
pub mod error;
pub mod params;
pub mod post;
pub mod response;
mod time;
mod upload;

// Re-export main types for convenience
pub use api::Tistory;
pub use auth::authorize_url;
pub use client::Config;
pub use comment::{NewComment, UpdateComment};
pub use error::{Error, Result};
pub use params::Params;
pub use post::{NewPost, UpdatePost};
pub use response::{ApiResult, RawResponse, ResponseMode};

// Re-export serde_json for convenience
pub use serde_json::json;
