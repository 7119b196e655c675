use crate::auth;
use crate::client::{create_api_client, Config};
use crate::comment::{NewComment, UpdateComment};
use crate::error::Result;
use crate::params::{self, Params};
use crate::post::{NewPost, UpdatePost};
use crate::response::ApiResult;
use crate::upload;
use reqwest::blocking::Client;
use serde_json::Value;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Client for the Tistory blog API.
///
/// Holds the blog configuration and the access token; each method maps to
/// a single API endpoint, issues one blocking HTTP request, and returns
/// the response shaped per [`Config::response_mode`].
///
/// The client itself keeps no state across calls. Sharing one instance
/// between threads is fine for requests; swapping the access token while
/// other threads are calling is the caller's to synchronize.
#[derive(Debug, Clone)]
pub struct Tistory {
    /// HTTP client
    http: Client,
    /// Configuration
    pub config: Config,
    /// OAuth2 access token sent with every request
    access_token: Option<String>,
}

impl Tistory {
    /// Create a client for the given blog with the platform defaults
    pub fn new(blog_name: impl Into<String>) -> Self {
        Self::with_config(Config::new(blog_name))
    }

    /// Create a client with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Tistory {
            http: create_api_client(),
            config,
            access_token: None,
        }
    }

    /// Set the access token, builder style
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Replace the access token used by subsequent requests.
    ///
    /// Requests read the token current at call time, so a token obtained
    /// after construction is picked up without rebuilding the client.
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = Some(token.into());
    }

    /// The current access token, if one is set
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// OAuth2 authorization-code URL for this client's base URL.
    ///
    /// See [`auth::authorize_url`]; the URL is returned, never fetched.
    pub fn authorize_url(&self, client_id: &str, redirect_uri: &str) -> String {
        auth::authorize_url(&self.config.base_url, client_id, redirect_uri)
    }

    /// Parameters shared by every endpoint, reflecting the current token.
    /// An unset token is omitted from the request.
    fn base_params(&self) -> Params {
        let mut params = Params::new();
        params.insert(
            "access_token".to_string(),
            params::opt_str(self.access_token.as_deref()),
        );
        params.insert(
            "blogName".to_string(),
            Value::from(self.config.blog_name.as_str()),
        );
        params.insert("output".to_string(), Value::from("json"));
        params
    }

    /// Merge fixed fields, base parameters, and caller extras, in that
    /// order of precedence
    fn finish_params(&self, mut fixed: Params, extra: Params) -> Params {
        params::merge(&mut fixed, self.base_params());
        params::merge(&mut fixed, extra);
        fixed
    }

    fn get(&self, path: &str, request: Params) -> Result<ApiResult> {
        let url = format!("{}{}", self.config.api_base_url, path);
        let query = params::to_pairs(&request);

        let started = Instant::now();
        let response = self.http.get(url).query(&query).send()?;
        debug!(
            path,
            status = response.status().as_u16(),
            elapsed = ?started.elapsed(),
            "GET"
        );

        ApiResult::read(response, self.config.response_mode)
    }

    fn post(&self, path: &str, request: Params) -> Result<ApiResult> {
        let url = format!("{}{}", self.config.api_base_url, path);
        let form = params::to_pairs(&request);

        let started = Instant::now();
        let response = self.http.post(url).form(&form).send()?;
        debug!(
            path,
            status = response.status().as_u16(),
            elapsed = ?started.elapsed(),
            "POST"
        );

        ApiResult::read(response, self.config.response_mode)
    }

    /// Read information about the configured blog.
    ///
    /// `extra` fields are merged last on every endpoint and override any
    /// field of the request on name collision — including `access_token`
    /// and `blogName`, so pass overrides for those deliberately.
    pub fn read_blog_info(&self, extra: Params) -> Result<ApiResult> {
        let request = self.finish_params(Params::new(), extra);
        self.get("/blog/info", request)
    }

    /// List the blog's categories
    pub fn list_categories(&self, extra: Params) -> Result<ApiResult> {
        let request = self.finish_params(Params::new(), extra);
        self.get("/category/list", request)
    }

    /// Publish a new post. The `published` timestamp is stamped when the
    /// request is built.
    pub fn create_post(&self, post: &NewPost, extra: Params) -> Result<ApiResult> {
        let request = self.finish_params(post.params(), extra);
        self.post("/post/write", request)
    }

    /// Read a single post
    pub fn read_post(&self, post_id: i64, extra: Params) -> Result<ApiResult> {
        let mut fixed = Params::new();
        fixed.insert("postId".to_string(), Value::from(post_id));
        let request = self.finish_params(fixed, extra);
        self.get("/post/read", request)
    }

    /// List posts. Page numbering starts at 1.
    pub fn list_posts(&self, page: i64, extra: Params) -> Result<ApiResult> {
        let mut fixed = Params::new();
        fixed.insert("page".to_string(), Value::from(page));
        let request = self.finish_params(fixed, extra);
        self.get("/post/list", request)
    }

    /// Modify an existing post. The `published` timestamp is stamped when
    /// the request is built.
    pub fn update_post(&self, post: &UpdatePost, extra: Params) -> Result<ApiResult> {
        let request = self.finish_params(post.params(), extra);
        self.post("/post/modify", request)
    }

    /// Upload a file as a post attachment.
    ///
    /// The file is opened before any HTTP request is made; an unreadable
    /// path fails with [`crate::Error::FileAccess`] without touching the
    /// network.
    pub fn attach_file(&self, file_path: impl AsRef<Path>, extra: Params) -> Result<ApiResult> {
        let url = format!("{}{}", self.config.api_base_url, "/post/attach");
        let request = self.finish_params(Params::new(), extra);
        upload::attach(
            &self.http,
            &url,
            request,
            file_path.as_ref(),
            self.config.response_mode,
        )
    }

    /// Write a comment on a post
    pub fn create_comment(&self, comment: &NewComment, extra: Params) -> Result<ApiResult> {
        let request = self.finish_params(comment.params(), extra);
        self.post("/comment/write", request)
    }

    /// List the comments on a post
    pub fn list_comments(&self, post_id: i64, extra: Params) -> Result<ApiResult> {
        let mut fixed = Params::new();
        fixed.insert("postId".to_string(), Value::from(post_id));
        let request = self.finish_params(fixed, extra);
        self.get("/comment/list", request)
    }

    /// Modify an existing comment
    pub fn update_comment(&self, comment: &UpdateComment, extra: Params) -> Result<ApiResult> {
        let request = self.finish_params(comment.params(), extra);
        self.post("/comment/modify", request)
    }

    /// Delete a comment
    pub fn delete_comment(&self, post_id: i64, comment_id: i64, extra: Params) -> Result<ApiResult> {
        let mut fixed = Params::new();
        fixed.insert("postId".to_string(), Value::from(post_id));
        fixed.insert("commentId".to_string(), Value::from(comment_id));
        fixed.insert("output".to_string(), Value::from("json"));
        let request = self.finish_params(fixed, extra);
        self.post("/comment/delete", request)
    }
}
