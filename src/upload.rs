use crate::error::{Error, Result};
use crate::params::{self, Params};
use crate::response::{ApiResult, ResponseMode};
use reqwest::blocking::multipart::Form;
use reqwest::blocking::Client;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// POST a file as the `uploadedfile` multipart part, with the remaining
/// parameters as plain form fields.
///
/// The file is opened while the form is built, before the request is
/// issued, so an unreadable path fails without touching the network. The
/// handle is owned by the request body and closed on every exit path,
/// including transport failure.
pub(crate) fn attach(
    client: &Client,
    url: &str,
    request: Params,
    file_path: &Path,
    mode: ResponseMode,
) -> Result<ApiResult> {
    let mut form = Form::new();
    for (key, value) in params::to_pairs(&request) {
        form = form.text(key, value);
    }
    let form = form
        .file("uploadedfile", file_path)
        .map_err(|source| Error::FileAccess {
            path: file_path.to_path_buf(),
            source,
        })?;

    let started = Instant::now();
    let response = client.post(url).multipart(form).send()?;
    debug!(
        url,
        status = response.status().as_u16(),
        elapsed = ?started.elapsed(),
        "POST multipart"
    );

    ApiResult::read(response, mode)
}
