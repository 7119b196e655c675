use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Output shape for endpoint calls, selected once when the client is
/// built and applied uniformly to every endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    /// The decoded JSON body only
    #[default]
    Simple,
    /// The full HTTP envelope: headers, decoded body, status code
    Raw,
}

/// Full HTTP envelope returned in [`ResponseMode::Raw`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawResponse {
    /// Response headers, lowercased names
    pub headers: HashMap<String, String>,
    /// Decoded JSON body
    pub body: Value,
    /// HTTP status code
    pub status_code: u16,
}

/// Result of an endpoint call, shaped per the client's [`ResponseMode`].
///
/// The remote API's own error envelope inside a decodable body passes
/// through verbatim; only transport and decoding failures become errors.
#[derive(Debug, Clone)]
pub enum ApiResult {
    /// The decoded JSON body
    Simple(Value),
    /// The full HTTP envelope
    Raw(RawResponse),
}

impl ApiResult {
    /// Normalize an HTTP response into the shape selected by `mode`.
    ///
    /// A body that is not valid JSON is an error, never an empty result.
    pub(crate) fn read(response: reqwest::blocking::Response, mode: ResponseMode) -> Result<Self> {
        let status_code = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                Some((name.to_string(), value.to_str().ok()?.to_string()))
            })
            .collect();

        let text = response.text()?;
        let body: Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(source) => {
                return Err(Error::Decode {
                    status: status_code,
                    body: text,
                    source,
                })
            }
        };

        Ok(match mode {
            ResponseMode::Simple => ApiResult::Simple(body),
            ResponseMode::Raw => ApiResult::Raw(RawResponse {
                headers,
                body,
                status_code,
            }),
        })
    }

    /// Get the decoded JSON body, regardless of shape
    pub fn body(&self) -> &Value {
        match self {
            ApiResult::Simple(body) => body,
            ApiResult::Raw(raw) => &raw.body,
        }
    }

    /// Consume the result and return the decoded JSON body
    pub fn into_body(self) -> Value {
        match self {
            ApiResult::Simple(body) => body,
            ApiResult::Raw(raw) => raw.body,
        }
    }

    /// HTTP status code, available in raw shape only
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiResult::Simple(_) => None,
            ApiResult::Raw(raw) => Some(raw.status_code),
        }
    }

    /// Response headers, available in raw shape only
    pub fn headers(&self) -> Option<&HashMap<String, String>> {
        match self {
            ApiResult::Simple(_) => None,
            ApiResult::Raw(raw) => Some(&raw.headers),
        }
    }

    /// Get a value from the body by a slash-separated path.
    /// For example, `"tistory/item/title"` accesses the `title` field
    /// inside the `item` object inside the `tistory` object.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let mut current = self.body();

        for part in parts {
            current = match current {
                Value::Object(map) => map.get(part)?,
                Value::Array(arr) => {
                    let index: usize = part.parse().ok()?;
                    arr.get(index)?
                }
                _ => return None,
            };
        }

        Some(current)
    }

    /// Get a string value from the body by a slash-separated path
    pub fn get_string(&self, path: &str) -> Option<String> {
        self.get(path).and_then(|v| v.as_str().map(|s| s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn blog_info() -> Value {
        json!({
            "tistory": {
                "status": "200",
                "item": {
                    "title": "sandbox blog",
                    "blogs": [{"name": "sandbox"}]
                }
            }
        })
    }

    #[test]
    fn test_simple_body_access() {
        let result = ApiResult::Simple(blog_info());
        assert_eq!(result.status_code(), None);
        assert!(result.headers().is_none());
        assert_eq!(result.body()["tistory"]["status"], json!("200"));
    }

    #[test]
    fn test_raw_envelope_access() {
        let result = ApiResult::Raw(RawResponse {
            headers: HashMap::from([("content-type".to_string(), "application/json".to_string())]),
            body: blog_info(),
            status_code: 200,
        });

        assert_eq!(result.status_code(), Some(200));
        assert_eq!(
            result.headers().unwrap().get("content-type").unwrap(),
            "application/json"
        );
        assert_eq!(result.body()["tistory"]["status"], json!("200"));
    }

    #[test]
    fn test_get_path() {
        let result = ApiResult::Simple(blog_info());
        assert_eq!(
            result.get_string("tistory/item/title"),
            Some("sandbox blog".to_string())
        );
        assert_eq!(
            result.get("tistory/item/blogs/0/name"),
            Some(&json!("sandbox"))
        );
        assert_eq!(result.get("tistory/missing"), None);
    }

    #[test]
    fn test_into_body() {
        let result = ApiResult::Raw(RawResponse {
            headers: HashMap::new(),
            body: json!({"a": 1}),
            status_code: 200,
        });
        assert_eq!(result.into_body(), json!({"a": 1}));
    }
}
